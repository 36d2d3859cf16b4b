//! Screen flow: splash, game select, and the running game.

use crate::games::{start_session, GameMenu, GameMode, GameSession};
use crate::round::{CatalogError, RoundEvent, RoundTiming};
use rand::Rng;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    GameSelect,
    Game,
}

pub struct App<R> {
    pub screen: Screen,
    pub menu: GameMenu,
    /// Present only while `screen` is `Game`.
    pub session: Option<GameSession>,
    timing: RoundTiming,
    rng: R,
}

impl<R: Rng> App<R> {
    pub fn new(timing: RoundTiming, rng: R) -> Self {
        Self {
            screen: Screen::Splash,
            menu: GameMenu::new(),
            session: None,
            timing,
            rng,
        }
    }

    pub fn open_menu(&mut self) {
        self.screen = Screen::GameSelect;
    }

    pub fn back_to_splash(&mut self) {
        self.session = None;
        self.screen = Screen::Splash;
    }

    /// Start `mode` with a fresh shuffle. On failure the menu stays up.
    pub fn start_game(&mut self, mode: GameMode) -> Result<(), CatalogError> {
        let session = start_session(mode, self.timing, &mut self.rng)?;
        self.session = Some(session);
        self.screen = Screen::Game;
        Ok(())
    }

    /// Leave the running game. Dropping the session cancels its timers.
    pub fn leave_game(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(
                mode = session.mode().id(),
                reached = session.round.current_index() + 1,
                finished = session.round.is_finished(),
                "left game"
            );
        }
        self.screen = Screen::GameSelect;
    }

    /// Advance the running game's timers, if any.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<RoundEvent> {
        match self.session.as_mut() {
            Some(session) => session.tick(elapsed),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn app() -> App<ChaCha8Rng> {
        App::new(RoundTiming::default(), ChaCha8Rng::seed_from_u64(7))
    }

    #[test]
    fn test_starts_on_splash() {
        let app = app();
        assert_eq!(app.screen, Screen::Splash);
        assert!(app.session.is_none());
    }

    #[test]
    fn test_start_and_leave_game() {
        let mut app = app();
        app.open_menu();
        app.start_game(GameMode::Words).unwrap();
        assert_eq!(app.screen, Screen::Game);
        assert_eq!(app.session.as_ref().map(|s| s.mode()), Some(GameMode::Words));

        app.leave_game();
        assert_eq!(app.screen, Screen::GameSelect);
        assert!(app.session.is_none());
    }

    #[test]
    fn test_tick_without_session_is_quiet() {
        let mut app = app();
        assert!(app.tick(Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_each_start_reshuffles() {
        let mut app = app();
        let mut orders = Vec::new();
        for _ in 0..5 {
            app.start_game(GameMode::Picture).unwrap();
            let Some(session) = app.session.as_ref() else {
                panic!("session should be running");
            };
            let crate::games::ActiveRound::Picture(engine) = &session.round else {
                panic!("expected picture round");
            };
            orders.push(engine.questions().catalog_order().to_vec());
        }
        assert!(orders.windows(2).any(|w| w[0] != w[1]));
    }
}
