//! One running game: the round engine for the chosen mode plus the option
//! cursor the player moves around.

use super::{numbers, picture, words, GameMode, NumberQuestion, PictureQuestion, WordQuestion};
use crate::round::{
    CatalogError, EffectPlayer, QuestionSet, RoundEngine, RoundEvent, RoundRejection, RoundTiming,
};
use rand::Rng;
use std::time::Duration;

/// Input actions for a running game (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundInput {
    Left,
    Right,
    /// Pick the option under the cursor, or check a full word.
    Pick,
    /// Pick by position (0-based).
    PickIndex(usize),
    /// Pick an option by its value (numbers game).
    Number(u32),
    /// Pick a letter tile by its letter (word game).
    Letter(char),
    Check,
    Previous,
    Next,
    Other,
}

/// The engine for whichever mode is running.
#[derive(Debug, Clone)]
pub enum ActiveRound {
    Numbers(RoundEngine<NumberQuestion>),
    Words(RoundEngine<WordQuestion>),
    Picture(RoundEngine<PictureQuestion>),
}

/// Run `$body` with `$engine` bound to the inner engine, whatever its mode.
macro_rules! with_engine {
    ($round:expr, $engine:ident => $body:expr) => {
        match $round {
            ActiveRound::Numbers($engine) => $body,
            ActiveRound::Words($engine) => $body,
            ActiveRound::Picture($engine) => $body,
        }
    };
}

impl ActiveRound {
    pub fn mode(&self) -> GameMode {
        match self {
            Self::Numbers(_) => GameMode::Numbers,
            Self::Words(_) => GameMode::Words,
            Self::Picture(_) => GameMode::Picture,
        }
    }

    pub fn current_index(&self) -> usize {
        with_engine!(self, e => e.current_index())
    }

    pub fn len(&self) -> usize {
        with_engine!(self, e => e.len())
    }

    pub fn is_empty(&self) -> bool {
        with_engine!(self, e => e.is_empty())
    }

    pub fn option_count(&self) -> usize {
        with_engine!(self, e => e.question().options.len())
    }

    pub fn score(&self) -> u32 {
        with_engine!(self, e => e.score())
    }

    pub fn is_finished(&self) -> bool {
        with_engine!(self, e => e.is_finished())
    }

    pub fn has_pending_timers(&self) -> bool {
        with_engine!(self, e => e.has_pending_timers())
    }

    pub fn tick(&mut self, elapsed: Duration) -> Vec<RoundEvent> {
        with_engine!(self, e => e.tick(elapsed))
    }

    pub fn go_next(&mut self) -> bool {
        with_engine!(self, e => e.go_next())
    }

    pub fn go_previous(&mut self) -> bool {
        with_engine!(self, e => e.go_previous())
    }

    pub fn can_evaluate(&self) -> bool {
        with_engine!(self, e => e.can_evaluate())
    }

    fn select_option(
        &mut self,
        index: usize,
        effects: &mut dyn EffectPlayer,
    ) -> Result<(), RoundRejection> {
        with_engine!(self, e => e.select_option(index, effects).map(|_| ()))
    }

    fn evaluate(&mut self, effects: &mut dyn EffectPlayer) -> Result<(), RoundRejection> {
        with_engine!(self, e => e.evaluate(effects).map(|_| ()))
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    pub round: ActiveRound,
    /// Option tile under the cursor.
    pub cursor: usize,
}

impl GameSession {
    pub fn new(round: ActiveRound) -> Self {
        Self { round, cursor: 0 }
    }

    pub fn mode(&self) -> GameMode {
        self.round.mode()
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor + 1 < self.round.option_count() {
            self.cursor += 1;
        }
    }

    /// Advance timers; resets the cursor when the question changes.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<RoundEvent> {
        let events = self.round.tick(elapsed);
        if events
            .iter()
            .any(|e| matches!(e, RoundEvent::Advanced { .. }))
        {
            self.cursor = 0;
        }
        events
    }
}

/// Build a new session for `mode` with a freshly shuffled question set.
pub fn start_session<R: Rng + ?Sized>(
    mode: GameMode,
    timing: RoundTiming,
    rng: &mut R,
) -> Result<GameSession, CatalogError> {
    let config = mode.round_config(timing);
    let round = match mode {
        GameMode::Numbers => {
            ActiveRound::Numbers(RoundEngine::new(QuestionSet::create(numbers::catalog(), rng)?, config))
        }
        GameMode::Words => {
            ActiveRound::Words(RoundEngine::new(QuestionSet::create(words::catalog(), rng)?, config))
        }
        GameMode::Picture => ActiveRound::Picture(RoundEngine::new(
            QuestionSet::create(picture::catalog(), rng)?,
            config,
        )),
    };
    tracing::info!(mode = mode.id(), questions = round.len(), "game session started");
    Ok(GameSession::new(round))
}

/// Apply one input to a running game.
///
/// Rejections leave the game untouched; they are returned so the caller can
/// log them, but need no handling.
pub fn process_input(
    session: &mut GameSession,
    input: RoundInput,
    effects: &mut dyn EffectPlayer,
) -> Result<(), RoundRejection> {
    match input {
        RoundInput::Left => session.move_cursor_left(),
        RoundInput::Right => session.move_cursor_right(),
        RoundInput::Pick => {
            if session.round.can_evaluate() {
                return session.round.evaluate(effects);
            }
            return session.round.select_option(session.cursor, effects);
        }
        RoundInput::PickIndex(index) => {
            session.cursor = index.min(session.round.option_count().saturating_sub(1));
            return session.round.select_option(index, effects);
        }
        RoundInput::Number(value) => {
            if let ActiveRound::Numbers(engine) = &mut session.round {
                if let Some(index) = engine.question().options.iter().position(|&o| o == value) {
                    session.cursor = index;
                }
                engine.select_candidate(&value, effects).map(|_| ())?;
            }
        }
        RoundInput::Letter(letter) => {
            if let ActiveRound::Words(engine) = &mut session.round {
                engine
                    .select_candidate(&letter.to_ascii_lowercase(), effects)
                    .map(|_| ())?;
            }
        }
        RoundInput::Check => return session.round.evaluate(effects),
        RoundInput::Previous => {
            if session.round.go_previous() {
                session.cursor = 0;
            }
        }
        RoundInput::Next => {
            if session.round.go_next() {
                session.cursor = 0;
            }
        }
        RoundInput::Other => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::{NoEffects, Outcome, Question, RoundPhase};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn session(mode: GameMode) -> GameSession {
        start_session(mode, RoundTiming::default(), &mut seeded_rng()).unwrap()
    }

    #[test]
    fn test_start_session_each_mode() {
        for mode in GameMode::ALL {
            let s = session(mode);
            assert_eq!(s.mode(), mode);
            assert_eq!(s.cursor, 0);
            assert_eq!(s.round.current_index(), 0);
            assert!(!s.round.is_finished());
        }
        assert_eq!(session(GameMode::Numbers).round.len(), 6);
        assert_eq!(session(GameMode::Words).round.len(), 10);
        assert_eq!(session(GameMode::Picture).round.len(), 10);
    }

    #[test]
    fn test_cursor_stays_on_tiles() {
        let mut s = session(GameMode::Picture);
        s.move_cursor_left();
        assert_eq!(s.cursor, 0);
        for _ in 0..10 {
            s.move_cursor_right();
        }
        assert_eq!(s.cursor, s.round.option_count() - 1);
    }

    #[test]
    fn test_pick_correct_option_under_cursor() {
        let mut s = session(GameMode::Numbers);
        let ActiveRound::Numbers(engine) = &s.round else {
            panic!("expected numbers");
        };
        let answer = engine.question().answer;
        let index = engine
            .question()
            .options()
            .iter()
            .position(|&o| o == answer)
            .unwrap();

        for _ in 0..index {
            process_input(&mut s, RoundInput::Right, &mut NoEffects).unwrap();
        }
        process_input(&mut s, RoundInput::Pick, &mut NoEffects).unwrap();

        let ActiveRound::Numbers(engine) = &s.round else {
            panic!("expected numbers");
        };
        assert_eq!(engine.outcome(), Some(Outcome::Correct));
    }

    #[test]
    fn test_word_letters_then_pick_checks() {
        let mut s = session(GameMode::Words);
        let ActiveRound::Words(engine) = &s.round else {
            panic!("expected words");
        };
        let letters = engine.question().expected();

        for letter in &letters {
            process_input(&mut s, RoundInput::Letter(letter.to_ascii_uppercase()), &mut NoEffects)
                .unwrap();
        }
        assert!(s.round.can_evaluate());
        process_input(&mut s, RoundInput::Pick, &mut NoEffects).unwrap();

        let ActiveRound::Words(engine) = &s.round else {
            panic!("expected words");
        };
        assert_eq!(engine.phase(), RoundPhase::Feedback(Outcome::Correct));
    }

    #[test]
    fn test_number_input_picks_by_value() {
        let mut s = session(GameMode::Numbers);
        let ActiveRound::Numbers(engine) = &s.round else {
            panic!("expected numbers");
        };
        let answer = engine.question().answer;
        let index = engine
            .question()
            .options
            .iter()
            .position(|&o| o == answer)
            .unwrap();

        process_input(&mut s, RoundInput::Number(answer), &mut NoEffects).unwrap();
        assert_eq!(s.cursor, index);
        let ActiveRound::Numbers(engine) = &s.round else {
            panic!("expected numbers");
        };
        assert_eq!(engine.outcome(), Some(Outcome::Correct));
    }

    #[test]
    fn test_number_not_offered_is_rejected() {
        let mut s = session(GameMode::Numbers);
        assert_eq!(
            process_input(&mut s, RoundInput::Number(99), &mut NoEffects),
            Err(RoundRejection::NotAnOption)
        );
        assert_eq!(s.round.current_index(), 0);
    }

    #[test]
    fn test_check_before_full_is_rejected() {
        let mut s = session(GameMode::Words);
        assert_eq!(
            process_input(&mut s, RoundInput::Check, &mut NoEffects),
            Err(RoundRejection::IncompleteSelection)
        );
    }

    #[test]
    fn test_advance_resets_cursor() {
        let mut s = session(GameMode::Numbers);
        let ActiveRound::Numbers(engine) = &s.round else {
            panic!("expected numbers");
        };
        let answer = engine.question().answer;
        let index = engine
            .question()
            .options
            .iter()
            .position(|&o| o == answer)
            .unwrap();

        process_input(&mut s, RoundInput::PickIndex(index), &mut NoEffects).unwrap();
        assert_eq!(s.cursor, index);
        s.tick(Duration::from_millis(2000));
        assert_eq!(s.round.current_index(), 1);
        assert_eq!(s.cursor, 0);
    }

    #[test]
    fn test_navigation_inputs() {
        let mut s = session(GameMode::Picture);
        process_input(&mut s, RoundInput::Next, &mut NoEffects).unwrap();
        assert_eq!(s.round.current_index(), 1);
        process_input(&mut s, RoundInput::Previous, &mut NoEffects).unwrap();
        assert_eq!(s.round.current_index(), 0);

        process_input(&mut s, RoundInput::Right, &mut NoEffects).unwrap();
        process_input(&mut s, RoundInput::Previous, &mut NoEffects).unwrap();
        assert_eq!(s.round.current_index(), 0);
        assert_eq!(s.cursor, 1);
    }
}
