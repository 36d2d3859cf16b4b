//! Keyboard handling: maps crossterm key events onto the UI-agnostic menu
//! and round inputs for whichever screen is showing.

use crate::app::{App, Screen};
use crate::audio::AudioSession;
use crate::games::session::process_input;
use crate::games::{GameMode, MenuInput, MenuResult, RoundInput};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use rand::Rng;

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

pub fn handle_key<R: Rng>(key: KeyEvent, app: &mut App<R>, audio: &mut AudioSession) -> InputResult {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    if key.code == KeyCode::Tab {
        audio.toggle();
        return InputResult::Continue;
    }

    match app.screen {
        Screen::Splash => handle_splash(key, app),
        Screen::GameSelect => handle_game_select(key, app),
        Screen::Game => handle_game(key, app, audio),
    }
}

fn handle_splash<R: Rng>(key: KeyEvent, app: &mut App<R>) -> InputResult {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.open_menu(),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return InputResult::Quit,
        _ => {}
    }
    InputResult::Continue
}

fn handle_game_select<R: Rng>(key: KeyEvent, app: &mut App<R>) -> InputResult {
    let input = match key.code {
        KeyCode::Up | KeyCode::Left => MenuInput::Up,
        KeyCode::Down | KeyCode::Right => MenuInput::Down,
        KeyCode::Enter => MenuInput::Select,
        KeyCode::Esc => MenuInput::Cancel,
        KeyCode::Char('q') | KeyCode::Char('Q') => return InputResult::Quit,
        _ => MenuInput::Other,
    };

    match app.menu.process_input(input) {
        MenuResult::Start(mode) => {
            if let Err(e) = app.start_game(mode) {
                tracing::error!(mode = mode.id(), error = %e, "could not start game");
            }
        }
        MenuResult::Back => app.back_to_splash(),
        MenuResult::Stay => {}
    }
    InputResult::Continue
}

/// Map a key to a round input for `mode`.
pub fn round_input(key: KeyEvent, mode: GameMode) -> RoundInput {
    match key.code {
        KeyCode::Left => RoundInput::Left,
        KeyCode::Right => RoundInput::Right,
        KeyCode::Char(' ') => RoundInput::Pick,
        KeyCode::Enter => match mode {
            GameMode::Words => RoundInput::Check,
            _ => RoundInput::Pick,
        },
        KeyCode::Char('[') | KeyCode::PageUp => RoundInput::Previous,
        KeyCode::Char(']') | KeyCode::PageDown => RoundInput::Next,
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let digit = c.to_digit(10).unwrap_or(0);
            match mode {
                GameMode::Numbers => RoundInput::Number(digit),
                _ if digit >= 1 => RoundInput::PickIndex(digit as usize - 1),
                _ => RoundInput::Other,
            }
        }
        KeyCode::Char(c) if c.is_ascii_alphabetic() && mode == GameMode::Words => {
            RoundInput::Letter(c)
        }
        _ => RoundInput::Other,
    }
}

fn handle_game<R: Rng>(key: KeyEvent, app: &mut App<R>, audio: &mut AudioSession) -> InputResult {
    if key.code == KeyCode::Esc {
        app.leave_game();
        return InputResult::Continue;
    }

    let Some(session) = app.session.as_mut() else {
        app.open_menu();
        return InputResult::Continue;
    };

    let input = round_input(key, session.mode());
    if let Err(rejection) = process_input(session, input, audio) {
        tracing::debug!(?input, %rejection, "input ignored");
    }
    InputResult::Continue
}
