pub mod game_common;
pub mod game_select_scene;
pub mod round_scene;
pub mod splash_scene;

use crate::app::{App, Screen};
use crate::games::GameMode;
use ratatui::{style::Color, Frame};

/// Header color for each game.
pub fn game_mode_color(mode: GameMode) -> Color {
    match mode {
        GameMode::Numbers => Color::Rgb(0x6E, 0xC5, 0xFF),
        GameMode::Words => Color::Rgb(0xFF, 0x9F, 0x43),
        GameMode::Picture => Color::Rgb(0x4C, 0xAF, 0x50),
    }
}

/// Draw whichever screen is showing.
pub fn draw<R>(frame: &mut Frame, app: &App<R>, sound_on: bool) {
    let area = frame.size();
    match app.screen {
        Screen::Splash => splash_scene::render_splash(frame, area, sound_on),
        Screen::GameSelect => game_select_scene::render_game_select(frame, area, &app.menu),
        Screen::Game => match app.session.as_ref() {
            Some(session) => round_scene::render_round(frame, area, session, sound_on),
            None => game_select_scene::render_game_select(frame, area, &app.menu),
        },
    }
}
