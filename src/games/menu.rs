//! Game select menu: choose which game to play.

use super::GameMode;

/// Input actions for the game select menu (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Select,
    Cancel,
    Other,
}

/// What the menu asks the shell to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuResult {
    Stay,
    Start(GameMode),
    Back,
}

#[derive(Debug, Clone, Default)]
pub struct GameMenu {
    pub selected_index: usize,
}

impl GameMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> GameMode {
        GameMode::from_index(self.selected_index)
    }

    pub fn navigate_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn navigate_down(&mut self) {
        if self.selected_index + 1 < GameMode::ALL.len() {
            self.selected_index += 1;
        }
    }

    pub fn process_input(&mut self, input: MenuInput) -> MenuResult {
        match input {
            MenuInput::Up => self.navigate_up(),
            MenuInput::Down => self.navigate_down(),
            MenuInput::Select => return MenuResult::Start(self.selected()),
            MenuInput::Cancel => return MenuResult::Back,
            MenuInput::Other => {}
        }
        MenuResult::Stay
    }
}
