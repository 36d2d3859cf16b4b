//! The three learning games and the menu that picks between them.

#![allow(unused_imports)]

pub mod menu;
pub mod numbers;
pub mod picture;
pub mod session;
pub mod words;

pub use menu::{GameMenu, MenuInput, MenuResult};
pub use numbers::NumberQuestion;
pub use picture::PictureQuestion;
pub use session::{start_session, ActiveRound, GameSession, RoundInput};
pub use words::{WordCell, WordQuestion};

use crate::round::{RoundConfig, RoundTiming};

/// Which game a session plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Numbers,
    Words,
    Picture,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Numbers, GameMode::Words, GameMode::Picture];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(GameMode::Numbers)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Numbers => "Numbers Fun",
            Self::Words => "Word Wizard",
            Self::Picture => "What's This?",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Numbers => "Count things and solve little sums.",
            Self::Words => "Find the missing letters to finish each word.",
            Self::Picture => "Look at the picture and pick its name. Keeps score!",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Numbers => "\u{1F522}",
            Self::Words => "\u{1F524}",
            Self::Picture => "\u{1F5BC}",
        }
    }

    /// Short lowercase id used in logs.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Numbers => "numbers",
            Self::Words => "word",
            Self::Picture => "quiz",
        }
    }

    pub fn round_config(&self, timing: RoundTiming) -> RoundConfig {
        let config = match self {
            Self::Numbers => RoundConfig::single_choice(),
            Self::Words => RoundConfig::multi_blank(),
            Self::Picture => RoundConfig::single_choice().with_scoring(),
        };
        config.with_timing(timing)
    }
}
