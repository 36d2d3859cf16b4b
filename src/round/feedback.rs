//! Answer outcomes and the transient feedback signal shown after a check.

/// Result of checking an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    pub fn is_correct(self) -> bool {
        self == Self::Correct
    }

    /// Message shown to the player.
    pub fn message(self) -> &'static str {
        match self {
            Self::Correct => "Correct! \u{1F389}",
            Self::Incorrect => "Try Again! \u{1F914}",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Correct => "\u{2714}",
            Self::Incorrect => "\u{2718}",
        }
    }
}

/// Visible acknowledgment of the most recent check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedbackSignal {
    shown: Option<Outcome>,
}

impl FeedbackSignal {
    pub fn show(&mut self, outcome: Outcome) {
        self.shown = Some(outcome);
    }

    pub fn dismiss(&mut self) {
        self.shown = None;
    }

    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    /// The outcome being shown, if the signal is visible.
    pub fn outcome(&self) -> Option<Outcome> {
        self.shown
    }
}
