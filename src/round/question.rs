//! The question abstraction every game mode plugs into the round engine.

use std::fmt;
use thiserror::Error;

/// Problems with a question catalog, found when a question set is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("question catalog is empty")]
    Empty,
    #[error("question {index} does not offer its own answer among the options")]
    AnswerNotOffered { index: usize },
}

/// A single question the player resolves by picking option tiles.
///
/// The answer is described positionally: `expected()[k]` is the value the
/// k-th pick must match. Single-choice questions expect exactly one value;
/// word questions expect one letter per blank.
pub trait Question {
    type Candidate: Clone + PartialEq + fmt::Debug;

    /// Tiles offered to the player, in display order.
    fn options(&self) -> &[Self::Candidate];

    /// Expected value for each pick, in order.
    fn expected(&self) -> Vec<Self::Candidate>;

    /// Number of picks needed before the answer can be checked.
    fn slots(&self) -> usize {
        self.expected().len()
    }

    /// True when every expected value can be matched by a distinct tile.
    fn answer_is_offered(&self) -> bool {
        let mut used = vec![false; self.options().len()];
        self.expected().iter().all(|want| {
            let found = self
                .options()
                .iter()
                .enumerate()
                .find(|(i, opt)| !used[*i] && *opt == want)
                .map(|(i, _)| i);
            match found {
                Some(i) => {
                    used[i] = true;
                    true
                }
                None => false,
            }
        })
    }
}
