//! Numbers Fun: counting and small-arithmetic puzzles with numeric answers.

use crate::round::Question;

/// A numeric single-choice puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberQuestion {
    pub prompt: String,
    /// How many objects to draw as a counting aid.
    pub count: Option<u32>,
    pub options: Vec<u32>,
    pub answer: u32,
}

impl NumberQuestion {
    pub fn new(prompt: &str, options: &[u32], answer: u32) -> Self {
        Self {
            prompt: prompt.to_string(),
            count: None,
            options: options.to_vec(),
            answer,
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

impl Question for NumberQuestion {
    type Candidate = u32;

    fn options(&self) -> &[u32] {
        &self.options
    }

    fn expected(&self) -> Vec<u32> {
        vec![self.answer]
    }
}

/// Glyph drawn `count` times for counting puzzles.
pub const COUNT_GLYPH: &str = "\u{1F34E}";

pub fn catalog() -> Vec<NumberQuestion> {
    vec![
        NumberQuestion::new("How many apples?", &[2, 3, 4, 5], 3).with_count(3),
        NumberQuestion::new("What comes after 4?", &[3, 5, 6, 7], 5),
        NumberQuestion::new("2 + 1 = ?", &[2, 3, 4, 5], 3),
        NumberQuestion::new("5 - 2 = ?", &[1, 2, 3, 4], 3),
        NumberQuestion::new("2 \u{00D7} 3 = ?", &[4, 5, 6, 7], 6),
        NumberQuestion::new("6 \u{00F7} 2 = ?", &[2, 3, 4, 5], 3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_answers_are_offered() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 6);
        for q in &catalog {
            assert!(q.answer_is_offered(), "{} lacks its answer", q.prompt);
            assert_eq!(q.slots(), 1);
        }
    }

    #[test]
    fn test_only_counting_puzzle_has_count() {
        let with_count: Vec<_> = catalog().into_iter().filter(|q| q.count.is_some()).collect();
        assert_eq!(with_count.len(), 1);
        assert_eq!(with_count[0].count, Some(3));
        assert_eq!(with_count[0].answer, 3);
    }
}
