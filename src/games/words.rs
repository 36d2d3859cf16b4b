//! Word Wizard: fill the blanked letters of a pictured word.

use crate::round::Question;

/// One cell of the word as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCell {
    /// A letter that is always visible.
    Given(char),
    /// A blank the player has filled.
    Filled(char),
    /// A blank still waiting for a letter.
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordQuestion {
    pub picture: String,
    pub word: String,
    /// Letter tiles offered to the player.
    pub options: Vec<char>,
    /// Character positions the player must fill, in fill order.
    pub blanks: Vec<usize>,
}

impl WordQuestion {
    pub fn new(picture: &str, word: &str, options: &[char], blanks: &[usize]) -> Self {
        Self {
            picture: picture.to_string(),
            word: word.to_string(),
            options: options.to_vec(),
            blanks: blanks.to_vec(),
        }
    }

    /// The word with blanks filled from `picks` (in blank order).
    pub fn cells(&self, picks: &[char]) -> Vec<WordCell> {
        self.word
            .chars()
            .enumerate()
            .map(|(pos, ch)| match self.blanks.iter().position(|&b| b == pos) {
                Some(slot) => picks
                    .get(slot)
                    .map_or(WordCell::Blank, |&picked| WordCell::Filled(picked)),
                None => WordCell::Given(ch),
            })
            .collect()
    }
}

impl Question for WordQuestion {
    type Candidate = char;

    fn options(&self) -> &[char] {
        &self.options
    }

    fn expected(&self) -> Vec<char> {
        let letters: Vec<char> = self.word.chars().collect();
        self.blanks
            .iter()
            .filter_map(|&pos| letters.get(pos).copied())
            .collect()
    }

    fn slots(&self) -> usize {
        self.blanks.len()
    }

    fn answer_is_offered(&self) -> bool {
        let in_range = self.blanks.iter().all(|&pos| pos < self.word.chars().count());
        if !in_range || self.blanks.is_empty() {
            return false;
        }
        let mut used = vec![false; self.options.len()];
        self.expected().into_iter().all(|want| {
            match (0..self.options.len()).find(|&i| !used[i] && self.options[i] == want) {
                Some(i) => {
                    used[i] = true;
                    true
                }
                None => false,
            }
        })
    }
}

pub const PROMPT: &str = "Complete the word!";

pub fn catalog() -> Vec<WordQuestion> {
    vec![
        WordQuestion::new("\u{1F431}", "cat", &['a', 'b', 'c', 't'], &[1]),
        WordQuestion::new("\u{1F436}", "dog", &['d', 'i', 'g', 'b'], &[0]),
        WordQuestion::new("\u{2600}", "sun", &['m', 'w', 'n', 'e'], &[2]),
        WordQuestion::new("\u{1F41D}", "bee", &['b', 'e', 'a', 'd'], &[1]),
        WordQuestion::new("\u{1F41F}", "fish", &['f', 'a', 'p', 'h'], &[0, 3]),
        WordQuestion::new("\u{1F332}", "tree", &['p', 'r', 'e', 'a'], &[1, 2]),
        WordQuestion::new("\u{1F426}", "bird", &['b', 'i', 'r', 'o'], &[2]),
        WordQuestion::new("\u{1F438}", "frog", &['s', 'g', 'o', 'r'], &[3]),
        WordQuestion::new("\u{1F95B}", "milk", &['m', 'i', 'y', 'k'], &[0]),
        WordQuestion::new("\u{1F986}", "duck", &['d', 'u', 'c', 'e'], &[1, 2]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fish() -> WordQuestion {
        WordQuestion::new("f", "fish", &['f', 'a', 'p', 'h'], &[0, 3])
    }

    #[test]
    fn test_catalog_answers_are_offered() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 10);
        for q in &catalog {
            assert!(q.answer_is_offered(), "{} cannot be completed", q.word);
            assert_eq!(q.slots(), q.blanks.len());
        }
    }

    #[test]
    fn test_expected_letters_follow_blank_order() {
        assert_eq!(fish().expected(), vec!['f', 'h']);
        let duck = WordQuestion::new("d", "duck", &['d', 'u', 'c', 'e'], &[2, 1]);
        assert_eq!(duck.expected(), vec!['c', 'u']);
    }

    #[test]
    fn test_cells_show_blanks_and_picks() {
        let q = fish();
        assert_eq!(
            q.cells(&[]),
            vec![
                WordCell::Blank,
                WordCell::Given('i'),
                WordCell::Given('s'),
                WordCell::Blank
            ]
        );
        assert_eq!(
            q.cells(&['a']),
            vec![
                WordCell::Filled('a'),
                WordCell::Given('i'),
                WordCell::Given('s'),
                WordCell::Blank
            ]
        );
    }

    #[test]
    fn test_out_of_range_blank_is_invalid() {
        let q = WordQuestion::new("x", "cat", &['a', 't'], &[5]);
        assert!(!q.answer_is_offered());
    }

    #[test]
    fn test_no_blanks_is_invalid() {
        let q = WordQuestion::new("x", "cat", &['a'], &[]);
        assert!(!q.answer_is_offered());
    }
}
