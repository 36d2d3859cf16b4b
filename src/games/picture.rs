//! What's This?: name the pictured object. The only scored mode.

use crate::round::Question;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureQuestion {
    /// Picture shown to the player (an emoji in the terminal).
    pub picture: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl PictureQuestion {
    pub fn new(picture: &str, options: &[&str], answer: &str) -> Self {
        Self {
            picture: picture.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            answer: answer.to_string(),
        }
    }
}

impl Question for PictureQuestion {
    type Candidate = String;

    fn options(&self) -> &[String] {
        &self.options
    }

    fn expected(&self) -> Vec<String> {
        vec![self.answer.clone()]
    }
}

pub const PROMPT: &str = "What's this?";

pub fn catalog() -> Vec<PictureQuestion> {
    vec![
        PictureQuestion::new("\u{1F34E}", &["Banana", "Orange", "Apple", "Grapes"], "Apple"),
        PictureQuestion::new("\u{1F697}", &["Bus", "Bike", "Truck", "Car"], "Car"),
        PictureQuestion::new("\u{1F436}", &["Dog", "Cat", "Rabbit", "Bird"], "Dog"),
        PictureQuestion::new("\u{26BD}", &["Box", "Book", "Bag", "Ball"], "Ball"),
        PictureQuestion::new("\u{1F4D6}", &["Book", "Flower", "Tree", "House"], "Book"),
        PictureQuestion::new("\u{1F415}", &["Dog", "Cat", "Horse", "Cow"], "Dog"),
        PictureQuestion::new("\u{1FA91}", &["Table", "Sofa", "Chair", "Lamp"], "Chair"),
        PictureQuestion::new("\u{2615}", &["Plate", "Cup", "Spoon", "Fork"], "Cup"),
        PictureQuestion::new("\u{1F4BB}", &["Phone", "Laptop", "Tablet", "Camera"], "Laptop"),
        PictureQuestion::new("\u{1F45F}", &["Shoe", "Shirt", "Hat", "Glove"], "Shoe"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_answers_are_offered() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 10);
        for q in &catalog {
            assert!(q.answer_is_offered(), "{} not offered", q.answer);
            assert_eq!(q.options.len(), 4);
        }
    }

    #[test]
    fn test_expected_is_single_answer() {
        let q = PictureQuestion::new("x", &["Cup", "Fork"], "Cup");
        assert_eq!(q.expected(), vec!["Cup".to_string()]);
    }
}
