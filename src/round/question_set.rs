//! Shuffled, immutable question sets.

use super::question::{CatalogError, Question};
use rand::seq::SliceRandom;
use rand::Rng;

/// An ordered, fixed-length set of questions drawn from a catalog.
///
/// The order is a uniform random permutation of the catalog, fixed for the
/// lifetime of the set. A new session builds a new set.
#[derive(Debug, Clone)]
pub struct QuestionSet<Q> {
    questions: Vec<Q>,
    /// `order[i]` is the catalog index of `questions[i]`.
    order: Vec<usize>,
}

impl<Q: Question> QuestionSet<Q> {
    /// Shuffle `catalog` (Fisher-Yates) into a new question set.
    pub fn create<R: Rng + ?Sized>(catalog: Vec<Q>, rng: &mut R) -> Result<Self, CatalogError> {
        validate(&catalog)?;

        let mut order: Vec<usize> = (0..catalog.len()).collect();
        order.shuffle(rng);

        let mut slots: Vec<Option<Q>> = catalog.into_iter().map(Some).collect();
        let questions = order
            .iter()
            .filter_map(|&i| slots[i].take())
            .collect();

        Ok(Self { questions, order })
    }

    /// Build a set that keeps the catalog order. Used by tests and demos.
    pub fn in_order(catalog: Vec<Q>) -> Result<Self, CatalogError> {
        validate(&catalog)?;
        let order = (0..catalog.len()).collect();
        Ok(Self {
            questions: catalog,
            order,
        })
    }
}

fn validate<Q: Question>(catalog: &[Q]) -> Result<(), CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::Empty);
    }
    match catalog.iter().position(|q| !q.answer_is_offered()) {
        Some(index) => Err(CatalogError::AnswerNotOffered { index }),
        None => Ok(()),
    }
}

impl<Q> QuestionSet<Q> {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a successfully created set.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Q> {
        self.questions.get(index)
    }

    /// Catalog index of each question, in presentation order.
    pub fn catalog_order(&self) -> &[usize] {
        &self.order
    }
}

impl<Q> std::ops::Index<usize> for QuestionSet<Q> {
    type Output = Q;

    fn index(&self, index: usize) -> &Q {
        &self.questions[index]
    }
}
