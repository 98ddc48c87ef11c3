//! Completion tracking for the step-by-step questionnaire

use crate::answers::AnswerStore;
use crate::answers::rating::UNANSWERED;
use crate::catalog::entities::{Catalog, Category};
use serde::{Deserialize, Serialize};

/// How many questions of a category (or the catalog) are answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionStatus {
    pub answered: usize,
    pub total: usize,
    pub is_complete: bool,
}

impl CompletionStatus {
    pub fn new(answered: usize, total: usize) -> Self {
        Self {
            answered,
            total,
            is_complete: answered == total,
        }
    }

    /// Questions still waiting for an answer
    pub fn remaining(&self) -> usize {
        self.total - self.answered
    }

    /// Percentage answered (0–100)
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.answered as f64 / self.total as f64 * 100.0
        }
    }
}

fn answered_count<'a>(ids: impl Iterator<Item = &'a str>, answers: &AnswerStore) -> usize {
    ids.filter(|id| answers.get(id) > UNANSWERED).count()
}

/// Completion of one category; any rating above 0 counts as answered
pub fn completion_status(category: &Category, answers: &AnswerStore) -> CompletionStatus {
    CompletionStatus::new(
        answered_count(category.question_ids(), answers),
        category.question_count(),
    )
}

/// Completion across the whole catalog
pub fn catalog_completion(catalog: &Catalog, answers: &AnswerStore) -> CompletionStatus {
    CompletionStatus::new(
        answered_count(catalog.questions().map(|q| q.id()), answers),
        catalog.total_questions(),
    )
}

/// Index of the first category that still has unanswered questions
pub fn first_incomplete(catalog: &Catalog, answers: &AnswerStore) -> Option<usize> {
    catalog
        .categories()
        .iter()
        .position(|c| !completion_status(c, answers).is_complete)
}
