//! Catalog entities: categories and the validated catalog

use super::question::Question;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Narrative analysis shown next to a category in the report
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryGuidance {
    /// Short diagnostic paragraph
    pub analysis: String,
    /// Recommended actions, in display order
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl CategoryGuidance {
    pub fn new(analysis: impl Into<String>, recommendations: Vec<String>) -> Self {
        Self {
            analysis: analysis.into(),
            recommendations,
        }
    }
}

/// A themed group of questions contributing one sub-score (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier (e.g., "vision_strategy")
    pub id: String,
    /// Full display title
    pub title: String,
    /// Abbreviated title for chart axes and the step indicator
    pub short_title: String,
    /// Ordered questions
    pub questions: Vec<Question>,
    /// Optional narrative guidance for the report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<CategoryGuidance>,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        short_title: impl Into<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            short_title: short_title.into(),
            questions,
            guidance: None,
        }
    }

    /// Attach report guidance
    pub fn with_guidance(mut self, guidance: CategoryGuidance) -> Self {
        self.guidance = Some(guidance);
        self
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Iterate over this category's question ids in order
    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.id())
    }
}

/// The validated, read-only question catalog
///
/// Construction checks every structural invariant up front so that the
/// scoring engine never sees an empty category or an ambiguous question id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, failing fast on malformed input
    ///
    /// # Example
    ///
    /// ```
    /// use maturity_domain::{Catalog, Category, DomainError, Question};
    ///
    /// let ok = Catalog::new(vec![Category::new(
    ///     "culture",
    ///     "Leadership & Culture",
    ///     "Culture",
    ///     vec![Question::new("q_culture_1", "Is failure treated as learning?")],
    /// )]);
    /// assert!(ok.is_ok());
    ///
    /// let empty = Catalog::new(vec![Category::new("tools", "Tools", "Tools", vec![])]);
    /// assert_eq!(empty.unwrap_err(), DomainError::EmptyCategory("tools".to_string()));
    /// ```
    pub fn new(categories: Vec<Category>) -> Result<Self, DomainError> {
        if categories.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        let mut category_ids = HashSet::new();
        let mut question_ids = HashSet::new();

        for category in &categories {
            if category.id.trim().is_empty() {
                return Err(DomainError::InvalidQuestion(
                    "category id cannot be empty".to_string(),
                ));
            }
            if !category_ids.insert(category.id.as_str()) {
                return Err(DomainError::DuplicateCategoryId(category.id.clone()));
            }
            if category.questions.is_empty() {
                return Err(DomainError::EmptyCategory(category.id.clone()));
            }
            for question in &category.questions {
                // Deserialized questions bypass Question::try_new
                Question::try_new(question.id(), question.text())?;
                if !question_ids.insert(question.id()) {
                    return Err(DomainError::DuplicateQuestionId(question.id().to_string()));
                }
            }
        }

        Ok(Self { categories })
    }

    /// Wrap categories already known to satisfy the invariants
    pub(crate) fn from_trusted(categories: Vec<Category>) -> Self {
        debug_assert!(Self::new(categories.clone()).is_ok());
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories (wizard steps)
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false for a validated catalog
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Category owning the given question
    pub fn category_of(&self, question_id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.question_ids().any(|id| id == question_id))
    }

    pub fn contains_question(&self, question_id: &str) -> bool {
        self.category_of(question_id).is_some()
    }

    /// Iterate over every question in catalog order
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.categories.iter().flat_map(|c| c.questions.iter())
    }

    /// Total question count across all categories
    pub fn total_questions(&self) -> usize {
        self.categories.iter().map(Category::question_count).sum()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            categories: Vec<Category>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Catalog::new(raw.categories).map_err(serde::de::Error::custom)
    }
}
