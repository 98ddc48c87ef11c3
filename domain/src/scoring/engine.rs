//! Score computation over a catalog and an answer store
//!
//! All functions are pure: they read the inputs and return new values.

use crate::answers::AnswerStore;
use crate::catalog::entities::{Catalog, Category};
use crate::config::OverallWeighting;
use serde::{Deserialize, Serialize};

/// Multiplier from the 0–5 rating scale to the 0–100 score scale
pub const SCORE_SCALE: f64 = 20.0;

/// Derived score of one category (0–100)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category_id: String,
    pub title: String,
    pub short_title: String,
    pub score: f64,
}

/// Round to two decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a raw 0–5 average into a rounded 0–100 score
pub fn to_percent(average: f64) -> f64 {
    round2(average * SCORE_SCALE)
}

fn rating_sum<'a>(ids: impl Iterator<Item = &'a str>, answers: &AnswerStore) -> u32 {
    ids.map(|id| u32::from(answers.get(id))).sum()
}

/// Raw average rating of a category on the 0–5 scale
///
/// Missing answers count as 0. The divisor is always the category's fixed
/// question count.
///
/// # Panics
/// Panics if the category has no questions. A validated [`Catalog`] never
/// contains such a category.
pub fn category_average(category: &Category, answers: &AnswerStore) -> f64 {
    let count = category.question_count();
    assert!(
        count > 0,
        "category '{}' has no questions; catalogs must be validated before scoring",
        category.id
    );
    f64::from(rating_sum(category.question_ids(), answers)) / count as f64
}

/// Score a single category
///
/// # Example
///
/// ```
/// use maturity_domain::{AnswerStore, Category, Question};
/// use maturity_domain::scoring::compute_category_score;
///
/// let category = Category::new(
///     "vision",
///     "Vision",
///     "Vision",
///     (1..=5).map(|i| Question::new(format!("v{i}"), "text")).collect(),
/// );
/// let mut answers = AnswerStore::new();
/// for (i, r) in [4, 5, 4, 3, 4].into_iter().enumerate() {
///     answers.set(format!("v{}", i + 1), r).unwrap();
/// }
///
/// assert_eq!(compute_category_score(&category, &answers).score, 80.0);
/// ```
pub fn compute_category_score(category: &Category, answers: &AnswerStore) -> CategoryScore {
    CategoryScore {
        category_id: category.id.clone(),
        title: category.title.clone(),
        short_title: category.short_title.clone(),
        score: to_percent(category_average(category, answers)),
    }
}

/// Score every category in catalog order
pub fn compute_category_scores(catalog: &Catalog, answers: &AnswerStore) -> Vec<CategoryScore> {
    catalog
        .categories()
        .iter()
        .map(|c| compute_category_score(c, answers))
        .collect()
}

/// Raw overall average on the 0–5 scale under the given weighting
///
/// Answer entries whose id is not in the catalog are ignored.
pub fn overall_average(
    catalog: &Catalog,
    answers: &AnswerStore,
    weighting: OverallWeighting,
) -> f64 {
    match weighting {
        OverallWeighting::Question => {
            let total = catalog.total_questions();
            if total == 0 {
                return 0.0;
            }
            let sum = rating_sum(catalog.questions().map(|q| q.id()), answers);
            f64::from(sum) / total as f64
        }
        OverallWeighting::Category => {
            if catalog.is_empty() {
                return 0.0;
            }
            let sum: f64 = catalog
                .categories()
                .iter()
                .map(|c| category_average(c, answers))
                .sum();
            sum / catalog.len() as f64
        }
    }
}

/// Question-weighted overall score (0–100)
///
/// This is not the mean of the category scores: a category with eight
/// questions contributes more than one with five.
pub fn compute_overall_score(catalog: &Catalog, answers: &AnswerStore) -> f64 {
    compute_overall_score_with(catalog, answers, OverallWeighting::Question)
}

/// Overall score (0–100) under an explicit weighting
pub fn compute_overall_score_with(
    catalog: &Catalog,
    answers: &AnswerStore,
    weighting: OverallWeighting,
) -> f64 {
    to_percent(overall_average(catalog, answers, weighting))
}

/// Sort category scores ascending, keeping catalog order on ties
pub fn rank_categories_by_score(scores: &[CategoryScore]) -> Vec<CategoryScore> {
    let mut ranked = scores.to_vec();
    // sort_by is stable
    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
    ranked
}
