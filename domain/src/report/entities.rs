//! Report value handed to renderers and exporters

use crate::answers::AnswerStore;
use crate::catalog::entities::{Catalog, CategoryGuidance};
use crate::config::OverallWeighting;
use crate::scoring::{
    CategoryScore, CompletionStatus, MaturityLevel, catalog_completion, category_average,
    classify_maturity, compute_category_score, completion_status, overall_average,
    rank_categories_by_score, to_percent,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-category section of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    #[serde(flatten)]
    pub score: CategoryScore,
    /// Raw average on the 0–5 scale
    pub average: f64,
    pub maturity: MaturityLevel,
    pub completion: CompletionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<CategoryGuidance>,
}

/// The full derived output of an assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Overall score (0–100)
    pub overall_score: f64,
    /// Raw overall average on the 0–5 scale
    pub overall_average: f64,
    pub overall_maturity: MaturityLevel,
    pub weighting: OverallWeighting,
    /// Category results in catalog order
    pub categories: Vec<CategoryResult>,
    pub completion: CompletionStatus,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Build a report stamped with the current time
    pub fn build(catalog: &Catalog, answers: &AnswerStore, weighting: OverallWeighting) -> Self {
        Self::build_at(catalog, answers, weighting, Utc::now())
    }

    /// Build a report with an explicit timestamp
    pub fn build_at(
        catalog: &Catalog,
        answers: &AnswerStore,
        weighting: OverallWeighting,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let categories = catalog
            .categories()
            .iter()
            .map(|category| {
                let average = category_average(category, answers);
                CategoryResult {
                    score: compute_category_score(category, answers),
                    average,
                    maturity: classify_maturity(average),
                    completion: completion_status(category, answers),
                    guidance: category.guidance.clone(),
                }
            })
            .collect();

        let average = overall_average(catalog, answers, weighting);

        Self {
            overall_score: to_percent(average),
            overall_average: average,
            overall_maturity: classify_maturity(average),
            weighting,
            categories,
            completion: catalog_completion(catalog, answers),
            generated_at,
        }
    }

    /// Category scores in catalog order (radar chart order)
    pub fn category_scores(&self) -> Vec<CategoryScore> {
        self.categories.iter().map(|c| c.score.clone()).collect()
    }

    /// Category scores ascending (bar chart order, weakest first)
    pub fn ranked(&self) -> Vec<CategoryScore> {
        rank_categories_by_score(&self.category_scores())
    }

    /// Lowest-scoring category; the earliest wins a tie
    pub fn weakest(&self) -> Option<&CategoryResult> {
        self.categories.iter().reduce(|best, c| {
            if c.score.score < best.score.score {
                c
            } else {
                best
            }
        })
    }

    /// Highest-scoring category; the earliest wins a tie
    pub fn strongest(&self) -> Option<&CategoryResult> {
        self.categories.iter().reduce(|best, c| {
            if c.score.score > best.score.score {
                c
            } else {
                best
            }
        })
    }

    pub fn is_complete(&self) -> bool {
        self.completion.is_complete
    }
}
