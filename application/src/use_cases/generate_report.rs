//! Generate Report use case
//!
//! Turns the current answers into a [`Report`] under a [`ScoringPolicy`].

use crate::config::ScoringPolicy;
use maturity_domain::{AnswerStore, Catalog, Report, completion_status};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while generating a report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateReportError {
    #[error(
        "Assessment is incomplete: category '{category_id}' has {answered} of {total} questions answered"
    )]
    Incomplete {
        category_id: String,
        answered: usize,
        total: usize,
    },
}

/// Use case for scoring answers into a report
pub struct GenerateReportUseCase {
    catalog: Arc<Catalog>,
    policy: ScoringPolicy,
}

impl GenerateReportUseCase {
    pub fn new(catalog: Arc<Catalog>, policy: ScoringPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Score the answers
    ///
    /// Unless the policy allows incomplete reports, the first category with
    /// an unanswered question blocks generation. Answer entries for ids not
    /// in the catalog do not take part in scoring.
    pub fn execute(&self, answers: &AnswerStore) -> Result<Report, GenerateReportError> {
        for category in self.catalog.categories() {
            let status = completion_status(category, answers);
            if status.is_complete {
                continue;
            }
            if !self.policy.allow_incomplete {
                return Err(GenerateReportError::Incomplete {
                    category_id: category.id.clone(),
                    answered: status.answered,
                    total: status.total,
                });
            }
            warn!(
                "Category {} has {} unanswered question(s); scoring them as 0",
                category.id,
                status.remaining()
            );
        }

        let unknown = answers
            .iter()
            .filter(|(id, _)| !self.catalog.contains_question(id))
            .count();
        if unknown > 0 {
            debug!("Ignoring {} answer(s) for unknown question ids", unknown);
        }

        let report = Report::build(&self.catalog, answers, self.policy.weighting);
        info!(
            "Report generated: overall {:.2} ({}), weighting {}",
            report.overall_score, report.overall_maturity, report.weighting
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maturity_domain::{MaturityLevel, OverallWeighting, sample_answers};

    fn use_case(policy: ScoringPolicy) -> GenerateReportUseCase {
        GenerateReportUseCase::new(Arc::new(Catalog::builtin()), policy)
    }

    #[test]
    fn test_complete_answers_produce_report() {
        let report = use_case(ScoringPolicy::default())
            .execute(&sample_answers())
            .unwrap();
        assert_eq!(report.overall_score, 66.86);
        assert_eq!(report.overall_maturity, MaturityLevel::Defined);
    }

    #[test]
    fn test_incomplete_answers_blocked_by_default() {
        let mut answers = sample_answers();
        answers.set("q_org_4", 0).unwrap();

        let err = use_case(ScoringPolicy::default())
            .execute(&answers)
            .unwrap_err();
        assert_eq!(
            err,
            GenerateReportError::Incomplete {
                category_id: "org_structure".to_string(),
                answered: 6,
                total: 7,
            }
        );
    }

    #[test]
    fn test_incomplete_answers_allowed_score_as_zero() {
        let mut answers = sample_answers();
        answers.set("q_org_4", 0).unwrap();

        let report = use_case(ScoringPolicy::default().with_allow_incomplete(true))
            .execute(&answers)
            .unwrap();
        // org: (21 - 4) / 7 * 20
        assert_eq!(report.categories[1].score.score, 48.57);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_weighting_from_policy() {
        let report = use_case(ScoringPolicy::default().with_weighting(OverallWeighting::Category))
            .execute(&sample_answers())
            .unwrap();
        assert_eq!(report.overall_score, 68.0);
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let mut answers = sample_answers();
        answers.set("legacy_question", 1).unwrap();
        let report = use_case(ScoringPolicy::default()).execute(&answers).unwrap();
        assert_eq!(report.overall_score, 66.86);
    }
}
