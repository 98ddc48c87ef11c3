//! Assessment session — the explicit state container for one respondent.
//!
//! Holds the answers and the current wizard step, persists a snapshot after
//! every mutation and publishes an [`AssessmentEvent`] to the observer.
//!
//! ```text
//!   answer() ──► AnswerStore ──► SessionStore::save ──► observer.notify(AnswerChanged)
//!   load_answers() ──► AnswerStore ──► SessionStore::save ──► notify(AnswersLoaded)
//!   next()/prev() ─────────────────────────────────────► observer.notify(StepChanged)
//!   submit() ──► GenerateReportUseCase ──► SessionStore::clear ──► notify(Submitted)
//! ```

use crate::ports::assessment_observer::{AssessmentEvent, AssessmentObserver};
use crate::ports::session_store::SessionStore;
use crate::use_cases::generate_report::{GenerateReportError, GenerateReportUseCase};
use maturity_domain::scoring::{catalog_completion, first_incomplete};
use maturity_domain::{
    AnswerStore, Catalog, Category, CompletionStatus, DomainError, Report, completion_status,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned by session operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Step {step} has {remaining} unanswered question(s)")]
    StepIncomplete { step: usize, remaining: usize },

    #[error("Already at the last step")]
    AtLastStep,

    #[error("Cannot submit: {0}")]
    NotSubmittable(#[from] GenerateReportError),
}

/// One respondent's in-progress assessment
pub struct AssessmentSession {
    catalog: Arc<Catalog>,
    answers: AnswerStore,
    step: usize,
    store: Arc<dyn SessionStore>,
    observer: Arc<dyn AssessmentObserver>,
}

impl AssessmentSession {
    /// Begin a session, restoring the saved snapshot when there is one
    ///
    /// Never fails: a snapshot that cannot be read is logged and the session
    /// starts with every question unanswered. The wizard resumes at the first
    /// incomplete category.
    pub fn start(
        catalog: Arc<Catalog>,
        store: Arc<dyn SessionStore>,
        observer: Arc<dyn AssessmentObserver>,
    ) -> Self {
        let mut session = Self {
            answers: AnswerStore::for_catalog(&catalog),
            catalog,
            step: 0,
            store,
            observer,
        };

        let restored = match session.store.load() {
            Ok(Some(snapshot)) => {
                session.merge(snapshot);
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!("Could not restore saved answers, starting fresh: {}", e);
                session.observer.notify(&AssessmentEvent::PersistenceFailed {
                    operation: "load",
                    error: e.to_string(),
                });
                false
            }
        };

        session.step = session.resume_step();
        let overall = session.overall_status();
        info!(
            "Assessment session started (restored: {}, answered {}/{})",
            restored, overall.answered, overall.total
        );
        session
            .observer
            .notify(&AssessmentEvent::Started { restored, overall });
        session
    }

    /// Overlay a snapshot onto the current answers, dropping unknown ids
    fn merge(&mut self, mut snapshot: AnswerStore) {
        let unknown = snapshot.retain_known(&self.catalog);
        if !unknown.is_empty() {
            debug!("Ignoring answers for unknown questions: {:?}", unknown);
            self.observer
                .notify(&AssessmentEvent::UnknownQuestionsIgnored {
                    question_ids: unknown,
                });
        }
        self.answers.overlay(&snapshot);
    }

    fn resume_step(&self) -> usize {
        first_incomplete(&self.catalog, &self.answers).unwrap_or(self.catalog.len() - 1)
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.answers) {
            warn!("Could not save answers, continuing in memory: {}", e);
            self.observer.notify(&AssessmentEvent::PersistenceFailed {
                operation: "save",
                error: e.to_string(),
            });
        }
    }

    fn discard_snapshot(&self) {
        if let Err(e) = self.store.clear() {
            warn!("Could not clear saved answers: {}", e);
            self.observer.notify(&AssessmentEvent::PersistenceFailed {
                operation: "clear",
                error: e.to_string(),
            });
        }
    }

    // ==================== Queries ====================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    /// Zero-based index of the current category
    pub fn current_step(&self) -> usize {
        self.step
    }

    pub fn current_category(&self) -> &Category {
        &self.catalog.categories()[self.step]
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 == self.catalog.len()
    }

    /// Completion of the current category
    pub fn step_status(&self) -> CompletionStatus {
        completion_status(self.current_category(), &self.answers)
    }

    /// Completion across all categories
    pub fn overall_status(&self) -> CompletionStatus {
        catalog_completion(&self.catalog, &self.answers)
    }

    /// Every category is complete
    pub fn can_submit(&self) -> bool {
        first_incomplete(&self.catalog, &self.answers).is_none()
    }

    // ==================== Mutations ====================

    /// Record a rating (0 clears an answer)
    pub fn answer(&mut self, question_id: &str, rating: u8) -> Result<(), SessionError> {
        let category = self
            .catalog
            .category_of(question_id)
            .ok_or_else(|| DomainError::UnknownQuestion(question_id.to_string()))?;
        let category_id = category.id.clone();

        let previous = self.answers.set(question_id, rating)?;
        let step = completion_status(category, &self.answers);
        debug!("Answer {} = {} (was {})", question_id, rating, previous);

        self.persist();
        self.observer.notify(&AssessmentEvent::AnswerChanged {
            question_id: question_id.to_string(),
            category_id,
            rating,
            previous,
            step,
        });
        Ok(())
    }

    fn publish_step(&self) {
        self.observer.notify(&AssessmentEvent::StepChanged {
            step: self.step,
            category_id: self.current_category().id.clone(),
            status: self.step_status(),
        });
    }

    /// Advance to the next category; the current one must be complete
    pub fn next(&mut self) -> Result<usize, SessionError> {
        let status = self.step_status();
        if !status.is_complete {
            return Err(SessionError::StepIncomplete {
                step: self.step,
                remaining: status.remaining(),
            });
        }
        if self.is_last_step() {
            return Err(SessionError::AtLastStep);
        }
        self.step += 1;
        self.publish_step();
        Ok(self.step)
    }

    /// Go back one category; no-op on the first
    pub fn prev(&mut self) -> usize {
        if self.step > 0 {
            self.step -= 1;
            self.publish_step();
        }
        self.step
    }

    /// Replace all answers, e.g. with the built-in sample
    pub fn load_answers(&mut self, answers: AnswerStore) {
        self.answers = AnswerStore::for_catalog(&self.catalog);
        self.merge(answers);
        self.step = self.resume_step();
        self.persist();
        let overall = self.overall_status();
        info!(
            "Loaded answers ({}/{} answered)",
            overall.answered, overall.total
        );
        self.observer
            .notify(&AssessmentEvent::AnswersLoaded { overall });
        self.publish_step();
    }

    /// Score the answers and end the session
    ///
    /// Submission requires every category to be complete, whatever the
    /// report policy says. On success the saved snapshot and the in-memory
    /// answers are cleared.
    pub fn submit(&mut self, report: &GenerateReportUseCase) -> Result<Report, SessionError> {
        if let Some(index) = first_incomplete(&self.catalog, &self.answers) {
            let category = &self.catalog.categories()[index];
            let status = completion_status(category, &self.answers);
            return Err(GenerateReportError::Incomplete {
                category_id: category.id.clone(),
                answered: status.answered,
                total: status.total,
            }
            .into());
        }

        let report = report.execute(&self.answers)?;

        self.discard_snapshot();
        self.answers = AnswerStore::for_catalog(&self.catalog);
        self.step = 0;
        self.observer.notify(&AssessmentEvent::Submitted {
            overall_score: report.overall_score,
            maturity: report.overall_maturity,
        });
        Ok(report)
    }

    /// Discard all answers and start over
    pub fn abandon(&mut self) {
        self.discard_snapshot();
        self.answers = AnswerStore::for_catalog(&self.catalog);
        self.step = 0;
        info!("Assessment abandoned");
        self.observer.notify(&AssessmentEvent::Reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringPolicy;
    use crate::ports::assessment_observer::NoObserver;
    use crate::ports::assessment_observer::recording::RecordingObserver;
    use crate::ports::session_store::{InMemorySessionStore, SessionStoreError};
    use maturity_domain::{MaturityLevel, sample_answers};

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn load(&self) -> Result<Option<AnswerStore>, SessionStoreError> {
            Err(SessionStoreError::Corrupt("not json".to_string()))
        }

        fn save(&self, _answers: &AnswerStore) -> Result<(), SessionStoreError> {
            Err(SessionStoreError::Write("read-only".to_string()))
        }

        fn clear(&self) -> Result<(), SessionStoreError> {
            Err(SessionStoreError::Write("read-only".to_string()))
        }
    }

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::builtin())
    }

    fn answer_step(session: &mut AssessmentSession, rating: u8) {
        let ids: Vec<String> = session
            .current_category()
            .question_ids()
            .map(String::from)
            .collect();
        for id in ids {
            session.answer(&id, rating).unwrap();
        }
    }

    #[test]
    fn test_fresh_start_is_all_zero() {
        let session = AssessmentSession::start(
            catalog(),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(NoObserver),
        );
        assert_eq!(session.current_step(), 0);
        assert_eq!(session.overall_status().answered, 0);
        assert_eq!(session.overall_status().total, 35);
        assert!(!session.can_submit());
    }

    #[test]
    fn test_answer_persists_and_publishes() {
        let store = Arc::new(InMemorySessionStore::new());
        let observer = Arc::new(RecordingObserver::new());
        let mut session = AssessmentSession::start(catalog(), store.clone(), observer.clone());

        session.answer("q_vision_2", 4).unwrap();

        assert_eq!(store.snapshot().unwrap().get("q_vision_2"), 4);
        assert_eq!(observer.event_types(), vec!["started", "answer_changed"]);
        match &observer.events()[1] {
            AssessmentEvent::AnswerChanged {
                category_id,
                rating,
                previous,
                step,
                ..
            } => {
                assert_eq!(category_id, "vision_strategy");
                assert_eq!(*rating, 4);
                assert_eq!(*previous, 0);
                assert_eq!(step.answered, 1);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_answer_rejects_unknown_and_invalid() {
        let mut session = AssessmentSession::start(
            catalog(),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(NoObserver),
        );

        assert_eq!(
            session.answer("nope", 3),
            Err(SessionError::Domain(DomainError::UnknownQuestion("nope".to_string())))
        );
        assert_eq!(
            session.answer("q_vision_1", 6),
            Err(SessionError::Domain(DomainError::InvalidRating(6)))
        );
    }

    #[test]
    fn test_next_is_gated_by_completion() {
        let mut session = AssessmentSession::start(
            catalog(),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(NoObserver),
        );

        session.answer("q_vision_1", 1).unwrap();
        assert_eq!(
            session.next(),
            Err(SessionError::StepIncomplete {
                step: 0,
                remaining: 4
            })
        );

        answer_step(&mut session, 1);
        assert_eq!(session.next(), Ok(1));
        assert_eq!(session.current_category().id, "org_structure");

        assert_eq!(session.prev(), 0);
        assert_eq!(session.prev(), 0);
    }

    #[test]
    fn test_cannot_advance_past_last_step() {
        let mut session = AssessmentSession::start(
            catalog(),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(NoObserver),
        );
        for _ in 0..4 {
            answer_step(&mut session, 3);
            session.next().unwrap();
        }
        answer_step(&mut session, 3);
        assert!(session.is_last_step());
        assert_eq!(session.next(), Err(SessionError::AtLastStep));
        assert!(session.can_submit());
    }

    #[test]
    fn test_restore_resumes_at_first_incomplete_step() {
        let mut snapshot = sample_answers();
        snapshot.set("q_culture_2", 0).unwrap();
        snapshot.set("removed_question", 3).unwrap();
        let store = Arc::new(InMemorySessionStore::with_snapshot(snapshot));
        let observer = Arc::new(RecordingObserver::new());

        let session = AssessmentSession::start(catalog(), store, observer.clone());

        assert_eq!(session.current_step(), 2);
        assert_eq!(session.answers().get("q_vision_2"), 5);
        assert_eq!(session.answers().get("removed_question"), 0);
        assert_eq!(session.answers().len(), 35);
        assert_eq!(
            observer.event_types(),
            vec!["unknown_questions_ignored", "started"]
        );
    }

    #[test]
    fn test_failed_restore_and_save_are_non_fatal() {
        let observer = Arc::new(RecordingObserver::new());
        let mut session =
            AssessmentSession::start(catalog(), Arc::new(BrokenStore), observer.clone());

        assert_eq!(session.overall_status().answered, 0);
        session.answer("q_vision_1", 5).unwrap();
        assert_eq!(session.answers().get("q_vision_1"), 5);

        assert_eq!(
            observer.event_types(),
            vec!["persistence_failed", "started", "persistence_failed", "answer_changed"]
        );
    }

    #[test]
    fn test_submit_requires_complete_answers() {
        let mut session = AssessmentSession::start(
            catalog(),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(NoObserver),
        );
        let report = GenerateReportUseCase::new(
            catalog(),
            ScoringPolicy::default().with_allow_incomplete(true),
        );

        let err = session.submit(&report).unwrap_err();
        assert!(matches!(
            err,
            SessionError::NotSubmittable(GenerateReportError::Incomplete { .. })
        ));
    }

    #[test]
    fn test_submit_clears_snapshot() {
        let store = Arc::new(InMemorySessionStore::new());
        let observer = Arc::new(RecordingObserver::new());
        let mut session = AssessmentSession::start(catalog(), store.clone(), observer.clone());
        session.load_answers(sample_answers());
        assert!(store.snapshot().is_some());

        let use_case = GenerateReportUseCase::new(catalog(), ScoringPolicy::default());
        let report = session.submit(&use_case).unwrap();

        assert_eq!(report.overall_score, 66.86);
        assert_eq!(report.overall_maturity, MaturityLevel::Defined);
        assert!(store.snapshot().is_none());
        assert_eq!(session.overall_status().answered, 0);
        assert_eq!(observer.event_types().last(), Some(&"submitted"));
    }

    #[test]
    fn test_load_answers_publishes_overall_completion() {
        let store = Arc::new(InMemorySessionStore::new());
        let observer = Arc::new(RecordingObserver::new());
        let mut session = AssessmentSession::start(catalog(), store.clone(), observer.clone());

        let mut answers = sample_answers();
        answers.set("q_tools_1", 0).unwrap();
        session.load_answers(answers);

        assert_eq!(store.snapshot().unwrap().get("q_vision_1"), 4);
        assert_eq!(
            observer.event_types(),
            vec!["started", "answers_loaded", "step_changed"]
        );
        assert_eq!(
            observer.events()[1],
            AssessmentEvent::AnswersLoaded {
                overall: CompletionStatus::new(34, 35)
            }
        );
    }

    #[test]
    fn test_abandon_resets() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut session = AssessmentSession::start(catalog(), store.clone(), Arc::new(NoObserver));
        answer_step(&mut session, 2);
        session.next().unwrap();

        session.abandon();

        assert_eq!(session.current_step(), 0);
        assert_eq!(session.overall_status().answered, 0);
        assert!(store.snapshot().is_none());
    }
}
