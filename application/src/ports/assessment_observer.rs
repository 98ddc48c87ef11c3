//! Assessment observer port
//!
//! The session publishes one [`AssessmentEvent`] after every state change.
//! Presentation (progress display) and infrastructure (diagnostic event log)
//! subscribe by implementing [`AssessmentObserver`]. Scoring itself never
//! subscribes; it stays a pure function over the current answers.

use maturity_domain::{CompletionStatus, MaturityLevel};
use serde::Serialize;
use std::sync::Arc;

/// State changes published by [`AssessmentSession`](crate::AssessmentSession)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssessmentEvent {
    /// Session began, from a restored snapshot or from scratch
    Started {
        restored: bool,
        overall: CompletionStatus,
    },
    /// A rating was written
    AnswerChanged {
        question_id: String,
        category_id: String,
        rating: u8,
        previous: u8,
        step: CompletionStatus,
    },
    /// All answers were replaced at once
    AnswersLoaded { overall: CompletionStatus },
    /// The wizard moved to another category
    StepChanged {
        step: usize,
        category_id: String,
        status: CompletionStatus,
    },
    /// Restored or imported answers referenced ids not in the catalog
    UnknownQuestionsIgnored { question_ids: Vec<String> },
    /// Saving or restoring the snapshot failed; the session continues in memory
    PersistenceFailed { operation: &'static str, error: String },
    /// Answers were submitted and a report was produced
    Submitted {
        overall_score: f64,
        maturity: MaturityLevel,
    },
    /// Answers were discarded
    Reset,
}

impl AssessmentEvent {
    /// Event type identifier (matches the serialized `type` tag)
    pub fn event_type(&self) -> &'static str {
        match self {
            AssessmentEvent::Started { .. } => "started",
            AssessmentEvent::AnswerChanged { .. } => "answer_changed",
            AssessmentEvent::AnswersLoaded { .. } => "answers_loaded",
            AssessmentEvent::StepChanged { .. } => "step_changed",
            AssessmentEvent::UnknownQuestionsIgnored { .. } => "unknown_questions_ignored",
            AssessmentEvent::PersistenceFailed { .. } => "persistence_failed",
            AssessmentEvent::Submitted { .. } => "submitted",
            AssessmentEvent::Reset => "reset",
        }
    }
}

/// Subscriber to session state changes
///
/// `notify` is synchronous and non-fallible; observers must not disrupt the
/// session, so failures are handled (or ignored) inside the implementation.
pub trait AssessmentObserver: Send + Sync {
    fn notify(&self, event: &AssessmentEvent);
}

/// No-op observer
pub struct NoObserver;

impl AssessmentObserver for NoObserver {
    fn notify(&self, _event: &AssessmentEvent) {}
}

/// Fans events out to several observers in registration order
#[derive(Default, Clone)]
pub struct CompositeObserver {
    delegates: Vec<Arc<dyn AssessmentObserver>>,
}

impl CompositeObserver {
    pub fn new(delegates: Vec<Arc<dyn AssessmentObserver>>) -> Self {
        Self { delegates }
    }

    /// Register another observer
    pub fn with(mut self, observer: Arc<dyn AssessmentObserver>) -> Self {
        self.delegates.push(observer);
        self
    }

    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}

impl AssessmentObserver for CompositeObserver {
    fn notify(&self, event: &AssessmentEvent) {
        for d in &self.delegates {
            d.notify(event);
        }
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::{AssessmentEvent, AssessmentObserver};
    use std::sync::Mutex;

    /// Records every event it receives
    #[derive(Default)]
    pub(crate) struct RecordingObserver {
        events: Mutex<Vec<AssessmentEvent>>,
    }

    impl RecordingObserver {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn events(&self) -> Vec<AssessmentEvent> {
            self.events.lock().unwrap().clone()
        }

        pub(crate) fn event_types(&self) -> Vec<&'static str> {
            self.events().iter().map(|e| e.event_type()).collect()
        }
    }

    impl AssessmentObserver for RecordingObserver {
        fn notify(&self, event: &AssessmentEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }
}
