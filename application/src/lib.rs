//! Application layer for ai-maturity
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ScoringPolicy;
pub use ports::{
    assessment_observer::{AssessmentEvent, AssessmentObserver, CompositeObserver, NoObserver},
    report_exporter::{ExportError, ExportedDocument, ReportExporter},
    session_store::{
        InMemorySessionStore, NoSessionStore, SESSION_KEY, SessionStore, SessionStoreError,
    },
};
pub use use_cases::assessment_session::{AssessmentSession, SessionError};
pub use use_cases::export_report::{ExportOutcome, ExportReportError, ExportReportUseCase};
pub use use_cases::generate_report::{GenerateReportError, GenerateReportUseCase};
