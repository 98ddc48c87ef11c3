//! Logging infrastructure — structured assessment event logging.
//!
//! Provides [`JsonlEventLogger`], a JSONL file writer that implements
//! the [`AssessmentObserver`](maturity_application::AssessmentObserver) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlEventLogger;
