//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod assessment_session;
pub mod export_report;
pub mod generate_report;
