//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod assessment_observer;
pub mod report_exporter;
pub mod session_store;
