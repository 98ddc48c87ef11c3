//! Application-level configuration.
//!
//! - [`ScoringPolicy`] — weighting and the incomplete-answers guard for reports

pub mod scoring_policy;

pub use scoring_policy::ScoringPolicy;
