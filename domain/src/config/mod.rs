//! Configuration value objects shared by all layers.

pub mod output_format;
pub mod validation;
pub mod weighting;

pub use output_format::OutputFormat;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use weighting::OverallWeighting;
