//! Presentation layer for ai-maturity
//!
//! This crate contains CLI definitions, report formatters,
//! the progress reporter, and the interactive questionnaire.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod questionnaire;

// Re-export commonly used types
pub use cli::commands::{Cli, ExportFormatArg, OutputFormat, Weighting};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::ProgressReporter;
pub use questionnaire::{QuestionnaireCommand, QuestionnaireRepl};
