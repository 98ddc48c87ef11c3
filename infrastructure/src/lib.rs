//! Infrastructure layer for ai-maturity
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod export;
pub mod logging;
pub mod session;

// Re-export commonly used types
pub use catalog::{CatalogLoadError, TomlCatalogLoader};
pub use config::{
    ConfigLoader, FileCatalogConfig, FileConfig, FileExportConfig, FileLoggingConfig,
    FileOutputConfig, FileScoringConfig, FileSessionConfig,
};
pub use export::{ExportFormat, JsonReportExporter, MarkdownReportExporter, render_markdown};
pub use logging::JsonlEventLogger;
pub use session::JsonFileSessionStore;
