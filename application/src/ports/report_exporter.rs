//! Report exporter port
//!
//! Defines the interface for writing a [`Report`] to a document.

use async_trait::async_trait;
use maturity_domain::Report;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting a report
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// A document produced by an exporter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// Where the document was written
    pub path: PathBuf,
    /// Size in bytes
    pub bytes: usize,
}

/// Writes a report to some document format
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ReportExporter: Send + Sync {
    /// Short format name for logs and messages (e.g., "markdown")
    fn format_name(&self) -> &'static str;

    /// Export the report
    async fn export(&self, report: &Report) -> Result<ExportedDocument, ExportError>;
}
