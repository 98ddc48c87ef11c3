//! Report exporters — write a report to a document file.
//!
//! Provides [`MarkdownReportExporter`] and [`JsonReportExporter`], both
//! implementing the [`ReportExporter`] port.

mod json;
mod markdown;

pub use json::JsonReportExporter;
pub use markdown::{MarkdownReportExporter, render_markdown};

use maturity_application::ports::report_exporter::{ExportError, ExportedDocument, ReportExporter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Document format for exported reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Markdown,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "markdown",
            ExportFormat::Json => "json",
        }
    }

    /// Infer the format from a file extension, if it names one
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "md" | "markdown" => Some(ExportFormat::Markdown),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }

    /// Build the exporter for this format writing to `path`
    pub fn exporter(&self, path: impl Into<PathBuf>) -> Arc<dyn ReportExporter> {
        match self {
            ExportFormat::Markdown => Arc::new(MarkdownReportExporter::new(path)),
            ExportFormat::Json => Arc::new(JsonReportExporter::new(path)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Unknown export format: {}. Valid: markdown, json",
                s
            )),
        }
    }
}

/// Write the document, creating parent directories as needed
async fn write_document(path: &Path, content: &[u8]) -> Result<ExportedDocument, ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ExportError::Io(format!("{}: {}", parent.display(), e)))?;
    }
    tokio::fs::write(path, content)
        .await
        .map_err(|e| ExportError::Io(format!("{}: {}", path.display(), e)))?;
    Ok(ExportedDocument {
        path: path.to_path_buf(),
        bytes: content.len(),
    })
}
