//! JSON report exporter

use super::write_document;
use async_trait::async_trait;
use maturity_application::ports::report_exporter::{ExportError, ExportedDocument, ReportExporter};
use maturity_domain::Report;
use std::path::PathBuf;

/// Writes the report as pretty-printed JSON
pub struct JsonReportExporter {
    path: PathBuf,
}

impl JsonReportExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ReportExporter for JsonReportExporter {
    fn format_name(&self) -> &'static str {
        "json"
    }

    async fn export(&self, report: &Report) -> Result<ExportedDocument, ExportError> {
        let json =
            serde_json::to_vec_pretty(report).map_err(|e| ExportError::Encoding(e.to_string()))?;
        write_document(&self.path, &json).await
    }
}
