//! Export configuration from TOML (`[export]` section)

use crate::export::ExportFormat;
use maturity_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Raw export configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExportConfig {
    /// Document format: "markdown" or "json"
    pub format: String,
    /// Export destination when `--export` is not given
    ///
    /// When set, every scored run (batch or submitted questionnaire) is
    /// written here.
    pub path: Option<String>,
}

impl Default for FileExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default().as_str().to_string(),
            path: None,
        }
    }
}

impl FileExportConfig {
    /// Parse format string into ExportFormat, returning warnings on failure.
    pub fn parse_format(&self) -> (ExportFormat, Vec<ConfigIssue>) {
        match self.format.parse::<ExportFormat>() {
            Ok(format) => (format, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "export.format".to_string(),
                        value: self.format.clone(),
                        valid_values: vec!["markdown".to_string(), "json".to_string()],
                    },
                    message: format!(
                        "export.format: unknown value '{}', falling back to 'markdown'",
                        self.format
                    ),
                };
                (ExportFormat::default(), vec![issue])
            }
        }
    }
}
