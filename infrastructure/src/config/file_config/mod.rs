//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod catalog;
mod export;
mod logging;
mod output;
mod scoring;
mod session;

pub use catalog::FileCatalogConfig;
pub use export::FileExportConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use scoring::FileScoringConfig;
pub use session::FileSessionConfig;

use maturity_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Report scoring policy
    pub scoring: FileScoringConfig,
    /// Answer snapshot persistence
    pub session: FileSessionConfig,
    /// Question catalog source
    pub catalog: FileCatalogConfig,
    /// Console output settings
    pub output: FileOutputConfig,
    /// Report export settings
    pub export: FileExportConfig,
    /// Diagnostic event log
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Enum parse failures (scoring.weighting, export.format)
    /// 2. Referenced files that do not exist (catalog.path)
    /// 3. Settings that weaken report guarantees
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Enum parse validation
        issues.extend(self.scoring.parse_weighting().1);
        issues.extend(self.export.parse_format().1);

        // 2. Missing files
        if let Some(path) = &self.catalog.path
            && !std::path::Path::new(path).exists()
        {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::MissingFile {
                    field: "catalog.path".to_string(),
                    path: path.clone(),
                },
                message: format!("catalog.path: file '{}' does not exist", path),
            });
        }

        // 3. Incomplete reports
        if self.scoring.allow_incomplete {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::IncompleteReportsAllowed,
                message: "scoring.allow_incomplete: unanswered questions will score as 0 and lower the result"
                    .to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maturity_domain::{OutputFormat, OverallWeighting};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[scoring]
weighting = "category"
allow_incomplete = false

[session]
persist = false
data_dir = "/tmp/maturity"

[output]
format = "full"
color = false

[export]
format = "json"
path = "report.json"

[logging]
event_log = "events.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.scoring.parse_weighting().0, OverallWeighting::Category);
        assert!(!config.session.persist);
        assert_eq!(config.session.data_dir, Some("/tmp/maturity".to_string()));
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert_eq!(config.export.path, Some("report.json".to_string()));
        assert_eq!(config.logging.event_log, Some("events.jsonl".to_string()));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[scoring]
allow_incomplete = true
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.scoring.allow_incomplete);
        // Defaults should apply
        assert_eq!(config.scoring.parse_weighting().0, OverallWeighting::Question);
        assert!(config.session.persist);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.catalog.path.is_none());
        assert!(config.output.format.is_none());
        assert!(config.logging.event_log.is_none());
        assert!(config.session.persist);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_all_issues() {
        let mut config = FileConfig::default();
        config.scoring.weighting = "median".to_string();
        config.scoring.allow_incomplete = true;
        config.catalog.path = Some("/nonexistent/catalog.toml".to_string());

        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert!(ConfigIssue::has_errors(&issues));
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::InvalidEnumValue { field, .. } if field == "scoring.weighting"
        ));
    }
}
