//! Configuration issues reported by config validation.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field did not parse into its enum.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A configured file path does not exist.
    MissingFile { field: String, path: String },
    /// Incomplete reports are allowed, so unanswered questions score as 0.
    IncompleteReportsAllowed,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    /// Whether any issue in the list is fatal
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> ConfigIssue {
        ConfigIssue {
            severity,
            code: ConfigIssueCode::IncompleteReportsAllowed,
            message: String::new(),
        }
    }

    #[test]
    fn has_errors_returns_true_for_errors() {
        assert!(ConfigIssue::has_errors(&[issue(Severity::Warning), issue(Severity::Error)]));
    }

    #[test]
    fn has_errors_returns_false_for_warnings_only() {
        assert!(!ConfigIssue::has_errors(&[issue(Severity::Warning)]));
    }

    #[test]
    fn has_errors_returns_false_for_empty() {
        assert!(!ConfigIssue::has_errors(&[]));
    }
}
