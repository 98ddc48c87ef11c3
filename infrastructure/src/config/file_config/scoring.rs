//! Scoring configuration from TOML (`[scoring]` section)

use maturity_domain::{ConfigIssue, ConfigIssueCode, OverallWeighting, Severity};
use serde::{Deserialize, Serialize};

/// Raw scoring configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScoringConfig {
    /// Overall score weighting: "question" or "category"
    pub weighting: String,
    /// Produce reports while questions are unanswered
    pub allow_incomplete: bool,
}

impl Default for FileScoringConfig {
    fn default() -> Self {
        Self {
            weighting: OverallWeighting::default().to_string(),
            allow_incomplete: false,
        }
    }
}

impl FileScoringConfig {
    /// Parse weighting string into OverallWeighting, returning warnings on failure.
    pub fn parse_weighting(&self) -> (OverallWeighting, Vec<ConfigIssue>) {
        match self.weighting.parse::<OverallWeighting>() {
            Ok(weighting) => (weighting, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "scoring.weighting".to_string(),
                        value: self.weighting.clone(),
                        valid_values: vec!["question".to_string(), "category".to_string()],
                    },
                    message: format!(
                        "scoring.weighting: unknown value '{}', falling back to 'question'",
                        self.weighting
                    ),
                };
                (OverallWeighting::default(), vec![issue])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weighting_aliases() {
        let config = FileScoringConfig {
            weighting: "Categories".to_string(),
            ..Default::default()
        };
        let (weighting, issues) = config.parse_weighting();
        assert_eq!(weighting, OverallWeighting::Category);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_parse_weighting_invalid_falls_back() {
        let config = FileScoringConfig {
            weighting: "median".to_string(),
            ..Default::default()
        };
        let (weighting, issues) = config.parse_weighting();
        assert_eq!(weighting, OverallWeighting::Question);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }
}
