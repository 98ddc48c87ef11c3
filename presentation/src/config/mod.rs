//! Presentation-level configuration
//!
//! Resolved settings for report output and the questionnaire.

use maturity_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Report format
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show step progress bars in the questionnaire
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Apply the color setting to the terminal for this process
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
