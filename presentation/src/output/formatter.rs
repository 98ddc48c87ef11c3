//! Output formatter trait

use maturity_domain::{OutputFormat, Report};

/// Trait for formatting assessment reports
pub trait OutputFormatter {
    /// Format the complete report
    fn format(&self, report: &Report) -> String;

    /// Format as JSON
    fn format_json(&self, report: &Report) -> String;

    /// Format the overall result and category scores only
    fn format_summary(&self, report: &Report) -> String;

    /// Format in the requested output format
    fn render(&self, report: &Report, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(report),
            OutputFormat::Summary => self.format_summary(report),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
