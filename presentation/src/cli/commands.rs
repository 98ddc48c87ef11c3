//! CLI command definitions

use clap::{Parser, ValueEnum};
use maturity_domain::OverallWeighting;
use std::path::PathBuf;

/// Output format for assessment reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full report with charts, guidance and the maturity ladder
    Full,
    /// Overall score, maturity and category scores
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for maturity_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => maturity_domain::OutputFormat::Full,
            OutputFormat::Summary => maturity_domain::OutputFormat::Summary,
            OutputFormat::Json => maturity_domain::OutputFormat::Json,
        }
    }
}

/// How the overall score combines categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Weighting {
    /// Every question counts equally
    Question,
    /// Every category counts equally
    Category,
}

impl From<Weighting> for OverallWeighting {
    fn from(weighting: Weighting) -> Self {
        match weighting {
            Weighting::Question => OverallWeighting::Question,
            Weighting::Category => OverallWeighting::Category,
        }
    }
}

/// Document format for `--export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormatArg {
    Markdown,
    Json,
}

/// CLI arguments for ai-maturity
#[derive(Parser, Debug)]
#[command(name = "ai-maturity")]
#[command(author, version, about = "AI-native organization maturity self-assessment")]
#[command(long_about = r#"
ai-maturity walks you through a Likert-scale questionnaire (1-5) across five
categories and reports how far your organization has become AI-native.

Each category scores 0-100 (average rating x 20). The overall score and the
maturity level (1 Absent .. 5 Optimized) are derived from all answers.

Answers are saved after every change and restored on the next run until the
assessment is submitted or reset.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./maturity.toml     Project-level config
3. ~/.config/ai-maturity/config.toml   Global config

Example:
  ai-maturity                         Start (or resume) the questionnaire
  ai-maturity --sample -o full        Show the report for the sample answers
  ai-maturity --answers answers.json --export report.md
"#)]
pub struct Cli {
    /// Score the built-in sample answers instead of asking
    #[arg(long, conflicts_with = "answers")]
    pub sample: bool,

    /// Score a JSON answers file (`{"question_id": rating, ...}`)
    #[arg(long, value_name = "PATH")]
    pub answers: Option<PathBuf>,

    /// Output format (defaults to config, then summary)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Write the report to a document (.md or .json)
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Export document format (defaults to the file extension, then config)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub export_format: Option<ExportFormatArg>,

    /// Produce a report even if questions are unanswered (they score 0)
    #[arg(long)]
    pub allow_incomplete: bool,

    /// Overall score weighting
    #[arg(long, value_enum)]
    pub weighting: Option<Weighting>,

    /// Discard saved answers and exit
    #[arg(long)]
    pub reset: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Answers come from a flag rather than the questionnaire
    pub fn is_batch(&self) -> bool {
        self.sample || self.answers.is_some()
    }
}
