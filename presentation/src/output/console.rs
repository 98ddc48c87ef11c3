//! Console output formatter for assessment reports

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use maturity_domain::{CategoryScore, MaturityLevel, Report};

const BAR_WIDTH: usize = 30;

/// Formats reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report
    pub fn format(report: &Report) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("AI 네이티브 조직 진단 결과"));
        output.push('\n');
        output.push_str(&Self::overall(report));

        // Catalog order
        output.push_str(&Self::section_header("영역별 점수"));
        output.push_str(&Self::score_chart(report, &report.category_scores()));

        // Weakest first
        output.push_str(&Self::section_header("개선 우선순위"));
        output.push_str(&Self::score_chart(report, &report.ranked()));

        if let (Some(strongest), Some(weakest)) = (report.strongest(), report.weakest()) {
            output.push_str(&format!(
                "\n{} {} ({:.2})\n",
                "강점 영역:".green().bold(),
                strongest.score.title,
                strongest.score.score
            ));
            output.push_str(&format!(
                "{} {} ({:.2})\n",
                "개선 필요 영역:".yellow().bold(),
                weakest.score.title,
                weakest.score.score
            ));
        }

        let guided: Vec<_> = report
            .categories
            .iter()
            .filter_map(|c| c.guidance.as_ref().map(|g| (c, g)))
            .collect();
        if !guided.is_empty() {
            output.push_str(&Self::section_header("영역별 분석"));
            for (category, guidance) in guided {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!(
                        "── {} · {} ──",
                        category.score.title,
                        category.maturity.label()
                    )
                    .bold(),
                    Self::indent(&guidance.analysis, "  ")
                ));
                for recommendation in &guidance.recommendations {
                    output.push_str(&format!("  * {}\n", recommendation));
                }
            }
        }

        output.push_str(&Self::section_header("성숙도 단계"));
        for level in MaturityLevel::ALL {
            let line = format!("{} - {}", level.label(), level.description());
            if level == report.overall_maturity {
                output.push_str(&format!("{} {}\n", "▶".bold(), Self::paint(level, &line).bold()));
            } else {
                output.push_str(&format!("  {}\n", line.dimmed()));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(report: &Report) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the overall result and category scores only
    pub fn format_summary(report: &Report) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== AI 네이티브 조직 진단 ===".cyan().bold()
        ));
        output.push_str(&Self::overall(report));
        output.push('\n');
        output.push_str(&Self::score_chart(report, &report.category_scores()));

        output
    }

    fn overall(report: &Report) -> String {
        let mut output = String::new();
        let level = report.overall_maturity;

        output.push_str(&format!(
            "{} {} / 100\n",
            "종합 점수:".cyan().bold(),
            Self::paint(level, &format!("{:.2}", report.overall_score)).bold()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "성숙도:".cyan().bold(),
            Self::paint(level, &level.label()).bold()
        ));
        output.push_str(&format!("  {}\n", level.description()));
        output.push_str(&format!(
            "{} {}/{} ({} weighting)\n",
            "응답:".dimmed(),
            report.completion.answered,
            report.completion.total,
            report.weighting
        ));

        if !report.is_complete() {
            output.push_str(&format!(
                "{}\n",
                format!(
                    "Note: {} question(s) unanswered; they are scored as 0.",
                    report.completion.remaining()
                )
                .yellow()
            ));
        }

        output
    }

    /// Horizontal bar chart, one line per score
    fn score_chart(report: &Report, scores: &[CategoryScore]) -> String {
        let width = scores
            .iter()
            .map(|s| display_width(&s.short_title))
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        for score in scores {
            let level = report
                .categories
                .iter()
                .find(|c| c.score.category_id == score.category_id)
                .map(|c| c.maturity)
                .unwrap_or(MaturityLevel::Absent);
            let pad = " ".repeat(width - display_width(&score.short_title));
            output.push_str(&format!(
                "  {}{} {} {:>6.2}  {}\n",
                score.short_title,
                pad,
                Self::paint(level, &bar(score.score)),
                score.score,
                level.label().dimmed()
            ));
        }
        output
    }

    /// Color text by maturity level
    pub fn paint(level: MaturityLevel, text: &str) -> ColoredString {
        match level.color_hint() {
            "red" => text.red(),
            "orange" => text.truecolor(255, 165, 0),
            "yellow" => text.yellow(),
            "green" => text.green(),
            "blue" => text.blue(),
            _ => text.normal(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &Report) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &Report) -> String {
        Self::format_json(report)
    }

    fn format_summary(&self, report: &Report) -> String {
        Self::format_summary(report)
    }
}

fn bar(score: f64) -> String {
    let filled = ((score / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Terminal column width; Hangul and other East Asian wide characters take two
pub(crate) fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| match c as u32 {
            0x1100..=0x115F | 0x2E80..=0xA4CF | 0xAC00..=0xD7A3 | 0xF900..=0xFAFF
            | 0xFF00..=0xFF60 => 2,
            _ => 1,
        })
        .sum()
}
