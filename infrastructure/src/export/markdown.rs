//! Markdown report exporter
//!
//! Renders the report as a standalone Markdown document: summary, score
//! table, a ranked text bar chart and per-category guidance.

use super::write_document;
use async_trait::async_trait;
use maturity_application::ports::report_exporter::{ExportError, ExportedDocument, ReportExporter};
use maturity_domain::{MaturityLevel, Report};
use std::fmt::Write;
use std::path::PathBuf;

const BAR_WIDTH: usize = 20;

/// Writes the report as Markdown
pub struct MarkdownReportExporter {
    path: PathBuf,
}

impl MarkdownReportExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ReportExporter for MarkdownReportExporter {
    fn format_name(&self) -> &'static str {
        "markdown"
    }

    async fn export(&self, report: &Report) -> Result<ExportedDocument, ExportError> {
        let markdown = render_markdown(report);
        write_document(&self.path, markdown.as_bytes()).await
    }
}

fn bar(score: f64) -> String {
    let filled = ((score / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Render a report as Markdown
pub fn render_markdown(report: &Report) -> String {
    let mut out = String::new();

    // Writing to a String never fails
    let _ = writeln!(out, "# AI 네이티브 조직 진단 결과");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "_Generated {}_",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "## 종합 결과");
    let _ = writeln!(out);
    let _ = writeln!(out, "- **종합 점수**: {:.2} / 100", report.overall_score);
    let _ = writeln!(out, "- **성숙도**: {}", report.overall_maturity.label());
    let _ = writeln!(out, "- **가중 방식**: {}", report.weighting);
    let _ = writeln!(
        out,
        "- **응답 현황**: {}/{}",
        report.completion.answered, report.completion.total
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "> {}", report.overall_maturity.description());
    let _ = writeln!(out);

    if !report.is_complete() {
        let _ = writeln!(
            out,
            "> **Note**: {} question(s) unanswered; they are scored as 0.",
            report.completion.remaining()
        );
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "## 영역별 점수");
    let _ = writeln!(out);
    let _ = writeln!(out, "| 영역 | 점수 | 평균 | 성숙도 |");
    let _ = writeln!(out, "|---|---:|---:|---|");
    for category in &report.categories {
        let _ = writeln!(
            out,
            "| {} | {:.2} | {:.2} | {} |",
            category.score.title,
            category.score.score,
            category.average,
            category.maturity.label()
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## 개선 우선순위");
    let _ = writeln!(out);
    let _ = writeln!(out, "```text");
    let width = report
        .categories
        .iter()
        .map(|c| c.score.short_title.chars().count())
        .max()
        .unwrap_or(0);
    for score in report.ranked() {
        let pad = width - score.short_title.chars().count();
        let _ = writeln!(
            out,
            "{}{} {} {:>6.2}",
            score.short_title,
            " ".repeat(pad),
            bar(score.score),
            score.score
        );
    }
    let _ = writeln!(out, "```");
    let _ = writeln!(out);

    if let (Some(weakest), Some(strongest)) = (report.weakest(), report.strongest()) {
        let _ = writeln!(
            out,
            "- **강점 영역**: {} ({:.2})",
            strongest.score.title, strongest.score.score
        );
        let _ = writeln!(
            out,
            "- **개선 필요 영역**: {} ({:.2})",
            weakest.score.title, weakest.score.score
        );
        let _ = writeln!(out);
    }

    let guided: Vec<_> = report
        .categories
        .iter()
        .filter_map(|c| c.guidance.as_ref().map(|g| (c, g)))
        .collect();
    if !guided.is_empty() {
        let _ = writeln!(out, "## 영역별 분석");
        for (category, guidance) in guided {
            let _ = writeln!(out);
            let _ = writeln!(out, "### {}", category.score.title);
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", guidance.analysis);
            if !guidance.recommendations.is_empty() {
                let _ = writeln!(out);
                for recommendation in &guidance.recommendations {
                    let _ = writeln!(out, "- {}", recommendation);
                }
            }
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "## 성숙도 단계");
    let _ = writeln!(out);
    for level in MaturityLevel::ALL {
        let marker = if level == report.overall_maturity {
            " ◀"
        } else {
            ""
        };
        let _ = writeln!(out, "- **{}**: {}{}", level.label(), level.description(), marker);
    }

    out
}
