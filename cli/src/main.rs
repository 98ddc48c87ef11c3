//! CLI entrypoint for ai-maturity
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use maturity_application::{
    AssessmentObserver, AssessmentSession, CompositeObserver, ExportOutcome, ExportReportUseCase,
    GenerateReportUseCase, NoSessionStore, ScoringPolicy, SessionStore,
};
use maturity_domain::{AnswerStore, Catalog, ConfigIssue, Report, Severity, sample_answers};
use maturity_infrastructure::{
    ConfigLoader, ExportFormat, FileConfig, JsonFileSessionStore, JsonlEventLogger,
    TomlCatalogLoader,
};
use maturity_presentation::{
    Cli, ConsoleFormatter, ExportFormatArg, OutputConfig, OutputFormatter, ProgressReporter,
    QuestionnaireRepl,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting ai-maturity");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    report_config_issues(&config.validate())?;

    let (weighting, _) = config.scoring.parse_weighting();
    let policy = ScoringPolicy {
        weighting: cli.weighting.map(Into::into).unwrap_or(weighting),
        allow_incomplete: cli.allow_incomplete || config.scoring.allow_incomplete,
    };

    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color,
        show_progress: config.output.show_progress && !cli.quiet,
    };
    output.apply_color();

    // === Dependency Injection ===
    let catalog = Arc::new(TomlCatalogLoader::load_or_builtin(
        config.catalog.path.as_deref().map(Path::new),
    )?);
    let store = session_store(&config);

    if cli.reset {
        store
            .clear()
            .context("Failed to clear saved answers")?;
        println!("Saved answers cleared.");
        return Ok(());
    }

    let report_use_case = GenerateReportUseCase::new(catalog.clone(), policy);

    let report = if cli.is_batch() {
        let answers = match &cli.answers {
            Some(path) => read_answers(path, &catalog)?,
            None => sample_answers(),
        };
        report_use_case.execute(&answers)?
    } else {
        let observer = build_observer(&config, &catalog, &output);
        let session = AssessmentSession::start(catalog.clone(), store, observer);
        let mut repl = QuestionnaireRepl::new(session, report_use_case);
        match repl.run()? {
            Some(report) => report,
            None => return Ok(()),
        }
    };

    // Output results
    println!("{}", ConsoleFormatter.render(&report, output.format));

    if let Some(path) = export_path(&cli, &config) {
        export(&report, &path, export_format(&cli, &config, &path)).await?;
    }

    Ok(())
}

/// Print configuration issues; errors abort startup
fn report_config_issues(issues: &[ConfigIssue]) -> Result<()> {
    for issue in issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => eprintln!("Config error: {}", issue.message),
        }
    }
    if ConfigIssue::has_errors(issues) {
        bail!("Invalid configuration");
    }
    Ok(())
}

fn session_store(config: &FileConfig) -> Arc<dyn SessionStore> {
    if !config.session.persist {
        return Arc::new(NoSessionStore);
    }
    match config.session.resolve_data_dir() {
        Some(dir) => Arc::new(JsonFileSessionStore::new(dir)),
        None => {
            warn!("No data directory available; answers will not be saved");
            Arc::new(NoSessionStore)
        }
    }
}

fn build_observer(
    config: &FileConfig,
    catalog: &Arc<Catalog>,
    output: &OutputConfig,
) -> Arc<dyn AssessmentObserver> {
    let mut observer = CompositeObserver::new(Vec::new());
    if output.show_progress {
        observer = observer.with(Arc::new(ProgressReporter::new(catalog.clone())));
    }
    if let Some(path) = &config.logging.event_log
        && let Some(logger) = JsonlEventLogger::new(path)
    {
        info!("Writing assessment events to {}", logger.path().display());
        observer = observer.with(Arc::new(logger));
    }
    Arc::new(observer)
}

/// Read a JSON answers file, dropping ids the catalog does not know
fn read_answers(path: &Path, catalog: &Catalog) -> Result<AnswerStore> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file {}", path.display()))?;
    let mut answers: AnswerStore = serde_json::from_str(&content)
        .with_context(|| format!("Invalid answers file {}", path.display()))?;

    let unknown = answers.retain_known(catalog);
    if !unknown.is_empty() {
        warn!(
            "Ignoring {} answer(s) for unknown questions: {}",
            unknown.len(),
            unknown.join(", ")
        );
    }
    Ok(answers)
}

fn export_path(cli: &Cli, config: &FileConfig) -> Option<PathBuf> {
    cli.export
        .clone()
        .or_else(|| config.export.path.as_ref().map(PathBuf::from))
}

/// `--export-format`, then the file extension, then `[export] format`
fn export_format(cli: &Cli, config: &FileConfig, path: &Path) -> ExportFormat {
    match cli.export_format {
        Some(ExportFormatArg::Markdown) => ExportFormat::Markdown,
        Some(ExportFormatArg::Json) => ExportFormat::Json,
        None => ExportFormat::from_extension(path)
            .unwrap_or_else(|| config.export.parse_format().0),
    }
}

async fn export(report: &Report, path: &Path, format: ExportFormat) -> Result<()> {
    let use_case = ExportReportUseCase::new(format.exporter(path));
    match use_case.execute(report).await? {
        ExportOutcome::Exported(document) => {
            println!(
                "Report written to {} ({} bytes, {})",
                document.path.display(),
                document.bytes,
                format
            );
        }
        ExportOutcome::AlreadyInProgress => {
            println!("An export is already in progress");
        }
    }
    Ok(())
}
