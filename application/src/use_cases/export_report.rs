//! Export Report use case
//!
//! Writes a [`Report`] through a [`ReportExporter`], allowing at most one
//! export in flight at a time.

use crate::ports::report_exporter::{ExportError, ExportedDocument, ReportExporter};
use maturity_domain::Report;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during export
#[derive(Error, Debug)]
pub enum ExportReportError {
    #[error("Export failed: {0}")]
    Failed(#[from] ExportError),
}

impl ExportReportError {
    /// Whether calling `execute` again may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, ExportReportError::Failed(_))
    }
}

/// Result of an export request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The document was written
    Exported(ExportedDocument),
    /// Another export was already running; nothing was done
    AlreadyInProgress,
}

/// Releases the busy flag when dropped
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Use case for exporting a report document
pub struct ExportReportUseCase<E: ReportExporter + ?Sized + 'static> {
    exporter: Arc<E>,
    busy: AtomicBool,
}

impl<E: ReportExporter + ?Sized + 'static> ExportReportUseCase<E> {
    pub fn new(exporter: Arc<E>) -> Self {
        Self {
            exporter,
            busy: AtomicBool::new(false),
        }
    }

    /// An export is currently running
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub async fn execute(&self, report: &Report) -> Result<ExportOutcome, ExportReportError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            info!("Export already in progress, ignoring request");
            return Ok(ExportOutcome::AlreadyInProgress);
        }
        let _guard = BusyGuard(&self.busy);

        match self.exporter.export(report).await {
            Ok(document) => {
                info!(
                    "Exported {} report to {} ({} bytes)",
                    self.exporter.format_name(),
                    document.path.display(),
                    document.bytes
                );
                Ok(ExportOutcome::Exported(document))
            }
            Err(e) => {
                warn!("{} export failed: {}", self.exporter.format_name(), e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use maturity_domain::{Catalog, OverallWeighting, sample_answers};
    use std::path::PathBuf;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    fn report() -> Report {
        Report::build(&Catalog::builtin(), &sample_answers(), OverallWeighting::Question)
    }

    /// Fails the first `failures` calls, then succeeds
    struct FlakyExporter {
        failures: AtomicUsize,
        calls: AtomicUsize,
    }

    impl FlakyExporter {
        fn new(failures: usize) -> Self {
            Self {
                failures: AtomicUsize::new(failures),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ReportExporter for FlakyExporter {
        fn format_name(&self) -> &'static str {
            "test"
        }

        async fn export(&self, _report: &Report) -> Result<ExportedDocument, ExportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let remaining = self.failures.load(Ordering::SeqCst);
            if remaining > 0 {
                self.failures.store(remaining - 1, Ordering::SeqCst);
                return Err(ExportError::Io("disk full".to_string()));
            }
            Ok(ExportedDocument {
                path: PathBuf::from("report.test"),
                bytes: 42,
            })
        }
    }

    /// Blocks until released, so a second request can observe the busy flag
    struct GatedExporter {
        entered: Notify,
        release: Notify,
        paths: Mutex<Vec<PathBuf>>,
    }

    #[async_trait]
    impl ReportExporter for GatedExporter {
        fn format_name(&self) -> &'static str {
            "gated"
        }

        async fn export(&self, _report: &Report) -> Result<ExportedDocument, ExportError> {
            self.entered.notify_one();
            self.release.notified().await;
            let path = PathBuf::from("gated.out");
            self.paths.lock().unwrap().push(path.clone());
            Ok(ExportedDocument { path, bytes: 1 })
        }
    }

    #[tokio::test]
    async fn test_export_success() {
        let use_case = ExportReportUseCase::new(Arc::new(FlakyExporter::new(0)));
        let outcome = use_case.execute(&report()).await.unwrap();
        assert_eq!(
            outcome,
            ExportOutcome::Exported(ExportedDocument {
                path: PathBuf::from("report.test"),
                bytes: 42,
            })
        );
        assert!(!use_case.is_busy());
    }

    #[tokio::test]
    async fn test_failure_releases_flag_and_is_retryable() {
        let exporter = Arc::new(FlakyExporter::new(1));
        let use_case = ExportReportUseCase::new(exporter.clone());

        let err = use_case.execute(&report()).await.unwrap_err();
        assert!(err.is_retryable());
        assert!(!use_case.is_busy());

        let outcome = use_case.execute(&report()).await.unwrap();
        assert!(matches!(outcome, ExportOutcome::Exported(_)));
        assert_eq!(exporter.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_second_request_while_busy_is_ignored() {
        let exporter = Arc::new(GatedExporter {
            entered: Notify::new(),
            release: Notify::new(),
            paths: Mutex::new(Vec::new()),
        });
        let use_case = ExportReportUseCase::new(exporter.clone());
        let report = report();

        let first = use_case.execute(&report);
        let second = async {
            exporter.entered.notified().await;
            assert!(use_case.is_busy());
            let outcome = use_case.execute(&report).await.unwrap();
            exporter.release.notify_one();
            outcome
        };

        let (first, second) = tokio::join!(first, second);
        assert!(matches!(first.unwrap(), ExportOutcome::Exported(_)));
        assert_eq!(second, ExportOutcome::AlreadyInProgress);
        assert_eq!(exporter.paths.lock().unwrap().len(), 1);
        assert!(!use_case.is_busy());
    }
}
