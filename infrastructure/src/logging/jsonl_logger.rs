//! JSONL file writer for assessment events.
//!
//! Each [`AssessmentEvent`] is serialized as a single JSON line with its
//! `type` tag and a `timestamp`, appended to the file via a buffered writer.

use maturity_application::ports::assessment_observer::{AssessmentEvent, AssessmentObserver};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL event logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Appends to an existing log, so
/// one file can hold several sessions. Flushes on `Drop`.
pub struct JsonlEventLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlEventLogger {
    /// Create a new logger writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create event log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open event log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AssessmentObserver for JsonlEventLogger {
    fn notify(&self, event: &AssessmentEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let Ok(serde_json::Value::Object(mut record)) = serde_json::to_value(event) else {
            return;
        };
        record.insert(
            "timestamp".to_string(),
            serde_json::Value::String(timestamp),
        );

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // JSONL is append-only; flush each line
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlEventLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maturity_domain::{CompletionStatus, MaturityLevel};

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_jsonl_logger_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let logger = JsonlEventLogger::new(&path).unwrap();

        logger.notify(&AssessmentEvent::AnswerChanged {
            question_id: "q_vision_1".to_string(),
            category_id: "vision_strategy".to_string(),
            rating: 4,
            previous: 0,
            step: CompletionStatus::new(1, 5),
        });
        logger.notify(&AssessmentEvent::Submitted {
            overall_score: 66.86,
            maturity: MaturityLevel::Defined,
        });

        // Flush
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for value in &lines {
            assert!(value.get("type").is_some());
            assert!(value.get("timestamp").is_some());
        }

        assert_eq!(lines[0]["type"], "answer_changed");
        assert_eq!(lines[0]["question_id"], "q_vision_1");
        assert_eq!(lines[0]["rating"], 4);
        assert_eq!(lines[0]["step"]["answered"], 1);

        assert_eq!(lines[1]["type"], "submitted");
        assert_eq!(lines[1]["maturity"], "defined");
    }

    #[test]
    fn test_unit_variant_and_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("events.jsonl");

        let logger = JsonlEventLogger::new(&path).unwrap();
        logger.notify(&AssessmentEvent::Reset);
        drop(logger);

        let logger = JsonlEventLogger::new(&path).unwrap();
        logger.notify(&AssessmentEvent::Reset);
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["type"], "reset");
    }

    #[test]
    fn test_jsonl_logger_returns_none_for_directory_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlEventLogger::new(dir.path()).is_none());
    }
}
