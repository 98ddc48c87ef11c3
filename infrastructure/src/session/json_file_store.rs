//! JSON file session store
//!
//! Keeps the answer snapshot as a flat JSON object in
//! `<data_dir>/assessmentScores.json`.

use maturity_application::ports::session_store::{SESSION_KEY, SessionStore, SessionStoreError};
use maturity_domain::AnswerStore;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed [`SessionStore`]; last write wins
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    /// Store the snapshot under `data_dir` using the well-known session key
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{SESSION_KEY}.json")),
        }
    }

    /// Get the path to the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonFileSessionStore {
    fn load(&self) -> Result<Option<AnswerStore>, SessionStoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SessionStoreError::Read(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let answers: AnswerStore = serde_json::from_str(&content).map_err(|e| {
            SessionStoreError::Corrupt(format!("{}: {}", self.path.display(), e))
        })?;
        debug!(
            "Restored {} answer(s) from {}",
            answers.len(),
            self.path.display()
        );
        Ok(Some(answers))
    }

    fn save(&self, answers: &AnswerStore) -> Result<(), SessionStoreError> {
        let write_err = |e: std::io::Error| {
            SessionStoreError::Write(format!("{}: {}", self.path.display(), e))
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string(answers)
            .map_err(|e| SessionStoreError::Write(e.to_string()))?;

        // Atomic replace via rename
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(write_err)?;
        std::fs::rename(&tmp, &self.path).map_err(write_err)
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::Write(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
