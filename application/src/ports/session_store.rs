//! Session persistence port
//!
//! Defines how the answer snapshot survives between runs.

use maturity_domain::AnswerStore;
use std::sync::Mutex;
use thiserror::Error;

/// Well-known key under which the answer snapshot is stored
pub const SESSION_KEY: &str = "assessmentScores";

/// Errors surfaced by a session store
#[derive(Error, Debug)]
pub enum SessionStoreError {
    #[error("Failed to read session snapshot: {0}")]
    Read(String),

    #[error("Failed to write session snapshot: {0}")]
    Write(String),

    #[error("Session snapshot is corrupt: {0}")]
    Corrupt(String),
}

/// Key-value persistence for the answer snapshot
///
/// Last write wins; reads and writes are synchronous. Implementations live
/// in the infrastructure layer.
pub trait SessionStore: Send + Sync {
    /// Load the saved snapshot, `Ok(None)` when nothing was saved
    fn load(&self) -> Result<Option<AnswerStore>, SessionStoreError>;

    /// Replace the saved snapshot
    fn save(&self, answers: &AnswerStore) -> Result<(), SessionStoreError>;

    /// Remove the saved snapshot
    fn clear(&self) -> Result<(), SessionStoreError>;
}

/// No-op store for when persistence is disabled
pub struct NoSessionStore;

impl SessionStore for NoSessionStore {
    fn load(&self) -> Result<Option<AnswerStore>, SessionStoreError> {
        Ok(None)
    }

    fn save(&self, _answers: &AnswerStore) -> Result<(), SessionStoreError> {
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        Ok(())
    }
}

/// In-process store, used for tests and one-shot runs
#[derive(Default)]
pub struct InMemorySessionStore {
    snapshot: Mutex<Option<AnswerStore>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing snapshot
    pub fn with_snapshot(answers: AnswerStore) -> Self {
        Self {
            snapshot: Mutex::new(Some(answers)),
        }
    }

    /// Current snapshot, if any
    pub fn snapshot(&self) -> Option<AnswerStore> {
        self.snapshot.lock().ok().and_then(|s| s.clone())
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<AnswerStore>, SessionStoreError> {
        self.snapshot
            .lock()
            .map(|s| s.clone())
            .map_err(|e| SessionStoreError::Read(e.to_string()))
    }

    fn save(&self, answers: &AnswerStore) -> Result<(), SessionStoreError> {
        let mut snapshot = self
            .snapshot
            .lock()
            .map_err(|e| SessionStoreError::Write(e.to_string()))?;
        *snapshot = Some(answers.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        let mut snapshot = self
            .snapshot
            .lock()
            .map_err(|e| SessionStoreError::Write(e.to_string()))?;
        *snapshot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_last_write_wins() {
        let store = InMemorySessionStore::new();
        assert!(store.load().unwrap().is_none());

        let mut a = AnswerStore::new();
        a.set("q1", 2).unwrap();
        store.save(&a).unwrap();
        a.set("q1", 4).unwrap();
        store.save(&a).unwrap();

        assert_eq!(store.load().unwrap().unwrap().get("q1"), 4);

        store.clear().unwrap();
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_no_session_store_is_empty() {
        let store = NoSessionStore;
        store.save(&AnswerStore::new()).unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
