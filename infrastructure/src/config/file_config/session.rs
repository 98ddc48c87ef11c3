//! Session configuration from TOML (`[session]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw session persistence configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Save answers between runs
    pub persist: bool,
    /// Directory holding the answer snapshot
    pub data_dir: Option<String>,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            persist: true,
            data_dir: None,
        }
    }
}

impl FileSessionConfig {
    /// Configured data directory, or `$XDG_DATA_HOME/ai-maturity`
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        match &self.data_dir {
            Some(dir) => Some(PathBuf::from(dir)),
            None => dirs::data_dir().map(|d| d.join("ai-maturity")),
        }
    }
}
