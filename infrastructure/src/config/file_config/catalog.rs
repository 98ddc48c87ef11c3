//! Catalog configuration from TOML (`[catalog]` section)

use serde::{Deserialize, Serialize};

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// TOML catalog file replacing the built-in questions
    pub path: Option<String>,
}
