//! Configuration file loading for ai-maturity
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./maturity.toml` or `./.maturity.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/ai-maturity/config.toml`
//! 4. Fallback: `~/.config/ai-maturity/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileCatalogConfig, FileConfig, FileExportConfig, FileLoggingConfig, FileOutputConfig,
    FileScoringConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
