//! Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DB_FILE;
use crate::errors::ConfigError;

/// Configuration for the tally stores and persistence layer.
///
/// All fields are optional with `effective_*()` accessors supplying
/// defaults, so a missing or partial config file is always usable.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TallyConfig {
    /// Directory holding the database file. Default: current directory.
    pub data_dir: Option<PathBuf>,
    /// Database file name. Default: "tally.db".
    pub db_file: Option<String>,
    /// Tracing filter directive (e.g. "tally=debug"). Default: "info".
    pub log_filter: Option<String>,
}

impl TallyConfig {
    /// Load configuration from a TOML file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Effective database path: data_dir joined with db_file.
    pub fn effective_db_path(&self) -> PathBuf {
        let dir = self
            .data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        dir.join(self.db_file.as_deref().unwrap_or(DEFAULT_DB_FILE))
    }

    /// Effective tracing filter, defaulting to "info".
    pub fn effective_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or("info")
    }
}
