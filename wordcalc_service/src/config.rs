//! CLI configuration loaded from an optional TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Front-end settings. Every field has a default so a partial file works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,

    /// Log filter applied when RUST_LOG is unset.
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            log_filter: "info".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl CliConfig {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Disable pretty-printing.
    pub fn with_compact_output(mut self) -> Self {
        self.pretty = false;
        self
    }
}
