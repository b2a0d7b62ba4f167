//! Configuration loading and parsing.
//!
//! Parses `lined.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [viewport]
//! max_lines = 24
//! max_cols = 120
//!
//! [history]
//! limit = 500
//! ```
//!
//! Every field is optional. A missing file or a parse error falls back to
//! defaults. Unknown fields are ignored so the file can grow without warnings.
//! The raw values are kept as written; `Config::viewport_size` applies the
//! clamp (sizes of zero become 1).

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub mod session;

pub const CONFIG_FILE_NAME: &str = "lined.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ViewportConfig {
    #[serde(default = "ViewportConfig::default_max_lines")]
    pub max_lines: usize,
    #[serde(default = "ViewportConfig::default_max_cols")]
    pub max_cols: usize,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            max_lines: Self::default_max_lines(),
            max_cols: Self::default_max_cols(),
        }
    }
}

impl ViewportConfig {
    const fn default_max_lines() -> usize {
        24
    }
    const fn default_max_cols() -> usize {
        120
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum undo depth; absent means unbounded.
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
    pub source: Option<PathBuf>,
}

/// Local working directory `lined.toml` first, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("lined").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                raw: Some(content),
                file,
                source: Some(path),
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Effective `(max_lines, max_cols)`; zero values are raised to 1.
    pub fn viewport_size(&self) -> (usize, usize) {
        let raw = &self.file.viewport;
        let lines = raw.max_lines.max(1);
        let cols = raw.max_cols.max(1);
        if (lines, cols) != (raw.max_lines, raw.max_cols) {
            info!(
                target: "config",
                raw_lines = raw.max_lines,
                raw_cols = raw.max_cols,
                lines,
                cols,
                "viewport_size_clamped"
            );
        }
        (lines, cols)
    }

    pub fn history_limit(&self) -> Option<usize> {
        self.file.history.limit
    }
}
