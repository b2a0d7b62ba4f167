//! Session persistence: remembers the last opened file between runs.
//!
//! Stored as a tiny TOML document next to the configuration:
//!
//! ```toml
//! [editor]
//! path = "notes.txt"
//! ```
//!
//! A missing or unreadable session file simply means "no last path".

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

pub const SESSION_FILE_NAME: &str = "lined-session.toml";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFile {
    #[serde(default)]
    pub editor: EditorSection,
}

/// Session file in the working directory.
pub fn default_path() -> PathBuf {
    PathBuf::from(SESSION_FILE_NAME)
}

/// Last opened path recorded in `session`, if any.
pub fn last_path(session: &Path) -> Option<PathBuf> {
    let content = fs::read_to_string(session).ok()?;
    match toml::from_str::<SessionFile>(&content) {
        Ok(file) => file.editor.path,
        Err(e) => {
            warn!(target: "config", session = %session.display(), error = %e, "session_parse_failed");
            None
        }
    }
}

/// Record `path` as the last opened file.
pub fn store_last_path(session: &Path, path: &Path) -> Result<()> {
    let file = SessionFile {
        editor: EditorSection {
            path: Some(path.to_path_buf()),
        },
    };
    let content = toml::to_string(&file).context("serialize session")?;
    fs::write(session, content)
        .with_context(|| format!("write session file {}", session.display()))?;
    debug!(target: "config", session = %session.display(), path = %path.display(), "session_stored");
    Ok(())
}
