//! Editor intents and their dispatch onto an `EditorState`.
//!
//! A front end (key handling, command prompt, batch script) translates its
//! raw input into an [`Action`]; [`dispatcher::dispatch`] turns that into
//! either a navigation call or an [`core_state::Operation`] built from the
//! current cursor (see [`intent`]) and reports what changed.

use std::path::PathBuf;

pub mod dispatcher;
pub mod intent;

pub use dispatcher::{DispatchResult, dispatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Up,
    Down,
    Left,
    Right,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
    WordLeft,
    WordRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Type a character at the cursor.
    InsertChar(char),
    /// Delete the char before the cursor, or join with the previous line at column 0.
    Backspace,
    /// Delete the char under the cursor, or join the next line at end of line.
    DeleteUnder,
    /// Split the line at the cursor.
    Newline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    Undo,
    Redo,
    /// Highlight every occurrence of the pattern (empty clears).
    Search(String),
    ClearSearch,
    /// Recorded global replace; afterwards the replacement text is searched
    /// so the front end can highlight it.
    ReplaceAll { search: String, replace: String },
    /// Load a file, replacing the session.
    Open(PathBuf),
    /// Save to the given path, or to the session's current file.
    Write(Option<PathBuf>),
    /// Start over with an empty buffer.
    New,
}

/// Observer notified before each action is dispatched.
pub trait ActionObserver {
    fn on_action(&self, action: &Action);
}
