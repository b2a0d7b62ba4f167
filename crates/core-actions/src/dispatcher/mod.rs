//! Dispatcher applying `Action` to mutable editor state.
//!
//! Sub-modules:
//! * `motion`  - cursor movement
//! * `edit`    - text mutation through recorded operations
//! * `undo`    - undo / redo
//! * `command` - search, replace and file commands
//!
//! Engine errors (a rejected operation, an unreadable file) propagate to the
//! caller; the state is unchanged when one is returned.

use crate::{Action, ActionObserver};
use core_state::{EditorError, EditorState};

mod command;
mod edit;
mod motion;
mod undo;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Something visible changed (text, cursor, viewport or highlights).
    pub dirty: bool,
    /// The whole buffer was swapped (open / new) or its line structure
    /// changed; a front end should drop any per-line caches.
    pub buffer_replaced: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            buffer_replaced: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            buffer_replaced: false,
        }
    }
    pub fn buffer_replaced() -> Self {
        Self {
            dirty: true,
            buffer_replaced: true,
        }
    }
}

/// Apply an action to editor state.
pub fn dispatch(
    action: Action,
    state: &mut EditorState,
    observers: &[Box<dyn ActionObserver>],
) -> Result<DispatchResult, EditorError> {
    for obs in observers {
        obs.on_action(&action);
    }

    match action {
        Action::Motion(kind) => Ok(motion::handle_motion(kind, state)),
        Action::Edit(kind) => edit::handle_edit(kind, state),
        Action::Undo => undo::handle_undo(state),
        Action::Redo => undo::handle_redo(state),
        Action::Search(pattern) => Ok(command::handle_search(&pattern, state)),
        Action::ClearSearch => Ok(command::handle_clear_search(state)),
        Action::ReplaceAll { search, replace } => {
            command::handle_replace_all(&search, &replace, state)
        }
        Action::Open(path) => command::handle_open(&path, state),
        Action::Write(path) => command::handle_write(path.as_deref(), state),
        Action::New => Ok(command::handle_new(state)),
    }
}
