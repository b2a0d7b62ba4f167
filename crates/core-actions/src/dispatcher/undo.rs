//! Undo / Redo handling.
//!
//! Delegates to the operation log inside `EditorState`. An empty stack is a
//! clean no-op; a history entry that no longer fits the buffer is an error
//! and stays on its stack.

use super::DispatchResult;
use core_state::{EditorError, EditorState};

pub(crate) fn handle_undo(state: &mut EditorState) -> Result<DispatchResult, EditorError> {
    let before = state.buffer().line_count();
    if state.undo()? {
        let after = state.buffer().line_count();
        tracing::trace!(target: "actions.dispatch", op="undo", buffer_changed = (before != after), "undo");
        Ok(changed(before, after))
    } else {
        Ok(DispatchResult::clean())
    }
}

pub(crate) fn handle_redo(state: &mut EditorState) -> Result<DispatchResult, EditorError> {
    let before = state.buffer().line_count();
    if state.redo()? {
        let after = state.buffer().line_count();
        tracing::trace!(target: "actions.dispatch", op="redo", buffer_changed = (before != after), "redo");
        Ok(changed(before, after))
    } else {
        Ok(DispatchResult::clean())
    }
}

fn changed(before: usize, after: usize) -> DispatchResult {
    if before != after {
        DispatchResult::buffer_replaced()
    } else {
        DispatchResult::dirty()
    }
}
