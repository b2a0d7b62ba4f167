//! Text edit action handling (insert/backspace/delete/newline).
//!
//! Each intent is turned into an `Operation` by `crate::intent` and applied
//! with history recording, so every edit made through the dispatcher can be
//! undone. Intents with nothing to act on (backspace at the buffer origin,
//! delete at the buffer end) are clean no-ops.

use super::DispatchResult;
use crate::{EditKind, intent};
use core_state::{EditorError, EditorState};

pub(crate) fn handle_edit(
    kind: EditKind,
    state: &mut EditorState,
) -> Result<DispatchResult, EditorError> {
    let op = match kind {
        EditKind::InsertChar(ch) => Some(intent::insert_char(state, ch)),
        EditKind::Backspace => intent::backspace(state),
        EditKind::DeleteUnder => intent::delete_under(state),
        EditKind::Newline => Some(intent::newline(state)),
    };
    let Some(op) = op else {
        tracing::trace!(target: "actions.dispatch", ?kind, "edit_noop");
        return Ok(DispatchResult::clean());
    };
    let lines_before = state.buffer().line_count();
    let at = state.cursor();
    state.apply(op, true)?;
    let lines_after = state.buffer().line_count();
    tracing::trace!(
        target: "actions.dispatch",
        op = "edit",
        ?kind,
        line = at.line,
        col = at.col,
        to_line = state.cursor().line,
        to_col = state.cursor().col,
        "edit"
    );
    if lines_before != lines_after {
        Ok(DispatchResult::buffer_replaced())
    } else {
        Ok(DispatchResult::dirty())
    }
}
