//! Motion sub-dispatch (cursor movement).
//!
//! Motions never touch the text or the history; the result is dirty only
//! when the cursor or the viewport actually moved.

use super::DispatchResult;
use crate::MotionKind;
use core_state::EditorState;

pub(crate) fn handle_motion(kind: MotionKind, state: &mut EditorState) -> DispatchResult {
    let before = state.cursor();
    let view_before = (state.viewport().top_line(), state.viewport().left_col());
    match kind {
        MotionKind::Up => state.move_up(),
        MotionKind::Down => state.move_down(),
        MotionKind::Left => state.move_left(),
        MotionKind::Right => state.move_right(),
        MotionKind::LineStart => state.move_line_start(),
        MotionKind::LineEnd => state.move_line_end(),
        MotionKind::PageUp => state.page_up(),
        MotionKind::PageDown => state.page_down(),
        MotionKind::WordLeft => state.move_word_left(),
        MotionKind::WordRight => state.move_word_right(),
    }
    let after = state.cursor();
    let view_after = (state.viewport().top_line(), state.viewport().left_col());
    tracing::trace!(
        target: "actions.dispatch",
        op = "motion",
        ?kind,
        from_line = before.line,
        from_col = before.col,
        to_line = after.line,
        to_col = after.col,
        "motion"
    );
    if before != after || view_before != view_after {
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}
