//! Editor state: one editing session's buffer, cursor, viewport, undo log and
//! search results.
//!
//! Every mutation goes through [`EditorState::apply`] (or undo/redo, which
//! reuse the same operation machinery). After each mutation and each
//! navigation call two steps run unconditionally and in this order:
//!
//! 1. [`EditorState::normalize_cursor`] clamps the cursor into the buffer.
//!    Callers may hand in stale coordinates after the buffer shrank, so this
//!    is the single authority on what a legal cursor is.
//! 2. [`EditorState::scroll_into_view`] recomputes the viewport from the
//!    (now legal) cursor.
//!
//! Invariants after every public call:
//! * the buffer holds at least one line;
//! * `cursor.line < line_count` and `cursor.col <= line_len(cursor.line)`;
//! * the viewport contains the cursor (see [`viewport`]).
//!
//! Sessions are plain owned values with no interior mutability. Sharing one
//! across threads requires external serialization.

use core_text::{Buffer, MatchSpan, Position, motion, search};
use std::path::PathBuf;
use tracing::trace;

mod error;
pub mod io;
pub mod operation;
pub mod undo;
pub mod viewport;

pub use error::EditorError;
pub use operation::{Effect, Operation};
pub use undo::{HistoryEntry, UndoLog};
pub use viewport::{DEFAULT_MAX_COLS, DEFAULT_MAX_LINES, Viewport};

#[derive(Debug, Default)]
pub struct EditorState {
    buffer: Buffer,
    cursor: Position,
    viewport: Viewport,
    history: UndoLog,
    matches: Vec<MatchSpan>,
    /// Path of the last successful load or save.
    pub file_name: Option<PathBuf>,
    /// Set by any buffer mutation, cleared by load/save.
    pub dirty: bool,
}

impl EditorState {
    /// Empty session with the default 24x120 viewport.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buffer(buffer: Buffer) -> Self {
        Self {
            buffer,
            ..Self::default()
        }
    }

    /// Replace the viewport size; the window is recomputed for the current cursor.
    pub fn with_viewport_size(mut self, max_lines: usize, max_cols: usize) -> Self {
        self.viewport = Viewport::new(max_lines, max_cols);
        self.scroll_into_view();
        self
    }

    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history = UndoLog::with_limit(limit);
        self
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }
    pub fn cursor(&self) -> Position {
        self.cursor
    }
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
    /// Spans from the last search; stale after any mutation.
    pub fn matches(&self) -> &[MatchSpan] {
        &self.matches
    }
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Move the cursor to an arbitrary (possibly stale) position; it is
    /// clamped into the buffer.
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = pos;
        self.normalize_cursor();
        self.scroll_into_view();
    }

    /// Clamp the row into `[0, line_count)`, then the column into `[0, line_len]`.
    pub fn normalize_cursor(&mut self) {
        let buf = &self.buffer;
        self.cursor
            .clamp_to(buf.line_count(), |line| buf.line_len(line));
    }

    /// Recompute the viewport for the current cursor.
    pub fn scroll_into_view(&mut self) {
        self.viewport
            .adjust_vertical(self.cursor.line, self.buffer.line_count());
        self.viewport
            .adjust_horizontal(self.cursor.col, self.buffer.line_len(self.cursor.line));
    }

    fn settle(&mut self) {
        self.normalize_cursor();
        self.scroll_into_view();
    }

    /// Apply an operation. When `record_history` is set the operation is
    /// pushed onto the undo stack and the redo stack is cleared.
    ///
    /// A rejected operation (see [`operation`]) leaves the session untouched.
    /// Inert operations (a delete aimed past the end of a line, an empty
    /// replace) change no text and are never pushed onto the undo stack, but
    /// with `record_history` set they still discard the redo stack.
    pub fn apply(&mut self, op: Operation, record_history: bool) -> Result<(), EditorError> {
        let effect = op.validate(&self.buffer)?;
        let cursor_before = self.cursor;
        if let Some(target) = op.apply_to(&mut self.buffer) {
            self.cursor = target;
        }
        self.settle();
        trace!(
            target: "state.edit",
            op = op.kind(),
            ?effect,
            from_line = cursor_before.line,
            from_col = cursor_before.col,
            to_line = self.cursor.line,
            to_col = self.cursor.col,
            record_history,
            "apply"
        );
        if effect == Effect::Mutates {
            self.dirty = true;
        }
        if record_history {
            match effect {
                Effect::Mutates => self.history.record(HistoryEntry { op, cursor_before }),
                Effect::Inert => self.history.discard_redo(),
            }
        }
        Ok(())
    }

    /// Revert the most recent operation. Returns `Ok(false)` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Result<bool, EditorError> {
        let Some(entry) = self.history.pop_undo() else {
            return Ok(false);
        };
        if let Err(e) = entry.op.validate_revert(&self.buffer) {
            self.history.push_undo(entry);
            return Err(e);
        }
        entry.op.revert(&mut self.buffer);
        self.cursor = entry.cursor_before;
        self.settle();
        self.dirty = true;
        trace!(target: "state.undo", op = entry.op.kind(), undo_depth = self.history.undo_depth(), redo_depth = self.history.redo_depth() + 1, "undo_pop");
        self.history.push_redo(entry);
        Ok(true)
    }

    /// Re-apply the most recently undone operation. Returns `Ok(false)` when
    /// there is nothing to redo.
    pub fn redo(&mut self) -> Result<bool, EditorError> {
        let Some(entry) = self.history.pop_redo() else {
            return Ok(false);
        };
        let cursor_before = self.cursor;
        if let Err(e) = self.apply(entry.op.clone(), false) {
            self.history.push_redo(entry);
            return Err(e);
        }
        trace!(target: "state.undo", op = entry.op.kind(), undo_depth = self.history.undo_depth() + 1, redo_depth = self.history.redo_depth(), "redo_pop");
        self.history.push_undo(HistoryEntry {
            op: entry.op,
            cursor_before,
        });
        Ok(true)
    }

    /// Reset to a single empty line, origin cursor and viewport, no history
    /// and no matches.
    pub fn clear(&mut self) {
        self.buffer = Buffer::new();
        self.cursor = Position::origin();
        self.viewport.reset();
        self.history.clear();
        self.matches.clear();
        self.dirty = false;
    }

    // ---- navigation ----

    fn navigate(&mut self, f: impl FnOnce(&Buffer, &mut Position)) {
        f(&self.buffer, &mut self.cursor);
        self.settle();
    }

    pub fn move_up(&mut self) {
        self.navigate(motion::up);
    }
    pub fn move_down(&mut self) {
        self.navigate(motion::down);
    }
    pub fn move_left(&mut self) {
        self.navigate(motion::left);
    }
    pub fn move_right(&mut self) {
        self.navigate(motion::right);
    }
    pub fn move_line_start(&mut self) {
        self.navigate(motion::line_start);
    }
    pub fn move_line_end(&mut self) {
        self.navigate(motion::line_end);
    }
    pub fn move_word_left(&mut self) {
        self.navigate(motion::word_left);
    }
    pub fn move_word_right(&mut self) {
        self.navigate(motion::word_right);
    }

    /// Move up by exactly one viewport height.
    pub fn page_up(&mut self) {
        let page = self.viewport.max_lines();
        self.navigate(|buf, pos| motion::page_up(buf, pos, page));
    }

    /// Move down by exactly one viewport height.
    pub fn page_down(&mut self) {
        let page = self.viewport.max_lines();
        self.navigate(|buf, pos| motion::page_down(buf, pos, page));
    }

    // ---- search ----

    /// Replace the match list with every (overlapping) occurrence of
    /// `pattern`. An empty pattern just clears the list.
    pub fn search_all(&mut self, pattern: &str) -> &[MatchSpan] {
        self.matches = search::search_all(&self.buffer, pattern);
        trace!(target: "state.search", pattern, matches = self.matches.len(), "search_all");
        &self.matches
    }

    pub fn clear_matches(&mut self) {
        self.matches.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(lines: &[&str]) -> EditorState {
        EditorState::with_buffer(Buffer::from_lines(lines))
    }

    #[test]
    fn insert_then_undo_restores_cursor() {
        let mut st = state(&["abc"]);
        st.set_cursor(Position::new(0, 1));
        st.apply(
            Operation::InsertChar {
                row: 0,
                col: 1,
                ch: 'x',
            },
            true,
        )
        .unwrap();
        assert_eq!(st.buffer().line_string(0).unwrap(), "axbc");
        assert_eq!(st.cursor(), Position::new(0, 2));
        assert!(st.undo().unwrap());
        assert_eq!(st.buffer().line_string(0).unwrap(), "abc");
        assert_eq!(st.cursor(), Position::new(0, 1));
    }

    #[test]
    fn rejected_operation_changes_nothing() {
        let mut st = state(&["abc"]);
        let err = st
            .apply(
                Operation::SplitLine {
                    row: 3,
                    col: 0,
                    right: Vec::new(),
                },
                true,
            )
            .unwrap_err();
        assert!(matches!(err, EditorError::ContractViolation(_)));
        assert_eq!(st.buffer(), &Buffer::from_lines(["abc"]));
        assert_eq!(st.undo_depth(), 0);
        assert!(!st.dirty);
    }

    #[test]
    fn inert_delete_moves_cursor_but_is_not_recorded() {
        let mut st = state(&["ab", "cd"]);
        st.apply(
            Operation::DeleteChar {
                row: 1,
                col: 5,
                ch: 'q',
            },
            true,
        )
        .unwrap();
        assert_eq!(st.cursor(), Position::new(1, 2));
        assert_eq!(st.undo_depth(), 0);
    }

    #[test]
    fn empty_stacks_are_silent() {
        let mut st = EditorState::new();
        assert!(!st.undo().unwrap());
        assert!(!st.redo().unwrap());
    }

    #[test]
    fn set_cursor_clamps_stale_coordinates() {
        let mut st = state(&["abc", "d"]);
        st.set_cursor(Position::new(9, 9));
        assert_eq!(st.cursor(), Position::new(1, 1));
    }

    #[test]
    fn clear_resets_everything() {
        let mut st = state(&["abc", "def"]);
        st.move_down();
        st.apply(
            Operation::InsertChar {
                row: 1,
                col: 0,
                ch: 'x',
            },
            true,
        )
        .unwrap();
        st.search_all("x");
        st.clear();
        assert_eq!(st.buffer(), &Buffer::new());
        assert_eq!(st.cursor(), Position::origin());
        assert_eq!((st.undo_depth(), st.redo_depth()), (0, 0));
        assert!(st.matches().is_empty());
    }

    #[test]
    fn home_and_end() {
        let mut st = state(&["hello"]);
        st.move_line_end();
        assert_eq!(st.cursor().col, 5);
        st.move_line_start();
        assert_eq!(st.cursor().col, 0);
    }
}
