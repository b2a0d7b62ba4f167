//! Edit operations: the only way the buffer changes.
//!
//! Each variant carries exactly what it needs to be applied *and* reverted
//! without re-reading editor state, so the undo log can store operations
//! instead of buffer snapshots. Apply and revert are exhaustive matches; a
//! new variant does not compile until both directions exist.
//!
//! Contract policy: `validate` runs before any mutation and rejects an
//! operation whose coordinates or payload disagree with the buffer. The one
//! tolerated degenerate case is a `DeleteChar` aimed at or past the end of an
//! existing line, which deletes nothing (`Effect::Inert`).

use crate::EditorError;
use core_text::{Buffer, Line, Position, search};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Insert `ch` before `(row, col)`.
    InsertChar { row: usize, col: usize, ch: char },
    /// Remove the char at `(row, col)`; `ch` is the char being removed.
    DeleteChar { row: usize, col: usize, ch: char },
    /// Truncate line `row` at `col`; `right` (the old tail) becomes the next line.
    SplitLine { row: usize, col: usize, right: Line },
    /// Merge line `row + 1` into line `row`. `prev_len` is the length of line
    /// `row` before the merge, `curr` the full content of line `row + 1`, and
    /// `col` the cursor column after the merge (the join point).
    JoinLine {
        row: usize,
        col: usize,
        prev_len: usize,
        curr: Line,
    },
    /// Substitute every occurrence of `search` with `replace` on every line.
    ReplaceAll { search: String, replace: String },
}

/// What applying a validated operation will do to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Mutates,
    /// Buffer untouched; never pushed onto the undo stack.
    Inert,
}

impl Operation {
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::InsertChar { .. } => "insert_char",
            Operation::DeleteChar { .. } => "delete_char",
            Operation::SplitLine { .. } => "split_line",
            Operation::JoinLine { .. } => "join_line",
            Operation::ReplaceAll { .. } => "replace_all",
        }
    }

    /// Check the operation against the current buffer.
    pub fn validate(&self, buf: &Buffer) -> Result<Effect, EditorError> {
        match self {
            Operation::InsertChar { row, col, .. } => {
                let len = row_len(buf, *row)?;
                if *col > len {
                    return Err(EditorError::contract(format!(
                        "insert at column {col} past end of line {row} (len {len})"
                    )));
                }
                Ok(Effect::Mutates)
            }
            Operation::DeleteChar { row, col, ch } => {
                row_len(buf, *row)?;
                match buf.char_at(*row, *col) {
                    None => Ok(Effect::Inert),
                    Some(found) if found == *ch => Ok(Effect::Mutates),
                    Some(found) => Err(EditorError::contract(format!(
                        "delete expects {ch:?} at {row}:{col} but found {found:?}"
                    ))),
                }
            }
            Operation::SplitLine { row, col, right } => {
                let len = row_len(buf, *row)?;
                if *col > len {
                    return Err(EditorError::contract(format!(
                        "split at column {col} past end of line {row} (len {len})"
                    )));
                }
                let tail = buf.line(*row).map(|l| &l[*col..]).unwrap_or_default();
                if tail != right.as_slice() {
                    return Err(EditorError::contract(format!(
                        "split payload does not match the tail of line {row}"
                    )));
                }
                Ok(Effect::Mutates)
            }
            Operation::JoinLine {
                row,
                prev_len,
                curr,
                ..
            } => {
                let len = row_len(buf, *row)?;
                if *row + 1 >= buf.line_count() {
                    return Err(EditorError::contract(format!(
                        "join at line {row} has no following line"
                    )));
                }
                if *prev_len != len || buf.line(*row + 1) != Some(curr.as_slice()) {
                    return Err(EditorError::contract(format!(
                        "join payload does not match lines {row}..={}",
                        row + 1
                    )));
                }
                Ok(Effect::Mutates)
            }
            Operation::ReplaceAll { search, .. } => {
                if search.is_empty() {
                    Ok(Effect::Inert)
                } else {
                    Ok(Effect::Mutates)
                }
            }
        }
    }

    /// Apply to `buf` (already validated). Returns the cursor the operation
    /// dictates, or `None` when it leaves the cursor alone.
    pub(crate) fn apply_to(&self, buf: &mut Buffer) -> Option<Position> {
        match self {
            Operation::InsertChar { row, col, ch } => {
                buf.insert_at(*row, *col, *ch);
                Some(Position::new(*row, col + 1))
            }
            Operation::DeleteChar { row, col, .. } => {
                buf.delete_at(*row, *col);
                Some(Position::new(*row, *col))
            }
            Operation::SplitLine { row, col, right } => {
                buf.split_off(*row, *col);
                buf.insert_line(row + 1, right.clone());
                Some(Position::new(row + 1, 0))
            }
            Operation::JoinLine { row, col, .. } => {
                if let Some(next) = buf.remove_line(row + 1) {
                    buf.append_to(*row, &next);
                }
                Some(Position::new(*row, *col))
            }
            Operation::ReplaceAll { search, replace } => {
                search::replace_all(buf, search, replace);
                None
            }
        }
    }

    /// Check that `buf` is in the state this operation left it in.
    pub(crate) fn validate_revert(&self, buf: &Buffer) -> Result<(), EditorError> {
        let ok = match self {
            Operation::InsertChar { row, col, ch } => buf.char_at(*row, *col) == Some(*ch),
            Operation::DeleteChar { row, col, .. } => {
                *row < buf.line_count() && *col <= buf.line_len(*row)
            }
            Operation::SplitLine { row, col, right } => {
                *row + 1 < buf.line_count()
                    && buf.line_len(*row) == *col
                    && buf.line(*row + 1) == Some(right.as_slice())
            }
            Operation::JoinLine {
                row,
                prev_len,
                curr,
                ..
            } => buf.line(*row).is_some_and(|l| {
                l.len() == prev_len + curr.len() && &l[*prev_len..] == curr.as_slice()
            }),
            Operation::ReplaceAll { .. } => true,
        };
        if ok {
            Ok(())
        } else {
            Err(EditorError::contract(format!(
                "buffer no longer matches recorded {}",
                self.kind()
            )))
        }
    }

    /// Apply the exact inverse to `buf` (already checked by `validate_revert`).
    ///
    /// The inverse of `ReplaceAll` is the swapped replacement, which is only
    /// a true inverse when `replace` did not already occur in the buffer;
    /// pre-existing occurrences are rewritten too.
    pub(crate) fn revert(&self, buf: &mut Buffer) {
        match self {
            Operation::InsertChar { row, col, .. } => {
                buf.delete_at(*row, *col);
            }
            Operation::DeleteChar { row, col, ch } => {
                buf.insert_at(*row, *col, *ch);
            }
            Operation::SplitLine { row, .. } => {
                if let Some(next) = buf.remove_line(row + 1) {
                    buf.append_to(*row, &next);
                }
            }
            Operation::JoinLine {
                row, prev_len, curr, ..
            } => {
                buf.split_off(*row, *prev_len);
                buf.insert_line(row + 1, curr.clone());
            }
            Operation::ReplaceAll { search, replace } => {
                search::replace_all(buf, replace, search);
            }
        }
    }
}

fn row_len(buf: &Buffer, row: usize) -> Result<usize, EditorError> {
    if row < buf.line_count() {
        Ok(buf.line_len(row))
    } else {
        Err(EditorError::contract(format!(
            "line {row} out of range (buffer has {} lines)",
            buf.line_count()
        )))
    }
}
