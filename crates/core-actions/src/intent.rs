//! Operations built from the cursor for each edit intent.
//!
//! Every builder reads the payload (removed char, moved tail, joined line)
//! from the buffer at construction time, so the resulting operation always
//! validates against the state it was built from and can be undone exactly.

use core_state::{EditorState, Operation};

pub fn insert_char(state: &EditorState, ch: char) -> Operation {
    let cur = state.cursor();
    Operation::InsertChar {
        row: cur.line,
        col: cur.col,
        ch,
    }
}

/// Char before the cursor, or a join into the previous line at column 0.
/// `None` at the very start of the buffer.
pub fn backspace(state: &EditorState) -> Option<Operation> {
    let cur = state.cursor();
    let buf = state.buffer();
    if cur.col > 0 {
        let ch = buf.char_at(cur.line, cur.col - 1)?;
        return Some(Operation::DeleteChar {
            row: cur.line,
            col: cur.col - 1,
            ch,
        });
    }
    if cur.line == 0 {
        return None;
    }
    let prev_len = buf.line_len(cur.line - 1);
    Some(Operation::JoinLine {
        row: cur.line - 1,
        col: prev_len,
        prev_len,
        curr: buf.line(cur.line)?.to_vec(),
    })
}

/// Char under the cursor, or a join of the next line at end of line.
/// `None` at the very end of the buffer.
pub fn delete_under(state: &EditorState) -> Option<Operation> {
    let cur = state.cursor();
    let buf = state.buffer();
    if let Some(ch) = buf.char_at(cur.line, cur.col) {
        return Some(Operation::DeleteChar {
            row: cur.line,
            col: cur.col,
            ch,
        });
    }
    let len = buf.line_len(cur.line);
    let next = buf.line(cur.line + 1)?;
    Some(Operation::JoinLine {
        row: cur.line,
        col: len,
        prev_len: len,
        curr: next.to_vec(),
    })
}

pub fn newline(state: &EditorState) -> Operation {
    let cur = state.cursor();
    let right = state
        .buffer()
        .line(cur.line)
        .map(|l| l[cur.col.min(l.len())..].to_vec())
        .unwrap_or_default();
    Operation::SplitLine {
        row: cur.line,
        col: cur.col,
        right,
    }
}

pub fn replace_all(search: &str, replace: &str) -> Operation {
    Operation::ReplaceAll {
        search: search.to_owned(),
        replace: replace.to_owned(),
    }
}
