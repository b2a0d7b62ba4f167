//! Cursor motion helpers.
//!
//! These operate purely on a `Buffer` + `Position` pair and are free of editor
//! state. None of them re-clamp the result; the caller runs its bounds
//! normalization (and viewport recompute) after every motion.

use crate::{Buffer, Position};

/// Word separators. Anything else counts as part of a word.
fn is_blank(c: char) -> bool {
    c.is_whitespace()
}

/// Move left one char, wrapping to the end of the previous line at column 0.
pub fn left(buf: &Buffer, pos: &mut Position) {
    if pos.col > 0 {
        pos.col -= 1;
    } else if pos.line > 0 {
        pos.line -= 1;
        pos.col = buf.line_len(pos.line);
    }
}

/// Move right one char, wrapping to the start of the next line at end of line.
pub fn right(buf: &Buffer, pos: &mut Position) {
    if pos.col < buf.line_len(pos.line) {
        pos.col += 1;
    } else if pos.line + 1 < buf.line_count() {
        pos.line += 1;
        pos.col = 0;
    }
}

/// Move up one line; the column is clamped to the new line's length.
pub fn up(buf: &Buffer, pos: &mut Position) {
    if pos.line > 0 {
        pos.line -= 1;
        pos.col = pos.col.min(buf.line_len(pos.line));
    }
}

/// Move down one line; the column is clamped to the new line's length.
pub fn down(buf: &Buffer, pos: &mut Position) {
    if pos.line + 1 < buf.line_count() {
        pos.line += 1;
        pos.col = pos.col.min(buf.line_len(pos.line));
    }
}

pub fn line_start(_buf: &Buffer, pos: &mut Position) {
    pos.col = 0;
}

pub fn line_end(buf: &Buffer, pos: &mut Position) {
    pos.col = buf.line_len(pos.line);
}

/// Move up by `page` lines, stopping at the first line.
pub fn page_up(_buf: &Buffer, pos: &mut Position, page: usize) {
    pos.line = pos.line.saturating_sub(page);
}

/// Move down by `page` lines, stopping at the last line.
pub fn page_down(buf: &Buffer, pos: &mut Position, page: usize) {
    let last = buf.line_count().saturating_sub(1);
    pos.line = pos.line.saturating_add(page).min(last);
}

/// Jump to the start of the word left of the cursor.
///
/// At column 0 (below the first line) the cursor moves to the end of the
/// previous line and stops there. Otherwise blanks immediately left of the
/// cursor are skipped, then the word before them; the cursor lands on that
/// word's first char (or column 0).
pub fn word_left(buf: &Buffer, pos: &mut Position) {
    if pos.col == 0 {
        if pos.line > 0 {
            pos.line -= 1;
            pos.col = buf.line_len(pos.line);
        }
        return;
    }
    let Some(line) = buf.line(pos.line) else {
        return;
    };
    let mut i = pos.col.min(line.len());
    while i > 0 && is_blank(line[i - 1]) {
        i -= 1;
    }
    while i > 0 && !is_blank(line[i - 1]) {
        i -= 1;
    }
    pos.col = i;
}

/// Jump just past the end of the word right of the cursor.
///
/// At end of line (above the last line) the cursor moves to column 0 of the
/// next line and stops there. Otherwise blanks at the cursor are skipped,
/// then the following word; the cursor lands one past its last char.
pub fn word_right(buf: &Buffer, pos: &mut Position) {
    let len = buf.line_len(pos.line);
    if pos.col >= len {
        if pos.line + 1 < buf.line_count() {
            pos.line += 1;
            pos.col = 0;
        }
        return;
    }
    let Some(line) = buf.line(pos.line) else {
        return;
    };
    let mut i = pos.col;
    while i < len && is_blank(line[i]) {
        i += 1;
    }
    while i < len && !is_blank(line[i]) {
        i += 1;
    }
    pos.col = i;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_left_from_line_end_lands_on_word_start() {
        let buf = Buffer::from_lines(["hello  world"]);
        let mut pos = Position::new(0, 12);
        word_left(&buf, &mut pos);
        assert_eq!(pos.col, 7);
        word_left(&buf, &mut pos);
        assert_eq!(pos.col, 0);
    }

    #[test]
    fn word_right_from_line_start_lands_after_word() {
        let buf = Buffer::from_lines(["hello  world"]);
        let mut pos = Position::origin();
        word_right(&buf, &mut pos);
        assert_eq!(pos.col, 5);
        word_right(&buf, &mut pos);
        assert_eq!(pos.col, 12);
    }

    #[test]
    fn word_motions_wrap_across_lines() {
        let buf = Buffer::from_lines(["ab cd", "  ef"]);
        let mut pos = Position::new(0, 5);
        word_right(&buf, &mut pos);
        assert_eq!(pos, Position::new(1, 0));
        word_right(&buf, &mut pos);
        assert_eq!(pos, Position::new(1, 4));
        let mut back = Position::new(1, 0);
        word_left(&buf, &mut back);
        assert_eq!(back, Position::new(0, 5));
    }

    #[test]
    fn word_motions_stop_at_buffer_edges() {
        let buf = Buffer::from_lines(["word"]);
        let mut start = Position::origin();
        word_left(&buf, &mut start);
        assert_eq!(start, Position::origin());
        let mut end = Position::new(0, 4);
        word_right(&buf, &mut end);
        assert_eq!(end, Position::new(0, 4));
    }

    #[test]
    fn word_left_skips_tabs() {
        let buf = Buffer::from_lines(["one\t\ttwo"]);
        let mut pos = Position::new(0, 5);
        word_left(&buf, &mut pos);
        assert_eq!(pos.col, 0);
    }

    #[test]
    fn left_right_wrap_lines() {
        let buf = Buffer::from_lines(["ab", "c"]);
        let mut pos = Position::new(1, 0);
        left(&buf, &mut pos);
        assert_eq!(pos, Position::new(0, 2));
        right(&buf, &mut pos);
        assert_eq!(pos, Position::new(1, 0));
        right(&buf, &mut pos);
        right(&buf, &mut pos);
        assert_eq!(pos, Position::new(1, 1), "stops at end of last line");
    }

    #[test]
    fn vertical_motion_clamps_column() {
        let buf = Buffer::from_lines(["long line", "ab", "longer line"]);
        let mut pos = Position::new(0, 8);
        down(&buf, &mut pos);
        assert_eq!(pos, Position::new(1, 2));
        down(&buf, &mut pos);
        assert_eq!(pos, Position::new(2, 2), "no sticky column");
        up(&buf, &mut pos);
        up(&buf, &mut pos);
        up(&buf, &mut pos);
        assert_eq!(pos, Position::new(0, 2));
    }

    #[test]
    fn paging_clamps_to_buffer() {
        let buf = Buffer::from_lines((0..10).map(|i| i.to_string()));
        let mut pos = Position::new(3, 0);
        page_down(&buf, &mut pos, 4);
        assert_eq!(pos.line, 7);
        page_down(&buf, &mut pos, 4);
        assert_eq!(pos.line, 9);
        page_up(&buf, &mut pos, 4);
        assert_eq!(pos.line, 5);
        page_up(&buf, &mut pos, 24);
        assert_eq!(pos.line, 0);
    }
}
