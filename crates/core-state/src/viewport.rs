//! Viewport: the visible window into the buffer.
//!
//! `top_line`/`left_col` are cached outputs of the scroll-clamp formulas and
//! own no independent state: recomputing them from the same cursor and
//! buffer shape always gives the same answer. The editor runs both
//! adjustments after the cursor has been normalized.
//!
//! Vertical rule: with `line_count <= max_lines` the window is pinned at the
//! top. Otherwise the window moves just far enough to contain the cursor row
//! and is clamped so it never extends past the last line. The horizontal rule
//! is the same computed against the cursor line's length.

use std::ops::Range;

pub const DEFAULT_MAX_LINES: usize = 24;
pub const DEFAULT_MAX_COLS: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    top_line: usize,
    left_col: usize,
    max_lines: usize,
    max_cols: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINES, DEFAULT_MAX_COLS)
    }
}

impl Viewport {
    /// Zero sizes are raised to 1 so the window always shows the cursor.
    pub fn new(max_lines: usize, max_cols: usize) -> Self {
        Self {
            top_line: 0,
            left_col: 0,
            max_lines: max_lines.max(1),
            max_cols: max_cols.max(1),
        }
    }

    pub fn top_line(&self) -> usize {
        self.top_line
    }
    pub fn left_col(&self) -> usize {
        self.left_col
    }
    pub fn max_lines(&self) -> usize {
        self.max_lines
    }
    pub fn max_cols(&self) -> usize {
        self.max_cols
    }

    pub fn reset(&mut self) {
        self.top_line = 0;
        self.left_col = 0;
    }

    pub fn adjust_vertical(&mut self, row: usize, line_count: usize) {
        if line_count <= self.max_lines {
            self.top_line = 0;
            return;
        }
        if row < self.top_line {
            self.top_line = row;
        } else if row > self.top_line + self.max_lines - 1 {
            self.top_line = row - (self.max_lines - 1);
        }
        self.top_line = self.top_line.min(line_count - self.max_lines);
    }

    pub fn adjust_horizontal(&mut self, col: usize, line_len: usize) {
        if line_len <= self.max_cols {
            self.left_col = 0;
            return;
        }
        if col < self.left_col {
            self.left_col = col;
        } else if col >= self.left_col + self.max_cols {
            self.left_col = col - self.max_cols + 1;
        }
        self.left_col = self.left_col.min(line_len - self.max_cols);
    }

    /// Buffer rows a renderer should draw.
    pub fn visible_rows(&self, line_count: usize) -> Range<usize> {
        let start = self.top_line.min(line_count);
        start..(start + self.max_lines).min(line_count)
    }

    /// Columns of a line of length `line_len` inside the window.
    pub fn visible_cols(&self, line_len: usize) -> Range<usize> {
        let start = self.left_col.min(line_len);
        start..(start + self.max_cols).min(line_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_buffer_pins_top() {
        let mut vp = Viewport::new(5, 10);
        vp.adjust_vertical(4, 5);
        assert_eq!(vp.top_line(), 0);
    }

    #[test]
    fn scrolls_down_just_enough() {
        let mut vp = Viewport::new(5, 10);
        vp.adjust_vertical(7, 20);
        assert_eq!(vp.top_line(), 3);
        vp.adjust_vertical(6, 20);
        assert_eq!(vp.top_line(), 3, "row already visible");
        vp.adjust_vertical(1, 20);
        assert_eq!(vp.top_line(), 1);
    }

    #[test]
    fn top_clamped_after_buffer_shrinks() {
        let mut vp = Viewport::new(5, 10);
        vp.adjust_vertical(19, 20);
        assert_eq!(vp.top_line(), 15);
        vp.adjust_vertical(7, 8);
        assert_eq!(vp.top_line(), 3);
    }

    #[test]
    fn horizontal_follows_cursor_column() {
        let mut vp = Viewport::new(5, 10);
        vp.adjust_horizontal(15, 30);
        assert_eq!(vp.left_col(), 6);
        vp.adjust_horizontal(30, 30);
        assert_eq!(vp.left_col(), 20);
        vp.adjust_horizontal(2, 30);
        assert_eq!(vp.left_col(), 2);
        vp.adjust_horizontal(2, 8);
        assert_eq!(vp.left_col(), 0);
    }

    #[test]
    fn adjustments_are_idempotent() {
        let mut vp = Viewport::new(4, 4);
        vp.adjust_vertical(9, 12);
        vp.adjust_horizontal(7, 9);
        let snapshot = vp;
        vp.adjust_vertical(9, 12);
        vp.adjust_horizontal(7, 9);
        assert_eq!(vp, snapshot);
    }

    #[test]
    fn zero_size_is_raised() {
        let vp = Viewport::new(0, 0);
        assert_eq!((vp.max_lines(), vp.max_cols()), (1, 1));
    }

    #[test]
    fn visible_ranges_are_clipped() {
        let mut vp = Viewport::new(3, 4);
        vp.adjust_vertical(4, 6);
        assert_eq!(vp.visible_rows(6), 2..5);
        assert_eq!(vp.visible_cols(2), 0..2);
        assert_eq!(Viewport::new(10, 4).visible_rows(3), 0..3);
    }
}
