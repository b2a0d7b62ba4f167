//! Line store: the text buffer as an ordered list of lines of `char`s.
//!
//! Columns are `char` indices. The buffer is never empty; every constructor
//! and every removal helper preserves at least one (possibly empty) line.
//! All mutating helpers are bounds-checked and report whether they did
//! anything, so callers that already validated their coordinates can ignore
//! the return value while the engine can still detect stale input.

pub mod motion;
pub mod search;

pub use search::MatchSpan;

/// A single line of text (no terminator).
pub type Line = Vec<char>;

/// Ordered sequence of lines. Invariant: `lines.len() >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<Line>,
}

/// A logical cursor position expressed as (line index, char column).
/// `col == line_len(line)` is the valid end-of-line position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
    pub fn origin() -> Self {
        Self { line: 0, col: 0 }
    }
    pub fn clamp_to<F>(&mut self, line_count: usize, mut line_len_fn: F)
    where
        F: FnMut(usize) -> usize,
    {
        if line_count == 0 {
            self.line = 0;
            self.col = 0;
            return;
        }
        if self.line >= line_count {
            self.line = line_count - 1;
        }
        let max_len = line_len_fn(self.line);
        if self.col > max_len {
            self.col = max_len;
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// A buffer holding exactly one empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
        }
    }

    /// Build from already-split lines. An empty iterator yields one empty line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<Line> = lines
            .into_iter()
            .map(|l| l.as_ref().chars().collect())
            .collect();
        if lines.is_empty() {
            Self::new()
        } else {
            Self { lines }
        }
    }

    /// Split text on line terminators (`\n`, `\r\n` or a lone `\r`),
    /// dropping the terminator of each line. A trailing terminator does not
    /// produce an extra empty line; empty text yields one empty line.
    pub fn from_text(content: &str) -> Self {
        let mut lines = Vec::new();
        let mut rest = content;
        while !rest.is_empty() {
            let Some(end) = rest.find(['\n', '\r']) else {
                lines.push(rest);
                break;
            };
            lines.push(&rest[..end]);
            let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[end + width..];
        }
        Self::from_lines(lines)
    }

    /// Serialize with a `\n` appended after every line, including the last.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.extend(line.iter());
            out.push('\n');
        }
        out
    }

    /// Total number of lines (always >= 1).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, idx: usize) -> Option<&[char]> {
        self.lines.get(idx).map(Vec::as_slice)
    }

    /// Owned `String` copy of a line.
    pub fn line_string(&self, idx: usize) -> Option<String> {
        self.lines.get(idx).map(|l| l.iter().collect())
    }

    /// Length of a line in chars; 0 for rows outside the buffer.
    pub fn line_len(&self, idx: usize) -> usize {
        self.lines.get(idx).map_or(0, Vec::len)
    }

    /// Char at `(row, col)` if it addresses an existing character.
    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        self.lines.get(row).and_then(|l| l.get(col)).copied()
    }

    /// Insert `ch` before column `col` (`col == len` appends). Returns false
    /// without mutating when the coordinates are outside the buffer.
    pub fn insert_at(&mut self, row: usize, col: usize, ch: char) -> bool {
        match self.lines.get_mut(row) {
            Some(line) if col <= line.len() => {
                line.insert(col, ch);
                true
            }
            _ => false,
        }
    }

    /// Remove and return the char at `(row, col)`; `None` (no-op) when
    /// `col` is not in `[0, len)`.
    pub fn delete_at(&mut self, row: usize, col: usize) -> Option<char> {
        let line = self.lines.get_mut(row)?;
        if col < line.len() {
            Some(line.remove(col))
        } else {
            None
        }
    }

    /// Truncate line `row` to its first `col` chars and return the removed tail.
    pub fn split_off(&mut self, row: usize, col: usize) -> Option<Line> {
        let line = self.lines.get_mut(row)?;
        if col > line.len() {
            return None;
        }
        Some(line.split_off(col))
    }

    /// Insert a new line so it becomes index `row` (`row == line_count` appends).
    pub fn insert_line(&mut self, row: usize, line: Line) -> bool {
        if row > self.lines.len() {
            return false;
        }
        self.lines.insert(row, line);
        true
    }

    /// Remove line `row` and return its content. Removing the only line
    /// leaves a single empty line behind.
    pub fn remove_line(&mut self, row: usize) -> Option<Line> {
        if row >= self.lines.len() {
            return None;
        }
        if self.lines.len() == 1 {
            return Some(std::mem::take(&mut self.lines[0]));
        }
        Some(self.lines.remove(row))
    }

    /// Append `chars` to the end of line `row`.
    pub fn append_to(&mut self, row: usize, chars: &[char]) -> bool {
        match self.lines.get_mut(row) {
            Some(line) => {
                line.extend_from_slice(chars);
                true
            }
            None => false,
        }
    }

    /// Replace the full content of line `row`.
    pub fn replace_line(&mut self, row: usize, line: Line) -> bool {
        match self.lines.get_mut(row) {
            Some(slot) => {
                *slot = line;
                true
            }
            None => false,
        }
    }
}
