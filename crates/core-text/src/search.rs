//! Naive substring search and global replace.
//!
//! Highlight search is an overlapping scan advancing one char at a time;
//! replace uses ordinary left-to-right, non-overlapping substitution on the
//! whole line. The two deliberately disagree on overlapping patterns.

use crate::Buffer;

/// One search hit: half-open char range `[start, end)` on `row`.
/// Valid only for the buffer snapshot it was computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchSpan {
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(row: usize, start: usize, end: usize) -> Self {
        Self { row, start, end }
    }
}

/// Every start index where `pattern` occurs in `line`, overlaps included.
/// An empty pattern or one longer than the line yields nothing.
pub fn find_all_in_line(line: &[char], pattern: &[char]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > line.len() {
        return Vec::new();
    }
    line.windows(pattern.len())
        .enumerate()
        .filter_map(|(i, w)| (w == pattern).then_some(i))
        .collect()
}

/// Scan every line; spans come out row-ascending, then start-ascending.
pub fn search_all(buf: &Buffer, pattern: &str) -> Vec<MatchSpan> {
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() {
        return Vec::new();
    }
    let plen = pattern.len();
    buf.lines()
        .iter()
        .enumerate()
        .flat_map(|(row, line)| {
            find_all_in_line(line, &pattern)
                .into_iter()
                .map(move |start| MatchSpan::new(row, start, start + plen))
        })
        .collect()
}

/// Substitute every occurrence of `search` with `replace` on every line.
/// Returns the number of lines rewritten; an empty `search` is a no-op.
pub fn replace_all(buf: &mut Buffer, search: &str, replace: &str) -> usize {
    if search.is_empty() {
        return 0;
    }
    let mut rewritten = 0;
    for row in 0..buf.line_count() {
        let Some(line) = buf.line_string(row) else {
            continue;
        };
        if line.contains(search) {
            buf.replace_line(row, line.replace(search, replace).chars().collect());
            rewritten += 1;
        }
    }
    rewritten
}
