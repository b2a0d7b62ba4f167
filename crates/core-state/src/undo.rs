use crate::Operation;
use std::collections::VecDeque;
use core_text::Position;
use tracing::trace;

/// A recorded operation plus the cursor observed just before it was applied,
/// so undo can put the cursor back exactly where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub op: Operation,
    pub cursor_before: Position,
}

/// Linear undo/redo history of operations.
///
/// Branching is not supported: recording a new operation discards the redo
/// stack, so redo only replays the most recent undo chain. With a depth limit
/// set, the oldest undo entry is dropped once the stack grows past it.
#[derive(Debug, Default)]
pub struct UndoLog {
    undo_stack: VecDeque<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    limit: Option<usize>,
}

impl UndoLog {
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Most recent entry first.
    pub fn undo_entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.undo_stack.iter().rev()
    }

    /// Record a freshly applied user operation; clears the redo stack.
    pub fn record(&mut self, entry: HistoryEntry) {
        let kind = entry.op.kind();
        self.push_undo(entry);
        trace!(target: "state.undo", op = kind, undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "record");
        self.discard_redo();
    }

    /// Drop the redo chain; a new user operation starts a fresh branch.
    pub(crate) fn discard_redo(&mut self) {
        if !self.redo_stack.is_empty() {
            self.redo_stack.clear();
            trace!(target: "state.undo", "redo_stack_cleared_on_new_edit");
        }
    }

    /// Push onto the undo stack without touching redo (used by redo itself).
    pub(crate) fn push_undo(&mut self, entry: HistoryEntry) {
        self.undo_stack.push_back(entry);
        if let Some(limit) = self.limit
            && self.undo_stack.len() > limit
        {
            self.undo_stack.pop_front();
            trace!(target: "state.undo", limit, "undo_stack_trimmed");
        }
    }

    pub(crate) fn pop_undo(&mut self) -> Option<HistoryEntry> {
        self.undo_stack.pop_back()
    }

    pub(crate) fn push_redo(&mut self, entry: HistoryEntry) {
        self.redo_stack.push(entry);
    }

    pub(crate) fn pop_redo(&mut self) -> Option<HistoryEntry> {
        self.redo_stack.pop()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(ch: char) -> HistoryEntry {
        HistoryEntry {
            op: Operation::InsertChar { row: 0, col: 0, ch },
            cursor_before: Position::origin(),
        }
    }

    #[test]
    fn record_clears_redo() {
        let mut log = UndoLog::default();
        log.record(entry('a'));
        let e = log.pop_undo().unwrap();
        log.push_redo(e);
        assert_eq!(log.redo_depth(), 1);
        log.record(entry('b'));
        assert_eq!(log.redo_depth(), 0);
        assert_eq!(log.undo_depth(), 1);
    }

    #[test]
    fn push_undo_keeps_redo() {
        let mut log = UndoLog::default();
        log.push_redo(entry('a'));
        log.push_undo(entry('b'));
        assert_eq!((log.undo_depth(), log.redo_depth()), (1, 1));
    }

    #[test]
    fn limit_drops_oldest() {
        let mut log = UndoLog::with_limit(Some(2));
        for ch in ['a', 'b', 'c'] {
            log.record(entry(ch));
        }
        let kept: Vec<_> = log.undo_entries().map(|e| e.op.clone()).collect();
        assert_eq!(kept, vec![entry('c').op, entry('b').op]);
    }

    #[test]
    fn discard_redo_leaves_undo_alone() {
        let mut log = UndoLog::default();
        log.record(entry('a'));
        log.push_redo(entry('b'));
        log.discard_redo();
        assert_eq!((log.undo_depth(), log.redo_depth()), (1, 0));
    }

    #[test]
    fn empty_pops_are_none() {
        let mut log = UndoLog::default();
        assert!(log.pop_undo().is_none());
        assert!(log.pop_redo().is_none());
    }
}
