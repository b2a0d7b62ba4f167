//! File codec: plain newline-delimited text in and out of an `EditorState`.
//!
//! Load and save are deliberately asymmetric: loading accepts `\n`, `\r\n`
//! and lone `\r` terminators and drops them (so a missing final newline is
//! forgotten), while saving writes a `\n` after every line including the last.

use crate::{EditorError, EditorState};
use core_text::{Buffer, Position};
use std::path::{Path, PathBuf};

impl EditorState {
    /// Replace the whole session content with the file at `path`.
    ///
    /// Cursor and viewport go back to the origin, both history stacks and the
    /// match list are cleared (a load cannot be undone). On failure nothing
    /// changes. Returns the loaded path.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<PathBuf, EditorError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!(target: "io", file = %path.display(), ?e, "file_open_error");
            EditorError::file(path, e)
        })?;
        let buffer = Buffer::from_text(&content);
        tracing::debug!(
            target: "io",
            file = %path.display(),
            size_bytes = content.len(),
            line_count = buffer.line_count(),
            "file_read_ok"
        );
        self.buffer = buffer;
        self.cursor = Position::origin();
        self.viewport.reset();
        self.history.clear();
        self.matches.clear();
        self.file_name = Some(path.to_path_buf());
        self.dirty = false;
        Ok(path.to_path_buf())
    }

    /// Write every line followed by `\n` to `path`.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        let path = path.as_ref();
        let content = self.buffer.to_text();
        std::fs::write(path, content.as_bytes()).map_err(|e| {
            tracing::error!(target: "io", file = %path.display(), ?e, "file_write_error");
            EditorError::file(path, e)
        })?;
        tracing::debug!(target: "io", file = %path.display(), size_bytes = content.len(), "file_write_ok");
        self.file_name = Some(path.to_path_buf());
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Operation;

    #[test]
    fn load_splits_lines_and_resets_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        std::fs::write(&path, "line1\nline2\n").unwrap();

        let mut st = EditorState::new();
        st.apply(
            Operation::InsertChar {
                row: 0,
                col: 0,
                ch: 'z',
            },
            true,
        )
        .unwrap();
        let loaded = st.load(&path).unwrap();
        assert_eq!(loaded, path);
        assert_eq!(st.buffer(), &Buffer::from_lines(["line1", "line2"]));
        assert_eq!(st.cursor(), Position::origin());
        assert_eq!((st.undo_depth(), st.redo_depth()), (0, 0));
        assert!(!st.dirty);
    }

    #[test]
    fn load_accepts_carriage_return_terminators() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mac.txt");
        std::fs::write(&path, "a\rb\r").unwrap();
        let mut st = EditorState::new();
        st.load(&path).unwrap();
        assert_eq!(st.buffer(), &Buffer::from_lines(["a", "b"]));
    }

    #[test]
    fn load_empty_file_gives_one_empty_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();
        let mut st = EditorState::new();
        st.load(&path).unwrap();
        assert_eq!(st.buffer().line_count(), 1);
        assert_eq!(st.buffer().line_len(0), 0);
    }

    #[test]
    fn load_missing_file_is_file_error_and_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut st = EditorState::with_buffer(Buffer::from_lines(["keep"]));
        let err = st.load(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, EditorError::File { .. }));
        assert_eq!(st.buffer(), &Buffer::from_lines(["keep"]));
        assert!(st.file_name.is_none());
    }

    #[test]
    fn save_terminates_every_line() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("in.txt");
        let dst = dir.path().join("out.txt");
        std::fs::write(&src, "a\nb").unwrap();
        let mut st = EditorState::new();
        st.load(&src).unwrap();
        st.save(&dst).unwrap();
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "a\nb\n");
        assert_eq!(st.file_name.as_deref(), Some(dst.as_path()));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut st = EditorState::new();
        let err = st.save(dir.path().join("nope").join("out.txt")).unwrap_err();
        assert!(matches!(err, EditorError::File { .. }));
    }
}
