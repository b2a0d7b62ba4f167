use std::path::PathBuf;

/// Errors surfaced by the editing engine.
///
/// Neither kind is fatal: a `File` error leaves the session exactly as it
/// was and can be retried, and a rejected operation never mutates anything.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// The path could not be read or written.
    #[error("cannot access {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An operation or cursor request whose coordinates or payload do not
    /// match the current buffer.
    #[error("operation does not fit the buffer: {0}")]
    ContractViolation(String),
}

impl EditorError {
    pub(crate) fn contract(msg: impl Into<String>) -> Self {
        Self::ContractViolation(msg.into())
    }

    pub(crate) fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}
