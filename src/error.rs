//! Errors surfaced by file operations
//!
//! Expected non-errors (missing file on hash read-back, malformed header)
//! are modelled as `Ok(None)` by the callers and never reach this type.

use std::path::PathBuf;

pub type Result<T, E = FileError> = std::result::Result<T, E>;

/// Errors that can occur while reading, writing or removing generated files
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("IO error on '{}': {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to walk glob match: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Failed to delete {failed} of {attempted} path(s), first error: {first}")]
    PartialDelete {
        failed: usize,
        attempted: usize,
        #[source]
        first: Box<FileError>,
    },
}

impl FileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Kind of the underlying I/O error, if this error wraps one
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            FileError::Io { source, .. } => Some(source.kind()),
            FileError::Glob(e) => Some(e.error().kind()),
            FileError::PartialDelete { first, .. } => first.io_kind(),
            FileError::Pattern { .. } | FileError::Join(_) => None,
        }
    }
}
