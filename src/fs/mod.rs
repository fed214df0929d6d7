//! Raw file I/O used by the code generator
//!
//! Thin async wrappers over `tokio::fs`. Errors are tagged with the path
//! involved; nothing here creates parent directories.

mod remove;

pub use remove::{remove_by_patterns, remove_by_patterns_with, resolve_patterns, RemoveOptions};

use crate::error::{FileError, Result};
use std::io::ErrorKind;
use std::path::Path;

/// Read the whole file as bytes
pub async fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    tokio::fs::read(path)
        .await
        .map_err(|e| FileError::io(path, e))
}

/// Read the whole file as UTF-8 text
pub async fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| FileError::io(path, e))
}

/// Create or truncate `path` and write `contents`
///
/// The parent directory must already exist.
pub async fn write_file(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| FileError::io(path, e))
}

/// Remove a file, symlink or directory tree
///
/// A path that does not exist is not an error. Symlinks are removed
/// themselves, never followed.
pub async fn rimraf(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let metadata = match tokio::fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(FileError::io(path, e)),
    };

    let removed = if metadata.is_dir() {
        tokio::fs::remove_dir_all(path).await
    } else {
        tokio::fs::remove_file(path).await
    };

    match removed {
        Ok(()) => {
            tracing::debug!("removed {}", path.display());
            Ok(())
        }
        // Lost a race with another remover
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FileError::io(path, e)),
    }
}
