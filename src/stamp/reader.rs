//! Reading stamped hashes back from disk

use super::header::{parse_hash, Stamper, HASH_LEN, MARKER};
use crate::error::{FileError, Result};
use std::io::ErrorKind;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Bytes needed to see the marker, the hash field and a `\r\n` after it
pub const STAMP_PREFIX_LEN: usize = MARKER.len() + HASH_LEN + 2;

/// Read the source hash stamped into a generated file
///
/// Only the first [`STAMP_PREFIX_LEN`] bytes are read, and the file is
/// closed before parsing. A missing file or a header that does not parse
/// gives `Ok(None)`; other I/O errors are returned.
pub async fn read_hash(path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();

    let mut file = match tokio::fs::File::open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("read_hash: {} does not exist", path.display());
            return Ok(None);
        }
        Err(e) => return Err(FileError::io(path, e)),
    };

    // Short reads are possible, keep going until the prefix is full or EOF
    let mut buf = [0u8; STAMP_PREFIX_LEN];
    let mut filled = 0;
    while filled < buf.len() {
        let n = file
            .read(&mut buf[filled..])
            .await
            .map_err(|e| FileError::io(path, e))?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    drop(file);

    let leading = match std::str::from_utf8(&buf[..filled]) {
        Ok(text) => text,
        Err(e) => {
            // The prefix may end inside a multi-byte character
            let valid = &buf[..e.valid_up_to()];
            std::str::from_utf8(valid).unwrap_or_default()
        }
    };

    let at_eof = filled < STAMP_PREFIX_LEN;
    let hash = parse_hash(leading, at_eof).map(str::to_owned);
    if hash.is_none() {
        tracing::debug!("read_hash: {} carries no stamp", path.display());
    }
    Ok(hash)
}

/// Whether the generated file at `path` must be regenerated for `source_hash`
pub async fn needs_regeneration(path: impl AsRef<Path>, source_hash: &str) -> Result<bool> {
    let stamped = read_hash(path).await?;
    Ok(stamped.as_deref() != Some(source_hash))
}

/// Stamp `content` with the default tool name and write it to `path`
pub async fn write_stamped(path: impl AsRef<Path>, source_hash: &str, content: &str) -> Result<()> {
    Stamper::default().write(path, source_hash, content).await
}

impl Stamper {
    /// Stamp `content` and write it to `path`, replacing any existing file
    pub async fn write(&self, path: impl AsRef<Path>, source_hash: &str, content: &str) -> Result<()> {
        crate::fs::write_file(path, self.stamp(source_hash, content)).await
    }
}
