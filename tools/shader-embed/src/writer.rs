//! Conditional output writing
//!
//! The header is only rewritten when its bytes actually change, so build
//! systems keyed on modification time do not rebuild dependents needlessly.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use crate::error::{EmbedError, Result};

/// What [`write_if_changed`] did to the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Existing content already matched; file untouched
    Unchanged,
    /// File was created or replaced with new content
    Written,
}

/// Replace the contents of `path` with `contents` unless they are identical.
///
/// The file is created empty when missing. There is no locking and no
/// atomic rename: an interrupted write can leave a truncated file.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<WriteOutcome> {
    let output_err = |source| EmbedError::Output {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)
        .map_err(output_err)?;

    let mut existing = Vec::new();
    file.read_to_end(&mut existing).map_err(output_err)?;

    if existing == contents.as_bytes() {
        tracing::info!("{} is up to date", path.display());
        return Ok(WriteOutcome::Unchanged);
    }

    // Append mode always writes at the end, which is offset 0 after truncation
    file.set_len(0).map_err(output_err)?;
    file.write_all(contents.as_bytes()).map_err(output_err)?;

    tracing::info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(WriteOutcome::Written)
}

/// Check whether `path` already holds exactly `contents`.
///
/// A missing file counts as out of sync. Nothing is created or modified.
pub fn is_in_sync(path: &Path, contents: &str) -> Result<bool> {
    match std::fs::read(path) {
        Ok(existing) => Ok(existing == contents.as_bytes()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(EmbedError::Output {
            path: path.to_path_buf(),
            source,
        }),
    }
}
