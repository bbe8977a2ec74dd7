//! Atomic artifact persistence.

use std::io::{ErrorKind, Write};
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;

use crate::error::BankError;

/// Write `contents` to `path` all-or-nothing.
///
/// The bytes go to a temporary file beside `path`, which is synced and then
/// renamed over the target. If anything fails the temporary file is removed
/// and an existing `path` keeps its previous contents.
pub fn write_atomic(path: impl AsRef<Path>, contents: &[u8]) -> Result<(), BankError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| BankError::Io(e.error))?;

    info!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

/// Whether `path` already holds exactly `contents`. A missing file is
/// simply out of date.
pub fn is_up_to_date(path: impl AsRef<Path>, contents: &[u8]) -> Result<bool, BankError> {
    match std::fs::read(path) {
        Ok(existing) => Ok(existing == contents),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
