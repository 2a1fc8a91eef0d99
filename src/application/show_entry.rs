//! Show entry use case

use crate::domain::{Entry, EntryId};
use crate::error::{Result, SnapjotError};
use crate::infrastructure::{EntryRepository, KeyValueStore};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::fs;
use std::path::Path;

/// Look up a single entry by id.
pub fn show_entry<S: KeyValueStore>(
    repository: &EntryRepository<S>,
    id: &EntryId,
) -> Option<Entry> {
    repository.load().find(id).cloned()
}

/// Decode an entry's inline image back to bytes on disk. The blob is
/// self-contained, so this needs nothing beyond the entry itself.
pub fn export_photo(entry: &Entry, out: &Path) -> Result<()> {
    let bytes = BASE64.decode(&entry.image).map_err(|e| {
        SnapjotError::Config(format!(
            "stored image for entry {} is not valid base64: {}",
            entry.id, e
        ))
    })?;

    fs::write(out, bytes)?;
    Ok(())
}
