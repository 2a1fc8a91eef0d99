//! List entries use case

use crate::domain::EntryCollection;
use crate::infrastructure::{EntryRepository, KeyValueStore};

/// Load the collection, newest first, with an optional limit.
pub fn list_entries<S: KeyValueStore>(
    repository: &EntryRepository<S>,
    limit: Option<usize>,
) -> EntryCollection {
    let mut collection = repository.load();

    if let Some(n) = limit {
        collection.entries.truncate(n);
    }

    collection
}
