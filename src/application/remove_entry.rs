//! Remove entry use case

use crate::domain::{EntryCollection, EntryId};
use crate::infrastructure::{EntryRepository, KeyValueStore};

/// Remove an entry by id and persist the result. Returns the new
/// collection and whether anything was actually removed; an unknown id is
/// a no-op, not an error.
pub fn remove_entry<S: KeyValueStore>(
    repository: &EntryRepository<S>,
    id: &EntryId,
) -> (EntryCollection, bool) {
    let current = repository.load();
    let before = current.len();

    let current = repository.remove(current, id);
    let removed = current.len() < before;

    (current, removed)
}
