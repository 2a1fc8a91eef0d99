//! Entry repository - serialization of the collection against the store

use crate::domain::{Entry, EntryCollection, EntryId};
use crate::error::Result;
use crate::infrastructure::store::KeyValueStore;

/// Fixed storage key holding the whole serialized collection
pub const ENTRIES_KEY: &str = "entries";

/// Owns load/persist of the entry collection. The whole collection is
/// read and replaced as one blob; the dataset is small, user-authored
/// photo notes, and nothing needs random access beyond id match.
#[derive(Debug)]
pub struct EntryRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> EntryRepository<S> {
    pub fn new(store: S) -> Self {
        EntryRepository { store }
    }

    /// Load the persisted collection. Fails soft: an absent key yields an
    /// empty collection, and a malformed or unreadable blob is logged and
    /// treated as empty rather than blocking startup.
    pub fn load(&self) -> EntryCollection {
        let blob = match self.store.get(ENTRIES_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return EntryCollection::new(),
            Err(e) => {
                eprintln!("warning: failed to read entry store: {}", e);
                return EntryCollection::new();
            }
        };

        match toml::from_str(&blob) {
            Ok(collection) => collection,
            Err(e) => {
                eprintln!("warning: entry store is malformed, starting empty: {}", e);
                EntryCollection::new()
            }
        }
    }

    /// Prepend an entry and persist the full new collection. The returned
    /// collection is the caller's new current state.
    pub fn add(&self, mut current: EntryCollection, entry: Entry) -> EntryCollection {
        current.prepend(entry);
        self.persist(&current);
        current
    }

    /// Remove the entry with the given id (a no-op when absent) and persist
    /// the result.
    pub fn remove(&self, mut current: EntryCollection, id: &EntryId) -> EntryCollection {
        current.remove(id);
        self.persist(&current);
        current
    }

    /// Serialize and write the full collection under the fixed key. Write
    /// failures are logged only; in-memory state stays updated even when
    /// durability was not achieved.
    pub fn persist(&self, collection: &EntryCollection) {
        if let Err(e) = self.try_persist(collection) {
            eprintln!("warning: failed to persist entries: {}", e);
        }
    }

    fn try_persist(&self, collection: &EntryCollection) -> Result<()> {
        let blob = toml::to_string_pretty(collection)?;
        self.store.set(ENTRIES_KEY, &blob)?;
        Ok(())
    }
}
