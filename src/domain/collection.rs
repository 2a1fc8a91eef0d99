//! Ordered collection of entries, newest first

use crate::domain::entry::{Entry, EntryId};
use serde::{Deserialize, Serialize};

/// The full ordered set of entries. New entries are prepended, so the
/// first element is always the most recent capture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryCollection {
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl EntryCollection {
    pub fn new() -> Self {
        EntryCollection::default()
    }

    /// Insert an entry at the front of the collection
    pub fn prepend(&mut self, entry: Entry) {
        self.entries.insert(0, entry);
    }

    /// Remove the entry with the given id. Returns true if an entry was
    /// removed; removing an unknown id is a no-op, not an error.
    pub fn remove(&mut self, id: &EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.id != id);
        self.entries.len() != before
    }

    pub fn find(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}
