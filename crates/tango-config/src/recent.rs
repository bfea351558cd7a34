use tango_core::DictionaryEntry;
use tango_core::store::{KeyValueStore, StoreError};

use crate::vocabulary::load_field;

const MAX_SIZE_KEY: &str = "recentWordsMaxSize";
const ENTRIES_KEY: &str = "recentWords";

pub const DEFAULT_MAX_SIZE: usize = 100;

/// History of looked-up words, newest first, one per `ent_seq`
#[derive(Debug, Clone, PartialEq)]
pub struct RecentWords {
    max_size: usize,
    entries: Vec<DictionaryEntry>,
}

impl Default for RecentWords {
    fn default() -> Self {
        Self::with_max_size(DEFAULT_MAX_SIZE)
    }
}

impl RecentWords {
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            max_size,
            entries: Vec::new(),
        }
    }

    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StoreError> {
        let max_size = load_field(store, MAX_SIZE_KEY)?.unwrap_or(DEFAULT_MAX_SIZE);
        let mut entries: Vec<DictionaryEntry> =
            load_field(store, ENTRIES_KEY)?.unwrap_or_default();
        entries.truncate(max_size);
        Ok(Self { max_size, entries })
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StoreError> {
        store.set(MAX_SIZE_KEY, serde_json::to_value(self.max_size)?)?;
        store.set(ENTRIES_KEY, serde_json::to_value(&self.entries)?)?;
        Ok(())
    }

    /// Put `entry` at the front. An earlier copy with the same `ent_seq` is
    /// dropped, and the oldest entry falls off past `max_size`.
    ///
    /// Entries without an `ent_seq` cannot be deduplicated and are skipped;
    /// returns whether the history changed.
    pub fn put(&mut self, entry: DictionaryEntry) -> bool {
        let Some(ent_seq) = entry.ent_seq else {
            tracing::warn!("Not recording '{}' without entSeq", entry.dictionary_form);
            return false;
        };

        self.entries.retain(|e| e.ent_seq != Some(ent_seq));
        self.entries.insert(0, entry);
        self.entries.truncate(self.max_size);
        true
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
