use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tango_core::store::{KeyValueStore, StoreError};

const SORT_BY_KEY: &str = "vocabularySortBy";
const IS_ASC_KEY: &str = "vocabularyIsAsc";
const POS_FILTER_KEY: &str = "vocabularyPosFilter";
const LEVEL_FILTER_KEY: &str = "vocabularyLevelFilter";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Level,
    Pos,
    /// Unrecognized stored value; the list stays in merge order
    #[serde(other)]
    Insertion,
}

/// Sort and filter choices for vocabulary lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyPreferences {
    pub sort_by: SortBy,
    pub ascending: bool,
    /// Language-qualified part-of-speech keys, e.g. `ja-n`
    pub pos_filter: Vec<String>,
    /// Language-qualified level keys, e.g. `ja-JLPT-N3`
    pub level_filter: Vec<String>,
}

impl Default for VocabularyPreferences {
    fn default() -> Self {
        Self {
            sort_by: SortBy::Level,
            ascending: true,
            pos_filter: Vec::new(),
            level_filter: Vec::new(),
        }
    }
}

impl VocabularyPreferences {
    /// Hydrate from a store; fields that are missing or fail to decode keep
    /// their defaults.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StoreError> {
        let defaults = Self::default();
        Ok(Self {
            sort_by: load_field(store, SORT_BY_KEY)?.unwrap_or(defaults.sort_by),
            ascending: load_field(store, IS_ASC_KEY)?.unwrap_or(defaults.ascending),
            pos_filter: load_field(store, POS_FILTER_KEY)?.unwrap_or(defaults.pos_filter),
            level_filter: load_field(store, LEVEL_FILTER_KEY)?.unwrap_or(defaults.level_filter),
        })
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StoreError> {
        store.set(SORT_BY_KEY, serde_json::to_value(self.sort_by)?)?;
        store.set(IS_ASC_KEY, serde_json::to_value(self.ascending)?)?;
        store.set(POS_FILTER_KEY, serde_json::to_value(&self.pos_filter)?)?;
        store.set(LEVEL_FILTER_KEY, serde_json::to_value(&self.level_filter)?)?;
        Ok(())
    }

    pub fn set_sort(&mut self, sort_by: SortBy, ascending: bool) {
        self.sort_by = sort_by;
        self.ascending = ascending;
    }

    pub fn set_pos_filter(&mut self, pos_filter: Vec<String>) {
        self.pos_filter = pos_filter;
    }

    pub fn set_level_filter(&mut self, level_filter: Vec<String>) {
        self.level_filter = level_filter;
    }

    /// Select or deselect one level key
    pub fn toggle_level(&mut self, key: &str) {
        toggle(&mut self.level_filter, key);
    }

    /// Select or deselect one part-of-speech key
    pub fn toggle_pos(&mut self, key: &str) {
        toggle(&mut self.pos_filter, key);
    }

    /// Back to "show all"
    pub fn clear_filters(&mut self) {
        self.pos_filter.clear();
        self.level_filter.clear();
    }
}

fn toggle(keys: &mut Vec<String>, key: &str) {
    if let Some(position) = keys.iter().position(|k| k == key) {
        keys.remove(position);
    } else {
        keys.push(key.to_string());
    }
}

pub(crate) fn load_field<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    let Some(value) = store.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_value(value) {
        Ok(field) => Ok(Some(field)),
        Err(e) => {
            tracing::warn!("Ignoring stored {key}: {e}");
            Ok(None)
        }
    }
}
