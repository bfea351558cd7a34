use std::collections::HashSet;

use tango_config::VocabularyPreferences;
use tango_core::{VocabularyEntry, filter_key};

/// Level, part-of-speech, and free-text criteria over one language's vocabulary.
///
/// An empty criterion accepts everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyFilter {
    pub language: String,
    pub level_keys: HashSet<String>,
    pub pos_keys: HashSet<String>,
    pub text: String,
}

impl VocabularyFilter {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Default::default()
        }
    }

    pub fn from_preferences(
        preferences: &VocabularyPreferences,
        language: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            level_keys: preferences.level_filter.iter().cloned().collect(),
            pos_keys: preferences.pos_filter.iter().cloned().collect(),
            text: text.into(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_level_key(mut self, key: impl Into<String>) -> Self {
        self.level_keys.insert(key.into());
        self
    }

    pub fn with_pos_key(mut self, key: impl Into<String>) -> Self {
        self.pos_keys.insert(key.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.level_keys.is_empty() && self.pos_keys.is_empty() && self.text.is_empty()
    }

    /// e.g. `ja-JLPT-N3`, `ja-UNKNOWN`
    pub fn level_key(&self, entry: &VocabularyEntry) -> String {
        level_key(&self.language, entry)
    }

    /// e.g. `ja-n`
    pub fn pos_key(&self, entry: &VocabularyEntry) -> String {
        pos_key(&self.language, entry)
    }

    pub fn matches(&self, entry: &VocabularyEntry) -> bool {
        let in_level =
            self.level_keys.is_empty() || self.level_keys.contains(&self.level_key(entry));
        let in_pos = self.pos_keys.is_empty() || self.pos_keys.contains(&self.pos_key(entry));
        in_level && in_pos && self.matches_text(entry)
    }

    /// Dictionary and alternate forms match as typed, English definitions
    /// ignore case.
    fn matches_text(&self, entry: &VocabularyEntry) -> bool {
        if self.text.is_empty() {
            return true;
        }

        let dictionary_entry = &entry.dictionary_entry;
        if dictionary_entry.dictionary_form.contains(&self.text) {
            return true;
        }
        if dictionary_entry
            .alternate_form()
            .is_some_and(|form| form.contains(&self.text))
        {
            return true;
        }

        let needle = self.text.to_lowercase();
        dictionary_entry
            .english()
            .iter()
            .any(|definition| definition.to_lowercase().contains(&needle))
    }

    pub fn apply(&self, vocabulary: &[VocabularyEntry]) -> Vec<VocabularyEntry> {
        if self.is_empty() {
            return vocabulary.to_vec();
        }
        vocabulary
            .iter()
            .filter(|entry| self.matches(entry))
            .cloned()
            .collect()
    }
}

pub fn level_key(language: &str, entry: &VocabularyEntry) -> String {
    filter_key(language, &entry.dictionary_entry.proficiency_level.tag())
}

pub fn pos_key(language: &str, entry: &VocabularyEntry) -> String {
    filter_key(language, entry.dictionary_entry.top_pos())
}
