use tango_config::VocabularyPreferences;
use tango_core::{VocabularyEntry, filter_key};

use crate::LANGUAGE;

/// Part-of-speech groups offered by the vocabulary filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosGroup {
    Adjectives,
    Adverbs,
    Counters,
    Nouns,
    Particles,
    Verbs,
    Other,
}

impl PosGroup {
    pub const ALL: [PosGroup; 7] = [
        PosGroup::Adjectives,
        PosGroup::Adverbs,
        PosGroup::Counters,
        PosGroup::Nouns,
        PosGroup::Particles,
        PosGroup::Verbs,
        PosGroup::Other,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PosGroup::Adjectives => "Adjectives",
            PosGroup::Adverbs => "Adverbs",
            PosGroup::Counters => "Counters",
            PosGroup::Nouns => "Nouns",
            PosGroup::Particles => "Particles",
            PosGroup::Verbs => "Verbs",
            PosGroup::Other => "Other",
        }
    }

    /// JMdict tag prefixes belonging to the group
    fn prefixes(&self) -> &'static [&'static str] {
        match self {
            PosGroup::Adjectives => &["adj"],
            PosGroup::Adverbs => &["adv"],
            PosGroup::Counters => &["ctr"],
            PosGroup::Nouns => &["n"],
            PosGroup::Particles => &["prt"],
            PosGroup::Verbs => &["v", "aux"],
            PosGroup::Other => &["conj", "exp", "id", "int", "pn", "pref", "suf"],
        }
    }

    /// Whether a raw tag such as `adj-i` belongs to the group
    pub fn matches(&self, tag: &str) -> bool {
        self.prefixes().iter().any(|prefix| tag.starts_with(prefix))
    }

    /// Whether a filter key such as `ja-adj-i` belongs to the group
    pub fn matches_key(&self, key: &str) -> bool {
        key.strip_prefix(LANGUAGE)
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(|tag| self.matches(tag))
    }

    /// Entries whose top part-of-speech falls in the group
    pub fn count(&self, vocabulary: &[VocabularyEntry]) -> usize {
        vocabulary
            .iter()
            .filter(|entry| self.matches(entry.dictionary_entry.top_pos()))
            .count()
    }

    pub fn is_selected(&self, preferences: &VocabularyPreferences) -> bool {
        preferences.pos_filter.iter().any(|key| self.matches_key(key))
    }
}

/// Select or deselect a whole group.
///
/// Selecting adds the key of every group tag seen in `vocabulary`; deselecting
/// removes every selected key of the group.
pub fn toggle_group(
    preferences: &mut VocabularyPreferences,
    group: PosGroup,
    vocabulary: &[VocabularyEntry],
) {
    let mut pos_filter = preferences.pos_filter.clone();

    if group.is_selected(preferences) {
        pos_filter.retain(|key| !group.matches_key(key));
    } else {
        for entry in vocabulary {
            let tag = entry.dictionary_entry.top_pos();
            if !group.matches(tag) {
                continue;
            }
            let key = filter_key(LANGUAGE, tag);
            if !pos_filter.contains(&key) {
                pos_filter.push(key);
            }
        }
    }

    tracing::debug!(group = group.title(), keys = pos_filter.len(), "Toggled pos group");
    preferences.set_pos_filter(pos_filter);
}
