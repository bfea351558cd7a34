use std::collections::HashMap;

use tango_core::VocabularyEntry;

use crate::filter::{level_key, pos_key};

/// Number of entries sharing one filter key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCount {
    pub key: String,
    pub count: usize,
}

/// Entries per level key, in first-seen order
pub fn level_counts(vocabulary: &[VocabularyEntry], language: &str) -> Vec<FacetCount> {
    count_by(vocabulary, |entry| level_key(language, entry))
}

/// Entries per top part-of-speech key, in first-seen order
pub fn pos_counts(vocabulary: &[VocabularyEntry], language: &str) -> Vec<FacetCount> {
    count_by(vocabulary, |entry| pos_key(language, entry))
}

fn count_by(
    vocabulary: &[VocabularyEntry],
    key_of: impl Fn(&VocabularyEntry) -> String,
) -> Vec<FacetCount> {
    let mut counts: Vec<FacetCount> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for entry in vocabulary {
        let key = key_of(entry);
        match positions.get(&key) {
            Some(&position) => counts[position].count += 1,
            None => {
                positions.insert(key.clone(), counts.len());
                counts.push(FacetCount { key, count: 1 });
            }
        }
    }

    counts
}
