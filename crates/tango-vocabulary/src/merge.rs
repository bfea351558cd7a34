use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tango_core::{Analysis, VocabularyEntry};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("Vocabulary entry '{dictionary_form}' has no entSeq")]
    InvalidEntry { dictionary_form: String },
}

/// Merge two vocabularies into one list with each `entSeq` once.
///
/// Entries from `primary` override entries from `secondary` with the same
/// `entSeq`. The overridden entry keeps the position where it was first seen.
pub fn merge(
    primary: &[VocabularyEntry],
    secondary: &[VocabularyEntry],
) -> Result<Vec<VocabularyEntry>, VocabularyError> {
    merge_all([secondary, primary])
}

/// Merge any number of vocabularies, lowest priority first.
///
/// A later list overrides the content of an earlier entry with the same
/// `entSeq` but not its position.
pub fn merge_all<'a>(
    lists: impl IntoIterator<Item = &'a [VocabularyEntry]>,
) -> Result<Vec<VocabularyEntry>, VocabularyError> {
    let mut merged: Vec<VocabularyEntry> = Vec::new();
    let mut positions: HashMap<u64, usize> = HashMap::new();
    let mut overridden = 0usize;

    for list in lists {
        for entry in list {
            let ent_seq = entry.ent_seq().ok_or_else(|| VocabularyError::InvalidEntry {
                dictionary_form: entry.dictionary_entry.dictionary_form.clone(),
            })?;

            match positions.entry(ent_seq) {
                Entry::Occupied(position) => {
                    merged[*position.get()] = entry.clone();
                    overridden += 1;
                }
                Entry::Vacant(slot) => {
                    slot.insert(merged.len());
                    merged.push(entry.clone());
                }
            }
        }
    }

    tracing::debug!(entries = merged.len(), overridden, "Merged vocabulary");
    Ok(merged)
}

/// Document vocabulary: title entries override body entries
pub fn merge_analysis(analysis: &Analysis) -> Result<Vec<VocabularyEntry>, VocabularyError> {
    merge(
        &analysis.title_analysis.vocabulary,
        &analysis.body_analysis.vocabulary,
    )
}
