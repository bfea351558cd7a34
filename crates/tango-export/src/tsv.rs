use std::collections::HashSet;

use tango_core::{DictionaryEntry, VocabularyEntry};

pub const COLUMNS: [&str; 6] = [
    "dictionaryForm",
    "alternateForm",
    "other occurrences in text",
    "pos",
    "proficiencyLevel",
    "English",
];

const MISSING: &str = "-";

pub fn header() -> String {
    COLUMNS.join("\t")
}

/// Line for a bookmarked entry, which has no occurrences
pub fn entry_line(entry: &DictionaryEntry) -> String {
    line(entry, MISSING.to_string())
}

/// Line for one vocabulary entry of a text
pub fn export_line(vocabulary_entry: &VocabularyEntry) -> String {
    let entry = &vocabulary_entry.dictionary_entry;
    let occurrences = &vocabulary_entry.token_sequence_occurrences;

    let occurrences = if occurrences.is_empty() {
        MISSING.to_string()
    } else {
        let alternate_form = alternate_form(entry);
        occurrences
            .iter()
            .map(|occurrence| occurrence.surface_form.as_str())
            .filter(|surface| *surface != entry.dictionary_form && *surface != alternate_form)
            .collect::<Vec<_>>()
            .join(", ")
    };

    line(entry, occurrences)
}

/// Header plus one line per entry; identical lines are written once
pub fn to_tsv(vocabulary: &[VocabularyEntry]) -> String {
    let mut seen = HashSet::new();
    let mut lines = vec![header()];

    for entry in vocabulary {
        let line = export_line(entry);
        if seen.insert(line.clone()) {
            lines.push(line);
        }
    }

    lines.join("\n")
}

fn alternate_form(entry: &DictionaryEntry) -> &str {
    entry.alternate_form().unwrap_or(MISSING)
}

fn line(entry: &DictionaryEntry, occurrences: String) -> String {
    let level = if entry.proficiency_level.is_known() {
        entry.proficiency_level.tag()
    } else {
        MISSING.to_string()
    };

    [
        entry.dictionary_form.clone(),
        alternate_form(entry).to_string(),
        occurrences,
        entry.part_of_speech.join(", "),
        level,
        entry.english().join("; "),
    ]
    .join("\t")
}
