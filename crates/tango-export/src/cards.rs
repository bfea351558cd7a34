use serde::{Deserialize, Serialize};
use tango_config::CardField;
use tango_core::VocabularyEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

/// Render one side of a card
pub fn field_value(vocabulary_entry: &VocabularyEntry, field: CardField) -> String {
    let entry = &vocabulary_entry.dictionary_entry;
    match field {
        CardField::Kanji => entry.dictionary_form.clone(),
        CardField::Kana => entry
            .alternate_form()
            .unwrap_or(&entry.dictionary_form)
            .to_string(),
        CardField::KanjiAndKana => match entry.alternate_form() {
            Some(kana) => format!("{}【{kana}】", entry.dictionary_form),
            None => entry.dictionary_form.clone(),
        },
        CardField::English => entry.english().join("; "),
        CardField::Unsupported => {
            tracing::warn!("Unsupported card export field");
            String::new()
        }
    }
}

pub fn to_cards(vocabulary: &[VocabularyEntry], front: CardField, back: CardField) -> Vec<Card> {
    vocabulary
        .iter()
        .map(|entry| Card {
            front: field_value(entry, front),
            back: field_value(entry, back),
        })
        .collect()
}
