use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::level::ProficiencyLevel;

pub const ENGLISH: &str = "en";

/// One renderable unit of analyzed text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedText {
    #[serde(default)]
    pub surface_list: Vec<String>,
    #[serde(default)]
    pub reading_list: Vec<String>,
    /// Position in the owning analysis' vocabulary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary_index: Option<usize>,
    /// Position in that vocabulary entry's token sequence occurrences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_index: Option<usize>,
}

impl LinkedText {
    pub fn new<S: Into<String>>(surfaces: impl IntoIterator<Item = S>) -> Self {
        Self {
            surface_list: surfaces.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn linked(mut self, vocabulary_index: usize, sequence_index: usize) -> Self {
        self.vocabulary_index = Some(vocabulary_index);
        self.sequence_index = Some(sequence_index);
        self
    }

    /// Surface content joined with no separator
    pub fn surface(&self) -> String {
        self.surface_list.concat()
    }

    pub fn reading(&self) -> String {
        self.reading_list.concat()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflectionAnalysis {
    #[serde(default)]
    pub inflection_base: String,
    #[serde(default)]
    pub inflection_form: String,
    #[serde(default)]
    pub inflection_name: String,
}

/// One matched occurrence of a dictionary entry in the text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSequence {
    pub surface_form: String,
    #[serde(default)]
    pub surface_reading: String,
    #[serde(default)]
    pub base_form: String,
    #[serde(default)]
    pub first_occurrence_offset: usize,
    #[serde(default)]
    pub inflected: bool,
    #[serde(
        default,
        rename = "inflectionAnalysisResult",
        skip_serializing_if = "Option::is_none"
    )]
    pub inflection: Option<InflectionAnalysis>,
}

/// Dictionary record, identified by `ent_seq`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    /// Only absent in malformed payloads
    #[serde(default)]
    pub ent_seq: Option<u64>,
    pub dictionary_form: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_form: Option<String>,
    #[serde(default, deserialize_with = "skip_null_tags")]
    pub part_of_speech: Vec<String>,
    #[serde(default, rename = "officialProficiencyLevel")]
    pub proficiency_level: ProficiencyLevel,
    #[serde(default)]
    pub common_word: bool,
    /// Glosses keyed by language code
    #[serde(default)]
    pub definitions: BTreeMap<String, Vec<String>>,
}

impl DictionaryEntry {
    /// Alternate (kana) form, empty strings treated as absent
    pub fn alternate_form(&self) -> Option<&str> {
        self.alternate_form.as_deref().filter(|form| !form.is_empty())
    }

    /// First part-of-speech tag, empty when there is none
    pub fn top_pos(&self) -> &str {
        self.part_of_speech.first().map(String::as_str).unwrap_or("")
    }

    pub fn definitions_in(&self, language: &str) -> &[String] {
        self.definitions
            .get(language)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn english(&self) -> &[String] {
        self.definitions_in(ENGLISH)
    }
}

/// A dictionary entry together with its occurrences in one text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub dictionary_entry: DictionaryEntry,
    #[serde(default)]
    pub first_occurrence_offset: usize,
    #[serde(default)]
    pub reading: String,
    #[serde(default)]
    pub token_sequence_occurrences: Vec<TokenSequence>,
}

impl VocabularyEntry {
    pub fn new(dictionary_entry: DictionaryEntry) -> Self {
        Self {
            dictionary_entry,
            ..Default::default()
        }
    }

    pub fn ent_seq(&self) -> Option<u64> {
        self.dictionary_entry.ent_seq
    }
}

fn default_language() -> String {
    "ja".to_string()
}

/// Analysis of one title or body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub linked_text: Vec<LinkedText>,
    #[serde(default)]
    pub vocabulary: Vec<VocabularyEntry>,
}

impl Default for TextAnalysis {
    fn default() -> Self {
        Self {
            language: default_language(),
            linked_text: Vec::new(),
            vocabulary: Vec::new(),
        }
    }
}

impl TextAnalysis {
    /// Check that every linkage points inside this analysis
    pub fn validate(&self) -> Result<(), LinkageError> {
        for (position, linked) in self.linked_text.iter().enumerate() {
            let Some(vocabulary_index) = linked.vocabulary_index else {
                continue;
            };
            let entry = self.vocabulary.get(vocabulary_index).ok_or(
                LinkageError::VocabularyIndex {
                    position,
                    index: vocabulary_index,
                    len: self.vocabulary.len(),
                },
            )?;

            if let Some(sequence_index) = linked.sequence_index {
                let len = entry.token_sequence_occurrences.len();
                if sequence_index >= len {
                    return Err(LinkageError::SequenceIndex {
                        position,
                        index: sequence_index,
                        len,
                    });
                }
            }
        }
        Ok(())
    }

    /// Resolve a linked text element to its vocabulary entry and occurrence
    pub fn vocabulary_for(
        &self,
        linked: &LinkedText,
    ) -> Option<(&VocabularyEntry, Option<&TokenSequence>)> {
        let entry = self.vocabulary.get(linked.vocabulary_index?)?;
        let sequence = linked
            .sequence_index
            .and_then(|index| entry.token_sequence_occurrences.get(index));
        Some((entry, sequence))
    }
}

/// Title and body analyses of one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure_key: Option<String>,
    #[serde(default)]
    pub title_analysis: TextAnalysis,
    #[serde(default)]
    pub body_analysis: TextAnalysis,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub article_id: String,
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub structure: Structure,
    pub analysis: Analysis,
}

#[derive(Debug, thiserror::Error)]
pub enum LinkageError {
    #[error("linked text {position}: vocabulary index {index} out of range ({len} entries)")]
    VocabularyIndex {
        position: usize,
        index: usize,
        len: usize,
    },

    #[error("linked text {position}: sequence index {index} out of range ({len} occurrences)")]
    SequenceIndex {
        position: usize,
        index: usize,
        len: usize,
    },
}

fn skip_null_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(tags.unwrap_or_default().into_iter().flatten().collect())
}
