pub mod language;
pub mod level;
pub mod provider;
pub mod sentence;
pub mod store;
pub mod types;

pub use language::{BoundaryRule, filter_key};
pub use level::{JlptLevel, ProficiencyLevel};
pub use sentence::{SentenceError, SentenceExtractor};
pub use store::{KeyValueStore, MemoryStore, StoreError};
pub use types::{
    Analysis, DictionaryEntry, Document, InflectionAnalysis, LinkedText, TextAnalysis,
    TokenSequence, VocabularyEntry,
};
