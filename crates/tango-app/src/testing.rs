use std::path::Path;
use std::sync::Arc;

use tango_config::Config;
use tango_core::MemoryStore;

use crate::provider::FileProvider;
use crate::state::AppState;

/// 雨が降る。 with 雨 linked to entry 2 in the body and 天気 to entry 1 in the title
pub const WEATHER: &str = r#"{
    "article_id": "k10012345",
    "structure": { "url": "https://example.com/k10012345", "title": "天気" },
    "analysis": {
        "titleAnalysis": {
            "linkedText": [ { "surfaceList": ["天気"], "vocabularyIndex": 0, "sequenceIndex": 0 } ],
            "vocabulary": [ {
                "dictionaryEntry": { "entSeq": 1, "dictionaryForm": "天気", "partOfSpeech": ["n"], "officialProficiencyLevel": "JLPT_N5", "definitions": { "en": ["weather"] } },
                "tokenSequenceOccurrences": [ { "surfaceForm": "天気" } ]
            } ]
        },
        "bodyAnalysis": {
            "linkedText": [
                { "surfaceList": ["雨"], "vocabularyIndex": 0, "sequenceIndex": 0 },
                { "surfaceList": ["が"] },
                { "surfaceList": ["降る", "。"] }
            ],
            "vocabulary": [ {
                "dictionaryEntry": { "entSeq": 2, "dictionaryForm": "雨", "partOfSpeech": ["n"], "officialProficiencyLevel": "JLPT_N5", "definitions": { "en": ["rain"] } },
                "tokenSequenceOccurrences": [ { "surfaceForm": "雨", "surfaceReading": "あめ" } ]
            } ]
        }
    }
}"#;

/// State over an in-memory store, reading documents from `documents_dir`
pub fn state(documents_dir: &Path) -> AppState {
    let config = Config {
        documents_dir: documents_dir.to_path_buf(),
        ..Config::default()
    };

    AppState {
        config,
        store: Arc::new(MemoryStore::new()),
        provider: Arc::new(FileProvider::new(documents_dir)),
    }
}
