use std::io::ErrorKind;
use std::path::PathBuf;

use tango_core::Document;
use tango_core::provider::{AnalysisProvider, ProviderError};

/// Reads analyzed documents stored as JSON files
pub struct FileProvider {
    root: PathBuf,
}

impl FileProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `key` is a path relative to the root; `.json` is assumed when it has
    /// no extension
    fn resolve(&self, key: &str) -> PathBuf {
        let path = self.root.join(key);
        if path.extension().is_none() {
            path.with_extension("json")
        } else {
            path
        }
    }
}

#[async_trait::async_trait]
impl AnalysisProvider for FileProvider {
    async fn document(&self, key: &str) -> Result<Document, ProviderError> {
        let path = self.resolve(key);
        tracing::info!("Loading document from {}", path.display());

        let data = tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProviderError::NotFound(path.display().to_string()),
            _ => ProviderError::IoError(e),
        })?;

        let document: Document = serde_json::from_str(&data)?;
        document.analysis.title_analysis.validate()?;
        document.analysis.body_analysis.validate()?;

        tracing::info!(
            title_entries = document.analysis.title_analysis.vocabulary.len(),
            body_entries = document.analysis.body_analysis.vocabulary.len(),
            "Loaded document"
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOCUMENT: &str = r#"{
        "article_id": "k10012345",
        "structure": { "url": "https://example.com/k10012345", "title": "天気" },
        "analysis": {
            "titleAnalysis": {
                "language": "ja",
                "linkedText": [ { "surfaceList": ["天気"], "readingList": ["てんき"], "vocabularyIndex": 0, "sequenceIndex": 0 } ],
                "vocabulary": [ {
                    "dictionaryEntry": { "entSeq": 1, "dictionaryForm": "天気", "partOfSpeech": ["n"], "officialProficiencyLevel": "JLPT_N5", "definitions": { "en": ["weather"] } },
                    "tokenSequenceOccurrences": [ { "surfaceForm": "天気", "inflected": false } ]
                } ]
            },
            "bodyAnalysis": { "linkedText": [], "vocabulary": [] }
        }
    }"#;

    #[tokio::test]
    async fn test_reads_document_by_key() {
        let temp_dir = TempDir::new().unwrap();
        tokio::fs::write(temp_dir.path().join("weather.json"), DOCUMENT)
            .await
            .unwrap();

        let provider = FileProvider::new(temp_dir.path());
        let document = provider.document("weather").await.unwrap();
        assert_eq!(document.article_id, "k10012345");
        assert_eq!(document.analysis.title_analysis.vocabulary.len(), 1);
        assert_eq!(document.analysis.body_analysis.language, "ja");
    }

    #[tokio::test]
    async fn test_missing_document() {
        let temp_dir = TempDir::new().unwrap();
        let provider = FileProvider::new(temp_dir.path());
        let result = provider.document("nothing-here").await;
        assert!(matches!(result, Err(ProviderError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_broken_linkage_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let broken = DOCUMENT.replace("\"vocabularyIndex\": 0", "\"vocabularyIndex\": 4");
        tokio::fs::write(temp_dir.path().join("broken.json"), broken)
            .await
            .unwrap();

        let provider = FileProvider::new(temp_dir.path());
        let result = provider.document("broken.json").await;
        assert!(matches!(result, Err(ProviderError::Linkage(_))));
    }
}
