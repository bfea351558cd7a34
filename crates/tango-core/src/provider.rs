use crate::types::Document;

/// Source of analyzed documents
#[async_trait::async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Fetch one analyzed document by key
    async fn document(&self, key: &str) -> Result<Document, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Invalid document: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    #[error("Broken linkage: {0}")]
    Linkage(#[from] crate::types::LinkageError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
