use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use tango_config::CardField;
use tango_config::export::ExportConfig;
use tango_core::VocabularyEntry;

use crate::cards::{Card, to_cards};
use crate::tsv::to_tsv;

/// Client for the export service that mails TSV files and flashcard decks
#[derive(Clone)]
pub struct ExportClient {
    tsv_endpoint: String,
    anki_endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

impl ExportClient {
    pub fn new(config: &ExportConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            tsv_endpoint: config.tsv_endpoint.clone(),
            anki_endpoint: config.anki_endpoint.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    /// Mail the vocabulary as a TSV file
    pub async fn export_tsv(
        &self,
        vocabulary: &[VocabularyEntry],
        title: &str,
        url: &str,
        email: &str,
    ) -> Result<()> {
        let request = TsvExportRequest {
            title,
            url,
            tsv: to_tsv(vocabulary),
            email,
        };
        self.post(&self.tsv_endpoint, &request).await
    }

    /// Mail the vocabulary as a flashcard deck
    pub async fn export_cards(
        &self,
        vocabulary: &[VocabularyEntry],
        front: CardField,
        back: CardField,
        title: &str,
        url: &str,
        email: &str,
    ) -> Result<()> {
        let request = CardExportRequest {
            title,
            url,
            cards: to_cards(vocabulary, front, back),
            email,
        };
        self.post(&self.anki_endpoint, &request).await
    }

    async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<()> {
        if endpoint.is_empty() {
            anyhow::bail!("No export endpoint configured");
        }

        tracing::info!("POST {endpoint}");
        let response = self
            .client
            .post(endpoint)
            .header("x-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .context("Failed to send export request")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Failed with error code {}", status.as_u16());
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct TsvExportRequest<'a> {
    title: &'a str,
    url: &'a str,
    tsv: String,
    email: &'a str,
}

#[derive(Serialize)]
struct CardExportRequest<'a> {
    title: &'a str,
    url: &'a str,
    cards: Vec<Card>,
    email: &'a str,
}
