use std::env;

use serde::{Deserialize, Serialize};

fn default_timeout_seconds() -> u64 {
    30
}

fn default_card_front() -> CardField {
    CardField::Kanji
}

fn default_card_back() -> CardField {
    CardField::English
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Tsv,
    Anki,
}

/// Which part of a vocabulary entry goes on a flashcard side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardField {
    Kanji,
    Kana,
    KanjiAndKana,
    English,
    /// Stale or unknown field name, rendered empty
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Sent as `x-api-key`
    pub api_key: String,
    pub tsv_endpoint: String,
    pub anki_endpoint: String,
    /// Where the exported file is mailed
    pub destination_email: String,
    pub format: ExportFormat,
    #[serde(default = "default_card_front")]
    pub card_front: CardField,
    #[serde(default = "default_card_back")]
    pub card_back: CardField,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            tsv_endpoint: String::new(),
            anki_endpoint: String::new(),
            destination_email: String::new(),
            format: ExportFormat::default(),
            card_front: default_card_front(),
            card_back: default_card_back(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl ExportConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        let timeout_seconds = env::var("TANGO_EXPORT_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_seconds);

        Self {
            api_key: env::var("TANGO_API_KEY").unwrap_or_default(),
            tsv_endpoint: env::var("TANGO_TSV_ENDPOINT").unwrap_or_default(),
            anki_endpoint: env::var("TANGO_ANKI_ENDPOINT").unwrap_or_default(),
            destination_email: env::var("TANGO_EXPORT_EMAIL").unwrap_or_default(),
            timeout_seconds,
            ..defaults
        }
    }

    /// Endpoint for the configured format
    pub fn endpoint(&self, format: ExportFormat) -> &str {
        match format {
            ExportFormat::Tsv => &self.tsv_endpoint,
            ExportFormat::Anki => &self.anki_endpoint,
        }
    }
}
