pub mod cards;
mod client;
pub mod tsv;

pub use cards::{Card, to_cards};
pub use client::ExportClient;

use anyhow::Result;
use tango_config::ExportFormat;
use tango_config::export::ExportConfig;
use tango_core::VocabularyEntry;

/// Export in the configured format to the configured address
pub async fn export(
    client: &ExportClient,
    config: &ExportConfig,
    vocabulary: &[VocabularyEntry],
    title: &str,
    url: &str,
) -> Result<()> {
    let email = config.destination_email.as_str();
    if !is_email(email) {
        anyhow::bail!("The email address '{email}' is invalid");
    }

    tracing::info!(entries = vocabulary.len(), format = ?config.format, "Exporting vocabulary");
    match config.format {
        ExportFormat::Tsv => client.export_tsv(vocabulary, title, url, email).await,
        ExportFormat::Anki => {
            client
                .export_cards(
                    vocabulary,
                    config.card_front,
                    config.card_back,
                    title,
                    url,
                    email,
                )
                .await
        }
    }
}

/// Loose address check: one `@`, a non-empty local part, a dotted domain
pub fn is_email(address: &str) -> bool {
    if address.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
