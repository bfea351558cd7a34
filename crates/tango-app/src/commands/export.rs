use anyhow::Context;
use tango_export::ExportClient;

use crate::cli::ExportArgs;
use crate::state::AppState;

pub async fn handle_export(state: &AppState, args: ExportArgs) -> anyhow::Result<()> {
    let (document, visible) = super::visible_vocabulary(state, &args.document, &args.view).await?;

    let mut config = state.config.export.clone();
    if let Some(format) = args.format {
        config.format = format.into();
    }
    if let Some(email) = args.email {
        config.destination_email = email;
    }

    let client = ExportClient::new(&config)?;
    let structure = &document.structure;

    tango_export::export(&client, &config, &visible, &structure.title, &structure.url)
        .await
        .context("Failed to export vocabulary")?;

    tracing::info!("Exported {} entries to {}", visible.len(), config.destination_email);
    Ok(())
}
