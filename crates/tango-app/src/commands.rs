use anyhow::Context;
use tango_config::VocabularyPreferences;
use tango_core::VocabularyEntry;

use crate::cli::{Command, ViewArgs, direction};
use crate::state::AppState;

pub mod export;
pub mod prefs;
pub mod recent;
pub mod sentence;
pub mod vocabulary;

pub async fn run(state: &AppState, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Vocabulary(args) => vocabulary::handle_vocabulary(state, args).await,
        Command::Sentence(args) => sentence::handle_sentence(state, args).await,
        Command::Export(args) => export::handle_export(state, args).await,
        Command::Prefs(args) => prefs::handle_prefs(state, args).await,
        Command::Recent => recent::handle_recent(state),
    }
}

/// Stored preferences with the command-line overrides applied
fn view_preferences(state: &AppState, view: &ViewArgs) -> anyhow::Result<VocabularyPreferences> {
    let mut preferences = state.preferences()?;

    if let Some(sort) = view.sort {
        preferences.sort_by = sort.into();
    }
    if let Some(ascending) = direction(view.ascending, view.descending) {
        preferences.ascending = ascending;
    }
    if !view.levels.is_empty() {
        preferences.set_level_filter(view.levels.clone());
    }
    if !view.pos.is_empty() {
        preferences.set_pos_filter(view.pos.clone());
    }

    Ok(preferences)
}

/// Merged document vocabulary, filtered and sorted for display
async fn visible_vocabulary(
    state: &AppState,
    document: &str,
    view: &ViewArgs,
) -> anyhow::Result<(tango_core::Document, Vec<VocabularyEntry>)> {
    let document = state
        .provider
        .document(document)
        .await
        .with_context(|| format!("Failed to load document '{document}'"))?;
    let merged = tango_vocabulary::merge_analysis(&document.analysis)?;
    let preferences = view_preferences(state, view)?;

    let language = &document.analysis.body_analysis.language;

    let visible = tango_vocabulary::sort_and_filter(&merged, &preferences, language, &view.text);
    tracing::info!(merged = merged.len(), visible = visible.len(), "Vocabulary ready");
    Ok((document, visible))
}
