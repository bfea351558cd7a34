use anyhow::Context;
use tango_core::DictionaryEntry;

use crate::cli::SentenceArgs;
use crate::state::AppState;

pub async fn handle_sentence(state: &AppState, args: SentenceArgs) -> anyhow::Result<()> {
    let document = state
        .provider
        .document(&args.document)
        .await
        .with_context(|| format!("Failed to load document '{}'", args.document))?;
    let analysis = if args.title {
        &document.analysis.title_analysis
    } else {
        &document.analysis.body_analysis
    };

    let Some(target) = analysis.linked_text.get(args.index) else {
        anyhow::bail!(
            "Index {} out of range ({} elements)",
            args.index,
            analysis.linked_text.len()
        );
    };

    println!("{}", tango_lang_japanese::get_sentence(&analysis.linked_text, target));

    // Word details for the context menu
    if let Some((entry, sequence)) = analysis.vocabulary_for(target) {
        let dictionary_entry = &entry.dictionary_entry;
        let surface = sequence.map_or(target.surface(), |s| s.surface_form.clone());
        let reading = sequence
            .map(|s| s.surface_reading.clone())
            .filter(|reading| !reading.is_empty())
            .unwrap_or_else(|| target.reading());
        println!("{surface}\t{reading}\t{}", dictionary_entry.proficiency_level);

        if let Some(inflection) = sequence.and_then(|s| s.inflection.as_ref()) {
            println!(
                "{} → {} ({})",
                inflection.inflection_base, inflection.inflection_form, inflection.inflection_name
            );
        }

        remember(state, dictionary_entry)?;
    }

    Ok(())
}

fn remember(state: &AppState, entry: &DictionaryEntry) -> anyhow::Result<()> {
    let mut recent = state.recent_words()?;
    if recent.put(entry.clone()) {
        state.save_recent_words(&recent)?;
        tracing::debug!(words = recent.len(), "Recorded {}", entry.dictionary_form);
    }
    Ok(())
}
