use tango_config::VocabularyPreferences;
use tango_core::VocabularyEntry;
use tango_lang_japanese::{PosGroup, toggle_group};

use crate::cli::{PrefsArgs, direction};
use crate::state::AppState;

pub async fn handle_prefs(state: &AppState, args: PrefsArgs) -> anyhow::Result<()> {
    let mut preferences = state.preferences()?;

    let vocabulary = match &args.document {
        Some(key) => {
            let document = state.provider.document(key).await?;
            tango_vocabulary::merge_analysis(&document.analysis)?
        }
        None => Vec::new(),
    };

    if apply(&mut preferences, &args, &vocabulary) {
        state.save_preferences(&preferences)?;
        tracing::info!("Saved vocabulary preferences");
    }

    println!("{}", serde_json::to_string_pretty(&preferences)?);
    Ok(())
}

/// Apply the requested changes; true when anything was asked for
fn apply(
    preferences: &mut VocabularyPreferences,
    args: &PrefsArgs,
    vocabulary: &[VocabularyEntry],
) -> bool {
    let mut changed = false;

    if args.clear {
        preferences.clear_filters();
        changed = true;
    }

    let sort_by = args.sort.map(Into::into).unwrap_or(preferences.sort_by);
    let ascending = direction(args.ascending, args.descending).unwrap_or(preferences.ascending);
    if args.sort.is_some() || args.ascending || args.descending {
        preferences.set_sort(sort_by, ascending);
        changed = true;
    }

    for key in &args.toggle_levels {
        preferences.toggle_level(key);
        changed = true;
    }
    for key in &args.toggle_pos {
        preferences.toggle_pos(key);
        changed = true;
    }
    for group in &args.toggle_groups {
        toggle_group(preferences, PosGroup::from(*group), vocabulary);
        changed = true;
    }

    changed
}
