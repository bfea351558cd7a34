pub mod facets;
pub mod filter;
pub mod merge;
pub mod sort;

pub use facets::{FacetCount, level_counts, pos_counts};
pub use filter::VocabularyFilter;
pub use merge::{VocabularyError, merge, merge_all, merge_analysis};
pub use sort::{sort, sorted};

use tango_config::VocabularyPreferences;
use tango_core::VocabularyEntry;

/// What a vocabulary list shows: entries passing the preference filters and
/// `text_filter`, ordered by the preferred sort.
pub fn sort_and_filter(
    vocabulary: &[VocabularyEntry],
    preferences: &VocabularyPreferences,
    language: &str,
    text_filter: &str,
) -> Vec<VocabularyEntry> {
    let filter = VocabularyFilter::from_preferences(preferences, language, text_filter);
    let mut visible = filter.apply(vocabulary);
    sort(&mut visible, preferences.sort_by, preferences.ascending);
    visible
}
