use std::cmp::Ordering;

use tango_config::SortBy;
use tango_core::VocabularyEntry;

/// By numeric proficiency level (`UNKNOWN` = 0, `JLPT_N5` = 5)
pub fn compare_by_level(a: &VocabularyEntry, b: &VocabularyEntry) -> Ordering {
    let level_a = a.dictionary_entry.proficiency_level.number();
    let level_b = b.dictionary_entry.proficiency_level.number();
    level_a.cmp(&level_b)
}

/// By first part-of-speech tag
pub fn compare_by_pos(a: &VocabularyEntry, b: &VocabularyEntry) -> Ordering {
    a.dictionary_entry.top_pos().cmp(b.dictionary_entry.top_pos())
}

/// Ascending comparison for `sort_by`, the other criterion breaking ties
pub fn compare(a: &VocabularyEntry, b: &VocabularyEntry, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Level => compare_by_level(a, b).then_with(|| compare_by_pos(a, b)),
        SortBy::Pos => compare_by_pos(a, b).then_with(|| compare_by_level(a, b)),
        SortBy::Insertion => Ordering::Equal,
    }
}

/// Stable in-place sort. `SortBy::Insertion` leaves the list untouched.
pub fn sort(vocabulary: &mut [VocabularyEntry], sort_by: SortBy, ascending: bool) {
    if sort_by == SortBy::Insertion {
        tracing::debug!("Unrecognized sort key, keeping merge order");
        return;
    }

    vocabulary.sort_by(|a, b| {
        let ordering = compare(a, b, sort_by);
        if ascending { ordering } else { ordering.reverse() }
    });
}

pub fn sorted(
    vocabulary: &[VocabularyEntry],
    sort_by: SortBy,
    ascending: bool,
) -> Vec<VocabularyEntry> {
    let mut vocabulary = vocabulary.to_vec();
    sort(&mut vocabulary, sort_by, ascending);
    vocabulary
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tango_core::{DictionaryEntry, ProficiencyLevel};

    fn entry(ent_seq: u64, level: &str, pos: &str) -> VocabularyEntry {
        VocabularyEntry::new(DictionaryEntry {
            ent_seq: Some(ent_seq),
            dictionary_form: format!("語{ent_seq}"),
            part_of_speech: vec![pos.to_string()],
            proficiency_level: ProficiencyLevel::parse(level),
            ..Default::default()
        })
    }

    fn ent_seqs(entries: &[VocabularyEntry]) -> Vec<u64> {
        entries.iter().filter_map(VocabularyEntry::ent_seq).collect()
    }

    #[test]
    fn test_descending_level_puts_n5_first() {
        let vocabulary = vec![
            entry(1, "JLPT_N5", "n"),
            entry(2, "JLPT_N3", "n"),
            entry(3, "UNKNOWN", "n"),
        ];
        let descending = sorted(&vocabulary, SortBy::Level, false);
        assert_eq!(ent_seqs(&descending), vec![1, 2, 3]);

        let ascending = sorted(&vocabulary, SortBy::Level, true);
        assert_eq!(ent_seqs(&ascending), vec![3, 2, 1]);
    }

    #[test]
    fn test_level_ties_broken_by_pos() {
        let vocabulary = vec![
            entry(1, "JLPT_N4", "v5r"),
            entry(2, "JLPT_N4", "adj-i"),
            entry(3, "JLPT_N2", "n"),
        ];
        let ascending = sorted(&vocabulary, SortBy::Level, true);
        assert_eq!(ent_seqs(&ascending), vec![3, 2, 1]);
    }

    #[test]
    fn test_pos_ties_broken_by_level() {
        let vocabulary = vec![
            entry(1, "JLPT_N1", "n"),
            entry(2, "JLPT_N5", "n"),
            entry(3, "UNKNOWN", "adv"),
        ];
        let ascending = sorted(&vocabulary, SortBy::Pos, true);
        assert_eq!(ent_seqs(&ascending), vec![3, 1, 2]);

        let descending = sorted(&vocabulary, SortBy::Pos, false);
        assert_eq!(ent_seqs(&descending), vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_is_stable() {
        let vocabulary = vec![
            entry(7, "JLPT_N3", "n"),
            entry(4, "JLPT_N3", "n"),
            entry(9, "JLPT_N1", "n"),
            entry(1, "JLPT_N3", "n"),
        ];
        for ascending in [true, false] {
            let result = sorted(&vocabulary, SortBy::Level, ascending);
            let ties: Vec<u64> = result
                .iter()
                .filter(|e| e.dictionary_entry.proficiency_level.number() == 3)
                .filter_map(VocabularyEntry::ent_seq)
                .collect();
            assert_eq!(ties, vec![7, 4, 1]);
        }
    }

    #[test]
    fn test_unrecognized_sort_keeps_order() {
        let vocabulary = vec![
            entry(2, "JLPT_N1", "v1"),
            entry(1, "JLPT_N5", "adv"),
            entry(3, "UNKNOWN", "n"),
        ];
        let result = sorted(&vocabulary, SortBy::Insertion, false);
        assert_eq!(result, vocabulary);
    }

    #[test]
    fn test_missing_pos_sorts_first() {
        let mut bare = entry(5, "JLPT_N3", "n");
        bare.dictionary_entry.part_of_speech.clear();
        let vocabulary = vec![entry(1, "JLPT_N3", "n"), bare];
        let result = sorted(&vocabulary, SortBy::Pos, true);
        assert_eq!(ent_seqs(&result), vec![5, 1]);
    }

    fn tagged_vocabulary() -> impl Strategy<Value = Vec<VocabularyEntry>> {
        let tags = (
            prop::sample::select(vec!["JLPT_N5", "JLPT_N3", "JLPT_N1", "UNKNOWN"]),
            prop::sample::select(vec!["n", "v1", "adj-i"]),
        );
        prop::collection::vec(tags, 0..24).prop_map(|tags| {
            tags.into_iter()
                .enumerate()
                .map(|(position, (level, pos))| entry(position as u64, level, pos))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_sort_is_ordered_and_stable(
            vocabulary in tagged_vocabulary(),
            by_pos in any::<bool>(),
            ascending in any::<bool>()
        ) {
            let sort_by = if by_pos { SortBy::Pos } else { SortBy::Level };
            let result = sorted(&vocabulary, sort_by, ascending);
            prop_assert_eq!(result.len(), vocabulary.len());

            for pair in result.windows(2) {
                let ordering = compare(&pair[0], &pair[1], sort_by);
                if ascending {
                    prop_assert_ne!(ordering, Ordering::Greater);
                } else {
                    prop_assert_ne!(ordering, Ordering::Less);
                }
                // Entries were tagged with their input position
                if ordering == Ordering::Equal {
                    prop_assert!(pair[0].ent_seq() < pair[1].ent_seq());
                }
            }
        }
    }
}
