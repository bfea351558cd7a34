use std::ops::RangeInclusive;
use std::ptr;

use crate::language::BoundaryRule;
use crate::types::LinkedText;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SentenceError {
    #[error("Selected text is not part of the linked text")]
    NotFound,

    #[error("Index {index} out of bounds ({len} elements)")]
    OutOfBounds { index: usize, len: usize },
}

/// Expands a selected element of linked text to its enclosing sentence
pub struct SentenceExtractor<R> {
    rule: R,
}

impl<R: BoundaryRule> SentenceExtractor<R> {
    pub fn new(rule: R) -> Self {
        Self { rule }
    }

    /// Sentence around `target`, which must be an element of `linked_text`.
    ///
    /// The element is matched by identity: an equal-looking element elsewhere
    /// in the text does not count.
    pub fn extract(
        &self,
        linked_text: &[LinkedText],
        target: &LinkedText,
    ) -> Result<String, SentenceError> {
        let index = linked_text
            .iter()
            .position(|linked| ptr::eq(linked, target))
            .ok_or(SentenceError::NotFound)?;
        self.extract_at(linked_text, index)
    }

    /// Sentence around the element at `index`
    pub fn extract_at(
        &self,
        linked_text: &[LinkedText],
        index: usize,
    ) -> Result<String, SentenceError> {
        let span = self.span(linked_text, index)?;
        let sentence: String = linked_text[span].iter().map(LinkedText::surface).collect();
        Ok(sentence.trim().to_string())
    }

    /// Positions of the run holding `index`, ending at its terminator
    pub fn span(
        &self,
        linked_text: &[LinkedText],
        index: usize,
    ) -> Result<RangeInclusive<usize>, SentenceError> {
        let len = linked_text.len();
        if index >= len {
            return Err(SentenceError::OutOfBounds { index, len });
        }

        let is_boundary =
            |position: usize| self.rule.is_boundary(&linked_text[position].surface());

        let mut start = index;
        // Step back when the selection is the boundary itself
        if is_boundary(start) {
            start = start.saturating_sub(1);
        }
        while start > 0 && !is_boundary(start - 1) {
            start -= 1;
        }

        let mut end = index;
        while end < len && !is_boundary(end) {
            end += 1;
        }
        let end = end.min(len - 1);

        Ok(start..=end)
    }

    /// Sentence lookup for copy and context-menu actions: never fails, an
    /// unresolvable selection yields an empty string.
    pub fn sentence_or_empty(&self, linked_text: &[LinkedText], target: &LinkedText) -> String {
        match self.extract(linked_text, target) {
            Ok(sentence) => sentence,
            Err(e) => {
                tracing::warn!(
                    surface = %target.surface(),
                    "Failed to get sentence from linked text: {e}"
                );
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct FullStop;

    impl BoundaryRule for FullStop {
        fn is_boundary(&self, surface: &str) -> bool {
            surface.contains('\n') || surface.contains('。')
        }
    }

    fn weather() -> Vec<LinkedText> {
        vec![
            LinkedText::new(["今日"]),
            LinkedText::new(["は"]),
            LinkedText::new(["晴れ", "。"]),
            LinkedText::new(["\n"]),
            LinkedText::new(["明日"]),
            LinkedText::new(["は", "雨", "。"]),
        ]
    }

    #[test]
    fn test_sentence_stops_at_full_stop() {
        let text = weather();
        let extractor = SentenceExtractor::new(FullStop);
        assert_eq!(extractor.extract(&text, &text[1]).unwrap(), "今日は晴れ。");
        assert_eq!(extractor.extract(&text, &text[0]).unwrap(), "今日は晴れ。");
    }

    #[test]
    fn test_identity_not_value() {
        let text = vec![
            LinkedText::new(["雨"]),
            LinkedText::new(["。"]),
            LinkedText::new(["雨"]),
        ];
        let extractor = SentenceExtractor::new(FullStop);
        assert_eq!(text[0], text[2]);
        assert_eq!(extractor.extract(&text, &text[0]).unwrap(), "雨。");
        assert_eq!(extractor.extract(&text, &text[2]).unwrap(), "雨");

        let detached = LinkedText::new(["雨"]);
        assert_eq!(
            extractor.extract(&text, &detached),
            Err(SentenceError::NotFound)
        );
        assert_eq!(extractor.sentence_or_empty(&text, &detached), "");
    }

    #[test]
    fn test_selecting_a_boundary() {
        let text = weather();
        let extractor = SentenceExtractor::new(FullStop);
        assert_eq!(extractor.extract(&text, &text[2]).unwrap(), "今日は晴れ。");
        assert_eq!(extractor.extract(&text, &text[3]).unwrap(), "今日は晴れ。");
        assert_eq!(extractor.extract(&text, &text[5]).unwrap(), "明日は雨。");
    }

    #[test]
    fn test_boundary_at_start() {
        let text = vec![LinkedText::new(["。"]), LinkedText::new(["雨"])];
        let extractor = SentenceExtractor::new(FullStop);
        assert_eq!(extractor.extract_at(&text, 0).unwrap(), "。");
        assert_eq!(extractor.extract_at(&text, 1).unwrap(), "雨");
    }

    #[test]
    fn test_no_boundaries_returns_whole_text() {
        let text = vec![
            LinkedText::new([" 今日"]),
            LinkedText::new(["は"]),
            LinkedText::new(["晴れ "]),
        ];
        let extractor = SentenceExtractor::new(FullStop);
        for index in 0..text.len() {
            assert_eq!(extractor.extract_at(&text, index).unwrap(), "今日は晴れ");
        }
    }

    #[test]
    fn test_never_spans_foreign_boundary() {
        let text = weather();
        let extractor = SentenceExtractor::new(FullStop);
        for index in 0..text.len() {
            let sentence = extractor.extract_at(&text, index).unwrap();
            assert!(!(sentence.contains("晴れ") && sentence.contains("明日")));
        }
    }

    #[test]
    fn test_out_of_bounds() {
        let extractor = SentenceExtractor::new(FullStop);
        assert_eq!(
            extractor.extract_at(&[], 0),
            Err(SentenceError::OutOfBounds { index: 0, len: 0 })
        );
    }

    fn linked_text(surfaces: Vec<String>) -> Vec<LinkedText> {
        surfaces.into_iter().map(|s| LinkedText::new([s])).collect()
    }

    fn surfaces_and_index(
        surface: impl Strategy<Value = String>,
    ) -> impl Strategy<Value = (Vec<String>, usize)> {
        prop::collection::vec(surface, 1..24).prop_flat_map(|surfaces| {
            let len = surfaces.len();
            (Just(surfaces), 0..len)
        })
    }

    proptest! {
        #[test]
        fn prop_boundary_free_text_is_one_sentence(
            (surfaces, index) in surfaces_and_index("[a-z ]{0,3}")
        ) {
            let text = linked_text(surfaces);
            let whole: String = text.iter().map(LinkedText::surface).collect();
            let extractor = SentenceExtractor::new(FullStop);
            let sentence = extractor.extract(&text, &text[index]).unwrap();
            prop_assert_eq!(sentence, whole.trim());
        }

        #[test]
        fn prop_span_holds_no_foreign_boundary(
            (surfaces, index) in surfaces_and_index(prop_oneof![
                "[a-z]{1,2}",
                Just("。".to_string()),
                Just("\n".to_string()),
            ])
        ) {
            let text = linked_text(surfaces);
            let extractor = SentenceExtractor::new(FullStop);
            let is_boundary = |k: usize| FullStop.is_boundary(&text[k].surface());

            let span = extractor.span(&text, index).unwrap();
            prop_assert!(span.contains(&index));

            let (start, end) = (*span.start(), *span.end());
            for k in start..end {
                // A selected boundary takes the run it terminates, so the
                // element before it may be the previous terminator
                let previous_terminator = is_boundary(index) && k + 1 == index;
                if k != index && !previous_terminator {
                    prop_assert!(!is_boundary(k), "boundary at {} inside {:?}", k, span);
                }
            }
            if end + 1 < text.len() {
                prop_assert!(is_boundary(end));
            }
            prop_assert!(extractor.extract_at(&text, index).is_ok());
        }
    }
}
