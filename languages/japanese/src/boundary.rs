use tango_core::{BoundaryRule, LinkedText, SentenceExtractor};

pub const FULL_STOP: char = '。';

/// Sentences end at a full stop or a line break
#[derive(Debug, Clone, Copy, Default)]
pub struct JapaneseBoundaries;

impl BoundaryRule for JapaneseBoundaries {
    fn is_boundary(&self, surface: &str) -> bool {
        surface.contains('\n') || surface.contains(FULL_STOP)
    }
}

pub fn sentence_extractor() -> SentenceExtractor<JapaneseBoundaries> {
    SentenceExtractor::new(JapaneseBoundaries)
}

/// Sentence containing `target`, or an empty string when it cannot be found
pub fn get_sentence(linked_text: &[LinkedText], target: &LinkedText) -> String {
    sentence_extractor().sentence_or_empty(linked_text, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_boundary() {
        let rule = JapaneseBoundaries;
        assert!(rule.is_boundary("晴れ。"));
        assert!(rule.is_boundary("\n"));
        assert!(rule.is_boundary("です。\n"));
        assert!(!rule.is_boundary("、"));
        assert!(!rule.is_boundary("今日"));
    }

    #[test]
    fn test_get_sentence_from_article() {
        let linked_text = vec![
            LinkedText::new(["今日"]),
            LinkedText::new(["は"]),
            LinkedText::new(["晴れ", "。"]),
            LinkedText::new(["\n"]),
            LinkedText::new(["明日"]),
            LinkedText::new(["は", "雨", "。"]),
        ];
        assert_eq!(get_sentence(&linked_text, &linked_text[1]), "今日は晴れ。");
        assert_eq!(get_sentence(&linked_text, &linked_text[4]), "明日は雨。");
    }

    #[test]
    fn test_get_sentence_unknown_target_is_empty() {
        let linked_text = vec![LinkedText::new(["雨"])];
        let copy = linked_text[0].clone();
        assert_eq!(get_sentence(&linked_text, &copy), "");
    }
}
