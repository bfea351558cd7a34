use std::fmt;

use serde::{Deserialize, Serialize};

/// JLPT level, N5 being the easiest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JlptLevel {
    N5,
    N4,
    N3,
    N2,
    N1,
}

impl JlptLevel {
    /// `N3` or `n3`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "N5" => Some(JlptLevel::N5),
            "N4" => Some(JlptLevel::N4),
            "N3" => Some(JlptLevel::N3),
            "N2" => Some(JlptLevel::N2),
            "N1" => Some(JlptLevel::N1),
            _ => None,
        }
    }

    /// The N-number itself: N5 is 5, N1 is 1
    pub fn number(&self) -> u8 {
        match self {
            JlptLevel::N5 => 5,
            JlptLevel::N4 => 4,
            JlptLevel::N3 => 3,
            JlptLevel::N2 => 2,
            JlptLevel::N1 => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            JlptLevel::N5 => "N5",
            JlptLevel::N4 => "N4",
            JlptLevel::N3 => "N3",
            JlptLevel::N2 => "N2",
            JlptLevel::N1 => "N1",
        }
    }
}

/// Proficiency tag of a dictionary entry.
///
/// Payloads carry it as `"JLPT_N3"` or `"UNKNOWN"`; it is decoded once here so
/// the rest of the workspace never re-parses the tag. Missing, null, and
/// unrecognized tags all decode to [`ProficiencyLevel::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ProficiencyLevel {
    #[default]
    Unknown,
    Jlpt(JlptLevel),
}

const UNKNOWN_TAG: &str = "UNKNOWN";
const JLPT_PREFIX: &str = "JLPT_";

impl ProficiencyLevel {
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        let level = tag.strip_prefix(JLPT_PREFIX).unwrap_or(tag);
        JlptLevel::from_name(level)
            .map(ProficiencyLevel::Jlpt)
            .unwrap_or(ProficiencyLevel::Unknown)
    }

    /// Numeric level used for ordering: `Unknown` is 0, `JLPT_N{k}` is k
    pub fn number(&self) -> u8 {
        match self {
            ProficiencyLevel::Unknown => 0,
            ProficiencyLevel::Jlpt(level) => level.number(),
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, ProficiencyLevel::Jlpt(_))
    }

    /// Wire tag, e.g. `JLPT_N3`
    pub fn tag(&self) -> String {
        match self {
            ProficiencyLevel::Unknown => UNKNOWN_TAG.to_string(),
            ProficiencyLevel::Jlpt(level) => format!("{JLPT_PREFIX}{}", level.name()),
        }
    }
}

impl From<Option<String>> for ProficiencyLevel {
    fn from(tag: Option<String>) -> Self {
        tag.as_deref()
            .map(ProficiencyLevel::parse)
            .unwrap_or_default()
    }
}

impl From<ProficiencyLevel> for String {
    fn from(level: ProficiencyLevel) -> Self {
        level.tag()
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(ProficiencyLevel::parse("JLPT_N3"), ProficiencyLevel::Jlpt(JlptLevel::N3));
        assert_eq!(ProficiencyLevel::parse("JLPT_N5").number(), 5);
        assert_eq!(ProficiencyLevel::parse("UNKNOWN"), ProficiencyLevel::Unknown);
        assert_eq!(ProficiencyLevel::parse("JLPT_N9"), ProficiencyLevel::Unknown);
        assert_eq!(ProficiencyLevel::Unknown.number(), 0);
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        let level: ProficiencyLevel = serde_json::from_str("\"JLPT_N1\"").unwrap();
        assert_eq!(level, ProficiencyLevel::Jlpt(JlptLevel::N1));
        assert_eq!(serde_json::to_string(&level).unwrap(), "\"JLPT_N1\"");

        let level: ProficiencyLevel = serde_json::from_str("null").unwrap();
        assert_eq!(level, ProficiencyLevel::Unknown);
        assert_eq!(serde_json::to_string(&level).unwrap(), "\"UNKNOWN\"");
    }
}
