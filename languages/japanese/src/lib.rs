pub mod boundary;
pub mod pos;

pub use boundary::{JapaneseBoundaries, get_sentence, sentence_extractor};
pub use pos::{PosGroup, toggle_group};

/// Language code used in filter keys
pub const LANGUAGE: &str = "ja";
