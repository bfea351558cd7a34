/// Text rules a language implementation provides to the core
pub trait BoundaryRule: Send + Sync {
    /// Whether a joined surface ends or breaks a sentence
    fn is_boundary(&self, surface: &str) -> bool;
}

impl<R: BoundaryRule + ?Sized> BoundaryRule for &R {
    fn is_boundary(&self, surface: &str) -> bool {
        (**self).is_boundary(surface)
    }
}

/// Language-qualified key used by the vocabulary filters, e.g. `ja-JLPT-N3`.
///
/// Only the first underscore of the original key becomes a dash.
pub fn filter_key(language: &str, original_key: &str) -> String {
    format!("{language}-{}", original_key.replacen('_', "-", 1))
}
