use crate::types::CategoryFilter;

/// A normalized search request.
/// Normalization rules:
/// - Trim surrounding whitespace
/// - Lowercase
/// - An empty needle means "no text filter"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub raw: String,
    pub needle: String,
    pub category: CategoryFilter,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>, category: CategoryFilter) -> Self {
        let raw = raw.into();
        let needle = raw.trim().to_lowercase();
        Self {
            raw,
            needle,
            category,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }
}
