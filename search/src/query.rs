//! Search query types.

/// Query type for search.
///
/// Fuzzy matching only for now; kept as an enum so exact or regex queries
/// can be added without breaking callers.
#[derive(Debug, Clone)]
pub enum SearchQuery {
    /// Fuzzy matching search.
    Fuzzy(String),
}
