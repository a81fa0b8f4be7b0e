//! Search results types.

use kunmap_core::types::Searchable;
use nucleo::Snapshot;

/// Search results snapshot that provides zero-copy iteration.
///
/// Borrows from the index. Matches come back in Nucleo's relevance order,
/// best first, truncated at the configured result limit.
pub struct SearchResults<'a, T: Searchable> {
    pub(crate) snapshot: &'a Snapshot<T>,
    pub(crate) limit: usize,
    pub(crate) empty_query: bool,
}

impl<'a, T: Searchable> SearchResults<'a, T> {
    /// Iterates over matched entries.
    ///
    /// An empty query yields nothing: Nucleo treats an empty pattern as
    /// matching every entry, which would flash the whole dataset into the
    /// result panel on page load or clear.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + use<'a, T> {
        let take = if self.empty_query { 0 } else { self.limit };
        let snapshot: &'a Snapshot<T> = self.snapshot;
        snapshot
            .matched_items(..)
            .map(|item| item.data)
            .take(take)
    }
}
