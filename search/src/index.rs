//! Fixed-dataset fuzzy index.

use crate::config::{CaseMatching, SearchConfig};
use crate::query::SearchQuery;
use crate::results::SearchResults;
use kunmap_core::types::Searchable;
use nucleo::pattern::{CaseMatching as NucleoCaseMatching, Normalization};
use nucleo::{Config as NucleoConfig, Nucleo, Utf32String};
use std::sync::Arc;

/// Fuzzy index over a dataset loaded once at construction.
///
/// Wraps Nucleo. Every entry is injected exactly once and its indexed text
/// is fixed for the lifetime of the index; there are no insertions or
/// deletions after construction.
pub struct SearchIndex<T: Searchable> {
    nucleo: Nucleo<T>,
    config: SearchConfig,
    current_pattern: String,
    at_threshold: bool,
}

impl<T: Searchable> SearchIndex<T> {
    /// Builds the index and injects every entry.
    ///
    /// The `notify` callback is invoked by Nucleo's background worker when
    /// new results are ready. Synchronous callers pass a no-op.
    pub fn new(
        entries: Vec<T>,
        config: SearchConfig,
        notify: Arc<dyn Fn() + Send + Sync>,
    ) -> Self {
        let nucleo = Nucleo::new(NucleoConfig::DEFAULT, notify, None, 1);

        let injector = nucleo.injector();
        for entry in entries {
            injector.push(entry, |item, cols| {
                cols[0] = Utf32String::from(item.search_text().as_str());
            });
        }

        Self {
            nucleo,
            config,
            current_pattern: String::new(),
            at_threshold: false,
        }
    }

    /// Sets the search pattern.
    ///
    /// Uses the append optimization if the pattern extends the previous
    /// one. Matching runs on Nucleo's background threadpool; call `tick()`
    /// to drive it forward.
    pub fn set_query(&mut self, query: SearchQuery) {
        let SearchQuery::Fuzzy(pattern) = query;

        let case_matching = match self.config.case_matching {
            CaseMatching::Sensitive => NucleoCaseMatching::Respect,
            CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
            CaseMatching::Smart => NucleoCaseMatching::Smart,
        };

        let normalization = if self.config.unicode_normalization {
            Normalization::Smart
        } else {
            Normalization::Never
        };

        let append = !self.current_pattern.is_empty() && pattern.starts_with(&self.current_pattern);

        self.nucleo
            .pattern
            .reparse(0, &pattern, case_matching, normalization, append);
        self.current_pattern = pattern;
        self.at_threshold = false;
    }

    /// Drives the search forward. Returns true if results may have changed.
    pub fn tick(&mut self, timeout_ms: u64) -> bool {
        if self.at_threshold {
            return false;
        }

        let status = self.nucleo.tick(timeout_ms);

        let result_count = self.nucleo.snapshot().matched_items(..).count();
        if result_count >= self.config.result_limit || !status.running {
            self.at_threshold = true;
        }

        true
    }

    pub fn is_done(&self) -> bool {
        self.at_threshold
    }

    /// Current matches in relevance order, best first.
    pub fn results(&self) -> SearchResults<'_, T> {
        SearchResults {
            snapshot: self.nucleo.snapshot(),
            limit: self.config.result_limit,
            empty_query: self.current_pattern.is_empty(),
        }
    }
}
