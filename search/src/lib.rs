//! Kunmap fuzzy search library.
//!
//! Wraps the nucleo matcher behind an index of dataset records. Matching,
//! tokenization, scoring and ranking are entirely nucleo's; this crate
//! only decides what text gets indexed and when results become visible.
//!
//! # Design
//!
//! - The dataset is injected once at construction and never mutated, so
//!   there is no deletion or compaction story.
//! - An empty query yields an empty result set rather than the whole
//!   dataset.
//! - `set_query()` sets the search pattern, `tick()` drives matching
//!   forward without blocking, `results()` iterates matches in relevance
//!   order, best first.

mod config;
mod index;
mod query;
mod results;

pub use config::{CaseMatching, SearchConfig};
pub use index::SearchIndex;
pub use query::SearchQuery;
pub use results::SearchResults;
