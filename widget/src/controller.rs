//! Autocomplete controller.

use crate::render::{RenderEntry, render_list};
use kunmap_core::dataset;
use kunmap_core::types::{Searchable, WidgetConfig};
use kunmap_search::{SearchConfig, SearchIndex, SearchQuery};
use serde::de::DeserializeOwned;
use std::hash::Hash;
use std::path::Path;
use std::sync::Arc;

/// Markup rendered in place of results while the widget is unavailable.
pub const UNAVAILABLE_MARKUP: &str = r#"<li class="unavailable">search unavailable</li>"#;

/// Upper bound on a single blocking tick while draining a query. Queries
/// run to completion within one `on_input` call.
const TICK_TIMEOUT_MS: u64 = 10;

/// Widget readiness. The host should keep the input element disabled
/// unless the widget is ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetStatus {
    Ready,
    /// Dataset load failed; carries the error text for the host's error
    /// surface. The only recovery path is re-opening the widget.
    Unavailable(String),
}

/// Autocomplete controller: dataset, fuzzy index and renderer behind one
/// object, initialized in a fixed order (load, then build index, then
/// accept input).
pub struct Autocomplete<T: Searchable> {
    index: Option<SearchIndex<T>>,
    status: WidgetStatus,
}

impl<T> Autocomplete<T>
where
    T: Searchable + RenderEntry + DeserializeOwned + Eq + Hash,
{
    /// Loads the dataset and builds the index.
    ///
    /// A load failure does not propagate: the widget comes up in the
    /// `Unavailable` state and `on_input` renders the unavailable marker
    /// instead of results.
    pub fn open(config: &WidgetConfig) -> Self {
        Self::open_with_notify(config, Arc::new(|| {}))
    }

    /// Like [`Autocomplete::open`], with a notify callback invoked by the
    /// matcher's background worker when new results are ready (typically
    /// used to request a repaint).
    pub fn open_with_notify(
        config: &WidgetConfig,
        notify: Arc<dyn Fn() + Send + Sync>,
    ) -> Self {
        match Self::build_index(config, notify) {
            Ok(index) => Self {
                index: Some(index),
                status: WidgetStatus::Ready,
            },
            Err(err) => {
                tracing::error!(error = %err, "initialization failed, search unavailable");
                Self {
                    index: None,
                    status: WidgetStatus::Unavailable(err.to_string()),
                }
            }
        }
    }

    fn build_index(
        config: &WidgetConfig,
        notify: Arc<dyn Fn() + Send + Sync>,
    ) -> kunmap_core::Result<SearchIndex<T>> {
        let entries = dataset::load::<T>(Path::new(&config.dataset_path))?;
        tracing::info!(count = entries.len(), "autocomplete ready");

        let search_config = SearchConfig {
            result_limit: config.result_limit,
            ..SearchConfig::default()
        };
        Ok(SearchIndex::new(entries, search_config, notify))
    }

    pub fn status(&self) -> &WidgetStatus {
        &self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status == WidgetStatus::Ready
    }

    /// Handles one input event.
    ///
    /// Queries the index with the current input value and renders the
    /// result list, best match first. Returns the full replacement markup
    /// for the output container; the previous content is always discarded.
    /// Runs to completion before returning, so every keystroke pays for a
    /// full query and a full re-render.
    pub fn on_input(&mut self, text: &str) -> String {
        let Some(index) = self.index.as_mut() else {
            return UNAVAILABLE_MARKUP.to_string();
        };

        index.set_query(SearchQuery::Fuzzy(text.to_string()));
        while !index.is_done() {
            index.tick(TICK_TIMEOUT_MS);
        }

        render_list(index.results().iter())
    }
}
