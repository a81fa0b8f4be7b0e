//! Kunmap autocomplete widget.
//!
//! Owns the load → build-index → react pipeline behind a single controller
//! object. The host surface owns the actual input element and output
//! container: it forwards each input event to [`Autocomplete::on_input`]
//! and writes the returned markup back, replacing whatever was there.

mod controller;
mod render;

pub use controller::{Autocomplete, UNAVAILABLE_MARKUP, WidgetStatus};
pub use render::{RenderEntry, render_list};
