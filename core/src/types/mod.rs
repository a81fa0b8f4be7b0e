pub(crate) mod config;
pub use config::{ConfigError, WidgetConfig};

pub(crate) mod entry;
pub use entry::{KunEntry, OkuriganaEntry, Searchable};
