use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Host-facing widget configuration, persisted as kunmap.toml.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Dataset location, resolved by the host against the page location.
    pub dataset_path: String,
    /// Upper bound on rendered results per query.
    pub result_limit: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            dataset_path: "kun_map.json".to_string(),
            result_limit: 100,
        }
    }
}

impl WidgetConfig {
    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.dataset_path.is_empty() {
            errors.push("dataset_path must not be empty".to_string());
        }

        if self.result_limit == 0 {
            errors.push("result_limit must be at least 1".to_string());
        }

        errors
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
