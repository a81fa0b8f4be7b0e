use kunmap_core::types::WidgetConfig;

/// Verify a missing config file falls back to defaults.
#[test]
fn test_load_missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kunmap.toml");

    let config = WidgetConfig::load(&path).unwrap();

    assert_eq!(config.dataset_path, "kun_map.json");
    assert_eq!(config.result_limit, 100);
}

/// Verify save/load round-trips the config.
#[test]
fn test_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kunmap.toml");

    let config = WidgetConfig {
        dataset_path: "kun_map_oku.json".to_string(),
        result_limit: 25,
    };
    config.save(&path).unwrap();

    let loaded = WidgetConfig::load(&path).unwrap();
    assert_eq!(loaded.dataset_path, "kun_map_oku.json");
    assert_eq!(loaded.result_limit, 25);
}

/// Verify partial config files fill missing fields from defaults.
#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kunmap.toml");
    std::fs::write(&path, "result_limit = 10\n").unwrap();

    let config = WidgetConfig::load(&path).unwrap();

    assert_eq!(config.dataset_path, "kun_map.json");
    assert_eq!(config.result_limit, 10);
}

/// Verify malformed TOML surfaces as a parse error.
#[test]
fn test_malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kunmap.toml");
    std::fs::write(&path, "result_limit = ").unwrap();

    assert!(WidgetConfig::load(&path).is_err());
}

/// Verify validation flags zero limits and empty paths.
#[test]
fn test_validate_rejects_degenerate_values() {
    let config = WidgetConfig {
        dataset_path: String::new(),
        result_limit: 0,
    };

    let errors = config.validate();

    assert_eq!(errors.len(), 2);
}

/// Verify the default config validates cleanly.
#[test]
fn test_default_config_is_valid() {
    assert!(WidgetConfig::default().validate().is_empty());
}
