//! Integration tests for configuration management

use release_timeline::config::{Config, ConfigOverrides};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.out_dir.is_empty(),
        "Default out_dir should not be empty"
    );
    assert_eq!(config.page.title, "Python release timeline");
    assert_eq!(
        config.page.chart_loader,
        "https://www.gstatic.com/charts/loader.js"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
out_dir = "./public"

[page]
title = "CPython releases"
chart_loader = "vendor/loader.js"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.out_dir, "./public");
    assert_eq!(config.page.title, "CPython releases");
    assert_eq!(config.page.chart_loader, "vendor/loader.js");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "warn"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.out_dir, "");
    assert_eq!(config.page.title, "");
}

#[test]
fn test_config_from_toml_rejects_bad_types() {
    let toml_str = r#"
[logging]
verbose = "sometimes"
"#;
    assert!(Config::from_toml(toml_str).is_err());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
level = "info"
file = "$RELEASE_TIMELINE/logs/timeline.log"

[paths]
out_dir = "$RELEASE_TIMELINE/site"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");
    let dir = Config::get_config_dir();

    assert!(!config.logging.file.contains("$RELEASE_TIMELINE"));
    assert!(!config.paths.out_dir.contains("$RELEASE_TIMELINE"));
    assert!(config.logging.file.starts_with(dir.to_str().unwrap()));
    assert!(config.paths.out_dir.ends_with("site"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    assert_eq!(config.get("level"), Some("error".to_string()));

    config.set("verbose", "true").expect("Failed to set verbose");
    assert_eq!(config.get("verbose"), Some("true".to_string()));

    config.set("out-dir", "public").expect("Failed to set out-dir");
    assert_eq!(config.get("out_dir"), Some("public".to_string()));

    config.set("title", "Releases").expect("Failed to set title");
    assert_eq!(config.get("title"), Some("Releases".to_string()));

    config
        .set("chart_loader", "loader.js")
        .expect("Failed to set chart_loader");
    assert_eq!(config.get("chart-loader"), Some("loader.js".to_string()));
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("level", "loud").is_err());
    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("database", "x").is_err());
    assert_eq!(config.get("nonexistent"), None);
}

#[test]
fn test_config_set_normalizes_level() {
    let mut config = Config::from_defaults();
    config.set("level", "WARNING").expect("Failed to set level");
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_config_unset() {
    let defaults = Config::from_defaults();
    let mut config = defaults.clone();

    config.set("title", "Something else").unwrap();
    config.set("out_dir", "elsewhere").unwrap();
    config.unset("title", &defaults).expect("Failed to unset title");
    config.unset("out_dir", &defaults).expect("Failed to unset out_dir");

    assert_eq!(config.page.title, defaults.page.title);
    assert_eq!(config.paths.out_dir, defaults.paths.out_dir);
    assert!(config.unset("bogus", &defaults).is_err());
}

#[test]
fn test_config_save_format_round_trips() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("title", "CPython").expect("Failed to set title");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.page.title, "CPython");
    assert_eq!(loaded.page.chart_loader, config.page.chart_loader);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();
    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/var/log/timeline.log".to_string()),
        verbose: Some(true),
        out_dir: Some("dist".to_string()),
        title: Some("Releases".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/var/log/timeline.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.out_dir, "dist");
    assert_eq!(config.page.title, "Releases");
}

#[test]
fn test_config_overrides_partial() {
    let defaults = Config::from_defaults();
    let mut config = defaults.clone();
    let overrides = ConfigOverrides {
        out_dir: Some("dist".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.paths.out_dir, "dist");
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.page.title, defaults.page.title);
}

#[test]
fn test_config_display_format() {
    let display = Config::from_defaults().to_string();

    assert!(display.contains("[logging]"));
    assert!(display.contains("[paths]"));
    assert!(display.contains("[page]"));
    assert!(display.contains("out_dir = "));
    assert!(display.contains("chart_loader = "));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_toml("[logging]\nlevel = \"info\"\n").unwrap();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.paths.out_dir, defaults.paths.out_dir);
    assert_eq!(config.page.title, defaults.page.title);
    assert_eq!(config.page.chart_loader, defaults.page.chart_loader);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let defaults = Config::from_defaults();
    let mut config = defaults.clone();
    config.page.title = "Mine".to_string();

    assert!(!config.merge_defaults(&defaults));
    assert_eq!(config.page.title, "Mine");
}

#[test]
fn test_get_config_dir() {
    let dir = Config::get_config_dir();
    assert!(dir.to_string_lossy().contains("release-timeline"));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
