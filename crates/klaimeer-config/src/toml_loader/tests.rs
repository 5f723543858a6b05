//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_klaimeer_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, klaimeer_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[globe.wireframe]
color = "#ff00ff"

[globe.points]
count = 64
seed = 1234
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.globe.wireframe.color, "#ff00ff");
    assert_eq!(config.globe.points.count, 64);
    assert_eq!(config.globe.points.seed, Some(1234));
    // Defaults preserved
    assert!((config.globe.wireframe.opacity - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.window.title, "Klaimeer");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, klaimeer_common::ConfigError::ParseError(_)));
}

#[test]
fn load_wrong_type_returns_parse_error() {
    let err = parse_str("[globe.points]\ncount = \"many\"\n").unwrap_err();
    assert!(err.to_string().contains("failed to parse TOML"));
}

#[test]
fn load_config_with_invalid_values_keeps_parsed_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[globe.camera]
fov_degrees = 500.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.globe.camera.fov_degrees - 500.0).abs() < f64::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("klaimeer").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.globe.points.count, 1000);
    assert_eq!(config.counters.entries.len(), 4);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;

    let config = parse_str(&default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
    assert_eq!(config.globe.sphere.width_segments, 64);
}

#[test]
fn default_config_path_is_reasonable() {
    // May not resolve in all CI environments
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("klaimeer"));
        assert!(path_str.ends_with("config.toml"));
    }
}
