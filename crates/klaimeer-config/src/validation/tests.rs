//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = KlaimeerConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_fov_out_of_range() {
    let mut config = KlaimeerConfig::default();
    config.globe.camera.fov_degrees = 180.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("globe.camera.fov_degrees"));
}

#[test]
fn catches_far_not_beyond_near() {
    let mut config = KlaimeerConfig::default();
    config.globe.camera.near = 10.0;
    config.globe.camera.far = 5.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("globe.camera.far"));
}

#[test]
fn catches_zero_near_plane() {
    let mut config = KlaimeerConfig::default();
    config.globe.camera.near = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("globe.camera.near"));
}

#[test]
fn catches_degenerate_tessellation() {
    let mut config = KlaimeerConfig::default();
    config.globe.sphere.width_segments = 2;
    config.globe.sphere.height_segments = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("globe.sphere.width_segments"));
    assert!(err.contains("globe.sphere.height_segments"));
}

#[test]
fn catches_negative_radius() {
    let mut config = KlaimeerConfig::default();
    config.globe.sphere.radius = -2.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("globe.sphere.radius"));
}

#[test]
fn catches_opacity_above_one() {
    let mut config = KlaimeerConfig::default();
    config.globe.wireframe.opacity = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("globe.wireframe.opacity"));
}

#[test]
fn catches_nan_opacity() {
    let mut config = KlaimeerConfig::default();
    config.globe.points.opacity = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("globe.points.opacity"));
}

#[test]
fn catches_bad_tint() {
    let mut config = KlaimeerConfig::default();
    config.globe.points.color = "emerald".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("globe.points.color"));
}

#[test]
fn catches_too_many_points() {
    let mut config = KlaimeerConfig::default();
    config.globe.points.count = 1_000_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("globe.points.count"));
}

#[test]
fn zero_points_is_allowed() {
    let mut config = KlaimeerConfig::default();
    config.globe.points.count = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_point_size() {
    let mut config = KlaimeerConfig::default();
    config.globe.points.size = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("globe.points.size"));
}

#[test]
fn catches_runaway_spin() {
    let mut config = KlaimeerConfig::default();
    config.globe.animation.sphere_spin = 3.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("globe.animation.sphere_spin"));
}

#[test]
fn catches_tiny_window() {
    let mut config = KlaimeerConfig::default();
    config.window.width = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
}

#[test]
fn catches_bad_counter_entry() {
    let mut config = KlaimeerConfig::default();
    config.counters.entries[1].decimals = 30;
    config.counters.entries[2].duration_secs = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("counters.entries[1].decimals"));
    assert!(err.contains("counters.entries[2].duration_secs"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = KlaimeerConfig::default();
    config.globe.sphere.opacity = 2.0;
    config.globe.points.radius = 0.0;
    config.window.height = 5000;
    let err = validate(&config).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("globe.sphere.opacity"));
    assert!(msg.contains("globe.points.radius"));
    assert!(msg.contains("window.height"));
    assert!(matches!(err, klaimeer_common::ConfigError::ValidationError(_)));
    assert_eq!(msg.matches("; ").count(), 2);
}
