//! Configuration schema types for Klaimeer.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the values the globe ships with.

mod counters;
mod globe;
mod logging;
mod window;

pub use counters::*;
pub use globe::*;
pub use logging::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct KlaimeerConfig {
    pub window: WindowConfig,
    pub globe: GlobeConfig,
    pub counters: CountersConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_globe_matches_shipped_visual() {
        let globe = KlaimeerConfig::default().globe;
        assert!(globe.enabled);
        assert!((globe.camera.fov_degrees - 75.0).abs() < f64::EPSILON);
        assert!((globe.camera.near - 0.1).abs() < f64::EPSILON);
        assert!((globe.camera.far - 1000.0).abs() < f64::EPSILON);
        assert!((globe.camera.distance - 5.0).abs() < f64::EPSILON);
        assert!((globe.sphere.radius - 2.0).abs() < f64::EPSILON);
        assert_eq!(globe.sphere.width_segments, 64);
        assert_eq!(globe.sphere.height_segments, 64);
        assert!((globe.sphere.opacity - 0.8).abs() < f64::EPSILON);
        assert_eq!(globe.wireframe.color, "#10b981");
        assert!((globe.wireframe.opacity - 0.2).abs() < f64::EPSILON);
        assert_eq!(globe.points.count, 1000);
        assert!((globe.points.radius - 2.1).abs() < f64::EPSILON);
        assert!((globe.points.size - 0.02).abs() < f64::EPSILON);
        assert!((globe.points.opacity - 0.8).abs() < f64::EPSILON);
        assert_eq!(globe.points.seed, None);
    }

    #[test]
    fn default_animation_steps() {
        let anim = AnimationConfig::default();
        assert!((anim.time_step - 0.01).abs() < f64::EPSILON);
        assert!((anim.sphere_spin - 0.002).abs() < f64::EPSILON);
        assert!((anim.points_spin - 0.001).abs() < f64::EPSILON);
    }

    #[test]
    fn default_counters_from_pitch() {
        let counters = CountersConfig::default();
        assert!(counters.enabled);
        let labels: Vec<&str> = counters.entries.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["TAM", "SAM", "SOM", "Seed"]);
        assert_eq!(counters.entries[2].decimals, 1);
        assert_eq!(counters.entries[3].prefix, "$");
        assert_eq!(counters.entries[3].suffix, "M");
    }

    #[test]
    fn default_window() {
        let window = WindowConfig::default();
        assert_eq!(window.title, "Klaimeer");
        assert_eq!(window.width, 1280);
        assert_eq!(window.height, 800);
        assert!(window.transparent);
    }

    #[test]
    fn logging_directive() {
        let mut logging = LoggingConfig::default();
        assert_eq!(logging.directive(), "klaimeer=info");
        logging.level = LogLevel::Debug;
        assert_eq!(logging.directive(), "klaimeer=debug");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: KlaimeerConfig = toml::from_str(
            r##"
[globe.points]
count = 250
seed = 7

[logging]
level = "warn"
"##,
        )
        .unwrap();
        assert_eq!(config.globe.points.count, 250);
        assert_eq!(config.globe.points.seed, Some(7));
        assert!((config.globe.points.radius - 2.1).abs() < f64::EPSILON);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.globe.sphere.width_segments, 64);
        assert_eq!(config.counters.entries.len(), 4);
    }

    #[test]
    fn counter_entries_override_replaces_list() {
        let config: KlaimeerConfig = toml::from_str(
            r##"
[[counters.entries]]
label = "ARR"
end = 12.5
decimals = 1
suffix = "M"
"##,
        )
        .unwrap();
        assert_eq!(config.counters.entries.len(), 1);
        let entry = &config.counters.entries[0];
        assert_eq!(entry.label, "ARR");
        assert!((entry.duration_secs - 2.0).abs() < f64::EPSILON);
        assert_eq!(entry.prefix, "");
    }
}
