//! Animated counter configuration types.

use serde::{Deserialize, Serialize};

/// One animated figure: counts from zero to `end` over `duration_secs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CounterConfig {
    pub label: String,
    pub end: f64,
    /// Animation length in seconds (valid range: 0.0-60.0).
    pub duration_secs: f64,
    /// Digits after the decimal point (valid range: 0-20).
    pub decimals: u32,
    pub prefix: String,
    pub suffix: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            end: 0.0,
            duration_secs: 2.0,
            decimals: 0,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl CounterConfig {
    fn market(label: &str, end: f64, decimals: u32) -> Self {
        Self {
            label: label.into(),
            end,
            decimals,
            suffix: "B".into(),
            ..Self::default()
        }
    }
}

/// Counters shown in the window title.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CountersConfig {
    pub enabled: bool,
    pub entries: Vec<CounterConfig>,
}

impl Default for CountersConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            entries: vec![
                CounterConfig::market("TAM", 150.0, 0),
                CounterConfig::market("SAM", 15.0, 0),
                CounterConfig::market("SOM", 1.2, 1),
                CounterConfig {
                    label: "Seed".into(),
                    end: 8.0,
                    prefix: "$".into(),
                    suffix: "M".into(),
                    ..CounterConfig::default()
                },
            ],
        }
    }
}
