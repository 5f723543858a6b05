//! Count-up animation for headline figures.
//!
//! A counter sits at zero until triggered, then climbs linearly to its end
//! value over a fixed duration. Triggering is one-shot.

use std::time::{Duration, Instant};

use klaimeer_config::schema::CounterConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct NumberCounter {
    label: String,
    end: f64,
    duration: Duration,
    decimals: usize,
    prefix: String,
    suffix: String,
    started_at: Option<Instant>,
}

impl NumberCounter {
    pub fn new(end: f64, duration: Duration) -> Self {
        Self {
            label: String::new(),
            end,
            duration,
            decimals: 0,
            prefix: String::new(),
            suffix: String::new(),
            started_at: None,
        }
    }

    pub fn from_config(config: &CounterConfig) -> Self {
        let duration = Duration::try_from_secs_f64(config.duration_secs).unwrap_or(Duration::ZERO);
        Self::new(config.end, duration)
            .with_label(&config.label)
            .with_decimals(config.decimals as usize)
            .with_affixes(&config.prefix, &config.suffix)
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_affixes(mut self, prefix: &str, suffix: &str) -> Self {
        self.prefix = prefix.to_string();
        self.suffix = suffix.to_string();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_triggered(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start counting at `now`. Returns `false` if already started.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    /// Fraction of the animation elapsed at `now`, in `0.0..=1.0`.
    pub fn progress_at(&self, now: Instant) -> f64 {
        let Some(start) = self.started_at else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn value_at(&self, now: Instant) -> f64 {
        self.progress_at(now) * self.end
    }

    pub fn is_complete_at(&self, now: Instant) -> bool {
        self.progress_at(now) >= 1.0
    }

    /// `prefix + value + suffix`, with the value fixed to `decimals` places.
    pub fn display_at(&self, now: Instant) -> String {
        self.format_value(self.value_at(now))
    }

    pub fn format_value(&self, value: f64) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            to_fixed(value, self.decimals),
            self.suffix
        )
    }
}

/// Fixed-point formatting that rounds halves away from zero.
///
/// `format!("{:.N}")` rounds halves to even on the exact binary value, so
/// 2.5 would print as "2".
fn to_fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals.min(i32::MAX as usize) as i32);
    let rounded = (value * scale).round() / scale;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.decimals$}")
}
