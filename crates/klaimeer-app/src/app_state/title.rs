//! Window title management: shows the animated market figures.

use std::time::Instant;

use klaimeer_renderer::NumberCounter;

use super::core::KlaimeerApp;

// =============================================================================
// WINDOW TITLE
// =============================================================================

impl KlaimeerApp {
    /// Update the window title with the counters' current values.
    ///
    /// Format: "Klaimeer — TAM 150B · SAM 15B · …"
    pub(super) fn update_window_title(&mut self, now: Instant) {
        let title = compose_title(&self.config.window.title, &self.counters, now);
        if title == self.last_title {
            return;
        }
        if let Some(ref window) = self.window {
            window.set_title(&title);
        }
        self.last_title = title;
    }
}

/// Base title followed by each counter as `label value`.
pub(super) fn compose_title(base: &str, counters: &[NumberCounter], now: Instant) -> String {
    if counters.is_empty() {
        return base.to_string();
    }

    let figures: Vec<String> = counters
        .iter()
        .map(|counter| {
            let value = counter.display_at(now);
            if counter.label().is_empty() {
                value
            } else {
                format!("{} {value}", counter.label())
            }
        })
        .collect();

    format!("{base} — {}", figures.join(" · "))
}

// =============================================================================
// TESTS
// =============================================================================
