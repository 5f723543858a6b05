//! Per-frame work: drive the globe and the title counters.

use std::time::Instant;

use klaimeer_renderer::FrameOutcome;

use super::core::KlaimeerApp;

impl KlaimeerApp {
    /// Handle one redraw: render a globe frame, start the counters once
    /// the first frame is up, and keep redrawing while anything animates.
    pub(super) fn render_frame(&mut self) {
        let now = Instant::now();

        let outcome = self.globe.as_mut().map(|globe| globe.frame());
        if outcome == Some(FrameOutcome::Stopped) {
            return;
        }

        if counters_may_start(outcome) {
            self.start_counters(now);
        }
        self.update_window_title(now);

        let globe_running = matches!(outcome, Some(FrameOutcome::Rendered | FrameOutcome::Skipped));
        if globe_running || !self.counters_complete(now) {
            self.request_redraw();
        }
    }

    /// Trigger every counter that has not started yet.
    pub(super) fn start_counters(&mut self, now: Instant) {
        let started = self
            .counters
            .iter_mut()
            .map(|counter| counter.trigger(now))
            .filter(|&fresh| fresh)
            .count();
        if started > 0 {
            tracing::debug!(started, "Counters started");
        }
    }

    pub(super) fn counters_complete(&self, now: Instant) -> bool {
        self.counters.iter().all(|c| c.is_complete_at(now))
    }
}

/// Counters start with the first presented globe frame, or right away
/// when there is no globe.
fn counters_may_start(outcome: Option<FrameOutcome>) -> bool {
    matches!(outcome, None | Some(FrameOutcome::Rendered))
}
