//! Graceful shutdown: tear the globe down before the window goes away.

use super::core::KlaimeerApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl KlaimeerApp {
    /// Stop the globe and release its GPU resources. Safe to call more than
    /// once; later calls find nothing left to release.
    pub(super) fn shutdown(&mut self) {
        if self.should_exit {
            return;
        }
        tracing::info!("Initiating graceful shutdown");

        if let Some(mut globe) = self.globe.take() {
            globe.teardown();
        }
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
