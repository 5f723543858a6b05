//! Stop signal for the per-frame loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared active flag checked at the top of every frame.
///
/// Clones observe the same flag, so a host can hold one to learn when the
/// renderer has stopped.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    active: Arc<AtomicBool>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Stop the loop. Returns `true` if it was running.
    pub fn stop(&self) -> bool {
        self.active.swap(false, Ordering::AcqRel)
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A frame was presented; schedule the next one.
    Rendered,
    /// The animation advanced but nothing reached the screen; schedule the
    /// next one.
    Skipped,
    /// The loop is stopped; schedule nothing.
    Stopped,
}
