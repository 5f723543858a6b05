//! KlaimeerApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use klaimeer_common::{KlaimeerError, SurfaceEventBus};
use klaimeer_config::schema::{CountersConfig, KlaimeerConfig};
use klaimeer_renderer::{GlobeRenderer, NumberCounter, WgpuGlobeBackend};

/// Top-level application state.
pub struct KlaimeerApp {
    pub(super) config: KlaimeerConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) globe: Option<GlobeRenderer<WgpuGlobeBackend>>,

    // Resize / density notifications for the globe
    pub(super) surface_events: SurfaceEventBus,

    // Title counters
    pub(super) counters: Vec<NumberCounter>,
    pub(super) last_title: String,

    // Whether the app should exit
    pub(super) should_exit: bool,

    // Fatal error raised inside the event loop, reported once it returns
    pub(super) startup_error: Option<KlaimeerError>,
}

impl KlaimeerApp {
    pub fn new(config: KlaimeerConfig) -> Self {
        let counters = build_counters(&config.counters);
        Self {
            config,
            window: None,
            globe: None,
            surface_events: SurfaceEventBus::default(),
            counters,
            last_title: String::new(),
            should_exit: false,
            startup_error: None,
        }
    }

    /// Error that stopped the app from starting, if any.
    pub fn take_startup_error(&mut self) -> Option<KlaimeerError> {
        self.startup_error.take()
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

fn build_counters(config: &CountersConfig) -> Vec<NumberCounter> {
    if !config.enabled {
        return Vec::new();
    }
    config.entries.iter().map(NumberCounter::from_config).collect()
}
