//! Window creation and globe mounting.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use klaimeer_common::KlaimeerError;
use klaimeer_renderer::{GlobeRenderer, SurfaceOptions, WgpuGlobeBackend};

use super::core::KlaimeerApp;

impl KlaimeerApp {
    /// Create the window and mount the globe into it.
    ///
    /// Failing to create the window is fatal. A globe that fails to mount
    /// is logged and the window stays up without it.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> klaimeer_common::Result<()> {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_transparent(window_config.transparent)
            .with_decorations(window_config.decorations)
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| KlaimeerError::Window(format!("failed to create window: {e}")))?;

        if let Err(e) = self.mount_globe(Arc::clone(&window)) {
            tracing::error!("{e}; continuing without the globe");
        }
        self.window = Some(window);
        tracing::info!(globe = self.globe.is_some(), "Window created");
        Ok(())
    }

    /// Mount the globe. A disabled globe has no mount point and leaves
    /// `self.globe` empty.
    fn mount_globe(&mut self, window: Arc<Window>) -> klaimeer_common::Result<()> {
        let mount_point = self.config.globe.enabled.then_some(window);
        let options = SurfaceOptions::from_config(&self.config.globe.renderer);

        self.globe = GlobeRenderer::mount(
            mount_point,
            &self.surface_events,
            &self.config.globe,
            |window, assets| pollster::block_on(WgpuGlobeBackend::new(window, assets, options)),
        )
        .map_err(|e| KlaimeerError::Renderer(format!("failed to mount globe: {e}")))?;
        Ok(())
    }
}
