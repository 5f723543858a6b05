//! `ApplicationHandler` implementation for the winit event loop.

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use klaimeer_common::{PhysicalSize, SurfaceEvent};

use super::core::KlaimeerApp;

impl ApplicationHandler for KlaimeerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.initialize_window(event_loop) {
            self.startup_error = Some(e);
            event_loop.exit();
            return;
        }

        self.update_window_title(Instant::now());
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                let scale_factor = self
                    .window
                    .as_ref()
                    .map_or(1.0, |window| window.scale_factor());
                self.publish_surface_event(SurfaceEvent::Resized {
                    size: PhysicalSize::new(size.width, size.height),
                    scale_factor,
                });
                self.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.publish_surface_event(SurfaceEvent::ScaleFactorChanged { scale_factor });
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

impl KlaimeerApp {
    /// Publish a surface notification and let the globe react right away.
    pub(super) fn publish_surface_event(&mut self, event: SurfaceEvent) {
        let receivers = self.surface_events.publish(event);
        tracing::trace!(?event, receivers, "Surface event published");
        if let Some(ref mut globe) = self.globe {
            globe.process_events();
        }
    }
}
