//! `GlobeRenderer`: mounts the globe into a surface, drives frames, reacts
//! to surface events and releases everything on teardown.

use klaimeer_common::{PhysicalSize, Subscription, SurfaceEvent, SurfaceEventBus};
use klaimeer_config::schema::GlobeConfig;

use crate::gpu::RendererError;

use super::assets::GlobeAssets;
use super::backend::{DrawableSurface, GlobeBackend};
use super::frame_loop::{FrameLoop, FrameOutcome};
use super::scene::GlobeScene;

pub struct GlobeRenderer<B: GlobeBackend> {
    scene: GlobeScene,
    backend: B,
    frame_loop: FrameLoop,
    subscription: Option<Subscription>,
    scale_factor: f64,
}

impl<B: GlobeBackend> GlobeRenderer<B> {
    /// Mount the globe into `mount_point`.
    ///
    /// Without a mount point nothing is set up and `Ok(None)` is returned.
    /// `build` creates the backend from the surface and the prepared
    /// geometry; its error is returned as-is.
    pub fn mount<S, F>(
        mount_point: Option<S>,
        events: &SurfaceEventBus,
        config: &GlobeConfig,
        build: F,
    ) -> Result<Option<Self>, RendererError>
    where
        S: DrawableSurface,
        F: FnOnce(S, &GlobeAssets) -> Result<B, RendererError>,
    {
        let Some(surface) = mount_point else {
            tracing::debug!("No mount point, globe not mounted");
            return Ok(None);
        };

        let viewport = surface.inner_size();
        let scale_factor = surface.scale_factor();
        let assets = GlobeAssets::from_config(config);
        let scene = GlobeScene::new(config, viewport);

        let backend = build(surface, &assets)?;
        let subscription = events.subscribe();

        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            scale_factor,
            points = assets.points.len(),
            "Globe mounted"
        );

        Ok(Some(Self {
            scene,
            backend,
            frame_loop: FrameLoop::new(),
            subscription: Some(subscription),
            scale_factor,
        }))
    }

    /// Run one tick: react to pending events, advance the animation, and
    /// render. Render failures are logged and do not stop the loop.
    pub fn frame(&mut self) -> FrameOutcome {
        if !self.frame_loop.is_active() {
            return FrameOutcome::Stopped;
        }

        self.process_events();
        self.scene.advance();

        let uniforms = self.scene.frame_uniforms();
        match self.backend.render(&uniforms) {
            Ok(true) => FrameOutcome::Rendered,
            Ok(false) => FrameOutcome::Skipped,
            Err(e) => {
                tracing::warn!(error = %e, "Globe frame failed");
                FrameOutcome::Skipped
            }
        }
    }

    /// Apply every surface event published since the last call.
    pub fn process_events(&mut self) {
        let Some(subscription) = self.subscription.as_mut() else {
            return;
        };
        for event in subscription.drain() {
            match event {
                SurfaceEvent::Resized { size, scale_factor } => {
                    self.handle_resize(size, scale_factor);
                }
                SurfaceEvent::ScaleFactorChanged { scale_factor } => {
                    tracing::debug!(scale_factor, "Surface density changed");
                    self.scale_factor = scale_factor;
                }
            }
        }
    }

    /// Adapt camera and output to a new drawable size.
    ///
    /// Returns `true` if anything changed. Empty sizes are ignored.
    pub fn handle_resize(&mut self, size: PhysicalSize, scale_factor: f64) -> bool {
        if !self.frame_loop.is_active() {
            return false;
        }
        if size.is_empty() {
            tracing::debug!(?size, "Ignoring empty surface size");
            return false;
        }

        let density_changed = scale_factor != self.scale_factor;
        self.scale_factor = scale_factor;

        let camera_changed = self.scene.set_viewport(size);
        let output_changed = size != self.backend.output_size() || density_changed;
        if output_changed {
            self.backend.resize(size, scale_factor);
        }

        let changed = camera_changed || output_changed;
        if changed {
            tracing::debug!(
                width = size.width,
                height = size.height,
                scale_factor,
                aspect = self.scene.camera.aspect,
                "Globe resized"
            );
        }
        changed
    }

    /// Stop the loop, unsubscribe and release every resource. Safe to call
    /// more than once.
    pub fn teardown(&mut self) {
        if !self.frame_loop.stop() {
            return;
        }
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        self.backend.release();
        tracing::info!(frames = self.scene.animation.frames, "Globe torn down");
    }

    pub fn is_active(&self) -> bool {
        self.frame_loop.is_active()
    }

    pub fn scene(&self) -> &GlobeScene {
        &self.scene
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

impl<B: GlobeBackend> Drop for GlobeRenderer<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests;
