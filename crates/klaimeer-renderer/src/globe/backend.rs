//! Drawing surface and backend seams, and the wgpu backend.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use winit::window::Window;

use crate::gpu::{GpuContext, PhysicalSize, RendererError, SurfaceOptions};

use super::assets::GlobeAssets;
use super::pipeline::{GlobeBuffers, GlobeMaterials, RenderTargets};
use super::resources::{GlobeResource, ResourceLedger};
use super::types::FrameUniforms;

/// A host surface the globe can be mounted into.
pub trait DrawableSurface {
    /// Drawable area in physical pixels.
    fn inner_size(&self) -> PhysicalSize;
    /// Device pixels per logical pixel.
    fn scale_factor(&self) -> f64;
}

impl DrawableSurface for Window {
    fn inner_size(&self) -> PhysicalSize {
        let size = Window::inner_size(self);
        PhysicalSize::new(size.width, size.height)
    }

    fn scale_factor(&self) -> f64 {
        Window::scale_factor(self)
    }
}

impl<T: DrawableSurface + ?Sized> DrawableSurface for Arc<T> {
    fn inner_size(&self) -> PhysicalSize {
        (**self).inner_size()
    }

    fn scale_factor(&self) -> f64 {
        (**self).scale_factor()
    }
}

/// Whatever turns frame uniforms into pixels.
pub trait GlobeBackend {
    /// Current output size in physical pixels.
    fn output_size(&self) -> PhysicalSize;

    /// Resize the output. Callers only pass non-empty sizes.
    fn resize(&mut self, size: PhysicalSize, scale_factor: f64);

    /// Draw one frame. Returns `false` when the frame was skipped without
    /// reaching the screen (surface lost, outdated or timed out).
    fn render(&mut self, uniforms: &FrameUniforms) -> Result<bool, RendererError>;

    /// Release every resource. Must be idempotent.
    fn release(&mut self);

    fn ledger(&self) -> &ResourceLedger;
}

/// Logs the first presented frame once per process.
static FIRST_FRAME_LOGGED: AtomicBool = AtomicBool::new(false);

/// Renders the globe into a winit window with wgpu.
pub struct WgpuGlobeBackend {
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    buffers: Option<GlobeBuffers>,
    materials: Option<GlobeMaterials>,
    targets: Option<RenderTargets>,
    clear_color: wgpu::Color,
    size: PhysicalSize,
    ledger: ResourceLedger,
}

impl WgpuGlobeBackend {
    /// Create the GPU context, upload geometry and build the three pipelines.
    pub async fn new(
        window: Arc<Window>,
        assets: &GlobeAssets,
        options: SurfaceOptions,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(Arc::clone(&window), options).await?;

        let buffers = GlobeBuffers::new(&gpu.device, assets);
        let materials = GlobeMaterials::new(&gpu.device, gpu.format(), gpu.sample_count);
        let targets = RenderTargets::new(
            &gpu.device,
            gpu.format(),
            gpu.size.width,
            gpu.size.height,
            gpu.sample_count,
        );

        let clear_color = if gpu.is_transparent() {
            wgpu::Color::TRANSPARENT
        } else {
            wgpu::Color::BLACK
        };

        tracing::info!(
            width = gpu.size.width,
            height = gpu.size.height,
            scale_factor = gpu.scale_factor,
            msaa = gpu.sample_count,
            "Globe backend ready"
        );

        Ok(Self {
            window: Some(window),
            size: gpu.size,
            gpu: Some(gpu),
            buffers: Some(buffers),
            materials: Some(materials),
            targets: Some(targets),
            clear_color,
            ledger: ResourceLedger::all_live(),
        })
    }

    pub fn window(&self) -> Option<&Arc<Window>> {
        self.window.as_ref()
    }
}

impl GlobeBackend for WgpuGlobeBackend {
    fn output_size(&self) -> PhysicalSize {
        self.size
    }

    fn resize(&mut self, size: PhysicalSize, scale_factor: f64) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        gpu.resize(size.width, size.height);
        gpu.scale_factor = scale_factor;
        self.size = gpu.size;

        if let Some(old) = self.targets.take() {
            old.destroy();
        }
        self.targets = Some(RenderTargets::new(
            &gpu.device,
            gpu.format(),
            gpu.size.width,
            gpu.size.height,
            gpu.sample_count,
        ));
    }

    fn render(&mut self, uniforms: &FrameUniforms) -> Result<bool, RendererError> {
        let (Some(gpu), Some(buffers), Some(materials), Some(targets)) = (
            self.gpu.as_ref(),
            self.buffers.as_ref(),
            self.materials.as_ref(),
            self.targets.as_ref(),
        ) else {
            return Ok(false);
        };

        let frame = match gpu.current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("Surface lost or outdated, reconfiguring");
                gpu.reconfigure();
                return Ok(false);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::debug!("Surface timeout, skipping frame");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        materials.upload(&gpu.queue, uniforms);

        let frame_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let (view, resolve_target) = targets.color_attachment(&frame_view);

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("globe frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("globe pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: if resolve_target.is_some() {
                            wgpu::StoreOp::Discard
                        } else {
                            wgpu::StoreOp::Store
                        },
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            materials.draw(&mut pass, buffers);
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        if let Some(window) = &self.window {
            window.pre_present_notify();
        }
        frame.present();

        if !FIRST_FRAME_LOGGED.swap(true, Ordering::Relaxed) {
            tracing::info!(
                width = gpu.size.width,
                height = gpu.size.height,
                "First globe frame presented"
            );
        }

        Ok(true)
    }

    fn release(&mut self) {
        if let Some(buffers) = self.buffers.take() {
            buffers.destroy();
        }
        for resource in GlobeResource::GEOMETRY {
            self.ledger.dispose(resource);
        }

        if let Some(materials) = self.materials.take() {
            materials.destroy();
        }
        for resource in GlobeResource::MATERIALS {
            self.ledger.dispose(resource);
        }

        if let Some(targets) = self.targets.take() {
            targets.destroy();
        }
        self.gpu = None;
        self.window = None;
        if self.ledger.dispose(GlobeResource::Renderer) {
            tracing::info!("Globe GPU resources released");
        }
    }

    fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }
}
