use std::sync::Arc;
use winit::window::Window;

use super::types::{PhysicalSize, RendererError, SurfaceOptions};

/// Device, queue and configured surface for one window.
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize,
    pub scale_factor: f64,
    /// Effective MSAA sample count after checking adapter support.
    pub sample_count: u32,
}

impl GpuContext {
    /// Initialize wgpu: create instance, surface, adapter, device, and configure
    /// the surface for rendering.
    pub async fn new(window: Arc<Window>, options: SurfaceOptions) -> Result<Self, RendererError> {
        let inner_size = window.inner_size();
        let scale_factor = window.scale_factor();

        let width = inner_size.width.max(1);
        let height = inner_size.height.max(1);

        // 1. Create Instance with default backends
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        // 2. Create surface from window
        let surface = instance.create_surface(window)?;

        // 3. Request adapter (prefer high-performance GPU, fallback to software)
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await;

        let adapter = match adapter {
            Some(a) => a,
            None => {
                tracing::warn!("No hardware GPU adapter found, trying software fallback");
                instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        force_fallback_adapter: true,
                        compatible_surface: Some(&surface),
                    })
                    .await
                    .ok_or(RendererError::AdapterNotFound)?
            }
        };

        let adapter_info = adapter.get_info();
        tracing::info!(
            "GPU adapter: {} ({:?}, {:?})",
            adapter_info.name,
            adapter_info.device_type,
            adapter_info.backend,
        );

        // 4. Request device with default limits
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("klaimeer-renderer device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await?;

        // 5. Shader colors are authored as display values, so prefer a
        //    non-sRGB format and skip the implicit linear -> sRGB encode.
        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .unwrap_or(wgpu::TextureFormat::Bgra8Unorm);
        tracing::info!(
            "Surface format: {format:?} (available: {:?})",
            surface_caps.formats
        );

        let alpha_mode = pick_alpha_mode(&surface_caps.alpha_modes, options.transparent);
        if options.transparent && alpha_mode == wgpu::CompositeAlphaMode::Opaque {
            tracing::warn!("Surface cannot composite with alpha; background will be opaque");
        }

        let sample_count = if options.sample_count > 1
            && adapter
                .get_texture_format_features(format)
                .flags
                .sample_count_supported(options.sample_count)
        {
            options.sample_count
        } else {
            if options.sample_count > 1 {
                tracing::warn!(
                    requested = options.sample_count,
                    "MSAA not supported for {format:?}, rendering without anti-aliasing"
                );
            }
            1
        };

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: options.present_mode,
            desired_maximum_frame_latency: 2,
            alpha_mode,
            view_formats: vec![],
        };
        surface.configure(&device, &surface_config);

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            size: PhysicalSize { width, height },
            scale_factor,
            sample_count,
        })
    }

    /// Reconfigure the surface after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);

        self.size = PhysicalSize { width, height };
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Reapply the current configuration (after `SurfaceError::Lost`/`Outdated`).
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Get the next frame's surface texture.
    pub fn current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// Return the surface texture format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.surface_config.format
    }

    /// Whether frames are composited with straight alpha by the platform.
    pub fn is_transparent(&self) -> bool {
        self.surface_config.alpha_mode != wgpu::CompositeAlphaMode::Opaque
    }
}

/// Choose a composite alpha mode. Blending leaves premultiplied color in the
/// target, so `PreMultiplied` is preferred when transparency is requested.
pub(crate) fn pick_alpha_mode(
    available: &[wgpu::CompositeAlphaMode],
    transparent: bool,
) -> wgpu::CompositeAlphaMode {
    use wgpu::CompositeAlphaMode as Mode;

    if !transparent {
        return if available.contains(&Mode::Opaque) {
            Mode::Opaque
        } else {
            Mode::Auto
        };
    }

    [Mode::PreMultiplied, Mode::PostMultiplied, Mode::Inherit]
        .into_iter()
        .find(|m| available.contains(m))
        .unwrap_or_else(|| available.first().copied().unwrap_or(Mode::Auto))
}
