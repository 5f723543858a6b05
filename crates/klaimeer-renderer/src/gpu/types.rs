use klaimeer_config::schema::GlobeRendererConfig;

pub use klaimeer_common::PhysicalSize;

/// Errors that can occur during GPU rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("surface error: {0}")]
    SurfaceError(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),
}

impl From<wgpu::SurfaceError> for RendererError {
    fn from(e: wgpu::SurfaceError) -> Self {
        RendererError::SurfaceError(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

impl From<wgpu::CreateSurfaceError> for RendererError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        RendererError::SurfaceError(e.to_string())
    }
}

/// How the output surface is configured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceOptions {
    /// MSAA sample count: 4 with anti-aliasing, 1 without.
    pub sample_count: u32,
    /// Composite with a transparent background where the platform allows.
    pub transparent: bool,
    pub present_mode: wgpu::PresentMode,
}

impl SurfaceOptions {
    pub fn from_config(config: &GlobeRendererConfig) -> Self {
        Self {
            sample_count: if config.antialias { 4 } else { 1 },
            transparent: config.transparent,
            present_mode: if config.vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
        }
    }
}
