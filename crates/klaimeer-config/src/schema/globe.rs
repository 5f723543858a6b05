//! Globe renderer configuration types.

use serde::{Deserialize, Serialize};

/// Perspective camera placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (valid range: 1.0-179.0).
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    /// Distance from the origin along +Z.
    pub distance: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: 5.0,
        }
    }
}

/// Gradient-shaded sphere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub radius: f64,
    /// Segments around the vertical axis (valid range: 3-512).
    pub width_segments: u32,
    /// Segments from pole to pole (valid range: 2-512).
    pub height_segments: u32,
    pub opacity: f64,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 2.0,
            width_segments: 64,
            height_segments: 64,
            opacity: 0.8,
        }
    }
}

/// Edge overlay drawn over the sphere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WireframeConfig {
    pub color: String,
    pub opacity: f64,
}

impl Default for WireframeConfig {
    fn default() -> Self {
        Self {
            color: "#10b981".into(),
            opacity: 0.2,
        }
    }
}

/// Point cloud scattered just above the sphere surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsConfig {
    /// Number of points (valid range: 0-100000).
    pub count: u32,
    pub radius: f64,
    /// Point edge length in world units.
    pub size: f64,
    pub color: String,
    pub opacity: f64,
    /// Fixed sampling seed; random per launch when unset.
    pub seed: Option<u64>,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            radius: 2.1,
            size: 0.02,
            color: "#10b981".into(),
            opacity: 0.8,
            seed: None,
        }
    }
}

/// Per-frame increments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Added to the shader `time` uniform every frame.
    pub time_step: f64,
    /// Sphere and wireframe rotation per frame, radians.
    pub sphere_spin: f64,
    /// Point cloud rotation per frame, radians.
    pub points_spin: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            time_step: 0.01,
            sphere_spin: 0.002,
            points_spin: 0.001,
        }
    }
}

/// Output surface options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeRendererConfig {
    /// 4x multisampling.
    pub antialias: bool,
    /// Clear to a transparent background instead of opaque black.
    pub transparent: bool,
    pub vsync: bool,
}

impl Default for GlobeRendererConfig {
    fn default() -> Self {
        Self {
            antialias: true,
            transparent: true,
            vsync: true,
        }
    }
}

/// Globe settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub enabled: bool,
    pub camera: CameraConfig,
    pub sphere: SphereConfig,
    pub wireframe: WireframeConfig,
    pub points: PointsConfig,
    pub animation: AnimationConfig,
    pub renderer: GlobeRendererConfig,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            camera: CameraConfig::default(),
            sphere: SphereConfig::default(),
            wireframe: WireframeConfig::default(),
            points: PointsConfig::default(),
            animation: AnimationConfig::default(),
            renderer: GlobeRendererConfig::default(),
        }
    }
}
