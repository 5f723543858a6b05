//! Scene state: camera, animation and material parameters for the three
//! layers. Pure data; the backend turns it into draw calls.

use klaimeer_common::{Color, PhysicalSize};
use klaimeer_config::schema::GlobeConfig;

use super::animation::{AnimationState, AnimationSteps};
use super::camera::PerspectiveCamera;
use super::matrix;
use super::types::{FrameUniforms, LineUniforms, PointUniforms, SphereUniforms};

const FALLBACK_TINT: Color = Color {
    r: 0x10,
    g: 0xb9,
    b: 0x81,
    a: 255,
};

/// Material parameters that do not change per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialParams {
    pub sphere_alpha: f32,
    pub glow_radius: f32,
    pub wireframe_color: [f32; 4],
    pub point_color: [f32; 4],
    pub point_size: f32,
}

impl MaterialParams {
    pub fn from_config(config: &GlobeConfig) -> Self {
        Self {
            sphere_alpha: config.sphere.opacity as f32,
            glow_radius: config.sphere.radius as f32,
            wireframe_color: tint(&config.wireframe.color, config.wireframe.opacity),
            point_color: tint(&config.points.color, config.points.opacity),
            point_size: config.points.size as f32,
        }
    }
}

fn tint(hex: &str, opacity: f64) -> [f32; 4] {
    let color = Color::from_hex(hex).unwrap_or_else(|| {
        tracing::warn!(color = hex, "invalid layer color, using default tint");
        FALLBACK_TINT
    });
    color.with_opacity(opacity as f32)
}

/// Everything needed to produce one frame's uniforms.
#[derive(Debug, Clone)]
pub struct GlobeScene {
    pub camera: PerspectiveCamera,
    pub animation: AnimationState,
    pub materials: MaterialParams,
    viewport: PhysicalSize,
}

impl GlobeScene {
    pub fn new(config: &GlobeConfig, viewport: PhysicalSize) -> Self {
        let aspect = viewport.aspect_ratio().unwrap_or(1.0);
        Self {
            camera: PerspectiveCamera::from_config(&config.camera, aspect),
            animation: AnimationState::new(AnimationSteps::from_config(&config.animation)),
            materials: MaterialParams::from_config(config),
            viewport,
        }
    }

    pub fn viewport(&self) -> PhysicalSize {
        self.viewport
    }

    /// Track a new drawable size. Returns `false` for unchanged or empty sizes.
    pub fn set_viewport(&mut self, size: PhysicalSize) -> bool {
        if size.is_empty() || size == self.viewport {
            return false;
        }
        self.viewport = size;
        if let Some(aspect) = size.aspect_ratio() {
            self.camera.set_aspect(aspect);
        }
        true
    }

    pub fn advance(&mut self) {
        self.animation.advance();
    }

    /// Uniforms for the current state.
    pub fn frame_uniforms(&self) -> FrameUniforms {
        let projection = *self.camera.projection();
        let view = self.camera.view();
        let view_projection = matrix::mul(&projection, &view);

        let sphere_model = matrix::rotate_y(self.animation.sphere_angle as f32);
        let wireframe_model = matrix::rotate_y(self.animation.wireframe_angle as f32);
        let points_model = matrix::rotate_y(self.animation.points_angle as f32);

        FrameUniforms {
            sphere: SphereUniforms {
                mvp: matrix::mul(&view_projection, &sphere_model),
                time: self.animation.time_uniform(),
                alpha: self.materials.sphere_alpha,
                glow_radius: self.materials.glow_radius,
                _pad: 0.0,
            },
            wireframe: LineUniforms {
                mvp: matrix::mul(&view_projection, &wireframe_model),
                color: self.materials.wireframe_color,
            },
            points: PointUniforms {
                model_view: matrix::mul(&view, &points_model),
                projection,
                color: self.materials.point_color,
                size: self.materials.point_size,
                _pad: [0.0; 3],
            },
        }
    }
}
