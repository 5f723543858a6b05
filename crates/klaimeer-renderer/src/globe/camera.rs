//! Perspective camera looking at the globe.

use klaimeer_config::schema::CameraConfig;

use super::matrix::{self, Mat4};

const UP: [f32; 3] = [0.0, 1.0, 0.0];

/// Fixed camera on +Z looking at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            fov_degrees,
            aspect,
            near,
            far,
            position: [0.0, 0.0, 0.0],
            projection: matrix::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self::new(
            config.fov_degrees as f32,
            aspect,
            config.near as f32,
            config.far as f32,
        );
        camera.position = [0.0, 0.0, config.distance as f32];
        camera
    }

    /// Change the aspect ratio. Returns `false` when it is unchanged.
    pub fn set_aspect(&mut self, aspect: f32) -> bool {
        if !aspect.is_finite() || aspect <= 0.0 || aspect == self.aspect {
            return false;
        }
        self.aspect = aspect;
        self.update_projection();
        true
    }

    /// Recompute the projection after changing lens parameters.
    pub fn update_projection(&mut self) {
        self.projection = matrix::perspective(
            self.fov_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    pub fn view(&self) -> Mat4 {
        matrix::look_at(self.position, [0.0; 3], UP)
    }
}
