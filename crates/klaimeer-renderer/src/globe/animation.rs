//! Per-frame animation state.

use std::f64::consts::TAU;

use klaimeer_config::schema::AnimationConfig;

use super::shading::GRADIENT_PERIOD;

/// Increments applied on every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSteps {
    pub time: f64,
    pub sphere_spin: f64,
    pub wireframe_spin: f64,
    pub points_spin: f64,
}

impl AnimationSteps {
    /// The wireframe turns with the sphere it outlines.
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            time: config.time_step,
            sphere_spin: config.sphere_spin,
            wireframe_spin: config.sphere_spin,
            points_spin: config.points_spin,
        }
    }
}

impl Default for AnimationSteps {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

/// Shader time and the three layer angles, advanced once per frame.
///
/// Angles stay in `[0, 2π)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub steps: AnimationSteps,
    pub time: f64,
    pub sphere_angle: f64,
    pub wireframe_angle: f64,
    pub points_angle: f64,
    pub frames: u64,
}

impl AnimationState {
    pub fn new(steps: AnimationSteps) -> Self {
        Self {
            steps,
            time: 0.0,
            sphere_angle: 0.0,
            wireframe_angle: 0.0,
            points_angle: 0.0,
            frames: 0,
        }
    }

    pub fn advance(&mut self) {
        self.time += self.steps.time;
        self.sphere_angle = (self.sphere_angle + self.steps.sphere_spin).rem_euclid(TAU);
        self.wireframe_angle = (self.wireframe_angle + self.steps.wireframe_spin).rem_euclid(TAU);
        self.points_angle = (self.points_angle + self.steps.points_spin).rem_euclid(TAU);
        self.frames += 1;
    }

    /// `time` as uploaded to the shader, folded into one gradient period so
    /// `f32` keeps its precision in long sessions.
    pub fn time_uniform(&self) -> f32 {
        self.time.rem_euclid(GRADIENT_PERIOD) as f32
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(AnimationSteps::default())
    }
}
