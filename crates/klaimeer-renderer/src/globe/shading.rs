//! CPU reference of the gradient law in `shaders/globe.wgsl`.
//!
//! Kept in lockstep with the fragment shader so the shading can be checked
//! without a GPU.

use std::f32::consts::PI;

pub const BLUE: [f32; 3] = [0.14, 0.39, 0.92];
pub const PURPLE: [f32; 3] = [0.55, 0.36, 0.96];
pub const PINK: [f32; 3] = [0.59, 0.13, 0.58];

/// Strength of the rim-to-center glow.
pub const GLOW_STRENGTH: f32 = 0.3;

/// How fast the vertical gradient drifts per unit of `time`.
pub const GRADIENT_SPEED: f32 = 0.2;

/// Smallest `time` span after which the gradient repeats (`2π / 0.2`).
pub const GRADIENT_PERIOD: f64 = 10.0 * std::f64::consts::PI;

fn lerp(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// RGB for texture coordinate `uv`, local-space depth `z`, and `time`.
///
/// Values above 1.0 are possible near the center; the output target clamps.
pub fn shade(uv: [f32; 2], z: f32, time: f32, glow_radius: f32) -> [f32; 3] {
    let [u, v] = uv;
    let mix1 = (v * PI + time * GRADIENT_SPEED).sin() * 0.5 + 0.5;
    let base = lerp(lerp(BLUE, PURPLE, mix1), PINK, u);

    let g = 1.0 - z.abs() / glow_radius;
    let glow = g * g * GLOW_STRENGTH;
    base.map(|c| c + glow)
}
