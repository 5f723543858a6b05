//! Point cloud sampling.

use std::f32::consts::TAU;

use rand::Rng;

use super::types::PointInstance;

/// Sample `count` points uniformly over a sphere of `radius`.
///
/// Azimuth is uniform in `[0, 2π)`; the polar angle is `acos(2u - 1)` so
/// points do not bunch up at the poles.
pub fn sample_sphere_points<R: Rng + ?Sized>(rng: &mut R, count: u32, radius: f32) -> Vec<PointInstance> {
    (0..count)
        .map(|_| {
            let theta = rng.gen::<f32>() * TAU;
            let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
            PointInstance {
                position: [
                    radius * phi.sin() * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                    radius * phi.cos(),
                ],
            }
        })
        .collect()
}
