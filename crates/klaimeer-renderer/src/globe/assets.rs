//! CPU-side geometry for the three layers, built once at mount.

use klaimeer_config::schema::GlobeConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::mesh::{generate_sphere_mesh, wireframe_vertices, SphereMesh};
use super::points::sample_sphere_points;
use super::types::{LineVertex, PointInstance};

/// Geometry handed to the backend for upload.
#[derive(Debug, Clone)]
pub struct GlobeAssets {
    pub sphere: SphereMesh,
    pub wireframe: Vec<LineVertex>,
    pub points: Vec<PointInstance>,
}

impl GlobeAssets {
    /// Build geometry, seeding the point cloud from `points.seed` when set.
    pub fn from_config(config: &GlobeConfig) -> Self {
        let mut rng = match config.points.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, &mut rng)
    }

    pub fn with_rng<R: Rng + ?Sized>(config: &GlobeConfig, rng: &mut R) -> Self {
        let sphere = generate_sphere_mesh(
            config.sphere.radius as f32,
            config.sphere.width_segments,
            config.sphere.height_segments,
        );
        let wireframe = wireframe_vertices(&sphere);
        let points = sample_sphere_points(rng, config.points.count, config.points.radius as f32);

        tracing::debug!(
            vertices = sphere.vertices.len(),
            triangles = sphere.triangle_count(),
            wire_segments = wireframe.len() / 2,
            points = points.len(),
            "Globe geometry built"
        );

        Self {
            sphere,
            wireframe,
            points,
        }
    }
}
