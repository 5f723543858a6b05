//! Sphere mesh generation.
//!
//! Generates an indexed UV sphere with position and texture coordinates,
//! plus the unique-edge line list used by the wireframe overlay.

use std::f32::consts::PI;

use super::types::{GlobeVertex, LineVertex};

/// Indexed triangle mesh.
#[derive(Debug, Clone, Default)]
pub struct SphereMesh {
    pub vertices: Vec<GlobeVertex>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Generate a UV sphere mesh.
///
/// `width_segments` = segments around Y (columns), `height_segments` =
/// bands from pole to pole (rows). The grid has one extra column so the
/// seam carries both `u = 0` and `u = 1`. Degenerate pole triangles are
/// skipped, leaving `width_segments * (2 * height_segments - 2)` triangles.
/// Pole rows shift `u` by half a column so each pole vertex sits at the
/// centre of the one triangle that uses it.
///
/// North pole is `(0, radius, 0)`.
pub fn generate_sphere_mesh(radius: f32, width_segments: u32, height_segments: u32) -> SphereMesh {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let row = w + 1;

    let mut vertices = Vec::with_capacity((row * (h + 1)) as usize);
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        let u_offset = if iy == 0 {
            0.5 / w as f32
        } else if iy == h {
            -0.5 / w as f32
        } else {
            0.0
        };
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            vertices.push(GlobeVertex {
                position: sphere_point(radius, u, v),
                uv: [u + u_offset, 1.0 - v],
            });
        }
    }

    let grid = |iy: u32, ix: u32| iy * row + ix;
    let mut indices = Vec::with_capacity((w * (2 * h - 2) * 3) as usize);
    for iy in 0..h {
        for ix in 0..w {
            let a = grid(iy, ix + 1);
            let b = grid(iy, ix);
            let c = grid(iy + 1, ix);
            let d = grid(iy + 1, ix + 1);

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    SphereMesh { vertices, indices }
}

/// Point on the sphere for normalized grid coordinates.
fn sphere_point(radius: f32, u: f32, v: f32) -> [f32; 3] {
    let phi = u * 2.0 * PI;
    let theta = v * PI;
    [
        -radius * phi.cos() * theta.sin(),
        radius * theta.cos(),
        radius * phi.sin() * theta.sin(),
    ]
}

/// Unique undirected edges of an indexed triangle list, smaller index first.
pub fn unique_edges(indices: &[u32]) -> Vec<[u32; 2]> {
    let mut edges: Vec<[u32; 2]> = indices
        .chunks_exact(3)
        .flat_map(|tri| [[tri[0], tri[1]], [tri[1], tri[2]], [tri[2], tri[0]]])
        .map(|[a, b]| if a < b { [a, b] } else { [b, a] })
        .collect();
    edges.sort_unstable();
    edges.dedup();
    edges
}

/// Line-list vertices for the wireframe overlay: two per unique edge.
pub fn wireframe_vertices(mesh: &SphereMesh) -> Vec<LineVertex> {
    unique_edges(&mesh.indices)
        .into_iter()
        .flat_map(|edge| edge.map(|i| LineVertex {
            position: mesh.vertices[i as usize].position,
        }))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
