//! The rotating globe: gradient sphere, wireframe overlay and point cloud.
//!
//! Geometry, shading and animation are plain data and testable without a
//! GPU; `WgpuGlobeBackend` turns them into draw calls.

mod animation;
mod assets;
mod backend;
mod camera;
mod frame_loop;
pub mod matrix;
mod mesh;
mod pipeline;
mod points;
mod renderer;
mod resources;
mod scene;
pub mod shading;
mod types;

pub use animation::*;
pub use assets::*;
pub use backend::*;
pub use camera::*;
pub use frame_loop::*;
pub use mesh::*;
pub use pipeline::*;
pub use points::*;
pub use renderer::*;
pub use resources::*;
pub use scene::*;
pub use types::*;
