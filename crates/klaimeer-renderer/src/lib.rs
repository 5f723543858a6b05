pub mod counter;
pub mod globe;
pub mod gpu;

pub use counter::NumberCounter;
pub use globe::{
    DrawableSurface, FrameLoop, FrameOutcome, GlobeAssets, GlobeBackend, GlobeRenderer,
    GlobeScene, WgpuGlobeBackend,
};
pub use gpu::{GpuContext, RendererError, SurfaceOptions};
