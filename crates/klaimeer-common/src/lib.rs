pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, KlaimeerError};
pub use events::{Subscription, SurfaceEvent, SurfaceEventBus};
pub use types::{Color, PhysicalSize};

pub type Result<T> = std::result::Result<T, KlaimeerError>;
