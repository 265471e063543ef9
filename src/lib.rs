pub mod config;
pub mod grid;
pub mod raycast;
pub mod scene;
pub mod segment;
pub mod types;
pub mod viewpoint;

pub use config::{GridcastConfig, load_config};
pub use grid::Grid;
pub use raycast::{CastStrategy, RayCaster, RayHit, RaySample};
pub use scene::Scene;
pub use segment::{Intersection, Segment};
pub use types::{GridcastError, MapInfo};
pub use viewpoint::Viewpoint;
