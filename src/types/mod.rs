pub mod constants;
pub mod error;
pub mod geometry;
pub mod info;

pub use constants::*;
pub use error::GridcastError;
pub use geometry::{Bounds, angle_to, from_angle, normalize_angle};
pub use info::MapInfo;
