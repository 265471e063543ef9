pub mod boundaries;
pub mod generate;
pub mod grid2d;

pub use boundaries::BoundaryLines;
pub use generate::generate_cells;
pub use grid2d::Grid;
