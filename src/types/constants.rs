pub const EMPTY: u8 = 0;
pub const WALL: u8 = 1;

pub const DEFAULT_WALL_PROBABILITY: f64 = 1.0 / 3.0;
pub const DEFAULT_CELL_SIZE: f64 = 32.0;
pub const DEFAULT_FOV_DEG: f64 = 60.0;
pub const DEFAULT_RAYS_PER_DEGREE: f64 = 1.0;

/// Absolute slack (screen units) for bounding-box membership tests.
pub const GEOMETRY_EPSILON: f64 = 1e-7;
/// Relative threshold below which two directions are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-12;

/// The stepped caster refines with steps of `cell_size / FINE_STEP_DIVISOR`.
pub const FINE_STEP_DIVISOR: f64 = 16.0;

/// Direction components smaller than this are treated as zero: the ray runs
/// along the grid lines of that axis.
pub const AXIS_EPSILON: f64 = 1e-12;
/// Grid-space distance within which a point counts as lying on a grid line.
pub const LINE_EPSILON: f64 = 1e-9;

/// Upper bound on the rays in one viewpoint fan.
pub const MAX_RAY_COUNT: usize = 1 << 20;
