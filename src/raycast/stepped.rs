use glam::DVec2;

use crate::grid::Grid;
use crate::raycast::RayHit;
use crate::raycast::utils::{origin_hit, wall_touched};
use crate::segment::Segment;
use crate::types::FINE_STEP_DIVISOR;

/// Stepped search followed by exact resolution against the hit cell's edges.
///
/// The ray grows in half-cell steps until its end enters a wall cell or leaves
/// the grid. It then backs off one cell and walks forward in
/// `cell_size / FINE_STEP_DIVISOR` steps to find the first wall cell again,
/// and finally intersects the ray with that cell's four edges. Corners thinner
/// than the coarse step can still be skipped. A ray running along a grid line
/// tests the cells on both sides of it.
pub fn raycast_stepped(grid: &Grid, origin: DVec2, angle: f64) -> Option<RayHit> {
    let mut ray = Segment::new(origin, angle, 0.0);
    let dir = ray.direction();
    if let Some(hit) = origin_hit(grid, origin, dir) {
        return Some(hit);
    }

    let cell_size = grid.cell_size();
    let coarse_step = 0.5 * cell_size;

    let coarse_cell = loop {
        if !grid.is_within_screen_bounds(ray.end()) {
            return None;
        }
        if let Some(cell) = wall_touched(grid, ray.end(), dir) {
            break cell;
        }
        ray.set_length(ray.length() + coarse_step);
    };
    let coarse_length = ray.length();

    let fine_step = cell_size / FINE_STEP_DIVISOR;
    ray.set_length((coarse_length - cell_size).max(0.0));
    let cell = loop {
        if let Some(cell) = wall_touched(grid, ray.end(), dir) {
            break cell;
        }
        if ray.length() >= coarse_length {
            break coarse_cell;
        }
        ray.set_length((ray.length() + fine_step).min(coarse_length));
    };

    // Reach through the whole cell so the near face is always crossed.
    let probe = ray.with_length(ray.length() + cell_size);
    let edges = grid.cell_edge_segments(cell.x, cell.y);
    match probe.closest_intersection(&edges, |_, _, _| false) {
        Some(hit) => Some(RayHit::new(cell, hit)),
        None => {
            log::trace!(
                "no edge of cell {:?} crossed at {:.2}°, keeping stepped estimate {:.3}",
                cell,
                angle,
                ray.length()
            );
            Some(RayHit {
                cell,
                point: ray.end(),
                distance: ray.length(),
            })
        }
    }
}
