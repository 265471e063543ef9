use glam::DVec2;

use crate::grid::Grid;
use crate::raycast::RayHit;
use crate::raycast::utils::{origin_hit, wall_beyond_horizontal, wall_beyond_vertical};
use crate::segment::Segment;

/// Exact cast against the grid's cached boundary lines.
///
/// Only lines on the side the ray is heading towards are tested, and a
/// crossing counts only if the cell just beyond it is a wall. Cost is linear
/// in the number of grid lines and independent of any step size.
pub fn raycast_boundary(grid: &Grid, origin: DVec2, angle: f64) -> Option<RayHit> {
    let ray = Segment::new(origin, angle, grid.reach_from(origin));
    let dir = ray.direction();
    if let Some(hit) = origin_hit(grid, origin, dir) {
        return Some(hit);
    }
    let lines = grid.boundary_lines();

    let horizontal = lines
        .horizontal()
        .iter()
        .filter(|line| ahead(line.origin().y, origin.y, dir.y));
    let vertical = lines
        .vertical()
        .iter()
        .filter(|line| ahead(line.origin().x, origin.x, dir.x));

    let h_hit = ray.closest_intersection(horizontal, |p, _, _| {
        wall_beyond_horizontal(grid, p, dir).is_none()
    });
    let v_hit = ray.closest_intersection(vertical, |p, _, _| {
        wall_beyond_vertical(grid, p, dir).is_none()
    });

    match (h_hit, v_hit) {
        (Some(h), Some(v)) if v.distance < h.distance => {
            wall_beyond_vertical(grid, v.point, dir).map(|cell| RayHit::new(cell, v))
        }
        (Some(h), _) => wall_beyond_horizontal(grid, h.point, dir).map(|cell| RayHit::new(cell, h)),
        (None, Some(v)) => wall_beyond_vertical(grid, v.point, dir).map(|cell| RayHit::new(cell, v)),
        (None, None) => None,
    }
}

/// A line through the origin counts as ahead: the ray crosses it at distance 0.
#[inline]
fn ahead(line: f64, origin: f64, dir: f64) -> bool {
    if dir > 0.0 {
        line >= origin
    } else if dir < 0.0 {
        line <= origin
    } else {
        false
    }
}
