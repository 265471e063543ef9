use glam::{DVec2, IVec2};

use crate::grid::Grid;
use crate::raycast::RayHit;
use crate::raycast::utils::{first_wall, origin_hit, snap_to_axis, touched_span};
use crate::types::from_angle;

/// Fast voxel traversal (Amanatides & Woo) that returns the first wall cell hit.
///
/// The origin must lie within the grid's screen bounds. Direction components
/// that are zero up to rounding are snapped to zero, so a ray along a grid
/// line walks both columns (or rows) beside it.
pub fn raycast_dda(grid: &Grid, origin: DVec2, angle: f64) -> Option<RayHit> {
    if !grid.is_within_screen_bounds(origin) {
        return None;
    }
    let dir = snap_to_axis(from_angle(angle, 1.0));
    if let Some(hit) = origin_hit(grid, origin, dir) {
        return Some(hit);
    }

    let info = grid.info();
    let cell_size = info.cell_size;
    let (width, height) = (info.width as i64, info.height as i64);
    let start = grid.screen_to_grid(origin);

    // We use ivecs internally as the steps can be negative.
    let mut cell = start.floor().as_ivec2();

    let step = IVec2::new(step_of(dir.x), step_of(dir.y));
    let (t_delta_x, t_max_x) = axis_params(start.x, dir.x);
    let (t_delta_y, t_max_y) = axis_params(start.y, dir.y);

    let mut t_max = DVec2::new(t_max_x, t_max_y);
    let t_delta = DVec2::new(t_delta_x, t_delta_y);

    // An axis the ray does not move along keeps the cells it started in.
    let fixed_cols = touched_span(start.x, dir.x, width);
    let fixed_rows = touched_span(start.y, dir.y, height);

    loop {
        let t;
        if t_max.x < t_max.y {
            t = t_max.x;
            t_max.x += t_delta.x;
            cell.x += step.x;
        } else {
            t = t_max.y;
            t_max.y += t_delta.y;
            cell.y += step.y;
        }

        let (x, y) = (cell.x as i64, cell.y as i64);
        let left_x = step.x != 0 && !(0..width).contains(&x);
        let left_y = step.y != 0 && !(0..height).contains(&y);
        if left_x || left_y {
            log::trace!("dda left the grid at {:?} ({:.2}°)", cell, angle);
            return None;
        }

        let cols = if step.x == 0 { fixed_cols } else { (x, x) };
        let rows = if step.y == 0 { fixed_rows } else { (y, y) };
        if let Some(wall) = first_wall(grid, cols, rows) {
            let distance = t * cell_size;
            return Some(RayHit {
                cell: wall,
                point: origin + dir * distance,
                distance,
            });
        }
    }
}

#[inline]
fn step_of(dir: f64) -> i32 {
    if dir > 0.0 {
        1
    } else if dir < 0.0 {
        -1
    } else {
        0
    }
}

fn axis_params(start: f64, dir: f64) -> (f64, f64) {
    if dir == 0.0 {
        return (f64::INFINITY, f64::INFINITY);
    }

    let step = dir.signum();
    let dist_to_boundary = if step > 0.0 {
        1.0 - start.fract()
    } else {
        start.fract()
    };

    let t_delta = (1.0 / dir).abs();
    let t_max = dist_to_boundary * t_delta;
    (t_delta, t_max)
}
