use glam::{DVec2, UVec2};

use crate::grid::Grid;
use crate::raycast::RayHit;
use crate::types::{AXIS_EPSILON, LINE_EPSILON};

/// A ray that starts inside a wall, or runs along the face of one, hits it
/// immediately.
#[inline]
pub fn origin_hit(grid: &Grid, origin: DVec2, dir: DVec2) -> Option<RayHit> {
    wall_touched(grid, origin, dir).map(|cell| RayHit {
        cell,
        point: origin,
        distance: 0.0,
    })
}

/// Wall cell under `point` for a ray travelling along `dir`.
///
/// A ray running exactly along a grid line touches the cells on both sides of
/// it, so both are checked. Points on the outer boundary resolve to the last
/// column or row.
pub fn wall_touched(grid: &Grid, point: DVec2, dir: DVec2) -> Option<UVec2> {
    if !grid.is_within_screen_bounds(point) {
        return None;
    }
    let g = grid.screen_to_grid(point);
    let cols = touched_span(g.x, dir.x, grid.width() as i64);
    let rows = touched_span(g.y, dir.y, grid.height() as i64);
    first_wall(grid, cols, rows)
}

/// Wall cell on the far side of the horizontal grid line through `point`,
/// seen from a ray travelling along `dir`.
pub fn wall_beyond_horizontal(grid: &Grid, point: DVec2, dir: DVec2) -> Option<UVec2> {
    let g = grid.screen_to_grid(point);
    let line = g.y.round() as i64;
    let row = if dir.y > 0.0 { line } else { line - 1 };
    first_wall(grid, crossing_span(g.x, dir.x), (row, row))
}

/// Wall cell on the far side of the vertical grid line through `point`.
pub fn wall_beyond_vertical(grid: &Grid, point: DVec2, dir: DVec2) -> Option<UVec2> {
    let g = grid.screen_to_grid(point);
    let line = g.x.round() as i64;
    let col = if dir.x > 0.0 { line } else { line - 1 };
    first_wall(grid, (col, col), crossing_span(g.y, dir.y))
}

/// `dir` with components below [`AXIS_EPSILON`] set to exactly zero.
#[inline]
pub fn snap_to_axis(dir: DVec2) -> DVec2 {
    let snap = |v: f64| if v.abs() < AXIS_EPSILON { 0.0 } else { v };
    DVec2::new(snap(dir.x), snap(dir.y))
}

/// First wall among the cells `cols x rows`, both given as inclusive pairs.
/// Indices outside the grid are never walls.
pub(crate) fn first_wall(grid: &Grid, cols: (i64, i64), rows: (i64, i64)) -> Option<UVec2> {
    for y in [rows.0, rows.1] {
        for x in [cols.0, cols.1] {
            if grid.is_wall(x, y) {
                return Some(UVec2::new(x as u32, y as u32));
            }
        }
    }
    None
}

/// Columns (or rows) touched at grid coordinate `g` by a ray whose component
/// along this axis is `d`.
pub(crate) fn touched_span(g: f64, d: f64, limit: i64) -> (i64, i64) {
    match grazed_line(g, d) {
        Some(line) => (line - 1, line),
        None => {
            let i = (g.floor() as i64).min(limit - 1);
            (i, i)
        }
    }
}

// Same as `touched_span` for a point on a crossed grid line, where a corner
// resolves to the cell the ray is heading into.
fn crossing_span(g: f64, d: f64) -> (i64, i64) {
    match grazed_line(g, d) {
        Some(line) => (line - 1, line),
        None => {
            let i = (g + d * NUDGE).floor() as i64;
            (i, i)
        }
    }
}

/// The grid line a ray runs along, if it does.
#[inline]
fn grazed_line(g: f64, d: f64) -> Option<i64> {
    let line = g.round();
    (d.abs() < AXIS_EPSILON && (g - line).abs() < LINE_EPSILON).then_some(line as i64)
}

// Grid-space offset that moves a point off a cell corner in the travel direction.
const NUDGE: f64 = 1e-9;
