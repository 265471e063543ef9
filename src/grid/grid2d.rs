use glam::{DVec2, IVec2, UVec2};

use crate::grid::BoundaryLines;
use crate::segment::Segment;
use crate::types::{Bounds, EMPTY, GridcastError, MapInfo, WALL};

/// Row-major wall/empty occupancy map in screen space.
#[derive(Debug, Clone)]
pub struct Grid {
    info: MapInfo,
    data: Vec<u8>,
    boundaries: BoundaryLines,
}

impl Grid {
    pub fn new(info: MapInfo, data: Vec<u8>) -> Result<Self, GridcastError> {
        info.validate()?;
        validate_cells(&info, &data)?;
        let boundaries = BoundaryLines::build(&info);
        Ok(Self {
            info,
            data,
            boundaries,
        })
    }

    pub fn from_parts(
        cells: Vec<u8>,
        width: u32,
        height: u32,
        cell_size: f64,
        border_size: f64,
    ) -> Result<Self, GridcastError> {
        let info = MapInfo {
            width,
            height,
            cell_size,
            border_size,
        };
        Self::new(info, cells)
    }

    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    pub fn cell_size(&self) -> f64 {
        self.info.cell_size
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn boundary_lines(&self) -> &BoundaryLines {
        &self.boundaries
    }

    /// Replace the whole cell array, keeping the current dimensions.
    pub fn set_cells(&mut self, data: Vec<u8>) -> Result<(), GridcastError> {
        validate_cells(&self.info, &data)?;
        self.data = data;
        Ok(())
    }

    /// Swap in new dimensions and cells; the boundary caches are rebuilt from scratch.
    pub(crate) fn replace(&mut self, info: MapInfo, data: Vec<u8>) -> Result<(), GridcastError> {
        info.validate()?;
        validate_cells(&info, &data)?;
        self.boundaries = BoundaryLines::build(&info);
        self.info = info;
        self.data = data;
        Ok(())
    }

    /// Strict integer lookup; `None` outside `[0, width) x [0, height)`.
    pub fn cell(&self, x: i64, y: i64) -> Option<u8> {
        if x < 0 || y < 0 || x >= self.info.width as i64 || y >= self.info.height as i64 {
            return None;
        }
        Some(self.data[self.index(x as u32, y as u32)])
    }

    /// Cell under a continuous grid-space coordinate.
    ///
    /// The range check is inclusive of `width`/`height` so that a point on the
    /// outer boundary line resolves to the cell adjacent to it.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<u8> {
        let (width, height) = (self.info.width as f64, self.info.height as f64);
        if !(0.0..=width).contains(&x) || !(0.0..=height).contains(&y) {
            return None;
        }
        let ix = (x.floor() as u32).min(self.info.width - 1);
        let iy = (y.floor() as u32).min(self.info.height - 1);
        Some(self.data[self.index(ix, iy)])
    }

    pub fn is_wall(&self, x: i64, y: i64) -> bool {
        self.cell(x, y) == Some(WALL)
    }

    /// Wall cell containing the screen point, if any.
    pub fn wall_under(&self, screen: DVec2) -> Option<UVec2> {
        let g = self.screen_to_grid(screen);
        if self.cell_at(g.x, g.y)? != WALL {
            return None;
        }
        let ix = (g.x.floor() as u32).min(self.info.width - 1);
        let iy = (g.y.floor() as u32).min(self.info.height - 1);
        Some(UVec2::new(ix, iy))
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.info.width as usize) + (x as usize)
    }

    pub fn grid_to_screen(&self, pos: DVec2) -> DVec2 {
        pos * self.info.cell_size
    }

    /// Continuous grid-space coordinate of a screen point.
    pub fn screen_to_grid(&self, pos: DVec2) -> DVec2 {
        pos / self.info.cell_size
    }

    /// Floored cell index of a screen point. May lie outside the grid.
    pub fn screen_to_grid_index(&self, pos: DVec2) -> IVec2 {
        self.screen_to_grid(pos).floor().as_ivec2()
    }

    /// Screen-space centre of a cell.
    pub fn cell_center(&self, cell: UVec2) -> DVec2 {
        self.grid_to_screen(cell.as_dvec2() + DVec2::splat(0.5))
    }

    pub fn screen_bounds(&self) -> Bounds {
        self.info.screen_bounds()
    }

    pub fn is_within_screen_bounds(&self, pos: DVec2) -> bool {
        self.screen_bounds().contains(pos)
    }

    /// Distance from `pos` to the farthest corner of the screen bounds.
    pub fn reach_from(&self, pos: DVec2) -> f64 {
        self.screen_bounds()
            .corners()
            .iter()
            .map(|c| c.distance(pos))
            .fold(0.0, f64::max)
    }

    /// Edges of cell `(x, y)` in screen space, ordered top, bottom, left, right.
    pub fn cell_edge_segments(&self, x: u32, y: u32) -> [Segment; 4] {
        let top_left = self.grid_to_screen(DVec2::new(x as f64, y as f64));
        let bottom_right = self.grid_to_screen(DVec2::new(x as f64 + 1.0, y as f64 + 1.0));
        let top_right = DVec2::new(bottom_right.x, top_left.y);
        let bottom_left = DVec2::new(top_left.x, bottom_right.y);
        [
            Segment::from_points(top_left, top_right),
            Segment::from_points(bottom_left, bottom_right),
            Segment::from_points(top_left, bottom_left),
            Segment::from_points(top_right, bottom_right),
        ]
    }

    /// Empty cell whose centre is closest to the grid's screen centre.
    pub fn nearest_empty_cell_to_center(&self) -> Option<UVec2> {
        let center = self.info.screen_center();
        (0..self.info.height)
            .flat_map(|y| (0..self.info.width).map(move |x| UVec2::new(x, y)))
            .filter(|c| self.data[self.index(c.x, c.y)] == EMPTY)
            .min_by(|a, b| {
                let da = self.cell_center(*a).distance_squared(center);
                let db = self.cell_center(*b).distance_squared(center);
                da.total_cmp(&db)
            })
    }
}

fn validate_cells(info: &MapInfo, data: &[u8]) -> Result<(), GridcastError> {
    let expected_len = info.cell_count();
    if data.len() != expected_len {
        return Err(GridcastError::InvalidMetadata(format!(
            "data length {} does not match map size {}",
            data.len(),
            expected_len
        )));
    }
    if let Some(pos) = data.iter().position(|&v| v != EMPTY && v != WALL) {
        return Err(GridcastError::InvalidMetadata(format!(
            "cell {} has value {}, expected {} or {}",
            pos, data[pos], EMPTY, WALL
        )));
    }
    Ok(())
}
