use rand::Rng;

use super::Grid;
use crate::types::{EMPTY, GridcastError, MapInfo, WALL};

/// Random level: border cells are walls when `border_walls` is set, every
/// other cell is a wall with probability `wall_probability`.
pub fn generate_cells<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    wall_probability: f64,
    border_walls: bool,
    rng: &mut R,
) -> Result<Vec<u8>, GridcastError> {
    if !(0.0..=1.0).contains(&wall_probability) {
        return Err(GridcastError::InvalidConfig(format!(
            "wall probability must be in [0, 1], got {wall_probability}"
        )));
    }

    let mut cells = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        for x in 0..width {
            let on_border = x == 0 || y == 0 || x + 1 == width || y + 1 == height;
            let wall = (border_walls && on_border) || rng.random_bool(wall_probability);
            cells.push(if wall { WALL } else { EMPTY });
        }
    }
    Ok(cells)
}

impl Grid {
    /// Replace this grid with a freshly generated level, possibly resized.
    ///
    /// Cell size and border size are kept.
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        width: u32,
        height: u32,
        wall_probability: f64,
        border_walls: bool,
        rng: &mut R,
    ) -> Result<(), GridcastError> {
        let info = MapInfo {
            width,
            height,
            ..self.info().clone()
        };
        info.validate()?;
        let cells = generate_cells(width, height, wall_probability, border_walls, rng)?;
        let walls = cells.iter().filter(|&&c| c == WALL).count();
        log::debug!(
            "regenerated {}x{} grid: {} walls (p = {:.3})",
            width,
            height,
            walls,
            wall_probability
        );
        self.replace(info, cells)
    }
}
