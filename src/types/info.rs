//! Map metadata.

use glam::DVec2;

use crate::types::{Bounds, DEFAULT_CELL_SIZE, GridcastError};

#[derive(Debug, Clone, PartialEq)]
pub struct MapInfo {
    pub width: u32,
    pub height: u32,
    /// Edge length of one cell in screen units.
    pub cell_size: f64,
    /// Outline thickness a renderer draws around each cell. Carried for the
    /// presentation layer; it does not change any geometry.
    pub border_size: f64,
}

impl Default for MapInfo {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            cell_size: DEFAULT_CELL_SIZE,
            border_size: 0.0,
        }
    }
}

impl MapInfo {
    pub fn square(width: u32, cell_size: f64) -> Self {
        Self {
            width,
            height: width,
            cell_size,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), GridcastError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridcastError::InvalidMetadata(format!(
                "grid must have at least one cell, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(GridcastError::InvalidConfig(format!(
                "cell size must be positive, got {}",
                self.cell_size
            )));
        }
        if !self.border_size.is_finite() || self.border_size < 0.0 {
            return Err(GridcastError::InvalidConfig(format!(
                "border size must be non-negative, got {}",
                self.border_size
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Width of the map in screen units.
    #[inline]
    pub fn screen_width(&self) -> f64 {
        self.width as f64 * self.cell_size
    }

    /// Height of the map in screen units.
    #[inline]
    pub fn screen_height(&self) -> f64 {
        self.height as f64 * self.cell_size
    }

    #[inline]
    pub fn screen_bounds(&self) -> Bounds {
        Bounds::new(
            DVec2::ZERO,
            DVec2::new(self.screen_width(), self.screen_height()),
        )
    }

    #[inline]
    pub fn screen_center(&self) -> DVec2 {
        DVec2::new(0.5 * self.screen_width(), 0.5 * self.screen_height())
    }
}
