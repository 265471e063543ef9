use glam::DVec2;

use crate::segment::Segment;
use crate::types::MapInfo;

/// Every grid line as a screen-space segment spanning the whole map.
///
/// Lines are keyed by integer index: `horizontal[k]` is `y = k * cell_size`
/// for `k` in `0..=height`, `vertical[k]` is `x = k * cell_size` for `k` in
/// `0..=width`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryLines {
    horizontal: Vec<Segment>,
    vertical: Vec<Segment>,
}

impl BoundaryLines {
    pub fn build(info: &MapInfo) -> Self {
        let right = info.screen_width();
        let bottom = info.screen_height();

        let horizontal = (0..=info.height)
            .map(|k| {
                let y = k as f64 * info.cell_size;
                Segment::from_points(DVec2::new(0.0, y), DVec2::new(right, y))
            })
            .collect();
        let vertical = (0..=info.width)
            .map(|k| {
                let x = k as f64 * info.cell_size;
                Segment::from_points(DVec2::new(x, 0.0), DVec2::new(x, bottom))
            })
            .collect();

        Self {
            horizontal,
            vertical,
        }
    }

    pub fn horizontal(&self) -> &[Segment] {
        &self.horizontal
    }

    pub fn vertical(&self) -> &[Segment] {
        &self.vertical
    }

    pub fn horizontal_line(&self, k: usize) -> Option<&Segment> {
        self.horizontal.get(k)
    }

    pub fn vertical_line(&self, k: usize) -> Option<&Segment> {
        self.vertical.get(k)
    }
}
