//! Point helpers and screen-space rectangles shared by the grid and caster APIs.
//!
//! Points are `glam::DVec2` in screen coordinates: x grows to the right, y grows
//! downward. Angles are degrees with 0° along +x, increasing clockwise on screen.

use glam::DVec2;

/// Map any angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_angle(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Vector of `length` pointing along `deg`.
#[inline]
pub fn from_angle(deg: f64, length: f64) -> DVec2 {
    let (sin, cos) = deg.to_radians().sin_cos();
    DVec2::new(cos, sin) * length
}

/// Heading in degrees from `from` towards `to`, normalized to `[0, 360)`.
#[inline]
pub fn angle_to(from: DVec2, to: DVec2) -> f64 {
    let delta = to - from;
    normalize_angle(delta.y.atan2(delta.x).to_degrees())
}

/// Screen-axis-aligned rectangle.
/// Convention: [min.x, max.x] x [min.y, max.y], both edges inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.min.y
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.max.x
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.max.y
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Corners in clockwise screen order starting at the top-left.
    pub fn corners(&self) -> [DVec2; 4] {
        [
            self.min,
            DVec2::new(self.max.x, self.min.y),
            self.max,
            DVec2::new(self.min.x, self.max.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_into_range() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(360.0), 0.0);
        assert_eq!(normalize_angle(-90.0), 270.0);
        assert_eq!(normalize_angle(725.0), 5.0);
        assert!(normalize_angle(-1e-20) < 360.0);
    }

    #[test]
    fn angle_convention_is_clockwise_on_screen() {
        let o = DVec2::ZERO;
        assert!((angle_to(o, DVec2::new(1.0, 0.0)) - 0.0).abs() < 1e-12);
        assert!((angle_to(o, DVec2::new(0.0, 1.0)) - 90.0).abs() < 1e-12);
        assert!((angle_to(o, DVec2::new(-1.0, 0.0)) - 180.0).abs() < 1e-12);
        assert!((angle_to(o, DVec2::new(0.0, -1.0)) - 270.0).abs() < 1e-12);
    }

    #[test]
    fn from_angle_matches_angle_to() {
        let v = from_angle(135.0, 2.0);
        assert!((v.length() - 2.0).abs() < 1e-12);
        assert!((angle_to(DVec2::ZERO, v) - 135.0).abs() < 1e-9);
    }

    #[test]
    fn bounds_contains_is_inclusive() {
        let b = Bounds::new(DVec2::ZERO, DVec2::new(30.0, 20.0));
        assert!(b.contains(DVec2::new(30.0, 20.0)));
        assert!(b.contains(DVec2::ZERO));
        assert!(!b.contains(DVec2::new(30.000_001, 10.0)));
        assert_eq!((b.top(), b.left(), b.right(), b.bottom()), (0.0, 0.0, 30.0, 20.0));
    }
}
