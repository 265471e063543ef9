//! Directed finite segments and the intersection math the casters are built on.

use glam::DVec2;

use crate::types::{GEOMETRY_EPSILON, PARALLEL_EPSILON, from_angle, normalize_angle};

/// A finite segment defined by an origin, a heading in degrees and a length.
///
/// `end` is derived and always equals `origin + length * direction(angle)`,
/// except right after [`Segment::look_at`], which pins `end` to the target
/// exactly and back-derives angle and length from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    origin: DVec2,
    angle: f64,
    length: f64,
    end: DVec2,
}

/// A surviving candidate from [`Segment::closest_intersection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub point: DVec2,
    /// Euclidean distance from the querying segment's origin.
    pub distance: f64,
}

impl Intersection {
    /// Extract the distance, or return `default` if nothing was hit.
    pub fn distance_or(hit: Option<Self>, default: f64) -> f64 {
        hit.map(|h| h.distance).unwrap_or(default)
    }
}

impl Segment {
    pub fn new(origin: DVec2, angle: f64, length: f64) -> Self {
        let angle = normalize_angle(angle);
        Self {
            origin,
            angle,
            length,
            end: origin + from_angle(angle, length),
        }
    }

    /// Segment starting at `a` that reaches `b` exactly.
    pub fn from_points(a: DVec2, b: DVec2) -> Self {
        let mut segment = Self::new(a, 0.0, 0.0);
        segment.look_at(b);
        segment
    }

    #[inline]
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn end(&self) -> DVec2 {
        self.end
    }

    /// Unit vector along the segment's heading.
    #[inline]
    pub fn direction(&self) -> DVec2 {
        from_angle(self.angle, 1.0)
    }

    pub fn set_origin(&mut self, origin: DVec2) {
        self.origin = origin;
        self.update_end();
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.angle = normalize_angle(angle);
        self.update_end();
    }

    pub fn set_length(&mut self, length: f64) {
        self.length = length;
        self.update_end();
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.set_length(length);
        self
    }

    /// Point the segment at `target` and stretch it to reach it.
    pub fn look_at(&mut self, target: DVec2) {
        let delta = target - self.origin;
        self.angle = normalize_angle(delta.y.atan2(delta.x).to_degrees());
        self.length = delta.length();
        self.end = target;
    }

    fn update_end(&mut self) {
        self.end = self.origin + from_angle(self.angle, self.length);
    }

    /// Bounding-box containment against origin/end.
    ///
    /// Not a collinearity test: it is meant for points already known to lie on
    /// the infinite line through this segment.
    pub fn is_on_segment(&self, point: DVec2) -> bool {
        let min = self.origin.min(self.end) - DVec2::splat(GEOMETRY_EPSILON);
        let max = self.origin.max(self.end) + DVec2::splat(GEOMETRY_EPSILON);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Intersection of the infinite lines through `self` and `other`.
    ///
    /// `None` when the lines are parallel or the result is not finite. The
    /// point is not clamped to either segment; pair with [`Self::is_on_segment`].
    pub fn intersection_point(&self, other: &Segment) -> Option<DVec2> {
        intersect_points(self.origin, self.end, other.origin, other.end)
    }

    /// Closest point, measured from `self.origin`, where `self` crosses any of
    /// `segments` within both segments' bounds.
    ///
    /// `ignore(point, other, self)` can veto individual candidates.
    pub fn closest_intersection<'a, I, F>(&self, segments: I, mut ignore: F) -> Option<Intersection>
    where
        I: IntoIterator<Item = &'a Segment>,
        F: FnMut(DVec2, &Segment, &Segment) -> bool,
    {
        let mut best: Option<Intersection> = None;
        for other in segments {
            let Some(point) = self.intersection_point(other) else {
                continue;
            };
            if !self.is_on_segment(point) || !other.is_on_segment(point) {
                continue;
            }
            if ignore(point, other, self) {
                continue;
            }
            let distance = self.origin.distance(point);
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(Intersection { point, distance });
            }
        }
        best
    }
}

/// Intersection of the infinite line through `p1`/`p2` with the one through `p3`/`p4`.
pub fn intersect_points(p1: DVec2, p2: DVec2, p3: DVec2, p4: DVec2) -> Option<DVec2> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let den = d2.y * d1.x - d2.x * d1.y;
    let scale = d1.length() * d2.length();
    if den == 0.0 || den.abs() <= PARALLEL_EPSILON * scale {
        return None;
    }

    let ua = (d2.x * (p1.y - p3.y) - d2.y * (p1.x - p3.x)) / den;
    let point = p1 + d1 * ua;
    if !point.x.is_finite() || !point.y.is_finite() {
        return None;
    }
    Some(point)
}

/// Intersection of two segments, restricted to both segments' extents.
pub fn intersect_segments(a: &Segment, b: &Segment) -> Option<DVec2> {
    a.intersection_point(b)
        .filter(|p| a.is_on_segment(*p) && b.is_on_segment(*p))
}
