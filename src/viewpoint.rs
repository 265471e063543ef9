//! The moving eye: position, heading, field of view and its fan of rays.

use glam::DVec2;

use crate::segment::Segment;
use crate::types::{GridcastError, MAX_RAY_COUNT, normalize_angle};

/// Position and heading plus one unit-length ray per angular step of the
/// field of view.
///
/// Ray `i` points along `heading - fov / 2 + i / rays_per_degree`. Every
/// mutator keeps the rays in step with the viewpoint; casters only read the
/// ray origins and angles.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewpoint {
    position: DVec2,
    heading: f64,
    fov: f64,
    rays_per_degree: f64,
    rays: Vec<Segment>,
}

impl Viewpoint {
    pub fn new(
        position: DVec2,
        heading: f64,
        fov: f64,
        rays_per_degree: f64,
    ) -> Result<Self, GridcastError> {
        let mut viewpoint = Self {
            position,
            heading: normalize_angle(heading),
            fov,
            rays_per_degree,
            rays: Vec::new(),
        };
        viewpoint.rebuild_rays()?;
        Ok(viewpoint)
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    #[inline]
    pub fn field_of_view(&self) -> f64 {
        self.fov
    }

    #[inline]
    pub fn rays_per_degree(&self) -> f64 {
        self.rays_per_degree
    }

    pub fn rays(&self) -> &[Segment] {
        &self.rays
    }

    pub fn ray_count(&self) -> usize {
        self.rays.len()
    }

    pub fn ray_angles(&self) -> impl Iterator<Item = f64> + '_ {
        self.rays.iter().map(Segment::angle)
    }

    pub fn set_position(&mut self, position: DVec2) {
        self.position = position;
        for ray in &mut self.rays {
            ray.set_origin(position);
        }
    }

    pub fn set_heading(&mut self, heading: f64) {
        self.heading = normalize_angle(heading);
        self.update_angles();
    }

    pub fn rotate(&mut self, delta: f64) {
        self.set_heading(self.heading + delta);
    }

    /// Change the field of view and angular resolution; the ray set is rebuilt.
    ///
    /// On error the viewpoint keeps its previous configuration.
    pub fn set_field_of_view(&mut self, fov: f64, rays_per_degree: f64) -> Result<(), GridcastError> {
        let previous = (self.fov, self.rays_per_degree);
        self.fov = fov;
        self.rays_per_degree = rays_per_degree;
        if let Err(err) = self.rebuild_rays() {
            (self.fov, self.rays_per_degree) = previous;
            return Err(err);
        }
        Ok(())
    }

    fn ray_angle(&self, i: usize) -> f64 {
        fan_angle(self.heading, self.fov, self.rays_per_degree, i)
    }

    fn update_angles(&mut self) {
        let (heading, fov, rays_per_degree) = (self.heading, self.fov, self.rays_per_degree);
        for (i, ray) in self.rays.iter_mut().enumerate() {
            ray.set_angle(fan_angle(heading, fov, rays_per_degree, i));
        }
    }

    fn rebuild_rays(&mut self) -> Result<(), GridcastError> {
        let count = ray_count(self.fov, self.rays_per_degree)?;
        self.rays = (0..count)
            .map(|i| Segment::new(self.position, self.ray_angle(i), 1.0))
            .collect();
        log::debug!(
            "rebuilt {} rays over {:.1}° ({} per degree)",
            count,
            self.fov,
            self.rays_per_degree
        );
        Ok(())
    }
}

#[inline]
fn fan_angle(heading: f64, fov: f64, rays_per_degree: f64, i: usize) -> f64 {
    heading - 0.5 * fov + i as f64 / rays_per_degree
}

fn ray_count(fov: f64, rays_per_degree: f64) -> Result<usize, GridcastError> {
    if !fov.is_finite() || fov <= 0.0 || fov > 360.0 {
        return Err(GridcastError::InvalidConfig(format!(
            "field of view must be in (0, 360] degrees, got {fov}"
        )));
    }
    if !rays_per_degree.is_finite() || rays_per_degree <= 0.0 {
        return Err(GridcastError::InvalidConfig(format!(
            "rays per degree must be positive, got {rays_per_degree}"
        )));
    }
    let count = (fov * rays_per_degree).ceil();
    if count < 1.0 {
        return Err(GridcastError::InvalidConfig(format!(
            "field of view {fov}° at {rays_per_degree} rays per degree yields no rays"
        )));
    }
    if count > MAX_RAY_COUNT as f64 {
        return Err(GridcastError::InvalidConfig(format!(
            "field of view {fov}° at {rays_per_degree} rays per degree yields {count} rays, \
             at most {MAX_RAY_COUNT} are allowed"
        )));
    }
    Ok(count as usize)
}
