use glam::{DVec2, UVec2};
use serde::Deserialize;

use crate::grid::Grid;
use crate::segment::{Intersection, Segment};
use crate::viewpoint::Viewpoint;

pub mod boundary;
pub mod dda;
pub mod stepped;
mod utils;

pub use boundary::raycast_boundary;
pub use dda::raycast_dda;
pub use stepped::raycast_stepped;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RayHit {
    /// Grid cell that contains the first hit.
    pub cell: UVec2,
    /// Screen-space point where the ray meets the cell.
    pub point: DVec2,
    /// Distance from the ray origin to `point` (screen units).
    pub distance: f64,
}

impl RayHit {
    pub(crate) fn new(cell: UVec2, hit: Intersection) -> Self {
        Self {
            cell,
            point: hit.point,
            distance: hit.distance,
        }
    }

    /// Extract hit distance, or return `default` if miss.
    pub fn distance_or(hit: Option<Self>, default: f64) -> f64 {
        hit.map(|h| h.distance).unwrap_or(default)
    }
}

/// One entry of a cast fan. `distance` is `+inf` when no wall was found.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RaySample {
    pub angle: f64,
    pub distance: f64,
}

impl RaySample {
    pub fn is_hit(&self) -> bool {
        self.distance.is_finite()
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastStrategy {
    /// Exact intersection against the cached grid lines.
    #[default]
    Boundary,
    /// Half-cell stepping with a fine walk and edge resolution.
    Stepped,
    /// Amanatides & Woo cell traversal.
    Dda,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RayCaster {
    strategy: CastStrategy,
}

impl RayCaster {
    pub fn new(strategy: CastStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> CastStrategy {
        self.strategy
    }

    pub fn cast(&self, grid: &Grid, origin: DVec2, angle: f64) -> Option<RayHit> {
        match self.strategy {
            CastStrategy::Boundary => raycast_boundary(grid, origin, angle),
            CastStrategy::Stepped => raycast_stepped(grid, origin, angle),
            CastStrategy::Dda => raycast_dda(grid, origin, angle),
        }
    }

    pub fn cast_segment(&self, grid: &Grid, ray: &Segment) -> Option<RayHit> {
        self.cast(grid, ray.origin(), ray.angle())
    }

    /// Cast every ray of `viewpoint`, in ray order.
    pub fn cast_fan(&self, viewpoint: &Viewpoint, grid: &Grid) -> Vec<RaySample> {
        viewpoint
            .rays()
            .iter()
            .map(|ray| RaySample {
                angle: ray.angle(),
                distance: RayHit::distance_or(self.cast_segment(grid, ray), f64::INFINITY),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::grid::generate_cells;

    const STRATEGIES: [CastStrategy; 3] = [
        CastStrategy::Boundary,
        CastStrategy::Stepped,
        CastStrategy::Dda,
    ];

    #[rustfmt::skip]
    fn ring() -> Grid {
        let cells = vec![
            1, 1, 1,
            1, 0, 1,
            1, 1, 1,
        ];
        Grid::from_parts(cells, 3, 3, 10.0, 0.0).unwrap()
    }

    #[test]
    fn every_strategy_finds_near_face() {
        let grid = ring();
        for strategy in STRATEGIES {
            let caster = RayCaster::new(strategy);
            let hit = caster
                .cast(&grid, DVec2::new(15.0, 15.0), 0.0)
                .expect("hit expected");
            assert!((hit.distance - 5.0).abs() < 1e-9, "{strategy:?}: {hit:?}");
            assert_eq!(hit.cell, UVec2::new(2, 1), "{strategy:?}");
        }
    }

    #[test]
    fn every_strategy_reports_zero_inside_wall() {
        let grid = ring();
        for strategy in STRATEGIES {
            let hit = RayCaster::new(strategy).cast(&grid, DVec2::new(25.0, 5.0), 123.0);
            assert_eq!(RayHit::distance_or(hit, f64::INFINITY), 0.0, "{strategy:?}");
        }
    }

    #[test]
    fn axis_ray_along_wall_face_hits_it() {
        #[rustfmt::skip]
        let cells = vec![
            1, 1, 1, 1,
            1, 0, 0, 1,
            1, 1, 0, 1,
            1, 0, 0, 1,
            1, 1, 1, 1,
        ];
        let grid = Grid::from_parts(cells, 4, 5, 10.0, 0.0).unwrap();

        // x = 20 runs along the right face of the wall at (1, 2).
        for (origin, angle) in [
            (DVec2::new(20.0, 35.0), 270.0),
            (DVec2::new(20.0, 15.0), 90.0),
        ] {
            for strategy in STRATEGIES {
                let hit = RayCaster::new(strategy)
                    .cast(&grid, origin, angle)
                    .expect("hit expected");
                assert!((hit.distance - 5.0).abs() < 1e-9, "{strategy:?} {angle}: {hit:?}");
                assert_eq!(hit.cell, UVec2::new(1, 2), "{strategy:?} {angle}");
            }
        }
    }

    #[test]
    fn exact_strategies_agree_on_random_levels() {
        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let cells = generate_cells(12, 9, 0.3, true, &mut rng).unwrap();
            let grid = Grid::from_parts(cells, 12, 9, 16.0, 0.0).unwrap();
            let Some(start) = grid.nearest_empty_cell_to_center() else {
                continue;
            };
            let origin = grid.cell_center(start) + DVec2::new(1.3, -2.1);

            for i in 0..72 {
                let angle = 0.37 + i as f64 * 5.0;
                let boundary = raycast_boundary(&grid, origin, angle).expect("walled level");
                let dda = raycast_dda(&grid, origin, angle).expect("walled level");
                assert!(
                    (boundary.distance - dda.distance).abs() < 1e-6,
                    "seed {seed} angle {angle}: {boundary:?} vs {dda:?}"
                );
            }
        }
    }

    #[test]
    fn fan_preserves_ray_order() {
        let grid = ring();
        let viewpoint = Viewpoint::new(DVec2::new(15.0, 15.0), 0.0, 90.0, 1.0).unwrap();
        let samples = RayCaster::default().cast_fan(&viewpoint, &grid);

        assert_eq!(samples.len(), viewpoint.ray_count());
        for (sample, ray) in samples.iter().zip(viewpoint.rays()) {
            assert_eq!(sample.angle, ray.angle());
            assert!(sample.is_hit());
        }
        // Ray 45 looks straight along +x.
        assert!((samples[45].distance - 5.0).abs() < 1e-9);
        // Ray 0 looks 45° up-right into the top-right corner block.
        assert!((samples[0].distance - 5.0 * 2f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn fan_reports_infinity_on_miss() {
        let grid = Grid::from_parts(vec![0; 9], 3, 3, 10.0, 0.0).unwrap();
        let viewpoint = Viewpoint::new(DVec2::new(15.0, 15.0), 0.0, 30.0, 1.0).unwrap();
        for strategy in STRATEGIES {
            let samples = RayCaster::new(strategy).cast_fan(&viewpoint, &grid);
            assert!(samples.iter().all(|s| s.distance == f64::INFINITY), "{strategy:?}");
        }
    }

    #[test]
    fn strategy_names_deserialize() {
        let s: CastStrategy = serde_yaml::from_str("stepped").unwrap();
        assert_eq!(s, CastStrategy::Stepped);
        let s: CastStrategy = serde_yaml::from_str("dda").unwrap();
        assert_eq!(s, CastStrategy::Dda);
        assert!(serde_yaml::from_str::<CastStrategy>("bogus").is_err());
    }
}
