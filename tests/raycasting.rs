use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gridcast::grid::generate_cells;
use gridcast::types::{EMPTY, WALL};
use gridcast::{CastStrategy, Grid, RayCaster, RayHit, Segment, Viewpoint};

#[rustfmt::skip]
fn ring() -> Grid {
    let cells = vec![
        WALL, WALL,  WALL,
        WALL, EMPTY, WALL,
        WALL, WALL,  WALL,
    ];
    Grid::from_parts(cells, 3, 3, 10.0, 0.0).expect("grid should build")
}

#[test]
fn ray_from_centre_stops_at_near_face() {
    let grid = ring();
    for strategy in [CastStrategy::Boundary, CastStrategy::Stepped, CastStrategy::Dda] {
        let caster = RayCaster::new(strategy);
        let ray = Segment::new(DVec2::new(15.0, 15.0), 0.0, 1.0);
        let distance = RayHit::distance_or(caster.cast_segment(&grid, &ray), f64::INFINITY);
        assert!((distance - 5.0).abs() < 1e-9, "{strategy:?} gave {distance}");
    }
}

#[test]
fn boundary_and_dda_agree_across_a_full_turn() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let cells = generate_cells(20, 14, 0.25, true, &mut rng).unwrap();
    let grid = Grid::from_parts(cells, 20, 14, 24.0, 2.0).unwrap();
    let start = grid.nearest_empty_cell_to_center().expect("open cell");

    let mut viewpoint = Viewpoint::new(grid.cell_center(start), 0.0, 360.0, 1.0).unwrap();
    viewpoint.set_position(grid.cell_center(start) + DVec2::new(3.7, 5.3));
    viewpoint.rotate(0.41);

    let boundary = RayCaster::new(CastStrategy::Boundary).cast_fan(&viewpoint, &grid);
    let dda = RayCaster::new(CastStrategy::Dda).cast_fan(&viewpoint, &grid);
    assert_eq!(boundary.len(), 360);
    for (b, d) in boundary.iter().zip(&dda) {
        assert_eq!(b.angle, d.angle);
        assert!((b.distance - d.distance).abs() < 1e-6, "{b:?} vs {d:?}");
    }
}

#[test]
fn axis_rays_from_grid_lines_agree() {
    let strategies = [CastStrategy::Boundary, CastStrategy::Stepped, CastStrategy::Dda];
    for seed in 0..40 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cells = generate_cells(10, 8, 0.35, true, &mut rng).unwrap();
        let grid = Grid::from_parts(cells, 10, 8, 16.0, 0.0).unwrap();
        let Some(cell) = grid.nearest_empty_cell_to_center() else {
            continue;
        };
        let corner = grid.grid_to_screen(cell.as_dvec2());
        let origins = [
            // On the cell's left grid line.
            corner + DVec2::new(0.0, 6.3),
            // On the cell's top grid line.
            corner + DVec2::new(9.1, 0.0),
        ];

        for origin in origins {
            for angle in [0.0, 90.0, 180.0, 270.0] {
                let distances: Vec<f64> = strategies
                    .iter()
                    .map(|&s| {
                        let hit = RayCaster::new(s).cast(&grid, origin, angle);
                        RayHit::distance_or(hit, f64::INFINITY)
                    })
                    .collect();
                for d in &distances[1..] {
                    assert!(
                        (d - distances[0]).abs() < 1e-6,
                        "seed {seed} origin {origin} angle {angle}: {distances:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn stepped_stays_close_to_exact() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let cells = generate_cells(16, 16, 0.2, true, &mut rng).unwrap();
    let grid = Grid::from_parts(cells, 16, 16, 32.0, 0.0).unwrap();
    let start = grid.nearest_empty_cell_to_center().expect("open cell");
    let viewpoint = Viewpoint::new(grid.cell_center(start), 10.0, 120.0, 1.0).unwrap();

    let exact = RayCaster::new(CastStrategy::Boundary).cast_fan(&viewpoint, &grid);
    let stepped = RayCaster::new(CastStrategy::Stepped).cast_fan(&viewpoint, &grid);

    // Stepping can skip the tip of a corner, so it may overshoot but never
    // report a wall nearer than the exact one.
    for (e, s) in exact.iter().zip(&stepped) {
        assert!(s.is_hit());
        assert!(s.distance >= e.distance - 1e-6, "{e:?} vs {s:?}");
    }
    let matching = exact
        .iter()
        .zip(&stepped)
        .filter(|(e, s)| (e.distance - s.distance).abs() < 1e-6)
        .count();
    assert!(matching * 2 >= exact.len(), "only {matching} rays matched");
}

#[test]
fn cell_at_inclusive_edge() {
    let grid = ring();
    assert_eq!(grid.cell_at(3.0, 0.5), Some(WALL));
    assert_eq!(grid.cell_at(0.5, 3.0), Some(WALL));
    assert_eq!(grid.cell_at(4.0, 0.5), None);
    assert_eq!(grid.cell_at(0.5, 4.0), None);
}
