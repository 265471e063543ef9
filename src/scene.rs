//! Per-session state handed to the presentation layer each frame.

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{GenerationConfig, GridcastConfig};
use crate::grid::{Grid, generate_cells};
use crate::raycast::{CastStrategy, RayCaster, RaySample};
use crate::types::GridcastError;
use crate::viewpoint::Viewpoint;

/// Grid, viewpoint and caster owned together. The renderer keeps one of these
/// and calls [`Scene::cast_frame`] once per frame.
#[derive(Debug, Clone)]
pub struct Scene {
    grid: Grid,
    viewpoint: Viewpoint,
    caster: RayCaster,
    generation: GenerationConfig,
    rng: ChaCha8Rng,
}

impl Scene {
    pub fn new(grid: Grid, viewpoint: Viewpoint, caster: RayCaster) -> Self {
        let generation = GenerationConfig::default();
        let rng = ChaCha8Rng::seed_from_u64(generation.seed);
        Self {
            grid,
            viewpoint,
            caster,
            generation,
            rng,
        }
    }

    pub fn from_config(config: &GridcastConfig) -> Result<Self, GridcastError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.generation.seed);
        let info = config.map.info();

        let cells = match config.map.layout_cells()? {
            Some(cells) => cells,
            None => generate_cells(
                info.width,
                info.height,
                config.generation.wall_probability,
                config.generation.border_walls,
                &mut rng,
            )?,
        };
        let grid = Grid::new(info, cells)?;

        let viewpoint = Viewpoint::new(
            spawn_point(&grid),
            config.view.heading_deg,
            config.view.fov_deg,
            config.view.rays_per_degree,
        )?;

        Ok(Self {
            grid,
            viewpoint,
            caster: RayCaster::new(config.strategy),
            generation: config.generation.clone(),
            rng,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn viewpoint(&self) -> &Viewpoint {
        &self.viewpoint
    }

    pub fn viewpoint_mut(&mut self) -> &mut Viewpoint {
        &mut self.viewpoint
    }

    pub fn caster(&self) -> RayCaster {
        self.caster
    }

    pub fn set_strategy(&mut self, strategy: CastStrategy) {
        self.caster = RayCaster::new(strategy);
    }

    /// Distances for every ray of the viewpoint, in ray order.
    pub fn cast_frame(&self) -> Vec<RaySample> {
        self.caster.cast_fan(&self.viewpoint, &self.grid)
    }

    /// Draw a new random level of the same size and move the viewpoint to
    /// its open centre.
    pub fn regenerate(&mut self) -> Result<(), GridcastError> {
        let (width, height) = (self.grid.width(), self.grid.height());
        self.grid.regenerate(
            width,
            height,
            self.generation.wall_probability,
            self.generation.border_walls,
            &mut self.rng,
        )?;
        self.viewpoint.set_position(spawn_point(&self.grid));
        Ok(())
    }
}

/// Centre of the open cell nearest the middle of the map, or the middle of
/// the map itself when every cell is a wall.
fn spawn_point(grid: &Grid) -> DVec2 {
    match grid.nearest_empty_cell_to_center() {
        Some(cell) => grid.cell_center(cell),
        None => {
            log::debug!("no open cell to spawn in, using the map centre");
            grid.info().screen_center()
        }
    }
}
