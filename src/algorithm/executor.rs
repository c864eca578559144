//! Pipeline configuration and orchestration
//!
//! Validates generation parameters, owns the grid and the seeded RNG, and
//! runs the three stages to completion in order.

use crate::algorithm::schedule::StepSchedule;
use crate::algorithm::{borders, flood, scatter};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_LATTICE_DENSITY, DEFAULT_WIDTH, MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Grid;
use rand::{SeedableRng, rngs::StdRng};

/// Parameters controlling raster dimensions and seed placement
#[derive(Clone, Copy, Debug)]
pub struct PipelineConfig {
    /// Raster width in pixels
    pub width: usize,
    /// Raster height in pixels
    pub height: usize,
    /// Seed lattice density: approximately `lattice × lattice` sample points
    pub lattice: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            lattice: DEFAULT_LATTICE_DENSITY,
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration before any grid is allocated
    ///
    /// # Errors
    ///
    /// Returns an error when a dimension is zero or exceeds the maximum, or
    /// when the lattice density cannot produce at least one sample point per
    /// axis (`lattice < 2`, or a lattice step of zero pixels).
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.width > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "width",
                &self.width,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
        if self.height == 0 || self.height > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "height",
                &self.height,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
        if self.lattice < 2 {
            return Err(invalid_parameter(
                "lattice",
                &self.lattice,
                &"at least two sample points per axis are required",
            ));
        }
        if self.width / self.lattice == 0 || self.height / self.lattice == 0 {
            return Err(invalid_parameter(
                "lattice",
                &self.lattice,
                &format!(
                    "lattice step degenerates to zero for a {}x{} raster",
                    self.width, self.height
                ),
            ));
        }
        Ok(())
    }
}

/// Pipeline checkpoint reported to execution observers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Seeds have been scattered
    Seeded,
    /// One flood pass has completed
    FloodPass {
        /// Chebyshev offset used by the completed pass
        step: usize,
    },
    /// Borders and corner junctions have been rendered
    Bordered,
}

/// Runs the generation pipeline over an exclusively owned grid
///
/// Created from a validated configuration and a seed; the RNG is owned and
/// threaded explicitly into the scatter stage so fixed-seed runs reproduce
/// exactly.
pub struct VoronoiPipeline {
    grid: Grid,
    rng: StdRng,
    config: PipelineConfig,
}

impl VoronoiPipeline {
    /// Create a pipeline over a freshly zeroed grid
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration fails validation.
    pub fn new(config: PipelineConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.width, config.height),
            rng: StdRng::seed_from_u64(seed),
            config,
        })
    }

    /// Number of flood passes the schedule will run
    pub const fn pass_count(&self) -> usize {
        StepSchedule::pass_count(self.config.width)
    }

    /// Run scatter, flood, and border rendering to completion
    ///
    /// # Errors
    ///
    /// Returns an error when seed scattering rejects the lattice density.
    pub fn execute(&mut self) -> Result<()> {
        self.execute_with(|_, _| {})
    }

    /// Run the pipeline, reporting each checkpoint to the observer
    ///
    /// The observer sees the grid after seeding, after every flood pass, and
    /// after border rendering, in that order.
    ///
    /// # Errors
    ///
    /// Returns an error when seed scattering rejects the lattice density.
    pub fn execute_with<F>(&mut self, mut observer: F) -> Result<()>
    where
        F: FnMut(Stage, &Grid),
    {
        scatter::scatter_seeds(&mut self.grid, self.config.lattice, &mut self.rng)?;
        observer(Stage::Seeded, &self.grid);

        for step in StepSchedule::new(self.config.width) {
            flood::flood_pass(&mut self.grid, step);
            observer(Stage::FloodPass { step }, &self.grid);
        }

        borders::render_borders(&mut self.grid);
        observer(Stage::Bordered, &self.grid);

        Ok(())
    }

    /// The finished (or in-progress) raster
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the pipeline, yielding the raster for encoding
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
