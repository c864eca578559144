//! Command-line interface for Voronoi raster generation

use crate::algorithm::executor::{PipelineConfig, Stage, VoronoiPipeline};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_LATTICE_DENSITY, DEFAULT_WIDTH, FINAL_FRAME_HOLD, GIF_FRAME_DELAY_MS,
};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::ppm::{PpmFormat, write_ppm};
use crate::io::progress::ProgressReporter;
use crate::io::visualization::VisualizationCapture;
use clap::Parser;
use rand::Rng;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "jumpflood")]
#[command(
    author,
    version,
    about = "Generate Voronoi diagram rasters using jump flooding"
)]
/// Command-line arguments for the raster generation tool
pub struct Cli {
    /// Raster width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Raster height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Seed lattice density (approximately lattice x lattice seeds)
    #[arg(short, long, default_value_t = DEFAULT_LATTICE_DENSITY)]
    pub lattice: usize,

    /// Random seed for reproducible generation (OS entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output file (stdout when omitted; a .png extension selects PNG)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit human-readable P3 instead of binary P6
    #[arg(short, long)]
    pub plain: bool,

    /// Export an animated GIF of flood propagation to the given path
    #[arg(short, long, value_name = "GIF")]
    pub visualize: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// The PPM variant selected by the format flag
    pub const fn ppm_format(&self) -> PpmFormat {
        if self.plain {
            PpmFormat::Plain
        } else {
            PpmFormat::Binary
        }
    }

    /// The pipeline configuration described by the arguments
    pub const fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            width: self.width,
            height: self.height,
            lattice: self.lattice,
        }
    }
}

/// Orchestrates one generation run from arguments to encoded output
pub struct RenderJob {
    cli: Cli,
    progress: Option<ProgressReporter>,
}

impl RenderJob {
    /// Create a render job from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress: None,
        }
    }

    /// Run the pipeline and encode the result
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation, generation, or any
    /// output encoding step fails.
    pub fn run(&mut self) -> Result<()> {
        let config = self.cli.pipeline_config();
        let seed = self.cli.seed.unwrap_or_else(|| rand::rng().random());
        let mut pipeline = VoronoiPipeline::new(config, seed)?;

        if self.cli.should_show_progress() {
            self.progress = Some(ProgressReporter::new(pipeline.pass_count()));
        }

        let mut capture = self.cli.visualize.as_ref().map(|_| {
            // Seeded state + one frame per flood pass + bordered final state
            VisualizationCapture::new(config.width, config.height, pipeline.pass_count() + 2)
        });

        let progress = &self.progress;
        pipeline.execute_with(|stage, grid| {
            if let Stage::FloodPass { step } = stage {
                if let Some(pm) = progress {
                    pm.flood_pass_done(step);
                }
            }
            if let Some(cap) = capture.as_mut() {
                cap.capture(grid);
            }
        })?;

        if let Some(pm) = &self.progress {
            pm.encoding();
        }

        if let (Some(cap), Some(path)) = (&capture, &self.cli.visualize) {
            cap.export_gif(path_str(path)?, GIF_FRAME_DELAY_MS, FINAL_FRAME_HOLD)?;
        }

        self.encode(pipeline.grid())?;

        if let Some(pm) = &self.progress {
            pm.finish();
        }

        Ok(())
    }

    fn encode(&self, grid: &crate::spatial::Grid) -> Result<()> {
        match &self.cli.output {
            Some(path) if path.extension().and_then(|s| s.to_str()) == Some("png") => {
                export_grid_as_png(grid, path_str(path)?)
            }
            Some(path) => {
                let file =
                    std::fs::File::create(path).map_err(|e| GenerationError::FileSystem {
                        path: path.clone(),
                        operation: "create file",
                        source: e,
                    })?;
                let mut sink = BufWriter::new(file);
                write_ppm(grid, self.cli.ppm_format(), &mut sink)
            }
            None => {
                let stdout = std::io::stdout();
                let mut sink = BufWriter::new(stdout.lock());
                write_ppm(grid, self.cli.ppm_format(), &mut sink)
            }
        }
    }
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| invalid_parameter("output", &path.display(), &"path is not valid UTF-8"))
}
