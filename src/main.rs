//! CLI entry point for the jump flooding Voronoi raster generator

use clap::Parser;
use jumpflood::io::cli::{Cli, RenderJob};

fn main() -> jumpflood::Result<()> {
    let cli = Cli::parse();
    let mut job = RenderJob::new(cli);
    job.run()
}
