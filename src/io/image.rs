//! PNG export of the finished raster

use crate::io::error::{GenerationError, Result};
use crate::spatial::Grid;
use image::{Rgb, RgbImage};

/// Export the grid as a PNG image
///
/// Maps each cell's channels straight into the buffer; the owner fields play
/// no part in encoding. Parent directories are created on demand.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, output_path: &str) -> Result<()> {
    let mut img = RgbImage::new(grid.width() as u32, grid.height() as u32);

    for pos in grid.positions() {
        if let Some(cell) = grid.cell(pos) {
            img.put_pixel(pos.x as u32, pos.y as u32, Rgb(cell.color));
        }
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
