//! Frame capture and GIF export of flood propagation
//!
//! Snapshots the grid after seeding and after every flood pass, then encodes
//! the sequence as an animated GIF. A jump flooding pass rewrites most of the
//! raster, so capture is per pass rather than per cell update.

use crate::io::configuration::{UNASSIGNED_FRAME_COLOR, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::Grid;
use image::{Frame, Rgba, RgbaImage};

/// Captures whole-grid snapshots for animation export
pub struct VisualizationCapture {
    frames: Vec<RgbaImage>,
    width: u32,
    height: u32,
}

impl VisualizationCapture {
    /// Create a capture for a raster of the given dimensions
    ///
    /// `expected_frames` sizes the frame store up front; captures beyond it
    /// still succeed.
    pub fn new(width: usize, height: usize, expected_frames: usize) -> Self {
        Self {
            frames: Vec::with_capacity(expected_frames),
            width: width as u32,
            height: height as u32,
        }
    }

    /// Snapshot the current grid state as one animation frame
    ///
    /// Unassigned cells render as a fixed neutral gray so the early frames
    /// show the flood front advancing over unclaimed territory.
    pub fn capture(&mut self, grid: &Grid) {
        let mut img = RgbaImage::new(self.width, self.height);

        for pos in grid.positions() {
            if let Some(cell) = grid.cell(pos) {
                let rgba = if cell.owner.is_some() {
                    [cell.color[0], cell.color[1], cell.color[2], 255]
                } else {
                    UNASSIGNED_FRAME_COLOR
                };
                img.put_pixel(pos.x as u32, pos.y as u32, Rgba(rgba));
            }
        }

        self.frames.push(img);
    }

    /// Number of captured frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as an animated GIF
    ///
    /// The requested delay is clamped to the minimum that viewers reliably
    /// honor, and the final frame is held longer for better visibility.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        output_path: &str,
        frame_delay_ms: u32,
        final_frame_hold: u32,
    ) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_parameter(
                "visualization",
                &output_path,
                &"no frames were captured before export",
            ));
        }

        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);

        let mut frames = Vec::with_capacity(self.frames.len() + 1);
        for img in &self.frames {
            frames.push(Frame::from_parts(
                img.clone(),
                0,
                0,
                image::Delay::from_numer_denom_ms(delay_ms, 1),
            ));
        }

        // Final frame displays longer for better visibility
        if let Some(last) = self.frames.last() {
            frames.push(Frame::from_parts(
                last.clone(),
                0,
                0,
                image::Delay::from_numer_denom_ms(delay_ms * final_frame_hold.max(1), 1),
            ));
        }

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| GenerationError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| GenerationError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }
}
