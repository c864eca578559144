//! Border and corner-junction rendering
//!
//! Post-pass over a fully propagated grid: every interior cell is recolored
//! based on how many distinct owners appear in its 3×3 neighborhood. Owner
//! fields are never modified, so the pass is idempotent.

use crate::algorithm::seedset::OwnerSet;
use crate::io::configuration::{BACKGROUND_COLOR, BORDER_COLOR, CORNER_COLOR};
use crate::spatial::{Grid, Position};

/// Recolor interior cells to show Voronoi cell boundaries and junctions
///
/// A cell whose owner differs from any of its eight immediate neighbors is a
/// border cell and turns white; otherwise it turns black. When three or more
/// distinct owners (the cell's own included) meet in the neighborhood, the
/// cell is a corner junction and that color overrides the border decision.
/// The outer 1-cell frame of the raster is never visited.
pub fn render_borders(grid: &mut Grid) {
    let width = grid.width() as i32;
    let height = grid.height() as i32;

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let here = Position::new(x, y);
            let own = grid.cell(here).and_then(|cell| cell.owner);

            let mut seen = OwnerSet::new();
            if let Some(owner) = own {
                seen.insert(owner);
            }

            let mut is_border = false;
            for dx in -1..=1 {
                for dy in -1..=1 {
                    let Some(neighbor) = grid.cell(here.offset(dx, dy)) else {
                        continue;
                    };
                    if neighbor.owner != own {
                        is_border = true;
                        if let Some(owner) = neighbor.owner {
                            seen.insert(owner);
                        }
                    }
                }
            }

            let color = if seen.len() > 2 {
                CORNER_COLOR
            } else if is_border {
                BORDER_COLOR
            } else {
                BACKGROUND_COLOR
            };

            if let Some(cell) = grid.cell_mut(here) {
                cell.color = color;
            }
        }
    }
}
