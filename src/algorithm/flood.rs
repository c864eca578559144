//! Jump flooding propagation of seed ownership
//!
//! Repeatedly compares each cell against neighbors at decreasing Chebyshev
//! strides, copying the nearer seed's color and identity forward until every
//! reachable cell has converged to its approximately nearest seed.

use crate::algorithm::schedule::StepSchedule;
use crate::math::distance::squared_distance;
use crate::spatial::{Cell, Grid, Position};

/// Run the full jump flooding schedule over the grid
///
/// After this returns, every cell is assigned provided at least one seed was
/// scattered. Ownership is approximate: jump flooding can miss the true
/// nearest seed in adversarial configurations, which is an accepted property
/// of the algorithm.
pub fn flood(grid: &mut Grid) {
    for step in StepSchedule::new(grid.width()) {
        flood_pass(grid, step);
    }
}

/// Run a single flooding pass at a fixed step size
///
/// Scans the grid in row-major order and, for each cell, examines the nine
/// samples at Chebyshev offsets of `{-step, 0, +step}` per axis, skipping
/// offsets that fall outside the raster. Updates land immediately in the
/// single buffer: later comparisons within the same pass observe earlier
/// writes from that pass. Reordering the scan or double-buffering would
/// change which (equally valid) approximation is produced.
pub fn flood_pass(grid: &mut Grid, step: usize) {
    let step = step as i32;
    let width = grid.width() as i32;
    let height = grid.height() as i32;

    for y in 0..height {
        for x in 0..width {
            let here = Position::new(x, y);

            for dx in [-step, 0, step] {
                if x + dx < 0 || x + dx >= width {
                    continue;
                }
                for dy in [-step, 0, step] {
                    if y + dy < 0 || y + dy >= height {
                        continue;
                    }
                    if let Some(&neighbor) = grid.cell(here.offset(dx, dy)) {
                        adopt_if_nearer(grid, here, &neighbor);
                    }
                }
            }
        }
    }
}

// One neighbor comparison, applied in place.
fn adopt_if_nearer(grid: &mut Grid, here: Position, neighbor: &Cell) {
    let Some(current) = grid.cell(here).copied() else {
        return;
    };

    // An unassigned cell takes whatever the neighbor claims.
    if current.owner.is_none() && neighbor.owner.is_some() {
        if let Some(cell) = grid.cell_mut(here) {
            cell.adopt(neighbor);
        }
    }

    // Re-read: the adoption above may just have assigned an owner.
    let Some(updated) = grid.cell(here).copied() else {
        return;
    };

    if let (Some(held), Some(candidate)) = (updated.owner, neighbor.owner) {
        if squared_distance(here, candidate) < squared_distance(here, held) {
            if let Some(cell) = grid.cell_mut(here) {
                cell.adopt(neighbor);
            }
        }
    }
}
