//! Randomized seed placement on a jittered lattice

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Grid, Position};
use rand::{Rng, rngs::StdRng};

/// Scatter seed cells across the grid on a jittered lattice
///
/// Walks an approximately `lattice × lattice` grid of sample points starting
/// one step in from the origin, displacing each point by an independent
/// per-axis jitter. Each chosen cell receives a uniformly random color and
/// claims itself as owner; every other cell stays unassigned. The jitter is
/// non-positive and strictly smaller than one lattice step, so seeds stay in
/// bounds and no two sample points collide.
///
/// Returns the number of seeds placed.
///
/// # Errors
///
/// Returns an error if the lattice density leaves no room for sample points
/// (fewer than two per axis, or a lattice step of zero pixels).
pub fn scatter_seeds(grid: &mut Grid, lattice: usize, rng: &mut StdRng) -> Result<usize> {
    let step_x = grid.width() / lattice.max(1);
    let step_y = grid.height() / lattice.max(1);

    if lattice < 2 || step_x == 0 || step_y == 0 {
        return Err(invalid_parameter(
            "lattice",
            &lattice,
            &format!(
                "grid of {}x{} leaves no jittered lattice points",
                grid.width(),
                grid.height()
            ),
        ));
    }

    let mut placed = 0;
    for x in (step_x..grid.width()).step_by(step_x) {
        for y in (step_y..grid.height()).step_by(step_y) {
            let pos = Position::new(
                x as i32 + jitter(step_x, rng),
                y as i32 + jitter(step_y, rng),
            );
            let color = rng.random::<[u8; 3]>();
            if let Some(cell) = grid.cell_mut(pos) {
                cell.color = color;
                cell.owner = Some(pos);
                placed += 1;
            }
        }
    }

    Ok(placed)
}

// Sign is either zero or negation, magnitude strictly below one lattice step.
fn jitter(step: usize, rng: &mut StdRng) -> i32 {
    let magnitude = if step > 1 {
        rng.random_range(0..step - 1) as i32
    } else {
        0
    };
    if rng.random::<bool>() { -magnitude } else { 0 }
}
