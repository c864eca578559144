//! Step schedule for jump flooding passes

/// Iterator over the decreasing step sizes of a jump flooding run
///
/// Yields a full-resolution step of 1 first, then `width / kd` for a divisor
/// `kd` that doubles from 2 while it does not exceed the width. This is the
/// classic large-to-small JFA offset sequence with an extra step-1 refinement
/// pass prepended (the 1+JFA variant).
#[derive(Clone, Debug)]
pub struct StepSchedule {
    width: usize,
    divisor: usize,
}

impl StepSchedule {
    /// Create the schedule for a raster of the given width
    pub const fn new(width: usize) -> Self {
        Self { width, divisor: 1 }
    }

    /// Number of passes the schedule produces for the given width
    ///
    /// Used to size progress displays and frame captures before running.
    pub const fn pass_count(width: usize) -> usize {
        let mut divisor = 1;
        let mut passes = 0;
        while divisor <= width {
            passes += 1;
            divisor *= 2;
        }
        passes
    }
}

impl Iterator for StepSchedule {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.divisor > self.width {
            return None;
        }
        let step = if self.divisor == 1 {
            1
        } else {
            self.width / self.divisor
        };
        self.divisor *= 2;
        Some(step)
    }
}
