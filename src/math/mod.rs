//! Mathematical utilities
//!
//! Currently the squared-distance metric used by flood propagation.

/// Distance metric for seed comparisons
pub mod distance;
