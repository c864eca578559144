//! Pipeline stages for Voronoi raster generation
//!
//! The stages run strictly in sequence over the shared grid: seed scattering,
//! jump flooding propagation, then border rendering.

/// Border and corner-junction rendering
pub mod borders;
/// Pipeline configuration and orchestration
pub mod executor;
/// Jump flooding propagation of seed ownership
pub mod flood;
/// Randomized seed placement
pub mod scatter;
/// Jump flooding step schedule
pub mod schedule;
/// Fixed-capacity distinct-owner tracking
pub mod seedset;
