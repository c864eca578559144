//! Spatial data structures for the pixel raster
//!
//! This module contains the grid data model shared by every pipeline stage:
//! - Grid coordinates and per-cell state
//! - Dense row-major cell storage with bounds-checked access

/// Grid, cell, and position types
pub mod grid;

pub use grid::{Cell, Grid, Position};
