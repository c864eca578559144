//! Input/output operations and error handling
//!
//! Everything outside the core pipeline: command-line handling, constants,
//! the crate error type, raster encoders, and progress display.

/// Command-line interface and run orchestration
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types for generation and encoding
pub mod error;
/// PNG export
pub mod image;
/// PPM encoding and decoding
pub mod ppm;
/// Progress display
pub mod progress;
/// Flood-pass frame capture and GIF export
pub mod visualization;
