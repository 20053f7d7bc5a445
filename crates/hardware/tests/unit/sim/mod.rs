//! Simulation tests.
//!
//! This module organizes tests for the image loader, the tick driver and stimulus files.


/// Image parsing, file loading and rendering.
pub mod loader;

/// Stimulus file parsing.
pub mod stimulus;
