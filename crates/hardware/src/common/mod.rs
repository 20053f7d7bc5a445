//! Common utilities and types used throughout the memory model.
//!
//! This module provides the building blocks shared by the storage, the model and the loader.
//! It includes:
//! 1. **Constants:** Width limits, defaults and image digits.
//! 2. **Geometry:** Address/word widths and the values derived from them.
//! 3. **Error Handling:** The `MemError` type returned by every fallible operation.

/// Width limits and defaults.
pub mod constants;

/// Error type for loading, ticking and reading.
pub mod error;

/// Address/word width description.
pub mod geometry;

pub use error::MemError;
pub use geometry::Geometry;
