//! Common type tests.
//!
//! This module contains unit tests for the geometry value type and the error enum.


/// Unit tests for width validation and derived sizes.
pub mod geometry;
