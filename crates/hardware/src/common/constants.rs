//! Global Model Constants.
//!
//! This module defines limits and defaults shared across the model. It includes:
//! 1. **Width Limits:** Bounds on the address and word widths a model may be built with.
//! 2. **Image Format:** Characters accepted in a bit-string memory image.
//! 3. **Defaults:** The geometry used when no configuration is supplied.

/// Widest word a cell can hold, in bits.
///
/// Words are stored as `u64`, so anything wider cannot be represented.
pub const MAX_WORD_WIDTH: u32 = 64;

/// Widest address bus a model may be built with, in bits.
///
/// Storage is allocated eagerly, so this caps a model at 16 Mi cells.
pub const MAX_ADDRESS_WIDTH: u32 = 24;

/// Default address width (256 cells).
pub const DEFAULT_ADDRESS_WIDTH: u32 = 8;

/// Default word width (one byte per cell).
pub const DEFAULT_WORD_WIDTH: u32 = 8;

/// Number of cycles reset is held by default before the first request.
pub const DEFAULT_RESET_CYCLES: u64 = 2;

/// Digit representing a cleared bit in an image record.
pub const IMAGE_ZERO: char = '0';

/// Digit representing a set bit in an image record.
pub const IMAGE_ONE: char = '1';
