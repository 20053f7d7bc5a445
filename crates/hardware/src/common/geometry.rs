//! Memory geometry.
//!
//! A [`Geometry`] fixes the shape of a memory at construction time: how many
//! address bits select a cell and how many bits each cell holds. It provides:
//! 1. **Validation:** Rejects widths the model cannot represent.
//! 2. **Derived Sizes:** Depth (`2^address_width`) and the word mask.
//! 3. **Bus Truncation:** Reduces a wide bus value to its low `word_width` bits.

use serde::{Deserialize, Serialize};

use super::constants::{MAX_ADDRESS_WIDTH, MAX_WORD_WIDTH};
use super::error::MemError;

/// Address and word widths of a memory, in bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Geometry {
    address_width: u32,
    word_width: u32,
}

impl Geometry {
    /// Creates a geometry after checking both widths.
    ///
    /// # Arguments
    ///
    /// * `address_width` - Number of address bits, `0..=MAX_ADDRESS_WIDTH`.
    /// * `word_width` - Number of data bits per cell, `1..=MAX_WORD_WIDTH`.
    ///
    /// # Returns
    ///
    /// The geometry, or `MemError::InvalidGeometry` if either width is out of bounds.
    pub fn new(address_width: u32, word_width: u32) -> Result<Self, MemError> {
        if address_width > MAX_ADDRESS_WIDTH || word_width == 0 || word_width > MAX_WORD_WIDTH {
            return Err(MemError::InvalidGeometry {
                address_width,
                word_width,
            });
        }
        Ok(Self {
            address_width,
            word_width,
        })
    }

    /// Number of address bits.
    #[inline]
    pub const fn address_width(&self) -> u32 {
        self.address_width
    }

    /// Number of data bits per cell.
    #[inline]
    pub const fn word_width(&self) -> u32 {
        self.word_width
    }

    /// Number of addressable cells.
    #[inline]
    pub const fn depth(&self) -> usize {
        1usize << self.address_width
    }

    /// Mask selecting the low `word_width` bits of a bus value.
    #[inline]
    pub const fn word_mask(&self) -> u64 {
        if self.word_width >= u64::BITS {
            u64::MAX
        } else {
            (1u64 << self.word_width) - 1
        }
    }

    /// Keeps only the significant bits of a data bus value.
    #[inline]
    pub const fn truncate(&self, data: u64) -> u64 {
        data & self.word_mask()
    }

    /// Returns `true` if `address` selects a cell.
    #[inline]
    pub const fn contains(&self, address: u64) -> bool {
        address < self.depth() as u64
    }

    /// Converts `address` to a cell index, or fails with `AddressOutOfRange`.
    pub fn index(&self, address: u64) -> Result<usize, MemError> {
        if self.contains(address) {
            Ok(address as usize)
        } else {
            Err(MemError::AddressOutOfRange {
                address,
                depth: self.depth(),
            })
        }
    }
}
