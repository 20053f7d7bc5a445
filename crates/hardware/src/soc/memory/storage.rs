//! Cell Storage.
//!
//! This module provides the backing array of a memory model. It provides:
//! 1. **Tagged Cells:** Each cell is either `Unwritten` or holds a committed word.
//! 2. **Fixed Depth:** The array is sized once from a [`Geometry`] and never resized.
//! 3. **Zero-Read Semantics:** Reading an `Unwritten` cell yields zero, like post-reset hardware.
//!
//! Mutation is crate-private: only the owning model (and, while only reset edges have been applied, the
//! image preload path) may change a cell.

use crate::common::{Geometry, MemError};

/// Contents of a single storage location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Never committed to since construction or the last reset.
    #[default]
    Unwritten,
    /// A committed word, already truncated to the word width.
    Value(u64),
}

impl Cell {
    /// Word visible to a reader; `Unwritten` reads as zero.
    #[inline]
    pub const fn word(self) -> u64 {
        match self {
            Self::Unwritten => 0,
            Self::Value(word) => word,
        }
    }

    /// Returns `true` if the cell holds a committed word.
    #[inline]
    pub const fn is_written(self) -> bool {
        matches!(self, Self::Value(_))
    }
}

/// Fixed-depth array of [`Cell`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryStorage {
    geometry: Geometry,
    cells: Vec<Cell>,
}

impl MemoryStorage {
    /// Allocates `geometry.depth()` cells, all `Unwritten`.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            cells: vec![Cell::Unwritten; geometry.depth()],
        }
    }

    /// Shape of this storage.
    #[inline]
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Number of cells.
    #[inline]
    pub fn depth(&self) -> usize {
        self.cells.len()
    }

    /// Returns the raw cell at `address`.
    ///
    /// # Arguments
    ///
    /// * `address` - Cell address; must be below `depth()`.
    ///
    /// # Returns
    ///
    /// The cell, or `MemError::AddressOutOfRange`.
    pub fn cell(&self, address: u64) -> Result<Cell, MemError> {
        let index = self.geometry.index(address)?;
        Ok(self.cells[index])
    }

    /// Reads the word at `address`; `Unwritten` cells read as zero.
    pub fn read(&self, address: u64) -> Result<u64, MemError> {
        self.cell(address).map(Cell::word)
    }

    /// Number of cells holding a committed word.
    pub fn written_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_written()).count()
    }

    /// Iterates `(address, word)` over written cells in ascending address order.
    pub fn written_cells(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| match cell {
                Cell::Value(word) => Some((i as u64, *word)),
                Cell::Unwritten => None,
            })
    }

    /// Iterates every cell in ascending address order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Stores `word` (truncated to the word width) at `address`.
    pub(crate) fn write(&mut self, address: u64, word: u64) -> Result<(), MemError> {
        let index = self.geometry.index(address)?;
        self.cells[index] = Cell::Value(self.geometry.truncate(word));
        Ok(())
    }

    /// Returns every cell to `Unwritten`.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Unwritten);
    }

    /// Replaces the contents with `records`, address `i` taking `records[i]`.
    ///
    /// Cells beyond `records.len()` become `Unwritten`; records beyond the depth are ignored.
    pub(crate) fn fill(&mut self, records: &[Option<u64>]) {
        self.clear();
        for (cell, record) in self.cells.iter_mut().zip(records) {
            if let Some(word) = record {
                *cell = Cell::Value(self.geometry.truncate(*word));
            }
        }
    }
}
