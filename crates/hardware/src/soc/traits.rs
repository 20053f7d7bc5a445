//! Clocked memory trait.
//!
//! This module defines the `SyncMemory` trait implemented by anything the tick driver can
//! clock. It provides:
//! 1. **Identification:** `geometry` and `read_mode` so the driver can size images and
//!    account for read-port activity.
//! 2. **Clocking:** `tick`, one state transition per clock edge.
//! 3. **Access:** Side-effect-free `read` of committed data.
//! 4. **Lifecycle:** `preload` before the clock starts and an asynchronous `reset`.
//!
//! The behavioral [`MemoryModel`](crate::soc::memory::MemoryModel) is the in-crate
//! implementor; tests substitute a mock to check the driver's sequencing.

use crate::common::{Geometry, MemError};
use crate::config::ReadMode;
use crate::sim::loader::MemoryImage;
use crate::soc::signals::{TickOutcome, TickSignals};

/// A memory with synchronous writes that can be advanced one clock edge at a time.
pub trait SyncMemory {
    /// Returns the address and word widths of this memory.
    fn geometry(&self) -> Geometry;

    /// Returns whether the registered read port is clocked.
    fn read_mode(&self) -> ReadMode;

    /// Applies one clock edge with the given input signals.
    ///
    /// An `Err` is a fatal fault (e.g. a commit to an address beyond the depth) and the
    /// run should be aborted.
    fn tick(&mut self, signals: &TickSignals) -> Result<TickOutcome, MemError>;

    /// Reads committed data at `address`. Never observes a pending write.
    fn read(&self, address: u64) -> Result<u64, MemError>;

    /// Replaces storage contents with `image`, bypassing the write pipeline.
    fn preload(&mut self, image: &MemoryImage) -> Result<(), MemError>;

    /// Clears storage and drops any pending write without waiting for an edge.
    fn reset(&mut self);
}
