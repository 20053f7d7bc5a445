//! Synchronous RAM behavioral model.
//!
//! This crate implements a cycle-accurate stand-in for a single-port on-chip memory, for use
//! in hardware test benches. It provides:
//! 1. **Storage:** A fixed-depth array of cells that are either `Unwritten` (read as zero) or
//!    hold a committed word.
//! 2. **Model:** A one-cycle pipelined write (latch, then commit), reset dominance, busy-drop
//!    of overlapping requests, and combinational or registered reads.
//! 3. **Loader:** Preload from a line-oriented bit-string image.
//! 4. **Simulation:** A tick driver that owns the model, sequences reset and stimulus, and
//!    collects statistics.
//!
//! ```
//! use syncram_core::{Geometry, MemoryModel, TickDriver, TickSignals};
//!
//! let model = MemoryModel::new(Geometry::new(4, 8).unwrap());
//! let mut driver = TickDriver::new(model);
//! driver.reset_pulse(1).unwrap();
//!
//! driver.tick(TickSignals::write(3, 200)).unwrap();
//! assert_eq!(driver.read(3).unwrap(), 0);
//! driver.tick(TickSignals::idle()).unwrap();
//! assert_eq!(driver.read(3).unwrap(), 200);
//! ```

/// Shared types: geometry, constants and errors.
pub mod common;
/// Configuration (widths, preload image, run settings).
pub mod config;
/// Tick driver, image loader and stimulus files.
pub mod sim;
/// Memory model, storage and the clocked-memory trait.
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Address/word width description; construct with `Geometry::new`.
pub use crate::common::{Geometry, MemError};
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Clock/reset sequencer owning one memory.
pub use crate::sim::TickDriver;
/// Behavioral synchronous RAM.
pub use crate::soc::{MemoryModel, SyncMemory, TickOutcome, TickSignals, WriteRequest};
