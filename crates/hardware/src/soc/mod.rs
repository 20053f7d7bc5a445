//! Clocked memory components.
//!
//! This module organizes the parts of the memory double: the per-edge signal bundles,
//! the trait the driver clocks, and the behavioral model with its storage.

/// Behavioral RAM model and its storage.
pub mod memory;

/// Per-edge input/output bundles.
pub mod signals;

/// Trait implemented by clockable memories.
pub mod traits;

pub use memory::MemoryModel;
pub use signals::{TickOutcome, TickSignals, WriteRequest};
pub use traits::SyncMemory;
