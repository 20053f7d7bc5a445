//! Synchronous Memory.
//!
//! This module implements the memory double driven by the tick driver. It provides:
//! 1. **Storage:** Fixed-depth array of `Unwritten | Value(word)` cells.
//! 2. **Model:** The write-latency state machine and read path over that storage.

/// Cell array owned by the model.
pub mod storage;

/// Write state machine and read ports.
pub mod model;

pub use model::{MemoryModel, WriteState};
pub use storage::{Cell, MemoryStorage};
