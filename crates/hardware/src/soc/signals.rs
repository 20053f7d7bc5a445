//! Per-cycle signal bundles.
//!
//! This module defines the values that cross the model boundary on each clock edge. It provides:
//! 1. **Inputs:** [`TickSignals`], the reset/request/address/data tuple sampled at an edge.
//! 2. **Transient State:** [`WriteRequest`], a write latched on one edge and committed on the next.
//! 3. **Outputs:** [`TickOutcome`], what the edge did, so busy-drops are visible to the driver.

use serde::{Deserialize, Serialize};

/// A write accepted by the model and waiting for its commit edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WriteRequest {
    /// Target address.
    pub address: u64,
    /// Data, already truncated to the word width.
    pub data: u64,
}

/// Signals sampled by the model at one clock edge.
///
/// Every field defaults to deasserted/zero when deserialized, so a stimulus file
/// only has to name the signals it drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickSignals {
    /// Synchronous clear; dominates every other input.
    pub reset: bool,
    /// Write request strobe.
    pub write_request: bool,
    /// Write address.
    pub address: u64,
    /// Write data bus; only the low `word_width` bits are significant.
    pub data: u64,
    /// Registered read port enable.
    pub read_enable: bool,
    /// Registered read port address.
    pub read_address: u64,
}

impl TickSignals {
    /// All signals deasserted.
    pub const fn idle() -> Self {
        Self {
            reset: false,
            write_request: false,
            address: 0,
            data: 0,
            read_enable: false,
            read_address: 0,
        }
    }

    /// Reset asserted, nothing else driven.
    pub const fn reset() -> Self {
        Self {
            reset: true,
            ..Self::idle()
        }
    }

    /// A write request for `data` at `address`.
    pub const fn write(address: u64, data: u64) -> Self {
        Self {
            write_request: true,
            address,
            data,
            ..Self::idle()
        }
    }

    /// Enables the registered read port at `address` in addition to the current signals.
    #[must_use]
    pub const fn with_read(self, address: u64) -> Self {
        Self {
            read_enable: true,
            read_address: address,
            ..self
        }
    }
}

/// Effect of a single clock edge on the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing latched or committed.
    Idle,
    /// Storage cleared; `discarded` is the write that was pending, if any.
    Reset {
        /// Write dropped before its commit edge.
        discarded: Option<WriteRequest>,
    },
    /// A write was accepted and will commit on the next edge.
    Latched(WriteRequest),
    /// The pending write reached storage.
    Committed {
        /// Write that was committed.
        request: WriteRequest,
        /// A request presented on this edge and ignored because the port was busy.
        dropped: Option<WriteRequest>,
    },
}

impl TickOutcome {
    /// Returns the committed write, if this edge committed one.
    pub const fn committed(&self) -> Option<WriteRequest> {
        match self {
            Self::Committed { request, .. } => Some(*request),
            _ => None,
        }
    }
}
