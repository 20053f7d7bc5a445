//! Synchronous RAM behavioral model.
//!
//! This module implements a single-port RAM with a one-cycle write commit. It models:
//! 1. **Write Pipeline:** A request is latched on one edge and committed on the next
//!    (`Idle` -> `WritePending` -> `Idle`).
//! 2. **Reset Dominance:** Reset clears storage and drops a latched-but-uncommitted write.
//! 3. **Busy Drop:** A request presented while a write is pending is ignored; the pending
//!    commit always wins and no queue of writes is kept.
//! 4. **Reads:** Combinational reads see committed data only. An optional registered read
//!    port samples storage at the edge, before that edge's commit.

use tracing::{debug, trace};

use super::storage::MemoryStorage;
use crate::common::{Geometry, MemError};
use crate::config::{MemoryConfig, ReadMode};
use crate::sim::loader::MemoryImage;
use crate::soc::signals::{TickOutcome, TickSignals, WriteRequest};
use crate::soc::traits::SyncMemory;

/// State of the write pipeline between edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteState {
    /// No write in flight; a request on the next edge will be latched.
    #[default]
    Idle,
    /// A write was latched and commits on the next edge.
    WritePending,
}

/// Behavioral model of a synchronous-write RAM.
#[derive(Clone, Debug)]
pub struct MemoryModel {
    storage: MemoryStorage,
    pending: Option<WriteRequest>,
    read_mode: ReadMode,
    /// Output register of the registered read port.
    read_data: u64,
}

impl MemoryModel {
    /// Creates a model with all cells `Unwritten` and the write pipeline idle.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            storage: MemoryStorage::new(geometry),
            pending: None,
            read_mode: ReadMode::Combinational,
            read_data: 0,
        }
    }

    /// Builds a model from the `memory` configuration section.
    ///
    /// # Arguments
    ///
    /// * `config` - Widths and read mode.
    ///
    /// # Returns
    ///
    /// The model, or `InvalidGeometry` if the widths cannot be modeled.
    pub fn from_config(config: &MemoryConfig) -> Result<Self, MemError> {
        let geometry = Geometry::new(config.address_width, config.word_width)?;
        Ok(Self::new(geometry).with_read_mode(config.read_mode))
    }

    /// Selects whether the registered read port is clocked.
    #[must_use]
    pub const fn with_read_mode(mut self, read_mode: ReadMode) -> Self {
        self.read_mode = read_mode;
        self
    }

    /// Current write pipeline state.
    pub const fn state(&self) -> WriteState {
        if self.pending.is_some() {
            WriteState::WritePending
        } else {
            WriteState::Idle
        }
    }

    /// The latched write awaiting its commit edge, if any.
    pub const fn pending_write(&self) -> Option<WriteRequest> {
        self.pending
    }

    /// Read-only view of the backing storage.
    pub const fn storage(&self) -> &MemoryStorage {
        &self.storage
    }

    /// Data presented by the registered read port.
    ///
    /// Holds the word sampled at the last edge with `read_enable` asserted, or zero
    /// after reset. Always zero in combinational mode.
    pub const fn registered_read(&self) -> u64 {
        self.read_data
    }

    fn request_from(&self, signals: &TickSignals) -> WriteRequest {
        WriteRequest {
            address: signals.address,
            data: self.storage.geometry().truncate(signals.data),
        }
    }
}

impl SyncMemory for MemoryModel {
    fn geometry(&self) -> Geometry {
        self.storage.geometry()
    }

    fn read_mode(&self) -> ReadMode {
        self.read_mode
    }

    fn tick(&mut self, signals: &TickSignals) -> Result<TickOutcome, MemError> {
        if signals.reset {
            let discarded = self.pending.take();
            self.storage.clear();
            self.read_data = 0;
            debug!(?discarded, "reset");
            return Ok(TickOutcome::Reset { discarded });
        }

        if self.read_mode == ReadMode::Registered && signals.read_enable {
            self.read_data = self.storage.read(signals.read_address)?;
        }

        if let Some(request) = self.pending.take() {
            self.storage.write(request.address, request.data)?;
            let dropped = signals
                .write_request
                .then(|| self.request_from(signals));
            debug!(
                address = request.address,
                data = request.data,
                ?dropped,
                "commit"
            );
            return Ok(TickOutcome::Committed { request, dropped });
        }

        if signals.write_request {
            let request = self.request_from(signals);
            self.pending = Some(request);
            debug!(address = request.address, data = request.data, "latch");
            return Ok(TickOutcome::Latched(request));
        }

        trace!("idle");
        Ok(TickOutcome::Idle)
    }

    fn read(&self, address: u64) -> Result<u64, MemError> {
        self.storage.read(address)
    }

    fn preload(&mut self, image: &MemoryImage) -> Result<(), MemError> {
        let geometry = self.storage.geometry();
        if image.geometry() != geometry {
            return Err(MemError::InvalidGeometry {
                address_width: image.geometry().address_width(),
                word_width: image.geometry().word_width(),
            });
        }
        self.storage.fill(image.records());
        debug!(records = image.records().len(), "preload");
        Ok(())
    }

    fn reset(&mut self) {
        self.pending = None;
        self.storage.clear();
        self.read_data = 0;
    }
}
