//! Tick Driver: owns one memory and clocks it.
//!
//! The driver is the only path by which a memory advances. It provides:
//! 1. **Preload:** Loads an image into the memory, permitted until the first edge without
//!    reset asserted, so an image applied after the power-on reset pulse survives it.
//! 2. **Clocking:** Applies one [`TickSignals`] bundle per edge, in strict order.
//! 3. **Sequences:** Reset pulses, idle cycles, two-edge writes and stimulus replay.
//! 4. **Accounting:** Cycle count and [`SimStats`].
//!
//! Any error from the memory aborts the operation that produced it; a fatal error leaves
//! the run in an undefined state and should end it.

use std::path::Path;

use tracing::{debug, error, info};

use crate::common::MemError;
use crate::config::{Config, MalformedRecordPolicy, ReadMode};
use crate::sim::loader::{self, LoadReport, MemoryImage};
use crate::soc::memory::{MemoryModel, MemoryStorage};
use crate::soc::signals::{TickOutcome, TickSignals};
use crate::soc::traits::SyncMemory;
use crate::stats::SimStats;

/// Clock and reset sequencer for a single memory.
#[derive(Debug)]
pub struct TickDriver<M: SyncMemory = MemoryModel> {
    memory: M,
    cycle: u64,
    /// Set by the first edge with reset deasserted.
    started: bool,
    stats: SimStats,
    trace_ticks: bool,
}

impl TickDriver<MemoryModel> {
    /// Builds a behavioral model from `config`, holds reset for `general.reset_cycles`
    /// edges, then applies the preload image, if any.
    ///
    /// # Arguments
    ///
    /// * `config` - Memory shape, reset length, optional image path and malformed-record policy.
    ///
    /// # Returns
    ///
    /// A driver just out of reset with the image as its power-on contents, or the first
    /// geometry/load error.
    pub fn from_config(config: &Config) -> Result<Self, MemError> {
        let memory = MemoryModel::from_config(&config.memory)?;
        let mut driver = Self::new(memory).with_tick_trace(config.general.trace_ticks);
        driver.reset_pulse(config.general.reset_cycles)?;
        if let Some(path) = &config.image.path {
            let _ = driver.preload(path, config.image.on_malformed_record)?;
        }
        Ok(driver)
    }

    /// Read-only view of the model's storage.
    pub const fn storage(&self) -> &MemoryStorage {
        self.memory.storage()
    }

    /// Data presented by the model's registered read port.
    pub const fn registered_read(&self) -> u64 {
        self.memory.registered_read()
    }
}

impl<M: SyncMemory> TickDriver<M> {
    /// Takes ownership of `memory`; no edge has been applied yet.
    pub fn new(memory: M) -> Self {
        Self {
            memory,
            cycle: 0,
            started: false,
            stats: SimStats::default(),
            trace_ticks: false,
        }
    }

    /// Emits an `info` event for every edge, idle ones included.
    #[must_use]
    pub fn with_tick_trace(mut self, enabled: bool) -> Self {
        self.trace_ticks = enabled;
        self
    }

    /// Loads the image at `path` into the memory.
    ///
    /// # Arguments
    ///
    /// * `path` - Bit-string image file.
    /// * `policy` - Handling of malformed records.
    ///
    /// # Returns
    ///
    /// The parse summary. Fails with `PreloadAfterTick` once an edge without reset has been
    /// applied, and with the loader's error otherwise; on failure the memory is untouched.
    pub fn preload(
        &mut self,
        path: impl AsRef<Path>,
        policy: MalformedRecordPolicy,
    ) -> Result<LoadReport, MemError> {
        self.ensure_not_started()?;
        let image = loader::load_image(path, self.memory.geometry(), policy)?;
        self.memory.preload(&image)?;
        Ok(image.report())
    }

    /// Applies an already parsed image; same sequencing rule as [`Self::preload`].
    pub fn preload_image(&mut self, image: &MemoryImage) -> Result<(), MemError> {
        self.ensure_not_started()?;
        self.memory.preload(image)
    }

    /// Applies one clock edge.
    pub fn tick(&mut self, signals: TickSignals) -> Result<TickOutcome, MemError> {
        let outcome = self.memory.tick(&signals).map_err(|e| {
            error!(cycle = self.cycle, error = %e, "tick failed");
            e
        })?;
        let sampled = signals.read_enable
            && !signals.reset
            && self.memory.read_mode() == ReadMode::Registered;
        self.stats.record(&outcome, sampled);
        self.started |= !signals.reset;
        if self.trace_ticks {
            info!(cycle = self.cycle, ?signals, ?outcome, "tick");
        }
        self.cycle += 1;
        Ok(outcome)
    }

    /// Holds reset asserted for `cycles` edges.
    pub fn reset_pulse(&mut self, cycles: u64) -> Result<(), MemError> {
        debug!(cycle = self.cycle, cycles, "reset pulse");
        for _ in 0..cycles {
            let _ = self.tick(TickSignals::reset())?;
        }
        Ok(())
    }

    /// Asserts the asynchronous reset between edges.
    ///
    /// Storage and any pending write are cleared immediately; no edge is applied, so the
    /// cycle count and statistics are unchanged.
    pub fn async_reset(&mut self) {
        debug!(cycle = self.cycle, "asynchronous reset");
        self.memory.reset();
    }

    /// Applies `cycles` edges with every signal deasserted.
    pub fn idle(&mut self, cycles: u64) -> Result<(), MemError> {
        for _ in 0..cycles {
            let _ = self.tick(TickSignals::idle())?;
        }
        Ok(())
    }

    /// Presents a write request for one edge, then idles one edge so it commits.
    ///
    /// Returns both outcomes. If a write was already pending when this is called, the first
    /// edge commits that write and drops this request; callers that tick manually should check.
    pub fn write(&mut self, address: u64, data: u64) -> Result<[TickOutcome; 2], MemError> {
        let request = self.tick(TickSignals::write(address, data))?;
        let commit = self.tick(TickSignals::idle())?;
        Ok([request, commit])
    }

    /// Applies each bundle of `stimulus` in order.
    ///
    /// # Returns
    ///
    /// Number of edges applied; stops at the first error.
    pub fn run<I>(&mut self, stimulus: I) -> Result<u64, MemError>
    where
        I: IntoIterator<Item = TickSignals>,
    {
        let start = self.cycle;
        for signals in stimulus {
            let _ = self.tick(signals)?;
        }
        Ok(self.cycle - start)
    }

    /// Reads committed data at `address`.
    pub fn read(&self, address: u64) -> Result<u64, MemError> {
        self.memory.read(address)
    }

    /// Number of edges applied so far.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Counters for the run so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// The driven memory.
    pub const fn memory(&self) -> &M {
        &self.memory
    }

    /// Ends the run and returns the memory.
    pub fn into_memory(self) -> M {
        self.memory
    }

    fn ensure_not_started(&self) -> Result<(), MemError> {
        if self.started {
            return Err(MemError::PreloadAfterTick { cycle: self.cycle });
        }
        Ok(())
    }
}
