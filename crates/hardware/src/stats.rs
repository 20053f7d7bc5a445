//! Run statistics collection and reporting.
//!
//! This module tracks what happened at each clock edge of a run. It provides:
//! 1. **Cycles:** Total edges applied and edges spent in reset.
//! 2. **Write Pipeline:** Requests latched and committed.
//! 3. **Lost Writes:** Requests dropped because the port was busy and latched writes
//!    discarded by reset.
//! 4. **Read Port:** Registered reads sampled.

use serde::Serialize;

use crate::soc::signals::TickOutcome;

/// Counters accumulated by the tick driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total clock edges applied.
    pub cycles: u64,
    /// Edges with reset asserted.
    pub reset_cycles: u64,
    /// Write requests accepted into the pipeline.
    pub writes_latched: u64,
    /// Writes that reached storage.
    pub writes_committed: u64,
    /// Requests ignored because a write was already pending.
    pub writes_dropped_busy: u64,
    /// Latched writes dropped by reset before their commit edge.
    pub writes_discarded_by_reset: u64,
    /// Edges on which the registered read port sampled storage.
    pub registered_reads: u64,
}

impl SimStats {
    /// Accounts for one edge given its outcome.
    ///
    /// `sampled` is set when the registered read port was clocked on this edge: the memory
    /// is in registered mode, `read_enable` was asserted and reset was not.
    pub fn record(&mut self, outcome: &TickOutcome, sampled: bool) {
        self.cycles += 1;
        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Reset { discarded } => {
                self.reset_cycles += 1;
                if discarded.is_some() {
                    self.writes_discarded_by_reset += 1;
                }
            }
            TickOutcome::Latched(_) => self.writes_latched += 1,
            TickOutcome::Committed { dropped, .. } => {
                self.writes_committed += 1;
                if dropped.is_some() {
                    self.writes_dropped_busy += 1;
                }
            }
        }
        if sampled {
            self.registered_reads += 1;
        }
    }

    /// Prints a summary of the run to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("MEMORY MODEL STATISTICS");
        println!("==========================================================");
        println!("cycles                   {}", self.cycles);
        println!("  reset                  {}", self.reset_cycles);
        println!("writes latched           {}", self.writes_latched);
        println!("writes committed         {}", self.writes_committed);
        println!("writes dropped (busy)    {}", self.writes_dropped_busy);
        println!("writes dropped (reset)   {}", self.writes_discarded_by_reset);
        println!("registered reads         {}", self.registered_reads);
        println!("==========================================================");
    }
}
