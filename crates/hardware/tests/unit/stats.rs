//! # Statistics Tests
//!
//! Verifies that `SimStats` counts each kind of edge once.

use syncram_core::stats::SimStats;
use syncram_core::{TickOutcome, WriteRequest};

const REQ: WriteRequest = WriteRequest { address: 1, data: 2 };

#[test]
fn test_default_is_zero() {
    assert_eq!(SimStats::default().cycles, 0);
    assert_eq!(SimStats::default().writes_committed, 0);
}

#[test]
fn test_record_counts_outcomes() {
    let mut stats = SimStats::default();
    stats.record(&TickOutcome::Reset { discarded: None }, false);
    stats.record(&TickOutcome::Latched(REQ), false);
    stats.record(
        &TickOutcome::Committed {
            request: REQ,
            dropped: Some(WriteRequest { address: 5, data: 6 }),
        },
        false,
    );
    stats.record(&TickOutcome::Idle, false);

    assert_eq!(stats.cycles, 4);
    assert_eq!(stats.reset_cycles, 1);
    assert_eq!(stats.writes_latched, 1);
    assert_eq!(stats.writes_committed, 1);
    assert_eq!(stats.writes_dropped_busy, 1);
    assert_eq!(stats.writes_discarded_by_reset, 0);
    assert_eq!(stats.registered_reads, 0);
}

#[test]
fn test_reset_discard_counted() {
    let mut stats = SimStats::default();
    stats.record(
        &TickOutcome::Reset {
            discarded: Some(REQ),
        },
        false,
    );
    assert_eq!(stats.writes_discarded_by_reset, 1);
}

#[test]
fn test_registered_reads_count_sampled_edges() {
    let mut stats = SimStats::default();
    stats.record(&TickOutcome::Idle, true);
    stats.record(&TickOutcome::Idle, false);
    assert_eq!(stats.registered_reads, 1);
}

#[test]
fn test_stats_serialize() {
    let mut stats = SimStats::default();
    stats.record(&TickOutcome::Idle, false);
    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(json["cycles"], 1);
    assert_eq!(json["writes_dropped_busy"], 0);
}
