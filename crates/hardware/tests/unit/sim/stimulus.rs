//! # Stimulus File Tests
//!
//! Parsing of JSON stimulus files into per-edge signals and replay through the driver.

use pretty_assertions::assert_eq;
use syncram_core::sim::stimulus::{self, StimulusStep};
use syncram_core::{MemError, TickSignals};

use crate::common::harness::{TestContext, text_file};

#[test]
fn omitted_signals_default_to_deasserted() {
    let signals = stimulus::parse_stimulus(r#"[{"address": 4}]"#).unwrap();
    assert_eq!(
        signals,
        vec![TickSignals {
            address: 4,
            ..TickSignals::idle()
        }]
    );
}

#[test]
fn write_and_read_fields() {
    let text = r#"[
        {"write_request": true, "address": 3, "data": 200},
        {"read_enable": true, "read_address": 3, "repeat": 2}
    ]"#;
    let signals = stimulus::parse_stimulus(text).unwrap();
    assert_eq!(
        signals,
        vec![
            TickSignals::write(3, 200),
            TickSignals::idle().with_read(3),
            TickSignals::idle().with_read(3),
        ]
    );
}

#[test]
fn expand_steps() {
    let steps = [
        StimulusStep {
            signals: TickSignals::reset(),
            repeat: 2,
        },
        StimulusStep {
            signals: TickSignals::write(1, 1),
            repeat: 1,
        },
    ];
    assert_eq!(stimulus::expand(&steps).len(), 3);
}

#[test]
fn not_an_array_is_rejected() {
    let file = text_file(r#"{"reset": true}"#);
    assert!(matches!(
        stimulus::load_stimulus(file.path()),
        Err(MemError::InvalidStimulus { .. })
    ));
}

#[test]
fn misspelled_signal_is_rejected() {
    let file = text_file(r#"[{"reset": true}, {"write_requst": true, "address": 1}]"#);
    assert!(matches!(
        stimulus::load_stimulus(file.path()),
        Err(MemError::InvalidStimulus { .. })
    ));
}

#[test]
fn missing_file() {
    assert!(matches!(
        stimulus::load_stimulus("/nonexistent/stim.json"),
        Err(MemError::ResourceNotFound { .. })
    ));
}

#[test]
fn replay_scenario_from_file() {
    let file = text_file(
        r#"[
            {"reset": true},
            {"write_request": true, "address": 3, "data": 200},
            {}
        ]"#,
    );
    let signals = stimulus::load_stimulus(file.path()).unwrap();
    let mut ctx = TestContext::new(4, 8);
    assert_eq!(ctx.driver.run(signals).unwrap(), 3);
    assert_eq!(ctx.driver.read(3).unwrap(), 200);
}
