//! Stimulus files.
//!
//! A stimulus is a JSON array of steps. Each step names the signals it drives (omitted
//! signals are deasserted) and an optional `repeat` count. Unknown keys are rejected:
//!
//! ```json
//! [
//!     { "reset": true, "repeat": 2 },
//!     { "write_request": true, "address": 3, "data": 200 },
//!     {},
//!     { "read_enable": true, "read_address": 3 }
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::MemError;
use crate::soc::signals::TickSignals;

/// One entry of a stimulus file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "StepRecord")]
pub struct StimulusStep {
    /// Signals applied on each edge of this step.
    pub signals: TickSignals,
    /// Number of consecutive edges the signals are held for.
    pub repeat: u64,
}

/// On-disk form of a step; any key not listed here is rejected.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StepRecord {
    reset: bool,
    write_request: bool,
    address: u64,
    data: u64,
    read_enable: bool,
    read_address: u64,
    repeat: u64,
}

impl Default for StepRecord {
    fn default() -> Self {
        Self {
            reset: false,
            write_request: false,
            address: 0,
            data: 0,
            read_enable: false,
            read_address: 0,
            repeat: 1,
        }
    }
}

impl From<StepRecord> for StimulusStep {
    fn from(record: StepRecord) -> Self {
        Self {
            signals: TickSignals {
                reset: record.reset,
                write_request: record.write_request,
                address: record.address,
                data: record.data,
                read_enable: record.read_enable,
                read_address: record.read_address,
            },
            repeat: record.repeat,
        }
    }
}

/// Expands steps into one [`TickSignals`] per edge.
pub fn expand(steps: &[StimulusStep]) -> Vec<TickSignals> {
    steps
        .iter()
        .flat_map(|step| (0..step.repeat).map(move |_| step.signals))
        .collect()
}

/// Parses stimulus JSON text into per-edge signals.
pub fn parse_stimulus(text: &str) -> Result<Vec<TickSignals>, serde_json::Error> {
    let steps: Vec<StimulusStep> = serde_json::from_str(text)?;
    Ok(expand(&steps))
}

/// Reads a stimulus file.
///
/// Fails with `ResourceNotFound`/`Io` if the file cannot be read and `InvalidStimulus`
/// if it is not a JSON array of steps or a step names an unknown signal.
pub fn load_stimulus(path: impl AsRef<Path>) -> Result<Vec<TickSignals>, MemError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| MemError::from_io(path, e))?;
    parse_stimulus(&text).map_err(|source| MemError::InvalidStimulus {
        path: path.to_path_buf(),
        source,
    })
}
