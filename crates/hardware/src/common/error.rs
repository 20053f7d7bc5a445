//! Error definitions for the memory model.
//!
//! This module defines the single error type surfaced by every fallible operation. It covers:
//! 1. **Image Loading:** Missing files, I/O failures and malformed bit-string records.
//! 2. **Model Invariants:** Out-of-range addresses and invalid geometries.
//! 3. **Driver Sequencing:** Preloads issued after ticking has begun and unreadable
//!    configuration or stimulus files.
//!
//! `AddressOutOfRange` and `PreloadAfterTick` are programming-error class faults: they
//! indicate a malformed driving environment and are meant to abort the run, not to be retried.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the memory model, the image loader and the tick driver.
#[derive(Debug, Error)]
pub enum MemError {
    /// The memory image path does not exist.
    #[error("memory image not found: {}", path.display())]
    ResourceNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// An image line is not a base-2 string that fits the configured word width.
    ///
    /// `line` is 1-based, counted over every line of the file including blanks.
    #[error("malformed record on line {line} ({content:?}): {reason}")]
    MalformedRecord {
        /// 1-based line number in the image.
        line: usize,
        /// The offending line, trimmed.
        content: String,
        /// Why the line was rejected.
        reason: String,
    },

    /// An address at or beyond the storage depth reached a read or a commit.
    #[error("address {address:#x} out of range (depth {depth})")]
    AddressOutOfRange {
        /// Address that was presented.
        address: u64,
        /// Number of cells in the storage.
        depth: usize,
    },

    /// The requested address or word width cannot be modeled.
    #[error("invalid geometry: address width {address_width}, word width {word_width}")]
    InvalidGeometry {
        /// Requested address width in bits.
        address_width: u32,
        /// Requested word width in bits.
        word_width: u32,
    },

    /// A preload was attempted after an edge with reset deasserted.
    #[error("preload attempted at cycle {cycle}; images may only be loaded before the first non-reset tick")]
    PreloadAfterTick {
        /// Cycle count at the time of the attempt.
        cycle: u64,
    },

    /// An operation needs a preload image but none was configured.
    #[error("no memory image given; pass --image <file> or set image.path in the config")]
    NoImage,

    /// A configuration file is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid configuration file {}: {source}", path.display())]
    InvalidConfig {
        /// Path of the configuration file.
        path: PathBuf,
        /// Deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// A stimulus file is not a JSON array of tick signals.
    #[error("invalid stimulus file {}: {source}", path.display())]
    InvalidStimulus {
        /// Path of the stimulus file.
        path: PathBuf,
        /// Deserialization failure.
        #[source]
        source: serde_json::Error,
    },
}

impl MemError {
    /// Maps an I/O failure on `path` to `ResourceNotFound` or `Io`.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::ResourceNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Returns `true` for faults that indicate a defect in the driving environment.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::AddressOutOfRange { .. } | Self::PreloadAfterTick { .. }
        )
    }
}
