//! Configuration system for the memory model.
//!
//! This module defines the configuration structures and enums used to parameterize
//! a model and its driver. It provides:
//! 1. **Defaults:** Baseline widths and reset length.
//! 2. **Structures:** Sectioned config for the memory shape, the preload image and the run.
//! 3. **Enums:** Malformed-record policy and read-port mode.
//!
//! Configuration is supplied as JSON (see [`Config::from_json_file`]) or built with
//! `Config::default()`; every field may be omitted.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::common::{Geometry, MemError};

/// Default configuration values.
mod defaults {
    use crate::common::constants;

    /// Address width in bits (256 cells).
    pub const ADDRESS_WIDTH: u32 = constants::DEFAULT_ADDRESS_WIDTH;

    /// Word width in bits.
    pub const WORD_WIDTH: u32 = constants::DEFAULT_WORD_WIDTH;

    /// Cycles reset is held before the stimulus starts.
    pub const RESET_CYCLES: u64 = constants::DEFAULT_RESET_CYCLES;
}

/// What the image loader does with a line that is not a valid record.
///
/// A record is malformed if it contains anything other than `0`/`1` or is
/// wider than the configured word width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MalformedRecordPolicy {
    /// Fail the whole load with `MalformedRecord`; storage is left untouched.
    #[default]
    Abort,
    /// Leave the record's address `Unwritten` (it reads back as zero) and continue.
    Skip,
}

impl FromStr for MalformedRecordPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(format!("unknown malformed-record policy '{other}' (expected abort|skip)")),
        }
    }
}

impl fmt::Display for MalformedRecordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Abort => write!(f, "abort"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

/// Behavior of the model's read port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ReadMode {
    /// Reads are only served through the combinational `read` path.
    #[default]
    Combinational,
    /// The registered read port is also clocked: an enabled read address is
    /// sampled at the edge and its data presented until the next edge.
    Registered,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use syncram_core::config::{Config, MalformedRecordPolicy, ReadMode};
///
/// let json = r#"{
///     "memory": { "address_width": 4, "word_width": 8, "read_mode": "Registered" },
///     "image": { "path": "rom.mem", "on_malformed_record": "Skip" },
///     "general": { "reset_cycles": 3 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.geometry().unwrap().depth(), 16);
/// assert_eq!(config.memory.read_mode, ReadMode::Registered);
/// assert_eq!(config.image.on_malformed_record, MalformedRecordPolicy::Skip);
/// assert!(!config.general.trace_ticks);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Shape of the memory
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Preload image settings
    #[serde(default)]
    pub image: ImageConfig,
    /// Run settings
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Reads a JSON configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file.
    ///
    /// # Returns
    ///
    /// The parsed configuration, `ResourceNotFound`/`Io` if the file cannot be read, or
    /// `InvalidConfig` carrying the JSON error if it does not deserialize.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, MemError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| MemError::from_io(path, e))?;
        serde_json::from_str(&text).map_err(|source| MemError::InvalidConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the configured preload image, or `NoImage` if none is set.
    pub fn image_path(&self) -> Result<&Path, MemError> {
        self.image.path.as_deref().ok_or(MemError::NoImage)
    }

    /// Validates the memory section and returns its geometry.
    pub fn geometry(&self) -> Result<Geometry, MemError> {
        Geometry::new(self.memory.address_width, self.memory.word_width)
    }
}

/// Memory shape and read-port behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Address bits; depth is `2^address_width`
    #[serde(default = "MemoryConfig::default_address_width")]
    pub address_width: u32,

    /// Data bits per cell (at most 64)
    #[serde(default = "MemoryConfig::default_word_width")]
    pub word_width: u32,

    /// Whether the registered read port is clocked
    #[serde(default)]
    pub read_mode: ReadMode,
}

impl MemoryConfig {
    fn default_address_width() -> u32 {
        defaults::ADDRESS_WIDTH
    }

    fn default_word_width() -> u32 {
        defaults::WORD_WIDTH
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            address_width: defaults::ADDRESS_WIDTH,
            word_width: defaults::WORD_WIDTH,
            read_mode: ReadMode::default(),
        }
    }
}

/// Preload image settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageConfig {
    /// Bit-string image loaded after the power-on reset pulse, if any
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Handling of lines that are not valid records
    #[serde(default)]
    pub on_malformed_record: MalformedRecordPolicy,
}

/// Run sequencing settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Number of cycles reset is held before the stimulus is applied
    #[serde(default = "GeneralConfig::default_reset_cycles")]
    pub reset_cycles: u64,

    /// Emit a trace event for every tick, including idle ones
    #[serde(default)]
    pub trace_ticks: bool,
}

impl GeneralConfig {
    fn default_reset_cycles() -> u64 {
        defaults::RESET_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            reset_cycles: defaults::RESET_CYCLES,
            trace_ticks: false,
        }
    }
}
