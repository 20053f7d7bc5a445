//! Simulation utilities and image loading.
//!
//! Provides the tick driver that owns and clocks a memory, the image loader used to
//! preload it, and the stimulus file reader used to replay recorded signal sequences.

pub mod driver;
pub mod loader;
pub mod stimulus;

pub use driver::TickDriver;
