//! Memory Image Loader.
//!
//! This module reads and writes the line-oriented bit-string image format used to preload
//! a memory before the clock starts. It performs:
//! 1. **Parsing:** Each non-empty line is one base-2 record of at most `word_width` digits,
//!    zero-extended on the left. Blank lines are skipped without consuming an address.
//! 2. **Placement:** Records are assigned to ascending addresses from 0. Records beyond the
//!    depth are ignored and only counted in the [`LoadReport`].
//! 3. **Malformed Records:** Handled per [`MalformedRecordPolicy`]: `Abort` fails the whole
//!    load, `Skip` leaves that address `Unwritten`.
//! 4. **Rendering:** Writes storage back out in the same format.
//!
//! Loading is all-or-nothing: the file is parsed completely into a [`MemoryImage`] before
//! any storage is touched.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::common::constants::{IMAGE_ONE, IMAGE_ZERO};
use crate::common::{Geometry, MemError};
use crate::config::MalformedRecordPolicy;
use crate::soc::memory::MemoryStorage;

/// Summary of an image parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records assigned to an address, including skipped ones.
    pub records: usize,
    /// Malformed records left `Unwritten` under [`MalformedRecordPolicy::Skip`].
    pub skipped: usize,
    /// Non-empty lines past the depth that were ignored.
    pub truncated: usize,
}

/// A parsed image, ready to be applied to storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryImage {
    geometry: Geometry,
    records: Vec<Option<u64>>,
    report: LoadReport,
}

impl MemoryImage {
    /// Geometry the image was parsed for.
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Per-address records; `None` marks a skipped malformed record.
    pub fn records(&self) -> &[Option<u64>] {
        &self.records
    }

    /// Parse summary.
    pub const fn report(&self) -> LoadReport {
        self.report
    }

    /// Number of addresses covered by the image.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the image holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parses image text for a memory of the given geometry.
///
/// # Arguments
///
/// * `text` - Image contents.
/// * `geometry` - Target memory shape; bounds record width and count.
/// * `policy` - What to do with malformed records.
///
/// # Returns
///
/// The parsed image, or `MalformedRecord` for the first bad line under `Abort`.
pub fn parse_image(
    text: &str,
    geometry: Geometry,
    policy: MalformedRecordPolicy,
) -> Result<MemoryImage, MemError> {
    let depth = geometry.depth();
    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if records.len() == depth {
            report.truncated += 1;
            continue;
        }
        match parse_record(line, geometry.word_width()) {
            Ok(word) => records.push(Some(word)),
            Err(reason) => match policy {
                MalformedRecordPolicy::Abort => {
                    return Err(MemError::MalformedRecord {
                        line: index + 1,
                        content: line.to_string(),
                        reason,
                    });
                }
                MalformedRecordPolicy::Skip => {
                    warn!(line = index + 1, content = line, %reason, "skipping malformed record");
                    report.skipped += 1;
                    records.push(None);
                }
            },
        }
    }

    report.records = records.len();
    if report.truncated > 0 {
        warn!(
            depth,
            ignored = report.truncated,
            "image longer than memory; extra records ignored"
        );
    }

    Ok(MemoryImage {
        geometry,
        records,
        report,
    })
}

/// Reads and parses an image file.
///
/// Fails with `ResourceNotFound` if `path` does not exist, `Io` if it cannot be read,
/// and otherwise as [`parse_image`].
pub fn load_image(
    path: impl AsRef<Path>,
    geometry: Geometry,
    policy: MalformedRecordPolicy,
) -> Result<MemoryImage, MemError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| MemError::from_io(path, e))?;
    let image = parse_image(&text, geometry, policy)?;
    let report = image.report();
    info!(
        path = %path.display(),
        records = report.records,
        skipped = report.skipped,
        truncated = report.truncated,
        "loaded memory image"
    );
    Ok(image)
}

/// Renders every cell of `storage` as one zero-padded record per line.
///
/// `Unwritten` cells render as zero, matching what a read returns.
pub fn render_image(storage: &MemoryStorage) -> String {
    let width = storage.geometry().word_width() as usize;
    let mut out = String::with_capacity(storage.depth() * (width + 1));
    for cell in storage.cells() {
        let _ = writeln!(out, "{:0width$b}", cell.word());
    }
    out
}

fn parse_record(line: &str, word_width: u32) -> Result<u64, String> {
    if let Some(bad) = line.chars().find(|c| *c != IMAGE_ZERO && *c != IMAGE_ONE) {
        return Err(format!("unexpected character {bad:?}"));
    }
    if line.len() > word_width as usize {
        return Err(format!(
            "{} digits exceed word width {word_width}",
            line.len()
        ));
    }
    u64::from_str_radix(line, 2).map_err(|e| e.to_string())
}
