//! # Image Rendering Tests
//!
//! Verifies that storage renders back to the image format and re-parses to the same reads.

use pretty_assertions::assert_eq;
use syncram_core::config::MalformedRecordPolicy;
use syncram_core::sim::loader;
use syncram_core::{MemoryModel, SyncMemory};

use crate::common::harness::{TestContext, geometry};

#[test]
fn render_pads_to_word_width() {
    let mut ctx = TestContext::new(2, 4);
    let _ = ctx.driver.write(1, 0b101).unwrap();
    let text = loader::render_image(ctx.driver.storage());
    assert_eq!(text, "0000\n0101\n0000\n0000\n");
}

#[test]
fn render_then_load_preserves_reads() {
    let mut ctx = TestContext::new(3, 8);
    for (a, d) in [(0, 200), (3, 1), (7, 255)] {
        let _ = ctx.driver.write(a, d).unwrap();
    }
    let text = loader::render_image(ctx.driver.storage());

    let image = loader::parse_image(&text, geometry(3, 8), MalformedRecordPolicy::Abort).unwrap();
    let mut copy = MemoryModel::new(geometry(3, 8));
    copy.preload(&image).unwrap();
    assert_eq!(ctx.snapshot(), (0..8).map(|a| copy.read(a).unwrap()).collect::<Vec<_>>());
}
