//! # Geometry Tests
//!
//! Width validation, depth, masks and truncation.

use rstest::rstest;
use syncram_core::{Geometry, MemError};

#[rstest]
#[case(0, 1, 1, 0x1)]
#[case(4, 8, 16, 0xFF)]
#[case(8, 4, 256, 0xF)]
#[case(10, 16, 1024, 0xFFFF)]
#[case(24, 64, 1 << 24, u64::MAX)]
fn test_valid_geometry(
    #[case] address_width: u32,
    #[case] word_width: u32,
    #[case] depth: usize,
    #[case] mask: u64,
) {
    let g = Geometry::new(address_width, word_width).unwrap();
    assert_eq!(g.depth(), depth);
    assert_eq!(g.word_mask(), mask);
    assert_eq!(g.address_width(), address_width);
    assert_eq!(g.word_width(), word_width);
}

#[rstest]
#[case(4, 0)]
#[case(4, 65)]
#[case(25, 8)]
fn test_invalid_geometry(#[case] address_width: u32, #[case] word_width: u32) {
    let err = Geometry::new(address_width, word_width).unwrap_err();
    assert!(matches!(err, MemError::InvalidGeometry { .. }));
}

#[test]
fn test_truncate_keeps_low_bits() {
    let g = Geometry::new(4, 8).unwrap();
    assert_eq!(g.truncate(0x1234), 0x34);
    assert_eq!(g.truncate(200), 200);
    assert_eq!(g.truncate(256), 0);
}

#[test]
fn test_contains_and_index() {
    let g = Geometry::new(4, 8).unwrap();
    assert!(g.contains(0));
    assert!(g.contains(15));
    assert!(!g.contains(16));
    assert_eq!(g.index(7).unwrap(), 7);
    assert!(matches!(
        g.index(u64::MAX),
        Err(MemError::AddressOutOfRange { depth: 16, .. })
    ));
}
