//! # Configuration Tests
//!
//! Defaults, JSON deserialization, policy parsing and file loading.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use syncram_core::MemError;
use syncram_core::config::*;

use crate::common::harness::text_file;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.memory.address_width, 8);
    assert_eq!(config.memory.word_width, 8);
    assert_eq!(config.memory.read_mode, ReadMode::Combinational);
    assert_eq!(config.image.path, None);
    assert_eq!(config.image.on_malformed_record, MalformedRecordPolicy::Abort);
    assert_eq!(config.general.reset_cycles, 2);
    assert!(!config.general.trace_ticks);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.memory.address_width, 8);
    assert_eq!(config.image.on_malformed_record, MalformedRecordPolicy::Abort);
    assert_eq!(config.general.reset_cycles, 2);
}

#[test]
fn test_partial_section_fills_defaults() {
    let config: Config = serde_json::from_str(r#"{"memory": {"address_width": 4}}"#).unwrap();
    assert_eq!(config.memory.address_width, 4);
    assert_eq!(config.memory.word_width, 8);
    assert_eq!(config.geometry().unwrap().depth(), 16);
}

#[test]
fn test_full_json() {
    let json = r#"{
        "memory": { "address_width": 6, "word_width": 12, "read_mode": "Registered" },
        "image": { "path": "boot.mem", "on_malformed_record": "Skip" },
        "general": { "reset_cycles": 5, "trace_ticks": true }
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.memory.read_mode, ReadMode::Registered);
    assert_eq!(config.image.path, Some(PathBuf::from("boot.mem")));
    assert_eq!(config.image.on_malformed_record, MalformedRecordPolicy::Skip);
    assert_eq!(config.general.reset_cycles, 5);
    assert!(config.general.trace_ticks);
    assert_eq!(config.geometry().unwrap().word_mask(), 0xFFF);
}

#[test]
fn test_unknown_policy_rejected() {
    let json = r#"{"image": {"on_malformed_record": "Retry"}}"#;
    assert!(serde_json::from_str::<Config>(json).is_err());
}

#[test]
fn test_geometry_validation() {
    let mut config = Config::default();
    config.memory.word_width = 0;
    assert!(matches!(
        config.geometry(),
        Err(MemError::InvalidGeometry { word_width: 0, .. })
    ));
}

#[test]
fn test_policy_from_str() {
    assert_eq!("abort".parse::<MalformedRecordPolicy>(), Ok(MalformedRecordPolicy::Abort));
    assert_eq!("SKIP".parse::<MalformedRecordPolicy>(), Ok(MalformedRecordPolicy::Skip));
    assert!("ignore".parse::<MalformedRecordPolicy>().is_err());
    assert_eq!(MalformedRecordPolicy::Skip.to_string(), "skip");
}

#[test]
fn test_from_json_file() {
    let file = text_file(r#"{"memory": {"address_width": 3, "word_width": 4}}"#);
    let config = Config::from_json_file(file.path()).unwrap();
    assert_eq!(config.geometry().unwrap().depth(), 8);
}

#[test]
fn test_from_json_file_missing() {
    let err = Config::from_json_file("/nonexistent/bench.json").unwrap_err();
    assert!(matches!(err, MemError::ResourceNotFound { .. }));
}

#[test]
fn test_from_json_file_invalid() {
    let file = text_file("{ not json");
    let err = Config::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, MemError::InvalidConfig { .. }));
}

#[test]
fn test_image_path() {
    let mut config = Config::default();
    assert!(matches!(config.image_path(), Err(MemError::NoImage)));
    config.image.path = Some(PathBuf::from("rom.mem"));
    assert_eq!(config.image_path().unwrap(), PathBuf::from("rom.mem").as_path());
}
