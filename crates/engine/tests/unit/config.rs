//! Configuration Tests.
//!
//! Verifies defaults, partial JSON deserialization, and validation.

use std::io::Write as _;

use memsim_core::Config;
use memsim_core::common::SimError;
use memsim_core::config::PrefetcherKind;

/// Baseline defaults match the documented constants.
#[test]
fn defaults_are_documented_values() {
    let config = Config::default();
    assert_eq!(config.cache.capacity, 128);
    assert_eq!(config.memory.ram_size_mb, 2048);
    assert_eq!(config.prefetch.kind, PrefetcherKind::None);
    assert_eq!(config.prefetch.offset, 64);
    assert_eq!(config.prefetch.state_size, 4);
    assert_eq!(config.prefetch.action_space, 16);
    assert!((config.prefetch.epsilon - 0.1).abs() < f64::EPSILON);
    assert!((config.prefetch.alpha - 0.1).abs() < f64::EPSILON);
    assert!((config.prefetch.gamma - 0.9).abs() < f64::EPSILON);
}

/// Megabytes convert to bytes.
#[test]
fn ram_size_converts_to_bytes() {
    let mut config = Config::default();
    config.memory.ram_size_mb = 1;
    assert_eq!(config.memory.ram_size_bytes(), 1024 * 1024);
}

/// Partial JSON fills every omitted field with its default.
#[test]
fn partial_json_uses_defaults() {
    let config: Config = serde_json::from_str(r#"{"cache": {"capacity": 4}}"#).unwrap();
    assert_eq!(config.cache.capacity, 4);
    assert_eq!(config.memory.ram_size_mb, 2048);
    assert_eq!(config.prefetch.kind, PrefetcherKind::None);
}

/// Strategy kinds deserialize from their snake_case tokens.
#[test]
fn kind_tokens_deserialize() {
    let config: Config =
        serde_json::from_str(r#"{"prefetch": {"kind": "best_offset", "offset": 100}}"#).unwrap();
    assert_eq!(config.prefetch.kind, PrefetcherKind::BestOffset);
    assert_eq!(config.prefetch.offset, 100);

    let kind: PrefetcherKind = serde_json::from_str(r#""ampm""#).unwrap();
    assert_eq!(kind, PrefetcherKind::Ampm);
}

/// An unknown kind token is a deserialization error, not a silent default.
#[test]
fn unknown_kind_token_is_rejected() {
    let result: Result<PrefetcherKind, _> = serde_json::from_str(r#""markov""#);
    assert!(result.is_err());
}

/// File loading reports read and parse failures with the offending path.
#[test]
fn json_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"memory": {{"ram_size_mb": 64}}}}"#).unwrap();
    file.flush().unwrap();

    let config = Config::from_json_file(file.path()).unwrap();
    assert_eq!(config.memory.ram_size_mb, 64);

    let err = Config::from_json_file(std::path::Path::new("/nonexistent/sim.json")).unwrap_err();
    assert!(matches!(err, SimError::ConfigLoad { .. }));
}

/// Validation rejects out-of-range values and accepts the defaults.
#[test]
fn validation_bounds() {
    assert!(Config::default().validate().is_ok());

    let mut config = Config::default();
    config.cache.capacity = 0;
    assert!(matches!(config.validate(), Err(SimError::Config(_))));

    let mut config = Config::default();
    config.memory.ram_size_mb = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.prefetch.action_space = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.prefetch.epsilon = 1.5;
    assert!(config.validate().is_err());
}
