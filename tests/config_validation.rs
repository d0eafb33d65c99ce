//! Integration tests for configuration validation

#![allow(clippy::expect_used)]

use binary_encoding::config::{ENV_BYTE_ORDER, ENV_MAX_VALUE_SIZE, MAX_VALUE_SIZE};
use binary_encoding::{BinaryError, ByteOrder, Codec, CodecConfig};
use std::sync::Mutex;

// Environment variables are process-wide; serialize the tests that touch them.
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_default_config_validates() {
    let config = CodecConfig::default();
    let errors = config.validate();
    assert!(
        errors.is_empty(),
        "Default config should be valid, but got errors: {:?}",
        errors
    );
}

#[test]
fn test_zero_max_value_size() {
    let config = CodecConfig::default_with_overrides(|c| c.max_value_size = 0);
    let errors = config.validate();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("cannot be 0"));
}

#[test]
fn test_excessive_max_value_size() {
    let config = CodecConfig::default_with_overrides(|c| c.max_value_size = 2 * 1024 * 1024 * 1024);
    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("too large")));
}

#[test]
fn test_validate_strict_with_valid_config() {
    let config = CodecConfig::default();
    assert!(config.validate_strict().is_ok());
}

#[test]
fn test_validate_strict_with_invalid_config() {
    let config = CodecConfig::default_with_overrides(|c| c.max_value_size = 0);
    match config.validate_strict() {
        Err(BinaryError::ConfigError(msg)) => {
            assert!(msg.contains("Configuration validation failed"));
        }
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_from_toml_full() {
    let config = CodecConfig::from_toml(
        r#"
        byte_order = "LittleEndian"
        max_value_size = 4096
        "#,
    )
    .expect("parse");
    assert_eq!(config.byte_order, ByteOrder::LittleEndian);
    assert_eq!(config.max_value_size, 4096);
}

#[test]
fn test_from_toml_aliases() {
    for alias in ["big", "big-endian", "BigEndian"] {
        let config = CodecConfig::from_toml(&format!("byte_order = \"{alias}\"")).expect("parse");
        assert_eq!(config.byte_order, ByteOrder::BigEndian);
    }
}

#[test]
fn test_from_toml_rejects_unknown_order() {
    let result = CodecConfig::from_toml("byte_order = \"middle\"");
    assert!(matches!(result, Err(BinaryError::ConfigError(_))));
}

#[test]
fn test_file_round_trip() {
    let path = std::env::temp_dir().join(format!(
        "binary-encoding-config-{}.toml",
        std::process::id()
    ));
    let config = CodecConfig {
        byte_order: ByteOrder::LittleEndian,
        max_value_size: 1024,
    };
    config.save_to_file(&path).expect("save");
    let loaded = CodecConfig::from_file(&path).expect("load");
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_file() {
    let result = CodecConfig::from_file("/nonexistent/binary-encoding.toml");
    match result {
        Err(BinaryError::ConfigError(msg)) => assert!(msg.contains("Failed to open")),
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_from_env_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    std::env::set_var(ENV_BYTE_ORDER, "little-endian");
    std::env::set_var(ENV_MAX_VALUE_SIZE, "2048");
    let config = CodecConfig::from_env();
    std::env::remove_var(ENV_BYTE_ORDER);
    std::env::remove_var(ENV_MAX_VALUE_SIZE);

    let config = config.expect("env config");
    assert_eq!(config.byte_order, ByteOrder::LittleEndian);
    assert_eq!(config.max_value_size, 2048);
}

#[test]
fn test_from_env_defaults_and_errors() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    std::env::remove_var(ENV_BYTE_ORDER);
    std::env::remove_var(ENV_MAX_VALUE_SIZE);
    assert_eq!(CodecConfig::from_env().expect("defaults"), CodecConfig::default());

    std::env::set_var(ENV_MAX_VALUE_SIZE, "lots");
    let result = CodecConfig::from_env();
    std::env::remove_var(ENV_MAX_VALUE_SIZE);
    assert!(matches!(result, Err(BinaryError::ConfigError(_))));
}

#[test]
fn test_codec_from_config() {
    let config = CodecConfig::default();
    let codec = Codec::new(config.clone()).expect("codec");
    assert_eq!(codec.byte_order(), ByteOrder::BigEndian);
    assert_eq!(codec.config().max_value_size, MAX_VALUE_SIZE);
}
