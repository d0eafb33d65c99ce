//! # Configuration Management
//!
//! Centralized configuration for the configured [`Codec`](crate::Codec).
//!
//! The free functions ([`write`](crate::write), [`read`](crate::read), ...)
//! take the byte order per call and impose no size limit. A `Codec` built from
//! a [`CodecConfig`] fixes the byte order for every call and rejects values
//! larger than `max_value_size` before any I/O happens.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - TOML strings via `from_toml()`
//! - Environment variables via `from_env()`
//! - Direct instantiation with defaults
//!
//! ## Example
//! ```toml
//! byte_order = "LittleEndian"
//! max_value_size = 65536
//! ```

use crate::core::byte_order::ByteOrder;
use crate::error::{BinaryError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Max allowed encoded value size (16 MB)
pub const MAX_VALUE_SIZE: usize = 16 * 1024 * 1024;

/// Upper bound accepted by validation (1 GB)
const MAX_VALUE_SIZE_LIMIT: usize = 1024 * 1024 * 1024;

/// Environment variable overriding the byte order
pub const ENV_BYTE_ORDER: &str = "BINARY_ENCODING_BYTE_ORDER";

/// Environment variable overriding the maximum value size
pub const ENV_MAX_VALUE_SIZE: &str = "BINARY_ENCODING_MAX_VALUE_SIZE";

/// Settings for a [`Codec`](crate::Codec)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Byte order used for every multi-byte leaf
    #[serde(default)]
    pub byte_order: ByteOrder,

    /// Largest encoded size, in bytes, accepted for a single value
    #[serde(default = "default_max_value_size")]
    pub max_value_size: usize,
}

fn default_max_value_size() -> usize {
    MAX_VALUE_SIZE
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::BigEndian,
            max_value_size: MAX_VALUE_SIZE,
        }
    }
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| BinaryError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| BinaryError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| BinaryError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults; set but unparsable ones are an error.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(order) = std::env::var(ENV_BYTE_ORDER) {
            config.byte_order = order
                .parse::<ByteOrder>()
                .map_err(|e| BinaryError::ConfigError(format!("{ENV_BYTE_ORDER}: {e}")))?;
        }

        if let Ok(size) = std::env::var(ENV_MAX_VALUE_SIZE) {
            config.max_value_size = size.parse::<usize>().map_err(|e| {
                BinaryError::ConfigError(format!("{ENV_MAX_VALUE_SIZE}: {e}"))
            })?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BinaryError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| BinaryError::ConfigError(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_value_size == 0 {
            errors.push("Max value size cannot be 0".to_string());
        } else if self.max_value_size > MAX_VALUE_SIZE_LIMIT {
            errors.push(format!(
                "Max value size too large: {} bytes (maximum: 1 GB)",
                self.max_value_size
            ));
        }

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(BinaryError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}
