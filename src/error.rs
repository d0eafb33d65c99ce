//! # Error Types
//!
//! Error handling for binary encoding and decoding.
//!
//! Every fallible operation in this crate returns [`BinaryError`]. Errors are
//! returned to the immediate caller and never logged or retried internally.
//!
//! ## Error Categories
//! - **Type Errors**: a value (or a nested field/element) whose width is not fixed
//! - **Argument Errors**: an absent value, or a decode target that is not writable
//! - **I/O Errors**: sink/source failures, including short reads
//! - **Limit Errors**: values larger than a configured [`Codec`](crate::Codec) allows
//! - **Configuration Errors**: unreadable or invalid configuration
//!
//! ## Example Usage
//! ```rust
//! use binary_encoding::{write, BinaryError, ByteOrder};
//!
//! let mut sink = Vec::new();
//! match write(&mut sink, ByteOrder::BigEndian, &7isize) {
//!     Err(BinaryError::UnsupportedType(name)) => assert_eq!(name, "isize"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! assert!(sink.is_empty());
//! ```

use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// An `Option::None` was supplied where a value is required
    pub const ERR_NIL_VALUE: &str = "no value provided";
    /// A decode target behind a shared reference cannot be filled
    pub const ERR_NOT_WRITABLE: &str = "decode target is not a writable reference";
}

// BinaryError is the primary error type for all encoding operations
#[derive(Error, Debug)]
pub enum BinaryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("binary: unsupported type: {0}")]
    UnsupportedType(String),

    #[error("binary: invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Value too large: {0} bytes")]
    OversizedValue(usize),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl BinaryError {
    /// True when the error came from a sink or source that ran out of bytes
    pub fn is_short_read(&self) -> bool {
        matches!(self, BinaryError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}

/// Type alias for Results using BinaryError
pub type Result<T> = std::result::Result<T, BinaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_names_type() {
        let err = BinaryError::UnsupportedType("usize".to_string());
        assert!(err.to_string().contains("usize"));
    }

    #[test]
    fn test_short_read_detection() {
        let err = BinaryError::from(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(err.is_short_read());

        let err = BinaryError::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(!err.is_short_read());
        assert!(!BinaryError::InvalidArgument(constants::ERR_NIL_VALUE).is_short_read());
    }
}
