//! # Services
//!
//! Higher-level entry points built on the core encoder and decoder.
//!
//! - **Codec**: byte order and size limit fixed by a [`CodecConfig`](crate::config::CodecConfig)

pub mod codec;

pub use codec::Codec;
