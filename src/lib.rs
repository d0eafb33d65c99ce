//! # binary-encoding
//!
//! Byte-exact binary encoding of fixed-width values in a chosen byte order.
//!
//! Integers, floats, complex numbers, fixed arrays, sequences and records are
//! encoded densely: no padding except declared blank fields, no length
//! prefixes, no type tags. The caller supplies the target type and the byte
//! order on both ends.
//!
//! ## Usage
//! ```rust
//! use binary_encoding::{binary_record, read, size, write, ByteOrder};
//!
//! binary_record! {
//!     #[derive(Debug, Default, PartialEq)]
//!     pub struct Sample {
//!         pub id: u16,
//!         _: [u8; 2],
//!         pub values: [i32; 2],
//!     }
//! }
//!
//! let sample = Sample { id: 1, values: [-1, 2] };
//! let mut wire = Vec::new();
//! write(&mut wire, ByteOrder::LittleEndian, &sample)?;
//! assert_eq!(wire.len(), size(&sample)?);
//!
//! let mut decoded = Sample::default();
//! read(wire.as_slice(), ByteOrder::LittleEndian, &mut decoded)?;
//! assert_eq!(decoded, sample);
//! # Ok::<(), binary_encoding::BinaryError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod service;

pub use crate::config::CodecConfig;
pub use crate::core::binary::{Binary, BinaryType};
pub use crate::core::byte_order::ByteOrder;
pub use crate::core::codec::{from_bytes, read, size, to_bytes, write, Decoder, Encoder};
pub use crate::core::complex::{Complex128, Complex64};
pub use crate::core::types::{Field, Type};
pub use crate::error::{BinaryError, Result};
pub use crate::service::Codec;
