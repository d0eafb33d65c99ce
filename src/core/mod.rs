//! # Core Encoding Components
//!
//! Byte orders, value descriptions and the recursive size/encode/decode walk.
//!
//! ## Components
//! - **ByteOrder**: big- and little-endian conversion of 16/32/64-bit integers
//! - **Types**: the `Type` description of every encodable shape
//! - **Binary**: per-type recursion, including the numeric sequence fast path
//! - **Records**: `binary_record!` structs with named and blank fields
//! - **Codec**: buffer leaves plus the top-level `size`, `write` and `read`
//!
//! ## Wire Format
//! ```text
//! [field 0][field 1]...[field N]    no header, no length prefixes, no tags
//! ```
//!
//! Both ends must agree on the type, the field order and the byte order.

pub mod binary;
pub mod byte_order;
pub mod codec;
pub mod complex;
pub mod record;
pub mod types;
