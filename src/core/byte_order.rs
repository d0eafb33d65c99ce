//! # Byte Order
//!
//! Conversion of 16/32/64-bit unsigned integers to and from big- or
//! little-endian byte sequences.
//!
//! [`ByteOrder::BigEndian`] and [`ByteOrder::LittleEndian`] are the only two
//! orders. Both are stateless `Copy` values, safe to share across any number
//! of concurrent encode/decode calls.
//!
//! ## Usage
//! ```rust
//! use binary_encoding::ByteOrder;
//!
//! let mut buf = [0u8; 4];
//! ByteOrder::BigEndian.put_u32(&mut buf, 0x0102_0304);
//! assert_eq!(buf, [1, 2, 3, 4]);
//! assert_eq!(ByteOrder::LittleEndian.u32(&buf), 0x0403_0201);
//! ```

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};
use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Byte order used for every multi-byte leaf of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ByteOrder {
    /// Most significant byte first (network byte order)
    #[default]
    #[serde(alias = "big", alias = "big-endian", alias = "big_endian")]
    BigEndian,
    /// Least significant byte first
    #[serde(alias = "little", alias = "little-endian", alias = "little_endian")]
    LittleEndian,
}

impl ByteOrder {
    /// Write `v` into the first 2 bytes of `buf`
    ///
    /// # Panics
    /// Panics if `buf` is shorter than 2 bytes.
    #[inline]
    pub fn put_u16(self, buf: &mut [u8], v: u16) {
        match self {
            ByteOrder::BigEndian => BigEndian::write_u16(buf, v),
            ByteOrder::LittleEndian => LittleEndian::write_u16(buf, v),
        }
    }

    /// Write `v` into the first 4 bytes of `buf`
    ///
    /// # Panics
    /// Panics if `buf` is shorter than 4 bytes.
    #[inline]
    pub fn put_u32(self, buf: &mut [u8], v: u32) {
        match self {
            ByteOrder::BigEndian => BigEndian::write_u32(buf, v),
            ByteOrder::LittleEndian => LittleEndian::write_u32(buf, v),
        }
    }

    /// Write `v` into the first 8 bytes of `buf`
    ///
    /// # Panics
    /// Panics if `buf` is shorter than 8 bytes.
    #[inline]
    pub fn put_u64(self, buf: &mut [u8], v: u64) {
        match self {
            ByteOrder::BigEndian => BigEndian::write_u64(buf, v),
            ByteOrder::LittleEndian => LittleEndian::write_u64(buf, v),
        }
    }

    /// Read a `u16` from the first 2 bytes of `buf`
    #[inline]
    pub fn u16(self, buf: &[u8]) -> u16 {
        match self {
            ByteOrder::BigEndian => BigEndian::read_u16(buf),
            ByteOrder::LittleEndian => LittleEndian::read_u16(buf),
        }
    }

    /// Read a `u32` from the first 4 bytes of `buf`
    #[inline]
    pub fn u32(self, buf: &[u8]) -> u32 {
        match self {
            ByteOrder::BigEndian => BigEndian::read_u32(buf),
            ByteOrder::LittleEndian => LittleEndian::read_u32(buf),
        }
    }

    /// Read a `u64` from the first 8 bytes of `buf`
    #[inline]
    pub fn u64(self, buf: &[u8]) -> u64 {
        match self {
            ByteOrder::BigEndian => BigEndian::read_u64(buf),
            ByteOrder::LittleEndian => LittleEndian::read_u64(buf),
        }
    }

    // Buffer-level leaves used by the encoder and decoder. Callers guarantee
    // capacity/remaining, so these never fail.

    #[inline]
    pub(crate) fn write_u16<B: BufMut>(self, buf: &mut B, v: u16) {
        match self {
            ByteOrder::BigEndian => buf.put_u16(v),
            ByteOrder::LittleEndian => buf.put_u16_le(v),
        }
    }

    #[inline]
    pub(crate) fn write_u32<B: BufMut>(self, buf: &mut B, v: u32) {
        match self {
            ByteOrder::BigEndian => buf.put_u32(v),
            ByteOrder::LittleEndian => buf.put_u32_le(v),
        }
    }

    #[inline]
    pub(crate) fn write_u64<B: BufMut>(self, buf: &mut B, v: u64) {
        match self {
            ByteOrder::BigEndian => buf.put_u64(v),
            ByteOrder::LittleEndian => buf.put_u64_le(v),
        }
    }

    #[inline]
    pub(crate) fn read_u16<B: Buf>(self, buf: &mut B) -> u16 {
        match self {
            ByteOrder::BigEndian => buf.get_u16(),
            ByteOrder::LittleEndian => buf.get_u16_le(),
        }
    }

    #[inline]
    pub(crate) fn read_u32<B: Buf>(self, buf: &mut B) -> u32 {
        match self {
            ByteOrder::BigEndian => buf.get_u32(),
            ByteOrder::LittleEndian => buf.get_u32_le(),
        }
    }

    #[inline]
    pub(crate) fn read_u64<B: Buf>(self, buf: &mut B) -> u64 {
        match self {
            ByteOrder::BigEndian => buf.get_u64(),
            ByteOrder::LittleEndian => buf.get_u64_le(),
        }
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            ByteOrder::BigEndian => "BigEndian",
            ByteOrder::LittleEndian => "LittleEndian",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ByteOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "big" | "bigendian" | "be" => Ok(ByteOrder::BigEndian),
            "little" | "littleendian" | "le" => Ok(ByteOrder::LittleEndian),
            _ => Err(format!("Invalid byte order: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_big_endian() {
        let mut buf = [0u8; 8];
        ByteOrder::BigEndian.put_u16(&mut buf, 0x0102);
        assert_eq!(&buf[..2], &[0x01, 0x02]);
        assert_eq!(ByteOrder::BigEndian.u16(&buf), 0x0102);

        ByteOrder::BigEndian.put_u32(&mut buf, 0x0102_0304);
        assert_eq!(&buf[..4], &[1, 2, 3, 4]);
        assert_eq!(ByteOrder::BigEndian.u32(&buf), 0x0102_0304);

        ByteOrder::BigEndian.put_u64(&mut buf, 0x0102_0304_0506_0708);
        assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(ByteOrder::BigEndian.u64(&buf), 0x0102_0304_0506_0708);
    }

    #[test]
    fn test_put_get_little_endian() {
        let mut buf = [0u8; 8];
        ByteOrder::LittleEndian.put_u16(&mut buf, 0x0102);
        assert_eq!(&buf[..2], &[0x02, 0x01]);
        assert_eq!(ByteOrder::LittleEndian.u16(&buf), 0x0102);

        ByteOrder::LittleEndian.put_u32(&mut buf, 0x0102_0304);
        assert_eq!(&buf[..4], &[4, 3, 2, 1]);

        ByteOrder::LittleEndian.put_u64(&mut buf, 0x0102_0304_0506_0708);
        assert_eq!(buf, [8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(ByteOrder::LittleEndian.u64(&buf), 0x0102_0304_0506_0708);
    }

    #[test]
    fn test_only_leading_bytes_touched() {
        let mut buf = [0xFFu8; 8];
        ByteOrder::BigEndian.put_u16(&mut buf, 0);
        assert_eq!(buf, [0, 0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_buf_leaves_match_slice_leaves() {
        for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
            let mut out = Vec::new();
            order.write_u16(&mut out, 0xA1B2);
            order.write_u32(&mut out, 0xA1B2_C3D4);
            order.write_u64(&mut out, 0xA1B2_C3D4_E5F6_0718);

            let mut expected = [0u8; 14];
            order.put_u16(&mut expected[..2], 0xA1B2);
            order.put_u32(&mut expected[2..6], 0xA1B2_C3D4);
            order.put_u64(&mut expected[6..], 0xA1B2_C3D4_E5F6_0718);
            assert_eq!(out, expected);

            let mut input = &out[..];
            assert_eq!(order.read_u16(&mut input), 0xA1B2);
            assert_eq!(order.read_u32(&mut input), 0xA1B2_C3D4);
            assert_eq!(order.read_u64(&mut input), 0xA1B2_C3D4_E5F6_0718);
            assert!(input.is_empty());
        }
    }

    #[test]
    fn test_names_and_parsing() {
        assert_eq!(ByteOrder::BigEndian.to_string(), "BigEndian");
        assert_eq!(ByteOrder::LittleEndian.to_string(), "LittleEndian");
        assert_eq!("big".parse::<ByteOrder>(), Ok(ByteOrder::BigEndian));
        assert_eq!("Little-Endian".parse::<ByteOrder>(), Ok(ByteOrder::LittleEndian));
        assert_eq!("LE".parse::<ByteOrder>(), Ok(ByteOrder::LittleEndian));
        assert!("middle".parse::<ByteOrder>().is_err());
    }

    #[test]
    fn test_default_order() {
        assert_eq!(ByteOrder::default(), ByteOrder::BigEndian);
    }
}
