//! # Encoding and Decoding
//!
//! Top-level operations and the buffer leaves the [`Binary`] recursion
//! writes to and reads from.
//!
//! Both directions size the value first. Unsupported types and absent
//! values are therefore rejected before a single byte is written to the sink
//! or read from the source. The encoding is then built in a buffer of exactly
//! that size and written with one `write_all`; decoding reads exactly that
//! many bytes with `read_exact` before touching the target, so a short read
//! leaves the target unchanged.
//!
//! ## Usage
//! ```rust
//! use binary_encoding::{read, write, ByteOrder};
//!
//! let mut wire = Vec::new();
//! write(&mut wire, ByteOrder::BigEndian, &[0x0102_0304i32, 0x0506_0708])?;
//! assert_eq!(wire, [1, 2, 3, 4, 5, 6, 7, 8]);
//!
//! let mut ints = vec![0i32; 2];
//! read(&mut wire.as_slice(), ByteOrder::BigEndian, &mut ints)?;
//! assert_eq!(ints, [0x0102_0304, 0x0506_0708]);
//! # Ok::<(), binary_encoding::BinaryError>(())
//! ```

use crate::core::binary::Binary;
use crate::core::byte_order::ByteOrder;
use crate::error::{constants, BinaryError, Result};
use byteorder::{BigEndian, ByteOrder as _, LittleEndian};
use bytes::{BufMut, Bytes, BytesMut};
use std::io::{self, Read, Write};
use tracing::trace;

/// Output buffer for one encode call
#[derive(Debug)]
pub struct Encoder {
    buf: BytesMut,
    order: ByteOrder,
}

impl Encoder {
    pub fn new(order: ByteOrder) -> Self {
        Self::with_capacity(order, 0)
    }

    pub fn with_capacity(order: ByteOrder, capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            order,
        }
    }

    #[inline]
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Number of bytes encoded so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn put_u8(&mut self, v: u8) {
        self.buf.put_u8(v);
    }

    #[inline]
    pub fn put_u16(&mut self, v: u16) {
        self.order.write_u16(&mut self.buf, v);
    }

    #[inline]
    pub fn put_u32(&mut self, v: u32) {
        self.order.write_u32(&mut self.buf, v);
    }

    #[inline]
    pub fn put_u64(&mut self, v: u64) {
        self.order.write_u64(&mut self.buf, v);
    }

    pub fn put_slice(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    /// Padding for blank fields
    pub fn put_zeros(&mut self, count: usize) {
        self.buf.put_bytes(0, count);
    }

    pub(crate) fn put_u8_all<I: ExactSizeIterator<Item = u8>>(&mut self, values: I) {
        self.buf.reserve(values.len());
        for v in values {
            self.buf.put_u8(v);
        }
    }

    pub(crate) fn put_u16_all<I: ExactSizeIterator<Item = u16>>(&mut self, values: I) {
        self.buf.reserve(values.len() * 2);
        match self.order {
            ByteOrder::BigEndian => values.for_each(|v| self.buf.put_u16(v)),
            ByteOrder::LittleEndian => values.for_each(|v| self.buf.put_u16_le(v)),
        }
    }

    pub(crate) fn put_u32_all<I: ExactSizeIterator<Item = u32>>(&mut self, values: I) {
        self.buf.reserve(values.len() * 4);
        match self.order {
            ByteOrder::BigEndian => values.for_each(|v| self.buf.put_u32(v)),
            ByteOrder::LittleEndian => values.for_each(|v| self.buf.put_u32_le(v)),
        }
    }

    pub(crate) fn put_u64_all<I: ExactSizeIterator<Item = u64>>(&mut self, values: I) {
        self.buf.reserve(values.len() * 8);
        match self.order {
            ByteOrder::BigEndian => values.for_each(|v| self.buf.put_u64(v)),
            ByteOrder::LittleEndian => values.for_each(|v| self.buf.put_u64_le(v)),
        }
    }

    /// Finish encoding and hand over the bytes
    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }
}

/// Input cursor for one decode call
#[derive(Debug)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    order: ByteOrder,
}

impl<'a> Decoder<'a> {
    pub fn new(buf: &'a [u8], order: ByteOrder) -> Self {
        Self { buf, order }
    }

    #[inline]
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    /// Consume exactly `count` bytes
    pub fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        let buf: &'a [u8] = self.buf;
        if buf.len() < count {
            return Err(short_read(count, buf.len()));
        }
        let (head, tail) = buf.split_at(count);
        self.buf = tail;
        Ok(head)
    }

    /// Discard the bytes of a blank field
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.take(count).map(|_| ())
    }

    pub fn copy_to_slice(&mut self, dst: &mut [u8]) -> Result<()> {
        dst.copy_from_slice(self.take(dst.len())?);
        Ok(())
    }

    #[inline]
    pub fn get_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    #[inline]
    pub fn get_u16(&mut self) -> Result<u16> {
        let mut src = self.take(2)?;
        Ok(self.order.read_u16(&mut src))
    }

    #[inline]
    pub fn get_u32(&mut self) -> Result<u32> {
        let mut src = self.take(4)?;
        Ok(self.order.read_u32(&mut src))
    }

    #[inline]
    pub fn get_u64(&mut self) -> Result<u64> {
        let mut src = self.take(8)?;
        Ok(self.order.read_u64(&mut src))
    }

    pub(crate) fn get_u16_into<T>(&mut self, dst: &mut [T], from_raw: impl Fn(u16) -> T) -> Result<()> {
        let src = self.take(dst.len() * 2)?.chunks_exact(2);
        match self.order {
            ByteOrder::BigEndian => fill(dst, src, |c| from_raw(BigEndian::read_u16(c))),
            ByteOrder::LittleEndian => fill(dst, src, |c| from_raw(LittleEndian::read_u16(c))),
        }
        Ok(())
    }

    pub(crate) fn get_u32_into<T>(&mut self, dst: &mut [T], from_raw: impl Fn(u32) -> T) -> Result<()> {
        let src = self.take(dst.len() * 4)?.chunks_exact(4);
        match self.order {
            ByteOrder::BigEndian => fill(dst, src, |c| from_raw(BigEndian::read_u32(c))),
            ByteOrder::LittleEndian => fill(dst, src, |c| from_raw(LittleEndian::read_u32(c))),
        }
        Ok(())
    }

    pub(crate) fn get_u64_into<T>(&mut self, dst: &mut [T], from_raw: impl Fn(u64) -> T) -> Result<()> {
        let src = self.take(dst.len() * 8)?.chunks_exact(8);
        match self.order {
            ByteOrder::BigEndian => fill(dst, src, |c| from_raw(BigEndian::read_u64(c))),
            ByteOrder::LittleEndian => fill(dst, src, |c| from_raw(LittleEndian::read_u64(c))),
        }
        Ok(())
    }
}

#[inline]
fn fill<'a, T>(dst: &mut [T], src: impl Iterator<Item = &'a [u8]>, convert: impl Fn(&[u8]) -> T) {
    for (slot, chunk) in dst.iter_mut().zip(src) {
        *slot = convert(chunk);
    }
}

fn short_read(wanted: usize, available: usize) -> BinaryError {
    BinaryError::Io(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("short read: need {wanted} bytes, {available} available"),
    ))
}

/// Number of bytes `value` encodes to.
///
/// Fails with [`BinaryError::UnsupportedType`] if any nested type has no
/// fixed width, and with [`BinaryError::InvalidArgument`] for an absent
/// (`None`) value. Performs no I/O.
pub fn size<T: Binary + ?Sized>(value: &T) -> Result<usize> {
    value.binary_size()
}

/// Encode `value` into an in-memory buffer
pub fn to_bytes<T: Binary + ?Sized>(order: ByteOrder, value: &T) -> Result<Bytes> {
    let size = value.binary_size()?;
    let mut enc = Encoder::with_capacity(order, size);
    value.encode(&mut enc)?;
    debug_assert_eq!(enc.len(), size, "binary_size disagrees with encode");
    trace!(size, %order, "encoded value");
    Ok(enc.into_bytes())
}

/// Encode `value` and write it to `sink` with a single `write_all`.
///
/// Nothing is written when the value is rejected. An I/O error from the sink
/// is returned unchanged and whatever the sink accepted stays there.
pub fn write<W: Write, T: Binary + ?Sized>(mut sink: W, order: ByteOrder, value: &T) -> Result<()> {
    let bytes = to_bytes(order, value)?;
    sink.write_all(&bytes)?;
    Ok(())
}

/// Fill `target` from the first bytes of `data`, returning how many were used.
///
/// Sequences inside `target` keep their current length. Trailing bytes are
/// ignored; too few bytes is a short-read I/O error and leaves `target`
/// unchanged.
pub fn from_bytes<T: Binary + ?Sized>(data: &[u8], order: ByteOrder, target: &mut T) -> Result<usize> {
    if !T::WRITABLE {
        return Err(BinaryError::InvalidArgument(constants::ERR_NOT_WRITABLE));
    }
    let size = T::binary_size(target)?;
    if data.len() < size {
        return Err(short_read(size, data.len()));
    }
    let mut dec = Decoder::new(&data[..size], order);
    target.decode(&mut dec)?;
    debug_assert_eq!(dec.remaining(), 0, "binary_size disagrees with decode");
    trace!(size, %order, "decoded value");
    Ok(size)
}

/// Read exactly as many bytes as `target` encodes to from `source` and
/// decode them into `target`.
///
/// The target must be writable: decoding through a shared reference or into
/// `None` is [`BinaryError::InvalidArgument`], raised before any I/O.
pub fn read<R: Read, T: Binary + ?Sized>(mut source: R, order: ByteOrder, target: &mut T) -> Result<()> {
    if !T::WRITABLE {
        return Err(BinaryError::InvalidArgument(constants::ERR_NOT_WRITABLE));
    }
    let size = T::binary_size(target)?;
    let mut buf = vec![0u8; size];
    source.read_exact(&mut buf)?;
    from_bytes(&buf, order, target)?;
    Ok(())
}
