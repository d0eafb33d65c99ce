//! # The `Binary` Trait
//!
//! Per-type recursion for sizing, encoding and decoding.
//!
//! | Rust type | Shape | Encoding |
//! |---|---|---|
//! | `i8`..`i64`, `u8`..`u64` | integer | 1/2/4/8 bytes in the chosen order |
//! | `f32`, `f64` | float | IEEE-754 bits as `u32`/`u64` |
//! | `Complex64`, `Complex128` | complex | real part, then imaginary part |
//! | `[T; N]` | fixed array | `N` elements back to back |
//! | `Vec<T>`, `[T]` | sequence | current elements back to back, no length prefix |
//! | records from `binary_record!` | struct | fields in declaration order |
//! | `&T`, `&mut T`, `Box<T>`, `Option<T>` | pointer | the referenced value, one level deep |
//! | `isize`, `usize` | unsupported | always [`BinaryError::UnsupportedType`] |
//!
//! Sequences of fixed-width numbers take a fast path: the byte order is
//! matched once per sequence and the elements are converted in a tight typed
//! loop (`u8`/`i8` are copied in bulk).

use crate::core::codec::{Decoder, Encoder};
use crate::core::types::Type;
use crate::error::{constants, BinaryError, Result};
use std::any::type_name;
use std::mem::size_of;

/// Static description of a sized type, used for blank fields, fixed arrays
/// and record descriptions
pub trait BinaryType {
    fn binary_type() -> Type;
}

/// A value that can be encoded to and decoded from its byte-exact form
pub trait Binary {
    /// `true` for reference-like wrappers, which may not wrap another one
    const INDIRECT: bool = false;

    /// `false` when the value cannot be decoded into in place
    const WRITABLE: bool = true;

    /// Exact number of bytes [`encode`](Binary::encode) produces for this value
    fn binary_size(&self) -> Result<usize>;

    /// Append the encoding of this value
    fn encode(&self, enc: &mut Encoder) -> Result<()>;

    /// Fill this value in place from the decoder
    fn decode(&mut self, dec: &mut Decoder<'_>) -> Result<()>;

    #[doc(hidden)]
    fn encode_slice(items: &[Self], enc: &mut Encoder) -> Result<()>
    where
        Self: Sized,
    {
        items.iter().try_for_each(|item| item.encode(enc))
    }

    #[doc(hidden)]
    fn decode_slice(items: &mut [Self], dec: &mut Decoder<'_>) -> Result<()>
    where
        Self: Sized,
    {
        items.iter_mut().try_for_each(|item| item.decode(dec))
    }
}

/// Encoded size of a run of elements
fn elements_size<T: Binary + BinaryType>(items: &[T]) -> Result<usize> {
    match T::binary_type().static_size()? {
        Some(width) => width.checked_mul(items.len()).ok_or_else(size_overflow),
        None => items.iter().try_fold(0usize, |total, item| {
            total.checked_add(item.binary_size()?).ok_or_else(size_overflow)
        }),
    }
}

/// A size that does not fit in `usize`
pub(crate) fn size_overflow() -> BinaryError {
    BinaryError::OversizedValue(usize::MAX)
}

fn check_indirect<T: Binary + ?Sized>() -> Result<()> {
    if T::INDIRECT {
        return Err(BinaryError::UnsupportedType(format!(
            "&{}",
            type_name::<T>()
        )));
    }
    Ok(())
}

macro_rules! impl_numeric {
    ($ty:ty, $variant:ident, $raw:ty, $put:ident, $get:ident, $put_all:ident, $get_into:ident, $to_raw:expr, $from_raw:expr) => {
        impl BinaryType for $ty {
            fn binary_type() -> Type {
                Type::$variant
            }
        }

        impl Binary for $ty {
            #[inline]
            fn binary_size(&self) -> Result<usize> {
                Ok(size_of::<$ty>())
            }

            #[inline]
            fn encode(&self, enc: &mut Encoder) -> Result<()> {
                let to_raw: fn($ty) -> $raw = $to_raw;
                enc.$put(to_raw(*self));
                Ok(())
            }

            #[inline]
            fn decode(&mut self, dec: &mut Decoder<'_>) -> Result<()> {
                let from_raw: fn($raw) -> $ty = $from_raw;
                *self = from_raw(dec.$get()?);
                Ok(())
            }

            fn encode_slice(items: &[Self], enc: &mut Encoder) -> Result<()> {
                let to_raw: fn($ty) -> $raw = $to_raw;
                enc.$put_all(items.iter().map(|v| to_raw(*v)));
                Ok(())
            }

            fn decode_slice(items: &mut [Self], dec: &mut Decoder<'_>) -> Result<()> {
                dec.$get_into(items, $from_raw)
            }
        }
    };
}

impl_numeric!(u16, Uint16, u16, put_u16, get_u16, put_u16_all, get_u16_into, |v| v, |raw| raw);
impl_numeric!(i16, Int16, u16, put_u16, get_u16, put_u16_all, get_u16_into, |v| v as u16, |raw| raw as i16);
impl_numeric!(u32, Uint32, u32, put_u32, get_u32, put_u32_all, get_u32_into, |v| v, |raw| raw);
impl_numeric!(i32, Int32, u32, put_u32, get_u32, put_u32_all, get_u32_into, |v| v as u32, |raw| raw as i32);
impl_numeric!(u64, Uint64, u64, put_u64, get_u64, put_u64_all, get_u64_into, |v| v, |raw| raw);
impl_numeric!(i64, Int64, u64, put_u64, get_u64, put_u64_all, get_u64_into, |v| v as u64, |raw| raw as i64);
impl_numeric!(f32, Float32, u32, put_u32, get_u32, put_u32_all, get_u32_into, f32::to_bits, f32::from_bits);
impl_numeric!(f64, Float64, u64, put_u64, get_u64, put_u64_all, get_u64_into, f64::to_bits, f64::from_bits);

impl BinaryType for u8 {
    fn binary_type() -> Type {
        Type::Uint8
    }
}

impl Binary for u8 {
    #[inline]
    fn binary_size(&self) -> Result<usize> {
        Ok(1)
    }

    #[inline]
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.put_u8(*self);
        Ok(())
    }

    #[inline]
    fn decode(&mut self, dec: &mut Decoder<'_>) -> Result<()> {
        *self = dec.get_u8()?;
        Ok(())
    }

    fn encode_slice(items: &[Self], enc: &mut Encoder) -> Result<()> {
        enc.put_slice(items);
        Ok(())
    }

    fn decode_slice(items: &mut [Self], dec: &mut Decoder<'_>) -> Result<()> {
        dec.copy_to_slice(items)
    }
}

impl BinaryType for i8 {
    fn binary_type() -> Type {
        Type::Int8
    }
}

impl Binary for i8 {
    #[inline]
    fn binary_size(&self) -> Result<usize> {
        Ok(1)
    }

    #[inline]
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.put_u8(*self as u8);
        Ok(())
    }

    #[inline]
    fn decode(&mut self, dec: &mut Decoder<'_>) -> Result<()> {
        *self = dec.get_u8()? as i8;
        Ok(())
    }

    fn encode_slice(items: &[Self], enc: &mut Encoder) -> Result<()> {
        enc.put_u8_all(items.iter().map(|v| *v as u8));
        Ok(())
    }

    fn decode_slice(items: &mut [Self], dec: &mut Decoder<'_>) -> Result<()> {
        let src = dec.take(items.len())?;
        for (dst, byte) in items.iter_mut().zip(src) {
            *dst = *byte as i8;
        }
        Ok(())
    }
}

// Native word-width integers have no fixed wire width.
macro_rules! impl_unsupported {
    ($ty:ty, $name:literal) => {
        impl BinaryType for $ty {
            fn binary_type() -> Type {
                Type::Unsupported($name)
            }
        }

        impl Binary for $ty {
            fn binary_size(&self) -> Result<usize> {
                Err(BinaryError::UnsupportedType($name.to_string()))
            }

            fn encode(&self, _enc: &mut Encoder) -> Result<()> {
                Err(BinaryError::UnsupportedType($name.to_string()))
            }

            fn decode(&mut self, _dec: &mut Decoder<'_>) -> Result<()> {
                Err(BinaryError::UnsupportedType($name.to_string()))
            }
        }
    };
}

impl_unsupported!(isize, "isize");
impl_unsupported!(usize, "usize");

impl<T: BinaryType, const N: usize> BinaryType for [T; N] {
    fn binary_type() -> Type {
        Type::Array(Box::new(T::binary_type()), N)
    }
}

impl<T: Binary + BinaryType, const N: usize> Binary for [T; N] {
    fn binary_size(&self) -> Result<usize> {
        elements_size(self.as_slice())
    }

    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        T::encode_slice(self, enc)
    }

    fn decode(&mut self, dec: &mut Decoder<'_>) -> Result<()> {
        T::decode_slice(self, dec)
    }
}

impl<T: Binary + BinaryType> Binary for [T] {
    fn binary_size(&self) -> Result<usize> {
        elements_size(self)
    }

    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        T::encode_slice(self, enc)
    }

    fn decode(&mut self, dec: &mut Decoder<'_>) -> Result<()> {
        T::decode_slice(self, dec)
    }
}

impl<T: BinaryType> BinaryType for Vec<T> {
    fn binary_type() -> Type {
        Type::Slice(Box::new(T::binary_type()))
    }
}

// The decoder never resizes a sequence; its current length is the contract.
impl<T: Binary + BinaryType> Binary for Vec<T> {
    fn binary_size(&self) -> Result<usize> {
        elements_size(self.as_slice())
    }

    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        T::encode_slice(self, enc)
    }

    fn decode(&mut self, dec: &mut Decoder<'_>) -> Result<()> {
        T::decode_slice(self, dec)
    }
}

impl<T: BinaryType> BinaryType for &T {
    fn binary_type() -> Type {
        Type::Ptr(Box::new(T::binary_type()))
    }
}

impl<T: Binary + ?Sized> Binary for &T {
    const INDIRECT: bool = true;
    const WRITABLE: bool = false;

    fn binary_size(&self) -> Result<usize> {
        check_indirect::<T>()?;
        (**self).binary_size()
    }

    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        check_indirect::<T>()?;
        (**self).encode(enc)
    }

    fn decode(&mut self, _dec: &mut Decoder<'_>) -> Result<()> {
        Err(BinaryError::InvalidArgument(constants::ERR_NOT_WRITABLE))
    }
}

impl<T: BinaryType> BinaryType for &mut T {
    fn binary_type() -> Type {
        Type::Ptr(Box::new(T::binary_type()))
    }
}

impl<T: Binary + ?Sized> Binary for &mut T {
    const INDIRECT: bool = true;
    const WRITABLE: bool = T::WRITABLE;

    fn binary_size(&self) -> Result<usize> {
        check_indirect::<T>()?;
        (**self).binary_size()
    }

    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        check_indirect::<T>()?;
        (**self).encode(enc)
    }

    fn decode(&mut self, dec: &mut Decoder<'_>) -> Result<()> {
        check_indirect::<T>()?;
        (**self).decode(dec)
    }
}

impl<T: BinaryType> BinaryType for Box<T> {
    fn binary_type() -> Type {
        Type::Ptr(Box::new(T::binary_type()))
    }
}

impl<T: Binary + ?Sized> Binary for Box<T> {
    const INDIRECT: bool = true;
    const WRITABLE: bool = T::WRITABLE;

    fn binary_size(&self) -> Result<usize> {
        check_indirect::<T>()?;
        (**self).binary_size()
    }

    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        check_indirect::<T>()?;
        (**self).encode(enc)
    }

    fn decode(&mut self, dec: &mut Decoder<'_>) -> Result<()> {
        check_indirect::<T>()?;
        (**self).decode(dec)
    }
}

impl<T: BinaryType> BinaryType for Option<T> {
    fn binary_type() -> Type {
        Type::Ptr(Box::new(T::binary_type()))
    }
}

/// `None` is the absent value: it has no encoding and cannot be decoded into.
impl<T: Binary> Binary for Option<T> {
    const INDIRECT: bool = true;
    const WRITABLE: bool = T::WRITABLE;

    fn binary_size(&self) -> Result<usize> {
        check_indirect::<T>()?;
        match self {
            Some(value) => value.binary_size(),
            None => Err(BinaryError::InvalidArgument(constants::ERR_NIL_VALUE)),
        }
    }

    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        check_indirect::<T>()?;
        match self {
            Some(value) => value.encode(enc),
            None => Err(BinaryError::InvalidArgument(constants::ERR_NIL_VALUE)),
        }
    }

    fn decode(&mut self, dec: &mut Decoder<'_>) -> Result<()> {
        check_indirect::<T>()?;
        match self {
            Some(value) => value.decode(dec),
            None => Err(BinaryError::InvalidArgument(constants::ERR_NIL_VALUE)),
        }
    }
}
