//! # Records
//!
//! [`binary_record!`](crate::binary_record) declares a plain struct together
//! with its [`Binary`](crate::Binary) and [`BinaryType`](crate::BinaryType)
//! implementations. Fields are encoded in declaration order.
//!
//! A field written as `_: T` is a blank field. It gets no storage in the
//! generated struct; it encodes as `T`'s full width of zero bytes and decodes
//! by skipping that many bytes. Blank fields must have a fixed width.
//!
//! ```rust
//! use binary_encoding::{binary_record, to_bytes, ByteOrder};
//!
//! binary_record! {
//!     #[derive(Debug, Default, PartialEq)]
//!     pub struct Header {
//!         pub kind: u8,
//!         _: [u8; 3],
//!         pub length: u32,
//!     }
//! }
//!
//! let header = Header { kind: 7, length: 0x0102_0304 };
//! let bytes = to_bytes(ByteOrder::BigEndian, &header)?;
//! assert_eq!(&bytes[..], &[7, 0, 0, 0, 1, 2, 3, 4]);
//! # Ok::<(), binary_encoding::BinaryError>(())
//! ```

/// Declare a struct with a byte-exact binary layout.
///
/// Named fields may carry attributes and a visibility; blank fields are
/// written `_: Type`. Every field type must implement both
/// [`Binary`](crate::Binary) and [`BinaryType`](crate::BinaryType).
#[macro_export]
macro_rules! binary_record {
    // blank field
    (@munch $head:tt [$($fields:tt)*] [$($steps:tt)*] _ : $ty:ty $(, $($rest:tt)*)?) => {
        $crate::binary_record!(@munch
            $head
            [$($fields)*]
            [$($steps)* (blank $ty)]
            $($($rest)*)?
        );
    };

    // all fields consumed
    (@munch [$(#[$meta:meta])* $vis:vis struct $name:ident] [$($fields:tt)*] [$($steps:tt)*]) => {
        $(#[$meta])*
        $vis struct $name {
            $($fields)*
        }

        impl $crate::BinaryType for $name {
            fn binary_type() -> $crate::Type {
                $crate::Type::Struct(
                    stringify!($name),
                    vec![$($crate::binary_record!(@field $steps)),*],
                )
            }
        }

        #[allow(unused_mut, unused_variables)]
        impl $crate::Binary for $name {
            fn binary_size(&self) -> $crate::Result<usize> {
                let mut size = 0usize;
                $(
                    size = size
                        .checked_add($crate::binary_record!(@size self $steps))
                        .ok_or($crate::BinaryError::OversizedValue(usize::MAX))?;
                )*
                Ok(size)
            }

            fn encode(&self, enc: &mut $crate::Encoder) -> $crate::Result<()> {
                $($crate::binary_record!(@encode self enc $steps);)*
                Ok(())
            }

            fn decode(&mut self, dec: &mut $crate::Decoder<'_>) -> $crate::Result<()> {
                $($crate::binary_record!(@decode self dec $steps);)*
                Ok(())
            }
        }
    };

    // named field
    (@munch $head:tt [$($fields:tt)*] [$($steps:tt)*]
        $(#[$fmeta:meta])* $fvis:vis $fname:ident : $ty:ty $(, $($rest:tt)*)?) => {
        $crate::binary_record!(@munch
            $head
            [$($fields)* $(#[$fmeta])* $fvis $fname: $ty,]
            [$($steps)* (named $fname $ty)]
            $($($rest)*)?
        );
    };

    (@field (named $fname:ident $ty:ty)) => {
        $crate::Field::named(stringify!($fname), <$ty as $crate::BinaryType>::binary_type())
    };
    (@field (blank $ty:ty)) => {
        $crate::Field::blank(<$ty as $crate::BinaryType>::binary_type())
    };

    (@size $self:ident (named $fname:ident $ty:ty)) => {
        $crate::Binary::binary_size(&$self.$fname)?
    };
    (@size $self:ident (blank $ty:ty)) => {
        <$ty as $crate::BinaryType>::binary_type().blank_size()?
    };

    (@encode $self:ident $enc:ident (named $fname:ident $ty:ty)) => {
        $crate::Binary::encode(&$self.$fname, $enc)?
    };
    (@encode $self:ident $enc:ident (blank $ty:ty)) => {
        $enc.put_zeros(<$ty as $crate::BinaryType>::binary_type().blank_size()?)
    };

    (@decode $self:ident $dec:ident (named $fname:ident $ty:ty)) => {
        $crate::Binary::decode(&mut $self.$fname, $dec)?
    };
    (@decode $self:ident $dec:ident (blank $ty:ty)) => {
        $dec.skip(<$ty as $crate::BinaryType>::binary_type().blank_size()?)?
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::binary_record!(@munch
            [$(#[$meta])* $vis struct $name]
            []
            []
            $($body)*
        );
    };
}
