//! # Value Descriptions
//!
//! [`Type`] is the closed description of every shape the encoder understands.
//! Each [`Binary`](crate::Binary) implementation reports its shape through
//! `binary_type()`, and records built with
//! [`binary_record!`](crate::binary_record) list their fields in declaration
//! order, blank fields included.
//!
//! The description is used for two things: computing the static width of a
//! type (blank fields, fixed arrays, the slice fast path) and naming the
//! offending type when a value cannot be encoded.

use crate::core::binary::size_overflow;
use crate::error::{BinaryError, Result};
use std::fmt;

/// Shape of an encodable value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    /// Pair of `f32`, real part first
    Complex64,
    /// Pair of `f64`, real part first
    Complex128,
    /// Fixed number of elements
    Array(Box<Type>, usize),
    /// Variable number of elements; the length is never encoded
    Slice(Box<Type>),
    /// Composite record with ordered fields
    Struct(&'static str, Vec<Field>),
    /// Reference to a value, dereferenced one level
    Ptr(Box<Type>),
    /// Type whose width is platform-defined or otherwise unrepresentable
    Unsupported(&'static str),
}

/// One field of a [`Type::Struct`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// `None` for blank (padding) fields
    pub name: Option<&'static str>,
    pub ty: Type,
}

impl Field {
    pub fn named(name: &'static str, ty: Type) -> Self {
        Self {
            name: Some(name),
            ty,
        }
    }

    pub fn blank(ty: Type) -> Self {
        Self { name: None, ty }
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_none()
    }
}

impl Type {
    /// Encoded width of this type when it does not depend on a value.
    ///
    /// Returns `Ok(None)` for shapes containing a [`Type::Slice`], whose
    /// width depends on the current length. Any unsupported leaf, at any
    /// depth, is reported as [`BinaryError::UnsupportedType`] naming it.
    pub fn static_size(&self) -> Result<Option<usize>> {
        let size = match self {
            Type::Int8 | Type::Uint8 => 1,
            Type::Int16 | Type::Uint16 => 2,
            Type::Int32 | Type::Uint32 | Type::Float32 => 4,
            Type::Int64 | Type::Uint64 | Type::Float64 | Type::Complex64 => 8,
            Type::Complex128 => 16,
            Type::Array(elem, len) => match elem.static_size()? {
                Some(size) => size.checked_mul(*len).ok_or_else(size_overflow)?,
                None => return Ok(None),
            },
            Type::Slice(elem) => {
                // The element must still be representable.
                elem.static_size()?;
                return Ok(None);
            }
            Type::Struct(_, fields) => {
                let mut total = Some(0usize);
                for field in fields {
                    let width = field.ty.static_size()?;
                    if field.is_blank() && width.is_none() {
                        return Err(BinaryError::UnsupportedType(format!(
                            "blank {}",
                            field.ty
                        )));
                    }
                    total = match (total, width) {
                        (Some(t), Some(w)) => Some(t.checked_add(w).ok_or_else(size_overflow)?),
                        _ => None,
                    };
                }
                return Ok(total);
            }
            Type::Ptr(elem) => {
                if matches!(**elem, Type::Ptr(_)) {
                    return Err(BinaryError::UnsupportedType(self.to_string()));
                }
                return elem.static_size();
            }
            Type::Unsupported(name) => {
                return Err(BinaryError::UnsupportedType((*name).to_string()))
            }
        };
        Ok(Some(size))
    }

    /// Width of a blank field of this type; blank fields must be fixed-width
    pub fn blank_size(&self) -> Result<usize> {
        self.static_size()?
            .ok_or_else(|| BinaryError::UnsupportedType(format!("blank {self}")))
    }

    /// True for fixed-width numeric leaves
    pub fn is_numeric(&self) -> bool {
        !matches!(
            self,
            Type::Array(..) | Type::Slice(_) | Type::Struct(..) | Type::Ptr(_) | Type::Unsupported(_)
        )
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int8 => f.write_str("i8"),
            Type::Int16 => f.write_str("i16"),
            Type::Int32 => f.write_str("i32"),
            Type::Int64 => f.write_str("i64"),
            Type::Uint8 => f.write_str("u8"),
            Type::Uint16 => f.write_str("u16"),
            Type::Uint32 => f.write_str("u32"),
            Type::Uint64 => f.write_str("u64"),
            Type::Float32 => f.write_str("f32"),
            Type::Float64 => f.write_str("f64"),
            Type::Complex64 => f.write_str("Complex64"),
            Type::Complex128 => f.write_str("Complex128"),
            Type::Array(elem, len) => write!(f, "[{elem}; {len}]"),
            Type::Slice(elem) => write!(f, "[{elem}]"),
            Type::Struct(name, _) => f.write_str(name),
            Type::Ptr(elem) => write!(f, "&{elem}"),
            Type::Unsupported(name) => f.write_str(name),
        }
    }
}
