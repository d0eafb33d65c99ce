//! Complex numbers, encoded as two consecutive floats, real part first.

use crate::core::binary::{Binary, BinaryType};
use crate::core::codec::{Decoder, Encoder};
use crate::core::types::Type;
use crate::error::Result;

/// Complex number with `f32` parts (8 bytes on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex64 {
    pub re: f32,
    pub im: f32,
}

/// Complex number with `f64` parts (16 bytes on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex128 {
    pub re: f64,
    pub im: f64,
}

impl Complex64 {
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }
}

impl Complex128 {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl BinaryType for Complex64 {
    fn binary_type() -> Type {
        Type::Complex64
    }
}

impl Binary for Complex64 {
    fn binary_size(&self) -> Result<usize> {
        Ok(8)
    }

    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.put_u32(self.re.to_bits());
        enc.put_u32(self.im.to_bits());
        Ok(())
    }

    fn decode(&mut self, dec: &mut Decoder<'_>) -> Result<()> {
        self.re = f32::from_bits(dec.get_u32()?);
        self.im = f32::from_bits(dec.get_u32()?);
        Ok(())
    }
}

impl BinaryType for Complex128 {
    fn binary_type() -> Type {
        Type::Complex128
    }
}

impl Binary for Complex128 {
    fn binary_size(&self) -> Result<usize> {
        Ok(16)
    }

    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.put_u64(self.re.to_bits());
        enc.put_u64(self.im.to_bits());
        Ok(())
    }

    fn decode(&mut self, dec: &mut Decoder<'_>) -> Result<()> {
        self.re = f64::from_bits(dec.get_u64()?);
        self.im = f64::from_bits(dec.get_u64()?);
        Ok(())
    }
}
