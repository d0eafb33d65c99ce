use crate::config::CodecConfig;
use crate::core::binary::Binary;
use crate::core::byte_order::ByteOrder;
use crate::core::codec;
use crate::error::{BinaryError, Result};

use bytes::Bytes;
use std::io::{Read, Write};
use tracing::{debug, instrument};

/// Encoder/decoder bound to one byte order and a maximum value size.
///
/// Cheap to clone and safe to share between threads; it holds no state
/// beyond its configuration.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Build a codec, rejecting an invalid configuration
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate_strict()?;
        Ok(Self { config })
    }

    /// Codec with default limits and the given byte order
    pub fn with_byte_order(byte_order: ByteOrder) -> Self {
        Self {
            config: CodecConfig::default_with_overrides(|c| c.byte_order = byte_order),
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.config.byte_order
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encoded size of `value`, checked against the configured limit
    pub fn size<T: Binary + ?Sized>(&self, value: &T) -> Result<usize> {
        let size = codec::size(value)?;
        if size > self.config.max_value_size {
            debug!(size, limit = self.config.max_value_size, "Value exceeds size limit");
            return Err(BinaryError::OversizedValue(size));
        }
        Ok(size)
    }

    #[instrument(skip(self, value), level = "debug")]
    pub fn to_bytes<T: Binary + ?Sized>(&self, value: &T) -> Result<Bytes> {
        self.size(value)?;
        codec::to_bytes(self.config.byte_order, value)
    }

    #[instrument(skip(self, sink, value), level = "debug")]
    pub fn write<W: Write, T: Binary + ?Sized>(&self, sink: W, value: &T) -> Result<()> {
        self.size(value)?;
        codec::write(sink, self.config.byte_order, value)
    }

    #[instrument(skip(self, data, target), level = "debug")]
    pub fn from_bytes<T: Binary + ?Sized>(&self, data: &[u8], target: &mut T) -> Result<usize> {
        self.size(&*target)?;
        codec::from_bytes(data, self.config.byte_order, target)
    }

    #[instrument(skip(self, source, target), level = "debug")]
    pub fn read<R: Read, T: Binary + ?Sized>(&self, source: R, target: &mut T) -> Result<()> {
        self.size(&*target)?;
        codec::read(source, self.config.byte_order, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_uses_configured_order() {
        let codec = Codec::with_byte_order(ByteOrder::LittleEndian);
        let bytes = codec.to_bytes(&0x0102u16).expect("encode");
        assert_eq!(&bytes[..], &[0x02, 0x01]);

        let mut value = 0u16;
        codec.from_bytes(&bytes, &mut value).expect("decode");
        assert_eq!(value, 0x0102);
    }

    #[test]
    fn test_codec_rejects_oversized_before_io() {
        let codec = Codec::new(CodecConfig::default_with_overrides(|c| c.max_value_size = 8))
            .expect("valid config");
        let mut sink = Vec::new();
        let result = codec.write(&mut sink, &[0u32; 3]);
        assert!(matches!(result, Err(BinaryError::OversizedValue(12))));
        assert!(sink.is_empty());

        let mut target = [0u32; 3];
        let mut source: &[u8] = &[0xAB; 12];
        assert!(matches!(
            codec.read(&mut source, &mut target),
            Err(BinaryError::OversizedValue(12))
        ));
        assert_eq!(source.len(), 12);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CodecConfig::default_with_overrides(|c| c.max_value_size = 0);
        assert!(matches!(Codec::new(config), Err(BinaryError::ConfigError(_))));
    }
}
