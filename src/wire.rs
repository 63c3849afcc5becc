//! Byte stream boundary for the wire format.
//!
//! Every codec bottoms out in the two traits defined here: [`WireRead`]
//! supplies bytes and fixed-width integers, [`WireWrite`] consumes them.
//! Multi-byte integers always use little-endian order; this is the single
//! fixed endianness of the whole format.
//!
//! The crate ships an in-memory implementation pair: [`SliceReader`] over a
//! borrowed byte slice, and `Vec<u8>` as a growable writer. Reaching the end
//! of input before a read is satisfied is a fatal decode error
//! ([`CodecError::EndOfStream`]); there is no partial-result recovery.

use crate::error::{CodecError, CodecResult};

/// Sequential source of bytes and little-endian fixed-width integers.
pub trait WireRead {
    /// Read a single byte.
    fn read_u8(&mut self) -> CodecResult<u8>;

    /// Read a 16-bit little-endian integer.
    fn read_u16(&mut self) -> CodecResult<u16>;

    /// Read a 32-bit little-endian integer.
    fn read_u32(&mut self) -> CodecResult<u32>;

    /// Read a 64-bit little-endian integer.
    fn read_u64(&mut self) -> CodecResult<u64>;

    /// Read exactly `len` raw bytes.
    fn read_bytes(&mut self, len: usize) -> CodecResult<Vec<u8>>;
}

/// Sequential sink of bytes and little-endian fixed-width integers.
pub trait WireWrite {
    /// Write a single byte.
    fn write_u8(&mut self, value: u8) -> CodecResult<()>;

    /// Write a 16-bit little-endian integer.
    fn write_u16(&mut self, value: u16) -> CodecResult<()>;

    /// Write a 32-bit little-endian integer.
    fn write_u32(&mut self, value: u32) -> CodecResult<()>;

    /// Write a 64-bit little-endian integer.
    fn write_u64(&mut self, value: u64) -> CodecResult<()>;

    /// Write a run of raw bytes.
    fn write_bytes(&mut self, data: &[u8]) -> CodecResult<()>;
}

/// Cursor over a borrowed byte slice.
///
/// # Example
///
/// ```
/// use strata_codec::wire::{SliceReader, WireRead};
///
/// let mut reader = SliceReader::new(&[0x2A, 0x01, 0x00]);
/// assert_eq!(reader.read_u8().unwrap(), 0x2A);
/// assert_eq!(reader.read_u16().unwrap(), 1);
/// assert!(reader.is_at_end());
/// assert!(reader.read_u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SliceReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceReader<'a> {
    /// Create a reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos == self.data.len()
    }

    fn take(&mut self, len: usize) -> CodecResult<&'a [u8]> {
        if self.remaining() < len {
            return Err(CodecError::EndOfStream);
        }
        let chunk = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(chunk)
    }
}

impl WireRead for SliceReader<'_> {
    fn read_u8(&mut self) -> CodecResult<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_u16(&mut self) -> CodecResult<u16> {
        let chunk = self.take(2)?;
        Ok(u16::from_le_bytes([chunk[0], chunk[1]]))
    }

    fn read_u32(&mut self) -> CodecResult<u32> {
        let chunk = self.take(4)?;
        Ok(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
    }

    fn read_u64(&mut self) -> CodecResult<u64> {
        let chunk = self.take(8)?;
        Ok(u64::from_le_bytes([
            chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
        ]))
    }

    fn read_bytes(&mut self, len: usize) -> CodecResult<Vec<u8>> {
        Ok(self.take(len)?.to_vec())
    }
}

impl WireWrite for Vec<u8> {
    fn write_u8(&mut self, value: u8) -> CodecResult<()> {
        self.push(value);
        Ok(())
    }

    fn write_u16(&mut self, value: u16) -> CodecResult<()> {
        self.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn write_u32(&mut self, value: u32) -> CodecResult<()> {
        self.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn write_u64(&mut self, value: u64) -> CodecResult<()> {
        self.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> CodecResult<()> {
        self.extend_from_slice(data);
        Ok(())
    }
}
