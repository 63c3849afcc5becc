//! Codecs for the primitive schema types.
//!
//! Fixed-width integers pass straight through the byte stream boundary.
//! Unsigned and signed variants of one width share a single wire shape; the
//! distinction is purely how the bits are interpreted. `nat` and `int`
//! delegate to the VLQ engine, and strings are a VLQ byte-length prefix
//! followed by raw UTF-8.

use num_bigint::{BigInt, BigUint};

use crate::error::CodecResult;
use crate::vlq;
use crate::wire::{WireRead, WireWrite};

use super::{read_length, WireCodec, WireWidth};

impl WireCodec for u8 {
    const WIDTH: WireWidth = WireWidth::W8;

    fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
        reader.read_u8()
    }

    fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
        writer.write_u8(*self)
    }

    fn read_seq<R: WireRead>(reader: &mut R, len: usize) -> CodecResult<Vec<Self>> {
        reader.read_bytes(len)
    }

    fn write_seq<W: WireWrite>(items: &[Self], writer: &mut W) -> CodecResult<()> {
        writer.write_bytes(items)
    }
}

impl WireCodec for i8 {
    const WIDTH: WireWidth = WireWidth::W8;

    fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
        Ok(reader.read_u8()? as i8)
    }

    fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
        writer.write_u8(*self as u8)
    }

    fn read_seq<R: WireRead>(reader: &mut R, len: usize) -> CodecResult<Vec<Self>> {
        let bytes = reader.read_bytes(len)?;
        Ok(bytes.into_iter().map(|b| b as i8).collect())
    }

    fn write_seq<W: WireWrite>(items: &[Self], writer: &mut W) -> CodecResult<()> {
        let bytes: Vec<u8> = items.iter().map(|&b| b as u8).collect();
        writer.write_bytes(&bytes)
    }
}

impl WireCodec for u16 {
    const WIDTH: WireWidth = WireWidth::W16;

    fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
        reader.read_u16()
    }

    fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
        writer.write_u16(*self)
    }
}

impl WireCodec for i16 {
    const WIDTH: WireWidth = WireWidth::W16;

    fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
        Ok(reader.read_u16()? as i16)
    }

    fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
        writer.write_u16(*self as u16)
    }
}

impl WireCodec for u32 {
    const WIDTH: WireWidth = WireWidth::W32;

    fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
        reader.read_u32()
    }

    fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
        writer.write_u32(*self)
    }
}

impl WireCodec for i32 {
    const WIDTH: WireWidth = WireWidth::W32;

    fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
        Ok(reader.read_u32()? as i32)
    }

    fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
        writer.write_u32(*self as u32)
    }
}

impl WireCodec for u64 {
    const WIDTH: WireWidth = WireWidth::W64;

    fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
        reader.read_u64()
    }

    fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
        writer.write_u64(*self)
    }
}

impl WireCodec for i64 {
    const WIDTH: WireWidth = WireWidth::W64;

    fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
        Ok(reader.read_u64()? as i64)
    }

    fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
        writer.write_u64(*self as u64)
    }
}

/// Natural number: unsigned VLQ of unbounded magnitude.
impl WireCodec for BigUint {
    fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
        vlq::decode_nat(reader)
    }

    fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
        vlq::encode_nat(writer, self)
    }
}

/// Signed integer: signed VLQ of unbounded magnitude.
impl WireCodec for BigInt {
    fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
        vlq::decode_int(reader)
    }

    fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
        vlq::encode_int(writer, self)
    }
}

/// UTF-8 string: VLQ byte length (not character count) plus raw bytes.
///
/// Decoding fails if the declared length does not fit in `usize` or the
/// payload is not valid UTF-8.
impl WireCodec for String {
    fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
        let len = read_length(reader)?;
        let bytes = reader.read_bytes(len)?;
        Ok(String::from_utf8(bytes)?)
    }

    fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
        let bytes = self.as_bytes();
        vlq::encode_nat(writer, &BigUint::from(bytes.len()))?;
        writer.write_bytes(bytes)
    }
}
