//! Variable-length integer encoding.
//!
//! Every length prefix and every arbitrary-precision integer field in the
//! format reduces to this module. Values are unbounded: encoding and
//! decoding work over [`BigUint`] / [`BigInt`] and never assume a maximum
//! byte count.
//!
//! # Wire Format
//!
//! The magnitude is bit-packed least-significant-bit first, seven data bits
//! per byte. The high bit of each byte except the last is set to mark that
//! more data follows:
//!
//! ```text
//! +---+-----------+     +---+-----------+
//! | 1 | bits 0..6 | ... | 0 | bits 0..6 |
//! +---+-----------+     +---+-----------+
//!   continuation          terminal byte
//! ```
//!
//! Signed values reserve bit 6 of the terminal byte as the sign flag, so a
//! signed terminal byte carries at most six magnitude bits. A negative value
//! stores `|value + 1|` as its magnitude; decode subtracts 1 back out after
//! negating. This keeps zero representable without a redundant negative
//! form.
//!
//! Leading zero bits beyond the most significant set bit are never emitted,
//! so every value has exactly one encoding. Zero encodes as a single `0x00`
//! byte for both the signed and unsigned flavors.

use num_bigint::{BigInt, BigUint, Sign};

use crate::error::CodecResult;
use crate::wire::{WireRead, WireWrite};

/// High bit of every non-terminal byte.
const CONTINUE: u8 = 0x80;

/// Sign flag position within the terminal byte of a signed value.
const SIGN_BIT: u32 = 6;

/// Bit-level writer that flushes a byte every seven data bits.
struct BitPacker<'w, W: WireWrite> {
    writer: &'w mut W,
    bit_index: u32,
    current: u8,
}

impl<'w, W: WireWrite> BitPacker<'w, W> {
    fn new(writer: &'w mut W) -> Self {
        Self { writer, bit_index: 0, current: 0 }
    }

    fn push_bit(&mut self, bit: bool) -> CodecResult<()> {
        if self.bit_index > 6 {
            self.writer.write_u8(self.current | CONTINUE)?;
            self.bit_index = 0;
            self.current = 0;
        }
        if bit {
            self.current |= 1 << self.bit_index;
        }
        self.bit_index += 1;
        Ok(())
    }

    /// Pad with zero bits up to the sign position, then place the sign flag.
    fn push_sign(&mut self, negative: bool) -> CodecResult<()> {
        while self.bit_index != SIGN_BIT {
            self.push_bit(false)?;
        }
        self.push_bit(negative)
    }

    fn finish(self) -> CodecResult<()> {
        self.writer.write_u8(self.current)
    }
}

/// Decode accumulator: a little-endian byte buffer filled bit by bit.
///
/// `Vec` growth keeps the buffer unbounded; the seven-bit groups on the wire
/// do not line up with the eight-bit bytes here, so bits are repacked one at
/// a time.
struct MagnitudeBuilder {
    bytes: Vec<u8>,
    bit_index: u64,
}

impl MagnitudeBuilder {
    fn new() -> Self {
        Self { bytes: Vec::new(), bit_index: 0 }
    }

    fn push_bit(&mut self, bit: bool) {
        let byte = (self.bit_index / 8) as usize;
        if byte == self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[byte] |= 1 << (self.bit_index % 8);
        }
        self.bit_index += 1;
    }

    fn into_magnitude(self) -> BigUint {
        BigUint::from_bytes_le(&self.bytes)
    }
}

/// Encode an unsigned arbitrary-precision integer.
pub fn encode_nat<W: WireWrite>(writer: &mut W, value: &BigUint) -> CodecResult<()> {
    let mut packer = BitPacker::new(writer);
    for i in 0..value.bits() {
        packer.push_bit(value.bit(i))?;
    }
    packer.finish()
}

/// Encode a signed arbitrary-precision integer.
pub fn encode_int<W: WireWrite>(writer: &mut W, value: &BigInt) -> CodecResult<()> {
    let negative = value.sign() == Sign::Minus;
    // Negative values store |value + 1|; decode undoes the shift.
    let magnitude: BigUint = if negative {
        (value + BigInt::from(1)).magnitude().clone()
    } else {
        value.magnitude().clone()
    };

    let mut packer = BitPacker::new(writer);
    for i in 0..magnitude.bits() {
        packer.push_bit(magnitude.bit(i))?;
    }
    packer.push_sign(negative)?;
    packer.finish()
}

/// Decode an unsigned arbitrary-precision integer.
pub fn decode_nat<R: WireRead>(reader: &mut R) -> CodecResult<BigUint> {
    let (magnitude, _) = decode_magnitude(reader, false)?;
    Ok(magnitude)
}

/// Decode a signed arbitrary-precision integer.
pub fn decode_int<R: WireRead>(reader: &mut R) -> CodecResult<BigInt> {
    let (magnitude, negative) = decode_magnitude(reader, true)?;
    if negative {
        Ok(-BigInt::from(magnitude) - 1)
    } else {
        Ok(BigInt::from(magnitude))
    }
}

fn decode_magnitude<R: WireRead>(reader: &mut R, signed: bool) -> CodecResult<(BigUint, bool)> {
    let mut builder = MagnitudeBuilder::new();

    let mut byte = reader.read_u8()?;
    while byte & CONTINUE != 0 {
        for i in 0..7 {
            builder.push_bit(byte & (1 << i) != 0);
        }
        byte = reader.read_u8()?;
    }

    // The terminal byte of a signed value holds six data bits plus the sign.
    let data_bits = if signed { 6 } else { 7 };
    for i in 0..data_bits {
        builder.push_bit(byte & (1 << i) != 0);
    }
    let negative = signed && byte & (1 << SIGN_BIT) != 0;

    Ok((builder.into_magnitude(), negative))
}
