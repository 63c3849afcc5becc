//! Codec contract and combinator framework.
//!
//! A [`WireCodec`] implementation gives a type one fixed wire shape: `read`
//! and `write` must be exact inverses (the round-trip law). Codecs are
//! composed, never subclassed: generated schema code assembles its own
//! codec out of the primitive implementations and the optional/sequence
//! combinators in this module.
//!
//! # Capability tagging
//!
//! Each codec carries a [`WireWidth`] describing its wire footprint, so
//! generated code and tooling can reason about element shape structurally
//! instead of comparing codec identities. The sequence fast path itself
//! rides the [`WireCodec::read_seq`] / [`WireCodec::write_seq`] hooks, which
//! the 8-bit codecs override with raw byte runs.

mod collections;
mod primitives;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::error::{CodecError, CodecResult};
use crate::vlq;
use crate::wire::{SliceReader, WireRead, WireWrite};

/// Wire footprint of a codec.
///
/// Fixed-width variants cover the four primitive sizes; everything else is
/// `Variable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireWidth {
    /// One byte on the wire.
    W8,
    /// Two bytes, little-endian.
    W16,
    /// Four bytes, little-endian.
    W32,
    /// Eight bytes, little-endian.
    W64,
    /// Anything else: VLQ integers, strings, composites.
    Variable,
}

impl WireWidth {
    /// Byte length of a fixed-width value, or `None` for `Variable`.
    pub const fn fixed_byte_len(self) -> Option<usize> {
        match self {
            WireWidth::W8 => Some(1),
            WireWidth::W16 => Some(2),
            WireWidth::W32 => Some(4),
            WireWidth::W64 => Some(8),
            WireWidth::Variable => None,
        }
    }
}

/// A pure encode/decode pair for one fixed wire shape.
///
/// # Round-trip law
///
/// `write` followed by `read` on the produced bytes yields a value equal to
/// the original, for every representable value.
///
/// # Example
///
/// ```
/// use strata_codec::codec::{to_bytes, from_bytes};
///
/// let value: Vec<Option<u32>> = vec![Some(7), None];
/// let bytes = to_bytes(&value).unwrap();
/// let back: Vec<Option<u32>> = from_bytes(&bytes).unwrap();
/// assert_eq!(back, value);
/// ```
pub trait WireCodec: Sized {
    /// Structural description of this codec's wire footprint.
    const WIDTH: WireWidth = WireWidth::Variable;

    /// Decode one value from the stream.
    fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self>;

    /// Encode one value onto the stream.
    fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()>;

    /// Decode `len` consecutive values.
    ///
    /// The default reads element by element. Fixed 8-bit codecs override
    /// this with a single raw byte run; the wire shape is identical either
    /// way.
    fn read_seq<R: WireRead>(reader: &mut R, len: usize) -> CodecResult<Vec<Self>> {
        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(Self::read(reader)?);
        }
        Ok(items)
    }

    /// Encode a run of consecutive values.
    fn write_seq<W: WireWrite>(items: &[Self], writer: &mut W) -> CodecResult<()> {
        for item in items {
            item.write(writer)?;
        }
        Ok(())
    }
}

/// Read a union tag and check it against the declared alternative count.
///
/// The tag is the zero-based declaration-order ordinal of the alternative in
/// the version being decoded. A tag at or beyond `variant_count` is
/// malformed input.
///
/// # Example
///
/// ```
/// use strata_codec::codec::read_tag;
/// use strata_codec::wire::SliceReader;
/// use strata_codec::CodecError;
///
/// let mut reader = SliceReader::new(&[0x02]);
/// assert_eq!(read_tag(&mut reader, 3).unwrap(), 2);
///
/// let mut reader = SliceReader::new(&[0x03]);
/// assert!(matches!(read_tag(&mut reader, 3), Err(CodecError::InvalidTag { .. })));
/// ```
pub fn read_tag<R: WireRead>(reader: &mut R, variant_count: usize) -> CodecResult<usize> {
    let tag = vlq::decode_nat(reader)?;
    match tag.to_usize() {
        Some(ordinal) if ordinal < variant_count => Ok(ordinal),
        _ => Err(CodecError::InvalidTag { tag, variant_count }),
    }
}

/// Write a union tag: the alternative's declaration-order ordinal.
pub fn write_tag<W: WireWrite>(writer: &mut W, ordinal: usize) -> CodecResult<()> {
    vlq::encode_nat(writer, &BigUint::from(ordinal))
}

/// Read a VLQ length prefix and narrow it to the host's addressable size.
pub(crate) fn read_length<R: WireRead>(reader: &mut R) -> CodecResult<usize> {
    let length = vlq::decode_nat(reader)?;
    length.to_usize().ok_or(CodecError::LengthOverflow(length))
}

/// Encode a value into a fresh byte vector.
pub fn to_bytes<T: WireCodec>(value: &T) -> CodecResult<Vec<u8>> {
    let mut buf = Vec::new();
    value.write(&mut buf)?;
    Ok(buf)
}

/// Decode a value from the front of a byte slice.
pub fn from_bytes<T: WireCodec>(bytes: &[u8]) -> CodecResult<T> {
    let mut reader = SliceReader::new(bytes);
    T::read(&mut reader)
}
