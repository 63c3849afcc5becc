//! Combinators lifting an element codec into optional and sequence shapes.

use num_bigint::BigUint;

use crate::error::CodecResult;
use crate::vlq;
use crate::wire::{WireRead, WireWrite};

use super::{read_length, WireCodec};

/// Optional value: one presence byte (0 absent, nonzero present), then the
/// payload iff present.
impl<T: WireCodec> WireCodec for Option<T> {
    fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
        let present = reader.read_u8()? != 0;
        if present {
            Ok(Some(T::read(reader)?))
        } else {
            Ok(None)
        }
    }

    fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
        match self {
            Some(value) => {
                writer.write_u8(1)?;
                value.write(writer)
            }
            None => writer.write_u8(0),
        }
    }
}

/// Homogeneous sequence: VLQ element count, then the elements in order.
///
/// Element runs go through [`WireCodec::read_seq`] / [`WireCodec::write_seq`],
/// so 8-bit elements travel as one raw byte run instead of element-by-element
/// dispatch. The wire shape is identical either way; only the I/O pattern
/// differs.
impl<T: WireCodec> WireCodec for Vec<T> {
    fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
        let len = read_length(reader)?;
        T::read_seq(reader, len)
    }

    fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
        vlq::encode_nat(writer, &BigUint::from(self.len()))?;
        T::write_seq(self, writer)
    }
}
