use num_bigint::BigUint;
use thiserror::Error;

pub type CodecResult<T> = Result<T, CodecError>;

/// Errors surfaced by encode and decode operations.
///
/// All of these abort the in-flight operation immediately; a corrupt stream
/// is never resynchronized. Callers should discard the entire decode on any
/// error.
#[derive(Error, Debug)]
pub enum CodecError {
    /// A read was requested beyond the end of the available bytes.
    #[error("unexpected end of stream")]
    EndOfStream,

    /// A union decode read a tag outside the declared alternative range.
    #[error("union tag {tag} out of range (expected 0..{variant_count})")]
    InvalidTag {
        /// The tag value found on the wire.
        tag: BigUint,
        /// The number of alternatives declared in this version.
        variant_count: usize,
    },

    /// A decoded length does not fit the host's addressable size.
    #[error("declared length {0} exceeds addressable memory")]
    LengthOverflow(BigUint),

    /// A string payload was not valid UTF-8.
    #[error("invalid utf-8 in string payload")]
    InvalidString(#[from] std::string::FromUtf8Error),
}
