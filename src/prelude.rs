//! Prelude module for convenient imports.
//!
//! Re-exports the types and traits most users need, allowing a single
//! import to get started.
//!
//! # Usage
//!
//! ```rust
//! use strata_codec::prelude::*;
//! ```
//!
//! # What's Included
//!
//! ## Codec Contract
//!
//! - [`WireCodec`]: the encode/decode pair every wire shape implements
//! - [`WireWidth`]: structural wire-footprint tag
//! - [`to_bytes`] / [`from_bytes`]: buffer conveniences
//! - [`read_tag`] / [`write_tag`]: union dispatch helpers
//!
//! ## Byte Stream Boundary
//!
//! - [`WireRead`] / [`WireWrite`]: sequential byte source and sink
//! - [`SliceReader`]: cursor over a borrowed byte slice
//!
//! ## Migration System
//!
//! - [`MigrateFrom`]: single forward version step
//! - [`MigrateChain`]: composed multi-version migration
//! - [`VersionedSchema`]: family name / version number markers
//! - [`Convert`], [`Identity`], [`FnConvert`], [`SeqConvert`],
//!   [`OptionConvert`]: structural converters
//!
//! ## Error Handling
//!
//! - [`CodecError`]: error type for all operations
//! - [`CodecResult`]: result alias (`Result<T, CodecError>`)

pub use crate::codec::{from_bytes, read_tag, to_bytes, write_tag, WireCodec, WireWidth};
pub use crate::error::{CodecError, CodecResult};
pub use crate::migration::{
    Convert, FnConvert, Identity, MigrateChain, MigrateFrom, OptionConvert, SeqConvert,
    VersionedSchema,
};
pub use crate::wire::{SliceReader, WireRead, WireWrite};
