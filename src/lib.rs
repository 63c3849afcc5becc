//! # Strata Codec
//!
//! A schema-evolution-aware binary serialization runtime: strongly-typed
//! values encode to and decode from a compact byte stream, and a schema may
//! have several coexisting versions with explicit, composable migration
//! functions between consecutive versions.
//!
//! ## Features
//!
//! - **VLQ integers**: every length and every arbitrary-precision integer
//!   uses a 7-bits-per-byte variable-length encoding with unbounded range
//! - **Codec combinators**: optional values, homogeneous sequences, tagged
//!   unions, and fixed-shape records compose out of one [`WireCodec`]
//!   contract
//! - **Version migration**: each version upgrades from its predecessor via
//!   [`MigrateFrom`]; chains compose to migrate arbitrarily far forward
//! - **Stateless**: every codec and converter is a pure function; distinct
//!   streams may be processed in parallel without locking
//!
//! ## Quick Start
//!
//! ```
//! use strata_codec::codec::{from_bytes, to_bytes, WireCodec};
//! use strata_codec::wire::{WireRead, WireWrite};
//! use strata_codec::CodecResult;
//!
//! // The shape a schema compiler would emit for `struct Probe { offset: i32 }`.
//! #[derive(Debug, PartialEq)]
//! struct Probe {
//!     offset: i32,
//! }
//!
//! impl WireCodec for Probe {
//!     fn read<R: WireRead>(reader: &mut R) -> CodecResult<Self> {
//!         Ok(Probe { offset: i32::read(reader)? })
//!     }
//!
//!     fn write<W: WireWrite>(&self, writer: &mut W) -> CodecResult<()> {
//!         self.offset.write(writer)
//!     }
//! }
//!
//! let bytes = to_bytes(&Probe { offset: 42 }).unwrap();
//! assert_eq!(from_bytes::<Probe>(&bytes).unwrap(), Probe { offset: 42 });
//! ```
//!
//! ## Modules
//!
//! - [`wire`] - Byte stream boundary: [`wire::WireRead`], [`wire::WireWrite`],
//!   in-memory implementations
//! - [`vlq`] - Variable-length integer engine
//! - [`codec`] - [`WireCodec`] contract, primitive codecs, combinators
//! - [`migration`] - Version migration traits and converter utilities
//! - [`error`] - Error types ([`CodecError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod codec;
pub mod error;
pub mod migration;
pub mod prelude;
pub mod vlq;
pub mod wire;

// Re-export commonly used types
pub use codec::WireCodec;
pub use error::{CodecError, CodecResult};
pub use migration::MigrateFrom;
