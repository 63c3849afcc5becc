//! Migration traits for versioned schema evolution.
//!
//! A schema name denotes a totally ordered family of shapes `V1 … Vn`, each
//! with its own codec. Every version after the first implements
//! [`MigrateFrom`] of its predecessor; migrating further forward is the
//! left-to-right composition of those single steps, captured by
//! [`MigrateChain`]. Migrations are pure functions invoked on demand; there
//! is no registry and nothing is cached.
//!
//! # Architecture
//!
//! For structs, a step copies retained fields (recursively converting nested
//! versioned fields) and supplies a value for each newly introduced field.
//! For unions, a step maps every old alternative to its counterpart in the
//! next version; alternatives introduced by the new version are never
//! produced by the step. The compiler inlines chained conversions through
//! monomorphization, so a `V1 -> V2 -> V3` chain costs the same as a direct
//! conversion in optimized builds.
//!
//! # Example
//!
//! ```
//! use strata_codec::migration::{MigrateFrom, VersionedSchema};
//!
//! struct ProbeV1 {
//!     offset: i32,
//! }
//!
//! struct ProbeV2 {
//!     offset: i64,
//! }
//!
//! impl VersionedSchema for ProbeV1 {
//!     const SCHEMA: &'static str = "Probe";
//!     const VERSION: u32 = 1;
//!     const IS_CURRENT: bool = false;
//! }
//!
//! impl VersionedSchema for ProbeV2 {
//!     const SCHEMA: &'static str = "Probe";
//!     const VERSION: u32 = 2;
//!     const IS_CURRENT: bool = true;
//! }
//!
//! impl MigrateFrom<ProbeV1> for ProbeV2 {
//!     fn migrate_from(prev: ProbeV1) -> Self {
//!         ProbeV2 { offset: i64::from(prev.offset) }
//!     }
//! }
//!
//! let v1 = ProbeV1 { offset: 3 };
//! let v2 = ProbeV2::migrate_from(v1);
//! assert_eq!(v2.offset, 3);
//! ```

mod convert;
mod traits;

pub use convert::*;
pub use traits::*;
