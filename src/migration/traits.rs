//! Core traits for single-step and chained version migration.

/// Trait for upgrading from the immediately preceding version.
///
/// Each version `Vn` (n > 1) of a schema implements
/// `MigrateFrom<Vn-1>`. The function is total: every old value maps to
/// exactly one new value, with newly introduced fields filled from literal
/// or computed defaults.
///
/// # Example
///
/// ```
/// use strata_codec::migration::MigrateFrom;
///
/// struct ReadingV1 {
///     device: i32,
///     count: i64,
/// }
///
/// struct ReadingV2 {
///     device: i32,
///     count: i64,
///     label: String,
/// }
///
/// impl MigrateFrom<ReadingV1> for ReadingV2 {
///     fn migrate_from(prev: ReadingV1) -> Self {
///         ReadingV2 {
///             device: prev.device,
///             count: prev.count,
///             label: String::new(),
///         }
///     }
/// }
///
/// let v2 = ReadingV2::migrate_from(ReadingV1 { device: 7, count: 9 });
/// assert_eq!(v2.device, 7);
/// assert_eq!(v2.label, "");
/// ```
pub trait MigrateFrom<Prev>: Sized {
    /// Convert a value of the previous version into this version.
    fn migrate_from(prev: Prev) -> Self;
}

/// Marker trait tying a shape to its place in a schema family.
///
/// Generated code implements this for every version of every schema. The
/// constants let tests and tooling reason about ordering without inspecting
/// values.
pub trait VersionedSchema: Sized {
    /// The schema family name.
    const SCHEMA: &'static str;

    /// The version number of this shape, starting at 1.
    const VERSION: u32;

    /// Whether this is the newest version of the family.
    const IS_CURRENT: bool;
}

/// Trait for migrating through a chain of consecutive versions.
///
/// Chains compose left to right out of [`MigrateFrom`] steps; there is no
/// shortcut path, so migrating `V1 -> V3` and then `V3 -> V4` observes the
/// same intermediate values as migrating `V1 -> V4` directly.
pub trait MigrateChain<Target>: Sized {
    /// The number of single-version steps in the chain.
    const CHAIN_LENGTH: usize;

    /// Migrate through every intermediate version to reach `Target`.
    fn migrate_chain(self) -> Target;
}

// Reflexive base case: any shape reaches itself in zero steps.
impl<T> MigrateChain<T> for T {
    const CHAIN_LENGTH: usize = 0;

    fn migrate_chain(self) -> T {
        self
    }
}

// Transitive impls would overlap the reflexive one under coherence, so the
// per-schema chain impls are emitted alongside the generated versions:
// impl MigrateChain<ReadingV3> for ReadingV1 { ... }
// when ReadingV2: MigrateFrom<ReadingV1> and ReadingV3: MigrateFrom<ReadingV2>.
