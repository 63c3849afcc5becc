//! Converter utilities for structural migration of values.
//!
//! A [`Convert`] implementation is a total, pure mapping from one shape to
//! another, used exclusively while migrating between schema versions.
//! Container converters lift an element converter over sequences and
//! optionals; [`Identity`] short-circuits the whole tree.

/// Total, pure mapping from shape `A` to shape `B`.
pub trait Convert<A, B> {
    /// Map one value.
    fn convert(&self, value: A) -> B;
}

/// The identity conversion.
///
/// `Identity` applies at any shape, including whole containers: converting a
/// `Vec<A>` with `Identity` hands back the same vector by move, with no
/// allocation and no per-element work. The skip is expressed in the type
/// system rather than checked at runtime.
///
/// # Example
///
/// ```
/// use strata_codec::migration::{Convert, Identity};
///
/// let items = vec![1, 2, 3];
/// let out: Vec<i32> = Identity.convert(items);
/// assert_eq!(out, [1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<A> Convert<A, A> for Identity {
    fn convert(&self, value: A) -> A {
        value
    }
}

/// Adapter turning a plain function into a converter.
///
/// # Example
///
/// ```
/// use strata_codec::migration::{Convert, FnConvert};
///
/// let widen = FnConvert(|x: i32| i64::from(x));
/// assert_eq!(widen.convert(3), 3i64);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnConvert<F>(pub F);

impl<A, B, F: Fn(A) -> B> Convert<A, B> for FnConvert<F> {
    fn convert(&self, value: A) -> B {
        (self.0)(value)
    }
}

/// Lifts an element converter over a sequence.
///
/// Allocates a fresh vector and maps every element; the result is
/// observationally identical to an element-by-element copy. Use [`Identity`]
/// directly when the element conversion is the identity.
#[derive(Debug, Clone, Copy)]
pub struct SeqConvert<C>(pub C);

impl<A, B, C: Convert<A, B>> Convert<Vec<A>, Vec<B>> for SeqConvert<C> {
    fn convert(&self, value: Vec<A>) -> Vec<B> {
        value.into_iter().map(|item| self.0.convert(item)).collect()
    }
}

/// Lifts an element converter over an optional value.
#[derive(Debug, Clone, Copy)]
pub struct OptionConvert<C>(pub C);

impl<A, B, C: Convert<A, B>> Convert<Option<A>, Option<B>> for OptionConvert<C> {
    fn convert(&self, value: Option<A>) -> Option<B> {
        value.map(|item| self.0.convert(item))
    }
}
