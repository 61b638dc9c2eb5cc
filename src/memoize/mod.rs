//! Memoizers: a function plus a cache policy deciding when it may be skipped.
//!
//! The default policy keeps one `(arguments, result)` slot and compares
//! arguments position by position with [`ReferenceEquality`]. The first call
//! always runs the function; later calls run it again only when the arity
//! changed or some position is no longer equal.

pub mod arguments;
pub mod equality;
pub mod fingerprint;
pub mod memoized;
pub mod strategy;

pub use arguments::{ArgumentList, ParamsKey};
pub use equality::{EqualityCheck, Identity, ReferenceEquality, ValueEquality};
pub use fingerprint::{FingerprintMemoize, FingerprintSlot};
pub use memoized::Memoized;
pub use strategy::{ClearCache, DefaultMemoize, MemoizeStrategy, Memoizer, SingleSlot};

/// Wrap `func` with the default single-slot, reference-equality cache.
pub fn memoize<A, R, F>(func: F) -> Memoized<F, SingleSlot<A, R, ReferenceEquality>>
where
    F: Fn(&A) -> R,
    A: ArgumentList<ReferenceEquality>,
    R: Clone,
{
    Memoized::new(func, SingleSlot::new(ReferenceEquality))
}

/// Wrap `func` with a cache built by `strategy`.
pub fn memoize_with<A, R, F, St>(func: F, strategy: &St) -> Memoized<F, St::Cache>
where
    F: Fn(&A) -> R,
    St: MemoizeStrategy<A, R>,
{
    Memoized::new(func, strategy.build())
}
