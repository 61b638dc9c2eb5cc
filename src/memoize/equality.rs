//! Equality tests used to decide whether an argument is "unchanged".
//!
//! An [`EqualityCheck<T>`] compares one position of a new argument list
//! against the same position of the cached one. Three families ship here:
//!
//! - [`ReferenceEquality`] (the default): identity. Shared handles (`Rc`,
//!   `Arc`, `&T`) match only when they point at the same allocation; plain
//!   scalars and strings match by value, since they have no identity of
//!   their own.
//! - [`ValueEquality`]: structural comparison through `PartialEq`.
//! - Any closure `Fn(&T, &T) -> bool`.

use std::rc::Rc;
use std::sync::Arc;

/// Identity comparison.
///
/// Deliberately not implemented for owned containers such as `Vec<T>`: an
/// owned container produced by a selector is a fresh value on every call, so
/// it can never be "the same" as the cached one. Wrap it in `Rc`/`Arc` to give
/// it identity, or compare it with [`ValueEquality`].
pub trait Identity {
    fn is_same(&self, other: &Self) -> bool;
}

macro_rules! identity_by_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl Identity for $t {
                #[inline]
                fn is_same(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

identity_by_value!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    str, String,
);

impl<T: ?Sized> Identity for &T {
    fn is_same(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for Arc<T> {
    fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: Identity> Identity for Option<T> {
    fn is_same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.is_same(b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Pairwise predicate applied to one argument position.
pub trait EqualityCheck<T: ?Sized> {
    fn equals(&self, current: &T, cached: &T) -> bool;
}

/// Identity equality; the default for every memoizer in this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferenceEquality;

impl<T: Identity + ?Sized> EqualityCheck<T> for ReferenceEquality {
    #[inline]
    fn equals(&self, current: &T, cached: &T) -> bool {
        current.is_same(cached)
    }
}

/// Structural equality through `PartialEq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueEquality;

impl<T: PartialEq + ?Sized> EqualityCheck<T> for ValueEquality {
    #[inline]
    fn equals(&self, current: &T, cached: &T) -> bool {
        current == cached
    }
}

impl<T: ?Sized, F> EqualityCheck<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, current: &T, cached: &T) -> bool {
        self(current, cached)
    }
}
