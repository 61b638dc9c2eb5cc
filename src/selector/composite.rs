//! Memoized composite selectors.
//!
//! # Invariants
//!
//! 1. Inputs run on every call, in declared order, before the combiner.
//! 2. The combiner runs only when the cache policy reports a miss for the
//!    current argument list (plus params, under `IncludeParams`).
//! 3. A combiner that panics, or returns `Err` under
//!    [`try_select`](CompositeSelector::try_select), leaves the cache slot
//!    exactly as it was before the call.
//! 4. Clones share one cache slot and one recomputation counter.
//!
//! # Failure Modes
//!
//! - **Re-entrant call**: a combiner may evaluate other selectors, including
//!   clones of its own selector; no cache borrow is held while it runs.
//! - **Threads**: state is `Rc<RefCell<..>>`, so composites are `!Send` and
//!   cannot be shared across threads without external synchronization.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use super::creator::{ExcludeParams, ParamPolicy};
use super::input::InputSelectors;
use super::Selector;
use crate::memoize::memoized::cached_call;
use crate::memoize::{ClearCache, Memoizer};

struct CompositeInner<I, C, M> {
    inputs: I,
    combiner: C,
    cache: RefCell<M>,
    recomputations: Cell<u64>,
}

/// A selector built from input selectors and a memoized combiner.
///
/// Type parameters: state `S`, params `P`, inputs `I`, combiner `C`, cache
/// `M` (built by the creator's strategy) and param policy `K`.
pub struct CompositeSelector<S: ?Sized, P: ?Sized, I, C, M, K = ExcludeParams> {
    inner: Rc<CompositeInner<I, C, M>>,
    _marker: PhantomData<(fn(&S, &P), K)>,
}

impl<S: ?Sized, P: ?Sized, I, C, M, K> Clone for CompositeSelector<S, P, I, C, M, K> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            _marker: PhantomData,
        }
    }
}

impl<S: ?Sized, P: ?Sized, I, C, M, K> fmt::Debug for CompositeSelector<S, P, I, C, M, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeSelector")
            .field("recomputations", &self.inner.recomputations.get())
            .field("handles", &Rc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}

impl<S: ?Sized, P: ?Sized, I, C, M, K> CompositeSelector<S, P, I, C, M, K> {
    pub(crate) fn new(inputs: I, combiner: C, cache: M) -> Self {
        Self {
            inner: Rc::new(CompositeInner {
                inputs,
                combiner,
                cache: RefCell::new(cache),
                recomputations: Cell::new(0),
            }),
            _marker: PhantomData,
        }
    }

    /// The input selectors, in declared order.
    pub fn inputs(&self) -> &I {
        &self.inner.inputs
    }

    /// The combiner, without memoization.
    pub fn combiner(&self) -> &C {
        &self.inner.combiner
    }

    /// Number of times the combiner has run.
    #[must_use]
    pub fn recomputations(&self) -> u64 {
        self.inner.recomputations.get()
    }

    pub fn reset_recomputations(&self) {
        self.inner.recomputations.set(0);
    }

    /// Drop the cached entry; the next call recomputes.
    pub fn clear_cache(&self)
    where
        M: ClearCache,
    {
        self.inner.cache.borrow_mut().clear();
    }

    /// `true` if this handle and `other` share one cache slot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S, P, I, C, M, K, T, E> CompositeSelector<S, P, I, C, M, K>
where
    S: ?Sized,
    P: ?Sized,
    I: InputSelectors<S, P>,
    K: ParamPolicy<I::Values, P>,
    C: Fn(&I::Values, &P) -> Result<T, E>,
    M: Memoizer<K::Key, Result<T, E>>,
    T: Clone,
    E: Clone,
{
    /// Evaluate a fallible combiner. Only `Ok` results are cached, so an
    /// `Err` is returned to the caller and the next call retries.
    pub fn try_select(&self, state: &S, params: &P) -> Result<T, E> {
        self.evaluate(state, params, Result::is_ok)
    }
}

impl<S, P, I, C, M, K> CompositeSelector<S, P, I, C, M, K>
where
    S: ?Sized,
    P: ?Sized,
    I: InputSelectors<S, P>,
    K: ParamPolicy<I::Values, P>,
{
    fn evaluate<R>(&self, state: &S, params: &P, keep: impl FnOnce(&R) -> bool) -> R
    where
        C: Fn(&I::Values, &P) -> R,
        M: Memoizer<K::Key, R>,
        R: Clone,
    {
        let inner = &*self.inner;
        let values = inner.inputs.select_all(state, params);
        let key = K::key(values, params);

        cached_call(
            &inner.cache,
            &inner.recomputations,
            key,
            |key| (inner.combiner)(K::values(key), params),
            keep,
        )
    }
}

impl<S, P, I, C, M, K, R> Selector<S, P> for CompositeSelector<S, P, I, C, M, K>
where
    S: ?Sized,
    P: ?Sized,
    I: InputSelectors<S, P>,
    K: ParamPolicy<I::Values, P>,
    C: Fn(&I::Values, &P) -> R,
    M: Memoizer<K::Key, R>,
    R: Clone,
{
    type Output = R;

    fn select(&self, state: &S, params: &P) -> R {
        self.evaluate(state, params, |_| true)
    }
}
