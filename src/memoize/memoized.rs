use std::cell::{Cell, RefCell};
use std::fmt;

use super::strategy::{ClearCache, Memoizer};

/// One lookup-or-compute cycle against `cache`.
///
/// No borrow of `cache` is held while `compute` runs, so `compute` may call
/// back into other memoized code. If `compute` panics, or `keep` rejects the
/// result, the cache keeps its pre-call state.
pub(crate) fn cached_call<A, R, M>(
    cache: &RefCell<M>,
    recomputations: &Cell<u64>,
    args: A,
    compute: impl FnOnce(&A) -> R,
    keep: impl FnOnce(&R) -> bool,
) -> R
where
    M: Memoizer<A, R>,
    R: Clone,
{
    let lookup = cache.borrow().lookup(&args);
    let miss = match lookup {
        Ok(result) => {
            tracing::trace!(recomputations = recomputations.get(), "memo hit");
            return result;
        }
        Err(miss) => miss,
    };

    recomputations.set(recomputations.get() + 1);
    let result = compute(&args);
    if keep(&result) {
        cache.borrow_mut().store(args, result.clone(), miss);
    }
    tracing::trace!(recomputations = recomputations.get(), "memo miss");
    result
}

/// A function wrapped with a cache policy.
///
/// Arguments are passed as one argument list: a tuple, array, `Vec` or map.
/// Single arguments use a one-element tuple, `memo.call((x,))`.
pub struct Memoized<F, M> {
    func: F,
    cache: RefCell<M>,
    recomputations: Cell<u64>,
}

impl<F, M> Memoized<F, M> {
    pub fn new(func: F, cache: M) -> Self {
        Self {
            func,
            cache: RefCell::new(cache),
            recomputations: Cell::new(0),
        }
    }

    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(&A) -> R,
        M: Memoizer<A, R>,
        R: Clone,
    {
        cached_call(
            &self.cache,
            &self.recomputations,
            args,
            |args| (self.func)(args),
            |_| true,
        )
    }

    /// Like [`call`](Self::call) for fallible functions: only `Ok` results
    /// are cached, so a failed call is retried next time.
    pub fn try_call<A, T, E>(&self, args: A) -> Result<T, E>
    where
        F: Fn(&A) -> Result<T, E>,
        M: Memoizer<A, Result<T, E>>,
        T: Clone,
        E: Clone,
    {
        cached_call(
            &self.cache,
            &self.recomputations,
            args,
            |args| (self.func)(args),
            Result::is_ok,
        )
    }

    /// The wrapped function, without memoization.
    pub fn function(&self) -> &F {
        &self.func
    }

    /// Number of times the wrapped function has run.
    pub fn recomputations(&self) -> u64 {
        self.recomputations.get()
    }

    pub fn reset_recomputations(&self) {
        self.recomputations.set(0);
    }

    pub fn clear_cache(&self)
    where
        M: ClearCache,
    {
        self.cache.borrow_mut().clear();
    }
}

impl<F, M> fmt::Debug for Memoized<F, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("recomputations", &self.recomputations.get())
            .finish_non_exhaustive()
    }
}
