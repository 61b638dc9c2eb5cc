use std::collections::BTreeMap;
use std::marker::PhantomData;

use super::composite::CompositeSelector;
use super::input::InputSelectors;
use super::structured::{clone_fields, StructuredCombiner};
use super::Selector;
use crate::memoize::{
    ArgumentList, DefaultMemoize, MemoizeStrategy, ParamsKey, ReferenceEquality, SingleSlot,
};
use crate::types::errors::SelectorError;

/// Decides whether the auxiliary parameters take part in the memoization key.
pub trait ParamPolicy<V, P: ?Sized> {
    type Key;

    fn key(values: V, params: &P) -> Self::Key;

    fn values(key: &Self::Key) -> &V;
}

/// Key on the input values only; params reach the combiner but never cause a
/// recomputation. The default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExcludeParams;

impl<V, P: ?Sized> ParamPolicy<V, P> for ExcludeParams {
    type Key = V;

    #[inline]
    fn key(values: V, _params: &P) -> V {
        values
    }

    #[inline]
    fn values(key: &V) -> &V {
        key
    }
}

/// Key on the input values plus a clone of the params, compared as one extra
/// trailing position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncludeParams;

impl<V, P: Clone> ParamPolicy<V, P> for IncludeParams {
    type Key = ParamsKey<V, P>;

    fn key(values: V, params: &P) -> Self::Key {
        ParamsKey {
            values,
            params: params.clone(),
        }
    }

    fn values(key: &Self::Key) -> &V {
        &key.values
    }
}

/// A composer bound to one memoization strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorCreator<St, K = ExcludeParams> {
    strategy: St,
    _policy: PhantomData<K>,
}

impl<St> SelectorCreator<St> {
    pub fn new(strategy: St) -> Self {
        Self {
            strategy,
            _policy: PhantomData,
        }
    }

    /// Make the auxiliary parameters part of every selector's cache key.
    pub fn include_params(self) -> SelectorCreator<St, IncludeParams> {
        SelectorCreator {
            strategy: self.strategy,
            _policy: PhantomData,
        }
    }
}

impl<St, K> SelectorCreator<St, K> {
    /// Build a composite selector whose combiner is memoized by this
    /// creator's strategy.
    ///
    /// Fails if `inputs` is an empty sequence.
    pub fn create_selector<S, P, I, C, R>(
        &self,
        inputs: I,
        combiner: C,
    ) -> Result<CompositeSelector<S, P, I, C, St::Cache, K>, SelectorError>
    where
        S: ?Sized,
        P: ?Sized,
        I: InputSelectors<S, P>,
        C: Fn(&I::Values, &P) -> R,
        K: ParamPolicy<I::Values, P>,
        St: MemoizeStrategy<K::Key, R>,
    {
        let count = inputs.count();
        if count == 0 {
            return Err(SelectorError::NoInputSelectors);
        }

        tracing::debug!(inputs = count, "composite selector created");
        Ok(CompositeSelector::new(inputs, combiner, self.strategy.build()))
    }

    /// Build a selector producing a map with one entry per input field.
    pub fn create_structured_selector<S, P, F, T>(
        &self,
        fields: BTreeMap<F, T>,
    ) -> Result<
        CompositeSelector<S, P, BTreeMap<F, T>, StructuredCombiner<F, T::Output, P>, St::Cache, K>,
        SelectorError,
    >
    where
        S: ?Sized,
        P: ?Sized,
        F: Ord + Clone,
        T: Selector<S, P>,
        T::Output: Clone,
        K: ParamPolicy<BTreeMap<F, T::Output>, P>,
        St: MemoizeStrategy<K::Key, BTreeMap<F, T::Output>>,
    {
        if fields.is_empty() {
            return Err(SelectorError::NoStructuredFields);
        }
        let combiner = clone_fields::<F, T::Output, P> as StructuredCombiner<F, T::Output, P>;
        self.create_selector(fields, combiner)
    }
}

/// The default composer: one slot, [`ReferenceEquality`], params excluded.
pub fn create_selector<S, P, I, C, R>(
    inputs: I,
    combiner: C,
) -> Result<
    CompositeSelector<S, P, I, C, SingleSlot<I::Values, R, ReferenceEquality>>,
    SelectorError,
>
where
    S: ?Sized,
    P: ?Sized,
    I: InputSelectors<S, P>,
    I::Values: ArgumentList<ReferenceEquality>,
    C: Fn(&I::Values, &P) -> R,
    R: Clone,
{
    SelectorCreator::new(DefaultMemoize::new()).create_selector(inputs, combiner)
}

/// Bind the composer to `strategy`, e.g. `DefaultMemoize::with_equality(..)`
/// or [`FingerprintMemoize`](crate::memoize::FingerprintMemoize).
pub fn create_selector_creator<St>(strategy: St) -> SelectorCreator<St> {
    SelectorCreator::new(strategy)
}
