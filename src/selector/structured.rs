use std::collections::BTreeMap;

use super::composite::CompositeSelector;
use super::creator::SelectorCreator;
use super::Selector;
use crate::memoize::{ArgumentList, DefaultMemoize, ReferenceEquality, SingleSlot};
use crate::types::errors::SelectorError;

/// Combiner of a structured selector: returns the field map as selected.
pub type StructuredCombiner<F, O, P> = fn(&BTreeMap<F, O>, &P) -> BTreeMap<F, O>;

pub(crate) fn clone_fields<F: Clone, O: Clone, P: ?Sized>(
    values: &BTreeMap<F, O>,
    _params: &P,
) -> BTreeMap<F, O> {
    values.clone()
}

/// Turn a map of field selectors into one selector producing a map of field
/// values, memoized like any composite.
///
/// The result is recomputed (and a new map produced) only when some field
/// value changed under [`ReferenceEquality`].
#[allow(clippy::type_complexity)]
pub fn create_structured_selector<S, P, F, T>(
    fields: BTreeMap<F, T>,
) -> Result<
    CompositeSelector<
        S,
        P,
        BTreeMap<F, T>,
        StructuredCombiner<F, T::Output, P>,
        SingleSlot<BTreeMap<F, T::Output>, BTreeMap<F, T::Output>, ReferenceEquality>,
    >,
    SelectorError,
>
where
    S: ?Sized,
    P: ?Sized,
    F: Ord + Clone,
    T: Selector<S, P>,
    T::Output: Clone,
    BTreeMap<F, T::Output>: ArgumentList<ReferenceEquality>,
{
    SelectorCreator::new(DefaultMemoize::new()).create_structured_selector(fields)
}
