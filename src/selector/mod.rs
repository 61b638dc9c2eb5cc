//! Selectors and their composition.
//!
//! A [`Selector`] derives a value from a state `S`, optionally reading
//! auxiliary parameters `P`. Plain functions and closures of the state,
//! `Fn(&S) -> O`, are selectors for any `P`; [`with_params`] lifts a
//! `Fn(&S, &P) -> O` into one.
//!
//! [`create_selector`] wires input selectors to a memoized combiner and
//! returns a [`CompositeSelector`], which is itself a selector and can feed
//! further composites.

pub mod composite;
pub mod creator;
pub mod input;
pub mod structured;

pub use composite::CompositeSelector;
pub use creator::{
    create_selector, create_selector_creator, ExcludeParams, IncludeParams, ParamPolicy,
    SelectorCreator,
};
pub use input::InputSelectors;
pub use structured::{create_structured_selector, StructuredCombiner};

pub trait Selector<S: ?Sized, P: ?Sized = ()> {
    type Output;

    fn select(&self, state: &S, params: &P) -> Self::Output;

    /// Erase the selector's type so differently typed selectors with the
    /// same output can share an array, `Vec` or map.
    fn boxed(self) -> BoxedSelector<S, P, Self::Output>
    where
        Self: Sized + 'static,
    {
        BoxedSelector(Box::new(self))
    }
}

impl<S: ?Sized, P: ?Sized, O, F> Selector<S, P> for F
where
    F: Fn(&S) -> O,
{
    type Output = O;

    #[inline]
    fn select(&self, state: &S, _params: &P) -> O {
        self(state)
    }
}

/// A selector that reads the auxiliary parameters as well as the state.
#[derive(Clone, Copy)]
pub struct ParamSelector<F>(F);

pub fn with_params<S, P, O, F>(f: F) -> ParamSelector<F>
where
    S: ?Sized,
    P: ?Sized,
    F: Fn(&S, &P) -> O,
{
    ParamSelector(f)
}

impl<S: ?Sized, P: ?Sized, O, F> Selector<S, P> for ParamSelector<F>
where
    F: Fn(&S, &P) -> O,
{
    type Output = O;

    #[inline]
    fn select(&self, state: &S, params: &P) -> O {
        (self.0)(state, params)
    }
}

pub struct BoxedSelector<S: ?Sized, P: ?Sized, O>(Box<dyn Selector<S, P, Output = O>>);

impl<S: ?Sized, P: ?Sized, O> Selector<S, P> for BoxedSelector<S, P, O> {
    type Output = O;

    fn select(&self, state: &S, params: &P) -> O {
        self.0.select(state, params)
    }
}
