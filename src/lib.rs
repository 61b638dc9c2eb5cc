//! Memoized derived-value selectors.
//!
//! `selector-core` builds functions of an external state that recompute only
//! when their inputs change. Input selectors extract values from the state;
//! a combiner derives a result from those values; the composite remembers the
//! last argument list and result and skips the combiner while the inputs stay
//! equal. Composites are selectors too, so they stack into a DAG evaluated
//! lazily on each call.
//!
//! ```
//! use selector_core::{create_selector, Selector};
//!
//! struct Cart {
//!     prices: Vec<u32>,
//!     discount: u32,
//! }
//!
//! let subtotal = create_selector(
//!     (|c: &Cart| c.prices.iter().sum::<u32>(),),
//!     |(sum,), _: &()| *sum,
//! )
//! .unwrap();
//! let total = create_selector(
//!     (subtotal.clone(), |c: &Cart| c.discount),
//!     |(sum, off), _: &()| sum.saturating_sub(*off),
//! )
//! .unwrap();
//!
//! let cart = Cart { prices: vec![10, 20], discount: 5 };
//! assert_eq!(total.select(&cart, &()), 25);
//! assert_eq!(total.select(&cart, &()), 25);
//! assert_eq!(total.recomputations(), 1);
//! ```
//!
//! Change detection is pluggable: see [`memoize::DefaultMemoize`],
//! [`memoize::ValueEquality`] and [`memoize::FingerprintMemoize`].

pub mod memoize;
pub mod selector;
pub mod types;

pub use memoize::{memoize, memoize_with, DefaultMemoize, ReferenceEquality, ValueEquality};
pub use selector::{
    create_selector, create_selector_creator, create_structured_selector, with_params,
    CompositeSelector, Selector, SelectorCreator,
};
pub use types::SelectorError;
