//! Property-based invariant tests for memoizers and composite selectors.
//!
//! 1. The wrapped function runs exactly once per maximal run of equal
//!    consecutive argument lists (one-slot cache).
//! 2. A memoized call always returns what the plain function returns.
//! 3. Composite selectors agree with their unmemoized combiner.
//! 4. Params never cause recomputation unless opted in.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;
use selector_core::memoize::{memoize, memoize_with, DefaultMemoize, ValueEquality};
use selector_core::{create_selector, create_selector_creator, with_params, Selector};

fn expected_misses<T: PartialEq>(calls: &[T]) -> usize {
    calls
        .iter()
        .enumerate()
        .filter(|(i, v)| *i == 0 || calls[i - 1] != **v)
        .count()
}

proptest! {
    #[test]
    fn one_slot_recomputes_once_per_run(
        calls in proptest::collection::vec((0u8..4, 0u8..4), 1..40)
    ) {
        let runs = Rc::new(Cell::new(0usize));
        let runs_in = Rc::clone(&runs);
        let add = memoize(move |&(a, b): &(u8, u8)| {
            runs_in.set(runs_in.get() + 1);
            u16::from(a) + u16::from(b)
        });

        for &(a, b) in &calls {
            prop_assert_eq!(add.call((a, b)), u16::from(a) + u16::from(b));
        }
        prop_assert_eq!(runs.get(), expected_misses(&calls));
        prop_assert_eq!(add.recomputations() as usize, runs.get());
    }

    #[test]
    fn value_equality_on_vectors_matches_plain_results(
        calls in proptest::collection::vec(proptest::collection::vec(0i32..3, 0..4), 1..30)
    ) {
        let strategy = DefaultMemoize::with_equality(ValueEquality);
        let sum = memoize_with(|xs: &Vec<i32>| xs.iter().sum::<i32>(), &strategy);

        for xs in &calls {
            prop_assert_eq!(sum.call(xs.clone()), xs.iter().sum::<i32>());
        }
        prop_assert_eq!(sum.recomputations() as usize, expected_misses(&calls));
    }

    #[test]
    fn composite_agrees_with_its_combiner(
        states in proptest::collection::vec((any::<i16>(), any::<i16>()), 1..30)
    ) {
        let spread = create_selector(
            (|s: &(i16, i16)| s.0, |s: &(i16, i16)| s.1),
            |(a, b), _: &()| i32::from(*a) - i32::from(*b),
        ).unwrap();

        for state in &states {
            let direct = (spread.combiner())(state, &());
            prop_assert_eq!(spread.select(state, &()), direct);
        }
        prop_assert_eq!(spread.recomputations() as usize, expected_misses(&states));
    }

    #[test]
    fn excluded_params_never_trigger_recomputation(
        params in proptest::collection::vec(any::<u32>(), 1..30)
    ) {
        let doubled = create_selector_creator(DefaultMemoize::new())
            .create_selector((with_params(|s: &u32, _: &u32| *s),), |(v,), _: &u32| v * 2)
            .unwrap();

        for p in &params {
            prop_assert_eq!(doubled.select(&21, p), 42);
        }
        prop_assert_eq!(doubled.recomputations(), 1);
    }
}
