use std::collections::BTreeMap;

use super::Selector;

/// An ordered, non-growable sequence of input selectors.
///
/// Tuples are the variadic form: each position may have its own selector and
/// output type. Arrays, `Vec`s and `BTreeMap`s are the sequence form: every
/// input shares one selector type (use [`Selector::boxed`] to mix closures).
/// Both forms evaluate inputs left to right (maps in key order) and produce
/// an argument list of the same shape.
pub trait InputSelectors<S: ?Sized, P: ?Sized> {
    type Values;

    fn count(&self) -> usize;

    fn select_all(&self, state: &S, params: &P) -> Self::Values;
}

macro_rules! tuple_inputs {
    ($len:expr => $($name:ident $idx:tt),+) => {
        impl<S: ?Sized, P: ?Sized, $($name),+> InputSelectors<S, P> for ($($name,)+)
        where
            $($name: Selector<S, P>,)+
        {
            type Values = ($($name::Output,)+);

            #[inline]
            fn count(&self) -> usize {
                $len
            }

            fn select_all(&self, state: &S, params: &P) -> Self::Values {
                ($(self.$idx.select(state, params),)+)
            }
        }
    };
}

tuple_inputs!(1 => A 0);
tuple_inputs!(2 => A 0, B 1);
tuple_inputs!(3 => A 0, B 1, C 2);
tuple_inputs!(4 => A 0, B 1, C 2, D 3);
tuple_inputs!(5 => A 0, B 1, C 2, D 3, E 4);
tuple_inputs!(6 => A 0, B 1, C 2, D 3, E 4, F 5);
tuple_inputs!(7 => A 0, B 1, C 2, D 3, E 4, F 5, G 6);
tuple_inputs!(8 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
tuple_inputs!(9 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
tuple_inputs!(10 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
tuple_inputs!(11 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
tuple_inputs!(12 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);

impl<S: ?Sized, P: ?Sized, T, const N: usize> InputSelectors<S, P> for [T; N]
where
    T: Selector<S, P>,
{
    type Values = [T::Output; N];

    fn count(&self) -> usize {
        N
    }

    fn select_all(&self, state: &S, params: &P) -> Self::Values {
        // from_fn visits indices in ascending order.
        std::array::from_fn(|i| self[i].select(state, params))
    }
}

impl<S: ?Sized, P: ?Sized, T> InputSelectors<S, P> for Vec<T>
where
    T: Selector<S, P>,
{
    type Values = Vec<T::Output>;

    fn count(&self) -> usize {
        self.len()
    }

    fn select_all(&self, state: &S, params: &P) -> Self::Values {
        self.iter().map(|input| input.select(state, params)).collect()
    }
}

impl<S: ?Sized, P: ?Sized, K, T> InputSelectors<S, P> for BTreeMap<K, T>
where
    K: Ord + Clone,
    T: Selector<S, P>,
{
    type Values = BTreeMap<K, T::Output>;

    fn count(&self) -> usize {
        self.len()
    }

    fn select_all(&self, state: &S, params: &P) -> Self::Values {
        self.iter()
            .map(|(key, input)| (key.clone(), input.select(state, params)))
            .collect()
    }
}
