use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::equality::EqualityCheck;

/// An ordered argument list that a memoizer can compare position by position.
///
/// Tuples carry heterogeneous positions (arity 1 to 12); arrays, `Vec`s and
/// `BTreeMap`s carry homogeneous ones.
pub trait ArgumentList<E> {
    fn arity(&self) -> usize;

    /// `true` when every position of `self` equals the same position of
    /// `cached` under `equality`. Callers check arity first.
    fn matches(&self, cached: &Self, equality: &E) -> bool;
}

macro_rules! tuple_arguments {
    ($len:expr => $($name:ident $idx:tt),+) => {
        impl<E, $($name),+> ArgumentList<E> for ($($name,)+)
        where
            $(E: EqualityCheck<$name>,)+
        {
            #[inline]
            fn arity(&self) -> usize {
                $len
            }

            fn matches(&self, cached: &Self, equality: &E) -> bool {
                true $(&& <E as EqualityCheck<$name>>::equals(equality, &self.$idx, &cached.$idx))+
            }
        }
    };
}

tuple_arguments!(1 => A 0);
tuple_arguments!(2 => A 0, B 1);
tuple_arguments!(3 => A 0, B 1, C 2);
tuple_arguments!(4 => A 0, B 1, C 2, D 3);
tuple_arguments!(5 => A 0, B 1, C 2, D 3, F 4);
tuple_arguments!(6 => A 0, B 1, C 2, D 3, F 4, G 5);
tuple_arguments!(7 => A 0, B 1, C 2, D 3, F 4, G 5, H 6);
tuple_arguments!(8 => A 0, B 1, C 2, D 3, F 4, G 5, H 6, I 7);
tuple_arguments!(9 => A 0, B 1, C 2, D 3, F 4, G 5, H 6, I 7, J 8);
tuple_arguments!(10 => A 0, B 1, C 2, D 3, F 4, G 5, H 6, I 7, J 8, K 9);
tuple_arguments!(11 => A 0, B 1, C 2, D 3, F 4, G 5, H 6, I 7, J 8, K 9, L 10);
tuple_arguments!(12 => A 0, B 1, C 2, D 3, F 4, G 5, H 6, I 7, J 8, K 9, L 10, M 11);

impl<E, T, const N: usize> ArgumentList<E> for [T; N]
where
    E: EqualityCheck<T>,
{
    fn arity(&self) -> usize {
        N
    }

    fn matches(&self, cached: &Self, equality: &E) -> bool {
        self.iter()
            .zip(cached.iter())
            .all(|(current, previous)| equality.equals(current, previous))
    }
}

impl<E, T> ArgumentList<E> for Vec<T>
where
    E: EqualityCheck<T>,
{
    fn arity(&self) -> usize {
        self.len()
    }

    fn matches(&self, cached: &Self, equality: &E) -> bool {
        self.len() == cached.len()
            && self
                .iter()
                .zip(cached.iter())
                .all(|(current, previous)| equality.equals(current, previous))
    }
}

/// Keys must match exactly; values are compared under `equality`.
impl<E, K, V> ArgumentList<E> for BTreeMap<K, V>
where
    K: Ord,
    E: EqualityCheck<V>,
{
    fn arity(&self) -> usize {
        self.len()
    }

    fn matches(&self, cached: &Self, equality: &E) -> bool {
        self.len() == cached.len()
            && self.iter().zip(cached.iter()).all(|((k, current), (cached_k, previous))| {
                k == cached_k && equality.equals(current, previous)
            })
    }
}

/// Memoization key that also carries the auxiliary parameters.
///
/// Only built when a selector creator opts into `IncludeParams`; the params
/// occupy one extra trailing position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamsKey<V, P> {
    pub values: V,
    pub params: P,
}

impl<E, V, P> ArgumentList<E> for ParamsKey<V, P>
where
    V: ArgumentList<E>,
    E: EqualityCheck<P>,
{
    fn arity(&self) -> usize {
        self.values.arity() + 1
    }

    fn matches(&self, cached: &Self, equality: &E) -> bool {
        self.values.matches(&cached.values, equality)
            && <E as EqualityCheck<P>>::equals(equality, &self.params, &cached.params)
    }
}
