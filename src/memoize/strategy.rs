use super::arguments::ArgumentList;
use super::equality::ReferenceEquality;

pub trait ClearCache {
    fn clear(&mut self);
}

/// A cache policy for one memoized function.
///
/// `lookup` must only return a result stored by an earlier `store` whose
/// arguments the policy considers equal to `args`. How many entries are kept,
/// and how equality is decided, is up to the implementation.
///
/// A miss hands back [`Miss`](Self::Miss), whatever the policy already
/// derived from `args` (a hash, say). `store` receives it together with the
/// same `args` so that work is not repeated.
pub trait Memoizer<A, R>: ClearCache {
    type Miss;

    fn lookup(&self, args: &A) -> Result<R, Self::Miss>;

    fn store(&mut self, args: A, result: R, miss: Self::Miss);
}

/// Builds a fresh [`Memoizer`] for every function it is asked to wrap.
///
/// The strategy value is the memoizer's configuration; it is resolved once
/// when a selector or memoized function is constructed.
pub trait MemoizeStrategy<A, R> {
    type Cache: Memoizer<A, R>;

    fn build(&self) -> Self::Cache;
}

/// Holds at most one `(arguments, result)` pair, the most recent one.
#[derive(Debug, Clone)]
pub struct SingleSlot<A, R, E> {
    entry: Option<(A, R)>,
    equality: E,
}

impl<A, R, E> SingleSlot<A, R, E> {
    pub fn new(equality: E) -> Self {
        Self {
            entry: None,
            equality,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    pub fn cached_args(&self) -> Option<&A> {
        self.entry.as_ref().map(|(args, _)| args)
    }
}

impl<A, R, E> ClearCache for SingleSlot<A, R, E> {
    fn clear(&mut self) {
        self.entry = None;
    }
}

impl<A, R, E> Memoizer<A, R> for SingleSlot<A, R, E>
where
    A: ArgumentList<E>,
    R: Clone,
{
    type Miss = ();

    fn lookup(&self, args: &A) -> Result<R, ()> {
        match &self.entry {
            Some((cached, result))
                if args.arity() == cached.arity() && args.matches(cached, &self.equality) =>
            {
                Ok(result.clone())
            }
            _ => Err(()),
        }
    }

    fn store(&mut self, args: A, result: R, _miss: ()) {
        // Replaced wholesale, never merged.
        self.entry = Some((args, result));
    }
}

/// The default strategy: one cache slot, positional comparison under `E`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultMemoize<E = ReferenceEquality> {
    equality: E,
}

impl DefaultMemoize {
    pub fn new() -> Self {
        Self {
            equality: ReferenceEquality,
        }
    }
}

impl<E> DefaultMemoize<E> {
    pub fn with_equality(equality: E) -> Self {
        Self { equality }
    }
}

impl<A, R, E> MemoizeStrategy<A, R> for DefaultMemoize<E>
where
    A: ArgumentList<E>,
    R: Clone,
    E: Clone,
{
    type Cache = SingleSlot<A, R, E>;

    fn build(&self) -> Self::Cache {
        SingleSlot::new(self.equality.clone())
    }
}
