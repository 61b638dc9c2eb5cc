use serde::Serialize;

use super::strategy::{ClearCache, MemoizeStrategy, Memoizer};
use crate::types::fingerprint::Fingerprint;

/// Single-slot strategy that keeps a SHA-256 fingerprint of the serialized
/// arguments instead of the arguments themselves.
///
/// Two argument lists are equal when their serde_json encodings are equal, so
/// separately built values with equal contents hit the cache. Arguments that
/// fail to serialize are always recomputed and never cached.
///
/// The encoding is lossy in two places, and arguments differing only there
/// share a fingerprint and hit each other's entry:
///
/// - `f32`/`f64` `NaN`, `INFINITY` and `NEG_INFINITY` all encode as `null`
///   (as does `None`).
/// - `Some(None)` and `None` of a nested `Option<Option<T>>` both encode as
///   `null`.
///
/// Use [`DefaultMemoize`](super::DefaultMemoize) with
/// [`ValueEquality`](super::ValueEquality) when such values must be told apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FingerprintMemoize;

#[derive(Debug, Clone)]
pub struct FingerprintSlot<R> {
    entry: Option<(Fingerprint, R)>,
}

impl<R> FingerprintSlot<R> {
    pub fn new() -> Self {
        Self { entry: None }
    }

    pub fn fingerprint(&self) -> Option<&Fingerprint> {
        self.entry.as_ref().map(|(fp, _)| fp)
    }
}

impl<R> Default for FingerprintSlot<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ClearCache for FingerprintSlot<R> {
    fn clear(&mut self) {
        self.entry = None;
    }
}

impl<A, R> Memoizer<A, R> for FingerprintSlot<R>
where
    A: Serialize,
    R: Clone,
{
    /// `None` when the arguments did not serialize; `store` then skips them.
    type Miss = Option<Fingerprint>;

    fn lookup(&self, args: &A) -> Result<R, Option<Fingerprint>> {
        let current = match Fingerprint::of(args) {
            Ok(fp) => fp,
            Err(err) => {
                tracing::warn!(error = %err, "arguments not fingerprintable, result not cached");
                return Err(None);
            }
        };

        match &self.entry {
            Some((cached, result)) if *cached == current => Ok(result.clone()),
            _ => Err(Some(current)),
        }
    }

    fn store(&mut self, _args: A, result: R, miss: Option<Fingerprint>) {
        if let Some(fp) = miss {
            self.entry = Some((fp, result));
        }
    }
}

impl<A, R> MemoizeStrategy<A, R> for FingerprintMemoize
where
    A: Serialize,
    R: Clone,
{
    type Cache = FingerprintSlot<R>;

    fn build(&self) -> Self::Cache {
        FingerprintSlot::new()
    }
}
