use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use selector_core::memoize::{
    memoize_with, FingerprintMemoize, MemoizeStrategy, Memoizer, ParamsKey,
};
use selector_core::types::Fingerprint;
use serde::{Serialize, Serializer};

/// Serializes as its value and counts how often it was serialized.
struct Counted {
    value: u32,
    serializations: Rc<Cell<usize>>,
}

impl Serialize for Counted {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serializations.set(self.serializations.get() + 1);
        self.value.serialize(serializer)
    }
}

#[test]
fn golden_fingerprint_of_argument_tuple() {
    // serde_json encodes (1, "a") as `[1,"a"]`.
    let fp = Fingerprint::of(&(1, "a")).unwrap();
    assert_eq!(
        fp.as_str(),
        "sha256:2010945388e2de98f5651051478912aa4ff38bb13a2cdb1a2c257bb97fbf98ff"
    );
}

#[test]
fn golden_fingerprint_of_params_key() {
    // Field order follows the struct: values first, then params.
    let key = ParamsKey { values: (1, 2), params: 3 };
    let fp = Fingerprint::of(&key).unwrap();
    assert_eq!(
        fp.as_str(),
        "sha256:4425efd789efafd56ff66d0da2b4e0359908a60044782cc8b51a99658030db6b"
    );
}

#[test]
fn fingerprint_serializes_transparently() {
    let fp = Fingerprint::from_bytes(b"[1,\"a\"]");
    let json = serde_json::to_string(&fp).unwrap();
    assert_eq!(
        json,
        "\"sha256:2010945388e2de98f5651051478912aa4ff38bb13a2cdb1a2c257bb97fbf98ff\""
    );

    let back: Fingerprint = serde_json::from_str(&json).unwrap();
    assert_eq!(back, fp);
}

#[test]
fn fingerprint_slot_records_the_last_stored_arguments() {
    let mut slot = MemoizeStrategy::<(i32, &str), String>::build(&FingerprintMemoize);
    assert!(slot.fingerprint().is_none());

    let miss = slot.lookup(&(1, "a")).unwrap_err();
    slot.store((1, "a"), "first".to_string(), miss);
    assert_eq!(
        slot.fingerprint().map(Fingerprint::as_str),
        Some("sha256:2010945388e2de98f5651051478912aa4ff38bb13a2cdb1a2c257bb97fbf98ff")
    );
    assert_eq!(slot.lookup(&(1, "a")), Ok("first".to_string()));
    assert!(slot.lookup(&(1, "b")).is_err());
}

#[test]
fn arguments_are_serialized_once_per_call() {
    let serializations = Rc::new(Cell::new(0));
    let arg = |value| Counted {
        value,
        serializations: Rc::clone(&serializations),
    };
    let double = memoize_with(|(c,): &(Counted,)| c.value * 2, &FingerprintMemoize);

    assert_eq!(double.call((arg(4),)), 8);
    assert_eq!(serializations.get(), 1, "miss reuses the lookup fingerprint");

    assert_eq!(double.call((arg(4),)), 8);
    assert_eq!(serializations.get(), 2);

    assert_eq!(double.call((arg(5),)), 10);
    assert_eq!(serializations.get(), 3);
    assert_eq!(double.recomputations(), 2);
}

#[test]
fn unserializable_arguments_are_never_cached() {
    let size = memoize_with(|(m,): &(BTreeMap<Vec<u8>, u8>,)| m.len(), &FingerprintMemoize);
    let map = BTreeMap::from([(vec![1u8], 1u8)]);

    assert_eq!(size.call((map.clone(),)), 1);
    assert_eq!(size.call((map,)), 1);
    assert_eq!(size.recomputations(), 2);
}

#[test]
fn non_finite_floats_share_the_null_fingerprint() {
    let nan = Fingerprint::of(&(f64::NAN,)).unwrap();
    assert_eq!(nan, Fingerprint::of(&(f64::INFINITY,)).unwrap());
    assert_eq!(nan, Fingerprint::of(&(f64::NEG_INFINITY,)).unwrap());
    assert_eq!(nan, Fingerprint::of(&(None::<f64>,)).unwrap());
    assert_ne!(nan, Fingerprint::of(&(0.0f64,)).unwrap());

    // Documented collision: the entry for NaN answers for infinity.
    let is_nan = memoize_with(|&(x,): &(f64,)| x.is_nan(), &FingerprintMemoize);
    assert!(is_nan.call((f64::NAN,)));
    assert!(is_nan.call((f64::INFINITY,)));
    assert_eq!(is_nan.recomputations(), 1);

    assert!(!is_nan.call((1.5,)));
    assert_eq!(is_nan.recomputations(), 2);
}

#[test]
fn nested_none_and_some_none_share_a_fingerprint() {
    let inner_none: Option<Option<u8>> = Some(None);
    let outer_none: Option<Option<u8>> = None;
    assert_eq!(
        Fingerprint::of(&(inner_none,)).unwrap(),
        Fingerprint::of(&(outer_none,)).unwrap()
    );
    assert_ne!(
        Fingerprint::of(&(Some(Some(0u8)),)).unwrap(),
        Fingerprint::of(&(outer_none,)).unwrap()
    );

    let is_some = memoize_with(|&(v,): &(Option<Option<u8>>,)| v.is_some(), &FingerprintMemoize);
    assert!(is_some.call((inner_none,)));
    assert!(is_some.call((outer_none,)));
    assert_eq!(is_some.recomputations(), 1);
}
