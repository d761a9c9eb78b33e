//! Tests for fast hash feature flags.
//!
//! `IList::distinct` keeps a seen-set whose hasher is chosen by the
//! `fxhash` and `ahash` feature flags. The result must not depend on that
//! choice: these tests run unchanged under every flag combination.

use iimmutable::collection::IList;
use iimmutable::ilist;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Key {
    group: u8,
    name: String,
}

#[rstest]
fn test_distinct_of_strings_is_order_stable() {
    let list = ilist!["beta", "alpha", "beta", "gamma", "alpha"];
    assert_eq!(list.distinct(), ilist!["beta", "alpha", "gamma"]);
}

#[rstest]
fn test_distinct_of_composite_keys() {
    let key = |group, name: &str| Key {
        group,
        name: name.to_string(),
    };
    let list = ilist![key(1, "a"), key(2, "a"), key(1, "a"), key(1, "b")];
    assert_eq!(list.distinct(), ilist![key(1, "a"), key(2, "a"), key(1, "b")]);
}

#[rstest]
fn test_distinct_is_deterministic_across_runs() {
    let list: IList<u64> = (0..1000).map(|value| value * 7919 % 97).collect();
    let first = list.distinct();
    for _ in 0..5 {
        assert_eq!(list.distinct(), first);
    }
    assert_eq!(first.len(), 97);
}
