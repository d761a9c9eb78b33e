//! Integration tests for sharing lists across threads.
//!
//! These tests verify that with the `arc` feature enabled a frozen `IList`
//! can be cloned into several threads, read concurrently and used as the
//! receiver of transformations without affecting the other readers.

#![cfg(feature = "arc")]

use iimmutable::collection::IList;
use iimmutable::control::IOption;
use rstest::rstest;
use std::sync::Arc;
use std::thread;

// =============================================================================
// Concurrent Reads
// =============================================================================

#[rstest]
fn test_list_clone_shared_across_threads() {
    let original: IList<i32> = (1..=100).collect();

    let handles: Vec<_> = (0..4)
        .map(|offset| {
            let shared = original.clone();
            thread::spawn(move || {
                let shifted = shared.map(|value| value + offset);
                assert_eq!(shifted.len(), 100);
                assert_eq!(shared.first(), IOption::some(&1));
                shifted.fold(0_i64, |total, value| total + i64::from(*value))
            })
        })
        .collect();

    let sums: Vec<i64> = handles
        .into_iter()
        .map(|handle| handle.join().expect("reader thread panicked"))
        .collect();

    assert_eq!(sums, vec![5050, 5150, 5250, 5350]);
    assert_eq!(original.len(), 100);
}

#[rstest]
fn test_list_behind_arc_is_readable_from_threads() {
    let original = Arc::new(IList::from(vec!["a", "b", "c"]));

    let handles: Vec<_> = (0..3)
        .map(|index| {
            let list = Arc::clone(&original);
            thread::spawn(move || list.get(index).map(|value| (*value).to_string()))
        })
        .collect();

    let results: Vec<String> = handles
        .into_iter()
        .map(|handle| {
            handle
                .join()
                .expect("reader thread panicked")
                .expect("index in range")
        })
        .collect();

    assert_eq!(results, vec!["a", "b", "c"]);
}

#[rstest]
fn test_transformed_lists_can_be_sent_back() {
    let original = IList::from(vec![3, 1, 3, 2]);
    let shared = original.clone();

    let distinct = thread::spawn(move || shared.distinct())
        .join()
        .expect("worker thread panicked");

    assert_eq!(distinct, IList::from(vec![3, 1, 2]));
    assert_eq!(original, IList::from(vec![3, 1, 3, 2]));
}
