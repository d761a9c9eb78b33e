//! Unit tests for Either<L, R> type.
//!
//! Either represents a value that can be one of two types:
//! - `Left(L)`: the error or alternative payload
//! - `Right(R)`: the success payload
//!
//! It is the target of `IOption::to_either`, so these tests also check the
//! round trip back into `IOption`.

use iimmutable::control::{Either, IOption};
use rstest::rstest;

// =============================================================================
// Basic Construction and Type Checking
// =============================================================================

#[rstest]
fn either_left_is_left() {
    let value: Either<i32, String> = Either::Left(42);
    assert!(value.is_left());
    assert!(!value.is_right());
}

#[rstest]
fn either_right_is_right() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert!(value.is_right());
    assert!(!value.is_left());
}

// =============================================================================
// Value Extraction
// =============================================================================

#[rstest]
fn either_left_extraction() {
    let value: Either<i32, String> = Either::Left(42);
    assert_eq!(value.left(), IOption::some(42));
}

#[rstest]
fn either_left_extraction_from_right() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(value.left(), IOption::none());
}

#[rstest]
fn either_right_extraction() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(value.right(), IOption::some("hello".to_string()));
}

#[rstest]
fn either_to_option_is_right_biased() {
    let right: Either<i32, &str> = Either::Right("ok");
    let left: Either<i32, &str> = Either::Left(1);
    assert_eq!(right.to_option(), IOption::some("ok"));
    assert!(left.to_option().is_empty());
}

#[rstest]
fn either_as_ref_borrows() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(value.as_ref().map_right(String::len), Either::Right(5));
    assert!(value.is_right());
}

// =============================================================================
// Mapping and Elimination
// =============================================================================

#[rstest]
fn either_map_left_on_left() {
    let value: Either<i32, String> = Either::Left(21);
    assert_eq!(value.map_left(|x| x * 2), Either::Left(42));
}

#[rstest]
fn either_map_left_on_right() {
    let value: Either<i32, &str> = Either::Right("kept");
    assert_eq!(value.map_left(|x| x * 2), Either::Right("kept"));
}

#[rstest]
fn either_map_right_on_left() {
    let value: Either<&str, i32> = Either::Left("kept");
    assert_eq!(value.map_right(|x| x + 1), Either::Left("kept"));
}

#[rstest]
#[case(Either::Left(3), "left 3")]
#[case(Either::Right("x"), "right x")]
fn either_fold(#[case] value: Either<i32, &str>, #[case] expected: &str) {
    let folded = value.fold(|left| format!("left {left}"), |right| format!("right {right}"));
    assert_eq!(folded, expected);
}

#[rstest]
fn either_swap_left_to_right() {
    let value: Either<i32, &str> = Either::Left(1);
    assert_eq!(value.swap(), Either::Right(1));
}

// =============================================================================
// Interaction with IOption
// =============================================================================

#[rstest]
fn option_to_either_and_back() {
    let defined = IOption::some(4);
    let empty: IOption<i32> = IOption::none();

    assert_eq!(defined.to_either(|| "err"), Either::Right(4));
    assert_eq!(empty.to_either(|| "err"), Either::Left("err"));
    assert_eq!(defined.to_either(|| "err").right(), defined);
    assert_eq!(empty.to_either(|| "err").left(), IOption::some("err"));
}

#[rstest]
fn either_result_conversions() {
    let ok: Result<i32, String> = Ok(1);
    assert_eq!(Either::from(ok), Either::Right(1));

    let left: Either<String, i32> = Either::Left("bad".to_string());
    let result: Result<i32, String> = left.into();
    assert_eq!(result, Err("bad".to_string()));
}
