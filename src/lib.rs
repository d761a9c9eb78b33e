//! # iimmutable
//!
//! Immutable value containers for functional data modeling.
//!
//! ## Overview
//!
//! - **[`IList`](collection::IList)**: an immutable ordered sequence with a
//!   rich set of pure transformations (`filter`, `map`, `flat_map`,
//!   `distinct`, `subtract`, `concat`, ...) and partial queries that answer
//!   with an optional value instead of a sentinel
//! - **[`IOption`](control::IOption)**: a value that is either present or
//!   absent, with combinators for defaults, alternatives and chaining
//! - **[`Either`](control::Either)**: a value that is one of two alternatives,
//!   the target of [`IOption::to_either`](control::IOption::to_either)
//!
//! Every operation is pure: a transformation returns a new value and leaves
//! its receiver untouched. Equality, hashing and string forms are structural.
//!
//! ## Feature Flags
//!
//! - `arc` (default): `Arc`-backed lists that can be shared across threads
//! - `serde`: `Serialize`/`Deserialize` implementations
//! - `fxhash`: `rustc-hash` for the seen-set of `IList::distinct`
//! - `ahash`: `ahash` for the seen-set of `IList::distinct`
//! - `tracing`: debug events when a range check or value access fails
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use iimmutable::prelude::*;
//!
//! let scores = ilist![70, 85, 85, 92, 40];
//!
//! let passing = scores.filter(|score| *score >= 60).distinct();
//! assert_eq!(passing, ilist![70, 85, 92]);
//!
//! let best = passing.reduce(|left, right| left.max(right));
//! assert_eq!(best, IOption::some(92));
//!
//! let verdict = scores
//!     .find(|score| *score > 100)
//!     .cloned()
//!     .to_either(|| "no perfect score");
//! assert_eq!(verdict, Either::Left("no perfect score"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, their error types and the `ilist!` macro.
///
/// # Usage
///
/// ```rust
/// use iimmutable::prelude::*;
///
/// let list: IList<i32> = ilist![1, 2];
/// assert_eq!(list.first(), IOption::some(&1));
/// ```
pub mod prelude {
    pub use crate::collection::IList;
    pub use crate::control::{Either, IOption};
    pub use crate::error::{ImmutableError, IndexError, NoValueError, NullValueError};
    pub use crate::ilist;
}

pub mod collection;
pub mod control;
pub mod error;
