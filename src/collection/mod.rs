//! Immutable collections.
//!
//! This module provides [`IList`], an immutable ordered sequence backed by a
//! frozen, reference-counted buffer:
//!
//! - every transformation returns a new list and leaves the receiver untouched
//! - cloning a list is O(1) and shares the frozen buffer
//! - the empty list owns no allocation and is the same value at every element type
//!
//! # Examples
//!
//! ```rust
//! use iimmutable::collection::IList;
//! use iimmutable::ilist;
//!
//! let list = ilist![3, 1, 3, 2];
//! let cleaned = list.distinct().filter(|value| *value > 1);
//!
//! assert_eq!(cleaned, ilist![3, 2]);
//! assert_eq!(list.len(), 4); // Original unchanged
//!
//! let empty: IList<String> = IList::empty();
//! assert!(empty.is_empty());
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// which lets frozen lists be read from several threads at once.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Hasher Selection
// =============================================================================

/// Hasher used by the seen-sets of de-duplicating operations.
#[cfg(feature = "fxhash")]
pub(crate) type DefaultBuildHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type DefaultBuildHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type DefaultBuildHasher = std::collections::hash_map::RandomState;

mod list;
mod list_macro;

pub use list::IList;
pub use list::IListIntoIterator;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(IList<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(IList<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
