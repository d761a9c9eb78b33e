//! Immutable ordered sequence.
//!
//! This module provides [`IList`], an immutable list backed by a frozen,
//! reference-counted buffer.
//!
//! # Overview
//!
//! `IList` favours simplicity over structural sharing between versions:
//!
//! - O(1) `len`, `get`, `first` and `clone`
//! - O(n) transformations, each of which copies into a new, pre-sized buffer
//! - no operation ever mutates a buffer reachable from a published list
//!
//! Partial queries (`find`, `first`, `reduce`) answer with [`IOption`]
//! instead of a sentinel, and range-checked operations (`get`, `set`,
//! `remove`, `sub_list`) answer with `Result<_, IndexError>`.
//!
//! # Examples
//!
//! ```rust
//! use iimmutable::collection::IList;
//! use iimmutable::control::IOption;
//!
//! let list = IList::list_of(1..=5);
//!
//! let evens = list.filter(|value| value % 2 == 0);
//! assert_eq!(evens.to_list(), &[2, 4]);
//!
//! // The original list is preserved
//! assert_eq!(list.len(), 5);
//!
//! assert_eq!(list.find(|value| *value > 3), IOption::some(&4));
//! assert_eq!(list.reduce(|left, right| left + right), IOption::some(15));
//! assert_eq!(list.join(", "), "1, 2, 3, 4, 5");
//! ```
//!
//! # Absent Elements
//!
//! A list that may hold absent elements is an `IList<Option<T>>`.
//! [`IList::first_present`] treats an absent first element like an empty
//! list, while [`IList::first_or_none`] returns the first element verbatim:
//!
//! ```rust
//! use iimmutable::collection::IList;
//!
//! let list = IList::from(vec![None, Some(2)]);
//! assert!(list.first_present().is_empty());
//! assert_eq!(list.first_or_none(), Some(&None));
//! ```

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{DefaultBuildHasher, ReferenceCounter};
use crate::control::IOption;
use crate::error::IndexError;

// =============================================================================
// Constants
// =============================================================================

/// Expected number of elements produced per source element by `flat_map`.
const FLAT_MAP_EXPECTED_ELEMENTS: usize = 2;

/// Expected rendered length of one element in `join`.
const JOIN_EXPECTED_ELEMENT_LENGTH: usize = 5;

// =============================================================================
// IList Definition
// =============================================================================

/// An immutable ordered sequence.
///
/// # Time Complexity
///
/// | Operation            | Complexity |
/// |----------------------|------------|
/// | `empty`              | O(1)       |
/// | `len` / `is_empty`   | O(1)       |
/// | `get` / `first`      | O(1)       |
/// | `clone`              | O(1)       |
/// | `index_of` / `find`  | O(n)       |
/// | `map` / `filter`     | O(n)       |
/// | `set` / `remove`     | O(n)       |
/// | `distinct`           | O(n)       |
/// | `subtract`           | O(n * m)   |
///
/// # Examples
///
/// ```rust
/// use iimmutable::collection::IList;
///
/// let list: IList<i32> = (0..10).collect();
/// assert_eq!(list.len(), 10);
/// assert_eq!(list.get(5), Ok(&5));
/// ```
pub struct IList<T> {
    /// Frozen element buffer; `None` is the canonical empty list.
    elements: Option<ReferenceCounter<Vec<T>>>,
}

impl<T> IList<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Returns the empty list.
    ///
    /// The empty list owns no allocation, so this is free at every element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    ///
    /// let list: IList<i32> = IList::empty();
    /// assert!(list.is_empty());
    /// assert!(list.ptr_eq(&IList::empty()));
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { elements: None }
    }

    /// Returns the empty list. Alias of [`IList::empty`].
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::empty()
    }

    /// Freezes a `Vec` into a list without copying.
    ///
    /// Every other constructor funnels through here so that zero elements
    /// always yield the canonical empty list.
    fn from_vec(elements: Vec<T>) -> Self {
        if elements.is_empty() {
            Self::empty()
        } else {
            Self {
                elements: Some(ReferenceCounter::new(elements)),
            }
        }
    }

    /// Drains any iterable eagerly into a new list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    ///
    /// let list = IList::list_of("abc".chars());
    /// assert_eq!(list.to_list(), &['a', 'b', 'c']);
    /// ```
    pub fn list_of<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_vec(source.into_iter().collect())
    }

    /// Drains an iterable that may itself be absent; an absent source yields
    /// the empty list.
    pub fn from_nullable<I>(source: Option<I>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        source.map_or_else(Self::empty, Self::list_of)
    }

    // =========================================================================
    // Size and Identity
    // =========================================================================

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.as_ref().map_or(0, |elements| elements.len())
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_none()
    }

    /// Returns `true` if the list has at least one element.
    #[inline]
    pub const fn is_not_empty(&self) -> bool {
        self.elements.is_some()
    }

    /// Returns `true` if this is the canonical empty list.
    ///
    /// Every construction path that yields zero elements produces the
    /// canonical empty list, so this agrees with [`IList::is_empty`]; it is
    /// kept as a separate name for callers that check sharing rather than
    /// size.
    #[inline]
    pub const fn is_shared_empty(&self) -> bool {
        self.elements.is_none()
    }

    /// Returns `true` if both lists are views of the same frozen buffer.
    ///
    /// All empty lists are the same value, so two empty lists are always
    /// `ptr_eq`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    ///
    /// let list = IList::from(vec![1, 2]);
    /// assert!(list.ptr_eq(&list.clone()));
    /// assert!(!list.ptr_eq(&IList::from(vec![1, 2])));
    /// ```
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.elements, &other.elements) {
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns a read-only view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.elements.as_deref().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns a read-only view of the elements.
    ///
    /// The view borrows the list's buffer; it cannot be used to mutate it.
    /// Use [`IList::to_mutable_list`] for an independent, mutable copy.
    #[inline]
    pub fn to_list(&self) -> &[T] {
        self.as_slice()
    }

    /// Returns an iterator over references to the elements, in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] naming the index and the size when
    /// `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    ///
    /// let list = IList::from(vec![10, 20, 30]);
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert!(list.get(3).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, IndexError> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| IndexError::out_of_range(format!("get({index})"), index, self.len()))
    }

    /// Returns the first element, or `None` if the list is empty.
    ///
    /// See [`IList::first_present`] for lists of possibly absent elements.
    #[inline]
    pub fn first(&self) -> IOption<&T> {
        IOption::of_nullable(self.as_slice().first())
    }

    /// Returns the first element verbatim, or `None` if the list is empty.
    ///
    /// For an `IList<Option<T>>` the returned element may itself be absent.
    #[inline]
    pub fn first_or_none(&self) -> Option<&T> {
        self.as_slice().first()
    }

    // =========================================================================
    // Searching
    // =========================================================================

    /// Returns the position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|element| element == value)
    }

    /// Returns the position of the first element matching `predicate`.
    pub fn index_where<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }

    /// Returns the first element matching `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    /// use iimmutable::control::IOption;
    ///
    /// let list = IList::from(vec!["ant", "bee", "cat"]);
    /// assert_eq!(list.find(|name| name.starts_with('b')), IOption::some(&"bee"));
    /// assert!(list.find(|name| name.is_empty()).is_empty());
    /// ```
    pub fn find<P>(&self, mut predicate: P) -> IOption<&T>
    where
        P: FnMut(&T) -> bool,
    {
        IOption::of_nullable(self.iter().find(|element| predicate(element)))
    }

    /// Returns `true` if some element matches `predicate`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.find(predicate).is_defined()
    }

    /// Returns `true` if no element matches `predicate`.
    pub fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.any(predicate)
    }

    /// Returns `true` if every element matches `predicate`.
    ///
    /// Holds vacuously for the empty list.
    pub fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns `true` if every element matches `predicate`. Alias of
    /// [`IList::every`].
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.every(predicate)
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Applies `function` to every element, keeping order and length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    ///
    /// let lengths = IList::from(vec!["a", "bcd"]).map(|text| text.len());
    /// assert_eq!(lengths, IList::from(vec![1, 3]));
    /// ```
    pub fn map<R, F>(&self, function: F) -> IList<R>
    where
        F: FnMut(&T) -> R,
    {
        IList::from_vec(self.iter().map(function).collect())
    }

    /// Like [`IList::map`], but `function` also receives the 0-based position.
    pub fn map_indexed<R, F>(&self, mut function: F) -> IList<R>
    where
        F: FnMut(usize, &T) -> R,
    {
        IList::from_vec(
            self.iter()
                .enumerate()
                .map(|(index, element)| function(index, element))
                .collect(),
        )
    }

    /// Concatenates, in order, the iterables produced by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    ///
    /// let list = IList::from(vec![1, 3]);
    /// let expanded = list.flat_map(|value| vec![*value, value * 10]);
    /// assert_eq!(expanded.to_list(), &[1, 10, 3, 30]);
    /// ```
    pub fn flat_map<R, I, F>(&self, function: F) -> IList<R>
    where
        I: IntoIterator<Item = R>,
        F: FnMut(&T) -> I,
    {
        let mut elements =
            Vec::with_capacity(self.len().saturating_mul(FLAT_MAP_EXPECTED_ELEMENTS));
        elements.extend(self.iter().flat_map(function));
        IList::from_vec(elements)
    }

    // =========================================================================
    // Folding
    // =========================================================================

    /// Folds the elements left to right starting from the first one.
    ///
    /// Returns `None` for the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    /// use iimmutable::control::IOption;
    ///
    /// assert_eq!(IList::from(vec![5]).reduce(|left, right| left + right), IOption::some(5));
    /// assert!(IList::<i32>::empty().reduce(|left, right| left + right).is_empty());
    /// ```
    pub fn reduce<F>(&self, function: F) -> IOption<T>
    where
        T: Clone,
        F: FnMut(T, T) -> T,
    {
        IOption::of_nullable(self.iter().cloned().reduce(function))
    }

    /// Folds the elements left to right starting from `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    ///
    /// let list = IList::from(vec!["a", "bb", "ccc"]);
    /// let total = list.fold(0, |accumulator, text| accumulator + text.len());
    /// assert_eq!(total, 6);
    /// ```
    pub fn fold<R, F>(&self, seed: R, function: F) -> R
    where
        F: FnMut(R, &T) -> R,
    {
        self.iter().fold(seed, function)
    }

    /// Renders every element and places `separator` between consecutive ones.
    pub fn join(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        let mut joined = String::with_capacity(
            self.len()
                .saturating_mul(JOIN_EXPECTED_ELEMENT_LENGTH + separator.len()),
        );
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                joined.push_str(separator);
            }
            joined.push_str(&element.to_string());
        }
        joined
    }

    /// Renders every element back to back.
    pub fn join_without_separator(&self) -> String
    where
        T: fmt::Display,
    {
        self.join("")
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs `consumer` on every element, then returns the same list.
    ///
    /// The returned list shares the receiver's buffer, so `peek` can sit in
    /// the middle of a chain at no cost.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    ///
    /// let mut seen = Vec::new();
    /// let doubled = IList::from(vec![1, 2])
    ///     .peek(|value| seen.push(*value))
    ///     .map(|value| value * 2);
    /// assert_eq!(seen, vec![1, 2]);
    /// assert_eq!(doubled.to_list(), &[2, 4]);
    /// ```
    #[must_use]
    pub fn peek<F>(self, consumer: F) -> Self
    where
        F: FnMut(&T),
    {
        self.iter().for_each(consumer);
        self
    }

    /// Runs `consumer` on every element, in order.
    pub fn for_each<F>(&self, consumer: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(consumer);
    }

    fn check_index<F>(&self, index: usize, operation: F) -> Result<(), IndexError>
    where
        F: FnOnce() -> String,
    {
        if index < self.len() {
            Ok(())
        } else {
            Err(IndexError::out_of_range(operation(), index, self.len()))
        }
    }
}

impl<T: Clone> IList<T> {
    /// Copies a slice into a new list.
    pub fn from_slice(slice: &[T]) -> Self {
        Self::from_vec(slice.to_vec())
    }

    /// Returns an independent, mutable copy of the elements.
    #[inline]
    pub fn to_mutable_list(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Returns an independent copy of the elements. Alias of
    /// [`IList::to_mutable_list`].
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.to_mutable_list()
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Keeps the elements matching `predicate`, in their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    ///
    /// let list = IList::list_of(1..=6);
    /// assert_eq!(list.filter(|value| value % 3 == 0).to_list(), &[3, 6]);
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::from_vec(
            self.iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        )
    }

    /// Removes duplicates, keeping each value at the position of its first
    /// occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    ///
    /// let list = IList::from(vec![1, 2, 2, 3, 1]);
    /// assert_eq!(list.distinct().to_list(), &[1, 2, 3]);
    /// ```
    pub fn distinct(&self) -> Self
    where
        T: Hash + Eq,
    {
        let mut seen: HashSet<&T, DefaultBuildHasher> =
            HashSet::with_capacity_and_hasher(self.len(), DefaultBuildHasher::default());
        Self::from_vec(
            self.iter()
                .filter(|element| seen.insert(*element))
                .cloned()
                .collect(),
        )
    }

    /// Removes every element equal to some element of `others`, keeping the
    /// remaining elements in order.
    ///
    /// `others` may yield owned values or references.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    ///
    /// let list = IList::from(vec![1, 2, 3, 2]);
    /// assert_eq!(list.subtract([2]).to_list(), &[1, 3]);
    /// assert!(list.subtract(&list).is_empty());
    /// ```
    pub fn subtract<I>(&self, others: I) -> Self
    where
        T: PartialEq,
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let excluded: Vec<I::Item> = others.into_iter().collect();
        if excluded.is_empty() {
            return self.clone();
        }
        self.filter(|element| {
            !excluded
                .iter()
                .any(|other| Borrow::<T>::borrow(other) == element)
        })
    }

    /// Alias of [`IList::subtract`].
    pub fn minus<I>(&self, others: I) -> Self
    where
        T: PartialEq,
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        self.subtract(others)
    }

    /// Removes every element equal to some element of any of `groups`.
    pub fn subtract_all<G, I>(&self, groups: G) -> Self
    where
        T: PartialEq,
        G: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        self.subtract(groups.into_iter().flatten())
    }

    // =========================================================================
    // Concatenation
    // =========================================================================

    /// Returns this list followed by the elements of `others`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    ///
    /// let left = IList::from(vec![1, 2]);
    /// let right = IList::from(vec![3]);
    /// assert_eq!(left.concat(right).to_list(), &[1, 2, 3]);
    /// assert_eq!(left.concat([9]).to_list(), &[1, 2, 9]);
    /// ```
    pub fn concat<I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let others = others.into_iter();
        let mut elements = Vec::with_capacity(self.len().saturating_add(others.size_hint().0));
        elements.extend_from_slice(self.as_slice());
        elements.extend(others);
        Self::from_vec(elements)
    }

    /// Alias of [`IList::concat`].
    pub fn plus<I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.concat(others)
    }

    /// Alias of [`IList::concat`].
    pub fn add<I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.concat(others)
    }

    /// Returns this list followed by the elements of every group, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    ///
    /// let list = IList::from(vec![1]);
    /// let joined = list.concat_all([vec![2, 3], vec![], vec![4]]);
    /// assert_eq!(joined.to_list(), &[1, 2, 3, 4]);
    /// ```
    pub fn concat_all<G, I>(&self, groups: G) -> Self
    where
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        self.concat(groups.into_iter().flatten())
    }

    // =========================================================================
    // Associations
    // =========================================================================

    /// Indexes the elements by the key `key_selector` computes for them.
    ///
    /// On key collisions the later element wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    ///
    /// let words = IList::from(vec!["apple", "avocado", "banana"]);
    /// let by_initial = words.associate_by(|word| word.chars().next());
    /// assert_eq!(by_initial[&Some('a')], "avocado");
    /// assert_eq!(by_initial.len(), 2);
    /// ```
    pub fn associate_by<K, F>(&self, mut key_selector: F) -> HashMap<K, T>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        let mut associated = HashMap::with_capacity(self.len());
        for element in self {
            associated.insert(key_selector(element), element.clone());
        }
        associated
    }

    /// Indexes values computed by `value_transform` by the key
    /// `key_selector` computes, the later element winning on collisions.
    pub fn associate_by_with<K, V, F, G>(
        &self,
        mut key_selector: F,
        mut value_transform: G,
    ) -> HashMap<K, V>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
        G: FnMut(&T) -> V,
    {
        let mut associated = HashMap::with_capacity(self.len());
        for element in self {
            associated.insert(key_selector(element), value_transform(element));
        }
        associated
    }

    // =========================================================================
    // Positional Updates
    // =========================================================================

    /// Returns a new list with the element at `index` replaced by `value`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] when `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    ///
    /// let list = IList::from(vec![1, 2, 3]);
    /// assert_eq!(list.set(1, 20).unwrap().to_list(), &[1, 20, 3]);
    /// assert_eq!(list.to_list(), &[1, 2, 3]);
    /// ```
    pub fn set(&self, index: usize, value: T) -> Result<Self, IndexError> {
        self.check_index(index, || format!("set({index}, _)"))?;
        let mut elements = self.to_mutable_list();
        elements[index] = value;
        Ok(Self::from_vec(elements))
    }

    /// Returns a new list without the element at `index`; later elements
    /// shift down by one.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] when `index >= len()`.
    pub fn remove(&self, index: usize) -> Result<Self, IndexError> {
        self.check_index(index, || format!("remove({index})"))?;
        let slice = self.as_slice();
        let mut elements = Vec::with_capacity(slice.len() - 1);
        elements.extend_from_slice(&slice[..index]);
        elements.extend_from_slice(&slice[index + 1..]);
        Ok(Self::from_vec(elements))
    }

    /// Copies the half-open range `[from, to)` into a new list.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::ToIndexOutOfRange`] when `to > len()` and
    /// [`IndexError::FromIndexAfterToIndex`] when `from > to`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    ///
    /// let list = IList::from(vec![7, 8, 9]);
    /// assert!(list.sub_list(1, 1).unwrap().is_empty());
    /// assert_eq!(list.sub_list(0, 3).unwrap(), list);
    /// assert!(list.sub_list(2, 1).is_err());
    /// ```
    pub fn sub_list(&self, from: usize, to: usize) -> Result<Self, IndexError> {
        if to > self.len() || from > to {
            return Err(IndexError::sub_list(from, to, self.len()));
        }
        Ok(Self::from_slice(&self.as_slice()[from..to]))
    }
}

// =============================================================================
// Lists of Possibly Absent Elements
// =============================================================================

impl<T> IList<Option<T>> {
    /// Returns the first element, or `None` if the list is empty **or** its
    /// first element is absent.
    ///
    /// Only position 0 is treated this way: absent elements elsewhere are
    /// left alone by every other operation. [`IList::first_or_none`] never
    /// collapses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    /// use iimmutable::control::IOption;
    ///
    /// assert_eq!(IList::from(vec![Some(1), None]).first_present(), IOption::some(&1));
    /// assert!(IList::from(vec![None, Some(1)]).first_present().is_empty());
    /// ```
    pub fn first_present(&self) -> IOption<&T> {
        self.first()
            .flat_map(|element| IOption::of_nullable(element.as_ref()))
    }
}

impl<T: Clone> IList<Option<T>> {
    /// Drops the absent elements and unwraps the present ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    ///
    /// let list = IList::from(vec![Some(1), None, Some(3)]);
    /// assert_eq!(list.filter_non_null().to_list(), &[1, 3]);
    /// ```
    pub fn filter_non_null(&self) -> IList<T> {
        IList::from_vec(self.iter().flatten().cloned().collect())
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An owning iterator over the elements of an [`IList`].
///
/// When the list was the only owner of its buffer the elements are moved
/// out; otherwise they are cloned out of the buffer shared with other lists.
pub struct IListIntoIterator<T> {
    source: IntoIteratorSource<T>,
}

enum IntoIteratorSource<T> {
    Owned(std::vec::IntoIter<T>),
    Shared { list: IList<T>, index: usize },
}

impl<T> IListIntoIterator<T> {
    fn new(list: IList<T>) -> Self {
        let source = match list.elements {
            None => IntoIteratorSource::Owned(Vec::new().into_iter()),
            Some(buffer) => match ReferenceCounter::try_unwrap(buffer) {
                Ok(elements) => IntoIteratorSource::Owned(elements.into_iter()),
                Err(buffer) => IntoIteratorSource::Shared {
                    list: IList {
                        elements: Some(buffer),
                    },
                    index: 0,
                },
            },
        };
        Self { source }
    }
}

impl<T: Clone> Iterator for IListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.source {
            IntoIteratorSource::Owned(elements) => elements.next(),
            IntoIteratorSource::Shared { list, index } => {
                let element = list.as_slice().get(*index)?.clone();
                *index += 1;
                Some(element)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for IListIntoIterator<T> {
    fn len(&self) -> usize {
        match &self.source {
            IntoIteratorSource::Owned(elements) => elements.len(),
            IntoIteratorSource::Shared { list, index } => list.len() - index,
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for IList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

impl<T> Default for IList<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> FromIterator<T> for IList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::list_of(iter)
    }
}

impl<T> From<Vec<T>> for IList<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for IList<T> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Self::from_vec(Vec::from(elements))
    }
}

impl<T: Clone> From<&[T]> for IList<T> {
    #[inline]
    fn from(elements: &[T]) -> Self {
        Self::from_slice(elements)
    }
}

impl<T> AsRef<[T]> for IList<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Clone> IntoIterator for IList<T> {
    type Item = T;
    type IntoIter = IListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IListIntoIterator::new(self)
    }
}

impl<'a, T> IntoIterator for &'a IList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for IList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for IList<T> {}

/// Computes a hash value for this list.
///
/// The length is hashed first, then each element in order, so equal lists
/// hash equally and element order affects the hash.
impl<T: Hash> Hash for IList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for IList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Implementations
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for IList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct IListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> IListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for IListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = IList<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(IList::from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for IList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(IListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    #[case(IList::empty(), "[]")]
    #[case(IList::from(vec![42]), "[42]")]
    #[case(IList::from(vec![1, 2, 3]), "[1, 2, 3]")]
    fn test_display(#[case] list: IList<i32>, #[case] expected: &str) {
        assert_eq!(format!("{list}"), expected);
    }

    #[rstest]
    fn test_debug_uses_list_form() {
        let list = IList::from(vec!["a", "b"]);
        assert_eq!(format!("{list:?}"), r#"["a", "b"]"#);
    }

    // =========================================================================
    // Empty List Tests
    // =========================================================================

    #[rstest]
    fn test_every_empty_construction_path_is_canonical() {
        let empties: Vec<IList<i32>> = vec![
            IList::empty(),
            IList::new(),
            IList::default(),
            IList::list_of(Vec::new()),
            IList::from_nullable(None::<Vec<i32>>),
            IList::from([]),
            IList::from(vec![1]).filter(|_| false),
        ];
        for empty in &empties {
            assert!(empty.is_shared_empty());
            assert!(empty.ptr_eq(&IList::empty()));
        }
    }

    #[rstest]
    fn test_remove_last_element_yields_canonical_empty() {
        let removed = IList::from(vec![1]).remove(0).unwrap();
        assert!(removed.elements.is_none());
    }

    // =========================================================================
    // Sharing Tests
    // =========================================================================

    #[rstest]
    fn test_peek_returns_same_buffer() {
        let list = IList::from(vec![1, 2, 3]);
        let peeked = list.clone().peek(|_| {});
        assert!(peeked.ptr_eq(&list));
    }

    #[rstest]
    fn test_subtract_nothing_returns_same_buffer() {
        let list = IList::from(vec![1, 2, 3]);
        assert!(list.subtract(Vec::<i32>::new()).ptr_eq(&list));
    }

    #[rstest]
    fn test_mutable_copy_is_independent() {
        let list = IList::from(vec![1, 2, 3]);
        let mut copy = list.to_mutable_list();
        copy[0] = 100;
        copy.push(4);
        assert_eq!(list.to_list(), &[1, 2, 3]);
    }

    // =========================================================================
    // Iterator Tests
    // =========================================================================

    #[rstest]
    fn test_into_iter_is_exact_size() {
        let mut iterator = IList::from(vec![1, 2, 3]).into_iter();
        assert_eq!(iterator.len(), 3);
        assert_eq!(iterator.next(), Some(1));
        assert_eq!(iterator.len(), 2);
        assert_eq!(iterator.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[rstest]
    fn test_flat_map_with_empty_results() {
        let list = IList::from(vec![1, 2]);
        let flattened: IList<i32> = list.flat_map(|_| Vec::new());
        assert!(flattened.is_empty());
    }

    #[rstest]
    fn test_join_without_separator() {
        let list = IList::from(vec!['a', 'b', 'c']);
        assert_eq!(list.join_without_separator(), "abc");
        assert_eq!(IList::<char>::empty().join(", "), "");
    }
}
