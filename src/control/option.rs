//! Optional value container - zero or one present value.
//!
//! This module provides [`IOption`], a two-variant container that is either
//! `Some(value)` or `None`. It is the result type of the partial queries of
//! [`IList`] (`find`, `first`, `reduce`) and converts back into a list with
//! [`IOption::to_list`] or into an [`Either`] with [`IOption::to_either`].
//!
//! Unlike `std::option::Option`, every combinator here that takes a value
//! also returns the option, so side-effecting inspection (`if_defined`,
//! `if_empty`) can sit inside a chain.
//!
//! # Absence
//!
//! `Some` never wraps absence. Values that may be absent enter through
//! [`IOption::of_nullable`], which maps absence to `None`, or through
//! [`IOption::try_some`], which reports absence as a [`NullValueError`].
//!
//! # Examples
//!
//! ```rust
//! use iimmutable::control::{Either, IOption};
//!
//! let port = IOption::of_nullable(Some("8080"))
//!     .map_nullable(|text| text.parse::<u16>().ok())
//!     .filter(|port| *port > 1024);
//! assert_eq!(port, IOption::some(8080));
//!
//! let checked = port.to_either(|| "no usable port");
//! assert_eq!(checked, Either::Right(8080));
//! ```

use std::fmt;

use super::Either;
use crate::collection::IList;
use crate::error::{NoValueError, NullValueError};

/// A container holding either one present value or nothing.
///
/// # Type Parameters
///
/// * `T` - The type of the wrapped value
///
/// # Examples
///
/// ```rust
/// use iimmutable::control::IOption;
///
/// let some = IOption::some(3);
/// let none: IOption<i32> = IOption::none();
///
/// assert_eq!(some.get_or_else(0), 3);
/// assert_eq!(none.get_or_else(0), 0);
/// assert_eq!(format!("{some}"), "Some(3)");
/// assert_eq!(format!("{none}"), "None");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IOption<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

impl<T> IOption<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Wraps a value the caller expects to be present.
    ///
    /// Absence is a programming error here and is reported rather than
    /// silently turned into `None`; use [`IOption::of_nullable`] when absence
    /// is legitimate.
    ///
    /// # Errors
    ///
    /// Returns [`NullValueError`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::control::IOption;
    ///
    /// assert_eq!(IOption::try_some(Some(1)), Ok(IOption::some(1)));
    /// assert!(IOption::<i32>::try_some(None).is_err());
    /// ```
    pub fn try_some(value: Option<T>) -> Result<Self, NullValueError> {
        value.map(Self::Some).ok_or_else(NullValueError::new)
    }

    /// Returns the empty option.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Returns the empty option. Alias of [`IOption::none`].
    #[inline]
    pub const fn empty() -> Self {
        Self::None
    }

    /// Wraps a possibly absent value: absence becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::control::IOption;
    ///
    /// assert_eq!(IOption::of_nullable(Some('a')), IOption::some('a'));
    /// assert!(IOption::<char>::of_nullable(None).is_empty());
    /// ```
    #[inline]
    pub fn of_nullable(value: Option<T>) -> Self {
        value.map_or(Self::None, Self::Some)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Returns `true` if there is no value.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns a reference to the value.
    ///
    /// # Errors
    ///
    /// Returns [`NoValueError`] if the option is empty. Use
    /// [`IOption::or_null`] when absence is an acceptable answer.
    #[inline]
    pub fn get(&self) -> Result<&T, NoValueError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(NoValueError::new()),
        }
    }

    /// Returns the value, consuming the option.
    ///
    /// # Errors
    ///
    /// Returns [`NoValueError`] if the option is empty.
    #[inline]
    pub fn into_value(self) -> Result<T, NoValueError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(NoValueError::new()),
        }
    }

    /// Returns the value if present, never failing.
    #[inline]
    pub const fn or_null(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Converts into a standard option.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Returns the value, or `default` if empty.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the value, or the supplier's result if empty.
    ///
    /// The supplier is only called when the option is empty.
    #[inline]
    pub fn get_or_else_with<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => supplier(),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs `action` if the option is empty, then returns the option unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::control::IOption;
    ///
    /// let mut misses = 0;
    /// let value = IOption::<i32>::none().if_empty(|| misses += 1).get_or_else(7);
    /// assert_eq!((misses, value), (1, 7));
    /// ```
    #[inline]
    #[must_use]
    pub fn if_empty<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_empty() {
            action();
        }
        self
    }

    /// Runs `consumer` on the value if present, then returns the option unchanged.
    #[inline]
    #[must_use]
    pub fn if_defined<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            consumer(value);
        }
        self
    }

    /// Runs `consumer` on the value if present.
    #[inline]
    pub fn for_each<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = self {
            consumer(value);
        }
    }

    // =========================================================================
    // Alternatives
    // =========================================================================

    /// Returns `self` if defined, otherwise `Some(value)`.
    #[inline]
    #[must_use]
    pub fn or_else(self, value: T) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => Self::Some(value),
        }
    }

    /// Returns `self` if defined, otherwise `Some(supplier())`.
    #[inline]
    #[must_use]
    pub fn or_else_with<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(_) => self,
            Self::None => Self::Some(supplier()),
        }
    }

    /// Returns `self` if defined, otherwise `other` as-is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::control::IOption;
    ///
    /// let fallback = IOption::none();
    /// assert!(IOption::<i32>::none().or_else_flat(fallback).is_empty());
    /// assert_eq!(IOption::some(1).or_else_flat(IOption::some(2)), IOption::some(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else_flat(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns `self` if defined, otherwise the option produced by `supplier`.
    #[inline]
    #[must_use]
    pub fn or_else_flat_with<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => supplier(),
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Keeps the value only if `predicate` holds for it.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Applies `function` to the value if present.
    #[inline]
    pub fn map<U, F>(self, function: F) -> IOption<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => IOption::Some(function(value)),
            Self::None => IOption::None,
        }
    }

    /// Applies a function that may remove the value.
    ///
    /// An absent result collapses to `None`, so
    /// `IOption::some(v).map_nullable(f) == IOption::of_nullable(f(v))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::control::IOption;
    ///
    /// let digit = IOption::some('7').map_nullable(|c| c.to_digit(10));
    /// assert_eq!(digit, IOption::some(7));
    ///
    /// let letter = IOption::some('x').map_nullable(|c| c.to_digit(10));
    /// assert!(letter.is_empty());
    /// ```
    #[inline]
    pub fn map_nullable<U, F>(self, function: F) -> IOption<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => IOption::of_nullable(function(value)),
            Self::None => IOption::None,
        }
    }

    /// Applies a function that itself returns an `IOption`.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> IOption<U>
    where
        F: FnOnce(T) -> IOption<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => IOption::None,
        }
    }

    /// Borrows the value, producing an `IOption<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> IOption<&T> {
        match self {
            Self::Some(value) => IOption::Some(value),
            Self::None => IOption::None,
        }
    }

    /// Returns an iterator over the zero or one values.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.or_null().into_iter()
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into a list of length zero or one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::collection::IList;
    /// use iimmutable::control::IOption;
    ///
    /// assert_eq!(IOption::some(5).to_list(), IList::from(vec![5]));
    /// assert!(IOption::<i32>::none().to_list().is_empty());
    /// ```
    pub fn to_list(self) -> IList<T> {
        match self {
            Self::Some(value) => IList::from(vec![value]),
            Self::None => IList::empty(),
        }
    }

    /// Converts into an [`Either`]: `Some(v)` becomes `Right(v)` and `None`
    /// becomes `Left(left_supplier())`.
    ///
    /// The supplier is only called when the option is empty.
    pub fn to_either<L, F>(self, left_supplier: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::Some(value) => Either::Right(value),
            Self::None => Either::Left(left_supplier()),
        }
    }
}

impl<T: Clone> IOption<&T> {
    /// Clones the borrowed value, as returned by [`IList::find`] and
    /// [`IList::first`].
    #[inline]
    pub fn cloned(self) -> IOption<T> {
        self.map(T::clone)
    }
}

impl<T: Copy> IOption<&T> {
    /// Copies the borrowed value.
    #[inline]
    pub fn copied(self) -> IOption<T> {
        self.map(|value| *value)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for IOption<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T: fmt::Display> fmt::Display for IOption<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T> From<Option<T>> for IOption<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<IOption<T>> for Option<T> {
    #[inline]
    fn from(value: IOption<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for IOption<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IOption<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Implementations
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for IOption<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Some(value) => serializer.serialize_some(value),
            Self::None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for IOption<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::of_nullable)
    }
}

// =============================================================================
// Tests
// =============================================================================
