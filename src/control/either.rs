//! Either type - a value that is one of two alternatives.
//!
//! `Either<L, R>` is the target of [`IOption::to_either`]: an empty option
//! becomes a `Left` produced on demand, a defined option becomes a `Right`
//! carrying the value. By convention `Left` holds the error or alternative
//! payload and `Right` the success payload.
//!
//! # Examples
//!
//! ```rust
//! use iimmutable::control::{Either, IOption};
//!
//! let found = IOption::some(4).to_either(|| "missing");
//! assert_eq!(found, Either::Right(4));
//!
//! let missing = IOption::<i32>::none().to_either(|| "missing");
//! assert!(missing.is_left());
//!
//! let message = missing.fold(|error| error.to_string(), |value| value.to_string());
//! assert_eq!(message, "missing");
//! ```

use std::fmt;

use super::IOption;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Type Parameters
///
/// * `L` - The type of the left (error or alternative) value
/// * `R` - The type of the right (success) value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally the error or alternative payload.
    Left(L),
    /// The right variant, conventionally the success payload.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::control::Either;
    ///
    /// let right: Either<&str, i32> = Either::Right(1);
    /// assert!(right.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Returns the left value as an [`IOption`], consuming the either.
    #[inline]
    pub fn left(self) -> IOption<L> {
        match self {
            Self::Left(value) => IOption::Some(value),
            Self::Right(_) => IOption::None,
        }
    }

    /// Returns the right value as an [`IOption`], consuming the either.
    ///
    /// This is the inverse of [`IOption::to_either`] for defined options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::control::{Either, IOption};
    ///
    /// let right: Either<&str, i32> = Either::Right(7);
    /// assert_eq!(right.right(), IOption::some(7));
    ///
    /// let left: Either<&str, i32> = Either::Left("no");
    /// assert!(left.right().is_empty());
    /// ```
    #[inline]
    pub fn right(self) -> IOption<R> {
        match self {
            Self::Left(_) => IOption::None,
            Self::Right(value) => IOption::Some(value),
        }
    }

    /// Returns the right value as an [`IOption`]. Alias of [`Either::right`]
    /// for right-biased pipelines.
    #[inline]
    pub fn to_option(self) -> IOption<R> {
        self.right()
    }

    /// Borrows the contents, producing an `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Mapping and Elimination
    // =========================================================================

    /// Applies a function to the left value, leaving a `Right` untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value, leaving a `Left` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iimmutable::control::Either;
    ///
    /// let right: Either<&str, i32> = Either::Right(20);
    /// assert_eq!(right.map_right(|value| value + 1), Either::Right(21));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Eliminates the either by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the variants: `Left(l)` becomes `Right(l)` and vice versa.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
