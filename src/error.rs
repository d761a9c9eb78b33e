//! Error types for the immutable containers.
//!
//! Every fallible operation in this crate fails synchronously, before any
//! observable effect, with one of the types below:
//!
//! - [`IndexError`]: an index or range outside the bounds of an
//!   [`IList`](crate::collection::IList)
//! - [`NoValueError`]: unconditional access to an empty
//!   [`IOption`](crate::control::IOption)
//! - [`NullValueError`]: an absent value handed to the present variant of
//!   [`IOption`](crate::control::IOption)
//!
//! [`ImmutableError`] unifies the three for callers that mix them behind a
//! single `?`.

use std::fmt;

/// Represents an index or range that falls outside a list.
///
/// # Examples
///
/// ```rust
/// use iimmutable::error::IndexError;
///
/// let error = IndexError::OutOfRange {
///     operation: "get(5)".to_string(),
///     index: 5,
///     size: 3,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "Cannot `get(5)`: Index (5) must be equal to or greater than zero and less than size (3)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// A single index was not in `[0, size)`.
    OutOfRange {
        /// The rendered call that failed, e.g. `` set(4, _) ``.
        operation: String,
        /// The offending index.
        index: usize,
        /// The size of the list at the time of the call.
        size: usize,
    },
    /// The exclusive end of a range was past the end of the list.
    ToIndexOutOfRange {
        /// Inclusive start of the requested range.
        from: usize,
        /// Exclusive end of the requested range.
        to: usize,
        /// The size of the list at the time of the call.
        size: usize,
    },
    /// The start of a range was after its end.
    FromIndexAfterToIndex {
        /// Inclusive start of the requested range.
        from: usize,
        /// Exclusive end of the requested range.
        to: usize,
    },
}

impl IndexError {
    pub(crate) fn out_of_range(operation: String, index: usize, size: usize) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(%operation, index, size, "index out of range");
        Self::OutOfRange {
            operation,
            index,
            size,
        }
    }

    pub(crate) fn sub_list(from: usize, to: usize, size: usize) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(from, to, size, "sub_list range rejected");
        if to > size {
            Self::ToIndexOutOfRange { from, to, size }
        } else {
            Self::FromIndexAfterToIndex { from, to }
        }
    }

    /// Returns the size of the list the failed call was made on, when known.
    pub const fn size(&self) -> Option<usize> {
        match self {
            Self::OutOfRange { size, .. } | Self::ToIndexOutOfRange { size, .. } => Some(*size),
            Self::FromIndexAfterToIndex { .. } => None,
        }
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                operation,
                index,
                size,
            } => write!(
                formatter,
                "Cannot `{operation}`: Index ({index}) must be equal to or greater than zero and less than size ({size})"
            ),
            Self::ToIndexOutOfRange { from, to, size } => write!(
                formatter,
                "Cannot `sub_list({from}, {to})`: to ({to}) must be equal to or less than size ({size})"
            ),
            Self::FromIndexAfterToIndex { from, to } => write!(
                formatter,
                "Cannot `sub_list({from}, {to})`: from ({from}) must be equal to or less than to ({to})"
            ),
        }
    }
}

impl std::error::Error for IndexError {}

/// Represents an unconditional read of an empty `IOption`.
///
/// The message points at `or_null()`, which returns `Option<&T>` and never
/// fails.
///
/// # Examples
///
/// ```rust
/// use iimmutable::control::IOption;
///
/// let error = IOption::<i32>::none().get().unwrap_err();
/// assert!(format!("{error}").starts_with("IOption::None has no value."));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoValueError;

impl NoValueError {
    pub(crate) fn new() -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!("value requested from IOption::None");
        Self
    }
}

impl fmt::Display for NoValueError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(
            "IOption::None has no value. If absence is acceptable here, use `or_null()` instead of `get()`",
        )
    }
}

impl std::error::Error for NoValueError {}

/// Represents an attempt to build `IOption::Some` out of an absent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullValueError;

impl NullValueError {
    pub(crate) fn new() -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!("absent value passed to IOption::try_some");
        Self
    }
}

impl fmt::Display for NullValueError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Argument of IOption::Some cannot be absent")
    }
}

impl std::error::Error for NullValueError {}

/// Represents any error raised by this crate.
///
/// # Examples
///
/// ```rust
/// use iimmutable::collection::IList;
/// use iimmutable::error::ImmutableError;
///
/// fn second_then_first(list: &IList<i32>) -> Result<i32, ImmutableError> {
///     let second = *list.get(1)?;
///     let first = **list.first().get()?;
///     Ok(second - first)
/// }
///
/// assert_eq!(second_then_first(&IList::from(vec![1, 5])), Ok(4));
/// assert!(second_then_first(&IList::from(vec![1])).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImmutableError {
    /// See [`IndexError`].
    Index(IndexError),
    /// See [`NoValueError`].
    NoValue(NoValueError),
    /// See [`NullValueError`].
    NullValue(NullValueError),
}

impl fmt::Display for ImmutableError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(error) => write!(formatter, "{error}"),
            Self::NoValue(error) => write!(formatter, "{error}"),
            Self::NullValue(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for ImmutableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Index(error) => Some(error),
            Self::NoValue(error) => Some(error),
            Self::NullValue(error) => Some(error),
        }
    }
}

impl From<IndexError> for ImmutableError {
    fn from(error: IndexError) -> Self {
        Self::Index(error)
    }
}

impl From<NoValueError> for ImmutableError {
    fn from(error: NoValueError) -> Self {
        Self::NoValue(error)
    }
}

impl From<NullValueError> for ImmutableError {
    fn from(error: NullValueError) -> Self {
        Self::NullValue(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_out_of_range_display() {
        let error = IndexError::out_of_range("remove(3)".to_string(), 3, 3);
        assert_eq!(
            format!("{error}"),
            "Cannot `remove(3)`: Index (3) must be equal to or greater than zero and less than size (3)"
        );
        assert_eq!(error.size(), Some(3));
    }

    #[rstest]
    fn test_sub_list_picks_to_index_variant_first() {
        let error = IndexError::sub_list(5, 4, 3);
        assert_eq!(
            error,
            IndexError::ToIndexOutOfRange {
                from: 5,
                to: 4,
                size: 3
            }
        );
    }

    #[rstest]
    fn test_sub_list_from_after_to_display() {
        let error = IndexError::sub_list(2, 1, 3);
        assert_eq!(
            format!("{error}"),
            "Cannot `sub_list(2, 1)`: from (2) must be equal to or less than to (1)"
        );
        assert_eq!(error.size(), None);
    }

    #[rstest]
    fn test_no_value_display() {
        assert_eq!(
            format!("{}", NoValueError::new()),
            "IOption::None has no value. If absence is acceptable here, use `or_null()` instead of `get()`"
        );
    }

    #[rstest]
    fn test_null_value_display() {
        assert_eq!(
            format!("{}", NullValueError::new()),
            "Argument of IOption::Some cannot be absent"
        );
    }

    #[rstest]
    fn test_immutable_error_wraps_and_exposes_source() {
        use std::error::Error;

        let error: ImmutableError = NoValueError::new().into();
        assert_eq!(format!("{error}"), format!("{}", NoValueError));
        assert!(error.source().is_some());
    }
}
