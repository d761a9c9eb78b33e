//! The `ilist!` macro for literal lists.
//!
//! This module provides the [`ilist!`] macro, which builds an
//! [`IList`](crate::collection::IList) from a comma-separated list of
//! elements, like `vec!` does for `Vec`.

/// Builds an [`IList`](crate::collection::IList) from its elements.
///
/// # Syntax
///
/// - `ilist![]` - The empty list
/// - `ilist![a]` - A list of one element
/// - `ilist![a, b, c]` - A list of the elements in order (a trailing comma is allowed)
///
/// # Examples
///
/// ```
/// use iimmutable::collection::IList;
/// use iimmutable::ilist;
///
/// let list = ilist![1, 2, 3];
/// assert_eq!(list.to_list(), &[1, 2, 3]);
///
/// let empty: IList<&str> = ilist![];
/// assert!(empty.ptr_eq(&IList::empty()));
/// ```
///
/// Elements are moved into the list, so non-`Clone` values work too:
///
/// ```
/// use iimmutable::ilist;
///
/// struct Token(u8);
///
/// let tokens = ilist![Token(1), Token(2)];
/// assert_eq!(tokens.fold(0, |total, token| total + token.0), 3);
/// ```
#[macro_export]
macro_rules! ilist {
    () => {
        $crate::collection::IList::empty()
    };

    ($($element:expr),+ $(,)?) => {
        $crate::collection::IList::from([$($element),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::collection::IList;
    use rstest::rstest;

    #[rstest]
    fn test_empty_macro_is_canonical_empty() {
        let list: IList<i32> = ilist![];
        assert!(list.is_empty());
        assert!(list.ptr_eq(&IList::empty()));
    }

    #[rstest]
    fn test_trailing_comma_is_accepted() {
        let list = ilist!["a", "b",];
        assert_eq!(list.len(), 2);
    }

    #[rstest]
    fn test_macro_matches_from_vec() {
        assert_eq!(ilist![1, 2, 3], IList::from(vec![1, 2, 3]));
    }
}
