//! Index arithmetic for a complete binary tree stored in breadth-first order.
//!
//! The root lives at index 0, its children at 1 and 2, their children at 3 to 6, and so on. No
//! function here checks that the returned index is within a particular collection, only that it
//! fits in a [`usize`].

/// Returns the index of the left child of the node at index `i`, or [`None`] if that index would
/// overflow.
///
/// # Examples
/// ```
/// # use priority_store::collections::heap::left;
/// assert_eq!(left(0), Some(1));
/// assert_eq!(left(1), Some(3));
/// assert_eq!(left(usize::MAX / 2 + 1), None);
/// ```
pub const fn left(i: usize) -> Option<usize> {
    match i.checked_mul(2) {
        Some(double) => double.checked_add(1),
        None => None,
    }
}

/// Returns the index of the right child of the node at index `i`, or [`None`] if that index would
/// overflow.
///
/// # Examples
/// ```
/// # use priority_store::collections::heap::right;
/// assert_eq!(right(0), Some(2));
/// assert_eq!(right(1), Some(4));
/// assert_eq!(right(usize::MAX / 2), None);
/// ```
pub const fn right(i: usize) -> Option<usize> {
    match i.checked_add(1) {
        Some(next) => next.checked_mul(2),
        None => None,
    }
}

/// Returns the index of the parent of the node at index `i`, or [`None`] for the root.
///
/// # Examples
/// ```
/// # use priority_store::collections::heap::parent;
/// assert_eq!(parent(0), None);
/// assert_eq!(parent(3), Some(1));
/// assert_eq!(parent(4), Some(1));
/// ```
pub const fn parent(i: usize) -> Option<usize> {
    match i {
        0 => None,
        _ => Some((i - 1) / 2),
    }
}
