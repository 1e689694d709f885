use derive_more::{Display, Error};

/// The error returned when an operation needs an element, but the store is empty.
///
/// The store is left untouched when this is returned.
///
/// # Examples
/// ```
/// # use priority_store::collections::heap::{BoundedPriorityStore, EmptyContainer};
/// let mut store = BoundedPriorityStore::<u8>::new();
/// let error = store.extract_max().unwrap_err();
/// assert_eq!(error, EmptyContainer { operation: "extract_max" });
/// assert_eq!(error.to_string(), "extract_max: empty container");
/// ```
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("{operation}: empty container")]
pub struct EmptyContainer {
    /// The name of the operation that failed.
    pub operation: &'static str,
}

impl EmptyContainer {
    pub(crate) const fn during(operation: &'static str) -> EmptyContainer {
        EmptyContainer { operation }
    }
}
