//! A module containing [`BoundedPriorityStore`] and associated types.
//!
//! Other included types are for iteration: [`Iter`] and [`IntoIter`] walk the store in its
//! breadth-first storage order, while [`IntoSorted`] and [`DrainMax`] extract elements from the
//! largest to the smallest. [`EmptyContainer`] is returned when taking from an empty store.
//!
//! The index functions [`left`], [`right`] and [`parent`] describe the implicit tree.
//!
//! As a note, there is no mutable iterator over a store because mutating elements in place could
//! break the heap property.

mod error;
mod index;
mod iter;
mod priority_store;

pub use error::*;
pub use index::*;
pub use iter::*;
pub use priority_store::*;
