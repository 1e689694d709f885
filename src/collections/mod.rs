//! Priority queue collection types.
//!
//! # Purpose
//! [`heap`] contains the array-backed [`BoundedPriorityStore`](heap::BoundedPriorityStore) and the
//! index arithmetic that turns its storage into a tree. [`traits`] contains the
//! [`PriorityQueue`](traits::PriorityQueue) interface, which the store shares with
//! [`std::collections::BinaryHeap`].
//!
//! # Method
//! The store implements [`Deref<Target = [T]>`](std::ops::Deref) (but not DerefMut) to expose its
//! breadth-first layout read-only, which saves me from writing the usual slice accessors.

pub mod heap;
pub mod traits;
