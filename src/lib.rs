//! This crate is a small collections library built around a single priority queue:
//! [`BoundedPriorityStore`](collections::heap::BoundedPriorityStore), a binary max-heap.
//!
//! # Purpose
//! The heap is written out by hand to show how a complete binary tree can live inside a flat,
//! growable array with no pointers at all. Every node's children and parent are found with index
//! arithmetic, exposed under [`collections::heap`] as [`left`](collections::heap::left),
//! [`right`](collections::heap::right) and [`parent`](collections::heap::parent).
//!
//! # Error Handling
//! Taking from an empty collection is the only thing that can go wrong, and it is common enough
//! that it shouldn't panic. [`peek_max`](collections::heap::BoundedPriorityStore::peek_max) and
//! [`extract_max`](collections::heap::BoundedPriorityStore::extract_max) return a [`Result`] with
//! a strongly typed [`EmptyContainer`](collections::heap::EmptyContainer) error, which is a plain
//! struct implementing [`Error`](std::error::Error).
//!
//! Ordering is checked by the type system instead: elements must implement [`Ord`].
//!
//! # Dependencies
//! Unlike most of the collections I've written, the heap's storage is a plain [`Vec`]. The
//! interesting part of a heap is the percolation, not the allocation, and [`Vec`] already doubles
//! its capacity when it runs out of space.
//!
//! The library itself uses `derive_more` for its error types and the `log` facade for tracing
//! percolation. The `demo` feature (enabled by default) builds a small binary on top of `clap` and
//! `env_logger`.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

#[cfg(test)]
pub(crate) mod util;
