//! Traits shared between collection types.

mod priority_queue;

pub use priority_queue::*;
