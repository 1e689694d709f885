use std::collections::BinaryHeap;

use crate::collections::heap::{BoundedPriorityStore, EmptyContainer};

/// A queue that always hands out its largest element first.
///
/// Implemented for [`BoundedPriorityStore`] and for [`std::collections::BinaryHeap`], which makes
/// it easy to swap one for the other or to compare their behavior.
pub trait PriorityQueue<T: Ord> {
    /// Adds `item` to the queue.
    fn insert(&mut self, item: T);

    /// Returns a reference to the largest element, without removing it.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the queue is empty.
    fn peek_max(&self) -> Result<&T, EmptyContainer>;

    /// Removes and returns the largest element.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the queue is empty.
    fn extract_max(&mut self) -> Result<T, EmptyContainer>;

    /// Returns the number of elements in the queue.
    fn len(&self) -> usize;

    /// Returns true if the queue contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `item` and then extracts the largest element, which may be `item` itself. The queue
    /// isn't modified at all when `item` is at least as large as everything in it.
    ///
    /// # Examples
    /// ```
    /// # use priority_store::collections::heap::BoundedPriorityStore;
    /// # use priority_store::collections::traits::PriorityQueue;
    /// let mut store = BoundedPriorityStore::new_from([3, 9, 4]);
    /// assert_eq!(store.push_pop(5), 9);
    /// assert_eq!(store.push_pop(10), 10);
    /// assert_eq!(store.into_sorted_vec(), [5, 4, 3]);
    /// ```
    fn push_pop(&mut self, item: T) -> T {
        let smaller = self.peek_max().is_ok_and(|max| item < *max);
        if !smaller {
            return item;
        }

        match self.extract_max() {
            Ok(max) => {
                self.insert(item);
                max
            }
            Err(_) => item,
        }
    }
}

impl<T: Ord> PriorityQueue<T> for BoundedPriorityStore<T> {
    fn insert(&mut self, item: T) {
        BoundedPriorityStore::insert(self, item)
    }

    fn peek_max(&self) -> Result<&T, EmptyContainer> {
        BoundedPriorityStore::peek_max(self)
    }

    fn extract_max(&mut self) -> Result<T, EmptyContainer> {
        BoundedPriorityStore::extract_max(self)
    }

    fn len(&self) -> usize {
        BoundedPriorityStore::len(self)
    }
}

impl<T: Ord> PriorityQueue<T> for BinaryHeap<T> {
    fn insert(&mut self, item: T) {
        self.push(item)
    }

    fn peek_max(&self) -> Result<&T, EmptyContainer> {
        self.peek().ok_or(EmptyContainer::during("peek_max"))
    }

    fn extract_max(&mut self) -> Result<T, EmptyContainer> {
        self.pop().ok_or(EmptyContainer::during("extract_max"))
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }
}
