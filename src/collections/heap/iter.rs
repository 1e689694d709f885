use std::iter::FusedIterator;

use super::BoundedPriorityStore;

#[doc(inline)]
pub use std::slice::Iter;
#[doc(inline)]
pub use std::vec::IntoIter;

impl<T> IntoIterator for BoundedPriorityStore<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Creates an owned iterator in breadth-first storage order. Use
    /// [`into_sorted`](BoundedPriorityStore::into_sorted) for largest-first iteration.
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a BoundedPriorityStore<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owned iterator which extracts elements from a [`BoundedPriorityStore`] from largest to
/// smallest. Created by [`BoundedPriorityStore::into_sorted`].
pub struct IntoSorted<T> {
    pub(crate) store: BoundedPriorityStore<T>,
}

impl<T: Ord> Iterator for IntoSorted<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.store.extract_max().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.store.len();
        (len, Some(len))
    }
}

impl<T: Ord> ExactSizeIterator for IntoSorted<T> {}

impl<T: Ord> FusedIterator for IntoSorted<T> {}

/// A draining iterator which extracts elements from a [`BoundedPriorityStore`] from largest to
/// smallest. Created by [`BoundedPriorityStore::drain_max`].
///
/// The store is empty once this iterator is dropped, whether or not it was exhausted.
pub struct DrainMax<'a, T: Ord> {
    pub(crate) store: &'a mut BoundedPriorityStore<T>,
}

impl<T: Ord> Iterator for DrainMax<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.store.extract_max().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.store.len();
        (len, Some(len))
    }
}

impl<T: Ord> ExactSizeIterator for DrainMax<'_, T> {}

impl<T: Ord> FusedIterator for DrainMax<'_, T> {}

impl<T: Ord> Drop for DrainMax<'_, T> {
    fn drop(&mut self) {
        // The remaining order doesn't matter, so skip the percolation.
        self.store.clear();
    }
}
