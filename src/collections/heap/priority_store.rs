use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;

use log::{debug, trace};

use super::{DrainMax, EmptyContainer, IntoSorted, Iter, left, parent, right};

/// A priority queue implemented as a binary max-heap, stored in a growable array.
///
/// The heap is a complete binary tree laid out in breadth-first order: the root is at index 0 and
/// the node at index `i` has children at [`left(i)`](super::left) and [`right(i)`](super::right).
/// Every node is greater than or equal to both of its children, so the largest element is always
/// at the root.
///
/// Elements that compare equal are never swapped with each other, so their relative order within
/// the store is unspecified.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the store.
/// - `m`: The number of items being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `peek_max` | `O(1)` |
/// | `insert` | `O(log n)`* |
/// | `extract_max` | `O(log n)` |
/// | `new_from` | `O(m log m)` |
/// | `extend` | `O(m log (n+m))` |
/// | `into_sorted_vec` | `O(n log n)` |
///
/// \* Excluding the `O(n)` copy when the backing array has to grow, which is amortized `O(1)`.
#[derive(Clone)]
pub struct BoundedPriorityStore<T> {
    pub(crate) elements: Vec<T>,
}

impl<T> BoundedPriorityStore<T> {
    /// Creates a new, empty store. No memory is allocated until the first insertion.
    ///
    /// # Examples
    /// ```
    /// # use priority_store::collections::heap::BoundedPriorityStore;
    /// let store: BoundedPriorityStore<u8> = BoundedPriorityStore::new();
    /// assert_eq!(store.len(), 0);
    /// assert_eq!(store.cap(), 0);
    /// ```
    pub const fn new() -> BoundedPriorityStore<T> {
        BoundedPriorityStore {
            elements: Vec::new(),
        }
    }

    /// Creates a new, empty store with room for at least `cap` elements before reallocating.
    ///
    /// # Examples
    /// ```
    /// # use priority_store::collections::heap::BoundedPriorityStore;
    /// let store: BoundedPriorityStore<u8> = BoundedPriorityStore::with_cap(5);
    /// assert!(store.cap() >= 5);
    /// assert!(store.is_empty());
    /// ```
    pub fn with_cap(cap: usize) -> BoundedPriorityStore<T> {
        BoundedPriorityStore {
            elements: Vec::with_capacity(cap),
        }
    }

    /// Returns the number of elements in the store.
    ///
    /// # Examples
    /// ```
    /// # use priority_store::collections::heap::BoundedPriorityStore;
    /// let store = BoundedPriorityStore::new_from([3, 1, 2]);
    /// assert_eq!(store.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the store contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the capacity of the backing array.
    pub const fn cap(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns the elements in breadth-first storage order. This is the layout of the tree, not a
    /// sorted order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in breadth-first storage order.
    ///
    /// # Examples
    /// ```
    /// # use priority_store::collections::heap::BoundedPriorityStore;
    /// let store = BoundedPriorityStore::new_from([4, 2, 6, 1, 5]);
    /// assert_eq!(store.iter().copied().collect::<Vec<_>>(), [6, 5, 4, 1, 2]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        self.elements.iter()
    }

    /// Consumes the store, returning the backing array in breadth-first storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Removes all elements from the store, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<T: Ord> BoundedPriorityStore<T> {
    /// Creates a store from every item in `iter`, inserting them one at a time in iteration order.
    ///
    /// The resulting layout depends on the order of insertion; only the heap property is
    /// guaranteed.
    ///
    /// # Examples
    /// ```
    /// # use priority_store::collections::heap::BoundedPriorityStore;
    /// let store = BoundedPriorityStore::new_from(vec![4, 2, 6, 1, 5]);
    /// assert_eq!(store.peek_max(), Ok(&6));
    /// assert_eq!(*store, [6, 5, 4, 1, 2]);
    /// ```
    pub fn new_from<I: IntoIterator<Item = T>>(iter: I) -> BoundedPriorityStore<T> {
        let iter = iter.into_iter();
        let mut store = BoundedPriorityStore::with_cap(iter.size_hint().0);

        for item in iter {
            store.insert(item);
        }

        debug!("built store with {} elements", store.len());
        store
    }

    /// Inserts `item` into the store, moving it up the tree until its parent is at least as large.
    ///
    /// # Examples
    /// ```
    /// # use priority_store::collections::heap::BoundedPriorityStore;
    /// let mut store = BoundedPriorityStore::new();
    /// store.insert(2);
    /// store.insert(7);
    /// store.insert(5);
    /// assert_eq!(store.peek_max(), Ok(&7));
    /// assert_eq!(store.len(), 3);
    /// ```
    pub fn insert(&mut self, item: T) {
        self.elements.push(item);
        self.sift_up(self.elements.len() - 1);
    }

    /// Returns a reference to the largest element in the store, without removing it.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the store is empty.
    ///
    /// # Examples
    /// ```
    /// # use priority_store::collections::heap::BoundedPriorityStore;
    /// let mut store = BoundedPriorityStore::new();
    /// assert!(store.peek_max().is_err());
    /// store.insert("b");
    /// store.insert("c");
    /// store.insert("a");
    /// assert_eq!(store.peek_max(), Ok(&"c"));
    /// assert_eq!(store.len(), 3);
    /// ```
    pub fn peek_max(&self) -> Result<&T, EmptyContainer> {
        self.elements
            .first()
            .ok_or(EmptyContainer::during("peek_max"))
    }

    /// Removes and returns the largest element in the store.
    ///
    /// The last element in the tree takes the place of the root and is then moved down, swapping
    /// with its larger child, until both children are no larger than it.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the store is empty.
    ///
    /// # Examples
    /// ```
    /// # use priority_store::collections::heap::BoundedPriorityStore;
    /// let mut store = BoundedPriorityStore::new_from([4, 2, 6, 1, 5]);
    /// assert_eq!(store.extract_max(), Ok(6));
    /// assert_eq!(store.extract_max(), Ok(5));
    /// assert_eq!(store.len(), 3);
    /// ```
    pub fn extract_max(&mut self) -> Result<T, EmptyContainer> {
        if self.elements.is_empty() {
            return Err(EmptyContainer::during("extract_max"));
        }

        // Moves the last element into the root.
        let max = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            self.sift_down(0);
        }

        Ok(max)
    }

    /// Creates a draining iterator that extracts elements from largest to smallest. Any elements
    /// that haven't been yielded when the iterator is dropped are removed as well.
    ///
    /// # Examples
    /// ```
    /// # use priority_store::collections::heap::BoundedPriorityStore;
    /// let mut store = BoundedPriorityStore::new_from([1, 8, 3, 5]);
    /// assert_eq!(store.drain_max().take(2).collect::<Vec<_>>(), [8, 5]);
    /// assert!(store.is_empty());
    /// ```
    pub const fn drain_max(&mut self) -> DrainMax<'_, T> {
        DrainMax { store: self }
    }

    /// Consumes the store, creating an iterator that extracts elements from largest to smallest.
    pub const fn into_sorted(self) -> IntoSorted<T> {
        IntoSorted { store: self }
    }

    /// Consumes the store, returning its elements sorted from largest to smallest.
    ///
    /// # Examples
    /// ```
    /// # use priority_store::collections::heap::BoundedPriorityStore;
    /// let store = BoundedPriorityStore::new_from([4, 2, 6, 1, 5, 3]);
    /// assert_eq!(store.into_sorted_vec(), [6, 5, 4, 3, 2, 1]);
    /// ```
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_sorted().collect()
    }

    /// Moves the element at `index` towards the root while it is strictly greater than its parent.
    fn sift_up(&mut self, mut index: usize) {
        let start = index;

        while let Some(p) = parent(index) {
            if self.elements[index] <= self.elements[p] {
                break;
            }
            self.elements.swap(index, p);
            index = p;
        }

        trace!("sift_up: {} -> {}", start, index);
    }

    /// Moves the element at `index` towards the leaves while its larger child is strictly greater
    /// than it.
    fn sift_down(&mut self, mut index: usize) {
        let start = index;
        let len = self.elements.len();

        loop {
            let Some(l) = left(index).filter(|&l| l < len) else {
                // Leaf.
                break;
            };

            // Prefer the right child unless the left is strictly larger.
            let child = match right(index).filter(|&r| r < len) {
                Some(r) if self.elements[l] <= self.elements[r] => r,
                _ => l,
            };

            if self.elements[child] <= self.elements[index] {
                break;
            }
            self.elements.swap(index, child);
            index = child;
        }

        trace!("sift_down: {} -> {}", start, index);
    }
}

impl<T: Ord> Extend<T> for BoundedPriorityStore<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.elements.reserve(iter.size_hint().0);

        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for BoundedPriorityStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new_from(iter)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BoundedPriorityStore<T> {
    fn from(value: [T; N]) -> Self {
        Self::new_from(value)
    }
}

impl<T: Ord> From<Vec<T>> for BoundedPriorityStore<T> {
    fn from(value: Vec<T>) -> Self {
        Self::new_from(value)
    }
}

impl<T> From<BoundedPriorityStore<T>> for Vec<T> {
    fn from(value: BoundedPriorityStore<T>) -> Self {
        value.into_vec()
    }
}

impl<T> Default for BoundedPriorityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for BoundedPriorityStore<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for BoundedPriorityStore<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Borrow<[T]> for BoundedPriorityStore<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Debug> Debug for BoundedPriorityStore<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoundedPriorityStore")
            .field(&self.elements)
            .finish()
    }
}

impl<T: Debug> Display for BoundedPriorityStore<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
