//! An array-backed binary heap. The element with the highest [`Priority`] is always at the root
//! (index `0`) and every parent has at least the priority of its children.
//!
//! # Examples
//!
//! ```
//! use classic_ds::heap::BinaryHeap;
//! use classic_ds::Error;
//!
//! let mut heap = BinaryHeap::new();
//!
//! // Nothing in here yet. Peeking is fine, polling is not.
//! assert_eq!(heap.peek(), None);
//! assert_eq!(heap.poll(), Err(Error::EmptyContainer));
//!
//! for x in [5, 4, 3, 2, 1, 10] {
//!     heap.insert(x);
//! }
//! assert_eq!(heap.peek(), Some(&10));
//!
//! // Polling hands elements back highest priority first.
//! assert_eq!(heap.poll(), Ok(10));
//! assert_eq!(heap.poll(), Ok(5));
//! assert_eq!(heap.len(), 4);
//! ```
//!
//! A min-heap just uses a different [`Priority`]:
//!
//! ```
//! use classic_ds::heap::BinaryHeap;
//! use classic_ds::order::MinFirst;
//!
//! let mut heap: BinaryHeap<_, MinFirst> = [3, 1, 2].into_iter().collect();
//! assert_eq!(heap.poll(), Ok(1));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::order::{MaxFirst, Priority};
use crate::{Error, Result};

/// A binary heap ordered by `P`, a max-heap by default.
pub struct BinaryHeap<T, P = MaxFirst> {
    // The logical size of the heap is `items.len()`; there are no dead slots.
    items: Vec<T>,
    order: P,
}

impl<T> BinaryHeap<T> {
    /// Generates a new, empty max-heap.
    pub fn new() -> Self {
        Self::with_order(MaxFirst)
    }

    /// Generates a new, empty max-heap with room for `capacity` elements before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, MaxFirst)
    }
}

impl<T, P> Default for BinaryHeap<T, P>
where
    P: Default,
{
    fn default() -> Self {
        Self::with_order(P::default())
    }
}

impl<T, P> BinaryHeap<T, P> {
    /// Generates a new, empty heap that orders its elements with `order`.
    pub fn with_order(order: P) -> Self {
        Self {
            items: Vec::new(),
            order,
        }
    }

    /// Generates a new, empty heap that orders its elements with `order` and has room for
    /// `capacity` elements before reallocating.
    pub fn with_capacity_and_order(capacity: usize, order: P) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Returns the element with the highest priority without removing it, or `None` when the
    /// heap is empty.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Checks whether an element equal to `t` is in the heap. Siblings aren't ordered relative to
    /// each other so this is a linear scan.
    pub fn contains(&self, t: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.iter().any(|item| item == t)
    }

    /// The number of elements in the heap.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the heap has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every element from the heap.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over the elements in their storage order. Only the first element is guaranteed
    /// to be in any particular position.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T, P> BinaryHeap<T, P>
where
    P: Priority<T>,
{
    /// Adds an element to the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::heap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::new();
    /// heap.insert(1);
    /// heap.insert(7);
    ///
    /// assert_eq!(heap.peek(), Some(&7));
    /// ```
    pub fn insert(&mut self, t: T) {
        self.items.push(t);
        self.swim(self.items.len() - 1);
    }

    /// Removes and returns the element with the highest priority.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when there is nothing to remove.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::heap::BinaryHeap;
    /// use classic_ds::Error;
    ///
    /// let mut heap = BinaryHeap::new();
    /// heap.insert(1);
    ///
    /// assert_eq!(heap.poll(), Ok(1));
    /// assert_eq!(heap.poll(), Err(Error::EmptyContainer));
    /// ```
    pub fn poll(&mut self) -> Result<T> {
        if self.items.is_empty() {
            log::debug!("poll on an empty heap");
            return Err(Error::EmptyContainer);
        }

        // Moves the last element into the root slot.
        let root = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sink(0);
        }

        Ok(root)
    }

    /// Consumes the heap and returns its elements from highest to lowest priority.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Ok(t) = self.poll() {
            sorted.push(t);
        }

        sorted
    }

    /// Whether `parent` must give way to `child`, that is `child` has a strictly higher priority.
    fn yields_to(&self, parent: usize, child: usize) -> bool {
        self.order.compare(&self.items[parent], &self.items[child]) == Ordering::Less
    }

    /// Moves the element at `index` towards the root until its parent has at least its priority.
    fn swim(&mut self, mut index: usize) {
        let mut steps = 0;
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.yields_to(parent, index) {
                break;
            }

            self.items.swap(parent, index);
            index = parent;
            steps += 1;
        }

        log::trace!("swim settled at index {} after {} swaps", index, steps);
    }

    /// Moves the element at `index` towards the leaves until it has at least the priority of both
    /// its children.
    ///
    /// When both children outrank the parent, the one with the higher priority is promoted and
    /// ties go to the right child. This keeps the order of equal-priority polls deterministic.
    fn sink(&mut self, mut index: usize) {
        let len = self.items.len();
        let mut steps = 0;
        loop {
            let left = 2 * index + 1;
            let right = left + 1;

            let left_violates = left < len && self.yields_to(index, left);
            let right_violates = right < len && self.yields_to(index, right);

            let child = match (left_violates, right_violates) {
                (true, true) => {
                    match self.order.compare(&self.items[left], &self.items[right]) {
                        Ordering::Greater => left,
                        Ordering::Equal | Ordering::Less => right,
                    }
                }
                (true, false) => left,
                (false, true) => right,
                (false, false) => break,
            };

            self.items.swap(index, child);
            index = child;
            steps += 1;
        }

        log::trace!("sink settled at index {} after {} swaps", index, steps);
    }
}

impl<T, P> Clone for BinaryHeap<T, P>
where
    T: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            order: self.order.clone(),
        }
    }
}

impl<T, P> fmt::Debug for BinaryHeap<T, P>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("items", &self.items)
            .field("len", &self.items.len())
            .finish()
    }
}

impl<T, P> Extend<T> for BinaryHeap<T, P>
where
    P: Priority<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for t in iter {
            self.insert(t);
        }
    }
}

impl<T, P> FromIterator<T> for BinaryHeap<T, P>
where
    P: Priority<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}
