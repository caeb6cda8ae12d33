//! Priority orderings for [`BinaryHeap`][crate::heap::BinaryHeap].
//!
//! A [`Priority`] is a three-way comparison where [`Ordering::Greater`] means "the left element
//! should be closer to the root". Closures work too:
//!
//! ```
//! use classic_ds::heap::BinaryHeap;
//!
//! // Longest string first.
//! let mut heap = BinaryHeap::with_order(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! heap.insert("ab");
//! heap.insert("abcd");
//! heap.insert("a");
//!
//! assert_eq!(heap.poll(), Ok("abcd"));
//! ```

use std::cmp::Ordering;

/// Decides which of two elements has the higher priority.
pub trait Priority<T> {
    /// Returns `Greater` when `a` has a higher priority than `b`, `Less` when it has a lower one
    /// and `Equal` otherwise. This must be a total order.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The largest element (by [`Ord`]) has the highest priority. This is a max-heap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaxFirst;

/// The smallest element (by [`Ord`]) has the highest priority. This is a min-heap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord> Priority<T> for MaxFirst {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: Ord> Priority<T> for MinFirst {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T, F> Priority<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
