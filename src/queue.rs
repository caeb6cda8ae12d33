//! A singly-linked FIFO queue. The head owns the chain and the queue keeps a non-owning pointer to
//! the tail so both ends are `O(1)`.
//!
//! # Examples
//!
//! ```
//! use classic_ds::queue::Queue;
//! use classic_ds::Error;
//!
//! let mut queue = Queue::new();
//! assert_eq!(queue.dequeue(), Err(Error::EmptyContainer));
//!
//! queue.enqueue('a');
//! queue.enqueue('b');
//!
//! assert_eq!(queue.peek(), Ok(&'a'));
//! assert_eq!(queue.dequeue(), Ok('a'));
//! assert_eq!(queue.dequeue(), Ok('b'));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::{Error, Result};

/// A possibly empty pointer to a node. `head` and every `next` own the node they point at, `tail`
/// doesn't.
type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    data: T,
    next: Link<T>,
}

/// A First In First Out queue.
pub struct Queue<T> {
    head: Link<T>,
    // Points at the last node owned through `head`. `None` exactly when `head` is.
    tail: Link<T>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.tail = None;
        let mut link = self.head.take();
        while let Some(node) = link {
            // SAFETY: Every node was allocated with `Box::new` in `enqueue` and is owned by
            // exactly one link. We took the head out of the queue and follow each `next` once so
            // nothing is freed twice.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            link = node.next;
        }
    }
}

impl<T> fmt::Debug for Queue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty queue.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Adds `t` to the back of the queue.
    pub fn enqueue(&mut self, t: T) {
        let node = Box::new(Node {
            data: t,
            next: None,
        });
        // `tail` and the owning link share this one pointer.
        let node = NonNull::from(Box::leak(node));

        match self.tail {
            // SAFETY: `tail` points at the last live node of this queue and `&mut self` means
            // nothing else references it.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        let Some(head) = self.head else {
            log::debug!("dequeue from an empty queue");
            return Err(Error::EmptyContainer);
        };

        // SAFETY: `head` was leaked in `enqueue` and is only owned by `self.head`, which is
        // overwritten below, so the node is freed exactly once.
        let Node { data, next } = *unsafe { Box::from_raw(head.as_ptr()) };
        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(data)
    }

    /// The element at the front of the queue.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        self.head
            // SAFETY: The head is a live node owned by this queue and `&self` keeps it alive for
            // the returned lifetime.
            .map(|head| unsafe { &(*head.as_ptr()).data })
            .ok_or_else(|| {
                log::debug!("peek at an empty queue");
                Error::EmptyContainer
            })
    }

    /// Checks whether an element equal to `t` is in the queue.
    pub fn contains(&self, t: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|data| data == t)
    }

    /// The number of elements in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the queue has no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            _queue: PhantomData,
        }
    }
}

/// Iterates over a [`Queue`] from front to back. Created by [`Queue::iter`].
pub struct Iter<'a, T> {
    next: Link<T>,
    _queue: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY: The iterator borrows the queue for `'a` so every node it reaches stays alive
        // and unmodified for that long.
        let node: &'a Node<T> = unsafe { &*node.as_ptr() };
        self.next = node.next;
        Some(&node.data)
    }
}
