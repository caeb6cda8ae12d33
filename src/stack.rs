//! A singly-linked LIFO stack. Each node owns the node pushed before it.
//!
//! # Examples
//!
//! ```
//! use classic_ds::stack::Stack;
//! use classic_ds::Error;
//!
//! let mut stack = Stack::new();
//! assert_eq!(stack.pop(), Err(Error::EmptyContainer));
//!
//! stack.push('a');
//! stack.push('b');
//!
//! assert_eq!(stack.peek(), Ok(&'b'));
//! assert_eq!(stack.pop(), Ok('b'));
//! assert_eq!(stack.pop(), Ok('a'));
//! ```

use std::fmt;

use crate::{Error, Result};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    data: T,
    below: Link<T>,
}

/// A Last In First Out stack.
pub struct Stack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.below.take();
        }
    }
}

impl<T> fmt::Debug for Stack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty stack.
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Puts `t` on top of the stack.
    pub fn push(&mut self, t: T) {
        let below = self.top.take();
        self.top = Some(Box::new(Node { data: t, below }));
        self.len += 1;
    }

    /// Removes and returns the element on top of the stack.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        let Some(node) = self.top.take() else {
            log::debug!("pop from an empty stack");
            return Err(Error::EmptyContainer);
        };

        let Node { data, below } = *node;
        self.top = below;
        self.len -= 1;
        Ok(data)
    }

    /// The element on top of the stack.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when the stack is empty.
    pub fn peek(&self) -> Result<&T> {
        self.top.as_deref().map(|node| &node.data).ok_or_else(|| {
            log::debug!("peek at an empty stack");
            Error::EmptyContainer
        })
    }

    /// Checks whether an element equal to `t` is on the stack.
    pub fn contains(&self, t: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|data| data == t)
    }

    /// The number of elements on the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the stack has no elements.
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
        }
    }
}

/// Iterates over a [`Stack`] from top to bottom. Created by [`Stack::iter`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.below.as_deref();
        Some(&node.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_in_first_out() {
        let mut stack = Stack::new();
        for x in ["a", "b", "c"] {
            stack.push(x);
        }

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Ok("c"));
        assert_eq!(stack.pop(), Ok("b"));
        assert_eq!(stack.pop(), Ok("a"));
        assert_eq!(stack.pop(), Err(Error::EmptyContainer));
    }

    #[test]
    fn single_element() {
        let mut stack = Stack::new();
        stack.push(1);

        assert_eq!(stack.peek(), Ok(&1));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.peek(), Err(Error::EmptyContainer));
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn contains_and_debug() {
        let mut stack = Stack::new();
        for x in 1..=3 {
            stack.push(x);
        }

        assert!(stack.contains(&1));
        assert!(!stack.contains(&4));
        assert_eq!(format!("{:?}", stack), "[3, 2, 1]");
    }

    #[test]
    fn long_stack_drops() {
        let mut stack = Stack::new();
        for x in 0..1_000_000 {
            stack.push(x);
        }
    }
}
