//! This crate exposes a handful of classic in-memory containers
//! mostly for educational purposes.
//!
//! ## Containers
//!
//! - [`Stack`][stack::Stack]: a singly-linked Last In First Out list.
//! - [`Queue`][queue::Queue]: a singly-linked First In First Out list.
//! - [`BinaryHeap`][heap::BinaryHeap]: an array-backed priority queue.
//! - [`BinarySearchTree`][tree::BinarySearchTree]: an unbalanced tree of unique, ordered elements.
//!
//! ## Binary Heap
//!
//! A Binary Heap is a complete binary tree stored in an array where the node at
//! index `i` has children at `2i + 1` and `2i + 2`. Its invariant is weaker than a
//! BST's: every node only has to have at least the priority of its children. That
//! is enough to keep the highest priority element at the root and to restore the
//! invariant in `O(lg N)` after an insert ("swim" the new element up) or after
//! taking the root ("sink" the element that replaced it down).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Searching takes `O(height)`. The tree here never rebalances so its height
//! depends entirely on insertion order: sorted input gives a height of `N`.
//!
//! ## Errors
//!
//! Operations that need an element to act on return [`Error::EmptyContainer`] when
//! there is none. `peek` on a [`BinaryHeap`][heap::BinaryHeap] or a
//! [`BinarySearchTree`][tree::BinarySearchTree] is the exception and returns an
//! `Option` instead, since it's mostly used to check for emptiness.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod heap;
pub mod order;
pub mod queue;
pub mod stack;
pub mod tree;

pub use error::{Error, Result};
