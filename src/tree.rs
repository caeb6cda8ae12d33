//! An unbalanced Binary Search Tree whose nodes keep a pointer to their parent. Each node is owned
//! by its parent (or the tree, for the root) and the parent pointer is only used to splice nodes
//! out during removal.
//!
//! The tree never rebalances, so inserting sorted data gives a tree shaped like a linked list.
//! Every walk over the tree is iterative so that shape is slow but never overflows the stack.
//!
//! # Examples
//!
//! ```
//! use classic_ds::tree::BinarySearchTree;
//! use classic_ds::Error;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.peek(), None);
//!
//! tree.add(2).unwrap();
//! tree.add(1).unwrap();
//! assert!(tree.contains(&1));
//!
//! // Keys are unique.
//! assert_eq!(tree.add(1), Err(Error::DuplicateElement));
//!
//! // Removing a key returns it.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Err(Error::ElementNotFound));
//! assert_eq!(tree.len(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::{Error, Result};

/// An unbalanced Binary Search Tree of unique elements.
pub struct BinarySearchTree<T> {
    // This is a `Link` instead of an `Option<Node>` so that it can be moved around with the tree
    // without the children's parent pointers breaking.
    root: Link<T>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        let mut pending: Vec<NonNull<Node<T>>> = self.root.take().0.into_iter().collect();
        while let Some(node) = pending.pop() {
            // SAFETY: Every node was allocated with `Box::new` in `Node::new_link` and is owned by
            // exactly one link. We took the root out of the tree and each child link is only
            // followed once, from its owner, so nothing is freed twice.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            pending.extend(node.left.0);
            pending.extend(node.right.0);
        }
    }
}

impl<T> Clone for BinarySearchTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        let Some(root) = self.root() else {
            return tree;
        };
        tree.root = Node::new_link(root.data.clone(), Link::NONE);
        tree.len = self.len;

        // Pairs of an original node and its copy whose children still need copying.
        let mut pending: Vec<(&Node<T>, NonNull<Node<T>>)> = tree
            .root
            .0
            .map(|copy| (root, copy))
            .into_iter()
            .collect();
        while let Some((original, copy)) = pending.pop() {
            if let Some(left) = original.left() {
                let new_left = Node::new_link(left.data.clone(), Link(Some(copy)));
                // SAFETY: `copy` was just allocated by this clone and nothing else references it.
                unsafe { (*copy.as_ptr()).left = new_left };
                pending.extend(new_left.0.map(|new_left| (left, new_left)));
            }
            if let Some(right) = original.right() {
                let new_right = Node::new_link(right.data.clone(), Link(Some(copy)));
                // SAFETY: See above.
                unsafe { (*copy.as_ptr()).right = new_right };
                pending.extend(new_right.0.map(|new_right| (right, new_right)));
            }
        }

        tree
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generate a new, empty tree.
    pub fn new() -> Self {
        Self {
            root: Link::NONE,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// The element stored at the root of the tree, or `None` if the tree is empty.
    pub fn peek(&self) -> Option<&T> {
        self.root().map(|root| &root.data)
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The smallest element in the tree.
    pub fn first(&self) -> Option<&T> {
        self.root.0.map(|root| {
            // SAFETY: The descendant is a live node owned by this tree and `&self` keeps it
            // alive for the returned lifetime.
            unsafe { &(*leftmost_descendant(root).as_ptr()).data }
        })
    }

    /// The largest element in the tree.
    pub fn last(&self) -> Option<&T> {
        self.root.0.map(|root| {
            // SAFETY: See `first`.
            unsafe { &(*rightmost_descendant(root).as_ptr()).data }
        })
    }

    /// Iterates over the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// for x in [3, 1, 2] {
    ///     tree.add(x).unwrap();
    /// }
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            pending: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root());
        iter
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.node()
    }
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Adds an element to the tree as a new leaf.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateElement`] if an equal element is already in the tree. The tree is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::tree::BinarySearchTree;
    /// use classic_ds::Error;
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// assert_eq!(tree.add(25), Ok(()));
    /// assert_eq!(tree.add(25), Err(Error::DuplicateElement));
    /// ```
    pub fn add(&mut self, t: T) -> Result<()> {
        if self.contains(&t) {
            log::debug!("add of an element already in the tree");
            return Err(Error::DuplicateElement);
        }

        self.attach(t);
        Ok(())
    }

    /// Removes the element equal to `t` from the tree and returns it.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyContainer`] if the tree has no elements.
    /// - [`Error::ElementNotFound`] if no element equals `t`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::tree::BinarySearchTree;
    /// use classic_ds::Error;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.remove(&1), Err(Error::EmptyContainer));
    ///
    /// tree.add(1).unwrap();
    /// assert_eq!(tree.remove(&2), Err(Error::ElementNotFound));
    /// assert_eq!(tree.remove(&1), Ok(1));
    /// ```
    pub fn remove(&mut self, t: &T) -> Result<T> {
        if self.is_empty() {
            log::debug!("remove from an empty tree");
            return Err(Error::EmptyContainer);
        }
        let Some(target) = self.find(t).0 else {
            log::debug!("remove of an element not in the tree");
            return Err(Error::ElementNotFound);
        };

        // SAFETY: `target` and every node reached from it are live nodes owned by this tree and
        // `&mut self` means nothing else can reference them. Only raw pointers are held across
        // the splices below so no reference outlives a node it points into.
        let removed = unsafe {
            let Node {
                parent,
                left,
                right,
                ..
            } = *target.as_ptr();

            match (left.0, right.0) {
                (None, None) => {
                    log::trace!("removing a leaf");
                    self.replace_in_parent(parent, target, Link::NONE);
                    Box::from_raw(target.as_ptr()).data
                }
                (Some(_), None) | (None, Some(_)) => {
                    log::trace!("removing a node with one child");
                    let child = if left.0.is_some() { left } else { right };
                    self.replace_in_parent(parent, target, child);
                    Box::from_raw(target.as_ptr()).data
                }
                (Some(left), Some(_)) => {
                    log::trace!("removing a node with two children");
                    // The in-order predecessor has no right child so it can be spliced out like
                    // a node with at most one child. Its data then takes the target's place.
                    let predecessor = rightmost_descendant(left);
                    let Node {
                        parent: predecessor_parent,
                        left: predecessor_left,
                        ..
                    } = *predecessor.as_ptr();
                    self.replace_in_parent(predecessor_parent, predecessor, predecessor_left);

                    let predecessor = Box::from_raw(predecessor.as_ptr());
                    std::mem::replace(&mut (*target.as_ptr()).data, predecessor.data)
                }
            }
        };

        self.len -= 1;
        Ok(removed)
    }

    /// Checks whether an element equal to `t` is in the tree.
    pub fn contains(&self, t: &T) -> bool {
        self.find(t).0.is_some()
    }

    /// Walks down from the root to the node holding `t`, if there is one.
    fn find(&self, t: &T) -> Link<T> {
        let mut current = self.root;
        while let Some(node) = current.node() {
            match t.cmp(&node.data) {
                Ordering::Less => current = node.left,
                Ordering::Equal => return current,
                Ordering::Greater => current = node.right,
            }
        }

        Link::NONE
    }

    /// Attaches `t` as a new leaf. The caller must have checked `t` isn't in the tree already.
    fn attach(&mut self, t: T) {
        let Some(mut current) = self.root.0 else {
            self.root = Node::new_link(t, Link::NONE);
            self.len += 1;
            return;
        };

        loop {
            // SAFETY: `current` is a live node owned by this tree and `&mut self` means nothing
            // else references it.
            let node = unsafe { current.as_mut() };
            let slot = match t.cmp(&node.data) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => unreachable!("attach called with a duplicate element"),
            };
            match slot.0 {
                Some(child) => current = child,
                None => {
                    *slot = Node::new_link(t, Link(Some(current)));
                    break;
                }
            }
        }

        self.len += 1;
    }
}

impl<T> BinarySearchTree<T> {
    /// Points whichever of `parent`'s child links currently holds `old_child` at `new_child`
    /// instead. With no parent, `old_child` is the root and the root is replaced. If there is a
    /// `new_child` its parent pointer is updated too.
    ///
    /// # Safety
    ///
    /// `parent` and `new_child` must be empty or live nodes of this tree, `old_child` must be a
    /// child of `parent` (or the root) and nothing may hold a reference into any of them.
    unsafe fn replace_in_parent(
        &mut self,
        parent: Link<T>,
        old_child: NonNull<Node<T>>,
        new_child: Link<T>,
    ) {
        match parent.0 {
            None => self.root = new_child,
            Some(parent) => {
                let parent = &mut *parent.as_ptr();
                if parent.left.0 == Some(old_child) {
                    parent.left = new_child;
                } else {
                    parent.right = new_child;
                }
            }
        }

        if let Some(new_child) = new_child.0 {
            (*new_child.as_ptr()).parent = parent;
        }
    }
}

/// Follows left children from `node` to the smallest element of its subtree.
///
/// # Safety
///
/// `node` must be a live node and nothing may hold a mutable reference into its subtree.
unsafe fn leftmost_descendant<T>(mut node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    while let Some(left) = (*node.as_ptr()).left.0 {
        node = left;
    }
    node
}

/// Follows right children from `node` to the largest element of its subtree.
///
/// # Safety
///
/// See [`leftmost_descendant`].
unsafe fn rightmost_descendant<T>(mut node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    while let Some(right) = (*node.as_ptr()).right.0 {
        node = right;
    }
    node
}

/// A possibly empty pointer to a node. Whether the pointer owns the node depends on which field
/// it's stored in: `left`, `right` and the tree's `root` own, `parent` doesn't.
struct Link<T>(Option<NonNull<Node<T>>>);

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Link<T> {}

impl<T> Link<T> {
    const NONE: Self = Link(None);

    fn node(&self) -> Option<&Node<T>> {
        // SAFETY: If the pointer is not `None` then it is a valid `Node` owned by the same tree
        // as this link. The returned reference borrows the link, and through it the tree, so the
        // node can't be freed or mutated while it's alive.
        unsafe { self.0.as_ref().map(|ptr| ptr.as_ref()) }
    }

    fn take(&mut self) -> Self {
        Link(self.0.take())
    }
}

struct Node<T> {
    data: T,
    parent: Link<T>,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a new leaf and returns an owning link to it.
    fn new_link(data: T, parent: Link<T>) -> Link<T> {
        let node = Box::new(Node {
            data,
            parent,
            left: Link::NONE,
            right: Link::NONE,
        });
        Link(Some(NonNull::from(Box::leak(node))))
    }

    fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    fn right(&self) -> Option<&Self> {
        self.right.node()
    }
}

/// An in-order iterator over a [`BinarySearchTree`], created by [`BinarySearchTree::iter`].
pub struct Iter<'a, T> {
    pending: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.pending.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
