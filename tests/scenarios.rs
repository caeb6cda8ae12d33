//! End to end walks through each container's documented behavior.

use classic_ds::heap::BinaryHeap;
use classic_ds::queue::Queue;
use classic_ds::stack::Stack;
use classic_ds::tree::BinarySearchTree;
use classic_ds::Error;

#[test]
fn heap_peek_then_poll_everything() {
    let mut heap = BinaryHeap::new();
    for x in [5, 4, 3, 2, 1, 10] {
        heap.insert(x);
    }
    assert_eq!(heap.peek(), Some(&10));

    let polled: Vec<_> = std::iter::from_fn(|| heap.poll().ok()).collect();
    assert_eq!(polled, vec![10, 5, 4, 3, 2, 1]);
}

#[test]
fn empty_heap_peeks_but_wont_poll() {
    let mut heap = BinaryHeap::<u8>::new();

    assert_eq!(heap.poll(), Err(Error::EmptyContainer));
    assert_eq!(heap.peek(), None);
}

#[test]
fn bst_remove_node_with_two_children() {
    let mut tree = BinarySearchTree::new();
    for x in [50, 25, 21, 27, 24, 23, 18, 19, 20, 15] {
        tree.add(x).unwrap();
    }
    assert_eq!(tree.len(), 10);

    assert_eq!(tree.remove(&25), Ok(25));
    assert_eq!(tree.len(), 9);
    assert!(!tree.contains(&25));

    let in_order: Vec<_> = tree.iter().copied().collect();
    assert_eq!(in_order, vec![15, 18, 19, 20, 21, 23, 24, 27, 50]);
}

#[test]
fn bst_rejects_duplicates() {
    let mut tree = BinarySearchTree::new();

    assert_eq!(tree.add(25), Ok(()));
    assert_eq!(tree.add(25), Err(Error::DuplicateElement));
    assert_eq!(tree.len(), 1);
}

#[test]
fn bst_round_trip_in_any_order() {
    let keys = [8, 3, 10, 1, 6, 14, 4, 7, 13];
    let mut tree = BinarySearchTree::new();
    for key in keys {
        tree.add(key).unwrap();
    }

    for key in [6, 8, 1, 14, 3, 13, 10, 7, 4] {
        assert_eq!(tree.remove(&key), Ok(key));
        assert!(!tree.contains(&key));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.remove(&8), Err(Error::EmptyContainer));
}

#[test]
fn single_element_containers_empty_out() {
    let mut heap = BinaryHeap::new();
    heap.insert(1);
    assert_eq!(heap.poll(), Ok(1));
    assert_eq!(heap.peek(), None);

    let mut tree = BinarySearchTree::new();
    tree.add(1).unwrap();
    assert_eq!(tree.remove(&1), Ok(1));
    assert_eq!(tree.peek(), None);

    let mut stack = Stack::new();
    stack.push(1);
    assert_eq!(stack.pop(), Ok(1));
    assert_eq!(stack.peek(), Err(Error::EmptyContainer));

    let mut queue = Queue::new();
    queue.enqueue(1);
    assert_eq!(queue.dequeue(), Ok(1));
    assert_eq!(queue.peek(), Err(Error::EmptyContainer));
}

#[test]
fn stack_and_queue_order() {
    let mut stack = Stack::new();
    let mut queue = Queue::new();
    for x in ['a', 'b', 'c'] {
        stack.push(x);
        queue.enqueue(x);
    }

    let popped: Vec<_> = std::iter::from_fn(|| stack.pop().ok()).collect();
    let dequeued: Vec<_> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
    assert_eq!(popped, vec!['c', 'b', 'a']);
    assert_eq!(dequeued, vec!['a', 'b', 'c']);
}
