//! Random operation generators for the quicktests. [`Op`] drives keyed containers
//! and [`LinearOp`] drives the ones that only take from an end: heaps, stacks and queues.

use quickcheck::{Arbitrary, Gen};

/// Keyed operations for containers that can add and remove any element,
/// i.e. the binary search tree, in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Add the T to the data structure
    Insert(T),
    /// Remove the T from the data structure
    Remove(T),
    /// Compare iterators
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}

/// Operations on containers that only add at one end and take from one end:
/// heaps, stacks and queues.
#[derive(Copy, Clone, Debug)]
pub(crate) enum LinearOp<T> {
    /// Add the T to the container
    Push(T),
    /// Take whatever the container hands out next
    Pop,
}

impl<T> Arbitrary for LinearOp<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        // Lean towards pushes so the containers actually grow.
        match g.choose(&[0, 0, 1]).unwrap() {
            0 => LinearOp::Push(T::arbitrary(g)),
            1 => LinearOp::Pop,
            _ => unreachable!(),
        }
    }
}
