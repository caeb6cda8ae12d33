use classic_ds::tree::BinarySearchTree;
use classic_ds::Error;

use std::collections::BTreeSet;

/// Builds a tree from `xs`, skipping duplicates, and returns the unique keys alongside it.
fn build(xs: &[i8]) -> (BinarySearchTree<i8>, BTreeSet<i8>) {
    let mut tree = BinarySearchTree::new();
    let mut added = BTreeSet::new();
    for x in xs {
        let expected = if added.insert(*x) {
            Ok(())
        } else {
            Err(Error::DuplicateElement)
        };
        assert_eq!(tree.add(*x), expected);
    }

    (tree, added)
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let (tree, _) = build(&xs);

        xs.iter().all(|x| tree.contains(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let (tree, added) = build(&xs);
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }

    fn in_order_is_sorted(xs: Vec<i8>) -> bool {
        let (tree, added) = build(&xs);

        tree.len() == added.len() && tree.iter().eq(added.iter())
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let (mut tree, mut still_present) = build(&xs);
        for delete in &deletes {
            let expected = if still_present.is_empty() {
                Err(Error::EmptyContainer)
            } else if still_present.remove(delete) {
                Ok(*delete)
            } else {
                Err(Error::ElementNotFound)
            };
            if tree.remove(delete) != expected || tree.contains(delete) {
                return false;
            }
        }

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && tree.iter().eq(still_present.iter())
    }
}
