use classic_ds::heap::BinaryHeap;
use classic_ds::order::MinFirst;

use std::cmp::Reverse;

quickcheck::quickcheck! {
    fn max_first_polls_descending(xs: Vec<i16>) -> bool {
        let heap: BinaryHeap<_> = xs.iter().copied().collect();
        let mut sorted = xs;
        sorted.sort_unstable_by_key(|x| Reverse(*x));

        heap.into_sorted_vec() == sorted
    }

    fn min_first_peeks_minimum(xs: Vec<i16>) -> bool {
        let heap: BinaryHeap<_, MinFirst> = xs.iter().copied().collect();

        heap.peek() == xs.iter().min() && heap.len() == xs.len()
    }

    fn contains_everything_inserted(xs: Vec<i16>) -> bool {
        let heap: BinaryHeap<_> = xs.iter().copied().collect();

        xs.iter().all(|x| heap.contains(x))
    }
}
