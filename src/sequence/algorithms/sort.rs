//! In-place stable sorting over the node ring.
//!
//! The sort never moves element values: nodes are relocated by rewriting
//! their links, so large elements are never copied. Every relocation
//! keeps the ring closed, which means a comparison callback that panics
//! leaves the sequence valid (though only partially sorted).

use crate::sequence::{couple, LinkedSequence, Node};
use std::ptr::NonNull;

/// Below this range length the recursion bottoms out into an insertion
/// sort, which needs no midpoint scan.
const INSERTION_SORT_THRESHOLD: usize = 8;

/// Read the element of a node. Callers only pass element nodes, never
/// the sentinel.
unsafe fn element_of<'a, T>(node: NonNull<Node<T>>) -> &'a T {
    &node.as_ref().element
}

pub(crate) fn merge_sort<T, F>(seq: &mut LinkedSequence<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if seq.len() < 2 {
        return;
    }
    let (start, end) = (seq.head_node(), seq.end_node());
    if seq.len() <= INSERTION_SORT_THRESHOLD {
        unsafe { insertion_sort(start, end, &mut less) };
    } else {
        unsafe { sort_range(start, end, &mut less) };
    }
}

/// Find the midpoint of `start..end` by walking two steps for every one,
/// returning the middle node and the total range length.
unsafe fn split_middle<T>(
    mut walker: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
) -> (NonNull<Node<T>>, usize) {
    let mut mid = walker;
    let mut len = 0;
    while walker != end {
        len += 1;
        walker = walker.as_ref().next;
        if walker != end {
            len += 1;
            walker = walker.as_ref().next;
            mid = mid.as_ref().next;
        }
    }
    (mid, len)
}

/// Sort `start..end` and return the first node of the sorted range (the
/// range boundaries move as nodes are relocated).
unsafe fn sort_range<T, F>(
    mut start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    let (mut mid, len) = split_middle(start, end);
    if len <= INSERTION_SORT_THRESHOLD {
        return insertion_sort(start, end, less);
    }

    if start != mid && start.as_ref().next != mid {
        start = sort_range(start, mid, less);
    }
    if mid != end && mid.as_ref().next != end {
        mid = sort_range(mid, end, less);
    }

    if start != mid && mid != end {
        start = merge_halves(start, mid, end, less);
    }
    start
}

/// Merge the two sorted halves `start..mid` and `mid..end` in place and
/// return the first node of the merged range.
unsafe fn merge_halves<T, F>(
    mut start: NonNull<Node<T>>,
    mid: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    // `start..mid` is the merged half, `mid..end` the pending one. Nodes
    // of the pending half move into the merged half as maximal runs.
    let (mut merged, merged_back, mut pending) = (start, mid.as_ref().prev, mid);
    // Once the back of the merged half no longer exceeds the pending
    // front, the whole range is already in order.
    while pending != end && less(element_of(pending), element_of(merged_back)) {
        // Walk `merged` to the insertion point for the pending front.
        while merged != pending && !less(element_of(pending), element_of(merged)) {
            merged = merged.as_ref().next;
        }
        if merged == pending {
            break;
        }

        // Grow the run `pending..run_end` of nodes that all sort before
        // `*merged`; relocating them as one block keeps their order.
        let mut run_end = pending.as_ref().next;
        while run_end != end && less(element_of(run_end), element_of(merged)) {
            run_end = run_end.as_ref().next;
        }
        if merged == start {
            start = pending;
        }
        relocate_run(pending, run_end.as_ref().prev, merged);
        pending = run_end;
    }
    start
}

/// Sort the short range `start..end` by relocating each out-of-order
/// node to its place within the already-sorted prefix. Returns the first
/// node of the sorted range.
unsafe fn insertion_sort<T, F>(
    mut start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    let (mut sorted_back, mut unsorted) = (start, start.as_ref().next);
    loop {
        // Nodes already in order just extend the sorted prefix.
        while unsorted != end && !less(element_of(unsorted), element_of(sorted_back)) {
            sorted_back = unsorted;
            unsorted = unsorted.as_ref().next;
        }
        if unsorted == end {
            break;
        }
        // Walk the prefix to the insertion point. Using `!less` keeps
        // the sort stable: equal elements stay behind the ones already
        // placed.
        let mut place = start;
        while place != unsorted && !less(element_of(unsorted), element_of(place)) {
            place = place.as_ref().next;
        }
        if place == start {
            start = unsorted;
        }
        let next = unsorted.as_ref().next;
        relocate_node(std::mem::replace(&mut unsorted, next), place);
    }
    start
}

unsafe fn relocate_node<T>(from: NonNull<Node<T>>, to: NonNull<Node<T>>) {
    relocate_run(from, from, to);
}

/// Move the closed run `front..=back` directly before `to`. Three
/// re-couplings; the ring is closed again after each call.
unsafe fn relocate_run<T>(
    front: NonNull<Node<T>>,
    back: NonNull<Node<T>>,
    to: NonNull<Node<T>>,
) {
    couple(front.as_ref().prev, back.as_ref().next);
    couple(to.as_ref().prev, front);
    couple(back, to);
}

#[cfg(test)]
mod tests {
    use crate::LinkedSequence;
    use rand::Rng;
    use std::iter::FromIterator;

    #[test]
    fn sorts_ascending() {
        let mut seq = LinkedSequence::from([5, 2, 4, 3, 1]);
        seq.sort();
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5]);
        seq.assert_ring_consistent();

        let mut long = LinkedSequence::from_iter((0..50).rev());
        long.sort();
        assert_eq!(long.to_vec(), (0..50).collect::<Vec<_>>());
        long.assert_ring_consistent();
    }

    #[test]
    fn sort_is_idempotent() {
        let mut seq = LinkedSequence::from([3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]);
        seq.sort();
        let once = seq.to_vec();
        for pair in once.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        seq.sort();
        assert_eq!(seq.to_vec(), once);
    }

    #[test]
    fn sort_trivial_sequences() {
        let mut empty = LinkedSequence::<i32>::new();
        empty.sort();
        assert!(empty.is_empty());

        let mut single = LinkedSequence::from([1]);
        single.sort();
        assert_eq!(single.to_vec(), vec![1]);

        let mut pair = LinkedSequence::from([2, 1]);
        pair.sort();
        assert_eq!(pair.to_vec(), vec![1, 2]);
    }

    #[test]
    fn sort_is_stable() {
        // key with a distinguishing tag: equal keys must keep their
        // original relative order
        let tagged: Vec<(u8, usize)> = [3, 1, 2, 3, 1, 2, 1, 3, 2, 1, 3, 2, 1]
            .iter()
            .enumerate()
            .map(|(tag, &key)| (key, tag))
            .collect();
        let mut seq = LinkedSequence::from_iter(tagged.iter().cloned());
        seq.sort_by_key(|&(key, _)| key);

        let mut expected = tagged;
        expected.sort_by_key(|&(key, _)| key);
        assert_eq!(seq.to_vec(), expected);
    }

    #[test]
    fn sort_by_reverses_order() {
        let mut seq = LinkedSequence::from([5, 4, 1, 3, 2]);
        seq.sort_by(|a, b| b.cmp(a));
        assert_eq!(seq.to_vec(), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn sort_matches_vec_sort_on_random_input() {
        let mut rng = rand::thread_rng();
        for len in [0usize, 1, 2, 7, 8, 9, 40, 200] {
            let values: Vec<i32> = (0..len).map(|_| rng.gen_range(-20..20)).collect();
            let mut seq = LinkedSequence::from_iter(values.iter().cloned());
            seq.sort();
            let mut expected = values;
            expected.sort();
            assert_eq!(seq.to_vec(), expected);
            seq.assert_ring_consistent();
        }
    }

    #[test]
    fn sorted_merge_after_sort() {
        let mut rng = rand::thread_rng();
        let left: Vec<i32> = (0..60).map(|_| rng.gen_range(0..100)).collect();
        let right: Vec<i32> = (0..40).map(|_| rng.gen_range(0..100)).collect();

        let mut a = LinkedSequence::from_iter(left.iter().cloned());
        let mut b = LinkedSequence::from_iter(right.iter().cloned());
        a.sort();
        b.sort();
        a.merge(&mut b);

        let mut expected: Vec<i32> = left.into_iter().chain(right).collect();
        expected.sort();
        assert_eq!(a.to_vec(), expected);
        assert!(b.is_empty());
        a.assert_ring_consistent();
    }
}
