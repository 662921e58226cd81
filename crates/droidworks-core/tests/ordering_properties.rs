//! Ordering laws for the stack, queue, merge sorter and category router.

use droidworks_core::{merge_sort, CategoryRouter, Queue, Stack};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Stack / Queue
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn stack_pops_in_reverse_push_order(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut stack = Stack::new();
        for v in &values {
            stack.push(*v);
        }
        prop_assert_eq!(stack.len(), values.len());

        let mut popped = Vec::new();
        while let Some(v) = stack.pop() {
            popped.push(v);
        }
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(popped, expected);

        prop_assert!(stack.is_empty());
        prop_assert_eq!(stack.pop(), None);
    }
}

proptest! {
    #[test]
    fn queue_dequeues_in_enqueue_order(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut queue = Queue::new();
        for v in &values {
            queue.enqueue(*v);
        }
        prop_assert_eq!(queue.len(), values.len());

        let mut dequeued = Vec::new();
        while let Some(v) = queue.dequeue() {
            dequeued.push(v);
        }
        prop_assert_eq!(dequeued, values);

        prop_assert!(queue.is_empty());
        prop_assert_eq!(queue.dequeue(), None);
    }
}

proptest! {
    /// `true` enqueues the next value, `false` dequeues; the queue must agree
    /// with a `VecDeque` at every step, including across drain-to-empty.
    #[test]
    fn queue_matches_vecdeque_under_interleaving(ops in prop::collection::vec(any::<bool>(), 0..300)) {
        let mut queue = Queue::new();
        let mut model = std::collections::VecDeque::new();

        for (step, enqueue) in ops.into_iter().enumerate() {
            if enqueue {
                queue.enqueue(step);
                model.push_back(step);
            } else {
                prop_assert_eq!(queue.dequeue(), model.pop_front());
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.peek(), model.front());
        }
    }
}

// ---------------------------------------------------------------------------
// Merge sort
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn merge_sort_orders_and_permutes(keys in prop::collection::vec(0u8..16, 0..300)) {
        // Tag each key with its input position to observe stability.
        let mut items: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
        merge_sort(&mut items, |a, b| a.0 < b.0);

        for pair in items.windows(2) {
            prop_assert!(pair[0].0 <= pair[1].0);
            if pair[0].0 == pair[1].0 {
                prop_assert!(pair[0].1 < pair[1].1, "equal keys swapped: {:?}", pair);
            }
        }

        let mut positions: Vec<usize> = items.iter().map(|i| i.1).collect();
        positions.sort_unstable();
        prop_assert_eq!(positions, (0..keys.len()).collect::<Vec<_>>());
    }
}

proptest! {
    #[test]
    fn merge_sort_matches_std_stable_sort(keys in prop::collection::vec(any::<i16>(), 0..300)) {
        let tagged: Vec<(i16, usize)> = keys.into_iter().zip(0..).collect();

        let mut ours = tagged.clone();
        merge_sort(&mut ours, |a, b| a.0 < b.0);

        let mut std_sorted = tagged;
        std_sorted.sort_by_key(|t| t.0);

        prop_assert_eq!(ours, std_sorted);
    }
}

// ---------------------------------------------------------------------------
// Category router
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn bucketing_groups_by_rank_and_keeps_order(cats in prop::collection::vec(0u8..4, 0..200)) {
        // Rank order deliberately differs from numeric order.
        let ranking = [2u8, 0, 3, 1];
        let router = CategoryRouter::new(ranking);
        let rank = |c: u8| ranking.iter().position(|r| *r == c).unwrap();

        let mut items: Vec<(u8, usize)> = cats.iter().copied().zip(0..).collect();
        router.bucket_by(&mut items, |item| item.0).unwrap();

        prop_assert_eq!(items.len(), cats.len());
        for pair in items.windows(2) {
            let (a, b) = (rank(pair[0].0), rank(pair[1].0));
            prop_assert!(a <= b, "category out of rank order: {:?}", pair);
            if a == b {
                prop_assert!(pair[0].1 < pair[1].1, "input order lost: {:?}", pair);
            }
        }

        let mut positions: Vec<usize> = items.iter().map(|i| i.1).collect();
        positions.sort_unstable();
        prop_assert_eq!(positions, (0..cats.len()).collect::<Vec<_>>());
    }
}

proptest! {
    #[test]
    fn bucketing_rejects_unranked_without_mutation(
        cats in prop::collection::vec(0u8..3, 0..50),
        insert_at in any::<prop::sample::Index>(),
    ) {
        let router = CategoryRouter::new([0u8, 1, 2]);
        let mut items = cats.clone();
        items.insert(insert_at.index(items.len() + 1), 9);
        let before = items.clone();

        prop_assert!(router.bucket_by(&mut items, |c| *c).is_err());
        prop_assert_eq!(items, before);
    }
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_stack_push_pop() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
}

#[test]
fn scenario_queue_strings() {
    let mut queue = Queue::new();
    queue.enqueue("a");
    queue.enqueue("b");
    queue.enqueue("c");
    assert_eq!(queue.dequeue(), Some("a"));
    assert_eq!(queue.dequeue(), Some("b"));
    assert_eq!(queue.dequeue(), Some("c"));
}

#[test]
fn scenario_sort_keeps_equal_keys_in_order() {
    let mut items = vec![(5, "5a"), (3, "3"), (5, "5b"), (1, "1")];
    merge_sort(&mut items, |a, b| a.0 < b.0);
    let labels: Vec<&str> = items.iter().map(|i| i.1).collect();
    assert_eq!(labels, vec!["1", "3", "5a", "5b"]);
}

#[test]
fn scenario_bucket_two_categories() {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Cat {
        Cat1,
        Cat2,
    }

    let router = CategoryRouter::new([Cat::Cat1, Cat::Cat2]);
    let mut items = vec![(Cat::Cat2, 0), (Cat::Cat1, 1), (Cat::Cat2, 2), (Cat::Cat1, 3)];
    router.bucket_by(&mut items, |i| i.0).unwrap();
    assert_eq!(
        items,
        vec![(Cat::Cat1, 1), (Cat::Cat1, 3), (Cat::Cat2, 0), (Cat::Cat2, 2)]
    );
}
