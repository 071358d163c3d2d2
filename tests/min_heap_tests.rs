use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use village_paths::data_structures::MinHeap;
use village_paths::Error;

#[test]
fn test_pop_returns_entries_in_key_order() {
    let mut heap: MinHeap<i32, &str> = MinHeap::new();
    heap.push(5, "five");
    heap.push(1, "one");
    heap.push(3, "three");
    heap.push(4, "four");
    heap.push(2, "two");

    let mut popped = Vec::new();
    while !heap.is_empty() {
        popped.push(heap.pop().unwrap());
    }

    assert_eq!(
        popped,
        vec![(1, "one"), (2, "two"), (3, "three"), (4, "four"), (5, "five")]
    );
}

#[test]
fn test_pop_from_empty_heap_fails() {
    let mut heap: MinHeap<i32, usize> = MinHeap::new();
    assert!(matches!(heap.pop(), Err(Error::EmptyQueue)));

    heap.push(1, 0);
    heap.pop().unwrap();
    assert!(matches!(heap.pop(), Err(Error::EmptyQueue)));
}

#[test]
fn test_len_and_peek() {
    let mut heap: MinHeap<i32, char> = MinHeap::with_capacity(4);
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert!(heap.peek().is_none());

    heap.push(7, 'a');
    heap.push(2, 'b');
    heap.push(9, 'c');

    assert_eq!(heap.len(), 3);
    assert_eq!(heap.peek(), Some((2, &'b')));
    // Peek does not remove
    assert_eq!(heap.len(), 3);

    heap.clear();
    assert!(heap.is_empty());
}

#[test]
fn test_interleaved_push_and_pop() {
    let mut heap: MinHeap<i32, i32> = MinHeap::new();
    heap.push(10, 10);
    heap.push(4, 4);

    assert_eq!(heap.pop().unwrap(), (4, 4));

    heap.push(7, 7);
    heap.push(1, 1);

    assert_eq!(heap.pop().unwrap(), (1, 1));
    assert_eq!(heap.pop().unwrap(), (7, 7));
    assert_eq!(heap.pop().unwrap(), (10, 10));
    assert!(heap.is_empty());
}

#[test]
fn test_equal_keys_all_surface() {
    // Entries with equal keys come out in an unspecified order, but every
    // payload must surface exactly once with its own key.
    let mut heap: MinHeap<i32, usize> = MinHeap::new();
    for payload in 0..6 {
        heap.push(1, payload);
    }
    heap.push(0, 100);
    heap.push(2, 200);

    assert_eq!(heap.pop().unwrap(), (0, 100));

    let mut middle: Vec<usize> = Vec::new();
    for _ in 0..6 {
        let (key, payload) = heap.pop().unwrap();
        assert_eq!(key, 1);
        middle.push(payload);
    }
    middle.sort_unstable();
    assert_eq!(middle, vec![0, 1, 2, 3, 4, 5]);

    assert_eq!(heap.pop().unwrap(), (2, 200));
}

#[test]
fn test_duplicate_keys_for_same_payload() {
    // The lazy-deletion pattern pushes fresh entries instead of decreasing
    // keys, so the same payload may sit in the heap several times.
    let mut heap: MinHeap<OrderedFloat<f64>, usize> = MinHeap::new();
    heap.push(OrderedFloat(5.0), 3);
    heap.push(OrderedFloat(2.0), 3);
    heap.push(OrderedFloat(9.0), 3);

    assert_eq!(heap.pop().unwrap(), (OrderedFloat(2.0), 3));
    assert_eq!(heap.pop().unwrap(), (OrderedFloat(5.0), 3));
    assert_eq!(heap.pop().unwrap(), (OrderedFloat(9.0), 3));
}

#[test]
fn test_random_operations_pop_non_decreasing() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let mut heap: MinHeap<OrderedFloat<f64>, usize> = MinHeap::new();
        let mut pushed = 0usize;

        // Random interleaving of pushes and pops
        for step in 0..300 {
            if heap.is_empty() || rng.gen_bool(0.6) {
                heap.push(OrderedFloat(rng.gen_range(0.0..100.0)), step);
                pushed += 1;
            } else {
                heap.pop().unwrap();
                pushed -= 1;
            }
            assert_eq!(heap.len(), pushed);
        }

        // Draining the heap must yield non-decreasing keys
        let mut previous = OrderedFloat(f64::NEG_INFINITY);
        while !heap.is_empty() {
            let (key, _) = heap.pop().unwrap();
            assert!(key >= previous, "heap popped {} after {}", key, previous);
            previous = key;
        }
    }
}
