//! Stress tests that push the heap through large operation counts
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use std::cmp::Ordering;

use comparator_heap::{BinaryHeap, HeapError};

/// Small deterministic generator so the tests need no seed handling
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }
}

/// Test massive numbers of inserts and extractions
#[test]
fn test_massive_operations() {
    let mut heap = BinaryHeap::min_heap(0);

    for i in 0..10_000 {
        heap.insert(i);
    }

    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.extract_root(), Ok(i));
    }

    assert!(heap.is_empty());
    assert_eq!(heap.extract_root(), Err(HeapError::EmptyHeap));
}

/// Test alternating insert and extract
#[test]
fn test_alternating_ops() {
    let mut heap = BinaryHeap::min_heap(16);

    // Insert-insert-extract pattern
    for i in 0..2_000 {
        heap.insert(i * 2);
        heap.insert(i * 2 + 1);

        assert_eq!(heap.extract_root(), Ok(i));
        assert!(heap.verify_heap_property());
    }

    assert_eq!(heap.len(), 2_000);
    assert_eq!(
        heap.into_vec_in_extraction_order(),
        (2_000..4_000).collect::<Vec<_>>()
    );
}

/// Test random values against a sorted reference
#[test]
fn test_random_values() {
    let mut rng = Lcg(0x5eed);
    let values: Vec<u32> = (0..5_000).map(|_| rng.next() % 1_000).collect();

    let mut heap = BinaryHeap::min_heap(values.len());
    heap.extend(values.iter().copied());
    assert!(heap.verify_heap_property());

    let mut expected = values;
    expected.sort_unstable();
    assert_eq!(heap.into_vec_in_extraction_order(), expected);
}

/// Test interleaved random inserts and extracts on a max-ordering comparator
#[test]
fn test_random_interleaving_max() {
    let mut rng = Lcg(42);
    let mut heap = BinaryHeap::new(0, |a: &u32, b: &u32| -> Ordering { b.cmp(a) });
    let mut reference: Vec<u32> = Vec::new();

    for _ in 0..20_000 {
        if rng.next() % 3 == 0 {
            let expected = reference.iter().max().copied();
            match heap.extract_root() {
                Ok(value) => {
                    assert_eq!(Some(value), expected);
                    if let Some(pos) = reference.iter().position(|&v| v == value) {
                        reference.swap_remove(pos);
                    }
                }
                Err(err) => {
                    assert_eq!(err, HeapError::EmptyHeap);
                    assert!(reference.is_empty());
                }
            }
        } else {
            let value = rng.next() % 500;
            heap.insert(value);
            reference.push(value);
        }
        assert_eq!(heap.len(), reference.len());
    }

    assert!(heap.verify_heap_property());
}

/// Test many duplicates of the same value
#[test]
fn test_all_equal() {
    let mut heap = BinaryHeap::min_heap(0);
    for _ in 0..1_000 {
        heap.insert(7u8);
    }
    assert!(heap.verify_heap_property());

    for _ in 0..1_000 {
        assert_eq!(heap.extract_root(), Ok(7));
    }
    assert!(heap.is_empty());
}

/// Test repeated fill and clear cycles
#[test]
fn test_fill_clear_cycles() {
    let mut heap = BinaryHeap::max_heap(4);
    for round in 0..50 {
        for i in 0..round {
            heap.insert(i);
        }
        assert_eq!(heap.len(), round);
        if round > 0 {
            assert_eq!(heap.extract_root(), Ok(round - 1));
        }
        heap.clear();
        assert!(heap.is_empty());
    }
}
