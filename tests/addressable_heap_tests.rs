use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spath::{AddressableHeap, DistanceEstimate, Error};

#[test]
fn test_insert_and_extract_in_order() {
    let mut heap = AddressableHeap::new();
    for value in [7u32, 3, 9, 1, 5] {
        heap.insert(value);
    }

    assert_eq!(heap.len(), 5);
    let mut extracted = Vec::new();
    while !heap.is_empty() {
        extracted.push(heap.extract_min().unwrap());
    }
    assert_eq!(extracted, vec![1, 3, 5, 7, 9]);
}

#[test]
fn test_peek_does_not_remove() {
    let mut heap = AddressableHeap::new();
    heap.insert(4u32);
    heap.insert(2);

    assert_eq!(heap.peek(), Some(&2));
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.extract_min().unwrap(), 2);
}

#[test]
fn test_extract_empty_heap_fails() {
    let mut heap: AddressableHeap<u32> = AddressableHeap::new();
    assert_eq!(heap.extract_min(), Err(Error::EmptyHeap));

    heap.insert(1);
    heap.extract_min().unwrap();
    assert_eq!(heap.extract_min(), Err(Error::EmptyHeap));
}

#[test]
fn test_decrease_is_visible_immediately() {
    let mut heap = AddressableHeap::new();
    let a = heap.insert(10u32);
    let b = heap.insert(20);

    heap.decrease(b, 5).unwrap();
    assert_eq!(heap.value(b), Some(&5));
    assert_eq!(heap.value(a), Some(&10));

    // The decreased entry now comes out first
    assert_eq!(heap.extract_min().unwrap(), 5);
    assert_eq!(heap.extract_min().unwrap(), 10);
}

#[test]
fn test_decrease_to_non_smaller_value_is_rejected() {
    let mut heap = AddressableHeap::new();
    let handle = heap.insert(10u32);

    assert_eq!(heap.decrease(handle, 10), Err(Error::InvalidDecrease));
    assert_eq!(heap.decrease(handle, 15), Err(Error::InvalidDecrease));
    // The entry is untouched
    assert_eq!(heap.value(handle), Some(&10));

    heap.decrease(handle, 9).unwrap();
    assert_eq!(heap.value(handle), Some(&9));
}

#[test]
fn test_decrease_after_extraction_is_rejected() {
    let mut heap = AddressableHeap::new();
    let handle = heap.insert(10u32);

    assert_eq!(heap.extract_min().unwrap(), 10);
    assert_eq!(heap.decrease(handle, 5), Err(Error::InvalidHandle));
}

// Equal distances break ties by vertex ID, so extraction order among equal
// priorities does not depend on insertion order.
#[test]
fn test_distance_estimate_ties_break_by_vertex() {
    let mut heap = AddressableHeap::new();
    heap.insert(DistanceEstimate::<u64>::finite(2, 5));
    heap.insert(DistanceEstimate::finite(1, 5));
    heap.insert(DistanceEstimate::unreached(0));

    assert_eq!(heap.extract_min().unwrap(), DistanceEstimate::finite(1, 5));
    assert_eq!(heap.extract_min().unwrap(), DistanceEstimate::finite(2, 5));
    assert_eq!(heap.extract_min().unwrap(), DistanceEstimate::unreached(0));
}

#[test]
fn test_value_readable_after_extraction() {
    let mut heap = AddressableHeap::new();
    let a = heap.insert(3u32);
    let b = heap.insert(8);

    heap.extract_min().unwrap();
    heap.extract_min().unwrap();

    // Extracted entries keep their final values
    assert_eq!(heap.value(a), Some(&3));
    assert_eq!(heap.value(b), Some(&8));
}

// Random insert/decrease sequences, cross-checked against a brute-force scan
// of the live entries. Each entry carries a unique serial so extraction order
// among equal priorities is well defined.
#[test]
fn test_extract_min_matches_brute_force_scan() {
    let mut rng = StdRng::seed_from_u64(7);

    let mut heap = AddressableHeap::new();
    let mut live: Vec<(spath::Handle, (u64, u64))> = Vec::new();
    let mut serial = 0u64;

    for round in 0..2_000 {
        match rng.gen_range(0..3) {
            // insert
            0 => {
                let entry = (rng.gen_range(0..1_000_000u64), serial);
                serial += 1;
                let handle = heap.insert(entry);
                live.push((handle, entry));
            }
            // decrease a random live entry
            1 if !live.is_empty() => {
                let idx = rng.gen_range(0..live.len());
                let (handle, (value, tag)) = live[idx];
                if value > 0 {
                    let new_entry = (rng.gen_range(0..value), tag);
                    heap.decrease(handle, new_entry).unwrap();
                    live[idx].1 = new_entry;
                    assert_eq!(heap.value(handle), Some(&new_entry));
                }
            }
            // extract and compare against the scan
            _ if !live.is_empty() => {
                let min = live.iter().map(|&(_, entry)| entry).min().unwrap();
                assert_eq!(heap.extract_min().unwrap(), min, "round {}", round);
                let idx = live.iter().position(|&(_, entry)| entry == min).unwrap();
                live.swap_remove(idx);
            }
            _ => {}
        }
        assert_eq!(heap.len(), live.len());
    }

    // Drain what is left; must come out sorted
    let mut remaining: Vec<(u64, u64)> = live.iter().map(|&(_, entry)| entry).collect();
    remaining.sort_unstable();
    for expected in remaining {
        assert_eq!(heap.extract_min().unwrap(), expected);
    }
    assert!(heap.is_empty());
}
