use std::sync::Arc;
use std::thread;

use nd_orthants::prelude::*;

#[test]
fn concurrent_same_key_agrees() {
    let orthants = Arc::new(Orthants::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let orthants = Arc::clone(&orthants);
            thread::spawn(move || {
                (0..100)
                    .map(|_| orthants.sign(10, 7).unwrap())
                    .collect::<Vec<Point>>()
            })
        })
        .collect();

    let expected = Orthants::new().sign(10, 7).unwrap();
    for handle in handles {
        for p in handle.join().unwrap() {
            assert_eq!(p, expected);
        }
    }
}

#[test]
fn concurrent_mixed_keys_populate_every_entry() {
    let orthants = Arc::new(Orthants::new());
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let orthants = Arc::clone(&orthants);
            thread::spawn(move || {
                for dims in 1..=6u32 {
                    let count = orthants.count(dims).unwrap();
                    // Each thread walks the orthants in a different stride.
                    for k in 0..count {
                        let orthant = (k * (t + 1)) % count + 1;
                        let p = orthants.sign(dims, orthant).unwrap();
                        assert_eq!(p.dims(), dims as usize);
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Whatever the interleaving, cached values match a fresh instance.
    let fresh = Orthants::new();
    for dims in 1..=6u32 {
        let count = fresh.count(dims).unwrap();
        for orthant in 1..=count {
            assert_eq!(
                orthants.sign(dims, orthant).unwrap(),
                fresh.sign(dims, orthant).unwrap()
            );
        }
    }
}

#[test]
fn concurrent_counts_are_consistent() {
    let orthants = Arc::new(Orthants::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let orthants = Arc::clone(&orthants);
            thread::spawn(move || {
                (1..=30u32)
                    .map(|dims| orthants.count(dims).unwrap())
                    .collect::<Vec<u32>>()
            })
        })
        .collect();
    for handle in handles {
        let counts = handle.join().unwrap();
        for (i, count) in counts.iter().enumerate() {
            assert_eq!(*count, 1u32 << (i + 1));
        }
    }
}
