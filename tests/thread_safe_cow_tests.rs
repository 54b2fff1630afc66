//! Integration tests for thread-safe copy-on-write boxes.
//!
//! These tests verify `CowBox` with the `arc` feature enabled: shared
//! appends serialize through the storage lock, and copy-on-write appends
//! stay isolated from co-owners across threads.

#![cfg(feature = "arc")]

use cowbox::cow::CowBox;
use rstest::rstest;
use std::thread;

// =============================================================================
// Shared Appends Across Threads
// =============================================================================

#[rstest]
fn test_concurrent_push_shared_loses_no_elements() {
    let origin: CowBox<u32> = CowBox::new();

    thread::scope(|scope| {
        for worker in 0..4_u32 {
            let alias = origin.clone();
            scope.spawn(move || {
                for element in 0..100 {
                    alias.push_shared(worker * 1000 + element);
                }
            });
        }
    });

    // Every append landed in the one shared storage, none lost to a race.
    assert_eq!(origin.len(), 400);
    assert!(origin.is_sole_owner());

    let mut elements = origin.to_vec();
    elements.sort_unstable();
    elements.dedup();
    assert_eq!(elements.len(), 400);
}

#[rstest]
fn test_concurrent_push_shared_keeps_one_identity() {
    let origin: CowBox<u32> = CowBox::new();
    let identity = origin.storage_id();

    thread::scope(|scope| {
        for _ in 0..4 {
            let alias = origin.clone();
            scope.spawn(move || {
                for element in 0..50 {
                    alias.push_shared(element);
                }
                assert_eq!(alias.storage_id(), identity);
            });
        }
    });

    assert_eq!(origin.storage_id(), identity);
}

// =============================================================================
// Copy-On-Write Appends Across Threads
// =============================================================================

#[rstest]
fn test_cross_thread_push_isolates_writers() {
    let origin: CowBox<i32> = (0..100).collect();

    let handles: Vec<_> = (0..4_i32)
        .map(|index| {
            let mut writer = origin.clone();
            thread::spawn(move || {
                // Each thread copies away on its first push.
                writer.push(index * 10);
                assert_eq!(writer.len(), 101);
                assert!(writer.is_sole_owner());
                writer
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    // Verify each thread created an independent box.
    for (index, writer) in results.iter().enumerate() {
        let expected = i32::try_from(index).expect("Worker index exceeds i32::MAX") * 10;
        assert_eq!(writer.get(100), Some(expected));
        assert_ne!(writer.storage_id(), origin.storage_id());
    }

    // The original should still be unchanged.
    assert_eq!(origin.to_vec(), (0..100).collect::<Vec<i32>>());
    assert!(origin.is_sole_owner());
}

#[rstest]
fn test_readers_observe_a_consistent_snapshot() {
    let origin: CowBox<u32> = (0..100).collect();

    thread::scope(|scope| {
        let writer_alias = origin.clone();
        scope.spawn(move || {
            for element in 100..200 {
                writer_alias.push_shared(element);
            }
        });

        for _ in 0..4 {
            let reader = origin.clone();
            scope.spawn(move || {
                // Reads lock the storage, so every snapshot is a prefix of
                // the final sequence.
                let snapshot = reader.to_vec();
                assert!(snapshot.len() >= 100);
                assert!(snapshot.len() <= 200);
                for (index, element) in snapshot.iter().enumerate() {
                    assert_eq!(*element, u32::try_from(index).expect("Snapshot exceeds u32::MAX"));
                }
            });
        }
    });

    assert_eq!(origin.len(), 200);
}
