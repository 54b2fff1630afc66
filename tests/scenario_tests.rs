#![cfg(feature = "scenarios")]
//! Integration tests for the scenario modules.

use cowbox::scenarios::company::{Company, NotEnoughSpecialistsError, Platform};
use cowbox::scenarios::dice::GameDie;
use cowbox::scenarios::farm::{FarmEntry, roll_call};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// Farm Roll Call
// =============================================================================

#[rstest]
fn test_roll_call_orders_rank_then_label() {
    let mut roster = vec![
        FarmEntry::cow(Some("Burenka")),
        FarmEntry::student("Bob", "Shmob"),
        FarmEntry::grass("St. Augustine"),
        FarmEntry::cow(None),
        FarmEntry::student("Brian", "Shmian"),
        FarmEntry::grass("Bermuda"),
        FarmEntry::student("Bill", "Shill"),
    ];

    assert_eq!(
        roll_call(&mut roster),
        vec![
            "Bill Shill",
            "Bob Shmob",
            "Brian Shmian",
            "a cow",
            "Burenka",
            "Grass: Bermuda",
            "Grass: St. Augustine",
        ]
    );
}

#[rstest]
fn test_roll_call_is_idempotent() {
    let mut roster = vec![
        FarmEntry::grass("Bermuda"),
        FarmEntry::student("Bob", "Shmob"),
    ];

    let first_pass = roll_call(&mut roster);
    let second_pass = roll_call(&mut roster);
    assert_eq!(first_pass, second_pass);
}

proptest! {
    /// Roll-call order is total: ranks never decrease, and labels within a
    /// rank are sorted case-insensitively.
    #[test]
    fn prop_roll_call_order_is_sorted(
        cow_names in prop::collection::vec(proptest::option::of("[A-Za-z]{1,8}"), 0..10),
        varieties in prop::collection::vec("[A-Za-z]{1,8}", 0..10)
    ) {
        let mut roster: Vec<FarmEntry> = cow_names
            .iter()
            .map(|name| FarmEntry::cow(name.as_deref()))
            .chain(varieties.iter().map(FarmEntry::grass))
            .collect();

        roll_call(&mut roster);

        for window in roster.windows(2) {
            let (left, right) = (&window[0], &window[1]);
            prop_assert!(left.rank() <= right.rank());
            if left.rank() == right.rank() {
                prop_assert!(left.label().to_lowercase() <= right.label().to_lowercase());
            }
        }
    }
}

// =============================================================================
// Company Allocation
// =============================================================================

/// 50 people; a 45-person task fits, the next 10-person task does not until
/// the first one ships.
#[rstest]
fn test_allocation_walkthrough() {
    let mut company = Company::new(50);

    assert!(company.assign(Platform::Ios, 45).is_ok());
    assert_eq!(
        company.assign(Platform::Android, 10),
        Err(NotEnoughSpecialistsError {
            platform: Platform::Android,
            requested: 10,
            available: 5,
        })
    );

    assert_eq!(company.finish_latest(), Some(45));
    assert!(company.assign(Platform::Android, 10).is_ok());
    assert_eq!(company.finish_latest(), Some(10));
}

#[rstest]
fn test_assignments_release_in_reverse_order() {
    let mut company = Company::new(30);
    company.assign(Platform::Ios, 10).unwrap();
    company.assign(Platform::Web, 20).unwrap();

    assert_eq!(company.finish_latest(), Some(20));
    assert_eq!(company.finish_latest(), Some(10));
    assert_eq!(company.finish_latest(), None);
}

proptest! {
    /// Availability never goes negative and always accounts for every
    /// accepted assignment.
    #[test]
    fn prop_availability_is_conserved(
        headcount in 0_u32..200,
        requests in prop::collection::vec(0_u32..100, 0..20)
    ) {
        let mut company = Company::new(headcount);
        let mut accepted_total = 0_u32;

        for request in requests {
            if company.assign(Platform::Web, request).is_ok() {
                accepted_total += request;
            }
        }

        prop_assert!(accepted_total <= headcount);
        prop_assert_eq!(company.available(), headcount - accepted_total);
    }
}

// =============================================================================
// Dice Extension
// =============================================================================

#[rstest]
fn test_dice_extension_on_u8() {
    let face: u8 = 4;
    assert_eq!(face.pips(), 4);
    assert!(face.is_face());
    assert_eq!(face.announce(), "Rolled a 4");
}

#[rstest]
fn test_only_one_through_six_are_faces() {
    let faces: Vec<u8> = (0..=10).filter(|value: &u8| value.is_face()).collect();
    assert_eq!(faces, vec![1, 2, 3, 4, 5, 6]);
}
