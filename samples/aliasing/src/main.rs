//! Console walkthrough of copy-on-write behavior.
//!
//! Prints each box's storage identity before and after every append, so the
//! exact moment the identities diverge is visible, then runs the scenario
//! domains.

use cowbox::cow::{CowBox, SharedSequence};
use cowbox::scenarios::company::{Company, Platform};
use cowbox::scenarios::dice::GameDie;
use cowbox::scenarios::farm::{FarmEntry, roll_call};

fn main() {
    cow_walkthrough();
    println!();
    farm_walkthrough();
    println!();
    company_walkthrough();
    println!();
    dice_walkthrough();
}

fn cow_walkthrough() {
    let storage = SharedSequence::from_elements(vec!["v1".to_string(), "v2".to_string()]);
    let first = CowBox::wrap(storage);
    let mut second = first.clone();

    println!("first  before        {}", first.storage_id());
    println!("second before        {}", second.storage_id());

    // Shared append: both boxes still point at the same storage, and both
    // observe the new element.
    second.push_shared("v3".to_string());
    println!("first  shared append {}  {}", first.storage_id(), first);
    println!("second shared append {}  {}", second.storage_id(), second);

    // Copy-on-write append: `second` copies away; `first` is untouched.
    second.push("v4".to_string());
    println!("first  after         {}  {}", first.storage_id(), first);
    println!("second after         {}  {}", second.storage_id(), second);
}

fn farm_walkthrough() {
    let mut roster = vec![
        FarmEntry::cow(Some("Burenka")),
        FarmEntry::student("Bob", "Shmob"),
        FarmEntry::grass("St. Augustine"),
        FarmEntry::cow(None),
        FarmEntry::student("Brian", "Shmian"),
        FarmEntry::grass("Bermuda"),
        FarmEntry::student("Bill", "Shill"),
    ];

    for label in roll_call(&mut roster) {
        println!("{label}");
    }
}

fn company_walkthrough() {
    let mut company = Company::new(50);

    report(company.assign(Platform::Ios, 45), Platform::Ios, 45);
    report(company.assign(Platform::Android, 10), Platform::Android, 10);

    if let Some(released) = company.finish_latest() {
        println!("shipped a task, released {released} specialists");
    }

    report(company.assign(Platform::Android, 10), Platform::Android, 10);

    if let Some(released) = company.finish_latest() {
        println!("shipped a task, released {released} specialists");
    }
}

fn report(
    outcome: Result<(), cowbox::scenarios::company::NotEnoughSpecialistsError>,
    platform: Platform,
    specialists: u32,
) {
    match outcome {
        Ok(()) => println!("writing code for {platform} with {specialists} specialists"),
        Err(error) => println!("{error}"),
    }
}

fn dice_walkthrough() {
    let face: u8 = 4;
    println!("{}", face.announce());
}
