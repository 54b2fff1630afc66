//! # cowbox
//!
//! Copy-on-write boxes over shared, mutable, ordered sequences.
//!
//! ## Overview
//!
//! The crate is built around one idea: several owners may share a single
//! sequence allocation, and a write made through a [`CowBox`](cow::CowBox)
//! duplicates that allocation only when the writer is not its sole owner.
//! Construction and cloning are therefore cheap (reference-count bumps), and
//! the defensive copy is deferred to the first write that actually happens
//! under shared ownership.
//!
//! Every box exposes the identity of its current storage allocation as an
//! opaque [`StorageId`](cow::StorageId), so the moment two boxes diverge is
//! directly observable:
//!
//! ```rust
//! use cowbox::cow::CowBox;
//!
//! let first: CowBox<i32> = (1..=3).collect();
//! let mut second = first.clone();            // shares storage, no copy
//! assert_eq!(first.storage_id(), second.storage_id());
//!
//! second.push(4);                            // the copy happens here
//! assert_ne!(first.storage_id(), second.storage_id());
//! assert_eq!(first.to_vec(), vec![1, 2, 3]); // co-owner untouched
//! assert_eq!(second.to_vec(), vec![1, 2, 3, 4]);
//! ```
//!
//! The deliberately hazardous counterpart,
//! [`push_shared`](cow::CowBox::push_shared), appends in place regardless of
//! sharing and makes the new element visible to every co-owner. It exists to
//! demonstrate exactly the aliasing that [`push`](cow::CowBox::push)
//! prevents.
//!
//! ## Feature Flags
//!
//! - `scenarios` (default): small self-contained modeling domains
//!   ([`scenarios::farm`], [`scenarios::company`], [`scenarios::dice`])
//! - `arc`: thread-safe storage (`Arc` + `parking_lot::RwLock` instead of
//!   `Rc` + `RefCell`)
//! - `serde`: serialization support for boxes and scenario types
//! - `full`: everything above except `arc`

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use cowbox::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cow::{CowBox, InvalidHandleError, SharedSequence, StorageId, WeakSequence};

    #[cfg(feature = "scenarios")]
    pub use crate::scenarios::company::{Company, NotEnoughSpecialistsError, Platform};
    #[cfg(feature = "scenarios")]
    pub use crate::scenarios::dice::GameDie;
    #[cfg(feature = "scenarios")]
    pub use crate::scenarios::farm::{FarmEntry, roll_call};
}

pub mod cow;

#[cfg(feature = "scenarios")]
pub mod scenarios;
