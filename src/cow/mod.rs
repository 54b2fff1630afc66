//! Copy-on-write boxes over shared mutable sequences.
//!
//! This module provides [`CowBox`], a wrapper around a shared sequence
//! allocation that defers its defensive copy until a write happens under
//! shared ownership:
//!
//! - [`SharedSequence`]: an owning handle to one storage allocation
//! - [`WeakSequence`]: a non-owning handle; upgrading it can fail
//! - [`StorageId`]: the observable identity of a storage allocation
//! - [`CowBox`]: the copy-on-write box itself
//!
//! # Ownership States
//!
//! Every storage allocation is in one of two states, determined by the
//! number of owning handles pointing at it:
//!
//! - **Exclusive** (owner count == 1): a [`CowBox::push`] mutates in place.
//! - **Shared** (owner count >= 2): a [`CowBox::push`] first copies the
//!   elements into a fresh allocation, rebinds the box's handle to it, and
//!   only then appends. Every other owner keeps the original allocation,
//!   untouched.
//!
//! The sole-owner check is read immediately before the mutation, on the
//! box's current handle. Checking after mutating, or acting on a stale
//! count, is exactly the aliasing bug this type exists to rule out.
//!
//! # Examples
//!
//! ```rust
//! use cowbox::cow::{CowBox, SharedSequence};
//!
//! let storage = SharedSequence::from_elements(vec!["v1", "v2"]);
//! let first = CowBox::wrap(storage);
//! let mut second = first.clone();
//! assert_eq!(first.storage_id(), second.storage_id());
//!
//! // Shared append: in place, visible to every co-owner.
//! second.push_shared("v3");
//! assert_eq!(first.to_vec(), vec!["v1", "v2", "v3"]);
//!
//! // Copy-on-write append: `second` copies away, `first` is untouched.
//! second.push("v4");
//! assert_ne!(first.storage_id(), second.storage_id());
//! assert_eq!(first.to_vec(), vec!["v1", "v2", "v3"]);
//! assert_eq!(second.to_vec(), vec!["v1", "v2", "v3", "v4"]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Non-owning counterpart of [`ReferenceCounter`].
#[cfg(feature = "arc")]
pub(crate) type WeakCounter<T> = std::sync::Weak<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type WeakCounter<T> = std::rc::Weak<T>;

/// Interior-mutability cell guarding the element storage.
///
/// When the `arc` feature is enabled, this is `parking_lot::RwLock`, so
/// element access stays sound across threads. When disabled (default), it is
/// `std::cell::RefCell`.
#[cfg(feature = "arc")]
pub(crate) type SharedCell<T> = parking_lot::RwLock<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type SharedCell<T> = std::cell::RefCell<T>;

mod boxed;
mod error;
mod sequence;

pub use boxed::CowBox;
pub use error::InvalidHandleError;
pub use sequence::SharedSequence;
pub use sequence::StorageId;
pub use sequence::WeakSequence;

// =============================================================================
// Thread-Safety Pins
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(CowBox<String>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(SharedSequence<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(CowBox<String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_clone() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(*reference_counter, *reference_counter_clone);
    }

    #[rstest]
    fn test_reference_counter_strong_count() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
        drop(reference_counter_clone);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
    }

    #[rstest]
    fn test_weak_counter_does_not_own() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        let weak = ReferenceCounter::downgrade(&reference_counter);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        drop(reference_counter);
        assert!(weak.upgrade().is_none());
    }
}
