//! The copy-on-write box.

use std::fmt;

use super::InvalidHandleError;
use super::SharedSequence;
use super::StorageId;
use super::WeakSequence;

// =============================================================================
// CowBox Definition
// =============================================================================

/// A copy-on-write box over a shared sequence.
///
/// A `CowBox` owns one [`SharedSequence`] handle. Cloning a box shares the
/// storage (a reference-count bump, no element copy); the defensive copy is
/// deferred until [`push`](Self::push) runs while the storage has more than
/// one owner. Co-owners of the original storage are never affected by a
/// `push`.
///
/// The hazardous counterpart, [`push_shared`](Self::push_shared), appends in
/// place regardless of sharing and is visible to every co-owner. It is kept
/// deliberately: it demonstrates the aliasing that `push` exists to prevent.
///
/// # Time Complexity
///
/// | Operation     | Complexity                          |
/// |---------------|-------------------------------------|
/// | `wrap`        | O(1)                                |
/// | `clone`       | O(1)                                |
/// | `push`        | O(1) exclusive, O(N) under sharing  |
/// | `push_shared` | O(1)                                |
/// | `get`         | O(1)                                |
/// | `to_vec`      | O(N)                                |
///
/// # Examples
///
/// ```rust
/// use cowbox::cow::CowBox;
///
/// let first = CowBox::from(vec![10, 20]);
/// let mut second = first.clone();
///
/// second.push(30);
/// assert_eq!(first.to_vec(), vec![10, 20]);
/// assert_eq!(second.to_vec(), vec![10, 20, 30]);
/// ```
pub struct CowBox<T> {
    handle: SharedSequence<T>,
}

impl<T> CowBox<T> {
    /// Creates a box over fresh, empty, exclusively owned storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowbox::cow::CowBox;
    ///
    /// let cow_box: CowBox<i32> = CowBox::new();
    /// assert!(cow_box.is_empty());
    /// assert!(cow_box.is_sole_owner());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            handle: SharedSequence::new(),
        }
    }

    /// Wraps an existing handle. No copy is performed.
    ///
    /// The box co-owns whatever the handle points at; if other owning
    /// handles exist, the box starts in the shared state and the first
    /// [`push`](Self::push) will copy away.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowbox::cow::{CowBox, SharedSequence};
    ///
    /// let storage = SharedSequence::from_elements(vec![1, 2]);
    /// let cow_box = CowBox::wrap(storage);
    /// assert_eq!(cow_box.len(), 2);
    /// assert!(cow_box.is_sole_owner());
    /// ```
    #[inline]
    #[must_use]
    pub const fn wrap(handle: SharedSequence<T>) -> Self {
        Self { handle }
    }

    /// Attempts to wrap the storage behind a weak handle.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHandleError`] when every owning handle has been
    /// dropped, so the weak handle no longer identifies live storage. The
    /// error surfaces immediately at construction and is never recovered
    /// internally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowbox::cow::{CowBox, SharedSequence};
    ///
    /// let storage = SharedSequence::from_elements(vec![1]);
    /// let weak = storage.downgrade();
    /// assert!(CowBox::try_wrap(&weak).is_ok());
    ///
    /// drop(storage);
    /// assert!(CowBox::try_wrap(&weak).is_err());
    /// ```
    pub fn try_wrap(handle: &WeakSequence<T>) -> Result<Self, InvalidHandleError> {
        handle
            .upgrade()
            .map(Self::wrap)
            .ok_or(InvalidHandleError {
                operation: "try_wrap",
            })
    }

    /// Returns the number of elements visible through this box.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.handle.len()
    }

    /// Returns `true` when the box's storage holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handle.is_empty()
    }

    /// Returns the identity of the box's current storage allocation.
    ///
    /// The identity changes exactly when a [`push`](Self::push) under shared
    /// ownership rebinds the box to a fresh copy.
    #[inline]
    #[must_use]
    pub fn storage_id(&self) -> StorageId {
        self.handle.storage_id()
    }

    /// Returns the number of owning handles sharing this box's storage,
    /// this box included.
    #[inline]
    #[must_use]
    pub fn owner_count(&self) -> usize {
        self.handle.owner_count()
    }

    /// Returns `true` when this box is the storage's only owner.
    ///
    /// This is the check [`push`](Self::push) performs immediately before
    /// mutating.
    #[inline]
    #[must_use]
    pub fn is_sole_owner(&self) -> bool {
        self.handle.owner_count() == 1
    }

    /// Returns a new co-owning handle to this box's storage.
    ///
    /// Holding the returned handle keeps the box in the shared state: its
    /// next [`push`](Self::push) will copy away.
    #[inline]
    #[must_use]
    pub fn handle(&self) -> SharedSequence<T> {
        self.handle.clone()
    }

    /// Returns a non-owning handle to this box's storage.
    ///
    /// Weak handles never force a copy; an upgrade performed after this box
    /// has copied away still sees the original storage.
    #[inline]
    #[must_use]
    pub fn downgrade(&self) -> WeakSequence<T> {
        self.handle.downgrade()
    }

    /// Appends directly into the current storage, regardless of sharing.
    ///
    /// Every box (and handle) sharing the storage observes the new element.
    /// This is the documented hazard [`push`](Self::push) exists to prevent;
    /// it is kept as a demonstration, not as a defect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowbox::cow::CowBox;
    ///
    /// let first = CowBox::from(vec![1]);
    /// let second = first.clone();
    ///
    /// second.push_shared(2);
    /// assert_eq!(first.to_vec(), vec![1, 2]); // aliasing, by design
    /// assert_eq!(first.storage_id(), second.storage_id());
    /// ```
    pub fn push_shared(&self, element: T) {
        self.handle.with_elements_mut(|elements| elements.push(element));
    }
}

impl<T: Clone> CowBox<T> {
    /// Rebinds to a fresh copy of the elements unless already sole owner.
    ///
    /// The owner-count read and the rebind happen back to back on the
    /// current handle; there is no window for a stale count.
    fn ensure_exclusive(&mut self) {
        if !self.is_sole_owner() {
            self.handle = self.handle.detached_copy();
        }
    }

    /// Appends an element, copying the storage first when it is shared.
    ///
    /// If this box is the sole owner of its storage, the element is appended
    /// in place. Otherwise the elements are copied (a shallow copy of the
    /// sequence) into a fresh allocation, the box rebinds to it, and the
    /// element is appended there. Either way, co-owners of the original
    /// storage observe nothing.
    ///
    /// After one `push`, the box is the sole owner of its storage, so
    /// consecutive pushes mutate in place without further copies.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowbox::cow::CowBox;
    ///
    /// let first = CowBox::from(vec!["a"]);
    /// let mut second = first.clone();
    ///
    /// second.push("b");
    /// assert_eq!(first.to_vec(), vec!["a"]);
    /// assert_ne!(first.storage_id(), second.storage_id());
    ///
    /// let id_after_copy = second.storage_id();
    /// second.push("c"); // already exclusive: no further copy
    /// assert_eq!(second.storage_id(), id_after_copy);
    /// ```
    pub fn push(&mut self, element: T) {
        self.ensure_exclusive();
        self.handle.with_elements_mut(|elements| elements.push(element));
    }

    /// Returns a clone of the element at `index`, or `None` out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.handle.with_elements(|elements| elements.get(index).cloned())
    }

    /// Returns a snapshot of the elements as a plain `Vec`.
    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.handle.to_vec()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Clone for CowBox<T> {
    /// Constructs a box sharing this box's storage.
    ///
    /// Only the handle is duplicated; both boxes co-own one allocation until
    /// one of them [`push`](Self::push)es.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
        }
    }
}

impl<T> Default for CowBox<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CowBox<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CowBox")
            .field("handle", &self.handle)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for CowBox<T> {
    /// Formats as `[a, b, c]`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.handle.with_elements(|elements| {
            write!(formatter, "[")?;
            for (index, element) in elements.iter().enumerate() {
                if index > 0 {
                    write!(formatter, ", ")?;
                }
                write!(formatter, "{element}")?;
            }
            write!(formatter, "]")
        })
    }
}

impl<T: PartialEq> PartialEq for CowBox<T> {
    /// Element-wise comparison; storage identity is irrelevant.
    fn eq(&self, other: &Self) -> bool {
        if self.storage_id() == other.storage_id() {
            return true;
        }
        self.handle
            .with_elements(|left| other.handle.with_elements(|right| left == right))
    }
}

impl<T: Eq> Eq for CowBox<T> {}

impl<T> From<Vec<T>> for CowBox<T> {
    /// Moves the elements into fresh, exclusively owned storage.
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::wrap(SharedSequence::from_elements(elements))
    }
}

impl<T> From<SharedSequence<T>> for CowBox<T> {
    /// Equivalent to [`CowBox::wrap`].
    #[inline]
    fn from(handle: SharedSequence<T>) -> Self {
        Self::wrap(handle)
    }
}

impl<T> FromIterator<T> for CowBox<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::from(iterable.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Clone> Extend<T> for CowBox<T> {
    /// Appends every element, performing at most one copy up front.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        self.ensure_exclusive();
        self.handle.with_elements_mut(|elements| elements.extend(iterable));
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for CowBox<T> {
    /// Serializes as the element sequence.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.handle
            .with_elements(|elements| serializer.collect_seq(elements.iter()))
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for CowBox<T> {
    /// Deserializes into fresh, exclusively owned storage.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================
