//! Owning and weak handles to shared sequence storage.

use std::fmt;

use super::{ReferenceCounter, SharedCell, WeakCounter};

// =============================================================================
// StorageId
// =============================================================================

/// Opaque identity of one storage allocation.
///
/// Two handles (or boxes) report the same `StorageId` exactly while they
/// point at the same underlying allocation. The value is derived from the
/// allocation address; it is meaningful only for comparison and display, and
/// only while at least one owning handle is alive.
///
/// # Examples
///
/// ```rust
/// use cowbox::cow::SharedSequence;
///
/// let sequence = SharedSequence::from_elements(vec![1, 2, 3]);
/// let alias = sequence.clone();
/// assert_eq!(sequence.storage_id(), alias.storage_id());
///
/// let detached = SharedSequence::from_elements(vec![1, 2, 3]);
/// assert_ne!(sequence.storage_id(), detached.storage_id());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StorageId(usize);

impl fmt::Display for StorageId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:#x}", self.0)
    }
}

// =============================================================================
// SharedSequence Definition
// =============================================================================

/// An owning handle to a shared, mutable, ordered sequence.
///
/// Cloning a `SharedSequence` shares the underlying storage; it never copies
/// elements. The number of co-owning handles is observable through
/// [`owner_count`](Self::owner_count), and the allocation's identity through
/// [`storage_id`](Self::storage_id).
///
/// A `SharedSequence` on its own provides only shared *read* access to the
/// elements; mutation goes through [`CowBox`](super::CowBox), which decides
/// between mutating in place and copying away first.
///
/// # Examples
///
/// ```rust
/// use cowbox::cow::SharedSequence;
///
/// let sequence = SharedSequence::from_elements(vec!["a", "b"]);
/// assert_eq!(sequence.len(), 2);
/// assert_eq!(sequence.owner_count(), 1);
///
/// let alias = sequence.clone();
/// assert_eq!(sequence.owner_count(), 2);
/// assert_eq!(alias.to_vec(), vec!["a", "b"]);
/// ```
pub struct SharedSequence<T> {
    storage: ReferenceCounter<SharedCell<Vec<T>>>,
}

impl<T> SharedSequence<T> {
    /// Creates a handle to fresh, empty, exclusively owned storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowbox::cow::SharedSequence;
    ///
    /// let sequence: SharedSequence<i32> = SharedSequence::new();
    /// assert!(sequence.is_empty());
    /// assert_eq!(sequence.owner_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_elements(Vec::new())
    }

    /// Creates a handle to fresh storage holding the given elements.
    ///
    /// The elements are moved in; no copy is performed.
    #[inline]
    #[must_use]
    pub fn from_elements(elements: Vec<T>) -> Self {
        Self {
            storage: ReferenceCounter::new(SharedCell::new(elements)),
        }
    }

    /// Returns the number of elements currently in storage.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.with_elements(<[T]>::len)
    }

    /// Returns `true` when the storage holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.with_elements(<[T]>::is_empty)
    }

    /// Returns the identity of the underlying allocation.
    ///
    /// Identity is stable for the lifetime of the allocation: it changes for
    /// a given [`CowBox`](super::CowBox) only when that box rebinds itself
    /// to a fresh copy.
    #[inline]
    #[must_use]
    pub fn storage_id(&self) -> StorageId {
        StorageId(ReferenceCounter::as_ptr(&self.storage).addr())
    }

    /// Returns the number of owning handles sharing this storage.
    ///
    /// Weak handles are not counted; they do not keep the storage alive and
    /// never force a copy.
    #[inline]
    #[must_use]
    pub fn owner_count(&self) -> usize {
        ReferenceCounter::strong_count(&self.storage)
    }

    /// Creates a non-owning handle to the same storage.
    #[inline]
    #[must_use]
    pub fn downgrade(&self) -> WeakSequence<T> {
        WeakSequence {
            storage: ReferenceCounter::downgrade(&self.storage),
        }
    }

    /// Runs `read` with shared access to the elements.
    ///
    /// The borrow is scoped to the closure; no guard escapes.
    pub(crate) fn with_elements<R>(&self, read: impl FnOnce(&[T]) -> R) -> R {
        #[cfg(not(feature = "arc"))]
        let guard = self.storage.borrow();
        #[cfg(feature = "arc")]
        let guard = self.storage.read();
        read(&guard)
    }

    /// Runs `write` with exclusive access to the elements.
    ///
    /// Exclusive here means exclusive *access*, not exclusive *ownership*:
    /// the caller is responsible for having copied away first when isolation
    /// from co-owners is wanted.
    pub(crate) fn with_elements_mut<R>(&self, write: impl FnOnce(&mut Vec<T>) -> R) -> R {
        #[cfg(not(feature = "arc"))]
        let mut guard = self.storage.borrow_mut();
        #[cfg(feature = "arc")]
        let mut guard = self.storage.write();
        write(&mut guard)
    }
}

impl<T: Clone> SharedSequence<T> {
    /// Returns a snapshot of the elements as a plain `Vec`.
    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.with_elements(<[T]>::to_vec)
    }

    /// Creates a handle to a fresh allocation holding a shallow copy of the
    /// current elements.
    ///
    /// The new storage starts exclusively owned; the original allocation and
    /// its owners are untouched.
    pub(crate) fn detached_copy(&self) -> Self {
        Self::from_elements(self.to_vec())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Clone for SharedSequence<T> {
    /// Shares the storage. The clone co-owns the same allocation; no element
    /// is copied.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            storage: ReferenceCounter::clone(&self.storage),
        }
    }
}

impl<T> Default for SharedSequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_elements(|elements| {
            formatter
                .debug_struct("SharedSequence")
                .field("storage_id", &self.storage_id())
                .field("owner_count", &self.owner_count())
                .field("elements", &elements)
                .finish()
        })
    }
}

impl<T> From<Vec<T>> for SharedSequence<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::from_elements(elements)
    }
}

impl<T> FromIterator<T> for SharedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::from_elements(iterable.into_iter().collect())
    }
}

// =============================================================================
// WeakSequence Definition
// =============================================================================

/// A non-owning handle to shared sequence storage.
///
/// A `WeakSequence` does not keep the storage alive and never participates
/// in the sole-owner check. Upgrading it yields an owning
/// [`SharedSequence`] again, or `None` once every owner has been dropped —
/// which is the one way to hold an *invalid* handle in safe code.
///
/// # Examples
///
/// ```rust
/// use cowbox::cow::SharedSequence;
///
/// let sequence = SharedSequence::from_elements(vec![1]);
/// let weak = sequence.downgrade();
/// assert!(weak.upgrade().is_some());
///
/// drop(sequence);
/// assert!(weak.upgrade().is_none());
/// ```
pub struct WeakSequence<T> {
    storage: WeakCounter<SharedCell<Vec<T>>>,
}

impl<T> WeakSequence<T> {
    /// Attempts to recover an owning handle.
    ///
    /// Returns `None` when every owning handle has been dropped.
    #[inline]
    #[must_use]
    pub fn upgrade(&self) -> Option<SharedSequence<T>> {
        self.storage.upgrade().map(|storage| SharedSequence { storage })
    }

    /// Returns `true` when the storage is gone and
    /// [`upgrade`](Self::upgrade) would fail.
    #[inline]
    #[must_use]
    pub fn is_dangling(&self) -> bool {
        self.storage.strong_count() == 0
    }
}

impl<T> Clone for WeakSequence<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            storage: WeakCounter::clone(&self.storage),
        }
    }
}

impl<T> fmt::Debug for WeakSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("WeakSequence")
            .field("dangling", &self.is_dangling())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
