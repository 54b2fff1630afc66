//! Error types for box construction.

use std::fmt;

/// The storage behind a handle is gone.
///
/// Raised when constructing a box from a [`WeakSequence`](super::WeakSequence)
/// whose every owning handle has been dropped. Surfaced immediately at
/// construction; nothing recovers it internally.
///
/// # Examples
///
/// ```rust
/// use cowbox::cow::InvalidHandleError;
///
/// let error = InvalidHandleError { operation: "try_wrap" };
/// assert_eq!(
///     format!("{}", error),
///     "CowBox::try_wrap: storage handle is dangling (every owning handle was dropped)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidHandleError {
    /// The name of the constructor that received the dangling handle.
    pub operation: &'static str,
}

impl fmt::Display for InvalidHandleError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "CowBox::{}: storage handle is dangling (every owning handle was dropped)",
            self.operation
        )
    }
}

impl std::error::Error for InvalidHandleError {}
