//! Heterogeneous sortable entries with a rank-then-label order.
//!
//! A farm roster mixes students, cows, and grass patches. Each kind carries
//! a fixed rank and a display label; a roll call lists everything rank
//! first, then by case-insensitive label. The kinds form a closed set, so
//! they are a single enum rather than an open trait hierarchy.
//!
//! # Examples
//!
//! ```rust
//! use cowbox::scenarios::farm::{FarmEntry, roll_call};
//!
//! let mut roster = vec![
//!     FarmEntry::grass("Bermuda"),
//!     FarmEntry::student("Bob", "Shmob"),
//!     FarmEntry::cow(Some("Burenka")),
//! ];
//!
//! let labels = roll_call(&mut roster);
//! assert_eq!(labels, vec!["Bob Shmob", "Burenka", "Grass: Bermuda"]);
//! ```

use std::cmp::Ordering;
use std::fmt;

// =============================================================================
// FarmEntry Definition
// =============================================================================

/// One entry in the farm roster.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FarmEntry {
    /// A student, listed by full name.
    Student {
        /// Given name.
        first_name: String,
        /// Family name.
        last_name: String,
    },
    /// A cow, listed by name when it has one.
    Cow {
        /// The cow's name, if anyone bothered to give it one.
        name: Option<String>,
    },
    /// A patch of grass, listed by variety.
    Grass {
        /// The grass variety.
        variety: String,
    },
}

impl FarmEntry {
    /// Creates a student entry.
    #[inline]
    #[must_use]
    pub fn student(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self::Student {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Creates a cow entry, named or anonymous.
    #[inline]
    #[must_use]
    pub fn cow(name: Option<&str>) -> Self {
        Self::Cow {
            name: name.map(str::to_owned),
        }
    }

    /// Creates a grass entry.
    #[inline]
    #[must_use]
    pub fn grass(variety: impl Into<String>) -> Self {
        Self::Grass {
            variety: variety.into(),
        }
    }

    /// Returns the entry's rank: students first, then cows, then grass.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Student { .. } => 1,
            Self::Cow { .. } => 2,
            Self::Grass { .. } => 3,
        }
    }

    /// Returns the entry's display label.
    ///
    /// An anonymous cow is labeled `"a cow"`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Student {
                first_name,
                last_name,
            } => format!("{first_name} {last_name}"),
            Self::Cow { name } => name.clone().unwrap_or_else(|| "a cow".to_owned()),
            Self::Grass { variety } => format!("Grass: {variety}"),
        }
    }

    /// Compares two entries by rank, then by case-insensitive label.
    #[must_use]
    pub fn roster_order(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.label().to_lowercase().cmp(&other.label().to_lowercase()))
    }
}

impl fmt::Display for FarmEntry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.label())
    }
}

// =============================================================================
// Roll Call
// =============================================================================

/// Sorts the roster in place and returns the labels in roster order.
///
/// Ordering is rank first (students, cows, grass), then case-insensitive
/// label within a rank.
///
/// # Examples
///
/// ```rust
/// use cowbox::scenarios::farm::{FarmEntry, roll_call};
///
/// let mut roster = vec![FarmEntry::cow(None), FarmEntry::cow(Some("Burenka"))];
/// assert_eq!(roll_call(&mut roster), vec!["a cow", "Burenka"]);
/// ```
pub fn roll_call(roster: &mut [FarmEntry]) -> Vec<String> {
    roster.sort_by(FarmEntry::roster_order);
    roster.iter().map(FarmEntry::label).collect()
}

// =============================================================================
// Tests
// =============================================================================
