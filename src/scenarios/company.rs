//! A capacity-bounded task allocation counter.
//!
//! A [`Company`] has a fixed headcount and hands out specialists to coding
//! tasks, one platform at a time. Assignments stack: the most recent one is
//! released first when a task ships. Asking for more specialists than remain
//! available is refused with a typed error carrying the shortfall.
//!
//! # Examples
//!
//! ```rust
//! use cowbox::scenarios::company::{Company, Platform};
//!
//! let mut company = Company::new(50);
//! company.assign(Platform::Ios, 45).unwrap();
//!
//! let refusal = company.assign(Platform::Android, 10).unwrap_err();
//! assert_eq!(refusal.available, 5);
//!
//! company.finish_latest();
//! assert!(company.assign(Platform::Android, 10).is_ok());
//! ```

use std::fmt;

// =============================================================================
// Platform
// =============================================================================

/// The target platform of a coding task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    /// Apple's mobile platform.
    Ios,
    /// Google's mobile platform.
    Android,
    /// The browser.
    Web,
}

impl fmt::Display for Platform {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ios => write!(formatter, "iOS"),
            Self::Android => write!(formatter, "Android"),
            Self::Web => write!(formatter, "Web"),
        }
    }
}

// =============================================================================
// NotEnoughSpecialistsError
// =============================================================================

/// An assignment was refused for lack of available specialists.
///
/// # Examples
///
/// ```rust
/// use cowbox::scenarios::company::{NotEnoughSpecialistsError, Platform};
///
/// let error = NotEnoughSpecialistsError {
///     platform: Platform::Android,
///     requested: 10,
///     available: 5,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "not enough specialists for the Android task: requested 10, 5 available"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotEnoughSpecialistsError {
    /// The platform the refused task targeted.
    pub platform: Platform,
    /// How many specialists the task asked for.
    pub requested: u32,
    /// How many specialists were still unassigned.
    pub available: u32,
}

impl fmt::Display for NotEnoughSpecialistsError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "not enough specialists for the {} task: requested {}, {} available",
            self.platform, self.requested, self.available
        )
    }
}

impl std::error::Error for NotEnoughSpecialistsError {}

// =============================================================================
// Company Definition
// =============================================================================

/// A company allocating a fixed headcount across stacked assignments.
///
/// Invariant: the assignments never total more than the headcount. Every
/// constructor upholds it, including deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Company {
    headcount: u32,
    assignments: Vec<u32>,
}

impl Company {
    /// Creates a company with the given headcount and no assignments.
    #[inline]
    #[must_use]
    pub const fn new(headcount: u32) -> Self {
        Self {
            headcount,
            assignments: Vec::new(),
        }
    }

    /// Returns the total headcount.
    #[inline]
    #[must_use]
    pub const fn headcount(&self) -> u32 {
        self.headcount
    }

    /// Returns the number of specialists not currently assigned.
    #[must_use]
    pub fn available(&self) -> u32 {
        self.headcount - self.assignments.iter().sum::<u32>()
    }

    /// Returns the number of assignments currently in flight.
    #[inline]
    #[must_use]
    pub fn active_assignments(&self) -> usize {
        self.assignments.len()
    }

    /// Assigns `specialists` people to a task for `platform`.
    ///
    /// # Errors
    ///
    /// Returns [`NotEnoughSpecialistsError`] when fewer than `specialists`
    /// people are available; the company is left unchanged.
    pub fn assign(
        &mut self,
        platform: Platform,
        specialists: u32,
    ) -> Result<(), NotEnoughSpecialistsError> {
        let available = self.available();
        if specialists > available {
            return Err(NotEnoughSpecialistsError {
                platform,
                requested: specialists,
                available,
            });
        }
        self.assignments.push(specialists);
        Ok(())
    }

    /// Ships the most recent assignment, releasing its specialists.
    ///
    /// Returns the released count, or `None` when nothing was in flight.
    #[inline]
    pub fn finish_latest(&mut self) -> Option<u32> {
        self.assignments.pop()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Company {
    /// Deserializes a company, re-validating the allocation invariant.
    ///
    /// Input whose assignments total more than the headcount is rejected;
    /// accepting it would let [`Company::available`] underflow.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct RawCompany {
            headcount: u32,
            assignments: Vec<u32>,
        }

        let raw = RawCompany::deserialize(deserializer)?;
        let assigned = raw.assignments.iter().map(|&count| u64::from(count)).sum::<u64>();
        if assigned > u64::from(raw.headcount) {
            return Err(serde::de::Error::custom(format!(
                "assignments total {assigned} specialists but the headcount is {}",
                raw.headcount
            )));
        }
        Ok(Self {
            headcount: raw.headcount,
            assignments: raw.assignments,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
