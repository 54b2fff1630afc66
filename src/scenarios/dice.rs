//! An extension trait over a built-in numeric type.
//!
//! [`GameDie`] retrofits die behavior onto plain integers: any `u8` can
//! report the pips it shows, say whether it is a legal face of a six-sided
//! die, and announce itself. The point of the exercise is the extension
//! itself — no new wrapper type, just behavior added to a primitive.
//!
//! # Examples
//!
//! ```rust
//! use cowbox::scenarios::dice::GameDie;
//!
//! let face: u8 = 4;
//! assert_eq!(face.pips(), 4);
//! assert!(face.is_face());
//! assert_eq!(face.announce(), "Rolled a 4");
//! ```

/// Die behavior for a numeric value.
pub trait GameDie: Copy {
    /// The number of pips showing.
    fn pips(self) -> u8;

    /// Returns `true` when the value is a legal face of a six-sided die.
    fn is_face(self) -> bool {
        (1..=6).contains(&self.pips())
    }

    /// Announces the roll.
    fn announce(self) -> String {
        format!("Rolled a {}", self.pips())
    }
}

impl GameDie for u8 {
    #[inline]
    fn pips(self) -> u8 {
        self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, true)]
    #[case(6, true)]
    #[case(0, false)]
    #[case(7, false)]
    fn test_is_face_bounds(#[case] value: u8, #[case] expected: bool) {
        assert_eq!(value.is_face(), expected);
    }

    #[rstest]
    fn test_pips_is_identity_for_u8() {
        assert_eq!(4_u8.pips(), 4);
    }

    #[rstest]
    fn test_announce() {
        assert_eq!(4_u8.announce(), "Rolled a 4");
    }
}
