//! Per-cell state of the contact-neighbourhood grid.

use std::fmt;

/// Whether a contact neighbourhood holds yarn, and how firmly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActualizationValue {
    /// Empty: no yarn rests here.
    Ecn,
    /// Potential: a loop may rest here once something holds it.
    Pcn,
    /// Actualized: a loop rests here.
    Acn,
    /// Unanchored: a loop was placed here but nothing above holds it yet.
    Uacn,
}

impl ActualizationValue {
    /// Short upper-case name (`ECN`, `PCN`, `ACN`, `UACN`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ecn => "ECN",
            Self::Pcn => "PCN",
            Self::Acn => "ACN",
            Self::Uacn => "UACN",
        }
    }

    /// `true` for `ACN` and `PCN`, the states a head is always drawn at.
    pub fn is_anchored(self) -> bool {
        matches!(self, Self::Acn | Self::Pcn)
    }
}

impl fmt::Display for ActualizationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Displacement of a loop from its nominal contact cell.
///
/// `drow > 0` means the loop was lifted by that many rows (held by a
/// miss or tuck above). `(0, -1)` marks a cell skipped by a miss.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MovementVector {
    /// Column displacement.
    pub dcol: i32,
    /// Row displacement.
    pub drow: i32,
}

impl MovementVector {
    /// No displacement.
    pub const ZERO: Self = Self { dcol: 0, drow: 0 };

    /// Marker left in the cell above a missed needle.
    pub const SKIPPED: Self = Self { dcol: 0, drow: -1 };

    /// Construct a vector.
    pub const fn new(dcol: i32, drow: i32) -> Self {
        Self { dcol, drow }
    }

    /// Same column displacement, new row displacement.
    pub fn with_drow(self, drow: i32) -> Self {
        Self { drow, ..self }
    }
}

impl fmt::Display for MovementVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.dcol, self.drow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchored_states() {
        assert!(ActualizationValue::Acn.is_anchored());
        assert!(ActualizationValue::Pcn.is_anchored());
        assert!(!ActualizationValue::Uacn.is_anchored());
        assert!(!ActualizationValue::Ecn.is_anchored());
    }

    #[test]
    fn display_honours_width() {
        assert_eq!(format!("{:<4}|", ActualizationValue::Acn), "ACN |");
    }

    #[test]
    fn movement_defaults_to_zero() {
        assert_eq!(MovementVector::default(), MovementVector::ZERO);
        assert_eq!(MovementVector::ZERO.with_drow(2), MovementVector::new(0, 2));
        assert_eq!(MovementVector::SKIPPED.to_string(), "(0,-1)");
    }
}
