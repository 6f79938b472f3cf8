use std::fmt;

use crate::model::position::PositionClass;

/// Outcome of grading one candidate answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect(Mismatch),
}

impl Verdict {
    #[inline]
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }

    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            Verdict::Correct => None,
            Verdict::Incorrect(m) => Some(m),
        }
    }
}

impl From<Mismatch> for Verdict {
    fn from(m: Mismatch) -> Self {
        Verdict::Incorrect(m)
    }
}

/// The first check a candidate answer failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// Geometry labels differ.
    Geometry { expected: String, found: String },

    /// Central-atom labels differ.
    CentralAtom { expected: String, found: String },

    /// A class has a different number of positions.
    Count {
        class: PositionClass,
        expected: usize,
        found: usize,
    },

    /// A class has the same number of positions but different labels
    /// (as a sequence when `order_sensitive`, otherwise as a multiset).
    Labels {
        class: PositionClass,
        order_sensitive: bool,
    },
}

impl Mismatch {
    /// The position class involved, if the mismatch is class-specific.
    pub fn class(&self) -> Option<PositionClass> {
        match self {
            Mismatch::Geometry { .. } => None,
            Mismatch::CentralAtom { .. } => Some(PositionClass::Central),
            Mismatch::Count { class, .. } | Mismatch::Labels { class, .. } => Some(*class),
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Geometry { expected, found } => {
                write!(f, "geometry is '{found}', expected '{expected}'")
            }
            Mismatch::CentralAtom { expected, found } => {
                write!(f, "central atom is '{found}', expected '{expected}'")
            }
            Mismatch::Count {
                class,
                expected,
                found,
            } => write!(f, "{class} positions: found {found}, expected {expected}"),
            Mismatch::Labels {
                class,
                order_sensitive: true,
            } => write!(f, "{class} labels differ or are out of order"),
            Mismatch::Labels {
                class,
                order_sensitive: false,
            } => write!(f, "{class} labels differ"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_accessors() {
        assert!(Verdict::Correct.is_correct());
        assert!(Verdict::Correct.mismatch().is_none());

        let verdict: Verdict = Mismatch::Labels {
            class: PositionClass::Axial,
            order_sensitive: true,
        }
        .into();
        assert!(!verdict.is_correct());
        assert_eq!(
            verdict.mismatch().and_then(Mismatch::class),
            Some(PositionClass::Axial)
        );
    }

    #[test]
    fn mismatch_display() {
        let geometry = Mismatch::Geometry {
            expected: "AX4E0".into(),
            found: "AX3E0".into(),
        };
        assert_eq!(geometry.to_string(), "geometry is 'AX3E0', expected 'AX4E0'");
        assert_eq!(geometry.class(), None);

        let count = Mismatch::Count {
            class: PositionClass::Equatorial,
            expected: 4,
            found: 3,
        };
        assert_eq!(count.to_string(), "equatorial positions: found 3, expected 4");

        let labels = Mismatch::Labels {
            class: PositionClass::Peripheral,
            order_sensitive: false,
        };
        assert_eq!(labels.to_string(), "peripheral labels differ");
    }
}
