//! Error types for grading.
//!
//! Grading mismatches are ordinary results; the only failure is a lookup
//! of the central-atom slot that one of the answers does not have.

use std::fmt;

use thiserror::Error;

/// Which answer of a grading call an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Candidate,
    Reference,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Candidate => write!(f, "candidate"),
            Side::Reference => write!(f, "reference"),
        }
    }
}

/// Errors that can occur while grading an answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The central-atom key `c0` is absent.
    ///
    /// Reported for the candidate first when neither answer has it. Never
    /// raised when the geometry labels already differ.
    #[error("{side} answer has no central atom (missing key 'c0')")]
    MissingCentralAtom {
        /// The answer lacking `c0`.
        side: Side,
    },
}

impl Error {
    pub fn missing_central_atom(side: Side) -> Self {
        Self::MissingCentralAtom { side }
    }

    pub fn side(&self) -> Side {
        match self {
            Error::MissingCentralAtom { side } => *side,
        }
    }
}
