//! Grading of VSEPR molecular geometry answers.
//!
//! A student describes the arrangement of atoms and lone electron pairs
//! around a central atom as a geometry label (such as `AX4E0`) plus a set of
//! labelled position slots. This crate compares such an answer against a
//! reference arrangement, with per-class control over whether the order of
//! peripheral, axial, and equatorial positions matters.
//!
//! # Quick Start
//!
//! ```
//! use vsepr_grade::io::{build_reference_answer, parse_answer};
//! use vsepr_grade::{GradeConfig, GradeError, grade};
//!
//! // Ammonia: three hydrogens and one lone pair around nitrogen
//! let reference = build_reference_answer(
//!     "AX4E0",
//!     [("c0", "N"), ("p0", "H"), ("p1", "(ep)"), ("p2", "H"), ("p3", "H")],
//! );
//!
//! // Same labels, lone pair in a different slot
//! let candidate = parse_answer(
//!     r#"{"geometry":"AX4E0","atoms":{"c0":"N","p0":"H","p1":"H","p2":"(ep)","p3":"H"}}"#,
//! )
//! .expect("valid answer");
//!
//! assert!(!grade(&candidate, &reference, &GradeConfig::default())?);
//!
//! let relaxed = GradeConfig::default().with_ignore_peripheral_order(true);
//! assert!(grade(&candidate, &reference, &relaxed)?);
//! # Ok::<(), GradeError>(())
//! ```
//!
//! # Position Keys
//!
//! Atom keys are a class letter followed by an index:
//!
//! - `c0` — the central atom (exactly one)
//! - `p0`, `p1`, … — peripheral positions
//! - `a0`, `a1`, … — axial positions
//! - `e0`, `e1`, … — equatorial positions
//!
//! Within a class, answers are compared in ascending lexical key order.
//! The label `(ep)` marks a lone electron pair and is compared like any other
//! label.
//!
//! # Module Organization
//!
//! - [`io`] — JSON parsing, serialization, and reference construction
//! - [`grade()`] / [`evaluate()`] — The grading predicate
//! - [`GradeConfig`] — Per-class order sensitivity

mod grade;
mod model;

pub mod io;

pub use model::answer::Answer;
pub use model::position::{ParsePositionClassError, PositionClass};

pub use grade::{GradeConfig, Mismatch, Side, Verdict, evaluate, grade};

pub use grade::Error as GradeError;
