//! Data structures describing VSEPR answers.
//!
//! - [`answer`] – Geometry label plus the ordered position → label mapping.
//! - [`position`] – Position classes (central, peripheral, axial, equatorial)
//!   and their key prefixes.
//!
//! Both candidate and reference answers share the same [`Answer`] type; the
//! grader treats them symmetrically except for which side is reported in
//! errors.
//!
//! [`Answer`]: answer::Answer

pub mod answer;
pub mod position;
