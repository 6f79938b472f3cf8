//! Order-sensitivity settings for grading.
//!
//! Each graded position class can be compared either as an ordered sequence
//! (the default) or as a multiset of labels. The central atom and the
//! geometry label are always compared exactly.

use serde::Deserialize;

use crate::model::position::PositionClass;

/// Configuration for the [`grade`](super::grade) predicate.
///
/// Deserializable from TOML (or any serde format); omitted fields default
/// to `false`.
///
/// # Examples
///
/// ```
/// use vsepr_grade::{GradeConfig, PositionClass};
///
/// let config = GradeConfig::default()
///     .with_ignore_axial_order(true)
///     .with_ignore_equatorial_order(true);
///
/// assert!(config.ignores_order(PositionClass::Axial));
/// assert!(!config.ignores_order(PositionClass::Peripheral));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradeConfig {
    /// Compare axial (`a*`) labels as a multiset.
    pub ignore_axial_order: bool,

    /// Compare peripheral (`p*`) labels as a multiset.
    pub ignore_peripheral_order: bool,

    /// Compare equatorial (`e*`) labels as a multiset.
    pub ignore_equatorial_order: bool,
}

impl GradeConfig {
    pub fn with_ignore_axial_order(mut self, ignore: bool) -> Self {
        self.ignore_axial_order = ignore;
        self
    }

    pub fn with_ignore_peripheral_order(mut self, ignore: bool) -> Self {
        self.ignore_peripheral_order = ignore;
        self
    }

    pub fn with_ignore_equatorial_order(mut self, ignore: bool) -> Self {
        self.ignore_equatorial_order = ignore;
        self
    }

    /// Whether labels of `class` are compared without regard to order.
    ///
    /// The central slot is never order-insensitive.
    pub fn ignores_order(&self, class: PositionClass) -> bool {
        match class {
            PositionClass::Central => false,
            PositionClass::Peripheral => self.ignore_peripheral_order,
            PositionClass::Axial => self.ignore_axial_order,
            PositionClass::Equatorial => self.ignore_equatorial_order,
        }
    }
}
