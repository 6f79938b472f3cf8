use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::position::PositionClass;

/// A VSEPR arrangement: a geometry label plus the label placed at each
/// position slot.
///
/// Atoms are kept in a [`BTreeMap`], so iteration always follows ascending
/// lexical key order (`a0 < a1 < a10 < a2`). That order is the positional
/// order used by order-sensitive grading.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Answer {
    pub geometry: String,
    pub atoms: BTreeMap<String, String>,
}

impl Answer {
    pub fn new<I, K, V>(geometry: impl Into<String>, atoms: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            geometry: geometry.into(),
            atoms: atoms
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.atoms.get(key).map(String::as_str)
    }

    #[inline]
    pub fn central(&self) -> Option<&str> {
        self.label(PositionClass::CENTRAL_KEY)
    }

    /// Labels of one class, in canonical key order.
    pub fn labels_of(&self, class: PositionClass) -> Vec<&str> {
        self.atoms
            .iter()
            .filter(|(key, _)| class.matches(key))
            .map(|(_, label)| label.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_atoms_by_key() {
        let answer = Answer::new("AX4E0", [("p1", "(ep)"), ("c0", "N"), ("p0", "H")]);
        let keys: Vec<_> = answer.atoms.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["c0", "p0", "p1"]);
        assert_eq!(answer.geometry, "AX4E0");
    }

    #[test]
    fn new_keeps_last_value_for_repeated_key() {
        let answer = Answer::new("AX2E0", [("c0", "Be"), ("c0", "C")]);
        assert_eq!(answer.atom_count(), 1);
        assert_eq!(answer.central(), Some("C"));
    }

    #[test]
    fn labels_of_follows_lexical_key_order() {
        let answer = Answer::new(
            "AX6E0",
            [("a2", "z"), ("a10", "y"), ("a0", "x"), ("e0", "H"), ("c0", "S")],
        );
        assert_eq!(answer.labels_of(PositionClass::Axial), vec!["x", "y", "z"]);
        assert_eq!(answer.labels_of(PositionClass::Equatorial), vec!["H"]);
        assert!(answer.labels_of(PositionClass::Peripheral).is_empty());
    }

    #[test]
    fn central_is_none_without_c0() {
        let answer = Answer::new("AX2E0", [("p0", "H")]);
        assert_eq!(answer.central(), None);
        assert_eq!(answer.label("p0"), Some("H"));
    }
}
