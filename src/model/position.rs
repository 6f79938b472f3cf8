use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported position class: '{0}'")]
pub struct ParsePositionClassError(String);

/// Class of a position slot around the central atom.
///
/// Every position key starts with the one-letter prefix of its class
/// (`c0`, `p3`, `a1`, `e2`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PositionClass {
    Central,
    Peripheral,
    Axial,
    Equatorial,
}

impl PositionClass {
    /// Classes compared label-by-label by the grader, in visiting order.
    pub const GRADED: [PositionClass; 3] = [
        PositionClass::Peripheral,
        PositionClass::Equatorial,
        PositionClass::Axial,
    ];

    /// Key of the single central-atom slot.
    pub const CENTRAL_KEY: &'static str = "c0";

    pub fn prefix(&self) -> char {
        match self {
            PositionClass::Central => 'c',
            PositionClass::Peripheral => 'p',
            PositionClass::Axial => 'a',
            PositionClass::Equatorial => 'e',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PositionClass::Central => "central",
            PositionClass::Peripheral => "peripheral",
            PositionClass::Axial => "axial",
            PositionClass::Equatorial => "equatorial",
        }
    }

    #[inline]
    pub fn matches(&self, key: &str) -> bool {
        key.starts_with(self.prefix())
    }

    /// Returns the class a position key belongs to, if its prefix is known.
    pub fn of_key(key: &str) -> Option<Self> {
        let first = key.chars().next()?;
        Self::from_prefix(first)
    }

    fn from_prefix(c: char) -> Option<Self> {
        match c {
            'c' => Some(PositionClass::Central),
            'p' => Some(PositionClass::Peripheral),
            'a' => Some(PositionClass::Axial),
            'e' => Some(PositionClass::Equatorial),
            _ => None,
        }
    }
}

impl fmt::Display for PositionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PositionClass {
    type Err = ParsePositionClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(class) = Self::from_prefix(c)
        {
            return Ok(class);
        }
        match s.to_ascii_lowercase().as_str() {
            "central" => Ok(PositionClass::Central),
            "peripheral" => Ok(PositionClass::Peripheral),
            "axial" => Ok(PositionClass::Axial),
            "equatorial" => Ok(PositionClass::Equatorial),
            _ => Err(ParsePositionClassError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_matches_keys_of_its_class() {
        assert!(PositionClass::Axial.matches("a0"));
        assert!(PositionClass::Axial.matches("a12"));
        assert!(!PositionClass::Axial.matches("e0"));
        assert!(PositionClass::Central.matches(PositionClass::CENTRAL_KEY));
    }

    #[test]
    fn of_key_recognizes_known_prefixes() {
        assert_eq!(PositionClass::of_key("p3"), Some(PositionClass::Peripheral));
        assert_eq!(PositionClass::of_key("e1"), Some(PositionClass::Equatorial));
        assert_eq!(PositionClass::of_key("x0"), None);
        assert_eq!(PositionClass::of_key(""), None);
    }

    #[test]
    fn from_str_accepts_prefix_and_name() {
        assert_eq!("a".parse::<PositionClass>(), Ok(PositionClass::Axial));
        assert_eq!("Axial".parse::<PositionClass>(), Ok(PositionClass::Axial));
        assert_eq!(
            "equatorial".parse::<PositionClass>(),
            Ok(PositionClass::Equatorial)
        );
        assert_eq!("c".parse::<PositionClass>(), Ok(PositionClass::Central));
    }

    #[test]
    fn from_str_invalid() {
        let err = "z".parse::<PositionClass>().unwrap_err();
        assert_eq!(err, ParsePositionClassError("z".to_string()));
        assert!("".parse::<PositionClass>().is_err());
        assert!("ax".parse::<PositionClass>().is_err());
    }

    #[test]
    fn display_uses_long_name() {
        assert_eq!(PositionClass::Peripheral.to_string(), "peripheral");
        assert_eq!(PositionClass::Central.to_string(), "central");
    }

    #[test]
    fn graded_classes_exclude_central() {
        assert!(!PositionClass::GRADED.contains(&PositionClass::Central));
        assert_eq!(PositionClass::GRADED.len(), 3);
    }
}
