//! Reading, writing, and building [`Answer`] values.
//!
//! Answers travel as JSON objects with two fields:
//!
//! ```json
//! {"geometry": "AX4E0", "atoms": {"c0": "N", "p0": "H", "p1": "(ep)", "p2": "H", "p3": "H"}}
//! ```
//!
//! Every function here yields the canonical form: atoms sorted by key in
//! ascending lexical order, geometry label untouched.

use std::io::{Read, Write};

pub mod error;

pub use error::Error;

use crate::model::answer::Answer;

/// Parses a serialized answer into its canonical form.
///
/// # Errors
///
/// Returns [`Error::Parse`] if `raw` is not valid JSON, is missing the
/// `geometry` or `atoms` field, or a field has the wrong type.
///
/// # Examples
///
/// ```
/// use vsepr_grade::io::parse_answer;
///
/// let answer = parse_answer(r#"{"geometry":"AX2E0","atoms":{"p1":"F","c0":"Be","p0":"F"}}"#)?;
/// let keys: Vec<_> = answer.atoms.keys().cloned().collect();
/// assert_eq!(keys, ["c0", "p0", "p1"]);
/// # Ok::<(), vsepr_grade::io::Error>(())
/// ```
pub fn parse_answer(raw: &str) -> Result<Answer, Error> {
    serde_json::from_str(raw).map_err(Error::parse)
}

/// Parses a serialized answer from raw bytes.
///
/// Bytes that are not valid UTF-8 are reported as [`Error::Parse`].
pub fn parse_answer_slice(raw: &[u8]) -> Result<Answer, Error> {
    serde_json::from_slice(raw).map_err(Error::parse)
}

/// Reads a single answer from `reader`.
pub fn read_answer<R: Read>(reader: R) -> Result<Answer, Error> {
    serde_json::from_reader(reader).map_err(Error::parse)
}

/// Builds the canonical reference answer for a geometry and its atoms.
///
/// Repeated keys keep the last label given.
pub fn build_reference_answer<I, K, V>(geometry: impl Into<String>, atoms: I) -> Answer
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    Answer::new(geometry, atoms)
}

/// Serializes an answer to compact canonical JSON.
pub fn to_json(answer: &Answer) -> Result<String, Error> {
    serde_json::to_string(answer).map_err(|source| Error::Serialize { source })
}

/// Writes an answer as pretty-printed JSON followed by a newline.
pub fn write_answer<W: Write>(mut writer: W, answer: &Answer) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut writer, answer)
        .map_err(|source| Error::Serialize { source })?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::error::Error as _;

    fn source_text(err: &Error) -> String {
        err.source().map(|s| s.to_string()).unwrap_or_default()
    }

    #[test]
    fn parse_sorts_atoms_and_keeps_geometry() {
        let answer =
            parse_answer(r#"{"geometry":"AX4E0","atoms":{"p3":"H","c0":"N","p1":"(ep)","p0":"H","p2":"H"}}"#)
                .unwrap();
        assert_eq!(answer.geometry, "AX4E0");
        let keys: Vec<_> = answer.atoms.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["c0", "p0", "p1", "p2", "p3"]);
        assert_eq!(answer.label("p1"), Some("(ep)"));
    }

    #[test]
    fn parse_ignores_extra_fields() {
        let answer =
            parse_answer(r#"{"geometry":"AX2E0","atoms":{"c0":"Be"},"student":"x"}"#).unwrap();
        assert_eq!(answer.central(), Some("Be"));
    }

    #[test]
    fn parse_accepts_whitespace() {
        let raw = "{\n  \"geometry\": \"AX4E0\",\n  \"atoms\": {\"c0\": \"N\", \"p3\": \"H\"}\n}";
        let answer = parse_answer(raw).unwrap();
        assert_eq!(answer.atom_count(), 2);
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = parse_answer(r#"{"geometry":"AX4E0","atoms":{"c0":"N""#).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.is_syntax());
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn parse_rejects_missing_fields() {
        let err = parse_answer(r#"{"atoms":{"c0":"N"}}"#).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(source_text(&err).contains("geometry"));

        let err = parse_answer(r#"{"geometry":"AX4E0"}"#).unwrap_err();
        assert!(source_text(&err).contains("atoms"));
    }

    #[test]
    fn parse_rejects_non_string_labels() {
        let err = parse_answer(r#"{"geometry":"AX2E0","atoms":{"c0":4}}"#).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(!err.is_syntax());
    }

    #[test]
    fn parse_slice_matches_parse_str() {
        let raw = r#"{"geometry":"AX2E0","atoms":{"p0":"F","c0":"Be"}}"#;
        assert_eq!(
            parse_answer_slice(raw.as_bytes()).unwrap(),
            parse_answer(raw).unwrap()
        );
    }

    #[test]
    fn parse_slice_rejects_invalid_utf8() {
        let err = parse_answer_slice(b"\xff\xfe").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));

        let err = parse_answer_slice(b"{\"geometry\":\"AX\xff\",\"atoms\":{}}").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn read_answer_from_reader() {
        let raw = br#"{"geometry":"AX3E0","atoms":{"c0":"B","p0":"F","p1":"F","p2":"F"}}"#;
        let answer = read_answer(&raw[..]).unwrap();
        assert_eq!(answer.geometry, "AX3E0");
        assert_eq!(answer.atom_count(), 4);
    }

    #[test]
    fn build_sorts_hash_map_input() {
        let atoms: HashMap<&str, &str> =
            [("e1", "H"), ("a0", "(ep)"), ("c0", "Br"), ("e0", "H"), ("a1", "test")]
                .into_iter()
                .collect();
        let answer = build_reference_answer("AX6E0", atoms);
        let keys: Vec<_> = answer.atoms.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a0", "a1", "c0", "e0", "e1"]);
    }

    #[test]
    fn serialized_reference_parses_back_in_key_order() {
        let reference =
            build_reference_answer("AX4E0", [("p2", "H"), ("p0", "H"), ("c0", "N"), ("p1", "(ep)")]);
        let json = to_json(&reference).unwrap();
        assert_eq!(
            json,
            r#"{"geometry":"AX4E0","atoms":{"c0":"N","p0":"H","p1":"(ep)","p2":"H"}}"#
        );
        assert_eq!(parse_answer(&json).unwrap(), reference);
    }

    #[test]
    fn write_answer_is_pretty_with_trailing_newline() {
        let answer = build_reference_answer("AX2E0", [("c0", "Be")]);
        let mut buf = Vec::new();
        write_answer(&mut buf, &answer).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\n  \"geometry\": \"AX2E0\""));
        assert_eq!(parse_answer(&text).unwrap(), answer);
    }
}
