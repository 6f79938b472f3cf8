use std::io::Write;

use anyhow::{Context, Result};
use vsepr_grade::io::{build_reference_answer, write_answer};
use vsepr_grade::{Answer, PositionClass};

use crate::cli::BuildArgs;
use crate::io::create_output;

pub fn run_build(args: BuildArgs) -> Result<()> {
    let answer = build_reference_answer(args.geometry, args.atoms);
    tracing::debug!(
        geometry = %answer.geometry,
        atoms = answer.atom_count(),
        "built reference answer"
    );
    if answer.central().is_none() {
        tracing::warn!("reference answer has no central atom 'c0'; grading against it will fail");
    }
    for key in ungraded_keys(&answer) {
        tracing::warn!(key, "position key has no known class prefix and is never graded");
    }

    let mut output = create_output(args.output.as_deref())?;
    write_answer(&mut output, &answer).context("Failed to write reference answer")?;
    output.flush()?;
    Ok(())
}

/// Keys whose prefix names no position class.
fn ungraded_keys(answer: &Answer) -> Vec<&str> {
    answer
        .atoms
        .keys()
        .map(String::as_str)
        .filter(|key| PositionClass::of_key(key).is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_canonical_answer_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reference.json");

        run_build(BuildArgs {
            geometry: "AX4E0".into(),
            atoms: vec![
                ("p1".into(), "(ep)".into()),
                ("c0".into(), "N".into()),
                ("p0".into(), "H".into()),
            ],
            output: Some(path.clone()),
        })
        .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let answer = vsepr_grade::io::parse_answer(&text).unwrap();
        let keys: Vec<_> = answer.atoms.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["c0", "p0", "p1"]);
        assert!(text.find("\"c0\"").unwrap() < text.find("\"p1\"").unwrap());
    }

    #[test]
    fn reports_keys_without_a_class() {
        let answer = build_reference_answer(
            "AX2E0",
            [("c0", "Be"), ("p0", "F"), ("x1", "F"), ("Q", "?")],
        );
        assert_eq!(ungraded_keys(&answer), vec!["Q", "x1"]);

        let answer = build_reference_answer("AX2E0", [("c0", "Be"), ("a0", "F"), ("e0", "F")]);
        assert!(ungraded_keys(&answer).is_empty());
    }
}
