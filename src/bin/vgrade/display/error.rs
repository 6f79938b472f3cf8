use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Vec<String> {
    let mut hints = Vec::new();

    if let Some(io_err) = err.downcast_ref::<vsepr_grade::io::Error>() {
        answer_io_hints(io_err, &mut hints);
    } else if let Some(grade_err) = err.downcast_ref::<vsepr_grade::GradeError>() {
        grade_hints(grade_err, &mut hints);
    } else if let Some(source) = err.downcast_ref::<std::io::Error>() {
        std_io_hints(source, &mut hints);
    } else if err.downcast_ref::<toml::de::Error>().is_some() {
        hints.push("Grading config must be TOML with boolean keys".into());
        hints.push(
            "Known keys: ignore_axial_order, ignore_peripheral_order, ignore_equatorial_order"
                .into(),
        );
    } else {
        fallback_hints(err, &mut hints);
    }

    hints
}

fn answer_io_hints(err: &vsepr_grade::io::Error, hints: &mut Vec<String>) {
    use vsepr_grade::io::Error as IoError;

    match err {
        IoError::Io { source } => std_io_hints(source, hints),

        IoError::Parse { .. } => {
            if let Some(line) = err.line() {
                hints.push(format!("Parser stopped near line {line}"));
            }
            if err.is_syntax() {
                hints.push("The input is not well-formed JSON".into());
                hints.push("Check for missing quotes, commas, or braces".into());
            } else {
                hints.push(
                    r#"An answer looks like {"geometry": "AX4E0", "atoms": {"c0": "N", ...}}"#
                        .into(),
                );
                hints.push("Both fields are required and every label must be a string".into());
            }
        }

        IoError::Serialize { .. } => {
            hints.push("Answer could not be written as JSON".into());
        }
    }
}

fn grade_hints(err: &vsepr_grade::GradeError, hints: &mut Vec<String>) {
    use vsepr_grade::Side;

    let side = err.side();
    hints.push(format!("Every {side} answer needs a central atom under key 'c0'"));
    match side {
        Side::Candidate => hints.push("Check the answer submitted for grading".into()),
        Side::Reference => {
            hints.push("Rebuild the reference with `vgrade build -a c0=<LABEL> ...`".into())
        }
    }
    hints.push("Position keys are c0, p<n>, a<n>, and e<n>".into());
}

fn std_io_hints(source: &std::io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("File or directory not found".into());
            hints.push("Check the path spelling and ensure the file exists".into());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Permission denied accessing the file".into());
            hints.push("Check file permissions with `ls -la`".into());
        }
        ErrorKind::InvalidData => {
            hints.push("Input is not valid UTF-8 text".into());
        }
        ErrorKind::BrokenPipe => {
            hints.push("Output consumer terminated early".into());
            hints.push("This may occur when piping to commands like `head`".into());
        }
        _ => {
            hints.push("Check file path, permissions, and disk space".into());
        }
    }
}

fn fallback_hints(err: &Error, hints: &mut Vec<String>) {
    let msg = err.to_string().to_lowercase();

    if msg.contains("terminal") || msg.contains("stdin") {
        hints.push("Provide the answer via -i/--input or pipe it to stdin".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vsepr_grade::{GradeError, Side};

    #[test]
    fn missing_central_atom_hints_name_the_side() {
        let err = Error::from(GradeError::missing_central_atom(Side::Reference));
        let hints = collect_hints(&err);
        assert_eq!(
            hints[0],
            "Every reference answer needs a central atom under key 'c0'"
        );
        assert!(hints[1].contains("vgrade build"));

        let err = Error::from(GradeError::missing_central_atom(Side::Candidate));
        let hints = collect_hints(&err);
        assert!(hints[0].starts_with("Every candidate answer"));
        assert!(!hints.iter().any(|h| h.contains("vgrade build")));
    }

    #[test]
    fn parse_error_hints_point_at_shape() {
        let err = Error::from(vsepr_grade::io::parse_answer(r#"{"atoms":{}}"#).unwrap_err());
        let hints = collect_hints(&err);
        assert!(hints.iter().any(|h| h.contains("Both fields are required")));
    }
}
