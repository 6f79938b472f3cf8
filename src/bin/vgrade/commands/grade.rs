use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use vsepr_grade::{Mismatch, Verdict, evaluate};

use super::Outcome;
use crate::cli::GradeArgs;
use crate::config::build_grade_config;
use crate::display::Context as DisplayContext;
use crate::io::{open_input, read_reference, stdin_is_tty};

pub fn run_grade(args: GradeArgs, _ctx: DisplayContext) -> Result<Outcome> {
    if args.io.input.is_none() && stdin_is_tty() {
        bail!(
            "No answer file specified and stdin is a terminal.\n\nUsage: vgrade grade -r <REFERENCE> -i <ANSWER> or pipe the answer via stdin."
        );
    }

    let config = build_grade_config(&args.order)?;
    let reference = read_reference(&args.io.reference)?;

    let input = open_input(args.io.input.as_deref())?;
    let candidate = vsepr_grade::io::read_answer(input).context("Invalid candidate answer")?;

    let verdict = evaluate(&candidate, &reference, &config)?;
    tracing::info!(
        correct = verdict.is_correct(),
        class = ?verdict.mismatch().and_then(Mismatch::class),
        "graded answer"
    );

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", verdict_line(&verdict))?;

    Ok(if verdict.is_correct() {
        Outcome::Correct
    } else {
        Outcome::Incorrect
    })
}

pub(super) fn verdict_line(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Correct => "correct".to_string(),
        Verdict::Incorrect(mismatch) => format!("incorrect: {mismatch}"),
    }
}
