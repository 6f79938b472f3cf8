use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use vsepr_grade::{Answer, GradeConfig, Mismatch, evaluate};

use super::Outcome;
use super::grade::verdict_line;
use crate::cli::BatchArgs;
use crate::config::build_grade_config;
use crate::display::{BatchProgress, Context as DisplayContext, print_summary};
use crate::io::{open_input, read_reference, stdin_is_tty};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub graded: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub errors: usize,
}

impl BatchSummary {
    pub fn outcome(&self) -> Outcome {
        if self.incorrect == 0 && self.errors == 0 {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        }
    }
}

pub fn run_batch(args: BatchArgs, ctx: DisplayContext) -> Result<Outcome> {
    if args.io.input.is_none() && stdin_is_tty() {
        bail!(
            "No answers file specified and stdin is a terminal.\n\nUsage: vgrade batch -r <REFERENCE> -i <ANSWERS.jsonl> or pipe answers via stdin."
        );
    }

    let config = build_grade_config(&args.order)?;
    let reference = read_reference(&args.io.reference)?;

    let input = open_input(args.io.input.as_deref())?;
    let lines = input
        .split(b'\n')
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read answers")?;

    let mut progress = BatchProgress::new(ctx.interactive, answer_count(&lines));
    let mut stdout = io::stdout().lock();
    let summary = grade_lines(&lines, &reference, &config, &mut stdout, &mut progress)?;
    stdout.flush()?;

    if ctx.interactive {
        progress.finish(&summary);
    } else if !args.io.quiet {
        print_summary(&summary, None);
    }

    Ok(summary.outcome())
}

fn is_blank(raw: &[u8]) -> bool {
    raw.trim_ascii().is_empty()
}

/// Number of lines that will be graded; blank lines are skipped.
fn answer_count(lines: &[Vec<u8>]) -> usize {
    lines.iter().filter(|raw| !is_blank(raw)).count()
}

/// Grades raw lines; a line that fails to decode or parse is counted as an
/// error and grading continues.
fn grade_lines<W: Write>(
    lines: &[Vec<u8>],
    reference: &Answer,
    config: &GradeConfig,
    out: &mut W,
    progress: &mut BatchProgress,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (idx, raw) in lines.iter().enumerate() {
        let line_no = idx + 1;
        if is_blank(raw) {
            continue;
        }

        let result = vsepr_grade::io::parse_answer_slice(raw)
            .map_err(anyhow::Error::from)
            .and_then(|candidate| {
                evaluate(&candidate, reference, config).map_err(anyhow::Error::from)
            });

        match result {
            Ok(verdict) => {
                summary.graded += 1;
                if verdict.is_correct() {
                    summary.correct += 1;
                } else {
                    summary.incorrect += 1;
                    tracing::debug!(
                        line = line_no,
                        class = ?verdict.mismatch().and_then(Mismatch::class),
                        "answer incorrect"
                    );
                }
                writeln!(out, "{line_no}\t{}", verdict_line(&verdict))?;
            }
            Err(e) => {
                tracing::debug!(line = line_no, error = %e, "answer could not be graded");
                summary.errors += 1;
                writeln!(out, "{line_no}\terror: {e:#}")?;
            }
        }

        progress.advance(line_no);
    }

    tracing::info!(
        graded = summary.graded,
        correct = summary.correct,
        incorrect = summary.incorrect,
        errors = summary.errors,
        "batch finished"
    );
    Ok(summary)
}
