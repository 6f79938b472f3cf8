mod batch;
mod build;
mod grade;

pub use batch::BatchSummary;

use batch::run_batch;
use build::run_build;
use grade::run_grade;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every graded answer was correct (or nothing was graded).
    Correct,
    /// At least one answer was incorrect or could not be graded.
    Incorrect,
}

pub fn dispatch(command: Command, ctx: Context) -> Result<Outcome> {
    match command {
        Command::Grade(args) => run_grade(args, ctx),
        Command::Batch(args) => run_batch(args, ctx),
        Command::Build(args) => run_build(args).map(|()| Outcome::Correct),
    }
}
