use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use crate::commands::BatchSummary;

pub struct BatchBar {
    bar: ProgressBar,
    start: Instant,
}

impl BatchBar {
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("  {spinner:.cyan} Grading [{bar:32.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("━╸ ");
        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(80));
        Self {
            bar,
            start: Instant::now(),
        }
    }

    pub fn advance(&mut self, line: usize) {
        self.bar.set_message(format!("line {line}"));
        self.bar.inc(1);
    }

    pub fn finish(self) -> Duration {
        self.bar.finish_and_clear();
        self.start.elapsed()
    }
}

pub enum BatchProgress {
    Interactive(BatchBar),
    Silent,
}

impl BatchProgress {
    pub fn new(interactive: bool, total: usize) -> Self {
        if interactive {
            Self::Interactive(BatchBar::new(total as u64))
        } else {
            Self::Silent
        }
    }

    pub fn advance(&mut self, line: usize) {
        if let Self::Interactive(bar) = self {
            bar.advance(line);
        }
    }

    pub fn finish(self, summary: &BatchSummary) {
        if let Self::Interactive(bar) = self {
            let elapsed = bar.finish();
            print_summary(summary, Some(elapsed));
        }
    }
}

pub fn print_summary(summary: &BatchSummary, elapsed: Option<Duration>) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(
        stderr,
        "  \x1b[2m╺━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╸\x1b[0m"
    );
    let _ = writeln!(
        stderr,
        "  Graded {:>6}   \x1b[32mCorrect\x1b[0m {:>6}   \x1b[31mIncorrect\x1b[0m {:>6}   Errors {:>4}",
        summary.graded, summary.correct, summary.incorrect, summary.errors
    );
    if let Some(elapsed) = elapsed {
        let _ = writeln!(stderr, "  {:>56}", format!("Total: {:.2}s", elapsed.as_secs_f64()));
    }
    let _ = writeln!(stderr);
}
