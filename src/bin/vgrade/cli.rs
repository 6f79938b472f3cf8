use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vgrade",
    about = "Grade VSEPR geometry answers against a reference",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Grade a single answer
    #[command(visible_alias = "g")]
    Grade(GradeArgs),

    /// Grade one answer per line of a JSON Lines file
    #[command(visible_alias = "b")]
    Batch(BatchArgs),

    /// Build a canonical reference answer
    Build(BuildArgs),
}

impl Command {
    pub fn quiet(&self) -> bool {
        match self {
            Command::Grade(args) => args.io.quiet,
            Command::Batch(args) => args.io.quiet,
            Command::Build(_) => true,
        }
    }
}

/// I/O options shared by the grading commands.
#[derive(Args)]
pub struct IoOptions {
    /// Reference answer (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub reference: PathBuf,

    /// Candidate answer(s) (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Suppress progress and summary output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Order sensitivity per position class.
#[derive(Args, Default)]
#[command(next_help_heading = "Order Sensitivity")]
pub struct OrderOptions {
    /// Compare axial positions as an unordered set
    #[arg(long)]
    pub ignore_axial_order: bool,

    /// Compare peripheral positions as an unordered set
    #[arg(long)]
    pub ignore_peripheral_order: bool,

    /// Compare equatorial positions as an unordered set
    #[arg(long)]
    pub ignore_equatorial_order: bool,

    /// Grading settings (TOML file); flags above are added on top
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct GradeArgs {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub order: OrderOptions,
}

#[derive(Args)]
pub struct BatchArgs {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub order: OrderOptions,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Geometry label (e.g. AX4E0)
    #[arg(short, long, value_name = "LABEL")]
    pub geometry: String,

    /// Position and label (KEY=LABEL), repeatable
    #[arg(
        short,
        long = "atom",
        value_name = "KEY=LABEL",
        value_parser = parse_atom,
        action = ArgAction::Append,
        required = true
    )]
    pub atoms: Vec<(String, String)>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

fn parse_atom(s: &str) -> Result<(String, String), String> {
    let (key, label) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=LABEL, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing position key in '{}'", s));
    }
    Ok((key.to_string(), label.to_string()))
}

pub fn parse() -> Cli {
    Cli::parse()
}
