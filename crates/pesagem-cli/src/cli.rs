//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

/// Classify pasted livestock weighing records against a roster.
#[derive(Parser, Debug)]
#[command(name = "pesagem", version, about)]
pub struct Cli {
    /// Input file with the pasted text, or `-` for stdin.
    pub input: PathBuf,

    /// JSON file with the animal roster (array of animals).
    #[arg(short, long)]
    pub roster: PathBuf,

    /// Fallback date for lines without one (default: today).
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Print the full batch result as JSON instead of a summary.
    #[arg(long)]
    pub json: bool,
}
