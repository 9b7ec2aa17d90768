// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use super::value_enum::{CliBoundKind, CliOutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "period_range",
    version = crate::VERSION,
    about = "Inspect, compare and intersect ranges written in bracket notation"
)]
pub struct Args {
    /// How bound texts are interpreted
    #[arg(long, value_enum, default_value = "timestamp", global = true)]
    pub bounds: CliBoundKind,

    /// Reject bounds without a recognised bracket instead of assuming inclusive
    #[arg(long, global = true, conflicts_with = "config")]
    pub strict: bool,

    /// JSON file holding parser options, e.g. {"brackets": "strict"}
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", global = true)]
    pub format: CliOutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the canonical form, emptiness and bounds of a range
    Inspect {
        #[arg(allow_hyphen_values = true)]
        range: String,
    },
    /// Tell whether two ranges share at least one value
    Overlaps {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Print the values common to two ranges
    Intersect {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
}
