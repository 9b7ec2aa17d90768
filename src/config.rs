// src/config.rs
use period_range_domain::ParseOptions;

use crate::cli::Command;

/// Bound type the command-line ranges are parsed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    Timestamp,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// Everything a single invocation needs, resolved from the CLI.
#[derive(Debug, Clone)]
pub struct Config {
    pub bounds: BoundKind,
    pub options: ParseOptions,
    pub format: OutputFormat,
    pub command: Command,
}
