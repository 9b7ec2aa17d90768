// src/cli/mod.rs
mod args;
mod value_enum;

use std::{fs, path::Path};

pub use args::{Args, Command};
use clap::Parser;
use period_range_domain::ParseOptions;
use period_range_shared_kernel::{ErrorContext, PresentationError, Result};
pub use value_enum::{CliBoundKind, CliOutputFormat};

use crate::config::Config;

fn invalid_config(path: &Path, reason: impl ToString) -> PresentationError {
    PresentationError::InvalidValue {
        flag: "--config".to_string(),
        value: path.display().to_string(),
        reason: reason.to_string(),
    }
}

fn load_parse_options(path: &Path) -> Result<ParseOptions> {
    let text = fs::read_to_string(path)
        .map_err(|err| invalid_config(path, err))
        .context("reading parser options")?;
    serde_json::from_str(&text)
        .map_err(|err| invalid_config(path, err))
        .with_context(|| format!("decoding parser options from {}", path.display()))
}

fn make_parse_options(args: &Args) -> Result<ParseOptions> {
    match &args.config {
        Some(path) => load_parse_options(path),
        None if args.strict => Ok(ParseOptions::strict()),
        None => Ok(ParseOptions::lenient()),
    }
}

/// Parse CLI arguments and build the run [`Config`].
///
/// # Errors
///
/// Returns `Err` when the parser options file cannot be read or decoded.
pub fn load_config() -> Result<Config> {
    let args = Args::parse();
    build_config(&args)
}

/// Convert parsed CLI arguments into a run configuration.
///
/// # Errors
///
/// Returns `Err` when the parser options file cannot be read or decoded.
pub fn build_config(args: &Args) -> Result<Config> {
    Ok(Config {
        bounds: args.bounds.into(),
        options: make_parse_options(args)?,
        format: args.format.into(),
        command: args.command.clone(),
    })
}
