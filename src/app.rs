// src/app.rs
use std::{fmt::Display, str::FromStr};

use anyhow::{Context, Result};
use period_range_domain::{ParseOptions, Range};
use period_range_shared_kernel::Timestamp;

use crate::{
    cli::Command,
    config::{BoundKind, Config, OutputFormat},
    presentation::{self, Inspection},
};

/// Executes the configured command and returns the text to print.
///
/// # Errors
/// Fails when a range argument cannot be parsed or the output cannot be rendered.
pub fn run(config: &Config) -> Result<String> {
    match config.bounds {
        BoundKind::Timestamp => {
            execute::<Timestamp>(&config.command, &config.options, config.format)
        }
        BoundKind::Text => execute::<String>(&config.command, &config.options, config.format),
    }
}

fn parse<T>(text: &str, options: &ParseOptions) -> Result<Range<T>>
where
    T: FromStr,
    T::Err: Display,
{
    Range::parse_with_options(text, options, T::from_str)
        .with_context(|| format!("invalid range '{text}'"))
}

fn execute<T>(command: &Command, options: &ParseOptions, format: OutputFormat) -> Result<String>
where
    T: FromStr + PartialOrd + Clone + Display,
    T::Err: Display,
{
    let output = match command {
        Command::Inspect { range } => {
            let range = parse::<T>(range, options)?;
            log::debug!("inspecting {range}");
            presentation::render_inspection(&Inspection::of(&range), format)?
        }
        Command::Overlaps { a, b } => {
            let (a, b) = (parse::<T>(a, options)?, parse::<T>(b, options)?);
            presentation::render_overlap(a.overlaps(&b), format)?
        }
        Command::Intersect { a, b } => {
            let (a, b) = (parse::<T>(a, options)?, parse::<T>(b, options)?);
            presentation::render_intersection(&a.intersection(&b), format)?
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(bounds: BoundKind, command: Command) -> Config {
        Config {
            bounds,
            options: ParseOptions::default(),
            format: OutputFormat::Plain,
            command,
        }
    }

    #[test]
    fn intersects_timestamp_ranges() {
        let out = run(&config(
            BoundKind::Timestamp,
            Command::Intersect {
                a: "[2024-05-01,2024-05-03)".into(),
                b: "[2024-05-02,)".into(),
            },
        ))
        .unwrap();
        assert_eq!(out, "[2024-05-02T00:00:00Z,2024-05-03T00:00:00Z)");
    }

    #[test]
    fn text_ranges_compare_lexically() {
        let out = run(&config(
            BoundKind::Text,
            Command::Overlaps { a: "[a,m)".into(), b: "[m,z]".into() },
        ))
        .unwrap();
        assert_eq!(out, "false");
    }

    #[test]
    fn parse_errors_carry_the_argument() {
        let err = run(&config(BoundKind::Timestamp, Command::Inspect { range: "[x".into() }))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid range '[x'");
        assert!(format!("{err:#}").contains("Malformed range"));
    }
}
