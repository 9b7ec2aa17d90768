use clap::ValueEnum;

use crate::config::{BoundKind, OutputFormat};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliBoundKind {
    Timestamp,
    Text,
}

impl From<CliBoundKind> for BoundKind {
    fn from(value: CliBoundKind) -> Self {
        match value {
            CliBoundKind::Timestamp => BoundKind::Timestamp,
            CliBoundKind::Text => BoundKind::Text,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Plain,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Plain => OutputFormat::Plain,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}
