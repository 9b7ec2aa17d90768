// crates/domain/src/config.rs
use serde::{Deserialize, Serialize};

/// How the parser treats a bound without a recognised bracket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BracketPolicy {
    /// Log a warning and assume an inclusive bound.
    #[default]
    Lenient,
    /// Fail with a malformed-range error.
    Strict,
}

/// Parser settings, embeddable in host configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub brackets: BracketPolicy,
}

impl ParseOptions {
    #[must_use]
    pub const fn new(brackets: BracketPolicy) -> Self {
        Self { brackets }
    }

    #[must_use]
    pub const fn lenient() -> Self {
        Self::new(BracketPolicy::Lenient)
    }

    #[must_use]
    pub const fn strict() -> Self {
        Self::new(BracketPolicy::Strict)
    }
}
