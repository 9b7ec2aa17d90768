// crates/domain/src/range/parsing.rs
//! Bracket-notation wire format: `empty` or `[lower,upper)`.

use std::{fmt, str::FromStr};

use period_range_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Range;
use crate::config::{BracketPolicy, ParseOptions};

pub const EMPTY_LITERAL: &str = "empty";
pub const LOWER_SENTINEL: &str = "-oo";
pub const UPPER_SENTINEL: &str = "+oo";

#[derive(Debug, Clone, Copy)]
enum Side {
    Lower,
    Upper,
}

impl Side {
    const fn name(self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
        }
    }
}

impl<T> Range<T> {
    /// Parses `text` with lenient bracket handling.
    ///
    /// `parse_bound` is only called for bound texts that are neither blank nor
    /// a `-oo`/`+oo` sentinel.
    ///
    /// # Errors
    /// See [`Range::parse_with_options`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use period_range_domain::Range;
    /// let r = Range::parse_with("[1, 5)", str::parse::<i64>).unwrap();
    /// assert_eq!(r.lower().unwrap(), Some(&1));
    /// assert!(!r.upper_inclusive());
    /// ```
    pub fn parse_with<F, E>(text: &str, parse_bound: F) -> DomainResult<Self>
    where
        F: FnMut(&str) -> Result<T, E>,
        E: fmt::Display,
    {
        Self::parse_with_options(text, &ParseOptions::default(), parse_bound)
    }

    /// Parses `text` following the rules selected by `options`.
    ///
    /// # Errors
    /// - [`DomainError::MalformedRange`] when the input is shorter than three
    ///   characters, lacks a `,`/`;` separator, or (strict mode only) uses an
    ///   unknown bracket.
    /// - [`DomainError::InvalidBound`] when `parse_bound` rejects a bound.
    pub fn parse_with_options<F, E>(
        text: &str,
        options: &ParseOptions,
        mut parse_bound: F,
    ) -> DomainResult<Self>
    where
        F: FnMut(&str) -> Result<T, E>,
        E: fmt::Display,
    {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == EMPTY_LITERAL {
            return Ok(Self::empty());
        }
        if trimmed.chars().count() < 3 {
            return Err(malformed(trimmed, "expected at least 3 characters"));
        }

        let separator = trimmed
            .find(',')
            .or_else(|| trimmed.find(';'))
            .ok_or_else(|| malformed(trimmed, "missing ',' or ';' separator"))?;
        let head = &trimmed[..separator];
        let tail = &trimmed[separator + 1..];

        let (lower_inclusive, lower_text) = match head.chars().next() {
            Some('[') => (true, &head[1..]),
            Some('(') => (false, &head[1..]),
            found => {
                unrecognized_bracket(trimmed, Side::Lower, found, options)?;
                (true, head)
            }
        };
        let (upper_inclusive, upper_text) = match tail.chars().next_back() {
            Some(']') => (true, &tail[..tail.len() - 1]),
            Some(')') => (false, &tail[..tail.len() - 1]),
            found => {
                unrecognized_bracket(trimmed, Side::Upper, found, options)?;
                (true, tail)
            }
        };

        let lower = parse_bound_text(lower_text, &mut parse_bound)?;
        let upper = parse_bound_text(upper_text, &mut parse_bound)?;
        Ok(Self::from_bounds(lower, lower_inclusive, upper, upper_inclusive))
    }
}

impl<T: PartialOrd> Range<T> {
    /// Renders the range, using `bound_to_string` for present bounds.
    ///
    /// Absent bounds render as nothing: `(,5]`.
    pub fn to_string_with<F>(&self, mut bound_to_string: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        if self.is_empty() {
            return EMPTY_LITERAL.to_string();
        }
        let inclusivity = self.inclusivity();
        let lower = self.lower.as_ref().map(&mut bound_to_string).unwrap_or_default();
        let upper = self.upper.as_ref().map(&mut bound_to_string).unwrap_or_default();
        format!(
            "{}{lower},{upper}{}",
            inclusivity.lower_bracket(),
            inclusivity.upper_bracket()
        )
    }
}

/// Returns `true` for bound texts that stand for "no bound".
///
/// Either sentinel is accepted on either side.
pub(crate) fn is_unbounded_text(text: &str) -> bool {
    text.is_empty() || text == LOWER_SENTINEL || text == UPPER_SENTINEL
}

pub(crate) fn parse_bound_text<T, F, E>(text: &str, parse_bound: &mut F) -> DomainResult<Option<T>>
where
    F: FnMut(&str) -> Result<T, E>,
    E: fmt::Display,
{
    let text = text.trim();
    if is_unbounded_text(text) {
        return Ok(None);
    }
    parse_bound(text)
        .map(Some)
        .map_err(|err| DomainError::InvalidBound {
            text: text.to_string(),
            details: err.to_string(),
        })
}

fn unrecognized_bracket(
    input: &str,
    side: Side,
    found: Option<char>,
    options: &ParseOptions,
) -> DomainResult<()> {
    let found = found.map_or_else(|| "nothing".to_string(), |c| format!("'{c}'"));
    match options.brackets {
        BracketPolicy::Strict => Err(malformed(
            input,
            &format!("expected a {} bracket, found {found}", side.name()),
        )),
        BracketPolicy::Lenient => {
            log::warn!(
                "range '{input}': expected a {} bracket, found {found}; assuming inclusive",
                side.name()
            );
            Ok(())
        }
    }
}

fn malformed(input: &str, reason: &str) -> DomainError {
    DomainError::MalformedRange {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

impl<T: PartialOrd + fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(ToString::to_string))
    }
}

impl<T> FromStr for Range<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, T::from_str)
    }
}

impl<T: PartialOrd + fmt::Display> Serialize for Range<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Range<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
