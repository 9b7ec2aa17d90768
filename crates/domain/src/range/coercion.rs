// crates/domain/src/range/coercion.rs
//! Typed views over ranges whose bounds may still be raw text.
//!
//! Legacy producers hand over ranges whose bounds are sometimes strings
//! (including the `-oo`/`+oo` sentinels) and sometimes already-typed values.
//! The coercions below normalise such ranges into timestamp or text ranges.

use std::{convert::Infallible, fmt, str::FromStr};

use period_range_shared_kernel::{DomainResult, Timestamp};

use super::{
    Inclusivity, Range,
    comparison::{bound_equals, soft_eq},
    parsing::{is_unbounded_text, parse_bound_text},
};

/// A bound as received from a producer: raw text or a typed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LooseBound<T> {
    Text(String),
    Value(T),
}

impl<T> LooseBound<T> {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub const fn value(value: T) -> Self {
        Self::Value(value)
    }
}

/// Rebuilds `source` with each present bound resolved by `resolve`.
///
/// Only the construction-time empty flag is honoured here; computed
/// emptiness is re-derived by the typed result.
fn coerce<T, U, E, F>(source: &Range<LooseBound<T>>, mut resolve: F) -> Result<Range<U>, E>
where
    F: FnMut(&LooseBound<T>) -> Result<Option<U>, E>,
{
    if source.is_flagged_empty() {
        return Ok(Range::empty());
    }
    let lower = source.lower.as_ref().map(&mut resolve).transpose()?.flatten();
    let upper = source.upper.as_ref().map(&mut resolve).transpose()?.flatten();
    Ok(Range::from_bounds(
        lower,
        source.lower_inclusive,
        upper,
        source.upper_inclusive,
    ))
}

fn resolve_timestamp(bound: &LooseBound<Timestamp>) -> DomainResult<Option<Timestamp>> {
    match bound {
        LooseBound::Text(text) => parse_bound_text(text, &mut Timestamp::from_str),
        LooseBound::Value(value) => Ok(Some(*value)),
    }
}

impl Range<Timestamp> {
    /// Resolves text bounds into timestamps, keeping typed bounds as they are.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidBound`](period_range_shared_kernel::DomainError::InvalidBound)
    /// when a text bound is neither blank, a sentinel, nor a timestamp.
    pub fn coerce_timestamps(source: &Range<LooseBound<Timestamp>>) -> DomainResult<Self> {
        coerce(source, resolve_timestamp)
    }

    /// Builds a slot from loose bounds: closed `[]` when both bounds denote
    /// the same instant, half-open `[)` otherwise.
    ///
    /// # Errors
    /// Same as [`Range::coerce_timestamps`].
    pub fn instant_or_closed_open(
        lower: Option<LooseBound<Timestamp>>,
        upper: Option<LooseBound<Timestamp>>,
    ) -> DomainResult<Self> {
        let lower = lower.as_ref().map(resolve_timestamp).transpose()?.flatten();
        let upper = upper.as_ref().map(resolve_timestamp).transpose()?.flatten();
        let inclusivity = if bound_equals(lower.as_ref(), upper.as_ref(), |a, b| soft_eq(a, b)) {
            Inclusivity::Closed
        } else {
            Inclusivity::ClosedOpen
        };
        Ok(Self::with_inclusivity(lower, upper, inclusivity))
    }
}

impl Range<String> {
    /// Stringifies every bound. Blank and sentinel texts become "no bound";
    /// typed values are kept verbatim.
    #[must_use]
    pub fn coerce_text<T: fmt::Display>(source: &Range<LooseBound<T>>) -> Self {
        let resolved = coerce(source, |bound| {
            let text = match bound {
                LooseBound::Text(text) => text.trim().to_string(),
                LooseBound::Value(value) => return Ok(Some(value.to_string())),
            };
            Ok::<_, Infallible>((!is_unbounded_text(&text)).then_some(text))
        });
        match resolved {
            Ok(range) => range,
            Err(never) => match never {},
        }
    }
}
