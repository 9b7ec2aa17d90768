// crates/domain/src/lib.rs
//! Range arithmetic for time periods and other ordered domains.
//!
//! Machine-state slots, shift windows and chart ranges are all expressed as
//! [`Range`] values; overlap and intersection are the primitives that bar
//! charts, pie charts and "current slot" lookups are built on.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod range;

pub use config::{BracketPolicy, ParseOptions};
pub use range::{
    EMPTY_LITERAL, Inclusivity, LOWER_SENTINEL, LooseBound, Range, UPPER_SENTINEL, bound_equals,
    equals, equals_default, intersection, overlaps, soft_eq,
};

/// Time-period range, the instantiation used by the dashboard widgets.
pub type TimeRange = Range<period_range_shared_kernel::Timestamp>;

/// Range over raw text bounds.
pub type TextRange = Range<String>;
