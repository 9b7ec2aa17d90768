// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod presentation;

pub use period_range_domain::{
    BracketPolicy, Inclusivity, LooseBound, ParseOptions, Range, TextRange, TimeRange,
    equals, equals_default, intersection, overlaps,
};
pub use period_range_shared_kernel::{DomainError, PeriodRangeError, Timestamp};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
