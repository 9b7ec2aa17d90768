// src/presentation.rs
use std::fmt::Display;

use period_range_domain::Range;
use period_range_shared_kernel::{PresentationError, PresentationResult};
use serde::Serialize;

use crate::config::OutputFormat;

/// Flattened view of a range for display.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Inspection {
    pub range: String,
    pub empty: bool,
    pub lower: Option<String>,
    pub lower_inclusive: bool,
    pub upper: Option<String>,
    pub upper_inclusive: bool,
}

impl Inspection {
    pub fn of<T: PartialOrd + Display>(range: &Range<T>) -> Self {
        let bound_text = |bound: Option<&T>| bound.map(ToString::to_string);
        Self {
            range: range.to_string(),
            empty: range.is_empty(),
            lower: range.lower().ok().and_then(bound_text),
            lower_inclusive: range.lower_inclusive(),
            upper: range.upper().ok().and_then(bound_text),
            upper_inclusive: range.upper_inclusive(),
        }
    }
}

fn to_json<S: Serialize>(value: &S) -> PresentationResult<String> {
    serde_json::to_string_pretty(value).map_err(|err| PresentationError::Render(err.to_string()))
}

fn side(inclusive: bool) -> &'static str {
    if inclusive { "inclusive" } else { "exclusive" }
}

pub fn render_inspection(
    inspection: &Inspection,
    format: OutputFormat,
) -> PresentationResult<String> {
    match format {
        OutputFormat::Json => to_json(inspection),
        OutputFormat::Plain if inspection.empty => {
            Ok(format!("range: {}\nempty: true", inspection.range))
        }
        OutputFormat::Plain => {
            let lower = inspection.lower.as_ref().map_or_else(
                || "-oo".to_string(),
                |b| format!("{b} ({})", side(inspection.lower_inclusive)),
            );
            let upper = inspection.upper.as_ref().map_or_else(
                || "+oo".to_string(),
                |b| format!("{b} ({})", side(inspection.upper_inclusive)),
            );
            Ok(format!(
                "range: {}\nempty: false\nlower: {lower}\nupper: {upper}",
                inspection.range
            ))
        }
    }
}

#[derive(Serialize)]
struct OverlapReport {
    overlaps: bool,
}

pub fn render_overlap(overlaps: bool, format: OutputFormat) -> PresentationResult<String> {
    match format {
        OutputFormat::Plain => Ok(overlaps.to_string()),
        OutputFormat::Json => to_json(&OverlapReport { overlaps }),
    }
}

#[derive(Serialize)]
struct IntersectionReport<'a> {
    intersection: &'a str,
    empty: bool,
}

pub fn render_intersection<T: PartialOrd + Display>(
    intersection: &Range<T>,
    format: OutputFormat,
) -> PresentationResult<String> {
    let text = intersection.to_string();
    match format {
        OutputFormat::Plain => Ok(text),
        OutputFormat::Json => to_json(&IntersectionReport {
            intersection: &text,
            empty: intersection.is_empty(),
        }),
    }
}
