// crates/domain/src/range/overlap.rs
use std::cmp::Ordering;

use super::Range;

/// Returns `true` if `a` and `b` share at least one value.
///
/// Ranges that touch at a single value overlap only when that value is
/// inclusive on both sides.
///
/// # Examples
///
/// ```rust
/// # use period_range_domain::{Range, overlaps};
/// let morning = Range::closed_open(Some(6), Some(14));
/// let late = Range::closed_open(Some(14), Some(22));
/// assert!(!overlaps(&morning, &late));
///
/// let until_two = Range::new(Some(6), Some(14), "[]").unwrap();
/// assert!(overlaps(&until_two, &late));
/// ```
pub fn overlaps<T: PartialOrd>(a: &Range<T>, b: &Range<T>) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    match (&a.lower, &a.upper) {
        (None, None) => true,
        (None, Some(a_upper)) => match &b.lower {
            None => true,
            Some(b_lower) if b_lower == a_upper => b.lower_inclusive && a.upper_inclusive,
            Some(b_lower) => b_lower < a_upper,
        },
        (Some(a_lower), None) => match &b.upper {
            None => true,
            Some(b_upper) if b_upper == a_lower => b.upper_inclusive && a.lower_inclusive,
            Some(b_upper) => a_lower < b_upper,
        },
        (Some(a_lower), Some(a_upper)) => match (&b.lower, &b.upper) {
            (Some(b_lower), Some(b_upper)) => {
                if b_lower == a_upper {
                    b.lower_inclusive && a.upper_inclusive
                } else if b_upper == a_lower {
                    b.upper_inclusive && a.lower_inclusive
                } else {
                    b_lower < a_upper && a_lower < b_upper
                }
            }
            // `b` is open on at least one side: reuse the cases above
            _ => overlaps(b, a),
        },
    }
}

/// Returns the values common to `a` and `b`, or the empty range.
///
/// The later lower bound and the earlier upper bound win; an absent bound
/// loses to any present one. On equal bounds the result is inclusive only
/// if both inputs are.
#[must_use]
pub fn intersection<T: PartialOrd + Clone>(a: &Range<T>, b: &Range<T>) -> Range<T> {
    if !overlaps(a, b) {
        return Range::empty();
    }
    let (lower, lower_inclusive) = tighter(
        (a.lower.as_ref(), a.lower_inclusive),
        (b.lower.as_ref(), b.lower_inclusive),
        Ordering::Greater,
    );
    let (upper, upper_inclusive) = tighter(
        (a.upper.as_ref(), a.upper_inclusive),
        (b.upper.as_ref(), b.upper_inclusive),
        Ordering::Less,
    );
    Range::from_bounds(lower, lower_inclusive, upper, upper_inclusive)
}

/// Picks the bound lying further in direction `keep` (`Greater` for lower
/// bounds, `Less` for upper bounds).
fn tighter<T: PartialOrd + Clone>(
    a: (Option<&T>, bool),
    b: (Option<&T>, bool),
    keep: Ordering,
) -> (Option<T>, bool) {
    match (a, b) {
        ((None, _), (None, _)) => (None, false),
        ((Some(value), inclusive), (None, _)) | ((None, _), (Some(value), inclusive)) => {
            (Some(value.clone()), inclusive)
        }
        ((Some(x), x_inclusive), (Some(y), y_inclusive)) => match x.partial_cmp(y) {
            Some(Ordering::Equal) => (Some(x.clone()), x_inclusive && y_inclusive),
            Some(ordering) if ordering == keep => (Some(x.clone()), x_inclusive),
            Some(_) => (Some(y.clone()), y_inclusive),
            None => (Some(x.clone()), x_inclusive),
        },
    }
}
