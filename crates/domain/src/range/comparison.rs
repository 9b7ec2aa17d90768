// crates/domain/src/range/comparison.rs
use super::Range;

/// Compares two optional bounds: both absent are equal, one absent is not.
pub fn bound_equals<T, F>(a: Option<&T>, b: Option<&T>, mut eq: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => eq(a, b),
        _ => false,
    }
}

/// Equality expressed as two inequalities.
///
/// Values that are not comparable (`NaN`, for instance) are never equal.
#[inline]
pub fn soft_eq<T: PartialOrd>(a: &T, b: &T) -> bool {
    a >= b && a <= b
}

/// Compares two optional ranges with `eq` applied to bound values.
///
/// All empty ranges are equal to each other, whatever degenerate bounds they
/// were built from. Non-empty ranges must agree on both bound values and on
/// both inclusivity flags.
///
/// # Examples
///
/// ```rust
/// # use period_range_domain::{Range, equals};
/// let a = Range::closed_open(Some(1), Some(5));
/// let b = Range::closed_open(Some(1), Some(5));
/// assert!(equals(Some(&a), Some(&b), |x, y| x == y));
/// assert!(!equals(Some(&a), None, |x, y| x == y));
/// assert!(equals::<i32, _>(None, None, |x, y| x == y));
/// ```
pub fn equals<T, F>(a: Option<&Range<T>>, b: Option<&Range<T>>, mut eq: F) -> bool
where
    T: PartialOrd,
    F: FnMut(&T, &T) -> bool,
{
    let (a, b) = match (a, b) {
        (None, None) => return true,
        (Some(a), Some(b)) => (a, b),
        _ => return false,
    };
    if std::ptr::eq(a, b) {
        return true;
    }
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return true,
        (false, false) => {}
        _ => return false,
    }
    bound_equals(a.lower.as_ref(), b.lower.as_ref(), &mut eq)
        && bound_equals(a.upper.as_ref(), b.upper.as_ref(), &mut eq)
        && a.lower_inclusive == b.lower_inclusive
        && a.upper_inclusive == b.upper_inclusive
}

/// [`equals`] with [`soft_eq`] as the bound comparator.
pub fn equals_default<T: PartialOrd>(a: Option<&Range<T>>, b: Option<&Range<T>>) -> bool {
    equals(a, b, |x, y| soft_eq(x, y))
}

impl<T: PartialOrd> PartialEq for Range<T> {
    fn eq(&self, other: &Self) -> bool {
        equals_default(Some(self), Some(other))
    }
}
