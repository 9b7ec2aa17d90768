// crates/domain/src/range.rs
//! Intervals over an ordered domain.
//!
//! A [`Range`] has two independently optional bounds (`None` meaning
//! unbounded on that side) and two inclusivity flags. The canonical empty
//! range is a distinct value from the fully unbounded `(,)` range; a range
//! built from bounds is never *flagged* empty, but may still be *computed*
//! empty when its bounds are degenerate (`[5,3)`, `[4,4)`).

use std::cmp::Ordering;

use period_range_shared_kernel::{DomainError, DomainResult};

pub mod coercion;
pub mod comparison;
pub mod inclusivity;
pub mod overlap;
pub mod parsing;

pub use coercion::LooseBound;
pub use comparison::{bound_equals, equals, equals_default, soft_eq};
pub use inclusivity::Inclusivity;
pub use overlap::{intersection, overlaps};
pub use parsing::{EMPTY_LITERAL, LOWER_SENTINEL, UPPER_SENTINEL};

/// Interval value with optional, independently inclusive bounds.
///
/// Invariant: an absent bound is never inclusive.
#[derive(Debug, Clone)]
pub struct Range<T> {
    lower: Option<T>,
    lower_inclusive: bool,
    upper: Option<T>,
    upper_inclusive: bool,
    empty: bool,
}

impl<T> Default for Range<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Range<T> {
    /// Returns the canonical empty range.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            lower: None,
            lower_inclusive: false,
            upper: None,
            upper_inclusive: false,
            empty: true,
        }
    }

    /// Returns `(,)`, the range containing every value.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            lower: None,
            lower_inclusive: false,
            upper: None,
            upper_inclusive: false,
            empty: false,
        }
    }

    /// Builds a range from raw parts.
    ///
    /// The inclusivity of an absent bound is dropped, whatever was asked for.
    #[must_use]
    pub fn from_bounds(
        lower: Option<T>,
        lower_inclusive: bool,
        upper: Option<T>,
        upper_inclusive: bool,
    ) -> Self {
        Self {
            lower_inclusive: lower_inclusive && lower.is_some(),
            upper_inclusive: upper_inclusive && upper.is_some(),
            lower,
            upper,
            empty: false,
        }
    }

    #[must_use]
    pub fn with_inclusivity(lower: Option<T>, upper: Option<T>, inclusivity: Inclusivity) -> Self {
        Self::from_bounds(
            lower,
            inclusivity.lower_inclusive(),
            upper,
            inclusivity.upper_inclusive(),
        )
    }

    /// Builds a range from bounds and a bracket pair such as `"[)"`.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidInclusivity`] unless `inclusivity` is
    /// exactly one of `[]`, `[)`, `(]` or `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use period_range_domain::Range;
    /// let r = Range::new(None, Some(10), "[)").unwrap();
    /// assert!(!r.lower_inclusive());
    /// assert!(Range::new(Some(1), Some(2), "[[").is_err());
    /// ```
    pub fn new(lower: Option<T>, upper: Option<T>, inclusivity: &str) -> DomainResult<Self> {
        let inclusivity: Inclusivity = inclusivity.parse()?;
        Ok(Self::with_inclusivity(lower, upper, inclusivity))
    }

    /// Half-open `[lower, upper)` range, the default shape of a time slot.
    #[must_use]
    pub fn closed_open(lower: Option<T>, upper: Option<T>) -> Self {
        Self::with_inclusivity(lower, upper, Inclusivity::ClosedOpen)
    }

    /// Bracket pair reflecting the stored inclusivity flags.
    pub const fn inclusivity(&self) -> Inclusivity {
        Inclusivity::from_flags(self.lower_inclusive, self.upper_inclusive)
    }

    pub(crate) const fn is_flagged_empty(&self) -> bool {
        self.empty
    }
}

impl<T: PartialOrd> Range<T> {
    /// Returns `true` if the range contains no value.
    ///
    /// Recomputed from the bounds on every call: `upper < lower`, or equal
    /// bounds with at least one exclusive side, make the range empty.
    pub fn is_empty(&self) -> bool {
        if self.empty {
            return true;
        }
        match (&self.lower, &self.upper) {
            (Some(lower), Some(upper)) => match upper.partial_cmp(lower) {
                Some(Ordering::Less) => true,
                Some(Ordering::Equal) => !(self.lower_inclusive && self.upper_inclusive),
                _ => false,
            },
            _ => false,
        }
    }

    /// Returns `true` for a non-empty range without any bound.
    pub fn is_unbounded(&self) -> bool {
        !self.is_empty() && self.lower.is_none() && self.upper.is_none()
    }

    /// Lower bound, `None` when unbounded below.
    ///
    /// # Errors
    /// Returns [`DomainError::EmptyRange`] if the range is empty.
    pub fn lower(&self) -> DomainResult<Option<&T>> {
        if self.is_empty() {
            return Err(DomainError::EmptyRange);
        }
        Ok(self.lower.as_ref())
    }

    /// Upper bound, `None` when unbounded above.
    ///
    /// # Errors
    /// Returns [`DomainError::EmptyRange`] if the range is empty.
    pub fn upper(&self) -> DomainResult<Option<&T>> {
        if self.is_empty() {
            return Err(DomainError::EmptyRange);
        }
        Ok(self.upper.as_ref())
    }

    pub fn lower_inclusive(&self) -> bool {
        self.lower_inclusive && !self.is_empty()
    }

    pub fn upper_inclusive(&self) -> bool {
        self.upper_inclusive && !self.is_empty()
    }

    /// Returns `true` if `value` lies within the range.
    pub fn contains(&self, value: &T) -> bool {
        if self.is_empty() {
            return false;
        }
        let above_lower = match &self.lower {
            None => true,
            Some(lower) if self.lower_inclusive => lower <= value,
            Some(lower) => lower < value,
        };
        let below_upper = match &self.upper {
            None => true,
            Some(upper) if self.upper_inclusive => value <= upper,
            Some(upper) => value < upper,
        };
        above_lower && below_upper
    }

    /// See [`overlaps`].
    pub fn overlaps(&self, other: &Self) -> bool {
        overlap::overlaps(self, other)
    }

    /// Compares with a caller-supplied bound comparator. See [`equals`].
    pub fn equals_by<F>(&self, other: &Self, eq: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        comparison::equals(Some(self), Some(other), eq)
    }
}

impl<T: PartialOrd + Clone> Range<T> {
    /// See [`intersection`].
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        overlap::intersection(self, other)
    }
}
