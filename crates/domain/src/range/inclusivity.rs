// crates/domain/src/range/inclusivity.rs
use std::{fmt, str::FromStr};

use period_range_shared_kernel::DomainError;

/// Bracket pair describing which bounds belong to a range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Inclusivity {
    /// `[]`
    Closed,
    /// `[)`
    #[default]
    ClosedOpen,
    /// `(]`
    OpenClosed,
    /// `()`
    Open,
}

impl Inclusivity {
    #[inline]
    pub const fn from_flags(lower_inclusive: bool, upper_inclusive: bool) -> Self {
        match (lower_inclusive, upper_inclusive) {
            (true, true) => Self::Closed,
            (true, false) => Self::ClosedOpen,
            (false, true) => Self::OpenClosed,
            (false, false) => Self::Open,
        }
    }

    #[inline]
    pub const fn lower_inclusive(self) -> bool {
        matches!(self, Self::Closed | Self::ClosedOpen)
    }

    #[inline]
    pub const fn upper_inclusive(self) -> bool {
        matches!(self, Self::Closed | Self::OpenClosed)
    }

    #[inline]
    pub const fn lower_bracket(self) -> char {
        if self.lower_inclusive() { '[' } else { '(' }
    }

    #[inline]
    pub const fn upper_bracket(self) -> char {
        if self.upper_inclusive() { ']' } else { ')' }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "[]",
            Self::ClosedOpen => "[)",
            Self::OpenClosed => "(]",
            Self::Open => "()",
        }
    }
}

impl FromStr for Inclusivity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "[]" => Ok(Self::Closed),
            "[)" => Ok(Self::ClosedOpen),
            "(]" => Ok(Self::OpenClosed),
            "()" => Ok(Self::Open),
            _ => Err(DomainError::InvalidInclusivity { spec: s.to_string() }),
        }
    }
}

impl fmt::Display for Inclusivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_four_forms() {
        for brackets in ["[]", "[)", "(]", "()"] {
            let inclusivity: Inclusivity = brackets.parse().unwrap();
            assert_eq!(inclusivity.as_str(), brackets);
        }
    }

    #[test]
    fn rejects_other_bracket_pairs() {
        for brackets in ["", "[", "[[", ")(", "[ )", "[]]", "<>"] {
            assert_eq!(
                brackets.parse::<Inclusivity>(),
                Err(DomainError::InvalidInclusivity { spec: brackets.to_string() })
            );
        }
    }

    #[test]
    fn flags_roundtrip() {
        let inclusivity = Inclusivity::from_flags(false, true);
        assert_eq!(inclusivity, Inclusivity::OpenClosed);
        assert!(!inclusivity.lower_inclusive());
        assert!(inclusivity.upper_inclusive());
        assert_eq!(inclusivity.lower_bracket(), '(');
        assert_eq!(inclusivity.upper_bracket(), ']');
    }
}
