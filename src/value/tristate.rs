//! Three-valued answers for queries that may be undecidable.

use std::{fmt, ops::Not};

/// The answer of an equality or membership query.
///
/// Some queries cannot be decided from the value alone, e.g. whether a stack frame offset
/// contains a given integer. Those answer [`Tristate::NotApplicable`], which is neither `true`
/// nor `false` and must be treated as "cannot determine".
///
/// # Examples
///
/// ```rust
/// use valscope::value::{PossibleValueSet, Tristate};
///
/// let set = PossibleValueSet::in_set_of_values([1, 2, 3]);
/// assert_eq!(set.contains(2), Tristate::True);
///
/// let frame = PossibleValueSet::stack_frame_offset(-0x10);
/// assert_eq!(frame.contains(2), Tristate::NotApplicable);
/// assert_eq!(frame.contains(2).to_option(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tristate {
    /// The query holds
    True,
    /// The query does not hold
    False,
    /// The query cannot be decided for this kind of value
    NotApplicable,
}

impl Tristate {
    /// Returns `true` only for [`Tristate::True`].
    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    /// Returns `true` only for [`Tristate::False`].
    #[must_use]
    pub const fn is_false(self) -> bool {
        matches!(self, Self::False)
    }

    /// Returns `true` if the query could be decided.
    #[must_use]
    pub const fn is_applicable(self) -> bool {
        !matches!(self, Self::NotApplicable)
    }

    /// Converts to `Some(bool)` for decided queries and `None` otherwise.
    #[must_use]
    pub const fn to_option(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::NotApplicable => None,
        }
    }
}

impl From<bool> for Tristate {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl Not for Tristate {
    type Output = Tristate;

    fn not(self) -> Self::Output {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
            Self::NotApplicable => Self::NotApplicable,
        }
    }
}

impl fmt::Display for Tristate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::NotApplicable => write!(f, "n/a"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bool() {
        assert_eq!(Tristate::from(true), Tristate::True);
        assert_eq!(Tristate::from(false), Tristate::False);
    }

    #[test]
    fn test_not() {
        assert_eq!(!Tristate::True, Tristate::False);
        assert_eq!(!Tristate::False, Tristate::True);
        assert_eq!(!Tristate::NotApplicable, Tristate::NotApplicable);
    }

    #[test]
    fn test_not_applicable_is_neither() {
        let na = Tristate::NotApplicable;
        assert!(!na.is_true());
        assert!(!na.is_false());
        assert!(!na.is_applicable());
        assert_eq!(na.to_option(), None);
        assert_eq!(na.to_string(), "n/a");
    }
}
