//! Half-open interval primitives.
//!
//! [`ValueRange`] is an arithmetic progression `start, start + step, ...` strictly below `end`,
//! the building block of the range kinds of a [`super::PossibleValueSet`]. [`AddressRange`] is a
//! plain half-open address interval.

use std::fmt;

use crate::utils::SignedHex;

/// A strided half-open range of values.
///
/// `x` is contained iff `start <= x < end` and `(x - start) mod step == 0`. A zero step
/// contains nothing. Membership is computed on `i128`, so it is exact for both `i64` and
/// `u64` bounds.
///
/// # Examples
///
/// ```rust
/// use valscope::value::ValueRange;
///
/// let evens = ValueRange::new(0_i64, 10, 2);
/// assert!(evens.contains(4));
/// assert!(!evens.contains(5));
/// assert!(!evens.contains(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRange<T = i64> {
    /// First value of the progression
    pub start: T,
    /// Exclusive upper bound
    pub end: T,
    /// Distance between consecutive values
    pub step: T,
}

/// A range with signed bounds
pub type SignedRange = ValueRange<i64>;

/// A range with unsigned bounds
pub type UnsignedRange = ValueRange<u64>;

impl<T: Copy + Into<i128>> ValueRange<T> {
    /// Creates a new range.
    #[must_use]
    pub const fn new(start: T, end: T, step: T) -> Self {
        ValueRange { start, end, step }
    }

    /// Returns `true` if `value` is a member of the progression.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.contains_wide(value.into())
    }

    /// Membership test on a widened value, used to test values of a different signedness.
    #[must_use]
    pub fn contains_wide(&self, value: i128) -> bool {
        let start: i128 = self.start.into();
        let end: i128 = self.end.into();
        let step: i128 = self.step.into();

        if step == 0 || value < start || value >= end {
            return false;
        }
        (value - start) % step == 0
    }

    /// Returns `true` if the range has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let start: i128 = self.start.into();
        let end: i128 = self.end.into();
        let step: i128 = self.step.into();
        step == 0 || start >= end
    }
}

impl SignedRange {
    /// Decodes a raw range, sign-extending each 64-bit field from bit 63.
    #[must_use]
    pub const fn from_raw_signed(raw: &ValueRangeRaw) -> Self {
        ValueRange {
            start: raw.start as i64,
            end: raw.end as i64,
            step: raw.step as i64,
        }
    }

    /// Encodes the range, reproducing the original bit pattern of negative bounds.
    #[must_use]
    pub const fn to_raw(&self) -> ValueRangeRaw {
        ValueRangeRaw {
            start: self.start as u64,
            end: self.end as u64,
            step: self.step as u64,
        }
    }
}

impl UnsignedRange {
    /// Decodes a raw range without sign extension.
    #[must_use]
    pub const fn from_raw_unsigned(raw: &ValueRangeRaw) -> Self {
        ValueRange {
            start: raw.start,
            end: raw.end,
            step: raw.step,
        }
    }

    /// Encodes the range.
    #[must_use]
    pub const fn to_raw(&self) -> ValueRangeRaw {
        ValueRangeRaw {
            start: self.start,
            end: self.end,
            step: self.step,
        }
    }
}

impl<T: Copy + Into<i128>> fmt::Display for ValueRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step: i128 = self.step.into();
        if step == 1 {
            write!(
                f,
                "<range: {} to {}>",
                SignedHex::new(self.start),
                SignedHex::new(self.end)
            )
        } else {
            write!(
                f,
                "<range: {} to {}, step {}>",
                SignedHex::new(self.start),
                SignedHex::new(self.end),
                SignedHex(step)
            )
        }
    }
}

/// The engine's fixed layout of a value range: three raw 64-bit fields.
///
/// Whether the bounds are signed depends on the kind of the enclosing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValueRangeRaw {
    /// Raw start bits
    pub start: u64,
    /// Raw end bits
    pub end: u64,
    /// Raw step bits
    pub step: u64,
}

/// A half-open address interval `[start, end)`.
///
/// Orders lexicographically by `(start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AddressRange {
    /// First address of the interval
    pub start: u64,
    /// Exclusive end address
    pub end: u64,
}

impl AddressRange {
    /// Creates a new address range.
    #[must_use]
    pub const fn new(start: u64, end: u64) -> Self {
        AddressRange { start, end }
    }

    /// Returns `true` if `address` lies within the interval.
    #[must_use]
    pub const fn contains(&self, address: u64) -> bool {
        address >= self.start && address < self.end
    }

    /// Number of addresses covered, zero for inverted intervals.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the interval covers no address.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:#x}-{:#x}>", self.start, self.end)
    }
}
