//! Small rendering helpers shared by the `Display` implementations.

use std::fmt;

/// Renders an integer as hexadecimal with an explicit sign, `-0x5` rather than the two's
/// complement bit pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignedHex(pub i128);

impl SignedHex {
    /// Wraps any integer that widens losslessly to `i128`.
    pub fn new(value: impl Into<i128>) -> Self {
        SignedHex(value.into())
    }
}

impl fmt::Display for SignedHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-{:#x}", self.0.unsigned_abs())
        } else {
            write!(f, "{:#x}", self.0)
        }
    }
}

/// Renders the sign of a delta as part of the number, `+0x4` or `-0x4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeltaHex(pub i128);

impl fmt::Display for DeltaHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-{:#x}", self.0.unsigned_abs())
        } else {
            write!(f, "+{:#x}", self.0)
        }
    }
}
