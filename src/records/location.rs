use std::fmt;

use crate::records::NO_OPERAND;

/// The instruction and operand a lifted expression originated from.
///
/// The default location is invalid and points nowhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ILSourceLocation {
    /// Address of the originating instruction
    pub address: u64,
    /// Operand of that instruction, `None` if not tied to one
    pub source_operand: Option<u32>,
    /// Whether this location points anywhere
    pub valid: bool,
}

impl ILSourceLocation {
    /// A valid location at `address`.
    #[must_use]
    pub const fn new(address: u64, source_operand: Option<u32>) -> Self {
        ILSourceLocation {
            address,
            source_operand,
            valid: true,
        }
    }

    /// Encodes into the engine's record.
    #[must_use]
    pub fn to_raw(&self) -> ILSourceLocationRaw {
        ILSourceLocationRaw {
            address: self.address,
            source_operand: self.source_operand.unwrap_or(NO_OPERAND),
            valid: self.valid,
        }
    }
}

impl fmt::Display for ILSourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "<no location>");
        }
        match self.source_operand {
            Some(operand) => write!(f, "<{:#x} operand {operand}>", self.address),
            None => write!(f, "<{:#x}>", self.address),
        }
    }
}

/// The engine's record of an [`ILSourceLocation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ILSourceLocationRaw {
    /// Address
    pub address: u64,
    /// Operand index or [`NO_OPERAND`]
    pub source_operand: u32,
    /// Validity flag
    pub valid: bool,
}

impl ILSourceLocationRaw {
    /// Convert an `ILSourceLocationRaw` into an owned [`ILSourceLocation`]
    #[must_use]
    pub fn to_owned(&self) -> ILSourceLocation {
        ILSourceLocation {
            address: self.address,
            source_operand: (self.source_operand != NO_OPERAND).then_some(self.source_operand),
            valid: self.valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_invalid() {
        let location = ILSourceLocation::default();
        assert!(!location.valid);
        assert_eq!(location.to_string(), "<no location>");
        assert_eq!(location.to_raw().source_operand, NO_OPERAND);
    }

    #[test]
    fn test_raw() {
        let location = ILSourceLocation::new(0x401000, Some(2));
        assert_eq!(location.to_raw().to_owned(), location);
        assert_eq!(location.to_string(), "<0x401000 operand 2>");

        let raw = ILSourceLocationRaw {
            address: 0x10,
            source_operand: NO_OPERAND,
            valid: true,
        };
        assert_eq!(raw.to_owned(), ILSourceLocation::new(0x10, None));
        assert_eq!(raw.to_owned().to_string(), "<0x10>");
    }
}
