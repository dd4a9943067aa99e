use std::fmt;

use crate::{utils::SignedHex, Result};

/// A constant observed at an instruction, as reported by the engine.
///
/// A `size` of zero means the constant spans the full register width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstantReference {
    /// The constant
    pub value: i64,
    /// Width in bytes, zero if unspecified
    pub size: u32,
    /// The constant is used as a pointer
    pub pointer: bool,
    /// The constant is an intermediate of a larger computation
    pub intermediate: bool,
}

impl fmt::Display for ConstantReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pointer {
            write!(f, "<constant pointer {}>", SignedHex::new(self.value))
        } else if self.size == 0 {
            write!(f, "<constant {}>", SignedHex::new(self.value))
        } else {
            write!(f, "<constant {} size {}>", SignedHex::new(self.value), self.size)
        }
    }
}

/// The engine's record of a [`ConstantReference`], with a native-width size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConstantReferenceRaw {
    /// The constant
    pub value: i64,
    /// Width in bytes
    pub size: u64,
    /// Pointer flag
    pub pointer: bool,
    /// Intermediate flag
    pub intermediate: bool,
}

impl ConstantReferenceRaw {
    /// Convert a `ConstantReferenceRaw` into an owned [`ConstantReference`]
    ///
    /// # Errors
    /// Returns a malformed error if the size does not fit 32 bits.
    pub fn to_owned(&self) -> Result<ConstantReference> {
        let size = u32::try_from(self.size)
            .map_err(|_| malformed_error!("Constant reference size too large - {}", self.size))?;

        Ok(ConstantReference {
            value: self.value,
            size,
            pointer: self.pointer,
            intermediate: self.intermediate,
        })
    }
}
