//! Closed enumerations attached to a variable identity.

use strum::{Display, EnumCount, EnumIter, FromRepr};

use crate::{Error, Result};

/// Where a variable lives.
///
/// Determines how [`super::CoreVariable::storage`] is read: a byte offset into the stack frame
/// for [`VariableSourceType::Stack`], a register or flag index otherwise. The discriminants are
/// the engine's raw values and occupy the top two bits of a packed identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumCount,
    FromRepr,
)]
#[repr(u32)]
pub enum VariableSourceType {
    /// A stack slot, `storage` is the frame offset
    Stack = 0,
    /// A register, `storage` is the register index
    Register = 1,
    /// A flag, `storage` is the flag index
    Flag = 2,
}

impl VariableSourceType {
    /// Decodes a raw source type reported by the engine.
    ///
    /// # Errors
    /// Returns [`Error::UnknownSourceType`] if `raw` is not a known source type.
    pub fn from_raw(raw: u32) -> Result<Self> {
        match Self::from_repr(raw) {
            Some(source) => Ok(source),
            None => {
                log::warn!("rejecting variable record with unknown source type {raw}");
                Err(Error::UnknownSourceType(raw))
            }
        }
    }

    /// The raw value the engine uses for this source type.
    #[must_use]
    pub const fn as_raw(self) -> u32 {
        self as u32
    }
}

/// Per-variable override of the engine's dead-store elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, FromRepr)]
#[repr(u32)]
pub enum DeadStoreElimination {
    /// Follow the function-wide setting
    #[default]
    Default = 0,
    /// Never eliminate stores to this variable
    Prevent = 1,
    /// Always allow eliminating stores to this variable
    Allow = 2,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_source_type_raw() {
        for source in VariableSourceType::iter() {
            assert_eq!(VariableSourceType::from_raw(source.as_raw()).unwrap(), source);
        }
        assert_eq!(VariableSourceType::COUNT, 3);
        assert!(matches!(
            VariableSourceType::from_raw(3),
            Err(Error::UnknownSourceType(3))
        ));
    }

    #[test]
    fn test_source_type_order() {
        assert!(VariableSourceType::Stack < VariableSourceType::Register);
        assert!(VariableSourceType::Register < VariableSourceType::Flag);
    }

    #[test]
    fn test_dead_store_default() {
        assert_eq!(DeadStoreElimination::default(), DeadStoreElimination::Default);
        assert_eq!(DeadStoreElimination::from_repr(1), Some(DeadStoreElimination::Prevent));
        assert_eq!(DeadStoreElimination::Allow.to_string(), "Allow");
    }
}
