//! Packing of a variable identity into a single integer.
//!
//! Layout of a packed identifier, most significant bit first:
//!
//! | Bits | Field |
//! |------|-------|
//! | 62..63 | source type |
//! | 32..61 | index |
//! | 0..31 | storage, two's complement |
//!
//! Storage is sign-extended from bit 31 on unpack, so a triple round trips iff its index fits
//! 30 bits and its storage fits an `i32`.

use crate::{
    variable::{CoreVariable, VariableSourceType},
    Error, Result,
};

const SOURCE_SHIFT: u32 = 62;
const INDEX_SHIFT: u32 = 32;
const INDEX_MASK: u64 = 0x3FFF_FFFF;
const STORAGE_MASK: u64 = 0xFFFF_FFFF;

/// Returns `true` if `var` survives a pack and unpack unchanged.
#[must_use]
pub fn fits(var: &CoreVariable) -> bool {
    u64::from(var.index) <= INDEX_MASK && i32::try_from(var.storage).is_ok()
}

/// Packs `var`, truncating fields that do not fit.
#[must_use]
pub fn pack(var: &CoreVariable) -> u64 {
    #[allow(clippy::cast_sign_loss)]
    let storage = (var.storage as u64) & STORAGE_MASK;

    (u64::from(var.source_type.as_raw()) << SOURCE_SHIFT)
        | ((u64::from(var.index) & INDEX_MASK) << INDEX_SHIFT)
        | storage
}

/// Packs `var`, refusing identities that would not round trip.
///
/// # Errors
/// Returns [`Error::IdentifierOverflow`] if the index exceeds 30 bits or the storage does not
/// fit an `i32`.
pub fn try_pack(var: &CoreVariable) -> Result<u64> {
    if fits(var) {
        Ok(pack(var))
    } else {
        Err(Error::IdentifierOverflow(*var))
    }
}

/// Unpacks an identifier into its triple.
///
/// # Errors
/// Returns [`Error::UnknownSourceType`] if the top two bits hold no known source type.
pub fn unpack(identifier: u64) -> Result<CoreVariable> {
    #[allow(clippy::cast_possible_truncation)]
    let source_type = VariableSourceType::from_raw((identifier >> SOURCE_SHIFT) as u32)?;
    #[allow(clippy::cast_possible_truncation)]
    let index = ((identifier >> INDEX_SHIFT) & INDEX_MASK) as u32;
    #[allow(clippy::cast_possible_truncation)]
    let storage = i64::from((identifier & STORAGE_MASK) as u32 as i32);

    Ok(CoreVariable {
        source_type,
        index,
        storage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let var = CoreVariable::new(VariableSourceType::Register, 3, 0x10);
        assert_eq!(pack(&var), 0x4000_0003_0000_0010);

        let stack = CoreVariable::new(VariableSourceType::Stack, 0, -8);
        assert_eq!(pack(&stack), 0x0000_0000_FFFF_FFF8);

        let flag = CoreVariable::new(VariableSourceType::Flag, INDEX_MASK as u32, 0);
        assert_eq!(pack(&flag), 0xBFFF_FFFF_0000_0000);
    }

    #[test]
    fn test_unpack_sign_extends() {
        let var = unpack(0x0000_0001_FFFF_FFF0).unwrap();
        assert_eq!(var, CoreVariable::new(VariableSourceType::Stack, 1, -0x10));
    }

    #[test]
    fn test_unpack_unknown_source() {
        assert!(matches!(
            unpack(0xC000_0000_0000_0000),
            Err(Error::UnknownSourceType(3))
        ));
    }

    #[test]
    fn test_overflow() {
        let wide_index = CoreVariable::new(VariableSourceType::Register, 0x4000_0000, 0);
        assert!(matches!(
            try_pack(&wide_index),
            Err(Error::IdentifierOverflow(_))
        ));

        let wide_storage = CoreVariable::new(VariableSourceType::Stack, 0, i64::from(i32::MAX) + 1);
        assert!(!fits(&wide_storage));
        assert!(try_pack(&wide_storage).is_err());

        let edge = CoreVariable::new(VariableSourceType::Stack, 0, i64::from(i32::MIN));
        assert_eq!(unpack(try_pack(&edge).unwrap()).unwrap(), edge);
    }
}
