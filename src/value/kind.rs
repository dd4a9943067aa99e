//! The closed set of value kinds the engine reports.

use strum::{Display, EnumCount, EnumIter, FromRepr};

use crate::{Error, Result};

/// Tag of a register value or possible-value set.
///
/// The set is closed: an engine reporting any other state is out of sync with this library and
/// its records are rejected with [`Error::UnknownValueType`].
///
/// The discriminants are the engine's raw state values.
///
/// # Examples
///
/// ```rust
/// use valscope::value::RegisterValueType;
///
/// let kind = RegisterValueType::from_raw(2)?;
/// assert_eq!(kind, RegisterValueType::ConstantValue);
/// assert!(kind.is_constant());
/// assert!(RegisterValueType::from_raw(0x1337).is_err());
/// # Ok::<(), valscope::Error>(())
/// ```
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
pub enum RegisterValueType {
    /// Nothing is known about the value
    Undetermined = 0,
    /// The value a register held on function entry
    EntryValue = 1,
    /// A known constant
    ConstantValue = 2,
    /// A known constant which is a pointer
    ConstantPointerValue = 3,
    /// A pointer into an external symbol plus an offset
    ExternalPointerValue = 4,
    /// The stack frame pointer plus a fixed offset
    StackFrameOffset = 5,
    /// The function's return address
    ReturnAddressValue = 6,
    /// An address loaded from an import table entry
    ImportedAddressValue = 7,
    /// One of a union of signed ranges
    SignedRangeValue = 8,
    /// One of a union of unsigned ranges
    UnsignedRangeValue = 9,
    /// One of the keys of a lookup table, mapping to the table's results
    LookupTableValue = 10,
    /// A member of a finite set
    InSetOfValues = 11,
    /// Anything except the members of a finite set
    NotInSetOfValues = 12,
}

impl RegisterValueType {
    /// Decodes a raw state reported by the engine.
    ///
    /// # Errors
    /// Returns [`Error::UnknownValueType`] if `state` is outside the closed set.
    pub fn from_raw(state: u32) -> Result<Self> {
        match Self::from_repr(state) {
            Some(kind) => Ok(kind),
            None => {
                log::warn!("rejecting value record with unknown state {state}");
                Err(Error::UnknownValueType(state))
            }
        }
    }

    /// The raw state the engine uses for this kind.
    #[must_use]
    pub const fn as_raw(self) -> u32 {
        self as u32
    }

    /// Returns `true` for `ConstantValue` and `ConstantPointerValue`.
    #[must_use]
    pub const fn is_constant(self) -> bool {
        matches!(self, Self::ConstantValue | Self::ConstantPointerValue)
    }

    /// Returns `true` for the signed and unsigned range kinds.
    #[must_use]
    pub const fn is_range(self) -> bool {
        matches!(self, Self::SignedRangeValue | Self::UnsignedRangeValue)
    }

    /// Returns `true` for `InSetOfValues` and `NotInSetOfValues`.
    #[must_use]
    pub const fn is_set(self) -> bool {
        matches!(self, Self::InSetOfValues | Self::NotInSetOfValues)
    }

    /// Returns `true` if values of this kind carry a variable-length payload.
    ///
    /// Such payloads can only be expressed by a possible-value set; a scalar register value
    /// record merely reports the kind.
    #[must_use]
    pub const fn has_collection(self) -> bool {
        self.is_range() || self.is_set() || matches!(self, Self::LookupTableValue)
    }
}
