use std::collections::BTreeSet;

use super::owned::Payload;
use crate::{
    engine::RegisterResolver,
    value::{
        register::entry_register_name, LookupTable, LookupTableEntryRaw, PossibleValueSet,
        RegisterValueType, SignedRange, UnsignedRange, ValueRangeRaw,
    },
    Result,
};

/// The engine's layout of a possible-value set.
///
/// Scalar kinds use `value` (and `offset` for external pointers), exactly like
/// [`crate::value::RegisterValueRaw`]. The range kinds report their offset in `value`. Collection
/// kinds carry their payload in the matching array, with `count` giving its length; arrays not
/// used by the kind are empty and ignored on decode.
///
/// Both scalar fields survive a decode and encode round trip whatever the kind. The set kinds
/// are decoded into an ordered set, so a round trip is exact only for records listing each value
/// once in ascending order: `value_set: [1, 1]` with `count: 2` encodes back as `[1]` with
/// `count: 1`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PossibleValueSetRaw {
    /// Raw [`RegisterValueType`] discriminant
    pub state: u32,
    /// Primary scalar field
    pub value: i64,
    /// Secondary scalar field
    pub offset: i64,
    /// Range payload of the range kinds
    pub ranges: Vec<ValueRangeRaw>,
    /// Row payload of `LookupTableValue`
    pub table: Vec<LookupTableEntryRaw>,
    /// Value payload of the set kinds
    pub value_set: Vec<i64>,
    /// Length of the active payload
    pub count: usize,
}

impl PossibleValueSetRaw {
    /// Convert a `PossibleValueSetRaw` into an owned [`PossibleValueSet`]
    ///
    /// Payloads are copied. The mapping of a lookup table is folded from its rows.
    ///
    /// ## Arguments
    /// * 'resolver' - Optional register table used to name entry registers
    ///
    /// # Errors
    /// Returns [`crate::Error::UnknownValueType`] if the state is outside the closed set, and a
    /// malformed error if `count` disagrees with the active payload or a table row is
    /// inconsistent.
    pub fn to_owned(&self, resolver: Option<&dyn RegisterResolver>) -> Result<PossibleValueSet> {
        let kind = RegisterValueType::from_raw(self.state)?;
        log::trace!("decoding possible value set {kind} with {} elements", self.count);

        let payload = match kind {
            RegisterValueType::SignedRangeValue => Payload::SignedRanges(
                self.active(kind, &self.ranges)?
                    .iter()
                    .map(SignedRange::from_raw_signed)
                    .collect(),
            ),
            RegisterValueType::UnsignedRangeValue => Payload::UnsignedRanges(
                self.active(kind, &self.ranges)?
                    .iter()
                    .map(UnsignedRange::from_raw_unsigned)
                    .collect(),
            ),
            RegisterValueType::LookupTableValue => {
                let entries = self
                    .active(kind, &self.table)?
                    .iter()
                    .map(LookupTableEntryRaw::to_owned)
                    .collect::<Result<Vec<_>>>()?;
                Payload::Table(LookupTable::new(entries))
            }
            RegisterValueType::InSetOfValues | RegisterValueType::NotInSetOfValues => {
                Payload::Values(self.value_set(kind)?)
            }
            _ => Payload::None,
        };

        let name = match kind {
            RegisterValueType::EntryValue => entry_register_name(self.value, resolver),
            _ => None,
        };

        Ok(PossibleValueSet::from_record(kind, self, name, payload))
    }

    fn active<'a, T>(&self, kind: RegisterValueType, payload: &'a [T]) -> Result<&'a [T]> {
        if payload.len() != self.count {
            log::warn!(
                "{kind} record declares {} elements but carries {}",
                self.count,
                payload.len()
            );
            return Err(malformed_error!(
                "{} record declares {} elements, found {}",
                kind,
                self.count,
                payload.len()
            ));
        }
        Ok(payload)
    }

    fn value_set(&self, kind: RegisterValueType) -> Result<BTreeSet<i64>> {
        Ok(self
            .active(kind, &self.value_set)?
            .iter()
            .copied()
            .collect())
    }
}
