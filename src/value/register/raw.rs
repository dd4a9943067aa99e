use crate::{
    engine::{RegisterResolver, MAX_CONFIDENCE},
    value::{RegisterValue, RegisterValueType},
    Result,
};

/// The engine's fixed layout of a register value: a state tag and two scalar fields.
///
/// Which field carries what depends on the state:
///
/// | State | `value` | `offset` |
/// |-------|---------|----------|
/// | `EntryValue` | register index | - |
/// | constants, return and imported addresses | the value | - |
/// | `StackFrameOffset` | frame offset | - |
/// | `ExternalPointerValue` | symbol address | offset from symbol |
///
/// Fields marked `-` are not interpreted, but a decoded [`RegisterValue`] keeps them so that
/// encoding it again reproduces the record exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RegisterValueRaw {
    /// Raw [`RegisterValueType`] discriminant
    pub state: u32,
    /// Primary scalar field
    pub value: i64,
    /// Secondary scalar field
    pub offset: i64,
}

impl RegisterValueRaw {
    /// Convert a `RegisterValueRaw` into an owned [`RegisterValue`] with full confidence
    ///
    /// ## Arguments
    /// * 'resolver' - Optional register table used to name entry registers
    ///
    /// # Errors
    /// Returns [`crate::Error::UnknownValueType`] if the state is outside the closed set. Naming
    /// an entry register is best effort and never fails.
    pub fn to_owned(&self, resolver: Option<&dyn RegisterResolver>) -> Result<RegisterValue> {
        self.decode(resolver, MAX_CONFIDENCE)
    }

    fn decode(
        &self,
        resolver: Option<&dyn RegisterResolver>,
        confidence: u8,
    ) -> Result<RegisterValue> {
        let kind = RegisterValueType::from_raw(self.state)?;
        log::trace!("decoding register value {kind} (confidence {confidence})");

        let name = match kind {
            RegisterValueType::EntryValue => entry_register_name(self.value, resolver),
            _ => None,
        };

        Ok(RegisterValue::from_record(kind, self, confidence, name))
    }
}

/// Best-effort name of an entry register; indices outside the register number space stay
/// unnamed.
pub(crate) fn entry_register_name(
    register: i64,
    resolver: Option<&dyn RegisterResolver>,
) -> Option<String> {
    let register = u32::try_from(register).ok()?;
    resolver?.register_name(register)
}

/// A [`RegisterValueRaw`] together with the engine's confidence in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterValueWithConfidenceRaw {
    /// The register value record
    pub value: RegisterValueRaw,
    /// Confidence, `0..=MAX_CONFIDENCE`
    pub confidence: u8,
}

impl RegisterValueWithConfidenceRaw {
    /// Convert a `RegisterValueWithConfidenceRaw` into an owned [`RegisterValue`]
    ///
    /// ## Arguments
    /// * 'resolver' - Optional register table used to name entry registers
    ///
    /// # Errors
    /// Returns an error under the same conditions as [`RegisterValueRaw::to_owned`].
    pub fn to_owned(&self, resolver: Option<&dyn RegisterResolver>) -> Result<RegisterValue> {
        self.value.decode(resolver, self.confidence)
    }
}
