use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    engine::MAX_CONFIDENCE,
    utils::SignedHex,
    value::{RegisterValueRaw, RegisterValueType, RegisterValueWithConfidenceRaw},
};

/// The payload of a register value, one shape per kind.
///
/// This is a view of the fields the kind interprets. The resolved name of an entry register is
/// not part of equality or hashing, matching [`RegisterValue`].
#[derive(Debug, Clone, Eq)]
pub enum RegisterState {
    /// Nothing is known about the value
    Undetermined,
    /// The value register `register` held on function entry
    Entry {
        /// Raw register index as reported, the identity of the register
        register: i64,
        /// Name resolved through the architecture, if a resolver was available
        name: Option<String>,
    },
    /// A known constant
    Constant(i64),
    /// A known constant pointer
    ConstantPointer(i64),
    /// An external symbol's address plus an offset
    ExternalPointer {
        /// Address of the external symbol
        value: i64,
        /// Offset from the symbol
        offset: i64,
    },
    /// The stack frame pointer plus an offset
    StackFrameOffset(i64),
    /// The function's return address
    ReturnAddress(i64),
    /// An address loaded from the import table entry at the given address
    ImportedAddress(i64),
    /// A collection-valued kind reported through a scalar record
    ///
    /// Ranges, lookup tables and sets cannot be expressed by one scalar; the engine reports
    /// only their kind and scalar fields here, the payload is available as a
    /// [`crate::value::PossibleValueSet`].
    Collection {
        /// One of the collection kinds
        kind: RegisterValueType,
        /// Raw value field
        value: i64,
        /// Raw offset field
        offset: i64,
    },
}

impl RegisterState {
    /// The kind and the record fields this payload encodes to.
    fn record(&self) -> (RegisterValueType, i64, i64) {
        match self {
            Self::Undetermined => (RegisterValueType::Undetermined, 0, 0),
            Self::Entry { register, .. } => (RegisterValueType::EntryValue, *register, 0),
            Self::Constant(value) => (RegisterValueType::ConstantValue, *value, 0),
            Self::ConstantPointer(value) => (RegisterValueType::ConstantPointerValue, *value, 0),
            Self::ExternalPointer { value, offset } => {
                (RegisterValueType::ExternalPointerValue, *value, *offset)
            }
            Self::StackFrameOffset(offset) => (RegisterValueType::StackFrameOffset, *offset, 0),
            Self::ReturnAddress(value) => (RegisterValueType::ReturnAddressValue, *value, 0),
            Self::ImportedAddress(value) => (RegisterValueType::ImportedAddressValue, *value, 0),
            Self::Collection {
                kind,
                value,
                offset,
            } => (*kind, *value, *offset),
        }
    }
}

impl PartialEq for RegisterState {
    fn eq(&self, other: &Self) -> bool {
        self.record() == other.record()
    }
}

impl Hash for RegisterState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.record().hash(state);
    }
}

/// What is known about a single register or stack slot at one instruction.
///
/// A register value is a tag, the engine record's two scalar fields and the engine's confidence.
/// The tag decides how the fields are read (see [`RegisterValue::state`]); fields the tag does
/// not interpret are still kept, so [`RegisterValue::to_raw`] reproduces the decoded record bit
/// for bit. Values are snapshots: decoded from an engine record or built with the named
/// constructors, never mutated.
///
/// # Equality
///
/// Two register values are equal when kind, value, offset and confidence all match, where value
/// and offset are the interpreted [`RegisterValue::value`] and [`RegisterValue::offset`]. The
/// resolved name of an entry register is a lookup result and not part of the identity. A
/// register value also compares against a plain integer (by [`RegisterValue::value`]) and
/// against a `bool` (by truthiness, `value != 0`).
///
/// # Examples
///
/// ```rust
/// use valscope::value::RegisterValue;
///
/// let value = RegisterValue::constant(0x10);
/// assert_eq!(value, 0x10_i64);
/// assert_eq!(value, true);
/// assert_eq!(value.to_string(), "<const 0x10>");
/// assert_ne!(value, RegisterValue::constant(0x10).with_confidence(4));
/// ```
#[derive(Debug, Clone)]
pub struct RegisterValue {
    kind: RegisterValueType,
    value: i64,
    offset: i64,
    confidence: u8,
    name: Option<String>,
}

impl RegisterValue {
    const fn scalar(kind: RegisterValueType, value: i64, offset: i64) -> Self {
        RegisterValue {
            kind,
            value,
            offset,
            confidence: MAX_CONFIDENCE,
            name: None,
        }
    }

    /// Builds a value from a decoded record, keeping both scalar fields as reported.
    pub(crate) fn from_record(
        kind: RegisterValueType,
        raw: &RegisterValueRaw,
        confidence: u8,
        name: Option<String>,
    ) -> Self {
        RegisterValue {
            kind,
            value: raw.value,
            offset: raw.offset,
            confidence,
            name,
        }
    }

    /// Creates a register value from its payload with full confidence.
    #[must_use]
    pub fn new(state: RegisterState) -> Self {
        let (kind, value, offset) = state.record();
        let name = match state {
            RegisterState::Entry { name, .. } => name,
            _ => None,
        };
        RegisterValue {
            name,
            ..Self::scalar(kind, value, offset)
        }
    }

    /// Nothing is known about the value.
    #[must_use]
    pub const fn undetermined() -> Self {
        Self::scalar(RegisterValueType::Undetermined, 0, 0)
    }

    /// A known constant.
    #[must_use]
    pub const fn constant(value: i64) -> Self {
        Self::scalar(RegisterValueType::ConstantValue, value, 0)
    }

    /// A known constant pointer.
    #[must_use]
    pub const fn constant_pointer(value: i64) -> Self {
        Self::scalar(RegisterValueType::ConstantPointerValue, value, 0)
    }

    /// The entry value of register `register`, optionally with its resolved name.
    #[must_use]
    pub fn entry(register: i64, name: Option<String>) -> Self {
        RegisterValue {
            name,
            ..Self::scalar(RegisterValueType::EntryValue, register, 0)
        }
    }

    /// The stack frame pointer plus `offset`.
    #[must_use]
    pub const fn stack_frame_offset(offset: i64) -> Self {
        Self::scalar(RegisterValueType::StackFrameOffset, offset, 0)
    }

    /// The function's return address.
    #[must_use]
    pub const fn return_address(value: i64) -> Self {
        Self::scalar(RegisterValueType::ReturnAddressValue, value, 0)
    }

    /// An address loaded from the import entry at `entry`.
    #[must_use]
    pub const fn imported_address(entry: i64) -> Self {
        Self::scalar(RegisterValueType::ImportedAddressValue, entry, 0)
    }

    /// The external symbol at `value` plus `offset`.
    #[must_use]
    pub const fn external_pointer(value: i64, offset: i64) -> Self {
        Self::scalar(RegisterValueType::ExternalPointerValue, value, offset)
    }

    /// Returns the same value with a different confidence.
    #[must_use]
    pub fn with_confidence(self, confidence: u8) -> Self {
        RegisterValue { confidence, ..self }
    }

    /// The payload of this value, read according to its kind.
    #[must_use]
    pub fn state(&self) -> RegisterState {
        match self.kind {
            RegisterValueType::Undetermined => RegisterState::Undetermined,
            RegisterValueType::EntryValue => RegisterState::Entry {
                register: self.value,
                name: self.name.clone(),
            },
            RegisterValueType::ConstantValue => RegisterState::Constant(self.value),
            RegisterValueType::ConstantPointerValue => RegisterState::ConstantPointer(self.value),
            RegisterValueType::ExternalPointerValue => RegisterState::ExternalPointer {
                value: self.value,
                offset: self.offset,
            },
            RegisterValueType::StackFrameOffset => RegisterState::StackFrameOffset(self.value),
            RegisterValueType::ReturnAddressValue => RegisterState::ReturnAddress(self.value),
            RegisterValueType::ImportedAddressValue => RegisterState::ImportedAddress(self.value),
            kind => RegisterState::Collection {
                kind,
                value: self.value,
                offset: self.offset,
            },
        }
    }

    /// The engine's confidence in this value.
    #[must_use]
    pub const fn confidence(&self) -> u8 {
        self.confidence
    }

    /// The tag of this value.
    #[must_use]
    pub const fn kind(&self) -> RegisterValueType {
        self.kind
    }

    /// The scalar value; zero for kinds without one.
    ///
    /// For an entry value this is the raw register index.
    #[must_use]
    pub const fn value(&self) -> i64 {
        match self.kind {
            RegisterValueType::Undetermined | RegisterValueType::StackFrameOffset => 0,
            _ => self.value,
        }
    }

    /// The offset; the frame offset of a stack frame value, zero for kinds without one.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        match self.kind {
            RegisterValueType::StackFrameOffset => self.value,
            kind if kind.has_collection() => self.offset,
            RegisterValueType::ExternalPointerValue => self.offset,
            _ => 0,
        }
    }

    /// The value as a plain integer.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.value()
    }

    /// Truthiness of the value, `value != 0`.
    #[must_use]
    pub const fn as_bool(&self) -> bool {
        self.value() != 0
    }

    /// The resolved register name of an entry value.
    #[must_use]
    pub fn register_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Encodes into the engine's plain record; the inverse of [`RegisterValueRaw::to_owned`].
    ///
    /// Both scalar fields are emitted as stored, including those the kind does not interpret.
    /// Values built with the named constructors leave such fields zero. The frame offset of a
    /// stack frame value travels in the record's `value` field, matching the engine's layout.
    #[must_use]
    pub fn to_raw(&self) -> RegisterValueRaw {
        RegisterValueRaw {
            state: self.kind.as_raw(),
            value: self.value,
            offset: self.offset,
        }
    }

    /// Encodes into the engine's record carrying a confidence.
    #[must_use]
    pub fn to_raw_with_confidence(&self) -> RegisterValueWithConfidenceRaw {
        RegisterValueWithConfidenceRaw {
            value: self.to_raw(),
            confidence: self.confidence,
        }
    }
}

impl Default for RegisterValue {
    fn default() -> Self {
        Self::undetermined()
    }
}

impl PartialEq for RegisterValue {
    fn eq(&self, other: &Self) -> bool {
        (self.kind, self.value(), self.offset(), self.confidence)
            == (other.kind, other.value(), other.offset(), other.confidence)
    }
}

impl Eq for RegisterValue {}

impl PartialEq<i64> for RegisterValue {
    fn eq(&self, other: &i64) -> bool {
        self.value() == *other
    }
}

impl PartialEq<bool> for RegisterValue {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == *other
    }
}

impl From<&RegisterValue> for i64 {
    fn from(value: &RegisterValue) -> Self {
        value.value()
    }
}

impl fmt::Display for RegisterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state() {
            RegisterState::Undetermined => write!(f, "<undetermined>"),
            RegisterState::Entry {
                name: Some(name), ..
            } => write!(f, "<entry {name}>"),
            RegisterState::Entry { register, .. } => write!(f, "<entry {register}>"),
            RegisterState::Constant(value) => write!(f, "<const {}>", SignedHex::new(value)),
            RegisterState::ConstantPointer(value) => {
                write!(f, "<const ptr {}>", SignedHex::new(value))
            }
            RegisterState::ExternalPointer { value, offset } => write!(
                f,
                "<external {} + offset {}>",
                SignedHex::new(value),
                SignedHex::new(offset)
            ),
            RegisterState::StackFrameOffset(offset) => {
                write!(f, "<stack frame offset {}>", SignedHex::new(offset))
            }
            RegisterState::ReturnAddress(_) => write!(f, "<return address>"),
            RegisterState::ImportedAddress(value) => write!(
                f,
                "<imported address from entry {}>",
                SignedHex::new(value)
            ),
            RegisterState::Collection { kind, .. } => write!(f, "<{kind}>"),
        }
    }
}
