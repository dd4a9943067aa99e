use std::{collections::BTreeSet, fmt};

use crate::{
    utils::SignedHex,
    value::{
        LookupTable, LookupTableEntry, PossibleValueSetRaw, RegisterValue, RegisterValueType,
        SignedRange, Tristate, UnsignedRange,
    },
};

/// The variable-length part of a possible-value set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum Payload {
    /// Scalar kinds carry no collection
    #[default]
    None,
    SignedRanges(Vec<SignedRange>),
    UnsignedRanges(Vec<UnsignedRange>),
    Table(LookupTable),
    Values(BTreeSet<i64>),
}

impl Payload {
    fn len(&self) -> usize {
        match self {
            Payload::None => 0,
            Payload::SignedRanges(ranges) => ranges.len(),
            Payload::UnsignedRanges(ranges) => ranges.len(),
            Payload::Table(table) => table.len(),
            Payload::Values(values) => values.len(),
        }
    }
}

/// The set of values a register or variable may hold, as reported by the engine.
///
/// Unlike a [`RegisterValue`], a possible-value set can carry a collection: a union of ranges, a
/// lookup table or a finite set. Next to that payload it keeps the record's two scalar fields;
/// the tag decides how they are read, and fields the tag does not interpret are kept as reported
/// so that [`PossibleValueSet::to_raw`] reproduces a decoded record.
///
/// # Queries
///
/// - [`PossibleValueSet::contains`] tests an integer for membership
/// - [`PossibleValueSet::compare`] tests two sets for equality
///
/// Both answer a [`Tristate`]; combinations that cannot be decided from the values alone answer
/// [`Tristate::NotApplicable`]. `==` is `compare(..) == Tristate::True`, and a set compares equal
/// to a plain integer only if it is a constant holding that integer.
///
/// # Examples
///
/// ```rust
/// use valscope::value::{PossibleValueSet, SignedRange, Tristate};
///
/// assert_eq!(PossibleValueSet::constant(5), 5_i64);
/// assert_eq!(PossibleValueSet::constant(5), PossibleValueSet::constant(5));
/// assert_ne!(PossibleValueSet::constant(5), PossibleValueSet::constant(6));
///
/// let ranges = PossibleValueSet::signed_range_value([
///     SignedRange::new(-5, -1, 1),
///     SignedRange::new(7, 10, 1),
/// ]);
/// assert_eq!(ranges.contains(-3), Tristate::True);
/// assert_eq!(ranges.contains(20), Tristate::False);
/// assert_eq!(ranges.count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PossibleValueSet {
    kind: RegisterValueType,
    value: i64,
    offset: i64,
    name: Option<String>,
    payload: Payload,
}

impl PossibleValueSet {
    const fn scalar(kind: RegisterValueType, value: i64, offset: i64) -> Self {
        PossibleValueSet {
            kind,
            value,
            offset,
            name: None,
            payload: Payload::None,
        }
    }

    const fn collection(kind: RegisterValueType, payload: Payload) -> Self {
        PossibleValueSet {
            kind,
            value: 0,
            offset: 0,
            name: None,
            payload,
        }
    }

    /// Builds a set from a decoded record, keeping both scalar fields as reported.
    pub(crate) fn from_record(
        kind: RegisterValueType,
        raw: &PossibleValueSetRaw,
        name: Option<String>,
        payload: Payload,
    ) -> Self {
        PossibleValueSet {
            kind,
            value: raw.value,
            offset: raw.offset,
            name,
            payload,
        }
    }

    /// Nothing is known.
    #[must_use]
    pub const fn undetermined() -> Self {
        Self::scalar(RegisterValueType::Undetermined, 0, 0)
    }

    /// The entry value of register `register`, optionally with its resolved name.
    #[must_use]
    pub fn entry(register: i64, name: Option<String>) -> Self {
        PossibleValueSet {
            name,
            ..Self::scalar(RegisterValueType::EntryValue, register, 0)
        }
    }

    /// A single known constant.
    #[must_use]
    pub const fn constant(value: i64) -> Self {
        Self::scalar(RegisterValueType::ConstantValue, value, 0)
    }

    /// A single known constant pointer.
    #[must_use]
    pub const fn constant_ptr(value: i64) -> Self {
        Self::scalar(RegisterValueType::ConstantPointerValue, value, 0)
    }

    /// The external symbol at `value` plus `offset`.
    #[must_use]
    pub const fn external_pointer(value: i64, offset: i64) -> Self {
        Self::scalar(RegisterValueType::ExternalPointerValue, value, offset)
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

    /// Any value of a union of signed ranges.
    pub fn signed_range_value(ranges: impl IntoIterator<Item = SignedRange>) -> Self {
        Self::collection(
            RegisterValueType::SignedRangeValue,
            Payload::SignedRanges(ranges.into_iter().collect()),
        )
    }

    /// Any value of a union of unsigned ranges.
    pub fn unsigned_range_value(ranges: impl IntoIterator<Item = UnsignedRange>) -> Self {
        Self::collection(
            RegisterValueType::UnsignedRangeValue,
            Payload::UnsignedRanges(ranges.into_iter().collect()),
        )
    }

    /// Returns the same range set reporting `offset` alongside its ranges.
    ///
    /// Other kinds are returned unchanged.
    #[must_use]
    pub fn with_range_offset(self, offset: i64) -> Self {
        if self.kind.is_range() {
            PossibleValueSet {
                value: offset,
                ..self
            }
        } else {
            self
        }
    }

    /// One of the given values.
    pub fn in_set_of_values(values: impl IntoIterator<Item = i64>) -> Self {
        Self::collection(
            RegisterValueType::InSetOfValues,
            Payload::Values(values.into_iter().collect()),
        )
    }

    /// Anything except the given values.
    pub fn not_in_set_of_values(values: impl IntoIterator<Item = i64>) -> Self {
        Self::collection(
            RegisterValueType::NotInSetOfValues,
            Payload::Values(values.into_iter().collect()),
        )
    }

    /// The result of looking up a value in `table`.
    pub fn lookup_table_value(table: impl IntoIterator<Item = LookupTableEntry>) -> Self {
        Self::collection(
            RegisterValueType::LookupTableValue,
            Payload::Table(LookupTable::new(table)),
        )
    }

    /// The tag of this set.
    #[must_use]
    pub const fn kind(&self) -> RegisterValueType {
        self.kind
    }

    /// Number of elements in the active collection; zero for scalar kinds.
    #[must_use]
    pub fn count(&self) -> usize {
        self.payload.len()
    }

    /// The scalar value of constant, pointer and address kinds.
    #[must_use]
    pub const fn value(&self) -> Option<i64> {
        match self.kind {
            RegisterValueType::ConstantValue
            | RegisterValueType::ConstantPointerValue
            | RegisterValueType::ReturnAddressValue
            | RegisterValueType::ImportedAddressValue
            | RegisterValueType::ExternalPointerValue => Some(self.value),
            _ => None,
        }
    }

    /// The offset of stack frame, external pointer and range kinds.
    #[must_use]
    pub const fn offset(&self) -> Option<i64> {
        match self.kind {
            RegisterValueType::ExternalPointerValue => Some(self.offset),
            // The engine reports these offsets in the record's value field.
            RegisterValueType::StackFrameOffset
            | RegisterValueType::SignedRangeValue
            | RegisterValueType::UnsignedRangeValue => Some(self.value),
            _ => None,
        }
    }

    /// The raw register index of an entry value.
    #[must_use]
    pub const fn register(&self) -> Option<i64> {
        match self.kind {
            RegisterValueType::EntryValue => Some(self.value),
            _ => None,
        }
    }

    /// The resolved register name of an entry value.
    #[must_use]
    pub fn register_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The ranges of a signed range kind, in engine order.
    #[must_use]
    pub fn signed_ranges(&self) -> Option<&[SignedRange]> {
        match &self.payload {
            Payload::SignedRanges(ranges) => Some(ranges.as_slice()),
            _ => None,
        }
    }

    /// The ranges of an unsigned range kind, in engine order.
    #[must_use]
    pub fn unsigned_ranges(&self) -> Option<&[UnsignedRange]> {
        match &self.payload {
            Payload::UnsignedRanges(ranges) => Some(ranges.as_slice()),
            _ => None,
        }
    }

    /// The members or excluded values of a set kind.
    #[must_use]
    pub const fn values(&self) -> Option<&BTreeSet<i64>> {
        match &self.payload {
            Payload::Values(values) => Some(values),
            _ => None,
        }
    }

    /// The table of a lookup table kind.
    #[must_use]
    pub const fn table(&self) -> Option<&LookupTable> {
        match &self.payload {
            Payload::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Resolves `from` through the lookup table, `None` for other kinds or unmapped values.
    #[must_use]
    pub fn resolve(&self, from: i64) -> Option<i64> {
        self.table()?.get(from)
    }

    /// Returns whether `value` is a possible value.
    ///
    /// Constants test equality, ranges test membership of any range in the union and sets test
    /// membership or its negation. Unsigned ranges see `value` as the unsigned register bit
    /// pattern, so `-1` tests as `u64::MAX`. Every other kind answers
    /// [`Tristate::NotApplicable`]; a stack frame offset in particular cannot be related to an
    /// integer without knowing the frame.
    #[must_use]
    pub fn contains(&self, value: i64) -> Tristate {
        match (self.kind, &self.payload) {
            (RegisterValueType::ConstantValue | RegisterValueType::ConstantPointerValue, _) => {
                Tristate::from(self.value == value)
            }
            (_, Payload::SignedRanges(ranges)) => {
                Tristate::from(ranges.iter().any(|range| range.contains(value)))
            }
            (_, Payload::UnsignedRanges(ranges)) => {
                #[allow(clippy::cast_sign_loss)]
                let bits = value as u64;
                Tristate::from(ranges.iter().any(|range| range.contains(bits)))
            }
            (RegisterValueType::InSetOfValues, Payload::Values(values)) => {
                Tristate::from(values.contains(&value))
            }
            (RegisterValueType::NotInSetOfValues, Payload::Values(values)) => {
                Tristate::from(!values.contains(&value))
            }
            _ => Tristate::NotApplicable,
        }
    }

    /// Returns whether the scalar `value` is a possible value.
    ///
    /// A constant set compares against the register value's scalar whatever its kind. Otherwise
    /// the register value must itself be a constant to be tested with
    /// [`PossibleValueSet::contains`].
    #[must_use]
    pub fn contains_value(&self, value: &RegisterValue) -> Tristate {
        if self.kind.is_constant() {
            Tristate::from(self.value == value.value())
        } else if value.kind().is_constant() {
            self.contains(value.value())
        } else {
            Tristate::NotApplicable
        }
    }

    /// Compares two sets.
    ///
    /// Constants and constant pointers compare by value across both tags. Sets of the same tag
    /// compare the fields and payload the tag interprets; an entry value's resolved name, a range
    /// set's offset and a lookup table's derived mapping are not part of that. `Undetermined` is
    /// equal only to `Undetermined`. Any other tag mismatch is [`Tristate::NotApplicable`].
    #[must_use]
    pub fn compare(&self, other: &PossibleValueSet) -> Tristate {
        use RegisterValueType as Kind;

        match (self.kind, other.kind) {
            (lhs, rhs) if lhs.is_constant() && rhs.is_constant() => {
                Tristate::from(self.value == other.value)
            }
            (Kind::Undetermined, Kind::Undetermined) => Tristate::True,
            (Kind::Undetermined, _) | (_, Kind::Undetermined) => Tristate::False,
            (lhs, rhs) if lhs != rhs => Tristate::NotApplicable,
            (Kind::ExternalPointerValue, _) => {
                Tristate::from(self.value == other.value && self.offset == other.offset)
            }
            (kind, _) if kind.has_collection() => Tristate::from(self.payload == other.payload),
            _ => Tristate::from(self.value == other.value),
        }
    }

    /// Encodes into the engine's record; the inverse of [`PossibleValueSetRaw::to_owned`].
    ///
    /// Both scalar fields are emitted as stored. Set kinds are emitted in ascending order. A
    /// lookup table's mapping is not encoded; it is folded again on decode.
    #[must_use]
    pub fn to_raw(&self) -> PossibleValueSetRaw {
        let mut raw = PossibleValueSetRaw {
            state: self.kind.as_raw(),
            value: self.value,
            offset: self.offset,
            count: self.count(),
            ..PossibleValueSetRaw::default()
        };

        match &self.payload {
            Payload::None => {}
            Payload::SignedRanges(ranges) => {
                raw.ranges = ranges.iter().map(SignedRange::to_raw).collect();
            }
            Payload::UnsignedRanges(ranges) => {
                raw.ranges = ranges.iter().map(UnsignedRange::to_raw).collect();
            }
            Payload::Table(table) => {
                raw.table = table
                    .entries()
                    .iter()
                    .map(LookupTableEntry::to_raw)
                    .collect();
            }
            Payload::Values(values) => {
                raw.value_set = values.iter().copied().collect();
            }
        }

        raw
    }
}

impl Default for PossibleValueSet {
    fn default() -> Self {
        Self::undetermined()
    }
}

impl PartialEq for PossibleValueSet {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_true()
    }
}

impl Eq for PossibleValueSet {}

impl PartialEq<i64> for PossibleValueSet {
    fn eq(&self, other: &i64) -> bool {
        self.kind.is_constant() && self.value == *other
    }
}

impl From<&RegisterValue> for PossibleValueSet {
    /// Lifts a scalar register value, keeping both of its record fields. Collection kinds cannot
    /// be recovered from a scalar record and become `Undetermined`.
    fn from(value: &RegisterValue) -> Self {
        if value.kind().has_collection() {
            return Self::undetermined();
        }

        let raw = value.to_raw();
        PossibleValueSet {
            name: value.register_name().map(str::to_string),
            ..Self::scalar(value.kind(), raw.value, raw.offset)
        }
    }
}

fn write_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}

impl fmt::Display for PossibleValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RegisterValueType as Kind;

        match (self.kind, &self.payload) {
            (_, Payload::SignedRanges(ranges)) => {
                write!(f, "<signed ranges: ")?;
                write_list(f, ranges)?;
                write!(f, ">")
            }
            (_, Payload::UnsignedRanges(ranges)) => {
                write!(f, "<unsigned ranges: ")?;
                write_list(f, ranges)?;
                write!(f, ">")
            }
            (_, Payload::Table(table)) => write!(f, "<table: {table}>"),
            (Kind::NotInSetOfValues, Payload::Values(values)) => {
                write!(f, "<not in set(")?;
                write_list(f, values.iter().map(|v| SignedHex::new(*v)))?;
                write!(f, ")>")
            }
            (_, Payload::Values(values)) => {
                write!(f, "<in set(")?;
                write_list(f, values.iter().map(|v| SignedHex::new(*v)))?;
                write!(f, ")>")
            }
            (Kind::EntryValue, _) => match &self.name {
                Some(name) => write!(f, "<entry {name}>"),
                None => write!(f, "<entry {}>", self.value),
            },
            (Kind::ConstantValue, _) => write!(f, "<const {}>", SignedHex::new(self.value)),
            (Kind::ConstantPointerValue, _) => {
                write!(f, "<const ptr {}>", SignedHex::new(self.value))
            }
            (Kind::ExternalPointerValue, _) => write!(
                f,
                "<external {} + offset {}>",
                SignedHex::new(self.value),
                SignedHex::new(self.offset)
            ),
            (Kind::StackFrameOffset, _) => {
                write!(f, "<stack frame offset {}>", SignedHex::new(self.value))
            }
            (Kind::ReturnAddressValue, _) => write!(f, "<return address>"),
            (Kind::ImportedAddressValue, _) => write!(
                f,
                "<imported address from entry {}>",
                SignedHex::new(self.value)
            ),
            _ => write!(f, "<undetermined>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One instance of every tag.
    fn every_kind() -> Vec<PossibleValueSet> {
        vec![
            PossibleValueSet::undetermined(),
            PossibleValueSet::entry(4, Some("rsp".to_string())),
            PossibleValueSet::constant(5),
            PossibleValueSet::constant_ptr(0x40_1000),
            PossibleValueSet::external_pointer(0x7000, 8),
            PossibleValueSet::stack_frame_offset(-0x10),
            PossibleValueSet::return_address(0),
            PossibleValueSet::imported_address(0x40_2000),
            PossibleValueSet::signed_range_value([SignedRange::new(-5, -1, 1)]),
            PossibleValueSet::unsigned_range_value([UnsignedRange::new(0, 0x10, 4)]),
            PossibleValueSet::lookup_table_value([LookupTableEntry::new(vec![0, 1], 0x10)]),
            PossibleValueSet::in_set_of_values([1, 2, 3]),
            PossibleValueSet::not_in_set_of_values([1, 2, 3]),
        ]
    }

    #[test]
    fn test_constant_equality() {
        assert_eq!(PossibleValueSet::constant(5), 5_i64);
        assert_ne!(PossibleValueSet::constant(5), 6_i64);
        assert_eq!(PossibleValueSet::constant(5), PossibleValueSet::constant(5));
        assert_ne!(PossibleValueSet::constant(5), PossibleValueSet::constant(6));
        assert_eq!(
            PossibleValueSet::constant(5),
            PossibleValueSet::constant_ptr(5)
        );
        assert_ne!(PossibleValueSet::in_set_of_values([5]), 5_i64);
    }

    #[test]
    fn test_set_membership() {
        let set = PossibleValueSet::in_set_of_values([1, 2, 3]);
        assert_eq!(set.contains(2), Tristate::True);
        assert_eq!(set.contains(4), Tristate::False);

        let excluded = PossibleValueSet::not_in_set_of_values([1, 2, 3]);
        assert_eq!(excluded.contains(4), Tristate::True);
        assert_eq!(excluded.contains(2), Tristate::False);
    }

    #[test]
    fn test_signed_range_membership() {
        let set = PossibleValueSet::signed_range_value([
            SignedRange::new(-5, -1, 1),
            SignedRange::new(7, 10, 1),
        ]);
        assert_eq!(set.contains(-3), Tristate::True);
        assert_eq!(set.contains(8), Tristate::True);
        assert_eq!(set.contains(0), Tristate::False);
        assert_eq!(set.contains(20), Tristate::False);
    }

    #[test]
    fn test_unsigned_range_bit_pattern() {
        let set = PossibleValueSet::unsigned_range_value([UnsignedRange::new(
            u64::MAX - 3,
            u64::MAX,
            1,
        )]);
        assert_eq!(set.contains(-2), Tristate::True);
        assert_eq!(set.contains(-1), Tristate::False);
        assert_eq!(set.contains(2), Tristate::False);
    }

    #[test]
    fn test_undecidable_membership() {
        assert_eq!(
            PossibleValueSet::stack_frame_offset(-0x10).contains(-0x10),
            Tristate::NotApplicable
        );
        assert_eq!(
            PossibleValueSet::undetermined().contains(0),
            Tristate::NotApplicable
        );
        assert_eq!(
            PossibleValueSet::lookup_table_value(Vec::<LookupTableEntry>::new()).contains(0),
            Tristate::NotApplicable
        );
    }

    #[test]
    fn test_contains_register_value() {
        let constant = PossibleValueSet::constant(0x10);
        assert_eq!(
            constant.contains_value(&RegisterValue::constant_pointer(0x10)),
            Tristate::True
        );
        assert_eq!(
            constant.contains_value(&RegisterValue::constant(0x11)),
            Tristate::False
        );

        let set = PossibleValueSet::in_set_of_values([0x10]);
        assert_eq!(
            set.contains_value(&RegisterValue::constant(0x10)),
            Tristate::True
        );
        assert_eq!(
            set.contains_value(&RegisterValue::stack_frame_offset(0x10)),
            Tristate::NotApplicable
        );
    }

    #[test]
    fn test_compare_every_pair_terminates() {
        let kinds = every_kind();
        for (i, lhs) in kinds.iter().enumerate() {
            for (j, rhs) in kinds.iter().enumerate() {
                let answer = lhs.compare(rhs);
                if i == j {
                    assert_eq!(answer, Tristate::True, "{lhs} against itself");
                } else if lhs.kind().is_constant() && rhs.kind().is_constant() {
                    assert_eq!(answer, Tristate::False);
                } else {
                    assert_ne!(answer, Tristate::True, "{lhs} against {rhs}");
                }
                assert_eq!(answer, rhs.compare(lhs));
            }
        }
    }

    #[test]
    fn test_undetermined_equality() {
        assert_eq!(
            PossibleValueSet::undetermined(),
            PossibleValueSet::default()
        );
        assert_eq!(
            PossibleValueSet::undetermined().compare(&PossibleValueSet::constant(0)),
            Tristate::False
        );
        assert_eq!(
            PossibleValueSet::in_set_of_values([1]).compare(&PossibleValueSet::constant(1)),
            Tristate::NotApplicable
        );
    }

    #[test]
    fn test_set_equality_ignores_order() {
        assert_eq!(
            PossibleValueSet::in_set_of_values([3, 1, 2]),
            PossibleValueSet::in_set_of_values([1, 2, 3, 3])
        );
        assert_ne!(
            PossibleValueSet::in_set_of_values([1, 2]),
            PossibleValueSet::not_in_set_of_values([1, 2])
        );
    }

    #[test]
    fn test_count_matches_payload() {
        for set in every_kind() {
            let expected = match set.kind() {
                RegisterValueType::SignedRangeValue
                | RegisterValueType::UnsignedRangeValue
                | RegisterValueType::LookupTableValue => 1,
                RegisterValueType::InSetOfValues | RegisterValueType::NotInSetOfValues => 3,
                _ => 0,
            };
            assert_eq!(set.count(), expected, "{set}");
        }
        assert_eq!(PossibleValueSet::in_set_of_values([7, 7]).count(), 1);
    }

    #[test]
    fn test_lookup_resolve() {
        let set = PossibleValueSet::lookup_table_value([
            LookupTableEntry::new(vec![0, 1], 0x100),
            LookupTableEntry::new(vec![1, 2], 0x200),
        ]);
        assert_eq!(set.resolve(0), Some(0x100));
        assert_eq!(set.resolve(1), Some(0x200));
        assert_eq!(set.resolve(3), None);
        assert_eq!(PossibleValueSet::constant(1).resolve(1), None);
    }

    #[test]
    fn test_from_register_value() {
        let set = PossibleValueSet::from(&RegisterValue::constant_pointer(0x1000));
        assert_eq!(set, 0x1000_i64);
        assert_eq!(set.kind(), RegisterValueType::ConstantPointerValue);

        let frame = PossibleValueSet::from(&RegisterValue::stack_frame_offset(-8));
        assert_eq!(frame.offset(), Some(-8));
    }

    #[test]
    fn test_range_offset() {
        let ranges = PossibleValueSet::unsigned_range_value([UnsignedRange::new(0, 0x10, 4)])
            .with_range_offset(0x20);
        assert_eq!(ranges.offset(), Some(0x20));
        assert_eq!(ranges.to_raw().value, 0x20);
        assert_eq!(
            ranges,
            PossibleValueSet::unsigned_range_value([UnsignedRange::new(0, 0x10, 4)])
        );

        let constant = PossibleValueSet::constant(3).with_range_offset(0x20);
        assert_eq!(constant.offset(), None);
        assert_eq!(constant, 3_i64);
    }

    #[test]
    fn test_compare_ignores_uninterpreted_fields() {
        let raw = PossibleValueSetRaw {
            state: RegisterValueType::ConstantValue.as_raw(),
            value: 5,
            offset: 7,
            ..PossibleValueSetRaw::default()
        };
        let decoded = raw.to_owned(None).unwrap();
        assert_eq!(decoded, PossibleValueSet::constant(5));
        assert_eq!(decoded.offset(), None);
        assert_eq!(decoded.to_raw().offset, 7);
    }

    #[test]
    fn test_from_register_value_keeps_record() {
        let raw = crate::value::RegisterValueRaw {
            state: RegisterValueType::ReturnAddressValue.as_raw(),
            value: 0x40,
            offset: 0x8,
        };
        let value = raw.to_owned(None).unwrap();
        let set = PossibleValueSet::from(&value);
        assert_eq!(set.to_raw().value, 0x40);
        assert_eq!(set.to_raw().offset, 0x8);

        let entry = PossibleValueSet::from(&RegisterValue::entry(3, Some("rbx".into())));
        assert_eq!(entry.register(), Some(3));
        assert_eq!(entry.register_name(), Some("rbx"));
    }

    #[test]
    fn test_display() {
        let rendered: Vec<String> = every_kind().iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            [
                "<undetermined>",
                "<entry rsp>",
                "<const 0x5>",
                "<const ptr 0x401000>",
                "<external 0x7000 + offset 0x8>",
                "<stack frame offset -0x10>",
                "<return address>",
                "<imported address from entry 0x402000>",
                "<signed ranges: [<range: -0x5 to -0x1>]>",
                "<unsigned ranges: [<range: 0x0 to 0x10, step 0x4>]>",
                "<table: [0x0, 0x1] -> 0x10>",
                "<in set([0x1, 0x2, 0x3])>",
                "<not in set([0x1, 0x2, 0x3])>",
            ]
        );
    }
}
