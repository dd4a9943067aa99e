//! Value lattice integration tests.
//!
//! These tests exercise the public API the way an engine binding would:
//! 1. Build raw records as the engine lays them out
//! 2. Decode them with `to_owned`
//! 3. Query membership and equality
//! 4. Encode them back and compare against the original record

use proptest::prelude::*;
use strum::IntoEnumIterator;

use valscope::{
    engine::ArchitectureInfo,
    value::{
        build_mapping, LookupTableEntry, PossibleValueSet, PossibleValueSetRaw, RegisterValueRaw,
        RegisterValueType, RegisterValueWithConfidenceRaw, SignedRange, Tristate, UnsignedRange,
        ValueRange, ValueRangeRaw,
    },
    Error, Result,
};

fn register(kind: RegisterValueType, value: i64, offset: i64) -> RegisterValueRaw {
    RegisterValueRaw {
        state: kind.as_raw(),
        value,
        offset,
    }
}

fn any_kind() -> impl Strategy<Value = RegisterValueType> {
    (0u32..13).prop_map(|raw| RegisterValueType::from_repr(raw).unwrap())
}

#[test]
fn every_register_kind_roundtrips() -> Result<()> {
    for kind in RegisterValueType::iter() {
        let raw = register(kind, -0x1234, 0x40);
        let value = raw.to_owned(None)?;
        assert_eq!(value.kind(), kind);
        assert_eq!(value.to_raw(), raw, "{kind}");
    }
    Ok(())
}

#[test]
fn unknown_register_state_is_rejected() {
    for state in [13, 0x100, u32::MAX] {
        let raw = RegisterValueRaw {
            state,
            value: 0,
            offset: 0,
        };
        assert!(matches!(raw.to_owned(None), Err(Error::UnknownValueType(s)) if s == state));
    }
}

#[test]
fn entry_value_beyond_register_range_is_kept() -> Result<()> {
    let arch = ArchitectureInfo::new("x86_64", ["rax", "rcx"]);
    let raw = register(RegisterValueType::EntryValue, -1, 0);

    let value = raw.to_owned(Some(&arch))?;
    assert_eq!(value.to_string(), "<entry -1>");
    assert_eq!(value.to_raw(), raw);

    let set = PossibleValueSetRaw {
        state: RegisterValueType::EntryValue.as_raw(),
        value: 1 << 33,
        ..PossibleValueSetRaw::default()
    }
    .to_owned(Some(&arch))?;
    assert_eq!(set.register(), Some(1 << 33));
    assert_eq!(set.to_raw().value, 1 << 33);
    Ok(())
}

#[test]
fn entry_value_names_are_best_effort() -> Result<()> {
    let arch = ArchitectureInfo::new("x86_64", ["rax", "rcx"]);
    let raw = register(RegisterValueType::EntryValue, 1, 0);

    assert_eq!(raw.to_owned(Some(&arch))?.to_string(), "<entry rcx>");
    assert_eq!(raw.to_owned(None)?.to_string(), "<entry 1>");
    assert_eq!(raw.to_owned(Some(&arch))?, raw.to_owned(None)?);
    Ok(())
}

#[test]
fn possible_value_examples() {
    assert_eq!(PossibleValueSet::constant(5), 5_i64);
    assert_eq!(PossibleValueSet::constant(5), PossibleValueSet::constant(5));
    assert_ne!(PossibleValueSet::constant(5), PossibleValueSet::constant(6));

    let set = PossibleValueSet::in_set_of_values([1, 2, 3]);
    assert_eq!(set.contains(2), Tristate::True);
    assert_eq!(set.contains(4), Tristate::False);

    let excluded = PossibleValueSet::not_in_set_of_values([1, 2, 3]);
    assert_eq!(excluded.contains(4), Tristate::True);
    assert_eq!(excluded.contains(2), Tristate::False);

    let ranges = PossibleValueSet::signed_range_value([
        SignedRange::new(-5, -1, 1),
        SignedRange::new(7, 10, 1),
    ]);
    assert_eq!(ranges.contains(-3), Tristate::True);
    assert_eq!(ranges.contains(8), Tristate::True);
    assert_eq!(ranges.contains(0), Tristate::False);
    assert_eq!(ranges.contains(20), Tristate::False);
}

#[test]
fn stack_frame_membership_is_not_applicable() {
    let frame = PossibleValueSet::stack_frame_offset(-0x20);
    let answer = frame.contains(-0x20);
    assert_eq!(answer, Tristate::NotApplicable);
    assert!(!answer.is_true());
    assert!(!answer.is_false());
}

#[test]
fn equality_terminates_for_every_kind_pair() -> Result<()> {
    let sets: Vec<PossibleValueSet> = RegisterValueType::iter()
        .map(|kind| {
            let mut raw = PossibleValueSetRaw {
                state: kind.as_raw(),
                value: 2,
                ..PossibleValueSetRaw::default()
            };
            if kind.is_range() {
                raw.ranges = vec![ValueRangeRaw {
                    start: 0,
                    end: 4,
                    step: 1,
                }];
                raw.count = 1;
            } else if kind.is_set() {
                raw.value_set = vec![2];
                raw.count = 1;
            } else if kind == RegisterValueType::LookupTableValue {
                raw.table = vec![LookupTableEntry::new(vec![2], 4).to_raw()];
                raw.count = 1;
            }
            raw.to_owned(None)
        })
        .collect::<Result<_>>()?;

    for lhs in &sets {
        for rhs in &sets {
            let answer = lhs.compare(rhs);
            assert_eq!(answer, rhs.compare(lhs));
            assert_eq!(lhs == rhs, answer == Tristate::True);
        }
        assert_eq!(lhs, lhs);
    }
    Ok(())
}

#[test]
fn count_mismatch_is_rejected() {
    let raw = PossibleValueSetRaw {
        state: RegisterValueType::UnsignedRangeValue.as_raw(),
        ranges: vec![ValueRangeRaw::default(); 2],
        count: 1,
        ..PossibleValueSetRaw::default()
    };
    assert!(matches!(raw.to_owned(None), Err(Error::Malformed { .. })));
}

proptest! {
    /// Property: decoding any register record and encoding it again is lossless.
    #[test]
    fn register_record_roundtrip(
        kind in any_kind(),
        value in any::<i64>(),
        offset in any::<i64>(),
        confidence in any::<u8>()
    ) {
        let arch = ArchitectureInfo::new("x86_64", ["rax", "rcx", "rdx", "rbx"]);
        let raw = register(kind, value, offset);
        prop_assert_eq!(raw.to_owned(None).unwrap().to_raw(), raw);
        prop_assert_eq!(raw.to_owned(Some(&arch)).unwrap().to_raw(), raw);

        let weighted = RegisterValueWithConfidenceRaw { value: raw, confidence };
        prop_assert_eq!(weighted.to_owned(None).unwrap().to_raw_with_confidence(), weighted);
    }

    /// Property: the scalar fields of any possible-value record survive a round trip.
    #[test]
    fn possible_value_scalar_fields_roundtrip(
        kind in any_kind(),
        value in any::<i64>(),
        offset in any::<i64>()
    ) {
        let mut raw = PossibleValueSetRaw {
            state: kind.as_raw(),
            value,
            offset,
            ..PossibleValueSetRaw::default()
        };
        if kind.is_set() {
            raw.value_set = vec![-3, 0, 11];
            raw.count = 3;
        }
        prop_assert_eq!(raw.to_owned(None).unwrap().to_raw(), raw);
    }

    /// Property: range membership is exactly bounds plus stride.
    #[test]
    fn range_membership_definition(
        start in -1000i64..1000,
        end in -1000i64..1000,
        step in 1i64..64,
        x in -1200i64..1200
    ) {
        let range = ValueRange::new(start, end, step);
        let expected = start <= x && x < end && (x - start) % step == 0;
        prop_assert_eq!(range.contains(x), expected);
    }

    /// Property: signed ranges reproduce their raw bits, sign extension included.
    #[test]
    fn signed_range_bits_roundtrip(start in any::<u64>(), end in any::<u64>(), step in any::<u64>()) {
        let raw = ValueRangeRaw { start, end, step };
        prop_assert_eq!(SignedRange::from_raw_signed(&raw).to_raw(), raw);
        prop_assert_eq!(UnsignedRange::from_raw_unsigned(&raw).to_raw(), raw);

        let record = PossibleValueSetRaw {
            state: RegisterValueType::SignedRangeValue.as_raw(),
            ranges: vec![raw],
            count: 1,
            ..PossibleValueSetRaw::default()
        };
        prop_assert_eq!(record.to_owned(None).unwrap().to_raw(), record);
    }

    /// Property: the lookup mapping resolves every source to the last row containing it.
    #[test]
    fn lookup_mapping_last_row_wins(
        rows in prop::collection::vec((prop::collection::vec(-8i64..8, 0..4), any::<i64>()), 0..8)
    ) {
        let table: Vec<LookupTableEntry> = rows
            .iter()
            .map(|(from, to)| LookupTableEntry::new(from.clone(), *to))
            .collect();
        let mapping = build_mapping(&table);

        for from in -8i64..8 {
            let expected = table
                .iter()
                .rev()
                .find(|entry| entry.from_values.contains(&from))
                .map(|entry| entry.to_value);
            prop_assert_eq!(mapping.get(&from).copied(), expected);
        }

        let set = PossibleValueSet::lookup_table_value(table.clone());
        let decoded = set.to_raw().to_owned(None).unwrap();
        prop_assert_eq!(decoded.table().map(|t| t.mapping().clone()), Some(mapping));
    }

    /// Property: set membership and its negation are complementary.
    #[test]
    fn set_membership_complement(values in prop::collection::vec(-50i64..50, 0..16), x in -60i64..60) {
        let inside = PossibleValueSet::in_set_of_values(values.clone());
        let outside = PossibleValueSet::not_in_set_of_values(values.clone());

        prop_assert_eq!(inside.contains(x), Tristate::from(values.contains(&x)));
        prop_assert_eq!(outside.contains(x), !inside.contains(x));
        prop_assert_eq!(inside.count(), inside.values().map_or(0, |v| v.len()));
    }
}
