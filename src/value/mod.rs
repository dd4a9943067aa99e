//! The value lattice: what the engine knows about the contents of a register or variable.
//!
//! # Architecture
//!
//! Two lattice elements are reported by the engine:
//!
//! - [`RegisterValue`] - a single scalar fact (a constant, an entry register, a frame offset)
//! - [`PossibleValueSet`] - a scalar fact or a collection (ranges, a lookup table, a finite set)
//!
//! Both are tagged by the closed [`RegisterValueType`] set. Each has a raw counterpart mirroring
//! the engine's fixed-layout record; decoding with `to_owned` and encoding with `to_raw` are
//! exact inverses for records the engine emits.
//!
//! Values are snapshots. There is no join or meet here; all computation happens in the engine and
//! this module only reports it. Queries that cannot be decided answer
//! [`Tristate::NotApplicable`].
//!
//! # Examples
//!
//! ```rust
//! use valscope::value::{PossibleValueSet, Tristate};
//!
//! let set = PossibleValueSet::not_in_set_of_values([1, 2, 3]);
//! assert_eq!(set.contains(4), Tristate::True);
//! assert_eq!(set.contains(2), Tristate::False);
//! assert_eq!(set.to_string(), "<not in set([0x1, 0x2, 0x3])>");
//! ```

mod kind;
mod lookup;
mod possible;
mod range;
mod register;
mod tristate;

pub use kind::RegisterValueType;
pub use lookup::{build_mapping, LookupTable, LookupTableEntry, LookupTableEntryRaw};
pub use possible::{PossibleValueSet, PossibleValueSetRaw};
pub use range::{AddressRange, SignedRange, UnsignedRange, ValueRange, ValueRangeRaw};
pub use register::{RegisterState, RegisterValue, RegisterValueRaw, RegisterValueWithConfidenceRaw};
pub use tristate::Tristate;
