//! Possible-value sets: the collection-valued lattice element.
//!
//! [`PossibleValueSet`] generalizes a register value to ranges, lookup tables and finite sets.
//! [`PossibleValueSetRaw`] is the engine's record with its variable-length payload arrays.

mod owned;
mod raw;

pub use owned::PossibleValueSet;
pub use raw::PossibleValueSetRaw;
