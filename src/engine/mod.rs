//! The narrow interface to the external analysis engine.
//!
//! This crate computes no values itself. Everything it mirrors is produced by an analysis engine
//! which is reached through a handful of requests:
//!
//! - resolve a register index to a name within an architecture ([`RegisterResolver`])
//! - look up an architecture by the id used in raw records ([`ArchitectureLookup`])
//! - read and write the variable table of a function ([`VariableOwner`])
//!
//! These are invoked, never implemented, by the rest of the crate. For tests and for hosts
//! without an engine, [`ArchitectureInfo`], [`ArchitectureRegistry`] and [`MemoryFunction`]
//! provide in-memory implementations.
//!
//! # Thread Safety
//!
//! [`Architecture`] and [`VariableOwner`] require `Send + Sync`. Owners do their own locking; this
//! crate performs none on their behalf.

mod arch;
mod function;
mod memory;
mod types;

pub use arch::{
    Architecture, ArchitectureInfo, ArchitectureLookup, ArchitectureRegistry, RegisterResolver,
};
pub use function::{FunctionId, VariableOwner};
pub use memory::{MemoryFunction, UserVariable};
pub use types::{Confidence, TypeRef, MAX_CONFIDENCE};
