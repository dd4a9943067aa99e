//! Findings the engine reports alongside values.
//!
//! These are immutable snapshots produced by the engine: a constant seen at an instruction, a
//! resolved indirect branch edge, a stack variable access and the source location of a lifted
//! expression. Each decodes from its raw record with `to_owned`.

mod branch;
mod constant;
mod location;
mod stackref;

pub use branch::{IndirectBranchInfo, IndirectBranchInfoRaw};
pub use constant::{ConstantReference, ConstantReferenceRaw};
pub use location::{ILSourceLocation, ILSourceLocationRaw};
pub use stackref::{StackVariableReference, StackVariableReferenceRaw, NO_OPERAND};
