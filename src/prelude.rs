//! # valscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the valscope library. Import this module to get quick access to the value lattice,
//! the variable model and the engine interface.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all valscope operations
pub use crate::Error;

/// The result type used throughout valscope
pub use crate::Result;

// ================================================================================================
// Value Lattice
// ================================================================================================

/// Tags and query answers
pub use crate::value::{RegisterValueType, Tristate};

/// Scalar register values and their engine records
pub use crate::value::{
    RegisterState, RegisterValue, RegisterValueRaw, RegisterValueWithConfidenceRaw,
};

/// Possible-value sets and their engine record
pub use crate::value::{PossibleValueSet, PossibleValueSetRaw};

/// Building blocks of possible-value sets
pub use crate::value::{
    AddressRange, LookupTable, LookupTableEntry, SignedRange, UnsignedRange, ValueRange,
};

// ================================================================================================
// Variables
// ================================================================================================

/// Variable identities and handles
pub use crate::variable::{
    CoreVariable, DeadStoreElimination, ParameterVariables, Variable, VariableNameAndType,
    VariableRaw, VariableSourceType,
};

// ================================================================================================
// Records
// ================================================================================================

/// Findings reported alongside values
pub use crate::records::{
    ConstantReference, ILSourceLocation, IndirectBranchInfo, StackVariableReference,
};

// ================================================================================================
// Engine Interface
// ================================================================================================

/// Collaborator traits
pub use crate::engine::{Architecture, ArchitectureLookup, RegisterResolver, VariableOwner};

/// In-memory collaborators and shared engine types
pub use crate::engine::{
    ArchitectureInfo, ArchitectureRegistry, Confidence, FunctionId, MemoryFunction, TypeRef,
    MAX_CONFIDENCE,
};
