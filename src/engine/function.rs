//! The owning-function side of the variable model.
//!
//! Names, types and dead-store policies of variables are not stored in [`crate::variable::Variable`]
//! handles. They live in the variable table of the function that owns the variable, which is an
//! external collaborator reached through [`VariableOwner`].

use std::fmt;

use crate::{
    engine::{Confidence, TypeRef},
    variable::{CoreVariable, DeadStoreElimination},
};

/// Identity of an owning function.
///
/// Variable handles compare and order by `(identifier, FunctionId)`, so the id must be stable for
/// the lifetime of the function. Engines typically use the function's start address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionId(pub u64);

impl FunctionId {
    /// Creates a new function id from a raw value
    #[must_use]
    pub const fn new(value: u64) -> Self {
        FunctionId(value)
    }

    /// Returns the raw id value
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionId(0x{:x})", self.0)
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// The variable table of a function, as reached through the engine boundary.
///
/// All methods are requests to the collaborator. Writes are late bound: the owner may stage them
/// and apply them when it commits its analysis state, so a read issued right after a write may
/// still observe the old value. Owners do their own locking; every call is treated as a single
/// atomic request.
pub trait VariableOwner: Send + Sync {
    /// The owning function's identity.
    fn id(&self) -> FunctionId;

    /// Current name of `var`.
    fn variable_name(&self, var: &CoreVariable) -> String;

    /// Current type of `var`, if the function has one for it.
    fn variable_type(&self, var: &CoreVariable) -> Option<Confidence<TypeRef>>;

    /// Creates or renames a user-defined variable entry with an explicit type and name.
    fn create_user_variable(&self, var: &CoreVariable, ty: &Confidence<TypeRef>, name: &str);

    /// Current dead-store-elimination policy of `var`.
    fn dead_store_elimination(&self, var: &CoreVariable) -> DeadStoreElimination;

    /// Sets the dead-store-elimination policy of `var`.
    fn set_dead_store_elimination(&self, var: &CoreVariable, policy: DeadStoreElimination);

    /// Replaces the function's whole parameter list.
    fn set_parameter_variables(&self, vars: &[CoreVariable], confidence: u8);
}

impl fmt::Debug for dyn VariableOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VariableOwner({})", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_id() {
        let id = FunctionId::new(0x401000);
        assert_eq!(id.value(), 0x401000);
        assert_eq!(format!("{id}"), "0x401000");
        assert_eq!(format!("{id:?}"), "FunctionId(0x401000)");
        assert!(FunctionId::new(1) < FunctionId::new(2));
    }
}
