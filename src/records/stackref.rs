use std::{fmt, sync::Arc};

use crate::{
    engine::{Confidence, TypeRef, VariableOwner},
    utils::DeltaHex,
    variable::Variable,
    Result,
};

/// Operand index the engine uses for "no particular operand".
pub const NO_OPERAND: u32 = 0xFFFF_FFFF;

/// Ties an instruction operand to the stack variable it accesses.
///
/// `referenced_offset` is the exact frame offset touched, which differs from the variable's
/// storage when the access hits a field inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackVariableReference {
    /// Operand making the access, `None` if not tied to one
    pub source_operand: Option<u32>,
    /// Type of the access
    pub ty: Confidence<TypeRef>,
    /// Name of the variable at the time of the access
    pub name: String,
    /// The variable accessed
    pub var: Variable,
    /// Frame offset referenced
    pub referenced_offset: i64,
    /// Width of the access in bytes
    pub size: u32,
}

impl StackVariableReference {
    /// Distance from the variable's base to the referenced offset.
    #[must_use]
    pub fn delta(&self) -> i64 {
        self.referenced_offset.wrapping_sub(self.var.storage())
    }
}

impl fmt::Display for StackVariableReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        if let Some(operand) = self.source_operand {
            write!(f, "operand {operand} ")?;
        }
        write!(f, "ref to {}", self.name)?;

        let delta = self.delta();
        if delta != 0 {
            write!(f, "{}", DeltaHex(i128::from(delta)))?;
        }
        write!(f, ">")
    }
}

/// The engine's record of a [`StackVariableReference`].
///
/// The variable travels as a packed identifier and the operand uses [`NO_OPERAND`] for "none".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackVariableReferenceRaw {
    /// Operand index or [`NO_OPERAND`]
    pub source_operand: u32,
    /// Type of the access
    pub ty: Confidence<TypeRef>,
    /// Variable name
    pub name: String,
    /// Packed identifier of the variable
    pub var_identifier: u64,
    /// Frame offset referenced
    pub referenced_offset: i64,
    /// Width of the access
    pub size: u32,
}

impl StackVariableReferenceRaw {
    /// Convert a `StackVariableReferenceRaw` into an owned [`StackVariableReference`]
    ///
    /// ## Arguments
    /// * 'owner' - The function the referenced variable belongs to
    ///
    /// # Errors
    /// Returns [`crate::Error::UnknownSourceType`] if the identifier names no known source type.
    pub fn to_owned(&self, owner: Arc<dyn VariableOwner>) -> Result<StackVariableReference> {
        Ok(StackVariableReference {
            source_operand: (self.source_operand != NO_OPERAND).then_some(self.source_operand),
            ty: self.ty.clone(),
            name: self.name.clone(),
            var: Variable::from_identifier(owner, self.var_identifier)?,
            referenced_offset: self.referenced_offset,
            size: self.size,
        })
    }
}
