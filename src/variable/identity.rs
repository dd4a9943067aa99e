use std::fmt;

use crate::{
    engine::{Confidence, TypeRef},
    variable::{identifier, VariableSourceType},
    Result,
};

/// The positional identity of a variable within its function.
///
/// `storage` is the byte offset into the stack frame for stack variables and the register or
/// flag index otherwise. `index` distinguishes variables sharing the same storage. Identities
/// order lexicographically by `(source_type, index, storage)`.
///
/// # Examples
///
/// ```rust
/// use valscope::variable::{CoreVariable, VariableSourceType};
///
/// let var = CoreVariable::new(VariableSourceType::Stack, 0, -0x18);
/// let identifier = var.try_identifier()?;
/// assert_eq!(CoreVariable::from_identifier(identifier)?, var);
/// # Ok::<(), valscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoreVariable {
    /// Where the variable lives
    pub source_type: VariableSourceType,
    /// Disambiguates variables with the same storage
    pub index: u32,
    /// Frame offset or register index
    pub storage: i64,
}

impl CoreVariable {
    /// Creates a new identity.
    #[must_use]
    pub const fn new(source_type: VariableSourceType, index: u32, storage: i64) -> Self {
        CoreVariable {
            source_type,
            index,
            storage,
        }
    }

    /// The packed identifier of this identity, used as a stable map key.
    ///
    /// Fields that exceed the packed layout are truncated; use
    /// [`CoreVariable::try_identifier`] to reject those.
    #[must_use]
    pub fn identifier(&self) -> u64 {
        identifier::pack(self)
    }

    /// The packed identifier of this identity.
    ///
    /// # Errors
    /// Returns [`crate::Error::IdentifierOverflow`] if the identity would not survive unpacking.
    pub fn try_identifier(&self) -> Result<u64> {
        identifier::try_pack(self)
    }

    /// Unpacks an identity from its packed identifier.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnknownSourceType`] if the identifier names no known source type.
    pub fn from_identifier(identifier: u64) -> Result<Self> {
        identifier::unpack(identifier)
    }

    /// Encodes into the engine's record.
    #[must_use]
    pub const fn to_raw(&self) -> VariableRaw {
        VariableRaw {
            source_type: self.source_type.as_raw(),
            index: self.index,
            storage: self.storage,
        }
    }
}

impl fmt::Display for CoreVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source_type, self.index, self.storage)
    }
}

/// The engine's record of a variable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VariableRaw {
    /// Raw [`VariableSourceType`]
    pub source_type: u32,
    /// Index
    pub index: u32,
    /// Storage
    pub storage: i64,
}

impl VariableRaw {
    /// Convert a `VariableRaw` into an owned [`CoreVariable`]
    ///
    /// # Errors
    /// Returns [`crate::Error::UnknownSourceType`] if the source type is not known.
    pub fn to_owned(&self) -> Result<CoreVariable> {
        Ok(CoreVariable {
            source_type: VariableSourceType::from_raw(self.source_type)?,
            index: self.index,
            storage: self.storage,
        })
    }
}

/// A variable identity together with the name and type the function assigned to it.
///
/// A snapshot: renaming the variable afterwards does not update it. Orders lexicographically by
/// identity, then name, then type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableNameAndType {
    /// The identity
    pub var: CoreVariable,
    /// Name at the time of the snapshot
    pub name: String,
    /// Type at the time of the snapshot
    pub ty: Confidence<TypeRef>,
}

impl VariableNameAndType {
    /// Creates a snapshot of an identity with a name and type.
    pub fn new(var: CoreVariable, name: impl Into<String>, ty: Confidence<TypeRef>) -> Self {
        VariableNameAndType {
            var,
            name: name.into(),
            ty,
        }
    }

    /// Creates a snapshot from a packed identifier.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnknownSourceType`] if the identifier names no known source type.
    pub fn from_identifier(
        identifier: u64,
        name: impl Into<String>,
        ty: Confidence<TypeRef>,
    ) -> Result<Self> {
        Ok(Self::new(CoreVariable::from_identifier(identifier)?, name, ty))
    }
}

impl fmt::Display for VariableNameAndType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<var {}>", self.ty.value.declare(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_ordering() {
        let a = CoreVariable::new(VariableSourceType::Stack, 5, 100);
        let b = CoreVariable::new(VariableSourceType::Register, 0, -100);
        let c = CoreVariable::new(VariableSourceType::Register, 1, -200);
        let d = CoreVariable::new(VariableSourceType::Register, 1, -100);

        let mut vars = vec![d, c, b, a];
        vars.sort();
        assert_eq!(vars, vec![a, b, c, d]);
    }

    #[test]
    fn test_raw() {
        let var = CoreVariable::new(VariableSourceType::Flag, 2, 7);
        assert_eq!(var.to_raw().to_owned().unwrap(), var);

        let raw = VariableRaw {
            source_type: 9,
            index: 0,
            storage: 0,
        };
        assert!(matches!(raw.to_owned(), Err(Error::UnknownSourceType(9))));
    }

    #[test]
    fn test_name_and_type_order() {
        let var = CoreVariable::new(VariableSourceType::Stack, 0, -8);
        let int = Confidence::certain(TypeRef::new("int32_t"));
        let a = VariableNameAndType::new(var, "a", int.clone());
        let b = VariableNameAndType::new(var, "b", int.clone());
        let later = VariableNameAndType::new(
            CoreVariable::new(VariableSourceType::Stack, 1, -8),
            "a",
            int,
        );
        assert!(a < b);
        assert!(b < later);
    }

    #[test]
    fn test_name_and_type_from_identifier() {
        let var = CoreVariable::new(VariableSourceType::Register, 1, 4);
        let ty = Confidence::certain(TypeRef::with_suffix("char", "[4]"));
        let snapshot =
            VariableNameAndType::from_identifier(var.identifier(), "buf", ty).unwrap();
        assert_eq!(snapshot.var, var);
        assert_eq!(snapshot.to_string(), "<var char buf[4]>");
    }
}
