use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::{
    engine::{Confidence, FunctionId, TypeRef, VariableOwner},
    variable::{
        CoreVariable, DeadStoreElimination, VariableNameAndType, VariableRaw, VariableSourceType,
    },
    Error, Result,
};

/// A live handle to a variable of a function.
///
/// The handle holds only the variable's identity and a reference to the owning function. Its
/// name, type and dead-store policy are read from the owner on every access, and setting them
/// issues a write request to the owner. The handle itself never changes.
///
/// Handles compare, order and hash by `(identifier, owner)`. Renaming a variable does not change
/// which variable a handle refers to, and the constructor used to build a handle is not
/// observable.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use valscope::engine::{Confidence, FunctionId, MemoryFunction, TypeRef, VariableOwner};
/// use valscope::variable::{Variable, VariableSourceType};
///
/// let func: Arc<dyn VariableOwner> = Arc::new(MemoryFunction::new(FunctionId::new(0x1000)));
/// let var = Variable::new(func.clone(), VariableSourceType::Stack, 0, -0x10);
/// let same = Variable::from_identifier(func, var.identifier())?;
///
/// assert_eq!(var, same);
/// assert_eq!(var.name(), "var_10");
/// # Ok::<(), valscope::Error>(())
/// ```
#[derive(Clone)]
pub struct Variable {
    owner: Arc<dyn VariableOwner>,
    var: CoreVariable,
}

impl Variable {
    /// Create a handle from an explicit identity triple
    ///
    /// ## Arguments
    /// * 'owner' - The function owning the variable
    /// * 'source_type' - Where the variable lives
    /// * 'index' - Disambiguating index
    /// * 'storage' - Frame offset or register index
    pub fn new(
        owner: Arc<dyn VariableOwner>,
        source_type: VariableSourceType,
        index: u32,
        storage: i64,
    ) -> Self {
        Self::from_core_variable(owner, CoreVariable::new(source_type, index, storage))
    }

    /// Create a handle from an identity
    pub fn from_core_variable(owner: Arc<dyn VariableOwner>, var: CoreVariable) -> Self {
        Variable { owner, var }
    }

    /// Create a handle from an engine record
    ///
    /// # Errors
    /// Returns [`Error::UnknownSourceType`] if the record's source type is not known.
    pub fn from_raw(owner: Arc<dyn VariableOwner>, raw: &VariableRaw) -> Result<Self> {
        Ok(Self::from_core_variable(owner, raw.to_owned()?))
    }

    /// Create a handle from a packed identifier
    ///
    /// # Errors
    /// Returns [`Error::UnknownSourceType`] if the identifier names no known source type.
    pub fn from_identifier(owner: Arc<dyn VariableOwner>, identifier: u64) -> Result<Self> {
        Ok(Self::from_core_variable(
            owner,
            CoreVariable::from_identifier(identifier)?,
        ))
    }

    /// Create a handle for the identity of a name-and-type snapshot
    pub fn from_variable_name_and_type(
        owner: Arc<dyn VariableOwner>,
        var: &VariableNameAndType,
    ) -> Self {
        Self::from_core_variable(owner, var.var)
    }

    /// The variable's identity.
    #[must_use]
    pub const fn core_var(&self) -> CoreVariable {
        self.var
    }

    /// Where the variable lives.
    #[must_use]
    pub const fn source_type(&self) -> VariableSourceType {
        self.var.source_type
    }

    /// Disambiguating index.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.var.index
    }

    /// Frame offset for stack variables, register or flag index otherwise.
    #[must_use]
    pub const fn storage(&self) -> i64 {
        self.var.storage
    }

    /// The packed identifier, the key for value queries on this variable.
    #[must_use]
    pub fn identifier(&self) -> u64 {
        self.var.identifier()
    }

    /// The function owning this variable.
    #[must_use]
    pub fn function(&self) -> &Arc<dyn VariableOwner> {
        &self.owner
    }

    /// The current name, as reported by the owner.
    #[must_use]
    pub fn name(&self) -> String {
        self.owner.variable_name(&self.var)
    }

    /// The current type, as reported by the owner.
    #[must_use]
    pub fn ty(&self) -> Option<Confidence<TypeRef>> {
        self.owner.variable_type(&self.var)
    }

    /// Requests a rename, keeping the current type
    ///
    /// `None` clears the user-assigned name. The write is late bound; the owner applies it when
    /// it commits.
    ///
    /// # Errors
    /// Returns [`Error::MissingVariableType`] if the owner has no type to preserve.
    pub fn set_name(&self, name: Option<&str>) -> Result<()> {
        let ty = self.ty().ok_or(Error::MissingVariableType(self.var))?;
        let name = name.unwrap_or_default();

        log::debug!("renaming variable {} of {} to '{name}'", self.var, self.owner.id());
        self.owner.create_user_variable(&self.var, &ty, name);
        Ok(())
    }

    /// Requests a retype, keeping the current name. The write is late bound.
    pub fn set_ty(&self, ty: Confidence<TypeRef>) {
        let name = self.name();

        log::debug!("retyping variable {} of {} to {ty}", self.var, self.owner.id());
        self.owner.create_user_variable(&self.var, &ty, &name);
    }

    /// The current dead-store-elimination policy.
    #[must_use]
    pub fn dead_store_elimination(&self) -> DeadStoreElimination {
        self.owner.dead_store_elimination(&self.var)
    }

    /// Sets the dead-store-elimination policy.
    pub fn set_dead_store_elimination(&self, policy: DeadStoreElimination) {
        self.owner.set_dead_store_elimination(&self.var, policy);
    }

    /// A snapshot of identity, name and type.
    ///
    /// # Errors
    /// Returns [`Error::MissingVariableType`] if the owner has no type for the variable.
    pub fn var_name_and_type(&self) -> Result<VariableNameAndType> {
        let ty = self.ty().ok_or(Error::MissingVariableType(self.var))?;
        Ok(VariableNameAndType::new(self.var, self.name(), ty))
    }

    fn key(&self) -> (u64, FunctionId) {
        (self.identifier(), self.owner.id())
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Variable {}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty() {
            Some(ty) => write!(f, "<var {}>", ty.value.declare(&self.name())),
            None => write!(f, "<var {}>", self.name()),
        }
    }
}
