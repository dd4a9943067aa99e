use std::{
    fmt,
    sync::{Arc, RwLock},
};

use dashmap::DashMap;

use super::{
    Architecture, Confidence, FunctionId, RegisterResolver, TypeRef, VariableOwner, MAX_CONFIDENCE,
};
use crate::variable::{CoreVariable, DeadStoreElimination, VariableSourceType};

/// A user-defined variable entry: the name and type a user assigned to an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserVariable {
    /// Name of the variable
    pub name: String,
    /// Type of the variable
    pub ty: Confidence<TypeRef>,
}

/// Variable table of a function, backed by memory
///
/// Writes from [`VariableOwner::create_user_variable`] are staged and only become visible once
/// [`MemoryFunction::commit`] runs, which is how an engine applies user edits between analysis
/// passes. Entries added through [`MemoryFunction::declare`] are visible immediately.
///
/// All tables are `DashMap`s, so the function can be shared across threads behind an `Arc`.
pub struct MemoryFunction {
    id: FunctionId,
    arch: Option<Arc<dyn Architecture>>,
    variables: DashMap<CoreVariable, UserVariable>,
    pending: DashMap<CoreVariable, UserVariable>,
    dead_stores: DashMap<CoreVariable, DeadStoreElimination>,
    parameters: RwLock<Confidence<Vec<CoreVariable>>>,
}

impl MemoryFunction {
    /// Create a new function without an architecture
    ///
    /// ## Arguments
    /// * 'id' - The identity of the function, usually its start address
    #[must_use]
    pub fn new(id: FunctionId) -> MemoryFunction {
        MemoryFunction {
            id,
            arch: None,
            variables: DashMap::new(),
            pending: DashMap::new(),
            dead_stores: DashMap::new(),
            parameters: RwLock::new(Confidence::new(Vec::new(), MAX_CONFIDENCE)),
        }
    }

    /// Create a new function whose register variables are named after `arch`'s registers
    ///
    /// ## Arguments
    /// * 'id' - The identity of the function, usually its start address
    /// * 'arch' - The architecture used to name register variables
    #[must_use]
    pub fn with_architecture(id: FunctionId, arch: Arc<dyn Architecture>) -> MemoryFunction {
        let mut function = MemoryFunction::new(id);
        function.arch = Some(arch);
        function
    }

    /// Adds an analysis-defined variable, visible immediately.
    pub fn declare(&self, var: CoreVariable, name: impl Into<String>, ty: Confidence<TypeRef>) {
        self.variables.insert(
            var,
            UserVariable {
                name: name.into(),
                ty,
            },
        );
    }

    /// Applies all staged user-variable writes, returning how many were applied.
    pub fn commit(&self) -> usize {
        let staged: Vec<CoreVariable> = self.pending.iter().map(|entry| *entry.key()).collect();

        let mut applied = 0;
        for var in staged {
            if let Some((var, entry)) = self.pending.remove(&var) {
                self.variables.insert(var, entry);
                applied += 1;
            }
        }

        log::debug!("function {} committed {applied} user variables", self.id);
        applied
    }

    /// Number of staged writes not yet committed.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of variables with a visible entry.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// The current parameter list and its confidence.
    #[must_use]
    pub fn parameter_variables(&self) -> Confidence<Vec<CoreVariable>> {
        read_lock!(self.parameters).clone()
    }

    fn default_name(&self, var: &CoreVariable) -> String {
        let base = match var.source_type {
            VariableSourceType::Stack if var.storage < 0 => {
                format!("var_{:x}", var.storage.unsigned_abs())
            }
            VariableSourceType::Stack => format!("arg_{:x}", var.storage),
            VariableSourceType::Register => u32::try_from(var.storage)
                .ok()
                .and_then(|index| self.arch.as_ref()?.register_name(index))
                .unwrap_or_else(|| format!("reg{}", var.storage)),
            VariableSourceType::Flag => format!("flag{}", var.storage),
        };

        if var.index == 0 {
            base
        } else {
            format!("{base}_{}", var.index)
        }
    }
}

impl VariableOwner for MemoryFunction {
    fn id(&self) -> FunctionId {
        self.id
    }

    fn variable_name(&self, var: &CoreVariable) -> String {
        match self.variables.get(var) {
            Some(entry) if !entry.name.is_empty() => entry.name.clone(),
            _ => self.default_name(var),
        }
    }

    fn variable_type(&self, var: &CoreVariable) -> Option<Confidence<TypeRef>> {
        self.variables.get(var).map(|entry| entry.ty.clone())
    }

    fn create_user_variable(&self, var: &CoreVariable, ty: &Confidence<TypeRef>, name: &str) {
        log::debug!("function {} staging user variable {var} as '{name}'", self.id);
        self.pending.insert(
            *var,
            UserVariable {
                name: name.to_string(),
                ty: ty.clone(),
            },
        );
    }

    fn dead_store_elimination(&self, var: &CoreVariable) -> DeadStoreElimination {
        self.dead_stores
            .get(var)
            .map(|entry| *entry.value())
            .unwrap_or_default()
    }

    fn set_dead_store_elimination(&self, var: &CoreVariable, policy: DeadStoreElimination) {
        log::debug!("function {} setting {var} dead store policy to {policy}", self.id);
        self.dead_stores.insert(*var, policy);
    }

    fn set_parameter_variables(&self, vars: &[CoreVariable], confidence: u8) {
        log::debug!(
            "function {} replacing {} parameters (confidence {confidence})",
            self.id,
            vars.len()
        );
        *write_lock!(self.parameters) = Confidence::new(vars.to_vec(), confidence);
    }
}

impl fmt::Debug for MemoryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryFunction")
            .field("id", &self.id)
            .field("variables", &self.variables.len())
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ArchitectureInfo;

    fn int() -> Confidence<TypeRef> {
        Confidence::certain(TypeRef::new("int32_t"))
    }

    #[test]
    fn memory_default_names() {
        let arch = Arc::new(ArchitectureInfo::new("x86", ["eax", "ecx"]));
        let func = MemoryFunction::with_architecture(FunctionId::new(0x1000), arch);

        let local = CoreVariable::new(VariableSourceType::Stack, 0, -0x10);
        let arg = CoreVariable::new(VariableSourceType::Stack, 0, 0x8);
        let reg = CoreVariable::new(VariableSourceType::Register, 2, 1);
        let unknown_reg = CoreVariable::new(VariableSourceType::Register, 0, 9);
        let flag = CoreVariable::new(VariableSourceType::Flag, 0, 3);

        assert_eq!(func.variable_name(&local), "var_10");
        assert_eq!(func.variable_name(&arg), "arg_8");
        assert_eq!(func.variable_name(&reg), "ecx_2");
        assert_eq!(func.variable_name(&unknown_reg), "reg9");
        assert_eq!(func.variable_name(&flag), "flag3");
    }

    #[test]
    fn memory_writes_are_staged() {
        let func = MemoryFunction::new(FunctionId::new(0x1000));
        let var = CoreVariable::new(VariableSourceType::Stack, 0, -0x8);
        func.declare(var, "", int());

        func.create_user_variable(&var, &int(), "counter");
        assert_eq!(func.pending_count(), 1);
        assert_eq!(func.variable_name(&var), "var_8");

        assert_eq!(func.commit(), 1);
        assert_eq!(func.pending_count(), 0);
        assert_eq!(func.variable_name(&var), "counter");
        assert_eq!(func.variable_type(&var), Some(int()));
    }

    #[test]
    fn memory_dead_store_policy() {
        let func = MemoryFunction::new(FunctionId::new(0x1000));
        let var = CoreVariable::new(VariableSourceType::Register, 0, 0);

        assert_eq!(
            func.dead_store_elimination(&var),
            DeadStoreElimination::Default
        );
        func.set_dead_store_elimination(&var, DeadStoreElimination::Prevent);
        assert_eq!(
            func.dead_store_elimination(&var),
            DeadStoreElimination::Prevent
        );
    }

    #[test]
    fn memory_parameters() {
        let func = MemoryFunction::new(FunctionId::new(0x1000));
        assert!(func.parameter_variables().value.is_empty());

        let vars = [
            CoreVariable::new(VariableSourceType::Register, 0, 0),
            CoreVariable::new(VariableSourceType::Register, 0, 1),
        ];
        func.set_parameter_variables(&vars, 100);

        let params = func.parameter_variables();
        assert_eq!(params.value, vars);
        assert_eq!(params.confidence, 100);
    }
}
