use std::{fmt, ops::Index, sync::Arc};

use crate::{
    engine::{VariableOwner, MAX_CONFIDENCE},
    variable::{CoreVariable, Variable},
    Error, Result,
};

/// The ordered parameter list of a function.
///
/// The confidence describes the list as a whole: how sure the engine is that these are the
/// function's true parameters. When an owner is attached, every positional write pushes the whole
/// updated list back to it.
#[derive(Clone)]
pub struct ParameterVariables {
    vars: Vec<Variable>,
    confidence: u8,
    func: Option<Arc<dyn VariableOwner>>,
}

impl ParameterVariables {
    /// Create a parameter list
    ///
    /// ## Arguments
    /// * 'vars' - The parameters in positional order
    /// * 'confidence' - Confidence in the list as a whole
    /// * 'func' - The owning function, if writes should be pushed back to it
    #[must_use]
    pub fn new(
        vars: Vec<Variable>,
        confidence: u8,
        func: Option<Arc<dyn VariableOwner>>,
    ) -> Self {
        ParameterVariables {
            vars,
            confidence,
            func,
        }
    }

    /// Create a detached parameter list with full confidence.
    #[must_use]
    pub fn certain(vars: Vec<Variable>) -> Self {
        Self::new(vars, MAX_CONFIDENCE, None)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` if the function takes no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterates the parameters in positional order.
    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.vars.iter()
    }

    /// The parameter at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Variable> {
        self.vars.get(index)
    }

    /// All parameters in positional order.
    #[must_use]
    pub fn vars(&self) -> &[Variable] {
        &self.vars
    }

    /// Confidence in the list as a whole.
    #[must_use]
    pub const fn confidence(&self) -> u8 {
        self.confidence
    }

    /// The owning function, if attached.
    #[must_use]
    pub fn function(&self) -> Option<&Arc<dyn VariableOwner>> {
        self.func.as_ref()
    }

    /// Replaces the parameter at `index`
    ///
    /// If an owner is attached, the complete updated list is then pushed to it with this list's
    /// confidence.
    ///
    /// ## Arguments
    /// * 'index' - Position to replace
    /// * 'var' - The new parameter
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if `index` is past the end of the list.
    pub fn set(&mut self, index: usize, var: Variable) -> Result<()> {
        let slot = self.vars.get_mut(index).ok_or(Error::OutOfBounds)?;
        *slot = var;

        if let Some(func) = &self.func {
            let vars: Vec<CoreVariable> = self.vars.iter().map(Variable::core_var).collect();
            log::debug!(
                "pushing {} parameters to function {} after write at {index}",
                vars.len(),
                func.id()
            );
            func.set_parameter_variables(&vars, self.confidence);
        }
        Ok(())
    }

    /// Returns a copy of this list with a different confidence.
    ///
    /// The copy shares the parameters and owner; `self` keeps its confidence.
    #[must_use]
    pub fn with_confidence(&self, confidence: u8) -> Self {
        ParameterVariables {
            vars: self.vars.clone(),
            confidence,
            func: self.func.clone(),
        }
    }
}

impl Index<usize> for ParameterVariables {
    type Output = Variable;

    fn index(&self, index: usize) -> &Self::Output {
        &self.vars[index]
    }
}

impl<'a> IntoIterator for &'a ParameterVariables {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}

impl fmt::Debug for ParameterVariables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.vars).finish()
    }
}
