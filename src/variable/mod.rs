//! The variable identity model.
//!
//! A variable is identified by its position, never by its name: a [`CoreVariable`] triple of
//! source type, index and storage. The triple packs into a single integer identifier, the key
//! for value queries.
//!
//! [`Variable`] adds a reference to the owning function and is the only entity in this crate
//! with externally owned mutable state: its name and type live in the function's variable table
//! and are reached through [`crate::engine::VariableOwner`]. [`ParameterVariables`] is the
//! positional parameter list of a function, written through to its owner.
//!
//! # Examples
//!
//! ```rust
//! use valscope::variable::{CoreVariable, VariableSourceType};
//!
//! let a = CoreVariable::new(VariableSourceType::Register, 0, 5);
//! let b = CoreVariable::new(VariableSourceType::Register, 1, 0);
//! assert!(a < b);
//! assert_ne!(a.identifier(), b.identifier());
//! ```

mod handle;
mod identifier;
mod identity;
mod params;
mod source;

pub use handle::Variable;
pub use identity::{CoreVariable, VariableNameAndType, VariableRaw};
pub use params::ParameterVariables;
pub use source::{DeadStoreElimination, VariableSourceType};
