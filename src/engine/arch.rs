//! Architecture handles and register name resolution.
//!
//! Values and records only ever carry architecture ids and raw register indices. Turning those
//! into names is a best-effort query against the engine's architecture tables, modelled by the
//! traits in this module.

use std::{fmt, sync::Arc};

use dashmap::DashMap;

/// Resolves raw register indices to their symbolic names.
///
/// Resolution is best effort: an unknown index yields `None`, which callers fall back from by
/// rendering the raw index. It is never an error.
pub trait RegisterResolver {
    /// Returns the name of register `index`, if the architecture knows it.
    fn register_name(&self, index: u32) -> Option<String>;
}

/// An architecture as seen through the engine boundary.
///
/// Architectures are identified by name; two handles with the same name denote the same
/// architecture.
pub trait Architecture: RegisterResolver + Send + Sync {
    /// The architecture's unique name, e.g. `x86_64`.
    fn name(&self) -> &str;
}

impl fmt::Debug for dyn Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Architecture({})", self.name())
    }
}

/// Looks up architectures by the id the engine uses in its raw records.
pub trait ArchitectureLookup {
    /// Returns the architecture registered under `id`.
    fn architecture(&self, id: u32) -> Option<Arc<dyn Architecture>>;
}

/// A table-backed architecture: a name and the register names in index order.
///
/// # Examples
///
/// ```rust
/// use valscope::engine::{ArchitectureInfo, RegisterResolver};
///
/// let arch = ArchitectureInfo::new("x86", ["eax", "ecx", "edx", "ebx"]);
/// assert_eq!(arch.register_name(1).as_deref(), Some("ecx"));
/// assert_eq!(arch.register_name(40), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchitectureInfo {
    name: String,
    registers: Vec<String>,
}

impl ArchitectureInfo {
    /// Creates an architecture from its name and register table.
    ///
    /// ## Arguments
    /// * 'name' - The unique architecture name
    /// * 'registers' - Register names, position equals register index
    pub fn new<I, S>(name: impl Into<String>, registers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ArchitectureInfo {
            name: name.into(),
            registers: registers.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of registers in the table.
    #[must_use]
    pub fn register_count(&self) -> usize {
        self.registers.len()
    }
}

impl RegisterResolver for ArchitectureInfo {
    fn register_name(&self, index: u32) -> Option<String> {
        self.registers.get(index as usize).cloned()
    }
}

impl Architecture for ArchitectureInfo {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Concurrent registry of architectures keyed by engine id.
///
/// Backed by a `DashMap`, so registration and lookup can happen from any number of threads
/// without external locking.
#[derive(Default)]
pub struct ArchitectureRegistry {
    entries: DashMap<u32, Arc<dyn Architecture>>,
}

impl ArchitectureRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        ArchitectureRegistry {
            entries: DashMap::new(),
        }
    }

    /// Registers `arch` under `id`, returning the architecture it replaced.
    pub fn register(
        &self,
        id: u32,
        arch: Arc<dyn Architecture>,
    ) -> Option<Arc<dyn Architecture>> {
        log::debug!("registering architecture {} as {id}", arch.name());
        self.entries.insert(id, arch)
    }

    /// Number of registered architectures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no architecture is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ArchitectureLookup for ArchitectureRegistry {
    fn architecture(&self, id: u32) -> Option<Arc<dyn Architecture>> {
        self.entries.get(&id).map(|entry| Arc::clone(entry.value()))
    }
}

impl fmt::Debug for ArchitectureRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArchitectureRegistry")
            .field("entries", &self.entries.len())
            .finish()
    }
}
