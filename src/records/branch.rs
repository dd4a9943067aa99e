use std::{fmt, sync::Arc};

use crate::{
    engine::{Architecture, ArchitectureLookup},
    Error, Result,
};

/// A resolved edge of an indirect branch.
///
/// Architectures are compared by name, so two records decoded through different lookups still
/// compare equal when they describe the same edge.
#[derive(Debug, Clone)]
pub struct IndirectBranchInfo {
    /// Architecture of the branch instruction
    pub source_arch: Arc<dyn Architecture>,
    /// Address of the branch instruction
    pub source_addr: u64,
    /// Architecture at the destination
    pub dest_arch: Arc<dyn Architecture>,
    /// Destination address
    pub dest_addr: u64,
    /// The edge was found by analysis rather than set by a user
    pub auto_defined: bool,
}

impl PartialEq for IndirectBranchInfo {
    fn eq(&self, other: &Self) -> bool {
        self.source_arch.name() == other.source_arch.name()
            && self.source_addr == other.source_addr
            && self.dest_arch.name() == other.dest_arch.name()
            && self.dest_addr == other.dest_addr
            && self.auto_defined == other.auto_defined
    }
}

impl Eq for IndirectBranchInfo {}

impl fmt::Display for IndirectBranchInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<branch {}:{:#x} -> {}:{:#x}>",
            self.source_arch.name(),
            self.source_addr,
            self.dest_arch.name(),
            self.dest_addr
        )
    }
}

/// The engine's record of an [`IndirectBranchInfo`], with architectures by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IndirectBranchInfoRaw {
    /// Architecture id of the branch instruction
    pub source_arch: u32,
    /// Address of the branch instruction
    pub source_addr: u64,
    /// Architecture id at the destination
    pub dest_arch: u32,
    /// Destination address
    pub dest_addr: u64,
    /// Auto-defined flag
    pub auto_defined: bool,
}

impl IndirectBranchInfoRaw {
    /// Convert an `IndirectBranchInfoRaw` into an owned [`IndirectBranchInfo`]
    ///
    /// ## Arguments
    /// * 'lookup' - Resolves the record's architecture ids
    ///
    /// # Errors
    /// Returns [`Error::UnknownArchitecture`] if either id is not known to `lookup`.
    pub fn to_owned(&self, lookup: &dyn ArchitectureLookup) -> Result<IndirectBranchInfo> {
        let resolve = |id: u32| {
            lookup.architecture(id).ok_or_else(|| {
                log::warn!("indirect branch references unknown architecture {id}");
                Error::UnknownArchitecture(id)
            })
        };

        Ok(IndirectBranchInfo {
            source_arch: resolve(self.source_arch)?,
            source_addr: self.source_addr,
            dest_arch: resolve(self.dest_arch)?,
            dest_addr: self.dest_addr,
            auto_defined: self.auto_defined,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ArchitectureInfo, ArchitectureRegistry};

    fn registry() -> ArchitectureRegistry {
        let registry = ArchitectureRegistry::new();
        registry.register(0, Arc::new(ArchitectureInfo::new("thumb2", ["r0"])));
        registry.register(1, Arc::new(ArchitectureInfo::new("armv7", ["r0"])));
        registry
    }

    #[test]
    fn test_decode_and_display() {
        let raw = IndirectBranchInfoRaw {
            source_arch: 0,
            source_addr: 0x10,
            dest_arch: 1,
            dest_addr: 0x20,
            auto_defined: true,
        };
        let branch = raw.to_owned(&registry()).unwrap();
        assert_eq!(branch.to_string(), "<branch thumb2:0x10 -> armv7:0x20>");
        assert!(branch.auto_defined);
    }

    #[test]
    fn test_equality_by_arch_name() {
        let raw = IndirectBranchInfoRaw {
            source_arch: 1,
            source_addr: 0x10,
            dest_arch: 1,
            dest_addr: 0x20,
            auto_defined: false,
        };
        let first = raw.to_owned(&registry()).unwrap();
        let second = raw.to_owned(&registry()).unwrap();
        assert!(!Arc::ptr_eq(&first.source_arch, &second.source_arch));
        assert_eq!(first, second);

        let other = IndirectBranchInfoRaw {
            dest_arch: 0,
            ..raw
        };
        assert_ne!(first, other.to_owned(&registry()).unwrap());
    }

    #[test]
    fn test_unknown_architecture() {
        let raw = IndirectBranchInfoRaw {
            source_arch: 0,
            dest_arch: 7,
            ..IndirectBranchInfoRaw::default()
        };
        assert!(matches!(
            raw.to_owned(&registry()),
            Err(Error::UnknownArchitecture(7))
        ));
    }
}
