//! Metadata registry: game-system descriptors for mechanics dispatch.
//!
//! Built once at startup from the manifest and read for the rest of the
//! process lifetime. Registration failures here can only come from static
//! descriptor code, so they halt immediately instead of returning errors
//! that would mask a code defect.

use std::sync::Arc;

use polyhedral_core::metadata::GameSystem;
use polyhedral_core::system::SystemId;

use crate::registry::Registry;

/// Registry of [`GameSystem`] metadata entries keyed by `(id, version)`.
#[derive(Default)]
pub struct MetadataRegistry {
    inner: Registry<dyn GameSystem>,
}

impl MetadataRegistry {
    /// Creates an empty metadata registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Registry::new(),
        }
    }

    /// Registers a system's metadata entry.
    ///
    /// # Panics
    ///
    /// Panics when the entry's version is blank or its `(id, version)` key
    /// is already taken. Both only arise from misconfigured startup code.
    pub fn register(&self, system: Arc<dyn GameSystem>) {
        let id = system.id();
        let version = system.version().to_owned();
        if let Err(err) = self.inner.register(system) {
            panic!("metadata registry: register {id}@{version}: {err}");
        }
    }

    /// Looks up a system's metadata entry; an empty version resolves to the
    /// system's default version. `None` means "system not supported".
    #[must_use]
    pub fn get(&self, id: SystemId, version: &str) -> Option<Arc<dyn GameSystem>> {
        self.inner.get(id, version)
    }

    /// Returns the default version for a system id, when one exists.
    #[must_use]
    pub fn default_version(&self, id: SystemId) -> Option<String> {
        self.inner.default_version(id)
    }

    /// Returns a snapshot of all registered metadata entries.
    #[must_use]
    pub fn list(&self) -> Vec<Arc<dyn GameSystem>> {
        self.inner.list()
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the registry holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
