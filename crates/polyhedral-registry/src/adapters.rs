//! Adapter registry: projection-side dispatch by `(system, version)`.
//!
//! Unlike the metadata registry, adapter registries are built at runtime
//! from operator-supplied store handles (and rebuilt per transaction via
//! rebind), so registration failures are surfaced as typed, recoverable
//! errors rather than halting the process.

use std::sync::Arc;

use polyhedral_core::adapter::SystemAdapter;
use polyhedral_core::system::SystemId;

use crate::error::RegistryError;
use crate::registry::Registry;

/// Registry of [`SystemAdapter`]s keyed by `(id, version)`.
///
/// Lifetime is bounded by the owning scope: the base registry lives for
/// the process, a rebound registry for one unit of work.
#[derive(Default)]
pub struct AdapterRegistry {
    inner: Registry<dyn SystemAdapter>,
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("len", &self.inner.len())
            .finish()
    }
}

impl AdapterRegistry {
    /// Creates an empty adapter registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Registry::new(),
        }
    }

    /// Registers an adapter under its derived `(id, version)` key.
    ///
    /// The adapter is taken as an `Option` so dynamic construction sites
    /// can pass a constructor result straight through; offering `None` is
    /// a caller bug, distinct from a constructor declining (which callers
    /// handle by not registering at all).
    ///
    /// # Errors
    ///
    /// - `RegistryError::EntryRequired`: `adapter` was `None`.
    /// - `RegistryError::VersionRequired`: the adapter's version is blank.
    /// - `RegistryError::AlreadyRegistered`: the key is taken; the first
    ///   registration is retained.
    /// - `RegistryError::Unavailable`: the registry's lock is poisoned.
    pub fn register(&self, adapter: Option<Arc<dyn SystemAdapter>>) -> Result<(), RegistryError> {
        let adapter = adapter.ok_or(RegistryError::EntryRequired)?;
        self.inner.register(adapter)
    }

    /// Looks up the adapter for `(id, version)`; an empty version resolves
    /// to the system's default version. `None` means "system not
    /// supported" and is an ordinary branch, not an error.
    #[must_use]
    pub fn get(&self, id: SystemId, version: &str) -> Option<Arc<dyn SystemAdapter>> {
        self.inner.get(id, version)
    }

    /// Returns the default version for a system id, when one exists.
    #[must_use]
    pub fn default_version(&self, id: SystemId) -> Option<String> {
        self.inner.default_version(id)
    }

    /// Returns a snapshot of all registered adapters.
    #[must_use]
    pub fn list(&self) -> Vec<Arc<dyn SystemAdapter>> {
        self.inner.list()
    }

    /// Number of registered adapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the registry holds no adapters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
