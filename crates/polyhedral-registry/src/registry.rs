//! Generic registry shape shared by the metadata and adapter registries.
//!
//! Read-mostly: registration happens at startup, lookups on the request
//! path. One reader/writer lock guards the entry map and the defaults map
//! together, so a reader resolving a default version never observes a
//! default pointing at a version absent from the entry map.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use polyhedral_core::system::{SystemEntry, SystemId, SystemKey, normalize_version};

use crate::error::RegistryError;

struct Inner<T: ?Sized> {
    entries: HashMap<SystemKey, Arc<T>>,
    defaults: HashMap<SystemId, String>,
}

/// Concurrent map from [`SystemKey`] to a registered entry, with
/// per-system default-version resolution.
///
/// The first version registered for a system id becomes that id's default.
pub struct Registry<T: SystemEntry + ?Sized> {
    inner: RwLock<Inner<T>>,
}

impl<T: SystemEntry + ?Sized> Registry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                entries: HashMap::new(),
                defaults: HashMap::new(),
            }),
        }
    }

    /// Registers an entry under its derived `(id, version)` key.
    ///
    /// The insertion is atomic: concurrent readers either see the entry
    /// with its default fully wired, or not at all.
    ///
    /// # Errors
    ///
    /// - `RegistryError::VersionRequired`: the entry's version is empty
    ///   after trimming.
    /// - `RegistryError::AlreadyRegistered`: the key is taken; the
    ///   existing entry is retained.
    /// - `RegistryError::Unavailable`: the lock is poisoned.
    pub fn register(&self, entry: Arc<T>) -> Result<(), RegistryError> {
        let key = SystemKey::for_entry(entry.as_ref()).ok_or(RegistryError::VersionRequired)?;

        let mut inner = self.inner.write().map_err(|_| RegistryError::Unavailable)?;
        if inner.entries.contains_key(&key) {
            return Err(RegistryError::AlreadyRegistered {
                id: key.id,
                version: key.version,
            });
        }
        inner
            .defaults
            .entry(key.id)
            .or_insert_with(|| key.version.clone());
        inner.entries.insert(key, entry);
        Ok(())
    }

    /// Looks up the entry for `(id, version)`.
    ///
    /// An empty (post-trim) version resolves to the id's default version.
    /// Returns `None` for unknown keys, for ids with nothing registered,
    /// and on a poisoned lock: absence is an ordinary outcome here, never
    /// an error.
    #[must_use]
    pub fn get(&self, id: SystemId, version: &str) -> Option<Arc<T>> {
        let inner = self.inner.read().ok()?;
        let version = match normalize_version(version) {
            Some(explicit) => explicit,
            None => inner.defaults.get(&id)?.as_str(),
        };
        inner
            .entries
            .get(&SystemKey {
                id,
                version: version.to_owned(),
            })
            .cloned()
    }

    /// Returns the default version for a system id, when one exists.
    #[must_use]
    pub fn default_version(&self, id: SystemId) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.defaults.get(&id).cloned()
    }

    /// Returns a snapshot of all registered entries.
    ///
    /// The returned vector is independent of the registry; iterating it is
    /// unaffected by concurrent registrations.
    #[must_use]
    pub fn list(&self) -> Vec<Arc<T>> {
        match self.inner.read() {
            Ok(inner) => inner.entries.values().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().map_or(0, |inner| inner.entries.len())
    }

    /// Whether the registry holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: SystemEntry + ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
