//! Manifest: the authoritative table of built-in game systems.
//!
//! One descriptor row per system declares how to construct its write-path
//! module, its metadata entry, and its adapter. Both registries are
//! populated from this table so module and metadata keys cannot diverge.
//!
//! Row order is meaningful: the first version registered for a system id
//! becomes that id's default, so a system's preferred default version must
//! come before its other versions in the table.

use std::sync::Arc;

use tracing::debug;

use polyhedral_core::adapter::SystemAdapter;
use polyhedral_core::metadata::GameSystem;
use polyhedral_core::module::SystemModule;
use polyhedral_core::system::SystemEntry;

use polyhedral_daggerheart::adapter::DaggerheartAdapter;
use polyhedral_daggerheart::metadata::DaggerheartSystem;
use polyhedral_daggerheart::module::DaggerheartModule;

use crate::adapters::AdapterRegistry;
use crate::error::ManifestError;
use crate::metadata::MetadataRegistry;
use crate::stores::Stores;

/// Constructor closures for one built-in system.
///
/// Each constructor is optional, and a present constructor may still
/// decline by returning `None` (an adapter constructor does so when its
/// required store handle was not supplied). Declining is a valid
/// configuration, not an error.
#[derive(Clone, Copy)]
pub struct SystemDescriptor {
    /// Builds the write-path module.
    pub module: Option<fn() -> Option<Arc<dyn SystemModule>>>,
    /// Builds the metadata entry.
    pub metadata: Option<fn() -> Option<Arc<dyn GameSystem>>>,
    /// Builds the adapter from the supplied store handles.
    pub adapter: Option<fn(&Stores) -> Option<Arc<dyn SystemAdapter>>>,
}

fn daggerheart_module() -> Option<Arc<dyn SystemModule>> {
    Some(Arc::new(DaggerheartModule::new()))
}

fn daggerheart_metadata() -> Option<Arc<dyn GameSystem>> {
    Some(Arc::new(DaggerheartSystem::new()))
}

fn daggerheart_adapter(stores: &Stores) -> Option<Arc<dyn SystemAdapter>> {
    let store = stores.daggerheart.as_ref()?;
    Some(Arc::new(DaggerheartAdapter::new(Arc::clone(store))))
}

/// The descriptor table, with constructors for every registrable surface.
pub struct Manifest {
    descriptors: Vec<SystemDescriptor>,
}

impl Manifest {
    /// The built-in table. Currently one row: Daggerheart.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_descriptors(vec![SystemDescriptor {
            module: Some(daggerheart_module),
            metadata: Some(daggerheart_metadata),
            adapter: Some(daggerheart_adapter),
        }])
    }

    /// Builds a manifest from an explicit descriptor table.
    #[must_use]
    pub fn from_descriptors(descriptors: Vec<SystemDescriptor>) -> Self {
        Self { descriptors }
    }

    /// The descriptor rows, in declaration order.
    #[must_use]
    pub fn descriptors(&self) -> &[SystemDescriptor] {
        &self.descriptors
    }

    /// Builds the write-path module for every descriptor that declares one
    /// and does not decline.
    #[must_use]
    pub fn modules(&self) -> Vec<Arc<dyn SystemModule>> {
        self.descriptors
            .iter()
            .filter_map(|descriptor| descriptor.module)
            .filter_map(|ctor| ctor())
            .collect()
    }

    /// Builds the metadata entry for every descriptor that declares one
    /// and does not decline.
    #[must_use]
    pub fn metadata_systems(&self) -> Vec<Arc<dyn GameSystem>> {
        self.descriptors
            .iter()
            .filter_map(|descriptor| descriptor.metadata)
            .filter_map(|ctor| ctor())
            .collect()
    }

    /// Builds the metadata registry from the table.
    ///
    /// # Panics
    ///
    /// Panics when the table carries duplicate `(id, version)` metadata
    /// keys: a defect in static descriptor code, per the metadata
    /// registry's halt-on-misuse policy.
    #[must_use]
    pub fn metadata_registry(&self) -> MetadataRegistry {
        let registry = MetadataRegistry::new();
        for system in self.metadata_systems() {
            registry.register(system);
        }
        registry
    }

    /// Builds a fresh adapter registry from the table and the supplied
    /// store handles.
    ///
    /// Descriptors without an adapter constructor, and constructors that
    /// decline because their store handle is absent, are skipped silently.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::AdapterRegistration` naming the offending
    /// `(id, version)` when a constructed adapter collides with an
    /// already-registered key.
    pub fn adapter_registry(&self, stores: &Stores) -> Result<AdapterRegistry, ManifestError> {
        let registry = AdapterRegistry::new();
        for descriptor in &self.descriptors {
            let Some(ctor) = descriptor.adapter else {
                continue;
            };
            let Some(adapter) = ctor(stores) else {
                continue;
            };
            let id = adapter.id();
            let version = adapter.version().to_owned();
            registry
                .register(Some(adapter))
                .map_err(|source| ManifestError::AdapterRegistration {
                    id,
                    version: version.clone(),
                    source,
                })?;
            debug!(system = %id, version = %version, "registered adapter");
        }
        Ok(registry)
    }

    /// Rebuilds an adapter registry against different store handles,
    /// typically transaction-scoped ones.
    ///
    /// The result is a new, independent registry; `base` is never mutated,
    /// remains usable afterwards, and shares no storage with the rebound
    /// instance. Requiring the base makes call-site intent explicit: a
    /// rebind without an established baseline is a wiring bug.
    ///
    /// # Errors
    ///
    /// - `ManifestError::BaseRegistryRequired`: `base` was `None`.
    /// - `ManifestError::AdapterRegistration`: as for
    ///   [`Manifest::adapter_registry`].
    pub fn rebind_adapter_registry(
        &self,
        base: Option<&AdapterRegistry>,
        stores: &Stores,
    ) -> Result<AdapterRegistry, ManifestError> {
        if base.is_none() {
            return Err(ManifestError::BaseRegistryRequired);
        }
        self.adapter_registry(stores)
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use polyhedral_core::system::{SystemId, SystemKey};
    use polyhedral_test_support::InMemorySnapshotStore;

    use crate::error::RegistryError;

    fn stores_with_daggerheart() -> Stores {
        Stores::none().with_daggerheart(Arc::new(InMemorySnapshotStore::new()))
    }

    #[test]
    fn test_builtin_module_and_metadata_keys_agree() {
        let manifest = Manifest::builtin();
        for descriptor in manifest.descriptors() {
            let (Some(module_ctor), Some(metadata_ctor)) = (descriptor.module, descriptor.metadata)
            else {
                continue;
            };
            let (Some(module), Some(metadata)) = (module_ctor(), metadata_ctor()) else {
                continue;
            };
            assert_eq!(
                SystemKey::for_entry(module.as_ref()).unwrap(),
                SystemKey::for_entry(metadata.as_ref()).unwrap(),
            );
        }
    }

    #[test]
    fn test_builtin_adapter_key_matches_metadata_key() {
        let manifest = Manifest::builtin();
        let stores = stores_with_daggerheart();
        let registry = manifest.adapter_registry(&stores).unwrap();

        for metadata in manifest.metadata_systems() {
            let key = SystemKey::for_entry(metadata.as_ref()).unwrap();
            let adapter = registry.get(key.id, &key.version).unwrap();
            assert_eq!(SystemKey::for_entry(adapter.as_ref()).unwrap(), key);
        }
    }

    #[test]
    fn test_builtin_daggerheart_keys() {
        let manifest = Manifest::builtin();
        let systems = manifest.metadata_systems();
        assert_eq!(systems.len(), 1);
        assert_eq!(systems[0].id(), SystemId::Daggerheart);
        assert_eq!(systems[0].version(), "1.0");

        let modules = manifest.modules();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].id(), SystemId::Daggerheart);
        assert_eq!(modules[0].version(), "1.0");
    }

    #[test]
    fn test_metadata_registry_pins_daggerheart_default() {
        let registry = Manifest::builtin().metadata_registry();
        assert_eq!(
            registry.default_version(SystemId::Daggerheart).as_deref(),
            Some("1.0")
        );
        assert_eq!(registry.get(SystemId::Daggerheart, "").unwrap().name(), "Daggerheart");
    }

    #[test]
    fn test_adapter_registered_iff_store_supplied() {
        let manifest = Manifest::builtin();

        let with_store = manifest.adapter_registry(&stores_with_daggerheart()).unwrap();
        assert!(with_store.get(SystemId::Daggerheart, "").is_some());

        let without_store = manifest.adapter_registry(&Stores::none()).unwrap();
        assert!(without_store.get(SystemId::Daggerheart, "").is_none());
        assert!(without_store.is_empty());
    }

    #[test]
    fn test_rebind_produces_independent_registry() {
        let manifest = Manifest::builtin();
        let base = manifest.adapter_registry(&stores_with_daggerheart()).unwrap();
        let base_adapter = base.get(SystemId::Daggerheart, "").unwrap();

        let rebound = manifest
            .rebind_adapter_registry(Some(&base), &stores_with_daggerheart())
            .unwrap();
        let rebound_adapter = rebound.get(SystemId::Daggerheart, "").unwrap();

        assert!(!Arc::ptr_eq(&base_adapter, &rebound_adapter));

        // The base stays queryable and unchanged after the rebind.
        let still_there = base.get(SystemId::Daggerheart, "").unwrap();
        assert!(Arc::ptr_eq(&base_adapter, &still_there));
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn test_rebind_without_base_fails() {
        let manifest = Manifest::builtin();
        let err = manifest
            .rebind_adapter_registry(None, &stores_with_daggerheart())
            .unwrap_err();
        assert_eq!(err, ManifestError::BaseRegistryRequired);
    }

    #[test]
    fn test_rebind_may_drop_stores() {
        let manifest = Manifest::builtin();
        let base = manifest.adapter_registry(&stores_with_daggerheart()).unwrap();

        let rebound = manifest
            .rebind_adapter_registry(Some(&base), &Stores::none())
            .unwrap();
        assert!(rebound.is_empty());
        assert!(base.get(SystemId::Daggerheart, "").is_some());
    }

    #[test]
    fn test_duplicate_descriptor_rows_fail_with_offender_named() {
        let row = SystemDescriptor {
            module: None,
            metadata: None,
            adapter: Some(daggerheart_adapter),
        };
        let manifest = Manifest::from_descriptors(vec![row, row]);

        let err = manifest
            .adapter_registry(&stores_with_daggerheart())
            .unwrap_err();
        assert_eq!(
            err,
            ManifestError::AdapterRegistration {
                id: SystemId::Daggerheart,
                version: "1.0".to_owned(),
                source: RegistryError::AlreadyRegistered {
                    id: SystemId::Daggerheart,
                    version: "1.0".to_owned(),
                },
            }
        );
        assert_eq!(
            err.to_string(),
            "register adapter daggerheart@1.0: daggerheart@1.0 already registered"
        );
    }

    #[test]
    fn test_descriptor_without_adapter_constructor_is_skipped() {
        let manifest = Manifest::from_descriptors(vec![SystemDescriptor {
            module: None,
            metadata: Some(daggerheart_metadata),
            adapter: None,
        }]);

        let registry = manifest.adapter_registry(&stores_with_daggerheart()).unwrap();
        assert!(registry.is_empty());
    }
}
