//! Store handle bundle injected into adapter construction.

use std::sync::Arc;

use polyhedral_core::store::SnapshotStore;
use polyhedral_core::system::SystemId;

/// Per-system snapshot store handles offered to the manifest.
///
/// Every handle is optional: not supplying a store is a valid deployment
/// configuration and simply means the corresponding system's adapter is
/// not registered. The handles themselves are opaque to the registry
/// layer; only presence is inspected here.
#[derive(Clone, Default)]
pub struct Stores {
    /// Snapshot store for Daggerheart campaigns.
    pub daggerheart: Option<Arc<dyn SnapshotStore>>,
    /// Snapshot store for D&D 5e campaigns.
    pub dnd5e: Option<Arc<dyn SnapshotStore>>,
    /// Snapshot store for Vampire: the Masquerade campaigns.
    pub vampire: Option<Arc<dyn SnapshotStore>>,
}

impl Stores {
    /// Bundle with no stores supplied.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Sets the Daggerheart store handle.
    #[must_use]
    pub fn with_daggerheart(mut self, store: Arc<dyn SnapshotStore>) -> Self {
        self.daggerheart = Some(store);
        self
    }

    /// Sets the D&D 5e store handle.
    #[must_use]
    pub fn with_dnd5e(mut self, store: Arc<dyn SnapshotStore>) -> Self {
        self.dnd5e = Some(store);
        self
    }

    /// Sets the Vampire: the Masquerade store handle.
    #[must_use]
    pub fn with_vampire(mut self, store: Arc<dyn SnapshotStore>) -> Self {
        self.vampire = Some(store);
        self
    }

    /// Returns the handle for a system id, when supplied.
    #[must_use]
    pub fn for_system(&self, id: SystemId) -> Option<&Arc<dyn SnapshotStore>> {
        match id {
            SystemId::Daggerheart => self.daggerheart.as_ref(),
            SystemId::Dnd5e => self.dnd5e.as_ref(),
            SystemId::VampireTheMasquerade => self.vampire.as_ref(),
        }
    }
}
