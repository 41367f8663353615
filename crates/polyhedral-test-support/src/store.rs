//! Test stores: mock `SnapshotStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use polyhedral_core::error::DomainError;
use polyhedral_core::store::SnapshotStore;

/// An in-memory snapshot store backed by a hash map. The standard store
/// double for adapter and registry tests.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    snapshots: Mutex<HashMap<Uuid, serde_json::Value>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.lock().unwrap().len()
    }

    /// Whether the store holds no snapshots.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self, campaign_id: Uuid) -> Result<Option<serde_json::Value>, DomainError> {
        Ok(self.snapshots.lock().unwrap().get(&campaign_id).cloned())
    }

    async fn save(
        &self,
        campaign_id: Uuid,
        snapshot: &serde_json::Value,
    ) -> Result<(), DomainError> {
        self.snapshots
            .lock()
            .unwrap()
            .insert(campaign_id, snapshot.clone());
        Ok(())
    }
}

/// A snapshot store that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingSnapshotStore;

#[async_trait]
impl SnapshotStore for FailingSnapshotStore {
    async fn load(&self, _campaign_id: Uuid) -> Result<Option<serde_json::Value>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn save(
        &self,
        _campaign_id: Uuid,
        _snapshot: &serde_json::Value,
    ) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
