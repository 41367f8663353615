//! Snapshot store abstraction.
//!
//! One store handle per system is injected into the adapter registry; the
//! registry layer only inspects presence, never the contents.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;

/// Persistence seam for campaign read-model snapshots.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Loads the snapshot for a campaign, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` on persistence failure.
    async fn load(&self, campaign_id: Uuid) -> Result<Option<serde_json::Value>, DomainError>;

    /// Writes (inserts or replaces) the snapshot for a campaign.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` on persistence failure.
    async fn save(&self, campaign_id: Uuid, snapshot: &serde_json::Value)
    -> Result<(), DomainError>;
}
