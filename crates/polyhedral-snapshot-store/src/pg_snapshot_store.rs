//! `PostgreSQL` implementation of the `SnapshotStore` trait.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use polyhedral_core::error::DomainError;
use polyhedral_core::store::SnapshotStore;
use polyhedral_core::system::SystemId;

/// PostgreSQL-backed snapshot store, scoped to one game system.
///
/// All systems share the `campaign_snapshots` table; each handle only
/// reads and writes rows for its own system id, so one handle per system
/// can be injected into the adapter registry.
#[derive(Debug, Clone)]
pub struct PgSnapshotStore {
    pool: PgPool,
    system_id: SystemId,
}

impl PgSnapshotStore {
    /// Creates a store handle for one system.
    #[must_use]
    pub fn new(pool: PgPool, system_id: SystemId) -> Self {
        Self { pool, system_id }
    }
}

#[async_trait]
impl SnapshotStore for PgSnapshotStore {
    async fn load(&self, campaign_id: Uuid) -> Result<Option<serde_json::Value>, DomainError> {
        sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT snapshot FROM campaign_snapshots WHERE campaign_id = $1 AND system_id = $2",
        )
        .bind(campaign_id)
        .bind(self.system_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(format!("snapshot load failed: {e}")))
    }

    async fn save(
        &self,
        campaign_id: Uuid,
        snapshot: &serde_json::Value,
    ) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO campaign_snapshots (campaign_id, system_id, snapshot, updated_at)
             VALUES ($1, $2, $3, NOW())
             ON CONFLICT (campaign_id, system_id)
             DO UPDATE SET snapshot = EXCLUDED.snapshot, updated_at = NOW()",
        )
        .bind(campaign_id)
        .bind(self.system_id.as_str())
        .bind(snapshot)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(format!("snapshot save failed: {e}")))?;
        Ok(())
    }
}
