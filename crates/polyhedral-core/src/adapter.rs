//! Projection-side adapter seam.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;
use crate::event::EventEnvelope;
use crate::system::SystemEntry;

/// Optional adapter capability: reacting to character profile updates that
/// originate outside the event stream (e.g. a player edits their sheet).
#[async_trait]
pub trait ProfileUpdateHandler: Send + Sync {
    /// Merges `profile` into the character's entry in the campaign snapshot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CampaignNotFound` when the campaign has no
    /// snapshot yet, or an infrastructure error from the backing store.
    async fn apply_profile_update(
        &self,
        campaign_id: Uuid,
        character_id: Uuid,
        profile: &serde_json::Value,
    ) -> Result<(), DomainError>;
}

/// Projection-side component for one game system: consumes domain events
/// and maintains read-model snapshots.
///
/// Secondary capabilities are discovered through explicit probes
/// ([`SystemAdapter::profile_updates`]) rather than downcasting, so the
/// contract stays statically visible.
#[async_trait]
pub trait SystemAdapter: SystemEntry {
    /// Folds one domain event into the campaign's snapshot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for events the system cannot
    /// interpret, or an infrastructure error from the backing store.
    async fn apply_event(&self, event: &EventEnvelope) -> Result<(), DomainError>;

    /// Returns the current read-model snapshot for a campaign, or `None`
    /// when the campaign has produced no state under this system yet.
    ///
    /// # Errors
    ///
    /// Returns an infrastructure error from the backing store.
    async fn snapshot(&self, campaign_id: Uuid) -> Result<Option<serde_json::Value>, DomainError>;

    /// Probes for the profile-update capability. Default: not supported.
    fn profile_updates(&self) -> Option<&dyn ProfileUpdateHandler> {
        None
    }
}
