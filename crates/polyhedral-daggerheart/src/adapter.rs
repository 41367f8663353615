//! Daggerheart projection adapter: folds events into campaign snapshots.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value, json};
use tracing::debug;
use uuid::Uuid;

use polyhedral_core::adapter::{ProfileUpdateHandler, SystemAdapter};
use polyhedral_core::error::DomainError;
use polyhedral_core::event::EventEnvelope;
use polyhedral_core::metadata::StateFactory;
use polyhedral_core::store::SnapshotStore;
use polyhedral_core::system::{SystemEntry, SystemId};

use crate::DAGGERHEART_VERSION;
use crate::events::{
    DAMAGE_DEALT, DUALITY_ROLL_MADE, DamageDealt, DualityRollMade, STRESS_MARKED, StressMarked,
};
use crate::metadata::DaggerheartStateFactory;

fn decode<T: serde::de::DeserializeOwned>(event: &EventEnvelope) -> Result<T, DomainError> {
    serde_json::from_value(event.payload.clone()).map_err(|e| {
        DomainError::Validation(format!("malformed {} payload: {e}", event.event_type))
    })
}

/// Projection-side adapter for Daggerheart campaigns.
///
/// Snapshot shape: `{ "fear_pool": n, "characters": { <uuid>: state } }`,
/// where each character state follows [`DaggerheartStateFactory`].
pub struct DaggerheartAdapter {
    store: Arc<dyn SnapshotStore>,
    factory: DaggerheartStateFactory,
}

impl DaggerheartAdapter {
    /// Creates an adapter backed by the given snapshot store.
    #[must_use]
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            store,
            factory: DaggerheartStateFactory,
        }
    }

    async fn load_or_new(&self, campaign_id: Uuid) -> Result<Value, DomainError> {
        Ok(self
            .store
            .load(campaign_id)
            .await?
            .unwrap_or_else(|| self.factory.new_campaign_state()))
    }

    /// Returns a mutable reference to the character's state, creating it
    /// from the factory on first sight.
    fn character_state<'a>(
        &self,
        snapshot: &'a mut Value,
        character_id: Uuid,
    ) -> Result<&'a mut Value, DomainError> {
        let characters = snapshot
            .get_mut("characters")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| {
                DomainError::Validation("snapshot missing characters object".to_owned())
            })?;
        Ok(characters
            .entry(character_id.to_string())
            .or_insert_with(|| self.factory.new_character_state()))
    }

    fn bump(state: &mut Value, field: &str, delta: i64, floor: i64) -> Result<(), DomainError> {
        let current = state
            .get(field)
            .and_then(Value::as_i64)
            .ok_or_else(|| DomainError::Validation(format!("snapshot missing {field}")))?;
        state[field] = json!((current + delta).max(floor));
        Ok(())
    }
}

impl SystemEntry for DaggerheartAdapter {
    fn id(&self) -> SystemId {
        SystemId::Daggerheart
    }

    fn version(&self) -> &str {
        DAGGERHEART_VERSION
    }
}

#[async_trait]
impl SystemAdapter for DaggerheartAdapter {
    async fn apply_event(&self, event: &EventEnvelope) -> Result<(), DomainError> {
        let mut snapshot = self.load_or_new(event.campaign_id).await?;

        match event.event_type.as_str() {
            DUALITY_ROLL_MADE => {
                let payload: DualityRollMade = decode(event)?;
                if payload.tier.is_with_fear() {
                    Self::bump(&mut snapshot, "fear_pool", 1, 0)?;
                }
                let character = self.character_state(&mut snapshot, payload.character_id)?;
                if payload.tier.grants_hope() {
                    Self::bump(character, "hope", 1, 0)?;
                }
                character["last_roll"] = json!({
                    "total": payload.total,
                    "tier": payload.tier,
                });
            }
            DAMAGE_DEALT => {
                let payload: DamageDealt = decode(event)?;
                let character = self.character_state(&mut snapshot, payload.character_id)?;
                Self::bump(character, "hit_points", -payload.amount, 0)?;
            }
            STRESS_MARKED => {
                let payload: StressMarked = decode(event)?;
                let character = self.character_state(&mut snapshot, payload.character_id)?;
                Self::bump(character, "stress", payload.amount, 0)?;
            }
            other => {
                return Err(DomainError::Validation(format!(
                    "unknown event type: {other}"
                )));
            }
        }

        debug!(campaign_id = %event.campaign_id, event_type = %event.event_type, "applied event");
        self.store.save(event.campaign_id, &snapshot).await
    }

    async fn snapshot(&self, campaign_id: Uuid) -> Result<Option<Value>, DomainError> {
        self.store.load(campaign_id).await
    }

    fn profile_updates(&self) -> Option<&dyn ProfileUpdateHandler> {
        Some(self)
    }
}

#[async_trait]
impl ProfileUpdateHandler for DaggerheartAdapter {
    async fn apply_profile_update(
        &self,
        campaign_id: Uuid,
        character_id: Uuid,
        profile: &Value,
    ) -> Result<(), DomainError> {
        let mut snapshot = self
            .store
            .load(campaign_id)
            .await?
            .ok_or(DomainError::CampaignNotFound(campaign_id))?;

        let updates = profile.as_object().ok_or_else(|| {
            DomainError::Validation("profile update must be an object".to_owned())
        })?;

        let character = self.character_state(&mut snapshot, character_id)?;
        let mut merged: Map<String, Value> = character
            .get("profile")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        for (field, value) in updates {
            merged.insert(field.clone(), value.clone());
        }
        character["profile"] = Value::Object(merged);

        self.store.save(campaign_id, &snapshot).await
    }
}
