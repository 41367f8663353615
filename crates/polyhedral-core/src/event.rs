//! Domain event envelope.
//!
//! Events cross the write path (modules produce them) and the projection
//! path (adapters consume them) in this envelope form. The payload stays
//! opaque JSON so the registry layer never depends on ruleset internals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::system::SystemKey;

/// A domain event addressed to one campaign under one game system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Campaign/stream this event belongs to.
    pub campaign_id: Uuid,
    /// The game system whose adapter must apply this event.
    pub system: SystemKey,
    /// Type name for deserialization routing (e.g. `daggerheart.duality_roll_made`).
    pub event_type: String,
    /// Serialized event payload, opaque to the registry layer.
    pub payload: serde_json::Value,
    /// Monotonically increasing position within the campaign stream.
    pub sequence_number: i64,
    /// Correlation ID for tracing a command through its effects.
    pub correlation_id: Uuid,
    /// Causation ID linking this event to the command that caused it.
    pub causation_id: Uuid,
    /// Timestamp of event creation.
    pub occurred_at: DateTime<Utc>,
}
