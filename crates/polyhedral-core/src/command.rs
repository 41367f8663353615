//! Command envelope consumed by write-path modules.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A decoded player/GM command addressed to one campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandEnvelope {
    /// Unique command identifier; becomes the causation ID of produced events.
    pub command_id: Uuid,
    /// Campaign the command targets.
    pub campaign_id: Uuid,
    /// Type name for dispatch (e.g. `daggerheart.roll_duality`).
    pub command_type: String,
    /// Serialized command payload, opaque to the registry layer.
    pub payload: serde_json::Value,
    /// Sequence number the first produced event should carry, supplied by
    /// the write path from the loaded stream head.
    pub next_sequence: i64,
    /// Correlation ID for tracing.
    pub correlation_id: Uuid,
}
