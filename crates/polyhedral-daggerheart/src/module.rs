//! Daggerheart write-path module: decodes commands into domain events.

use serde::Deserialize;
use uuid::Uuid;

use polyhedral_core::clock::Clock;
use polyhedral_core::command::CommandEnvelope;
use polyhedral_core::error::DomainError;
use polyhedral_core::event::EventEnvelope;
use polyhedral_core::rng::DeterministicRng;
use polyhedral_core::system::{SystemEntry, SystemId, SystemKey};

use crate::DAGGERHEART_VERSION;
use crate::events::{
    DAMAGE_DEALT, DUALITY_ROLL_MADE, DamageDealt, DualityRollMade, STRESS_MARKED, StressMarked,
    determine_tier,
};

/// Command type name for a duality roll.
pub const ROLL_DUALITY: &str = "daggerheart.roll_duality";
/// Command type name for dealing damage.
pub const DEAL_DAMAGE: &str = "daggerheart.deal_damage";
/// Command type name for marking stress.
pub const MARK_STRESS: &str = "daggerheart.mark_stress";

#[derive(Debug, Deserialize)]
struct RollDuality {
    character_id: Uuid,
    trait_modifier: i32,
    difficulty: i32,
}

#[derive(Debug, Deserialize)]
struct DealDamage {
    character_id: Uuid,
    amount: i64,
}

#[derive(Debug, Deserialize)]
struct MarkStress {
    character_id: Uuid,
    amount: i64,
}

/// Write-path handler for Daggerheart campaigns.
#[derive(Debug, Clone, Copy, Default)]
pub struct DaggerheartModule;

impl DaggerheartModule {
    /// Creates the module.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn decode<T: serde::de::DeserializeOwned>(payload: &serde_json::Value) -> Result<T, DomainError> {
        serde_json::from_value(payload.clone())
            .map_err(|e| DomainError::Validation(format!("malformed command payload: {e}")))
    }

    fn envelope(
        &self,
        command: &CommandEnvelope,
        event_type: &str,
        payload: serde_json::Value,
        clock: &dyn Clock,
    ) -> EventEnvelope {
        EventEnvelope {
            event_id: Uuid::new_v4(),
            campaign_id: command.campaign_id,
            system: SystemKey {
                id: self.id(),
                version: DAGGERHEART_VERSION.to_owned(),
            },
            event_type: event_type.to_owned(),
            payload,
            sequence_number: command.next_sequence,
            correlation_id: command.correlation_id,
            causation_id: command.command_id,
            occurred_at: clock.now(),
        }
    }
}

impl SystemEntry for DaggerheartModule {
    fn id(&self) -> SystemId {
        SystemId::Daggerheart
    }

    fn version(&self) -> &str {
        DAGGERHEART_VERSION
    }
}

impl polyhedral_core::module::SystemModule for DaggerheartModule {
    fn handle_command(
        &self,
        command: &CommandEnvelope,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Vec<EventEnvelope>, DomainError> {
        match command.command_type.as_str() {
            ROLL_DUALITY => {
                let decoded: RollDuality = Self::decode(&command.payload)?;
                let hope_die = rng.next_u32_range(1, 12);
                let fear_die = rng.next_u32_range(1, 12);
                #[allow(clippy::cast_possible_wrap)]
                let total = hope_die as i32 + fear_die as i32 + decoded.trait_modifier;
                let tier = determine_tier(hope_die, fear_die, total, decoded.difficulty);

                let payload = serde_json::to_value(DualityRollMade {
                    character_id: decoded.character_id,
                    hope_die,
                    fear_die,
                    modifier: decoded.trait_modifier,
                    total,
                    difficulty: decoded.difficulty,
                    tier,
                })
                .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

                Ok(vec![self.envelope(command, DUALITY_ROLL_MADE, payload, clock)])
            }
            DEAL_DAMAGE => {
                let decoded: DealDamage = Self::decode(&command.payload)?;
                if decoded.amount < 0 {
                    return Err(DomainError::Validation(
                        "damage amount must be non-negative".to_owned(),
                    ));
                }
                let payload = serde_json::to_value(DamageDealt {
                    character_id: decoded.character_id,
                    amount: decoded.amount,
                })
                .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

                Ok(vec![self.envelope(command, DAMAGE_DEALT, payload, clock)])
            }
            MARK_STRESS => {
                let decoded: MarkStress = Self::decode(&command.payload)?;
                if decoded.amount < 0 {
                    return Err(DomainError::Validation(
                        "stress amount must be non-negative".to_owned(),
                    ));
                }
                let payload = serde_json::to_value(StressMarked {
                    character_id: decoded.character_id,
                    amount: decoded.amount,
                })
                .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

                Ok(vec![self.envelope(command, STRESS_MARKED, payload, clock)])
            }
            other => Err(DomainError::UnsupportedCommand {
                system: SystemKey {
                    id: self.id(),
                    version: DAGGERHEART_VERSION.to_owned(),
                },
                command_type: other.to_owned(),
            }),
        }
    }
}
