//! Daggerheart metadata entry: identity plus state and outcome capabilities.

use serde::Deserialize;

use polyhedral_core::error::DomainError;
use polyhedral_core::metadata::{GameSystem, Outcome, OutcomeApplier, StateFactory};
use polyhedral_core::system::{SystemEntry, SystemId};

use crate::DAGGERHEART_VERSION;
use crate::events::DualityTier;

/// Starting hit points for a fresh character.
const STARTING_HIT_POINTS: i64 = 6;
/// Starting hope for a fresh character.
const STARTING_HOPE: i64 = 2;
/// Hope a character can bank at most.
const MAX_HOPE: i64 = 6;

/// Builds fresh Daggerheart state documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct DaggerheartStateFactory;

impl StateFactory for DaggerheartStateFactory {
    fn new_character_state(&self) -> serde_json::Value {
        serde_json::json!({
            "hit_points": STARTING_HIT_POINTS,
            "stress": 0,
            "hope": STARTING_HOPE,
            "evasion": 10,
            "armor": 3,
        })
    }

    fn new_campaign_state(&self) -> serde_json::Value {
        serde_json::json!({
            "fear_pool": 0,
            "characters": {},
        })
    }
}

#[derive(Debug, Deserialize)]
struct DualityOutcome {
    tier: DualityTier,
}

#[derive(Debug, Deserialize)]
struct DamageOutcome {
    amount: i64,
}

fn counter(state: &mut serde_json::Value, field: &str) -> Result<i64, DomainError> {
    state
        .get(field)
        .and_then(serde_json::Value::as_i64)
        .ok_or_else(|| DomainError::Validation(format!("character state missing {field}")))
}

/// Folds resolved outcomes into a character state document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DaggerheartOutcomeApplier;

impl OutcomeApplier for DaggerheartOutcomeApplier {
    fn apply(&self, state: &mut serde_json::Value, outcome: &Outcome) -> Result<(), DomainError> {
        match outcome.outcome_type.as_str() {
            "duality" => {
                let decoded: DualityOutcome = serde_json::from_value(outcome.payload.clone())
                    .map_err(|e| DomainError::Validation(format!("malformed duality outcome: {e}")))?;
                if decoded.tier.grants_hope() {
                    let hope = counter(state, "hope")?;
                    state["hope"] = serde_json::json!((hope + 1).min(MAX_HOPE));
                }
                if decoded.tier == DualityTier::CriticalSuccess {
                    let stress = counter(state, "stress")?;
                    state["stress"] = serde_json::json!((stress - 1).max(0));
                }
                Ok(())
            }
            "damage" => {
                let decoded: DamageOutcome = serde_json::from_value(outcome.payload.clone())
                    .map_err(|e| DomainError::Validation(format!("malformed damage outcome: {e}")))?;
                let hit_points = counter(state, "hit_points")?;
                state["hit_points"] = serde_json::json!((hit_points - decoded.amount).max(0));
                Ok(())
            }
            other => Err(DomainError::Validation(format!(
                "unknown outcome type: {other}"
            ))),
        }
    }
}

/// The Daggerheart metadata entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct DaggerheartSystem {
    state_factory: DaggerheartStateFactory,
    outcome_applier: DaggerheartOutcomeApplier,
}

impl DaggerheartSystem {
    /// Creates the metadata entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SystemEntry for DaggerheartSystem {
    fn id(&self) -> SystemId {
        SystemId::Daggerheart
    }

    fn version(&self) -> &str {
        DAGGERHEART_VERSION
    }
}

impl GameSystem for DaggerheartSystem {
    fn name(&self) -> &str {
        "Daggerheart"
    }

    fn state_factory(&self) -> Option<&dyn StateFactory> {
        Some(&self.state_factory)
    }

    fn outcome_applier(&self) -> Option<&dyn OutcomeApplier> {
        Some(&self.outcome_applier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duality(tier: &str) -> Outcome {
        Outcome {
            outcome_type: "duality".to_owned(),
            payload: serde_json::json!({ "tier": tier }),
        }
    }

    #[test]
    fn test_fresh_character_state_shape() {
        let state = DaggerheartStateFactory.new_character_state();
        assert_eq!(state["hit_points"], STARTING_HIT_POINTS);
        assert_eq!(state["stress"], 0);
        assert_eq!(state["hope"], STARTING_HOPE);
    }

    #[test]
    fn test_fresh_campaign_state_shape() {
        let state = DaggerheartStateFactory.new_campaign_state();
        assert_eq!(state["fear_pool"], 0);
        assert!(state["characters"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_hope_tier_grants_hope() {
        let mut state = DaggerheartStateFactory.new_character_state();
        DaggerheartOutcomeApplier
            .apply(&mut state, &duality("success_with_hope"))
            .unwrap();
        assert_eq!(state["hope"], STARTING_HOPE + 1);
    }

    #[test]
    fn test_hope_is_capped() {
        let mut state = serde_json::json!({ "hope": MAX_HOPE, "stress": 0, "hit_points": 6 });
        DaggerheartOutcomeApplier
            .apply(&mut state, &duality("failure_with_hope"))
            .unwrap();
        assert_eq!(state["hope"], MAX_HOPE);
    }

    #[test]
    fn test_fear_tier_leaves_character_untouched() {
        let mut state = DaggerheartStateFactory.new_character_state();
        let before = state.clone();
        DaggerheartOutcomeApplier
            .apply(&mut state, &duality("failure_with_fear"))
            .unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_critical_success_grants_hope_and_clears_stress() {
        let mut state = serde_json::json!({ "hope": 1, "stress": 2, "hit_points": 6 });
        DaggerheartOutcomeApplier
            .apply(&mut state, &duality("critical_success"))
            .unwrap();
        assert_eq!(state["hope"], 2);
        assert_eq!(state["stress"], 1);
    }

    #[test]
    fn test_damage_outcome_floors_at_zero() {
        let mut state = DaggerheartStateFactory.new_character_state();
        let outcome = Outcome {
            outcome_type: "damage".to_owned(),
            payload: serde_json::json!({ "amount": 100 }),
        };
        DaggerheartOutcomeApplier.apply(&mut state, &outcome).unwrap();
        assert_eq!(state["hit_points"], 0);
    }

    #[test]
    fn test_unknown_outcome_type_is_rejected() {
        let mut state = DaggerheartStateFactory.new_character_state();
        let outcome = Outcome {
            outcome_type: "initiative".to_owned(),
            payload: serde_json::json!({}),
        };
        let err = DaggerheartOutcomeApplier
            .apply(&mut state, &outcome)
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_system_entry_identity() {
        let system = DaggerheartSystem::new();
        assert_eq!(system.id(), SystemId::Daggerheart);
        assert_eq!(system.version(), "1.0");
        assert_eq!(system.name(), "Daggerheart");
        assert!(system.state_factory().is_some());
        assert!(system.outcome_applier().is_some());
    }
}
