//! Daggerheart event payloads and duality resolution.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event type name for a resolved duality roll.
pub const DUALITY_ROLL_MADE: &str = "daggerheart.duality_roll_made";
/// Event type name for damage dealt to a character.
pub const DAMAGE_DEALT: &str = "daggerheart.damage_dealt";
/// Event type name for stress marked on a character.
pub const STRESS_MARKED: &str = "daggerheart.stress_marked";

/// Five-tier outcome of a duality roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DualityTier {
    /// Matched duality dice: success plus hope, clears stress.
    CriticalSuccess,
    /// Met the difficulty with the hope die dominant.
    SuccessWithHope,
    /// Met the difficulty with the fear die dominant.
    SuccessWithFear,
    /// Missed the difficulty with the hope die dominant.
    FailureWithHope,
    /// Missed the difficulty with the fear die dominant.
    FailureWithFear,
}

impl DualityTier {
    /// Whether this tier feeds the campaign's fear pool.
    #[must_use]
    pub const fn is_with_fear(self) -> bool {
        matches!(self, Self::SuccessWithFear | Self::FailureWithFear)
    }

    /// Whether this tier grants the roller hope.
    #[must_use]
    pub const fn grants_hope(self) -> bool {
        matches!(
            self,
            Self::CriticalSuccess | Self::SuccessWithHope | Self::FailureWithHope
        )
    }
}

/// Determines the duality tier for a 2d12 roll.
///
/// Matched dice are a critical success regardless of the difficulty.
/// Otherwise the total decides success, and the dominant die decides
/// whether the result comes with hope or with fear.
#[must_use]
pub fn determine_tier(hope_die: u32, fear_die: u32, total: i32, difficulty: i32) -> DualityTier {
    if hope_die == fear_die {
        return DualityTier::CriticalSuccess;
    }
    match (total >= difficulty, hope_die > fear_die) {
        (true, true) => DualityTier::SuccessWithHope,
        (true, false) => DualityTier::SuccessWithFear,
        (false, true) => DualityTier::FailureWithHope,
        (false, false) => DualityTier::FailureWithFear,
    }
}

/// Payload of a [`DUALITY_ROLL_MADE`] event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DualityRollMade {
    /// The rolling character.
    pub character_id: Uuid,
    /// The hope d12 result.
    pub hope_die: u32,
    /// The fear d12 result.
    pub fear_die: u32,
    /// Trait modifier added to the dice.
    pub modifier: i32,
    /// Dice plus modifier.
    pub total: i32,
    /// Difficulty the roll was made against.
    pub difficulty: i32,
    /// Resolved outcome tier.
    pub tier: DualityTier,
}

/// Payload of a [`DAMAGE_DEALT`] event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageDealt {
    /// The damaged character.
    pub character_id: Uuid,
    /// Hit points lost.
    pub amount: i64,
}

/// Payload of a [`STRESS_MARKED`] event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressMarked {
    /// The stressed character.
    pub character_id: Uuid,
    /// Stress boxes marked.
    pub amount: i64,
}
