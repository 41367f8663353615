//! Game system metadata: identity plus optional capability factories.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::system::SystemEntry;

/// A mechanics outcome to fold into character or campaign state.
///
/// Produced by rules resolution, consumed by [`OutcomeApplier`]. The payload
/// shape is defined by the owning system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    /// Type name for dispatch within the applier (e.g. `duality`, `damage`).
    pub outcome_type: String,
    /// System-defined payload.
    pub payload: serde_json::Value,
}

/// Builds fresh state documents for a system.
pub trait StateFactory: Send + Sync {
    /// Returns the state document for a newly created character.
    fn new_character_state(&self) -> serde_json::Value;

    /// Returns the state document for a newly created campaign.
    fn new_campaign_state(&self) -> serde_json::Value;
}

/// Applies a resolved outcome to a state document in place.
pub trait OutcomeApplier: Send + Sync {
    /// Folds `outcome` into `state`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the outcome payload does not
    /// match the system's expected shape.
    fn apply(&self, state: &mut serde_json::Value, outcome: &Outcome) -> Result<(), DomainError>;
}

/// Metadata entry for one game system: identity, human name, and the
/// capability factories mechanics dispatch needs.
///
/// Both factories are optional: a system may decline state management or
/// outcome application and callers must branch on absence.
pub trait GameSystem: SystemEntry {
    /// Human-readable system name (e.g. `"Daggerheart"`).
    fn name(&self) -> &str;

    /// State factory, when the system manages character/campaign state.
    fn state_factory(&self) -> Option<&dyn StateFactory>;

    /// Outcome applier, when the system supports outcome application.
    fn outcome_applier(&self) -> Option<&dyn OutcomeApplier>;
}
