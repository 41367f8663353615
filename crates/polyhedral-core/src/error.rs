//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

use crate::system::SystemKey;

/// Top-level domain error type for system operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A campaign has no state under the addressed system.
    #[error("campaign not found: {0}")]
    CampaignNotFound(Uuid),

    /// A command type the addressed system does not understand.
    #[error("unsupported command {command_type} for {system}")]
    UnsupportedCommand {
        /// The system that rejected the command.
        system: SystemKey,
        /// The offending command type name.
        command_type: String,
    },

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
