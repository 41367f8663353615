//! Write-path module seam.

use crate::clock::Clock;
use crate::command::CommandEnvelope;
use crate::error::DomainError;
use crate::event::EventEnvelope;
use crate::rng::DeterministicRng;
use crate::system::SystemEntry;

/// Write-path handler for one game system: decodes commands and produces
/// the domain events they imply.
///
/// Modules are constructible with no arguments; time and randomness are
/// injected per call so command handling stays deterministic under test.
pub trait SystemModule: SystemEntry {
    /// Handles one command, returning the events to append to the
    /// campaign's stream.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnsupportedCommand` for command types the
    /// system does not define, or `DomainError::Validation` for malformed
    /// payloads.
    fn handle_command(
        &self,
        command: &CommandEnvelope,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Vec<EventEnvelope>, DomainError>;
}
