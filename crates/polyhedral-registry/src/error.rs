//! Registry and manifest error types.
//!
//! Two failure conventions coexist deliberately. The metadata registry
//! treats these conditions as unrecoverable startup misconfiguration and
//! panics; the adapter registry surfaces the same conditions as values of
//! [`RegistryError`] because it is built at runtime from operator-supplied
//! stores and callers decide whether to abort or run degraded.

use thiserror::Error;

use polyhedral_core::system::SystemId;

/// Recoverable registration failures surfaced by the adapter registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry's storage is unavailable for mutation (a writer
    /// panicked and poisoned the lock). Reads degrade to "not found".
    #[error("registry unavailable")]
    Unavailable,

    /// No entry was offered for registration.
    #[error("entry required")]
    EntryRequired,

    /// The entry's version is empty after trimming.
    #[error("version required")]
    VersionRequired,

    /// The `(id, version)` key already has a registered entry; the first
    /// registration is retained.
    #[error("{id}@{version} already registered")]
    AlreadyRegistered {
        /// The colliding system id.
        id: SystemId,
        /// The colliding version.
        version: String,
    },
}

/// Failures raised while constructing registries from the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    /// Rebind was invoked without an established base registry.
    #[error("rebind requires an established base adapter registry")]
    BaseRegistryRequired,

    /// A descriptor's adapter failed to register, with the offending
    /// `(id, version)` named.
    #[error("register adapter {id}@{version}: {source}")]
    AdapterRegistration {
        /// The system whose registration failed.
        id: SystemId,
        /// The version whose registration failed.
        version: String,
        /// The underlying registry failure.
        #[source]
        source: RegistryError,
    },
}
