//! Shared application state.

use std::sync::Arc;

use polyhedral_registry::{AdapterRegistry, MetadataRegistry};

/// Application state shared across all request handlers.
///
/// Both registries are built once at startup from the manifest; handlers
/// only read them.
#[derive(Clone)]
pub struct AppState {
    /// Game-system metadata registry.
    pub metadata: Arc<MetadataRegistry>,
    /// Base adapter registry wired to the deployment's stores.
    pub adapters: Arc<AdapterRegistry>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(metadata: Arc<MetadataRegistry>, adapters: Arc<AdapterRegistry>) -> Self {
        Self { metadata, adapters }
    }
}
