//! Shared setup for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;

use polyhedral_api::routes;
use polyhedral_api::state::AppState;
use polyhedral_core::store::SnapshotStore;
use polyhedral_registry::{Manifest, Stores};
use polyhedral_test_support::{FailingSnapshotStore, InMemorySnapshotStore};

/// Builds application state from the built-in manifest and one
/// Daggerheart store handle.
pub fn state_with_store(store: Arc<dyn SnapshotStore>) -> AppState {
    let manifest = Manifest::builtin();
    let stores = Stores::none().with_daggerheart(store);
    AppState::new(
        Arc::new(manifest.metadata_registry()),
        Arc::new(manifest.adapter_registry(&stores).unwrap()),
    )
}

/// State backed by an in-memory snapshot store.
pub fn test_state() -> AppState {
    state_with_store(Arc::new(InMemorySnapshotStore::new()))
}

/// State backed by a store that always fails.
pub fn failing_state() -> AppState {
    state_with_store(Arc::new(FailingSnapshotStore))
}

/// The full application router, as `main` assembles it.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/systems", routes::systems::router())
        .with_state(state)
}
