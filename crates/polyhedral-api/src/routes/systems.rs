//! Routes for game-system discovery and read-model dispatch.

use axum::extract::{Path, Query, State};
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use polyhedral_core::system::SystemId;

use crate::error::ApiError;
use crate::state::AppState;

/// Optional explicit version; omitted or blank resolves to the system's
/// default version.
#[derive(Debug, Deserialize)]
pub struct VersionQuery {
    /// Requested ruleset version.
    #[serde(default)]
    pub version: Option<String>,
}

/// Capability flags for one registered system version.
#[derive(Debug, Serialize)]
pub struct Capabilities {
    /// Whether the system builds character/campaign state.
    pub state_factory: bool,
    /// Whether the system applies mechanics outcomes.
    pub outcome_applier: bool,
    /// Whether the system's adapter handles profile updates.
    pub profile_updates: bool,
}

/// One registered system version.
#[derive(Debug, Serialize)]
pub struct SystemSummary {
    /// System identifier.
    pub id: SystemId,
    /// Registered version.
    pub version: String,
    /// Human-readable name.
    pub name: String,
    /// Whether this version is the id's default.
    pub is_default: bool,
    /// Capability flags.
    pub capabilities: Capabilities,
}

fn summarize(state: &AppState, entry: &dyn polyhedral_core::metadata::GameSystem) -> SystemSummary {
    let id = entry.id();
    let version = entry.version().trim().to_owned();
    let profile_updates = state
        .adapters
        .get(id, &version)
        .is_some_and(|adapter| adapter.profile_updates().is_some());
    SystemSummary {
        id,
        name: entry.name().to_owned(),
        is_default: state.metadata.default_version(id).as_deref() == Some(version.as_str()),
        capabilities: Capabilities {
            state_factory: entry.state_factory().is_some(),
            outcome_applier: entry.outcome_applier().is_some(),
            profile_updates,
        },
        version,
    }
}

/// GET /: all registered system versions.
#[instrument(skip(state))]
async fn list_systems(State(state): State<AppState>) -> Json<Vec<SystemSummary>> {
    let mut summaries: Vec<SystemSummary> = state
        .metadata
        .list()
        .iter()
        .map(|entry| summarize(&state, entry.as_ref()))
        .collect();
    summaries.sort_by(|a, b| (a.id.as_str(), &a.version).cmp(&(b.id.as_str(), &b.version)));
    Json(summaries)
}

/// GET /{id}: one system, at an explicit or the default version.
#[instrument(skip(state))]
async fn get_system(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<VersionQuery>,
) -> Result<Json<SystemSummary>, ApiError> {
    let system_id: SystemId = id
        .parse()
        .map_err(|_| ApiError::SystemNotSupported(id.clone()))?;
    let version = query.version.as_deref().unwrap_or("");

    // Absence is an ordinary branch: the registry returns nothing and the
    // edge turns that into a 404.
    let entry = state
        .metadata
        .get(system_id, version)
        .ok_or_else(|| ApiError::SystemNotSupported(format!("{id}@{}", version.trim())))?;

    Ok(Json(summarize(&state, entry.as_ref())))
}

/// GET /{id}/campaigns/{campaign_id}/snapshot: a campaign's read model
/// under one system, dispatched through the adapter registry.
#[instrument(skip(state))]
async fn get_snapshot(
    State(state): State<AppState>,
    Path((id, campaign_id)): Path<(String, Uuid)>,
    Query(query): Query<VersionQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let system_id: SystemId = id
        .parse()
        .map_err(|_| ApiError::SystemNotSupported(id.clone()))?;
    let version = query.version.as_deref().unwrap_or("");

    let adapter = state
        .adapters
        .get(system_id, version)
        .ok_or_else(|| ApiError::SystemNotSupported(format!("{id}@{}", version.trim())))?;

    let snapshot = adapter
        .snapshot(campaign_id)
        .await?
        .ok_or(polyhedral_core::error::DomainError::CampaignNotFound(
            campaign_id,
        ))?;

    Ok(Json(snapshot))
}

/// Returns the router for system discovery and dispatch.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_systems))
        .route("/{id}", get(get_system))
        .route("/{id}/campaigns/{campaign_id}/snapshot", get(get_snapshot))
}
