//! Integration tests for system discovery and snapshot dispatch.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use polyhedral_core::store::SnapshotStore;
use polyhedral_test_support::InMemorySnapshotStore;

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_list_systems_returns_builtin_daggerheart() {
    let app = common::app(common::test_state());

    let (status, json) = get(app, "/api/v1/systems").await;
    assert_eq!(status, StatusCode::OK);

    let systems = json.as_array().unwrap();
    assert_eq!(systems.len(), 1);
    let system = &systems[0];
    assert_eq!(system["id"], "daggerheart");
    assert_eq!(system["version"], "1.0");
    assert_eq!(system["name"], "Daggerheart");
    assert_eq!(system["is_default"], true);
    assert_eq!(system["capabilities"]["state_factory"], true);
    assert_eq!(system["capabilities"]["outcome_applier"], true);
    assert_eq!(system["capabilities"]["profile_updates"], true);
}

#[tokio::test]
async fn test_get_system_resolves_default_version() {
    let app = common::app(common::test_state());

    let (status, json) = get(app, "/api/v1/systems/daggerheart").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["version"], "1.0");
}

#[tokio::test]
async fn test_get_system_with_explicit_version() {
    let app = common::app(common::test_state());

    let (status, json) = get(app, "/api/v1/systems/daggerheart?version=1.0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["version"], "1.0");
}

#[tokio::test]
async fn test_get_system_unknown_version_is_404() {
    let app = common::app(common::test_state());

    let (status, json) = get(app, "/api/v1/systems/daggerheart?version=9.9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "system_not_supported");
}

#[tokio::test]
async fn test_get_system_unknown_id_is_404() {
    let app = common::app(common::test_state());

    let (status, json) = get(app, "/api/v1/systems/shadowrun").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "system_not_supported");
}

#[tokio::test]
async fn test_get_system_registered_id_without_entry_is_404() {
    let app = common::app(common::test_state());

    // dnd5e is a known identifier but ships no descriptor row.
    let (status, json) = get(app, "/api/v1/systems/dnd5e").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "system_not_supported");
}

#[tokio::test]
async fn test_snapshot_returns_stored_read_model() {
    let store = Arc::new(InMemorySnapshotStore::new());
    let campaign_id = Uuid::new_v4();
    store
        .save(
            campaign_id,
            &serde_json::json!({ "fear_pool": 3, "characters": {} }),
        )
        .await
        .unwrap();

    let app = common::app(common::state_with_store(store));
    let uri = format!("/api/v1/systems/daggerheart/campaigns/{campaign_id}/snapshot");

    let (status, json) = get(app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["fear_pool"], 3);
}

#[tokio::test]
async fn test_snapshot_unknown_campaign_is_404() {
    let app = common::app(common::test_state());
    let uri = format!(
        "/api/v1/systems/daggerheart/campaigns/{}/snapshot",
        Uuid::new_v4()
    );

    let (status, json) = get(app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "campaign_not_found");
}

#[tokio::test]
async fn test_snapshot_with_failing_store_is_500() {
    let app = common::app(common::failing_state());
    let uri = format!(
        "/api/v1/systems/daggerheart/campaigns/{}/snapshot",
        Uuid::new_v4()
    );

    let (status, json) = get(app, &uri).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "infrastructure_error");
}
