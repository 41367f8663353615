//! Polyhedral API server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use polyhedral_api::error::AppError;
use polyhedral_api::routes;
use polyhedral_api::state::AppState;
use polyhedral_core::system::SystemId;
use polyhedral_registry::{Manifest, Stores};
use polyhedral_snapshot_store::{PgSnapshotStore, schema};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Polyhedral API server");

    // Read configuration from environment.
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| AppError::Config("DATABASE_URL environment variable must be set".into()))?;
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;

    // Create database connection pool and ensure the snapshot table exists.
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await?;
    sqlx::query(schema::CREATE_SNAPSHOTS_TABLE)
        .execute(&pool)
        .await?;

    // Build both registries from the manifest. A manifest construction
    // failure names the offending (id, version) and aborts startup.
    let manifest = Manifest::builtin();
    let stores = Stores::none().with_daggerheart(Arc::new(PgSnapshotStore::new(
        pool.clone(),
        SystemId::Daggerheart,
    )));
    let metadata = Arc::new(manifest.metadata_registry());
    let adapters = Arc::new(manifest.adapter_registry(&stores)?);
    tracing::info!(
        systems = metadata.len(),
        adapters = adapters.len(),
        "registries built"
    );

    let app_state = AppState::new(metadata, adapters);

    // Build router.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/systems", routes::systems::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
