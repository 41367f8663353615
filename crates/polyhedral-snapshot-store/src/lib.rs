//! `PostgreSQL` snapshot persistence for campaign read models.

mod pg_snapshot_store;
pub mod schema;

pub use pg_snapshot_store::PgSnapshotStore;
