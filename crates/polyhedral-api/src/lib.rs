//! HTTP API library surface for the server binary and integration tests.

pub mod error;
pub mod routes;
pub mod state;
