//! Shared test mocks and utilities for the Polyhedral campaign backend.

mod clock;
mod rng;
mod store;

pub use clock::FixedClock;
pub use rng::{MockRng, SequenceRng};
pub use store::{FailingSnapshotStore, InMemorySnapshotStore};
