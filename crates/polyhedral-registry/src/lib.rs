//! Pluggable game-system registration and dispatch.
//!
//! Maps `(system, version)` keys to the objects that implement a ruleset:
//! metadata entries for mechanics dispatch and adapters for event
//! projection. The manifest is the single source of truth that populates
//! both registries so write-path and projection-side keys never diverge.

pub mod adapters;
pub mod error;
pub mod manifest;
pub mod metadata;
pub mod registry;
pub mod stores;

pub use adapters::AdapterRegistry;
pub use error::{ManifestError, RegistryError};
pub use manifest::{Manifest, SystemDescriptor};
pub use metadata::MetadataRegistry;
pub use stores::Stores;
