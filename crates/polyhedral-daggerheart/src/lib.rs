//! Daggerheart ruleset implementation.
//!
//! The one built-in game system: duality dice resolution on the write
//! path, hope/fear bookkeeping on the projection side.

pub mod adapter;
pub mod events;
pub mod metadata;
pub mod module;

/// The shipped Daggerheart ruleset version. Module, metadata entry and
/// adapter all register under this version so their keys agree.
pub const DAGGERHEART_VERSION: &str = "1.0";
