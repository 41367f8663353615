//! Shared domain abstractions for the Polyhedral backend.
//!
//! This crate defines the fundamental traits and types that every game
//! system and the registry layer depend on. It contains no infrastructure
//! code and no knowledge of any specific ruleset.

pub mod adapter;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod metadata;
pub mod module;
pub mod rng;
pub mod store;
pub mod system;
