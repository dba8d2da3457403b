//! Scenario registry construction and read access.
//!
//! This module provides:
//! - [`CellRequirements`]: per-cell input to the builder
//! - [`RegistryBuilder`]: the single-pass deduplication fold
//! - [`ScenarioRegistry`]: the immutable deduplicated output
//! - [`RegistryError`]: build and read failures

mod builder;
mod error;
mod requirements;
mod store;

pub use builder::RegistryBuilder;
pub use error::RegistryError;
pub use requirements::CellRequirements;
pub use store::ScenarioRegistry;
