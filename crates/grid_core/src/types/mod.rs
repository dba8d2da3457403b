//! Core value types for the calculation grid.
//!
//! This module provides:
//! - `cell`: Grid positions (`CellKey`)
//! - `factor`: Market-data identifiers (`FactorId`)
//! - `shift`: Perturbations (`Shift`, `MarketDataOverride`)
//! - `scenario`: Scenario bundles (`LocalScenarioDefinition`)
//! - `error`: Structured error types for value construction
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`CellKey`] from `cell`
//! - [`FactorId`] from `factor`
//! - [`Shift`], [`MarketDataOverride`] from `shift`
//! - [`LocalScenarioDefinition`] from `scenario`
//! - [`OverrideError`] from `error`

pub mod cell;
pub mod error;
pub mod factor;
pub mod scenario;
pub mod shift;

// Re-export commonly used types at module level
pub use cell::CellKey;
pub use error::OverrideError;
pub use factor::FactorId;
pub use scenario::LocalScenarioDefinition;
pub use shift::{MarketDataOverride, Shift};
