//! # grid_core: Value Types for the Calculation Grid
//!
//! ## Foundation Layer Role
//!
//! grid_core is the bottom layer of the gridcalc workspace, providing the
//! immutable, value-equal types the scenario engine is built from:
//! - Grid positions: `CellKey` (`types::cell`)
//! - Market-data identifiers: `FactorId` (`types::factor`)
//! - Perturbations: `Shift`, `MarketDataOverride` (`types::shift`)
//! - Scenario bundles: `LocalScenarioDefinition` (`types::scenario`)
//! - Error types: `OverrideError` (`types::error`)
//!
//! ## Structural Equality Contract
//!
//! Every type in this crate is compared and hashed structurally: two
//! instances with equal field values are the same value, independent of
//! where they were created. The scenario deduplication engine in
//! `grid_scenarios` relies on this contract to collapse value-identical
//! scenario bundles across thousands of grid cells.
//!
//! ## Usage Examples
//!
//! ```rust
//! use grid_core::types::{CellKey, FactorId, LocalScenarioDefinition, MarketDataOverride, Shift};
//!
//! let cell = CellKey::new(0, 3);
//! assert_eq!(cell.row(), 0);
//! assert_eq!(cell.column(), 3);
//!
//! let bump = MarketDataOverride::new(
//!     FactorId::curve("USD-OIS"),
//!     Shift::Parallel(0.0001),
//! ).unwrap();
//!
//! let scenario = LocalScenarioDefinition::new("IR +1bp", vec![bump]).unwrap();
//! assert_eq!(scenario.override_count(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for all value types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
