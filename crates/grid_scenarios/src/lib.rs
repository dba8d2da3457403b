//! # grid_scenarios: Scenario Deduplication and Cell Indexing
//!
//! A calculation grid may contain thousands of cells, many of which request
//! value-identical bundles of market-data overrides. Shipping a full copy of
//! each bundle per cell is wasteful; this crate builds one deduplicated
//! registry of distinct scenario definitions and, per cell, a compact list
//! of indices into it.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                 Scenario Registry                 │
//! ├──────────────────────────────────────────────────┤
//! │  CellRequirements  - Per-cell input (key + list) │
//! │  RegistryBuilder   - Single-pass dedup fold      │
//! │  ScenarioRegistry  - Immutable indexed output    │
//! └──────────────────────────────────────────────────┘
//!          ↓
//! ┌──────────────────────────────────────────────────┐
//! │                   grid_core                       │
//! │  CellKey, LocalScenarioDefinition value types    │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//!
//! Building is synchronous and single-threaded; the resulting
//! [`ScenarioRegistry`] is immutable and may be read by any number of
//! parallel valuation workers without synchronization.
//!
//! ## Example
//!
//! ```
//! use grid_core::types::{CellKey, LocalScenarioDefinition};
//! use grid_scenarios::registry::{CellRequirements, RegistryBuilder};
//!
//! let s1 = LocalScenarioDefinition::new("IR +1bp", vec![]).unwrap();
//! let s2 = LocalScenarioDefinition::new("IR -1bp", vec![]).unwrap();
//!
//! let registry = RegistryBuilder::new()
//!     .add_requirement(CellRequirements::new(
//!         CellKey::new(0, 0),
//!         vec![s1.clone(), s2.clone()],
//!     ))
//!     .add_requirement(CellRequirements::new(
//!         CellKey::new(0, 1),
//!         vec![s2.clone(), s1.clone()],
//!     ))
//!     .build()
//!     .unwrap();
//!
//! // Two distinct definitions, each cell holds indices in its own order.
//! assert_eq!(registry.scenario_count(), 2);
//! assert_eq!(registry.scenario_indices(CellKey::new(0, 0)), Some(&[0, 1][..]));
//! assert_eq!(registry.scenario_indices(CellKey::new(0, 1)), Some(&[1, 0][..]));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod registry;

// Re-export commonly used types
pub use registry::{CellRequirements, RegistryBuilder, RegistryError, ScenarioRegistry};
