//! Error types for value construction.
//!
//! This module provides `OverrideError`, returned when a market-data
//! override or scenario definition is constructed from invalid inputs.

use thiserror::Error;

/// Errors from constructing overrides and scenario definitions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OverrideError {
    /// Shift amount is NaN or infinite.
    #[error("Shift amount is not finite: {amount}")]
    NonFiniteShift {
        /// The offending amount.
        amount: f64,
    },

    /// Scenario name is empty.
    #[error("Scenario name must not be empty")]
    EmptyScenarioName,
}
