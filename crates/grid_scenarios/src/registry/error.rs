//! Registry error types.
//!
//! This module provides structured error types for registry construction and
//! read access using `thiserror` for derivation.

use grid_core::types::CellKey;
use thiserror::Error;

/// Errors from building or reading a scenario registry.
///
/// Both variants signal contract violations, not transient conditions: the
/// computation is deterministic, so retrying with the same input fails the
/// same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The input contained two requirements entries for the same cell.
    ///
    /// Upstream requirement gathering must supply at most one entry per
    /// cell; the build aborts with no partial registry.
    #[error("Duplicate cell requirement for cell {0}")]
    DuplicateCellRequirement(CellKey),

    /// A scenario index outside the registry's definition range.
    #[error("Scenario index {index} out of range for {len} definitions")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of scenario definitions in the registry.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_cell_requirement_display() {
        let err = RegistryError::DuplicateCellRequirement(CellKey::new(0, 0));
        assert_eq!(format!("{}", err), "Duplicate cell requirement for cell (0, 0)");
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = RegistryError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(
            format!("{}", err),
            "Scenario index 5 out of range for 3 definitions"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err: Box<dyn std::error::Error> =
            Box::new(RegistryError::DuplicateCellRequirement(CellKey::new(1, 2)));
        assert!(err.to_string().contains("(1, 2)"));
    }

    #[test]
    fn test_error_clone_and_equality() {
        let err1 = RegistryError::IndexOutOfRange { index: 1, len: 0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
