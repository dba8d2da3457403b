//! The immutable scenario registry.
//!
//! Output of [`RegistryBuilder`](super::RegistryBuilder): a deduplicated,
//! first-seen-ordered list of scenario definitions plus a per-cell mapping of
//! indices into it.

use std::collections::HashMap;
use std::sync::OnceLock;

use grid_core::types::{CellKey, LocalScenarioDefinition};

use super::error::RegistryError;

static EMPTY: OnceLock<ScenarioRegistry> = OnceLock::new();

/// Deduplicated scenario definitions with per-cell index lists.
///
/// Immutable after construction, so any number of valuation workers may read
/// it concurrently without synchronization. Instances are only produced by
/// [`RegistryBuilder`](super::RegistryBuilder), which guarantees:
///
/// - `scenario_definitions()` contains no two structurally-equal entries and
///   is ordered by first encounter across the input;
/// - every index stored for a cell is valid for `scenario_definitions()`;
/// - each cell's index list has the same length and order as that cell's
///   original requirements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioRegistry {
    scenario_definitions: Vec<LocalScenarioDefinition>,
    cell_scenario_definitions: HashMap<CellKey, Vec<usize>>,
}

impl ScenarioRegistry {
    pub(super) fn from_parts(
        scenario_definitions: Vec<LocalScenarioDefinition>,
        cell_scenario_definitions: HashMap<CellKey, Vec<usize>>,
    ) -> Self {
        Self {
            scenario_definitions,
            cell_scenario_definitions,
        }
    }

    /// Returns the canonical empty registry.
    ///
    /// A process-wide shared instance, usable as a zero-allocation default
    /// when no cell in a run has local scenario overrides.
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_scenarios::registry::ScenarioRegistry;
    ///
    /// let empty = ScenarioRegistry::empty();
    /// assert!(empty.is_empty());
    /// assert_eq!(empty.scenario_count(), 0);
    /// ```
    pub fn empty() -> &'static ScenarioRegistry {
        EMPTY.get_or_init(|| ScenarioRegistry {
            scenario_definitions: Vec::new(),
            cell_scenario_definitions: HashMap::new(),
        })
    }

    /// Returns true if the registry holds no definitions and no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scenario_definitions.is_empty() && self.cell_scenario_definitions.is_empty()
    }

    /// Returns the number of distinct scenario definitions.
    #[inline]
    pub fn scenario_count(&self) -> usize {
        self.scenario_definitions.len()
    }

    /// Returns the number of cells with a requirements entry.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cell_scenario_definitions.len()
    }

    /// Returns the deduplicated definitions, in first-seen order.
    #[inline]
    pub fn scenario_definitions(&self) -> &[LocalScenarioDefinition] {
        &self.scenario_definitions
    }

    /// Returns the full cell-to-indices mapping.
    ///
    /// Used by the dispatch layer to attach a compact per-cell index list to
    /// each calculation task instead of copying scenario bundles.
    #[inline]
    pub fn cell_scenario_definitions(&self) -> &HashMap<CellKey, Vec<usize>> {
        &self.cell_scenario_definitions
    }

    /// Resolves an index back to its scenario definition.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IndexOutOfRange`] if `index` is not a valid
    /// position in [`scenario_definitions`](Self::scenario_definitions). Not
    /// expected in correct usage: indices obtained from
    /// [`scenario_indices`](Self::scenario_indices) always resolve.
    pub fn scenario_at(&self, index: usize) -> Result<&LocalScenarioDefinition, RegistryError> {
        self.scenario_definitions
            .get(index)
            .ok_or(RegistryError::IndexOutOfRange {
                index,
                len: self.scenario_definitions.len(),
            })
    }

    /// Returns the scenario indices for a cell, in requirement order.
    ///
    /// `None` means the cell had no requirements entry. Callers must treat
    /// `None` and `Some(&[])` alike as "no local scenario overrides for this
    /// cell"; both are legal.
    pub fn scenario_indices(&self, cell_key: CellKey) -> Option<&[usize]> {
        self.cell_scenario_definitions
            .get(&cell_key)
            .map(Vec::as_slice)
    }
}
