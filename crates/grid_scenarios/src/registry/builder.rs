//! Registry construction.
//!
//! [`RegistryBuilder`] folds an ordered sequence of [`CellRequirements`]
//! into a [`ScenarioRegistry`] in a single deterministic pass, collapsing
//! value-identical scenario definitions to one entry each.

use std::collections::HashMap;

use grid_core::types::LocalScenarioDefinition;

use super::error::RegistryError;
use super::requirements::CellRequirements;
use super::store::ScenarioRegistry;

/// Builder producing a deduplicated [`ScenarioRegistry`].
///
/// Accumulates per-cell requirements in input order, then [`build`](Self::build)
/// runs the one-pass deduplication fold. The pass is pure: it owns its
/// working state exclusively, performs no I/O, and publishes an immutable
/// result. A failed build returns no partial registry.
///
/// # Examples
///
/// ```
/// use grid_core::types::{CellKey, LocalScenarioDefinition};
/// use grid_scenarios::registry::{CellRequirements, RegistryBuilder};
///
/// let s1 = LocalScenarioDefinition::new("IR +1bp", vec![]).unwrap();
///
/// let registry = RegistryBuilder::new()
///     .add_requirement(CellRequirements::new(CellKey::new(0, 0), vec![s1.clone()]))
///     .add_requirement(CellRequirements::new(CellKey::new(1, 0), vec![s1]))
///     .build()
///     .unwrap();
///
/// // Both cells share the single registry entry.
/// assert_eq!(registry.scenario_count(), 1);
/// assert_eq!(registry.scenario_indices(CellKey::new(0, 0)), Some(&[0][..]));
/// assert_eq!(registry.scenario_indices(CellKey::new(1, 0)), Some(&[0][..]));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RegistryBuilder {
    requirements: Vec<CellRequirements>,
}

impl RegistryBuilder {
    /// Creates a builder with no requirements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one cell's requirements.
    pub fn add_requirement(mut self, requirement: CellRequirements) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// Appends requirements for multiple cells, preserving order.
    pub fn add_requirements(
        mut self,
        requirements: impl IntoIterator<Item = CellRequirements>,
    ) -> Self {
        self.requirements.extend(requirements);
        self
    }

    /// Returns the number of accumulated requirements entries.
    pub fn requirement_count(&self) -> usize {
        self.requirements.len()
    }

    /// Runs the single-pass deduplication fold.
    ///
    /// Scenarios are assigned indices in first-seen order, scanning cells in
    /// input order and scenarios within a cell in their own order. A
    /// scenario value equal to one already assigned reuses its index, so
    /// every cell referencing the same value points at the same entry.
    ///
    /// Empty input short-circuits to the canonical empty registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateCellRequirement`] if two entries
    /// share a cell key. Duplicate entries are never merged or overwritten;
    /// they indicate a bug in upstream requirement gathering.
    pub fn build(self) -> Result<ScenarioRegistry, RegistryError> {
        if self.requirements.is_empty() {
            return Ok(ScenarioRegistry::empty().clone());
        }

        // Dedup index paired with the append-only definition list: the map
        // answers "seen before?", the vec keeps first-seen order.
        let mut assigned: HashMap<LocalScenarioDefinition, usize> = HashMap::new();
        let mut definitions: Vec<LocalScenarioDefinition> = Vec::new();
        let mut cells: HashMap<_, Vec<usize>> = HashMap::with_capacity(self.requirements.len());

        for requirement in self.requirements {
            let (cell_key, scenarios) = requirement.into_parts();

            if cells.contains_key(&cell_key) {
                return Err(RegistryError::DuplicateCellRequirement(cell_key));
            }

            let mut indices = Vec::with_capacity(scenarios.len());
            for scenario in scenarios {
                let index = match assigned.get(&scenario) {
                    Some(&existing) => existing,
                    None => {
                        let index = definitions.len();
                        definitions.push(scenario.clone());
                        assigned.insert(scenario, index);
                        index
                    }
                };
                indices.push(index);
            }
            cells.insert(cell_key, indices);
        }

        Ok(ScenarioRegistry::from_parts(definitions, cells))
    }
}
