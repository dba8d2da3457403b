//! Per-cell scenario requirements.
//!
//! Upstream task-requirement gathering produces one [`CellRequirements`] per
//! grid cell that needs local scenarios. The builder consumes them in input
//! order.

use grid_core::types::{CellKey, LocalScenarioDefinition};

/// The scenario requirements of one grid cell.
///
/// Pairs a [`CellKey`] with the ordered list of scenario definitions that
/// cell must be evaluated under. Order is significant: a cell's index list
/// in the registry preserves it. Duplicates within one cell are legal and
/// preserved.
///
/// # Examples
///
/// ```
/// use grid_core::types::{CellKey, LocalScenarioDefinition};
/// use grid_scenarios::registry::CellRequirements;
///
/// let scenario = LocalScenarioDefinition::new("IR +1bp", vec![]).unwrap();
/// let req = CellRequirements::new(CellKey::new(0, 0), vec![scenario]);
/// assert_eq!(req.cell_key(), CellKey::new(0, 0));
/// assert_eq!(req.local_scenarios().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRequirements {
    cell_key: CellKey,
    local_scenarios: Vec<LocalScenarioDefinition>,
}

impl CellRequirements {
    /// Creates the requirements entry for one cell.
    ///
    /// An empty scenario list is legal and means the cell needs no local
    /// overrides.
    pub fn new(cell_key: CellKey, local_scenarios: Vec<LocalScenarioDefinition>) -> Self {
        Self {
            cell_key,
            local_scenarios,
        }
    }

    /// Returns the cell this entry belongs to.
    #[inline]
    pub fn cell_key(&self) -> CellKey {
        self.cell_key
    }

    /// Returns the required scenarios, in evaluation order.
    #[inline]
    pub fn local_scenarios(&self) -> &[LocalScenarioDefinition] {
        &self.local_scenarios
    }

    /// Consumes the entry, yielding its parts.
    pub fn into_parts(self) -> (CellKey, Vec<LocalScenarioDefinition>) {
        (self.cell_key, self.local_scenarios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(name: &str) -> LocalScenarioDefinition {
        LocalScenarioDefinition::new(name, vec![]).unwrap()
    }

    #[test]
    fn test_requirements_new() {
        let req = CellRequirements::new(CellKey::new(1, 2), vec![scenario("a"), scenario("b")]);
        assert_eq!(req.cell_key(), CellKey::new(1, 2));
        assert_eq!(req.local_scenarios().len(), 2);
    }

    #[test]
    fn test_requirements_preserve_order_and_duplicates() {
        let req = CellRequirements::new(
            CellKey::new(0, 0),
            vec![scenario("a"), scenario("a"), scenario("b")],
        );
        let names: Vec<&str> = req.local_scenarios().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["a", "a", "b"]);
    }

    #[test]
    fn test_requirements_empty_scenarios_legal() {
        let req = CellRequirements::new(CellKey::new(0, 0), vec![]);
        assert!(req.local_scenarios().is_empty());
    }

    #[test]
    fn test_requirements_into_parts() {
        let req = CellRequirements::new(CellKey::new(3, 4), vec![scenario("a")]);
        let (key, scenarios) = req.into_parts();
        assert_eq!(key, CellKey::new(3, 4));
        assert_eq!(scenarios.len(), 1);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_requirements_serde_roundtrip() {
            let req = CellRequirements::new(CellKey::new(1, 2), vec![scenario("a")]);
            let json = serde_json::to_string(&req).unwrap();
            let parsed: CellRequirements = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, req);
        }
    }
}
