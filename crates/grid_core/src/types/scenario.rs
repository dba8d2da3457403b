//! Local scenario definitions.
//!
//! A [`LocalScenarioDefinition`] is a named bundle of market-data overrides
//! scoped to a single grid cell. It is the unit of deduplication: value-equal
//! bundles requested by different cells collapse to one registry entry.

use std::fmt;

use super::error::OverrideError;
use super::shift::MarketDataOverride;

/// An immutable, value-equal bundle of market-data overrides for one cell.
///
/// Equality and hashing are structural over the name and the ordered list of
/// overrides. Two instances built independently from the same values are the
/// same scenario, regardless of identity. The deduplication engine requires
/// nothing else of this type.
///
/// # Examples
///
/// ```rust
/// use grid_core::types::{FactorId, LocalScenarioDefinition, MarketDataOverride, Shift};
///
/// let bump = MarketDataOverride::new(
///     FactorId::curve("USD-OIS"),
///     Shift::Parallel(0.0001),
/// ).unwrap();
///
/// let a = LocalScenarioDefinition::new("IR +1bp", vec![bump.clone()]).unwrap();
/// let b = LocalScenarioDefinition::new("IR +1bp", vec![bump]).unwrap();
/// assert_eq!(a, b); // Structurally equal: one registry entry
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalScenarioDefinition {
    name: String,
    overrides: Vec<MarketDataOverride>,
}

impl LocalScenarioDefinition {
    /// Creates a new scenario definition.
    ///
    /// An empty override list is legal and describes a scenario that leaves
    /// market data untouched.
    ///
    /// # Errors
    ///
    /// Returns [`OverrideError::EmptyScenarioName`] if `name` is empty.
    pub fn new(
        name: impl Into<String>,
        overrides: Vec<MarketDataOverride>,
    ) -> Result<Self, OverrideError> {
        let name = name.into();
        if name.is_empty() {
            return Err(OverrideError::EmptyScenarioName);
        }
        Ok(Self { name, overrides })
    }

    /// Returns the scenario name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the overrides, in application order.
    #[inline]
    pub fn overrides(&self) -> &[MarketDataOverride] {
        &self.overrides
    }

    /// Returns the number of overrides.
    #[inline]
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

impl fmt::Display for LocalScenarioDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} overrides)", self.name, self.overrides.len())
    }
}
