//! Market-data factor identification.
//!
//! This module provides [`FactorId`], an enum naming the market-data item a
//! scenario override targets: a yield curve, a spot price, or a volatility
//! surface.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a market-data item targeted by an override.
///
/// Each variant carries the name of the underlying market-data object.
/// Equality and hashing are structural: the variant and the name both
/// participate, so `Curve("USD-OIS")` and `Spot("USD-OIS")` are distinct
/// factors.
///
/// # Examples
///
/// ```rust
/// use grid_core::types::FactorId;
///
/// let curve = FactorId::curve("USD-OIS");
/// let spot = FactorId::spot("USDJPY");
/// let vol = FactorId::vol_surface("SPX-Vol");
///
/// assert_eq!(format!("{}", curve), "Curve:USD-OIS");
/// assert_eq!(format!("{}", spot), "Spot:USDJPY");
/// assert_eq!(format!("{}", vol), "VolSurface:SPX-Vol");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FactorId {
    /// Yield curve identifier (e.g., "USD-OIS", "EUR-EURIBOR").
    Curve(String),

    /// Spot price identifier (e.g., "USDJPY", "SPX").
    Spot(String),

    /// Volatility surface identifier (e.g., "SPX-Vol").
    VolSurface(String),
}

impl FactorId {
    /// Creates a new curve factor.
    #[inline]
    pub fn curve(name: impl Into<String>) -> Self {
        Self::Curve(name.into())
    }

    /// Creates a new spot factor.
    #[inline]
    pub fn spot(name: impl Into<String>) -> Self {
        Self::Spot(name.into())
    }

    /// Creates a new volatility surface factor.
    #[inline]
    pub fn vol_surface(name: impl Into<String>) -> Self {
        Self::VolSurface(name.into())
    }

    /// Returns the factor kind as a string.
    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Curve(_) => "Curve",
            Self::Spot(_) => "Spot",
            Self::VolSurface(_) => "VolSurface",
        }
    }

    /// Returns the name of the targeted market-data item.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Self::Curve(name) | Self::Spot(name) | Self::VolSurface(name) => name,
        }
    }
}

impl fmt::Display for FactorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_factor_id_construction() {
        assert_eq!(
            FactorId::curve("USD-OIS"),
            FactorId::Curve("USD-OIS".to_string())
        );
        assert_eq!(FactorId::spot("USDJPY"), FactorId::Spot("USDJPY".to_string()));
        assert_eq!(
            FactorId::vol_surface("SPX-Vol"),
            FactorId::VolSurface("SPX-Vol".to_string())
        );
    }

    #[test]
    fn test_factor_id_kind_and_name() {
        assert_eq!(FactorId::curve("USD-OIS").kind(), "Curve");
        assert_eq!(FactorId::curve("USD-OIS").name(), "USD-OIS");
        assert_eq!(FactorId::spot("SPX").kind(), "Spot");
        assert_eq!(FactorId::vol_surface("SPX-Vol").kind(), "VolSurface");
    }

    #[test]
    fn test_factor_id_display() {
        assert_eq!(format!("{}", FactorId::curve("EUR-EURIBOR")), "Curve:EUR-EURIBOR");
        assert_eq!(format!("{}", FactorId::spot("USDJPY")), "Spot:USDJPY");
    }

    #[test]
    fn test_factor_id_equality_kind_matters() {
        let curve = FactorId::curve("SPX");
        let spot = FactorId::spot("SPX");
        assert_ne!(curve, spot); // Same name, different kind
    }

    #[test]
    fn test_factor_id_hash() {
        let mut set = HashSet::new();
        set.insert(FactorId::curve("USD-OIS"));
        set.insert(FactorId::curve("EUR-OIS"));
        set.insert(FactorId::curve("USD-OIS")); // Duplicate
        assert_eq!(set.len(), 2);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_factor_id_serde_roundtrip() {
            for factor in [
                FactorId::curve("USD-OIS"),
                FactorId::spot("USDJPY"),
                FactorId::vol_surface("SPX-Vol"),
            ] {
                let json = serde_json::to_string(&factor).unwrap();
                let parsed: FactorId = serde_json::from_str(&json).unwrap();
                assert_eq!(parsed, factor);
            }
        }
    }
}
