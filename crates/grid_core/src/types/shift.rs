//! Market-data perturbations.
//!
//! This module provides:
//! - `Shift`: How an override perturbs a market-data value
//! - `MarketDataOverride`: A shift paired with the factor it targets
//!
//! ## Equality Contract
//!
//! `Shift` implements `Eq` and `Hash` by comparing the bit pattern of its
//! `f64` payload. [`MarketDataOverride::new`] rejects non-finite amounts, so
//! for every constructible value bitwise equality coincides with numeric
//! equality and the hash/equality consistency the deduplication engine
//! depends on is total.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::OverrideError;
use super::factor::FactorId;

/// How an override perturbs the targeted market-data value.
///
/// # Variants
/// - `Absolute`: add a fixed amount (`new = old + amount`)
/// - `Relative`: scale by a percentage (`new = old * (1 + amount)`)
/// - `Parallel`: uniform absolute shift across all tenors/strikes of a
///   curve or surface
///
/// # Examples
///
/// ```rust
/// use grid_core::types::Shift;
///
/// let one_bp = Shift::Parallel(0.0001);
/// assert_eq!(one_bp.amount(), 0.0001);
/// assert!(one_bp.is_curve_shift());
/// ```
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shift {
    /// Absolute shift: `new_value = old_value + amount`.
    Absolute(f64),

    /// Relative shift: `new_value = old_value * (1 + amount)`.
    Relative(f64),

    /// Parallel shift: uniform absolute shift across all tenors/strikes.
    Parallel(f64),
}

impl Shift {
    /// Returns the shift amount.
    #[inline]
    pub fn amount(&self) -> f64 {
        match self {
            Self::Absolute(a) | Self::Relative(a) | Self::Parallel(a) => *a,
        }
    }

    /// Returns true if this shift applies to a whole curve or surface.
    #[inline]
    pub fn is_curve_shift(&self) -> bool {
        matches!(self, Self::Parallel(_))
    }

    fn tag(&self) -> u8 {
        match self {
            Self::Absolute(_) => 0,
            Self::Relative(_) => 1,
            Self::Parallel(_) => 2,
        }
    }
}

// Bitwise equality: totals the contract over f64 payloads.
impl PartialEq for Shift {
    fn eq(&self, other: &Self) -> bool {
        self.tag() == other.tag() && self.amount().to_bits() == other.amount().to_bits()
    }
}

impl Eq for Shift {}

impl Hash for Shift {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag().hash(state);
        self.amount().to_bits().hash(state);
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(a) => write!(f, "Absolute({})", a),
            Self::Relative(a) => write!(f, "Relative({})", a),
            Self::Parallel(a) => write!(f, "Parallel({})", a),
        }
    }
}

/// A single market-data override: one shift applied to one factor.
///
/// Immutable and value-equal. Construction validates that the shift amount
/// is finite; `NaN` and infinite amounts are rejected with
/// [`OverrideError::NonFiniteShift`].
///
/// # Examples
///
/// ```rust
/// use grid_core::types::{FactorId, MarketDataOverride, Shift};
///
/// let bump = MarketDataOverride::new(
///     FactorId::curve("USD-OIS"),
///     Shift::Parallel(0.0001),
/// ).unwrap();
/// assert_eq!(bump.factor().name(), "USD-OIS");
///
/// let bad = MarketDataOverride::new(FactorId::spot("SPX"), Shift::Absolute(f64::NAN));
/// assert!(bad.is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketDataOverride {
    factor: FactorId,
    shift: Shift,
}

impl MarketDataOverride {
    /// Creates a new override.
    ///
    /// # Errors
    ///
    /// Returns [`OverrideError::NonFiniteShift`] if the shift amount is
    /// `NaN` or infinite.
    pub fn new(factor: FactorId, shift: Shift) -> Result<Self, OverrideError> {
        if !shift.amount().is_finite() {
            return Err(OverrideError::NonFiniteShift {
                amount: shift.amount(),
            });
        }
        Ok(Self { factor, shift })
    }

    /// Returns the targeted factor.
    #[inline]
    pub fn factor(&self) -> &FactorId {
        &self.factor
    }

    /// Returns the shift to apply.
    #[inline]
    pub fn shift(&self) -> &Shift {
        &self.shift
    }
}

impl fmt::Display for MarketDataOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.factor, self.shift)
    }
}
