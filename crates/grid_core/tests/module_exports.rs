//! Integration tests for module exports.
//!
//! Verify that all public types are accessible via absolute paths and via
//! the module-level re-exports.

/// Test that value types are accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use grid_core::types::cell::CellKey;
    use grid_core::types::factor::FactorId;
    use grid_core::types::scenario::LocalScenarioDefinition;
    use grid_core::types::shift::{MarketDataOverride, Shift};

    let key = CellKey::new(0, 0);
    assert_eq!(key.row(), 0);

    let bump =
        MarketDataOverride::new(FactorId::curve("USD-OIS"), Shift::Parallel(0.0001)).unwrap();
    let scenario = LocalScenarioDefinition::new("IR +1bp", vec![bump]).unwrap();
    assert_eq!(scenario.override_count(), 1);
}

/// Test that the module-level re-exports resolve to the same types.
#[test]
fn test_types_reexports() {
    use grid_core::types::{CellKey, FactorId, OverrideError, Shift};

    let _key: CellKey = (1, 2).into();
    let _factor = FactorId::spot("USDJPY");
    let _shift = Shift::Relative(0.1);
    let _err = OverrideError::EmptyScenarioName;
}
