//! Saturation-curve behavior: explicit quality pairs, saturation
//! queries from a single boundary condition, and round-trip coherence.
//!
//! Reference values: IAPWS-IF97 via
//! https://thermofluidprop.com/stoffwerte-online/fluid-property-calculator

use approx::assert_abs_diff_eq;
use if97_water::{PressUnit, UnitSystem, Water};

#[test]
fn saturation_pressure_from_tx_pair() {
    let units = UnitSystem::engineering().pressure(PressUnit::Millibar);
    let mut water = Water::with_units(units);

    water.update_tx(25.0, 1.0).unwrap();
    assert_abs_diff_eq!(water.pressure().unwrap(), 31.6975, epsilon = 1e-4);
}

#[test]
fn saturation_temperature_from_px_pair() {
    let units = UnitSystem::engineering().pressure(PressUnit::Atm);
    let mut water = Water::with_units(units);

    water.update_px(1.0, 1.0).unwrap();
    assert_abs_diff_eq!(water.temperature().unwrap(), 99.9743, epsilon = 1e-4);
}

#[test]
fn saturation_pressure_from_single_temperature() {
    let units = UnitSystem::engineering().pressure(PressUnit::Millibar);
    let mut water = Water::with_units(units);

    // No pair bound — only the temperature is known.
    water.update_t(25.0).unwrap();
    assert_abs_diff_eq!(water.saturation_pressure().unwrap(), 31.6975, epsilon = 1e-4);
}

#[test]
fn saturation_temperature_from_single_pressure() {
    let units = UnitSystem::engineering().pressure(PressUnit::Atm);
    let mut water = Water::with_units(units);

    water.update_p(1.0).unwrap();
    assert_abs_diff_eq!(
        water.saturation_temperature().unwrap(),
        99.9743,
        epsilon = 1e-4
    );
}

#[test]
fn saturation_temperature_on_top_of_a_px_pair() {
    let units = UnitSystem::engineering().pressure(PressUnit::Atm);
    let mut water = Water::with_units(units);

    // The pair stays bound; the saturation query anchors on its cached
    // pressure.
    water.update_px(1.0, 1.0).unwrap();
    assert_abs_diff_eq!(
        water.saturation_temperature().unwrap(),
        99.9743,
        epsilon = 1e-4
    );
}

#[test]
fn saturation_query_after_a_state_change() {
    let units = UnitSystem::engineering().pressure(PressUnit::Millibar);
    let mut water = Water::with_units(units);

    // Initial conditions, then a fresh single-input update.
    water.update_th(100.0, 419.1).unwrap();
    water.update_t(25.0).unwrap();

    assert_abs_diff_eq!(water.saturation_pressure().unwrap(), 31.6975, epsilon = 1e-4);
}

#[test]
fn saturation_query_from_a_bound_pair() {
    let mut water = Water::with_units(UnitSystem::engineering());

    water.update_pt(1.0, 25.0).unwrap();
    assert_abs_diff_eq!(
        water.saturation_pressure().unwrap(),
        0.0316975,
        epsilon = 1e-7
    );
}

#[test]
fn saturation_round_trip_recovers_the_temperature() {
    let mut water = Water::new();

    water.update_t(60.0).unwrap();
    let psat = water.saturation_pressure().unwrap();

    water.update_p(psat).unwrap();
    assert_abs_diff_eq!(water.saturation_temperature().unwrap(), 60.0, epsilon = 1e-6);
}
