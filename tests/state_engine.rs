//! Engine semantics against a recording mock backend: memoization,
//! input echo, invalidation, dispatch and error isolation.

use std::cell::{Cell, RefCell};

use if97_water::{CorrelationBackend, If97Error, InputPair, Property, UnitSystem, Water};

/// Deterministic correlation stand-in that records every invocation.
///
/// Returns `param1 + 2·param2 + id/100`, so tests can predict exactly
/// which parameters (and in which order) reached the backend.
struct RecordingBackend {
    calls: RefCell<Vec<(InputPair, Property)>>,
    poisoned: Cell<Option<Property>>,
}

impl RecordingBackend {
    fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            poisoned: Cell::new(None),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn calls_for(&self, property: Property) -> usize {
        self.calls.borrow().iter().filter(|(_, p)| *p == property).count()
    }

    fn last_call(&self) -> Option<(InputPair, Property)> {
        self.calls.borrow().last().copied()
    }
}

fn mock_value(p1: f64, p2: f64, property: Property) -> f64 {
    p1 + 2.0 * p2 + (property as i32) as f64 / 100.0
}

impl CorrelationBackend for RecordingBackend {
    fn evaluate(&self, pair: InputPair, p1: f64, p2: f64, property: Property) -> f64 {
        self.calls.borrow_mut().push((pair, property));
        if self.poisoned.get() == Some(property) {
            return f64::NAN;
        }
        mock_value(p1, p2, property)
    }
}

/// Engine in native units, so conversions are the identity.
fn engine() -> Water<RecordingBackend> {
    Water::with_backend(RecordingBackend::new(), UnitSystem::if97())
}

// ════════════════════════════════════════════════════════════════════
//  Memoization
// ════════════════════════════════════════════════════════════════════

#[test]
fn value_is_memoized_bit_identical() {
    let mut water = engine();
    water.update_pt(0.1, 25.0).unwrap();

    let first = water.value(Property::Density).unwrap();
    let second = water.value(Property::Density).unwrap();

    assert_eq!(first.to_bits(), second.to_bits());
    assert_eq!(water.backend().calls_for(Property::Density), 1);
}

#[test]
fn supplied_inputs_echo_without_backend_calls() {
    let mut water = engine();
    water.update_pt(0.1, 25.0).unwrap();

    assert_eq!(water.pressure().unwrap(), 0.1);
    assert_eq!(water.temperature().unwrap(), 25.0);
    assert_eq!(water.backend().call_count(), 0);
}

#[test]
fn update_invalidates_previously_cached_values() {
    let mut water = engine();
    water.update_pt(0.1, 25.0).unwrap();
    water.value(Property::Density).unwrap();

    water.update_pt(0.2, 30.0).unwrap();
    let recomputed = water.value(Property::Density).unwrap();

    assert_eq!(water.backend().calls_for(Property::Density), 2);
    assert_eq!(recomputed, mock_value(0.2, 30.0, Property::Density));
}

// ════════════════════════════════════════════════════════════════════
//  Dispatch
// ════════════════════════════════════════════════════════════════════

#[test]
fn reversed_arguments_reach_backend_in_declared_order() {
    let mut water = engine();
    water
        .update_pair(Property::Temperature, 25.0, Property::Pressure, 0.1)
        .unwrap();

    let density = water.value(Property::Density).unwrap();
    assert_eq!(density, mock_value(0.1, 25.0, Property::Density));
    assert_eq!(
        water.backend().last_call(),
        Some((InputPair::PressureTemperature, Property::Density))
    );
}

#[test]
fn unsupported_pair_is_rejected() {
    let mut water = engine();
    let err = water
        .update_pair(Property::Enthalpy, 100.0, Property::Entropy, 0.3)
        .unwrap_err();
    assert!(matches!(
        err,
        If97Error::UnsupportedPair {
            first: Property::Enthalpy,
            second: Property::Entropy,
        }
    ));
}

#[test]
fn derived_read_requires_a_bound_pair() {
    let mut water = engine();
    assert!(matches!(
        water.value(Property::Density).unwrap_err(),
        If97Error::BackendNotBound { property: Property::Density }
    ));

    water.update_t(25.0).unwrap();
    assert!(matches!(
        water.value(Property::Density).unwrap_err(),
        If97Error::BackendNotBound { .. }
    ));
    // The supplied input itself stays readable.
    assert_eq!(water.temperature().unwrap(), 25.0);
}

// ════════════════════════════════════════════════════════════════════
//  Validation
// ════════════════════════════════════════════════════════════════════

#[test]
fn out_of_range_inputs_are_rejected_and_state_survives() {
    let mut water = engine();
    water.update_pt(0.1, 25.0).unwrap();
    water.value(Property::Density).unwrap();

    // 200 MPa is above the 1000 bar envelope; the update must fail
    // without touching the current state.
    assert!(matches!(
        water.update_pt(200.0, 25.0).unwrap_err(),
        If97Error::OutOfRange { .. }
    ));
    assert!(matches!(
        water.update_pt(0.1, 900.0).unwrap_err(),
        If97Error::OutOfRange { .. }
    ));
    assert!(matches!(
        water.update_t(-5.0).unwrap_err(),
        If97Error::OutOfRange { .. }
    ));

    assert_eq!(water.pressure().unwrap(), 0.1);
    assert_eq!(water.backend().calls_for(Property::Density), 1);
}

#[test]
fn computed_primary_outside_envelope_is_rejected() {
    let mut water = engine();
    // (p, h) = (0.1, 500): the mock "temperature" comes out at
    // 0.1 + 1000 + 0.01 — far beyond 800 °C.
    water.update_ph(0.1, 500.0).unwrap();
    assert!(matches!(
        water.temperature().unwrap_err(),
        If97Error::OutOfRange { quantity: "temperature", .. }
    ));
}

#[test]
fn computation_failure_leaves_sibling_cache_intact() {
    let mut water = engine();
    water.update_pt(0.1, 25.0).unwrap();
    let density = water.value(Property::Density).unwrap();

    water.backend().poisoned.set(Some(Property::Enthalpy));
    assert!(matches!(
        water.value(Property::Enthalpy).unwrap_err(),
        If97Error::Computation { property: Property::Enthalpy, .. }
    ));

    // Density is still served from cache, bit-identical.
    assert_eq!(water.value(Property::Density).unwrap(), density);
    assert_eq!(water.backend().calls_for(Property::Density), 1);

    // A failed computation is not cached; the next read evaluates again.
    water.backend().poisoned.set(None);
    let enthalpy = water.value(Property::Enthalpy).unwrap();
    assert_eq!(enthalpy, mock_value(0.1, 25.0, Property::Enthalpy));
    assert_eq!(water.backend().calls_for(Property::Enthalpy), 2);
}

// ════════════════════════════════════════════════════════════════════
//  Saturation queries
// ════════════════════════════════════════════════════════════════════

#[test]
fn saturation_pressure_from_single_temperature() {
    let mut water = engine();
    water.update_t(25.0).unwrap();

    let psat = water.saturation_pressure().unwrap();
    assert_eq!(psat, mock_value(25.0, 1.0, Property::Pressure));
    assert_eq!(
        water.backend().last_call(),
        Some((InputPair::TemperatureQuality, Property::Pressure))
    );

    // Memoized under the synthetic id.
    water.saturation_pressure().unwrap();
    assert_eq!(water.backend().call_count(), 1);
}

#[test]
fn saturation_temperature_from_single_pressure() {
    let mut water = engine();
    water.update_p(0.1).unwrap();

    let tsat = water.saturation_temperature().unwrap();
    assert_eq!(tsat, mock_value(0.1, 1.0, Property::Temperature));
    assert_eq!(
        water.backend().last_call(),
        Some((InputPair::PressureQuality, Property::Temperature))
    );
}

#[test]
fn saturation_query_preserves_the_active_pair() {
    let mut water = engine();
    water.update_pt(0.1, 25.0).unwrap();

    let psat = water.saturation_pressure().unwrap();
    assert_eq!(psat, mock_value(25.0, 1.0, Property::Pressure));

    // The (p, t) binding and parameters are untouched.
    let enthalpy = water.value(Property::Enthalpy).unwrap();
    assert_eq!(enthalpy, mock_value(0.1, 25.0, Property::Enthalpy));
    assert_eq!(
        water.backend().last_call(),
        Some((InputPair::PressureTemperature, Property::Enthalpy))
    );
}
