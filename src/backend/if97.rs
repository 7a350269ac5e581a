//! Built-in pure-Rust IAPWS-IF97 backend.

use super::{CorrelationBackend, InputPair};
use crate::properties::Property;

/// Backend over the [`if97`] crate.
///
/// The crate implements the same formulation the SEUIF97 native library
/// does, with identical property ids and native units (MPa, °C), so the
/// dispatch table below is a direct mapping of pair variant to
/// input-pair function.
#[derive(Debug, Default, Clone, Copy)]
pub struct If97Backend;

impl If97Backend {
    pub fn new() -> Self {
        Self
    }
}

impl CorrelationBackend for If97Backend {
    fn evaluate(&self, pair: InputPair, param1: f64, param2: f64, property: Property) -> f64 {
        let o_id = property.backend_id();
        match pair {
            InputPair::PressureTemperature => if97::pt(param1, param2, o_id),
            InputPair::PressureVolume => if97::pv(param1, param2, o_id),
            InputPair::TemperatureVolume => if97::tv(param1, param2, o_id),
            InputPair::TemperatureQuality => if97::tx(param1, param2, o_id),
            InputPair::PressureQuality => if97::px(param1, param2, o_id),
            InputPair::PressureEnthalpy => if97::ph(param1, param2, o_id),
            InputPair::TemperatureEnthalpy => if97::th(param1, param2, o_id),
        }
    }
}
