//! Correlation backend contract.
//!
//! The engine never evaluates IF97 polynomials itself; it dispatches to a
//! [`CorrelationBackend`] through an explicitly tagged [`InputPair`].  Two
//! backends ship with the crate: the pure-Rust [`If97Backend`] (default)
//! and [`NativeBackend`], which drives a dynamically loaded SEUIF97
//! shared library.

mod if97;
mod native;

pub use self::if97::If97Backend;
pub use self::native::NativeBackend;

use crate::properties::Property;

/// The seven supported input pairs, in their declared parameter order:
/// the first named property is always `param1` of the correlation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputPair {
    /// (pressure [MPa], temperature [°C])
    PressureTemperature,
    /// (pressure [MPa], specific volume [m³/kg])
    PressureVolume,
    /// (temperature [°C], specific volume [m³/kg])
    TemperatureVolume,
    /// (temperature [°C], steam quality)
    TemperatureQuality,
    /// (pressure [MPa], steam quality)
    PressureQuality,
    /// (pressure [MPa], specific enthalpy [kJ/kg])
    PressureEnthalpy,
    /// (temperature [°C], specific enthalpy [kJ/kg])
    TemperatureEnthalpy,
}

impl InputPair {
    /// Variant for two independent properties, accepted in either order.
    ///
    /// Returns the pair and whether the arguments were given in reverse
    /// of the pair's declared order.  `None` for any combination outside
    /// the seven supported pairs.
    pub fn from_properties(a: Property, b: Property) -> Option<(Self, bool)> {
        use Property::*;
        let pair = match (a, b) {
            (Pressure, Temperature) => (Self::PressureTemperature, false),
            (Temperature, Pressure) => (Self::PressureTemperature, true),
            (Pressure, SpecificVolume) => (Self::PressureVolume, false),
            (SpecificVolume, Pressure) => (Self::PressureVolume, true),
            (Temperature, SpecificVolume) => (Self::TemperatureVolume, false),
            (SpecificVolume, Temperature) => (Self::TemperatureVolume, true),
            (Temperature, SteamQuality) => (Self::TemperatureQuality, false),
            (SteamQuality, Temperature) => (Self::TemperatureQuality, true),
            (Pressure, SteamQuality) => (Self::PressureQuality, false),
            (SteamQuality, Pressure) => (Self::PressureQuality, true),
            (Pressure, Enthalpy) => (Self::PressureEnthalpy, false),
            (Enthalpy, Pressure) => (Self::PressureEnthalpy, true),
            (Temperature, Enthalpy) => (Self::TemperatureEnthalpy, false),
            (Enthalpy, Temperature) => (Self::TemperatureEnthalpy, true),
            _ => return None,
        };
        Some(pair)
    }

    /// The two independent properties, in declared order.
    pub fn properties(self) -> (Property, Property) {
        use Property::*;
        match self {
            Self::PressureTemperature => (Pressure, Temperature),
            Self::PressureVolume => (Pressure, SpecificVolume),
            Self::TemperatureVolume => (Temperature, SpecificVolume),
            Self::TemperatureQuality => (Temperature, SteamQuality),
            Self::PressureQuality => (Pressure, SteamQuality),
            Self::PressureEnthalpy => (Pressure, Enthalpy),
            Self::TemperatureEnthalpy => (Temperature, Enthalpy),
        }
    }
}

/// A deterministic, side-effect-free IF97 correlation source.
///
/// `evaluate` takes both independent parameters in the pair's declared
/// order and native units, and returns the requested property in its
/// canonical unit.  Implementations report failure through non-finite
/// return values; the engine turns those into [`crate::If97Error::Computation`].
pub trait CorrelationBackend {
    fn evaluate(&self, pair: InputPair, param1: f64, param2: f64, property: Property) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Property;

    #[test]
    fn all_seven_pairs_resolve() {
        let pairs = [
            (Property::Pressure, Property::Temperature, InputPair::PressureTemperature),
            (Property::Pressure, Property::SpecificVolume, InputPair::PressureVolume),
            (Property::Temperature, Property::SpecificVolume, InputPair::TemperatureVolume),
            (Property::Temperature, Property::SteamQuality, InputPair::TemperatureQuality),
            (Property::Pressure, Property::SteamQuality, InputPair::PressureQuality),
            (Property::Pressure, Property::Enthalpy, InputPair::PressureEnthalpy),
            (Property::Temperature, Property::Enthalpy, InputPair::TemperatureEnthalpy),
        ];
        for (a, b, expected) in pairs {
            assert_eq!(InputPair::from_properties(a, b), Some((expected, false)));
            assert_eq!(InputPair::from_properties(b, a), Some((expected, true)));
            assert_eq!(expected.properties(), (a, b));
        }
    }

    #[test]
    fn unsupported_combinations_resolve_to_none() {
        assert!(InputPair::from_properties(Property::Enthalpy, Property::Entropy).is_none());
        assert!(InputPair::from_properties(Property::Pressure, Property::Pressure).is_none());
        assert!(InputPair::from_properties(Property::Density, Property::Temperature).is_none());
    }
}
