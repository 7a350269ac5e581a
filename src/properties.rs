//! Property catalog: the closed set of quantities the engine can produce.
//!
//! Discriminants 0..=29 are the SEUIF97 property ids and are passed to the
//! correlation backend verbatim.  The two saturation ids are synthetic —
//! they exist only as cache keys for the saturation queries and are never
//! sent to a backend.

use serde::{Deserialize, Serialize};

/// Identifier of a derived quantity, with its SEUIF97 id as discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Property {
    /// Pressure p [MPa]
    Pressure = 0,
    /// Temperature t [°C]
    Temperature = 1,
    /// Density d [kg/m³]
    Density = 2,
    /// Specific volume v [m³/kg]
    SpecificVolume = 3,
    /// Specific enthalpy h [kJ/kg]
    Enthalpy = 4,
    /// Specific entropy s [kJ/(kg·K)]
    Entropy = 5,
    /// Specific exergy e [kJ/kg]
    Exergy = 6,
    /// Specific internal energy u [kJ/kg]
    InternalEnergy = 7,
    /// Specific isobaric heat capacity cp [kJ/(kg·K)]
    IsobaricHeatCapacity = 8,
    /// Specific isochoric heat capacity cv [kJ/(kg·K)]
    IsochoricHeatCapacity = 9,
    /// Speed of sound w [m/s]
    SpeedOfSound = 10,
    /// Isentropic exponent ks
    IsentropicExponent = 11,
    /// Specific Helmholtz free energy f [kJ/kg]
    HelmholtzFreeEnergy = 12,
    /// Specific Gibbs free energy g [kJ/kg]
    GibbsFreeEnergy = 13,
    /// Compressibility factor z
    CompressibilityFactor = 14,
    /// Steam quality x (vapor mass fraction, 0..=1)
    SteamQuality = 15,
    /// IF97 model region r
    Region = 16,
    /// Isobaric volume expansion coefficient ec [1/K]
    VolumeExpansionCoefficient = 17,
    /// Isothermal compressibility kt [1/MPa]
    IsothermalCompressibility = 18,
    /// Partial derivative (∂V/∂T)p [m³/(kg·K)]
    DvDt = 19,
    /// Partial derivative (∂V/∂p)T [m³/(kg·MPa)]
    DvDp = 20,
    /// Partial derivative (∂p/∂T)v [MPa/K]
    DpDt = 21,
    /// Isothermal Joule-Thomson coefficient [kJ/(kg·MPa)]
    IsothermalJouleThomson = 22,
    /// Joule-Thomson coefficient [K/MPa]
    JouleThomson = 23,
    /// Dynamic viscosity dv [Pa·s]
    DynamicViscosity = 24,
    /// Kinematic viscosity kv [m²/s]
    KinematicViscosity = 25,
    /// Thermal conductivity tc [W/(m·K)]
    ThermalConductivity = 26,
    /// Thermal diffusivity td [µm²/s]
    ThermalDiffusivity = 27,
    /// Prandtl number pr
    PrandtlNumber = 28,
    /// Surface tension st [mN/m]
    SurfaceTension = 29,
    /// Saturation pressure at the current temperature [MPa] (synthetic)
    SaturationPressure = 30,
    /// Saturation temperature at the current pressure [°C] (synthetic)
    SaturationTemperature = 31,
}

/// Physical dimension of a property, used to pick the unit conversion
/// that applies on the way in and out of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Temperature,
    Pressure,
    Density,
    /// Specific energy: enthalpy, internal energy, exergy, free energies.
    Energy,
    /// Energy per mass and temperature: entropy, heat capacities.
    Entropy,
    Viscosity,
    Conductivity,
    /// No configurable unit; the value stays in its canonical unit.
    Fixed,
}

/// Immutable description of one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub id: Property,
    /// Conventional IF97 symbol, e.g. `"cp"`.
    pub symbol: &'static str,
    /// Canonical (backend-native) unit.
    pub unit: &'static str,
    pub dimension: Dimension,
}

const fn desc(
    id: Property,
    symbol: &'static str,
    unit: &'static str,
    dimension: Dimension,
) -> PropertyDescriptor {
    PropertyDescriptor { id, symbol, unit, dimension }
}

/// Process-wide read-only catalog, indexed by property discriminant.
pub const CATALOG: [PropertyDescriptor; Property::COUNT] = [
    desc(Property::Pressure, "p", "MPa", Dimension::Pressure),
    desc(Property::Temperature, "t", "°C", Dimension::Temperature),
    desc(Property::Density, "d", "kg/m³", Dimension::Density),
    desc(Property::SpecificVolume, "v", "m³/kg", Dimension::Fixed),
    desc(Property::Enthalpy, "h", "kJ/kg", Dimension::Energy),
    desc(Property::Entropy, "s", "kJ/(kg·K)", Dimension::Entropy),
    desc(Property::Exergy, "e", "kJ/kg", Dimension::Energy),
    desc(Property::InternalEnergy, "u", "kJ/kg", Dimension::Energy),
    desc(Property::IsobaricHeatCapacity, "cp", "kJ/(kg·K)", Dimension::Entropy),
    desc(Property::IsochoricHeatCapacity, "cv", "kJ/(kg·K)", Dimension::Entropy),
    desc(Property::SpeedOfSound, "w", "m/s", Dimension::Fixed),
    desc(Property::IsentropicExponent, "ks", "-", Dimension::Fixed),
    desc(Property::HelmholtzFreeEnergy, "f", "kJ/kg", Dimension::Energy),
    desc(Property::GibbsFreeEnergy, "g", "kJ/kg", Dimension::Energy),
    desc(Property::CompressibilityFactor, "z", "-", Dimension::Fixed),
    desc(Property::SteamQuality, "x", "-", Dimension::Fixed),
    desc(Property::Region, "r", "-", Dimension::Fixed),
    desc(Property::VolumeExpansionCoefficient, "ec", "1/K", Dimension::Fixed),
    desc(Property::IsothermalCompressibility, "kt", "1/MPa", Dimension::Fixed),
    desc(Property::DvDt, "dvdt", "m³/(kg·K)", Dimension::Fixed),
    desc(Property::DvDp, "dvdp", "m³/(kg·MPa)", Dimension::Fixed),
    desc(Property::DpDt, "dpdt", "MPa/K", Dimension::Fixed),
    desc(Property::IsothermalJouleThomson, "ijtc", "kJ/(kg·MPa)", Dimension::Fixed),
    desc(Property::JouleThomson, "jtc", "K/MPa", Dimension::Fixed),
    desc(Property::DynamicViscosity, "dv", "Pa·s", Dimension::Viscosity),
    desc(Property::KinematicViscosity, "kv", "m²/s", Dimension::Fixed),
    desc(Property::ThermalConductivity, "tc", "W/(m·K)", Dimension::Conductivity),
    desc(Property::ThermalDiffusivity, "td", "µm²/s", Dimension::Fixed),
    desc(Property::PrandtlNumber, "pr", "-", Dimension::Fixed),
    desc(Property::SurfaceTension, "st", "mN/m", Dimension::Fixed),
    desc(Property::SaturationPressure, "ps", "MPa", Dimension::Pressure),
    desc(Property::SaturationTemperature, "ts", "°C", Dimension::Temperature),
];

impl Property {
    pub const COUNT: usize = 32;

    /// Every catalog property, in id order.
    pub const ALL: [Property; Self::COUNT] = [
        Property::Pressure,
        Property::Temperature,
        Property::Density,
        Property::SpecificVolume,
        Property::Enthalpy,
        Property::Entropy,
        Property::Exergy,
        Property::InternalEnergy,
        Property::IsobaricHeatCapacity,
        Property::IsochoricHeatCapacity,
        Property::SpeedOfSound,
        Property::IsentropicExponent,
        Property::HelmholtzFreeEnergy,
        Property::GibbsFreeEnergy,
        Property::CompressibilityFactor,
        Property::SteamQuality,
        Property::Region,
        Property::VolumeExpansionCoefficient,
        Property::IsothermalCompressibility,
        Property::DvDt,
        Property::DvDp,
        Property::DpDt,
        Property::IsothermalJouleThomson,
        Property::JouleThomson,
        Property::DynamicViscosity,
        Property::KinematicViscosity,
        Property::ThermalConductivity,
        Property::ThermalDiffusivity,
        Property::PrandtlNumber,
        Property::SurfaceTension,
        Property::SaturationPressure,
        Property::SaturationTemperature,
    ];

    /// Dense index into the catalog and the engine's cache table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Total lookup into the read-only catalog.
    pub fn describe(self) -> &'static PropertyDescriptor {
        &CATALOG[self.index()]
    }

    pub fn dimension(self) -> Dimension {
        self.describe().dimension
    }

    /// Id understood by the SEUIF97-style correlation calls.
    pub(crate) const fn backend_id(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_rows_align_with_discriminants() {
        for property in Property::ALL {
            assert_eq!(property.describe().id, property);
        }
    }

    #[test]
    fn synthetic_ids_follow_the_seuif97_range() {
        assert_eq!(Property::SurfaceTension.backend_id(), 29);
        assert_eq!(Property::SaturationPressure.index(), 30);
        assert_eq!(Property::SaturationTemperature.index(), 31);
    }

    #[test]
    fn primary_inputs_carry_their_native_units() {
        assert_eq!(Property::Pressure.describe().unit, "MPa");
        assert_eq!(Property::Temperature.describe().unit, "°C");
        assert_eq!(Property::Pressure.dimension(), Dimension::Pressure);
    }
}
