//! The water state engine: validated inputs, lazy evaluation, memoization.
//!
//! A [`Water`] instance models one measurement point.  Supplying a new
//! pair (or single) of independent inputs invalidates every cached
//! value in one pass; each derived property is then computed by the
//! correlation backend on first access and served from the cache until
//! the next update.

use crate::backend::{CorrelationBackend, If97Backend, InputPair};
use crate::converter::{Converter, UnitSystem};
use crate::error::{If97Error, Result};
use crate::properties::Property;
use crate::range;

/// Steam quality pinned for the saturation queries: saturated vapor.
const SATURATED_VAPOR_QUALITY: f64 = 1.0;

/// One cache cell per catalog property.
///
/// `value` is in the property's canonical (backend-native) unit and is
/// trustworthy only while `calculated` is set.  `slot` is nonzero only
/// for a property currently serving as independent input (1 or 2).
#[derive(Debug, Clone, Copy)]
struct CalculationProperty {
    value: f64,
    calculated: bool,
    slot: u8,
}

impl CalculationProperty {
    const EMPTY: Self = Self {
        value: f64::NAN,
        calculated: false,
        slot: 0,
    };
}

/// The single primary input held after [`Water::update_p`] /
/// [`Water::update_t`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryInput {
    Pressure,
    Temperature,
}

/// Which correlation call, if any, the next computation dispatches to.
/// An uninitialized engine is a distinct checked state, not a nullable
/// function handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveInput {
    Uninitialized,
    Pair(InputPair),
    Single(PrimaryInput),
}

/// Thermodynamic state of water, evaluated lazily against an IF97
/// correlation backend.
///
/// Inputs and outputs are in the units configured at construction; the
/// engine converts to backend-native units (MPa, °C, …) internally.
///
/// Getters take `&mut self` because memoization writes cache cells; the
/// borrow checker therefore rules out an update racing a read.  Use one
/// instance per measurement point.
///
/// ```
/// use if97_water::{UnitSystem, Water};
///
/// let mut water = Water::with_units(UnitSystem::engineering());
/// water.update_pt(1.0, 25.0)?; // 1 bar, 25 °C
/// let d = water.density()?;
/// assert!((d - 997.047).abs() < 1e-2);
/// # Ok::<(), if97_water::If97Error>(())
/// ```
pub struct Water<B = If97Backend> {
    backend: B,
    conv: Converter,
    cells: [CalculationProperty; Property::COUNT],
    param1: f64,
    param2: f64,
    active: ActiveInput,
}

impl Water<If97Backend> {
    /// Engine over the built-in pure-Rust backend, IF97-native units.
    pub fn new() -> Self {
        Self::with_units(UnitSystem::if97())
    }

    /// Engine over the built-in pure-Rust backend with a custom unit
    /// system.
    pub fn with_units(units: UnitSystem) -> Self {
        Self::with_backend(If97Backend::new(), units)
    }
}

impl Default for Water<If97Backend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: CorrelationBackend> Water<B> {
    /// Engine over an explicit correlation backend.
    pub fn with_backend(backend: B, units: UnitSystem) -> Self {
        Self {
            backend,
            conv: Converter::new(units),
            cells: [CalculationProperty::EMPTY; Property::COUNT],
            param1: f64::NAN,
            param2: f64::NAN,
            active: ActiveInput::Uninitialized,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn converter(&self) -> &Converter {
        &self.conv
    }

    // ════════════════════════════════════════════════════════════════
    //  Updates
    // ════════════════════════════════════════════════════════════════

    /// Supply a full pair of independent inputs (in user units).
    ///
    /// Accepts the two properties in either order of the pair's declared
    /// order; the values are normalized so that the variant's first
    /// property is always `param1` and holds slot 1.  Every cached value
    /// is invalidated; the two supplied properties are pre-marked
    /// calculated so reading them back never re-invokes the backend.
    pub fn update_pair(
        &mut self,
        prop_a: Property,
        value_a: f64,
        prop_b: Property,
        value_b: f64,
    ) -> Result<()> {
        let (pair, reversed) = InputPair::from_properties(prop_a, prop_b)
            .ok_or(If97Error::UnsupportedPair { first: prop_a, second: prop_b })?;
        let (p1, v1, p2, v2) = if reversed {
            (prop_b, value_b, prop_a, value_a)
        } else {
            (prop_a, value_a, prop_b, value_b)
        };

        let v1 = self.conv.input_to_native(p1.dimension(), v1);
        let v2 = self.conv.input_to_native(p2.dimension(), v2);
        Self::check_primary(p1, v1)?;
        Self::check_primary(p2, v2)?;

        self.reset_cells();
        self.param1 = v1;
        self.param2 = v2;
        self.active = ActiveInput::Pair(pair);
        self.store_input(p1, v1, 1)?;
        self.store_input(p2, v2, 2)?;
        Ok(())
    }

    /// Pair update (pressure, temperature).
    pub fn update_pt(&mut self, pressure: f64, temperature: f64) -> Result<()> {
        self.update_pair(Property::Pressure, pressure, Property::Temperature, temperature)
    }

    /// Pair update (pressure, specific volume).
    pub fn update_pv(&mut self, pressure: f64, volume: f64) -> Result<()> {
        self.update_pair(Property::Pressure, pressure, Property::SpecificVolume, volume)
    }

    /// Pair update (temperature, specific volume).
    pub fn update_tv(&mut self, temperature: f64, volume: f64) -> Result<()> {
        self.update_pair(Property::Temperature, temperature, Property::SpecificVolume, volume)
    }

    /// Pair update (temperature, steam quality).
    pub fn update_tx(&mut self, temperature: f64, quality: f64) -> Result<()> {
        self.update_pair(Property::Temperature, temperature, Property::SteamQuality, quality)
    }

    /// Pair update (pressure, steam quality).
    pub fn update_px(&mut self, pressure: f64, quality: f64) -> Result<()> {
        self.update_pair(Property::Pressure, pressure, Property::SteamQuality, quality)
    }

    /// Pair update (pressure, specific enthalpy).
    pub fn update_ph(&mut self, pressure: f64, enthalpy: f64) -> Result<()> {
        self.update_pair(Property::Pressure, pressure, Property::Enthalpy, enthalpy)
    }

    /// Pair update (temperature, specific enthalpy).
    pub fn update_th(&mut self, temperature: f64, enthalpy: f64) -> Result<()> {
        self.update_pair(Property::Temperature, temperature, Property::Enthalpy, enthalpy)
    }

    /// Record a single known boundary condition.
    ///
    /// Unbinds any correlation variant: no derived property other than
    /// the saturation queries is retrievable until a full pair is
    /// supplied.
    pub fn update_single(&mut self, input: PrimaryInput, value: f64) -> Result<()> {
        let prop = match input {
            PrimaryInput::Pressure => Property::Pressure,
            PrimaryInput::Temperature => Property::Temperature,
        };
        let native = self.conv.input_to_native(prop.dimension(), value);
        Self::check_primary(prop, native)?;

        self.reset_cells();
        self.param1 = f64::NAN;
        self.param2 = f64::NAN;
        self.active = ActiveInput::Single(input);
        self.cells[prop.index()] = CalculationProperty {
            value: native,
            calculated: true,
            slot: 0,
        };
        Ok(())
    }

    /// Single update: only the pressure is known.
    pub fn update_p(&mut self, pressure: f64) -> Result<()> {
        self.update_single(PrimaryInput::Pressure, pressure)
    }

    /// Single update: only the temperature is known.
    pub fn update_t(&mut self, temperature: f64) -> Result<()> {
        self.update_single(PrimaryInput::Temperature, temperature)
    }

    // ════════════════════════════════════════════════════════════════
    //  Getters
    // ════════════════════════════════════════════════════════════════

    /// Value of any catalog property, in user units.
    ///
    /// Served from the cache when fresh; otherwise computed through the
    /// bound correlation variant and memoized.  The two saturation ids
    /// route through the saturation queries.
    pub fn value(&mut self, property: Property) -> Result<f64> {
        let native = match property {
            Property::SaturationPressure => self.saturation_query(
                property,
                Property::Temperature,
                InputPair::TemperatureQuality,
                Property::Pressure,
            )?,
            Property::SaturationTemperature => self.saturation_query(
                property,
                Property::Pressure,
                InputPair::PressureQuality,
                Property::Temperature,
            )?,
            _ => self.read_native(property)?,
        };
        Ok(self.conv.output_from_native(property.dimension(), native))
    }

    /// Saturation pressure at the current temperature (saturated vapor).
    pub fn saturation_pressure(&mut self) -> Result<f64> {
        self.value(Property::SaturationPressure)
    }

    /// Saturation temperature at the current pressure (saturated vapor).
    pub fn saturation_temperature(&mut self) -> Result<f64> {
        self.value(Property::SaturationTemperature)
    }

    // ── Typed getters, one per catalog property ─────────────────────

    pub fn pressure(&mut self) -> Result<f64> {
        self.value(Property::Pressure)
    }

    pub fn temperature(&mut self) -> Result<f64> {
        self.value(Property::Temperature)
    }

    pub fn density(&mut self) -> Result<f64> {
        self.value(Property::Density)
    }

    pub fn specific_volume(&mut self) -> Result<f64> {
        self.value(Property::SpecificVolume)
    }

    pub fn enthalpy(&mut self) -> Result<f64> {
        self.value(Property::Enthalpy)
    }

    pub fn entropy(&mut self) -> Result<f64> {
        self.value(Property::Entropy)
    }

    pub fn exergy(&mut self) -> Result<f64> {
        self.value(Property::Exergy)
    }

    pub fn internal_energy(&mut self) -> Result<f64> {
        self.value(Property::InternalEnergy)
    }

    /// Specific isobaric heat capacity cp.
    pub fn isobaric_heat_capacity(&mut self) -> Result<f64> {
        self.value(Property::IsobaricHeatCapacity)
    }

    /// Specific isochoric heat capacity cv.
    pub fn isochoric_heat_capacity(&mut self) -> Result<f64> {
        self.value(Property::IsochoricHeatCapacity)
    }

    pub fn speed_of_sound(&mut self) -> Result<f64> {
        self.value(Property::SpeedOfSound)
    }

    pub fn isentropic_exponent(&mut self) -> Result<f64> {
        self.value(Property::IsentropicExponent)
    }

    pub fn helmholtz_free_energy(&mut self) -> Result<f64> {
        self.value(Property::HelmholtzFreeEnergy)
    }

    pub fn gibbs_free_energy(&mut self) -> Result<f64> {
        self.value(Property::GibbsFreeEnergy)
    }

    pub fn compressibility_factor(&mut self) -> Result<f64> {
        self.value(Property::CompressibilityFactor)
    }

    /// Vapor mass fraction, 0 = saturated liquid, 1 = saturated vapor.
    pub fn steam_quality(&mut self) -> Result<f64> {
        self.value(Property::SteamQuality)
    }

    /// IF97 model region of the current state point.
    pub fn region(&mut self) -> Result<i32> {
        Ok(self.value(Property::Region)? as i32)
    }

    /// Isobaric volume expansion coefficient [1/K].
    pub fn volume_expansion_coefficient(&mut self) -> Result<f64> {
        self.value(Property::VolumeExpansionCoefficient)
    }

    /// Isothermal compressibility [1/MPa].
    pub fn isothermal_compressibility(&mut self) -> Result<f64> {
        self.value(Property::IsothermalCompressibility)
    }

    /// Partial derivative (∂V/∂T)p.
    pub fn dv_dt(&mut self) -> Result<f64> {
        self.value(Property::DvDt)
    }

    /// Partial derivative (∂V/∂p)T.
    pub fn dv_dp(&mut self) -> Result<f64> {
        self.value(Property::DvDp)
    }

    /// Partial derivative (∂p/∂T)v.
    pub fn dp_dt(&mut self) -> Result<f64> {
        self.value(Property::DpDt)
    }

    /// Isothermal Joule-Thomson coefficient [kJ/(kg·MPa)].
    pub fn isothermal_joule_thomson(&mut self) -> Result<f64> {
        self.value(Property::IsothermalJouleThomson)
    }

    /// Joule-Thomson coefficient [K/MPa].
    pub fn joule_thomson(&mut self) -> Result<f64> {
        self.value(Property::JouleThomson)
    }

    pub fn dynamic_viscosity(&mut self) -> Result<f64> {
        self.value(Property::DynamicViscosity)
    }

    pub fn kinematic_viscosity(&mut self) -> Result<f64> {
        self.value(Property::KinematicViscosity)
    }

    pub fn thermal_conductivity(&mut self) -> Result<f64> {
        self.value(Property::ThermalConductivity)
    }

    pub fn thermal_diffusivity(&mut self) -> Result<f64> {
        self.value(Property::ThermalDiffusivity)
    }

    pub fn prandtl_number(&mut self) -> Result<f64> {
        self.value(Property::PrandtlNumber)
    }

    /// Surface tension [mN/m].
    pub fn surface_tension(&mut self) -> Result<f64> {
        self.value(Property::SurfaceTension)
    }

    // ════════════════════════════════════════════════════════════════
    //  Internals
    // ════════════════════════════════════════════════════════════════

    /// Native-unit read.  Pressure and temperature are re-checked
    /// against the envelope whether the value came from the cache or
    /// was just computed.
    fn read_native(&mut self, property: Property) -> Result<f64> {
        let value = self.derived_native(property)?;
        match property {
            Property::Pressure => range::check_pressure(value)?,
            Property::Temperature => range::check_temperature(value)?,
            _ => {}
        }
        Ok(value)
    }

    /// Memoized evaluation through the bound pair variant.
    fn derived_native(&mut self, property: Property) -> Result<f64> {
        let cell = self.cells[property.index()];
        if cell.calculated {
            return Ok(cell.value);
        }
        let pair = match self.active {
            ActiveInput::Pair(pair) => pair,
            ActiveInput::Uninitialized | ActiveInput::Single(_) => {
                return Err(If97Error::BackendNotBound { property });
            }
        };
        let value = self.backend.evaluate(pair, self.param1, self.param2, property);
        Self::check_computed(property, pair, value)?;
        self.cells[property.index()] = CalculationProperty {
            value,
            calculated: true,
            slot: 0,
        };
        Ok(value)
    }

    /// Read-only side query along the saturation curve.
    ///
    /// Reads the anchoring primary input through the normal getter path
    /// (computing it through the active pair if necessary), then invokes
    /// the quality-pinned variant.  The active variant, parameters and
    /// slot assignments stay untouched.
    fn saturation_query(
        &mut self,
        cache_id: Property,
        anchor: Property,
        pair: InputPair,
        requested: Property,
    ) -> Result<f64> {
        let cell = self.cells[cache_id.index()];
        if cell.calculated {
            return Ok(cell.value);
        }
        let anchor_value = self.read_native(anchor)?;
        let value = self
            .backend
            .evaluate(pair, anchor_value, SATURATED_VAPOR_QUALITY, requested);
        Self::check_computed(requested, pair, value)?;
        self.cells[cache_id.index()] = CalculationProperty {
            value,
            calculated: true,
            slot: 0,
        };
        Ok(value)
    }

    /// Envelope check applied to the two primary inputs only.
    fn check_primary(property: Property, native: f64) -> Result<()> {
        match property {
            Property::Pressure => range::check_pressure(native),
            Property::Temperature => range::check_temperature(native),
            _ => Ok(()),
        }
    }

    /// Zero and subnormal magnitudes are valid results (saturated-liquid
    /// quality, a vanishing derivative); only NaN and infinities are
    /// rejected.
    fn check_computed(property: Property, pair: InputPair, value: f64) -> Result<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(If97Error::Computation { property, pair, value })
        }
    }

    /// Invalidate every cell in one sequential pass.
    fn reset_cells(&mut self) {
        for cell in &mut self.cells {
            *cell = CalculationProperty::EMPTY;
        }
    }

    /// Pre-mark a supplied input as calculated in the given parameter
    /// slot.
    fn store_input(&mut self, property: Property, native: f64, slot: u8) -> Result<()> {
        if slot == 0 || slot > 2 {
            return Err(If97Error::InvalidSlot { slot });
        }
        self.cells[property.index()] = CalculationProperty {
            value: native,
            calculated: true,
            slot,
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stand-in: param1 + 2·param2, offset by the id.
    struct EchoBackend;

    impl CorrelationBackend for EchoBackend {
        fn evaluate(&self, _pair: InputPair, p1: f64, p2: f64, property: Property) -> f64 {
            p1 + 2.0 * p2 + property.backend_id() as f64 / 100.0
        }
    }

    fn engine() -> Water<EchoBackend> {
        Water::with_backend(EchoBackend, UnitSystem::if97())
    }

    #[test]
    fn pair_update_assigns_slots_one_and_two() {
        let mut water = engine();
        water.update_pt(0.1, 25.0).unwrap();

        assert_eq!(water.cells[Property::Pressure.index()].slot, 1);
        assert_eq!(water.cells[Property::Temperature.index()].slot, 2);
        let occupied: Vec<u8> = water
            .cells
            .iter()
            .map(|c| c.slot)
            .filter(|&s| s != 0)
            .collect();
        assert_eq!(occupied, vec![1, 2]);
    }

    #[test]
    fn reversed_pair_normalizes_slots_and_params() {
        let mut water = engine();
        water
            .update_pair(Property::Temperature, 25.0, Property::Pressure, 0.1)
            .unwrap();

        assert_eq!(water.active, ActiveInput::Pair(InputPair::PressureTemperature));
        assert_eq!(water.param1, 0.1);
        assert_eq!(water.param2, 25.0);
        assert_eq!(water.cells[Property::Pressure.index()].slot, 1);
        assert_eq!(water.cells[Property::Temperature.index()].slot, 2);
    }

    #[test]
    fn single_update_unbinds_and_clears_slots() {
        let mut water = engine();
        water.update_pt(0.1, 25.0).unwrap();
        water.update_t(30.0).unwrap();

        assert_eq!(water.active, ActiveInput::Single(PrimaryInput::Temperature));
        assert!(water.param1.is_nan());
        assert!(water.param2.is_nan());
        assert!(water.cells.iter().all(|c| c.slot == 0));
        assert!(water.cells[Property::Temperature.index()].calculated);
        assert!(!water.cells[Property::Pressure.index()].calculated);
    }

    #[test]
    fn update_resets_every_cell_except_the_inputs() {
        let mut water = engine();
        water.update_pt(0.1, 25.0).unwrap();
        water.value(Property::Density).unwrap();
        water.value(Property::Enthalpy).unwrap();

        water.update_pt(0.2, 50.0).unwrap();
        let calculated: Vec<Property> = Property::ALL
            .into_iter()
            .filter(|p| water.cells[p.index()].calculated)
            .collect();
        assert_eq!(calculated, vec![Property::Pressure, Property::Temperature]);
    }

    #[test]
    fn store_input_rejects_slots_outside_one_and_two() {
        let mut water = engine();
        let err = water.store_input(Property::Pressure, 0.1, 3).unwrap_err();
        assert!(matches!(err, If97Error::InvalidSlot { slot: 3 }));
        let err = water.store_input(Property::Pressure, 0.1, 0).unwrap_err();
        assert!(matches!(err, If97Error::InvalidSlot { slot: 0 }));
    }

    #[test]
    fn fresh_engine_is_uninitialized() {
        let water = engine();
        assert_eq!(water.active, ActiveInput::Uninitialized);
        assert!(water.cells.iter().all(|c| !c.calculated && c.slot == 0));
    }
}
