//! Configurable unit conversion for IF97 values.
//!
//! The correlation backend works in SEUIF97-native units: **MPa, °C,
//! kg/m³, kJ/kg, kJ/(kg·K), Pa·s, W/(m·K)**.  This module lets you work
//! in whatever units you prefer (bar, K, atm, mbar, …) and handles the
//! conversion transparently at the engine boundary.
//!
//! # Presets
//!
//! | Preset          | T  | P   | D     | H     | S         |
//! |-----------------|----|-----|-------|-------|-----------|
//! | `if97()`        | °C | MPa | kg/m³ | kJ/kg | kJ/(kg·K) |
//! | `engineering()` | °C | bar | kg/m³ | kJ/kg | kJ/(kg·K) |
//! | `si()`          | K  | Pa  | kg/m³ | J/kg  | J/(kg·K)  |
//!
//! # Builder
//!
//! ```
//! use if97_water::{UnitSystem, TempUnit, PressUnit};
//!
//! let units = UnitSystem::new()
//!     .temperature(TempUnit::Kelvin)
//!     .pressure(PressUnit::Bar);
//! ```

use serde::{Deserialize, Serialize};

use crate::properties::Dimension;

// ────────────────────────────────────────────────────────────────────
//  Unit enums
// ────────────────────────────────────────────────────────────────────

/// Temperature unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempUnit {
    /// Degrees Celsius (IF97 native)
    Celsius,
    Kelvin,
    Fahrenheit,
}

/// Pressure unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressUnit {
    /// Megapascal (IF97 native)
    MPa,
    KPa,
    Pa,
    /// Bar (1 bar = 0.1 MPa)
    Bar,
    Millibar,
    /// Standard atmosphere (101.325 kPa)
    Atm,
    /// Pounds per square inch
    Psi,
}

/// Density unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    /// kg/m³ (IF97 native)
    KgPerM3,
    GPerCm3,
}

/// Specific energy unit (enthalpy, internal energy, free energies).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    /// kJ/kg (IF97 native)
    KJPerKg,
    JPerKg,
}

/// Entropy / heat-capacity unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntropyUnit {
    /// kJ/(kg·K) (IF97 native)
    KJPerKgK,
    JPerKgK,
}

/// Dynamic viscosity unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViscosityUnit {
    /// Pa·s ≡ kg/(m·s) (IF97 native)
    PaS,
    /// mPa·s (= centipoise)
    MilliPaS,
    MicroPaS,
}

/// Thermal conductivity unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConductivityUnit {
    /// W/(m·K) (IF97 native)
    WPerMK,
    MilliWPerMK,
}

// ────────────────────────────────────────────────────────────────────
//  UnitSystem — user configuration
// ────────────────────────────────────────────────────────────────────

/// Describes the set of units the caller wants to work in.
///
/// Create one with a preset (`if97()`, `engineering()`, `si()`) or
/// customise individual dimensions with the builder methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSystem {
    pub temperature: TempUnit,
    pub pressure: PressUnit,
    pub density: DensityUnit,
    pub energy: EnergyUnit,
    pub entropy: EntropyUnit,
    pub viscosity: ViscosityUnit,
    pub conductivity: ConductivityUnit,
}

impl UnitSystem {
    /// Start from IF97-native units.  Use the builder methods to change
    /// individual dimensions.
    pub fn new() -> Self {
        Self::if97()
    }

    // ── Presets ──────────────────────────────────────────────────────

    /// SEUIF97 native: MPa, °C, kg/m³, kJ/kg, kJ/(kg·K), Pa·s, W/(m·K).
    pub fn if97() -> Self {
        Self {
            temperature: TempUnit::Celsius,
            pressure: PressUnit::MPa,
            density: DensityUnit::KgPerM3,
            energy: EnergyUnit::KJPerKg,
            entropy: EntropyUnit::KJPerKgK,
            viscosity: ViscosityUnit::PaS,
            conductivity: ConductivityUnit::WPerMK,
        }
    }

    /// Engineering / plant: bar, °C, kg/m³, kJ/kg, kJ/(kg·K).
    pub fn engineering() -> Self {
        Self {
            pressure: PressUnit::Bar,
            ..Self::if97()
        }
    }

    /// Strict SI: Pa, K, kg/m³, J/kg, J/(kg·K), Pa·s.
    pub fn si() -> Self {
        Self {
            temperature: TempUnit::Kelvin,
            pressure: PressUnit::Pa,
            density: DensityUnit::KgPerM3,
            energy: EnergyUnit::JPerKg,
            entropy: EntropyUnit::JPerKgK,
            viscosity: ViscosityUnit::PaS,
            conductivity: ConductivityUnit::WPerMK,
        }
    }

    // ── Builder methods ─────────────────────────────────────────────

    pub fn temperature(mut self, u: TempUnit) -> Self {
        self.temperature = u;
        self
    }
    pub fn pressure(mut self, u: PressUnit) -> Self {
        self.pressure = u;
        self
    }
    pub fn density(mut self, u: DensityUnit) -> Self {
        self.density = u;
        self
    }
    pub fn energy(mut self, u: EnergyUnit) -> Self {
        self.energy = u;
        self
    }
    pub fn entropy(mut self, u: EntropyUnit) -> Self {
        self.entropy = u;
        self
    }
    pub fn viscosity(mut self, u: ViscosityUnit) -> Self {
        self.viscosity = u;
        self
    }
    pub fn conductivity(mut self, u: ConductivityUnit) -> Self {
        self.conductivity = u;
        self
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::if97()
    }
}

// ────────────────────────────────────────────────────────────────────
//  Converter
// ────────────────────────────────────────────────────────────────────

/// Performs conversions between user units and IF97-native units.
#[derive(Debug, Clone)]
pub struct Converter {
    pub units: UnitSystem,
}

impl Converter {
    pub fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    // ── Temperature ─────────────────────────────────────────────────

    /// User → native (°C)
    pub fn t_to_native(&self, t: f64) -> f64 {
        match self.units.temperature {
            TempUnit::Celsius => t,
            TempUnit::Kelvin => t - 273.15,
            TempUnit::Fahrenheit => (t - 32.0) * 5.0 / 9.0,
        }
    }

    /// Native (°C) → user
    pub fn t_from_native(&self, t: f64) -> f64 {
        match self.units.temperature {
            TempUnit::Celsius => t,
            TempUnit::Kelvin => t + 273.15,
            TempUnit::Fahrenheit => t * 9.0 / 5.0 + 32.0,
        }
    }

    // ── Pressure ────────────────────────────────────────────────────

    /// User → native (MPa)
    pub fn p_to_native(&self, p: f64) -> f64 {
        match self.units.pressure {
            PressUnit::MPa => p,
            PressUnit::KPa => p / 1000.0,
            PressUnit::Pa => p / 1_000_000.0,
            PressUnit::Bar => p / 10.0,
            PressUnit::Millibar => p / 10_000.0,
            PressUnit::Atm => p * 0.101_325,
            PressUnit::Psi => p * 0.006_894_757,
        }
    }

    /// Native (MPa) → user
    pub fn p_from_native(&self, p: f64) -> f64 {
        match self.units.pressure {
            PressUnit::MPa => p,
            PressUnit::KPa => p * 1000.0,
            PressUnit::Pa => p * 1_000_000.0,
            PressUnit::Bar => p * 10.0,
            PressUnit::Millibar => p * 10_000.0,
            PressUnit::Atm => p / 0.101_325,
            PressUnit::Psi => p / 0.006_894_757,
        }
    }

    // ── Density ─────────────────────────────────────────────────────

    pub fn d_to_native(&self, d: f64) -> f64 {
        match self.units.density {
            DensityUnit::KgPerM3 => d,
            DensityUnit::GPerCm3 => d * 1000.0,
        }
    }

    pub fn d_from_native(&self, d: f64) -> f64 {
        match self.units.density {
            DensityUnit::KgPerM3 => d,
            DensityUnit::GPerCm3 => d / 1000.0,
        }
    }

    // ── Specific energy ─────────────────────────────────────────────

    pub fn h_to_native(&self, h: f64) -> f64 {
        match self.units.energy {
            EnergyUnit::KJPerKg => h,
            EnergyUnit::JPerKg => h / 1000.0,
        }
    }

    pub fn h_from_native(&self, h: f64) -> f64 {
        match self.units.energy {
            EnergyUnit::KJPerKg => h,
            EnergyUnit::JPerKg => h * 1000.0,
        }
    }

    // ── Entropy / heat capacity ─────────────────────────────────────

    pub fn s_to_native(&self, s: f64) -> f64 {
        match self.units.entropy {
            EntropyUnit::KJPerKgK => s,
            EntropyUnit::JPerKgK => s / 1000.0,
        }
    }

    pub fn s_from_native(&self, s: f64) -> f64 {
        match self.units.entropy {
            EntropyUnit::KJPerKgK => s,
            EntropyUnit::JPerKgK => s * 1000.0,
        }
    }

    // ── Viscosity ───────────────────────────────────────────────────

    pub fn eta_to_native(&self, eta: f64) -> f64 {
        match self.units.viscosity {
            ViscosityUnit::PaS => eta,
            ViscosityUnit::MilliPaS => eta / 1000.0,
            ViscosityUnit::MicroPaS => eta / 1_000_000.0,
        }
    }

    pub fn eta_from_native(&self, eta: f64) -> f64 {
        match self.units.viscosity {
            ViscosityUnit::PaS => eta,
            ViscosityUnit::MilliPaS => eta * 1000.0,
            ViscosityUnit::MicroPaS => eta * 1_000_000.0,
        }
    }

    // ── Thermal conductivity ────────────────────────────────────────

    pub fn tcx_to_native(&self, tcx: f64) -> f64 {
        match self.units.conductivity {
            ConductivityUnit::WPerMK => tcx,
            ConductivityUnit::MilliWPerMK => tcx / 1000.0,
        }
    }

    pub fn tcx_from_native(&self, tcx: f64) -> f64 {
        match self.units.conductivity {
            ConductivityUnit::WPerMK => tcx,
            ConductivityUnit::MilliWPerMK => tcx * 1000.0,
        }
    }

    // ── Dimension-keyed conversion ──────────────────────────────────

    /// Convert a user-supplied value to native units, choosing the
    /// conversion from the property's catalog dimension.
    pub fn input_to_native(&self, dimension: Dimension, value: f64) -> f64 {
        match dimension {
            Dimension::Temperature => self.t_to_native(value),
            Dimension::Pressure => self.p_to_native(value),
            Dimension::Density => self.d_to_native(value),
            Dimension::Energy => self.h_to_native(value),
            Dimension::Entropy => self.s_to_native(value),
            Dimension::Viscosity => self.eta_to_native(value),
            Dimension::Conductivity => self.tcx_to_native(value),
            Dimension::Fixed => value,
        }
    }

    /// Convert a native value to user units.
    pub fn output_from_native(&self, dimension: Dimension, value: f64) -> f64 {
        match dimension {
            Dimension::Temperature => self.t_from_native(value),
            Dimension::Pressure => self.p_from_native(value),
            Dimension::Density => self.d_from_native(value),
            Dimension::Energy => self.h_from_native(value),
            Dimension::Entropy => self.s_from_native(value),
            Dimension::Viscosity => self.eta_from_native(value),
            Dimension::Conductivity => self.tcx_from_native(value),
            Dimension::Fixed => value,
        }
    }
}
