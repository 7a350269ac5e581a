//! # if97-water
//!
//! Thermodynamic and transport properties of water and steam following
//! the industrial formulation
//! [IAPWS-IF97](http://www.iapws.org/relguide/IF97-Rev.html).
//!
//! The crate is built around [`Water`], a lazily-cached state engine:
//! supply one of seven supported pairs of independent properties (or a
//! single known pressure/temperature), then read any of ~30 derived
//! quantities.  Each quantity is computed by the correlation backend on
//! first access and memoized until the next update.
//!
//! ## Highlights
//!
//! * **Seven input pairs** — (p,t), (p,v), (t,v), (t,x), (p,x), (p,h), (t,h)
//! * **Saturation queries** — `saturation_pressure()` / `saturation_temperature()`,
//!   available even when only one boundary condition is known
//! * **Validity envelope** — inputs and read-back primaries checked against
//!   0.00611..=1000 bar and 0..=800 °C, never clamped
//! * **Configurable units** — work in bar + °C, Pa + K, or any combination
//! * **Pluggable backend** — pure-Rust [`if97`] formulation by default, or a
//!   dynamically loaded SEUIF97 shared library ([`NativeBackend`])
//!
//! ## Quick example
//!
//! ```
//! use if97_water::{UnitSystem, Water};
//!
//! // Engineering units: bar, °C, kg/m³, kJ/kg
//! let mut water = Water::with_units(UnitSystem::engineering());
//!
//! water.update_pt(1.0, 25.0)?;
//! println!("density  = {:.3} kg/m³", water.density()?);
//! println!("enthalpy = {:.3} kJ/kg", water.enthalpy()?);
//! println!("region   = {}", water.region()?);
//!
//! // Only the temperature is known: the saturation curve is still there.
//! water.update_t(25.0)?;
//! println!("Psat(25 °C) = {:.4} bar", water.saturation_pressure()?);
//! # Ok::<(), if97_water::If97Error>(())
//! ```
//!
//! ## Unit system
//!
//! Choose units at construction time with [`UnitSystem`] presets
//! ([`if97()`](UnitSystem::if97), [`engineering()`](UnitSystem::engineering),
//! [`si()`](UnitSystem::si)) or the builder:
//!
//! ```
//! use if97_water::{UnitSystem, TempUnit, PressUnit};
//!
//! let units = UnitSystem::new()
//!     .temperature(TempUnit::Kelvin)
//!     .pressure(PressUnit::Atm);
//! ```

// ── Internal modules ─────────────────────────────────────────────────
pub mod backend;
pub mod converter;
pub mod error;
pub mod properties;
pub mod range;
pub mod state;
pub mod sys;

// ── Public re-exports ────────────────────────────────────────────────
pub use backend::{CorrelationBackend, If97Backend, InputPair, NativeBackend};
pub use error::{If97Error, Result};
pub use properties::{CATALOG, Dimension, Property, PropertyDescriptor};
pub use state::{PrimaryInput, Water};

pub use converter::{
    ConductivityUnit, Converter, DensityUnit, EnergyUnit, EntropyUnit, PressUnit, TempUnit,
    UnitSystem, ViscosityUnit,
};
