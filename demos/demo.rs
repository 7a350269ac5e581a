//! Minimal tour: a pair update, lazy reads, a saturation query.

use if97_water::{Result, UnitSystem, Water};

fn main() -> Result<()> {
    let mut water = Water::with_units(UnitSystem::engineering());

    water.update_pt(1.0, 25.0)?;
    println!("State point: 1 bar, 25 °C (region {})", water.region()?);
    println!("  density           = {:10.3} kg/m³", water.density()?);
    println!("  specific enthalpy = {:10.3} kJ/kg", water.enthalpy()?);
    println!("  specific entropy  = {:10.5} kJ/(kg·K)", water.entropy()?);
    println!("  dynamic viscosity = {:10.3e} Pa·s", water.dynamic_viscosity()?);
    println!("  Prandtl number    = {:10.3}", water.prandtl_number()?);

    water.update_t(25.0)?;
    println!("Psat(25 °C)         = {:10.5} bar", water.saturation_pressure()?);

    water.update_px(1.01325, 1.0)?;
    println!("Tsat(1 atm)         = {:10.4} °C", water.temperature()?);

    Ok(())
}
