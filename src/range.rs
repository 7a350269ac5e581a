//! IAPWS-IF97 range of validity.
//!
//! The formulation guarantees accuracy inside a rectangular
//! pressure–temperature envelope: 0.00611..=1000 bar and 0..=800 °C.
//! Both checks run when inputs are supplied and again when pressure or
//! temperature is read back, because a correlation call may legitimately
//! extrapolate outside the envelope from a non-primary input pair.

use crate::error::{If97Error, Result};

/// Lower pressure bound, 0.00611 bar expressed in MPa.
pub const PRESSURE_MIN_MPA: f64 = 6.11e-4;
/// Upper pressure bound, 1000 bar expressed in MPa.
pub const PRESSURE_MAX_MPA: f64 = 100.0;
pub const TEMPERATURE_MIN_C: f64 = 0.0;
pub const TEMPERATURE_MAX_C: f64 = 800.0;

/// Check a pressure in MPa against the envelope.  Never clamps.
pub fn check_pressure(value: f64) -> Result<()> {
    // NaN fails the comparison and is rejected with the same error.
    if value >= PRESSURE_MIN_MPA && value <= PRESSURE_MAX_MPA {
        Ok(())
    } else {
        Err(If97Error::OutOfRange {
            quantity: "pressure",
            value,
            min: PRESSURE_MIN_MPA,
            max: PRESSURE_MAX_MPA,
            unit: "MPa",
        })
    }
}

/// Check a temperature in °C against the envelope.  Never clamps.
pub fn check_temperature(value: f64) -> Result<()> {
    if value >= TEMPERATURE_MIN_C && value <= TEMPERATURE_MAX_C {
        Ok(())
    } else {
        Err(If97Error::OutOfRange {
            quantity: "temperature",
            value,
            min: TEMPERATURE_MIN_C,
            max: TEMPERATURE_MAX_C,
            unit: "°C",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_bounds() {
        // 0.005 bar is below the envelope, 1 bar is inside it.
        assert!(check_pressure(0.005 / 10.0).is_err());
        assert!(check_pressure(0.1).is_ok());
        assert!(check_pressure(PRESSURE_MIN_MPA).is_ok());
        assert!(check_pressure(PRESSURE_MAX_MPA).is_ok());
        assert!(check_pressure(100.1).is_err());
    }

    #[test]
    fn temperature_bounds() {
        assert!(check_temperature(25.0).is_ok());
        assert!(check_temperature(900.0).is_err());
        assert!(check_temperature(-0.1).is_err());
        assert!(check_temperature(0.0).is_ok());
        assert!(check_temperature(800.0).is_ok());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(check_pressure(f64::NAN).is_err());
        assert!(check_temperature(f64::INFINITY).is_err());
    }

    #[test]
    fn error_carries_value_and_bounds() {
        let err = check_pressure(200.0).unwrap_err();
        match err {
            If97Error::OutOfRange { value, min, max, .. } => {
                assert_eq!(value, 200.0);
                assert_eq!(min, PRESSURE_MIN_MPA);
                assert_eq!(max, PRESSURE_MAX_MPA);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
