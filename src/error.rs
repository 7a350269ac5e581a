use thiserror::Error;

use crate::backend::InputPair;
use crate::properties::Property;

#[derive(Error, Debug)]
pub enum If97Error {
    /// A supplied or computed pressure/temperature lies outside the IF97
    /// range of validity.  Carries the offending value and the violated
    /// bounds; values are never clamped.
    #[error("{quantity} {value} {unit} is outside the IF97 range of validity [{min}, {max}] {unit}")]
    OutOfRange {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
        unit: &'static str,
    },

    /// `update_pair` was called with a combination of properties that is
    /// not one of the seven supported input pairs.
    #[error(
        "unsupported input pair ({first:?}, {second:?}); supported: \
         (p,t) (p,v) (t,v) (t,x) (p,x) (p,h) (t,h)"
    )]
    UnsupportedPair { first: Property, second: Property },

    /// A derived-property getter was invoked while no correlation variant
    /// is bound (fresh state, or only a single boundary condition known).
    #[error("cannot compute {property:?}: no input pair is bound")]
    BackendNotBound { property: Property },

    /// The correlation returned NaN or an infinity.  The backend is a
    /// deterministic pure function, so the call is not retried.
    #[error("correlation for {property:?} via {pair:?} returned a non-finite value ({value})")]
    Computation {
        property: Property,
        pair: InputPair,
        value: f64,
    },

    /// Internal invariant breach: only parameter slots 1 and 2 exist.
    #[error("parameter slot {slot} does not exist (only 1 and 2 are available)")]
    InvalidSlot { slot: u8 },

    /// The SEUIF97 shared library could not be found or loaded.
    #[error("SEUIF97 library not found: {0}")]
    LibraryNotFound(String),
}

pub type Result<T> = std::result::Result<T, If97Error>;
