use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// Solar effective temperature in Kelvin, the reference point of the
/// habitable zone flux polynomials.
pub const SOLAR_TEFF_K: f64 = 5780.0;

/// Celsius to Kelvin offset
const CELSIUS_OFFSET: f64 = 273.15;

/// A physical temperature quantity using f64 precision.
///
/// Kelvin is the base unit. Stellar effective temperatures are always quoted
/// in Kelvin, so this is the constructor most callers want.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let sun = Temperature::solar_effective();
/// let k_dwarf = Temperature::from_kelvin(4500.0);
///
/// assert_eq!(sun.to_kelvin(), 5780.0);
/// assert!((k_dwarf.offset_from_solar() + 1280.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Temperature` from a value in Celsius.
    ///
    /// Converts Celsius to Kelvin: K = °C + 273.15
    pub fn from_celsius(value: f64) -> Self {
        Self(value + CELSIUS_OFFSET)
    }

    /// The Sun's effective temperature (5780 K).
    pub fn solar_effective() -> Self {
        Self(SOLAR_TEFF_K)
    }

    /// Returns the temperature value in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Converts the temperature to Celsius.
    pub fn to_celsius(&self) -> f64 {
        self.0 - CELSIUS_OFFSET
    }

    /// Offset from the solar effective temperature in Kelvin, `T - 5780`.
    ///
    /// Negative for stars cooler than the Sun.
    pub fn offset_from_solar(&self) -> f64 {
        self.0 - SOLAR_TEFF_K
    }

    /// Whether the temperature is strictly above absolute zero.
    ///
    /// NaN is not positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}

impl Sub for Temperature {
    type Output = Temperature;

    fn sub(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 - rhs.0)
    }
}
