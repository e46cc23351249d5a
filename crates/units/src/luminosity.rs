use serde::{Deserialize, Serialize};

/// Nominal solar luminosity in watts (IAU 2015 Resolution B3)
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;

/// Bolometric stellar luminosity with the solar luminosity (L☉) as base unit.
///
/// # Examples
///
/// ```rust
/// use units::Luminosity;
///
/// let sun = Luminosity::from_solar(1.0);
/// let m_dwarf = Luminosity::from_solar(0.01);
///
/// assert!(m_dwarf < sun);
/// assert!((sun.to_watts() - 3.828e26).abs() < 1e20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Luminosity(f64); // Base unit: L☉

impl Luminosity {
    /// Creates a new `Luminosity` from a value in solar luminosities.
    pub fn from_solar(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Luminosity` from a value in watts.
    pub fn from_watts(value: f64) -> Self {
        Self(value / SOLAR_LUMINOSITY_W)
    }

    /// Returns the luminosity in solar luminosities.
    pub fn to_solar(&self) -> f64 {
        self.0
    }

    /// Converts the luminosity to watts.
    pub fn to_watts(&self) -> f64 {
        self.0 * SOLAR_LUMINOSITY_W
    }

    /// Whether the luminosity is strictly positive. NaN is not positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}
