//! Typed physical quantities used by the habitable zone calculations.
//!
//! Each quantity wraps an `f64` in its natural astrophysical base unit:
//! Kelvin for temperature, AU for length, and solar luminosities for
//! luminosity.

pub mod length;
pub mod luminosity;
pub mod temperature;

#[cfg(test)]
mod length_test;
#[cfg(test)]
mod temperature_test;

pub use length::{AU_TO_KM, AU_TO_M, Length};
pub use luminosity::{Luminosity, SOLAR_LUMINOSITY_W};
pub use temperature::{SOLAR_TEFF_K, Temperature};
