use std::fmt;

use anyhow::{Result, bail};
use serde::Serialize;

use habitable_zone::{
    BoundaryKind, DistanceMap, FluxMap, compute_distances_for, compute_fluxes_for,
};
use units::{Luminosity, Temperature};

/// Width of the header rule
const RULE_WIDTH: usize = 60;

/// Validated stellar parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarInput {
    pub temperature: Temperature,
    pub luminosity: Luminosity,
}

impl StarInput {
    /// Both values must be strictly positive (NaN is rejected).
    pub fn new(temperature_k: f64, luminosity_lsun: f64) -> Result<Self> {
        let temperature = Temperature::from_kelvin(temperature_k);
        let luminosity = Luminosity::from_solar(luminosity_lsun);

        if !temperature.is_positive() {
            bail!("temperature must be positive, got {}", temperature_k);
        }
        if !luminosity.is_positive() {
            bail!("luminosity must be positive, got {}", luminosity_lsun);
        }

        Ok(Self {
            temperature,
            luminosity,
        })
    }
}

/// Boundary fluxes and distances for one star
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub teff_k: f64,
    pub luminosity_lsun: f64,
    pub fluxes: FluxMap,
    pub distances_au: DistanceMap,
}

impl Report {
    pub fn compute(star: StarInput) -> habitable_zone::Result<Self> {
        let fluxes = compute_fluxes_for(star.temperature);
        let distances_au = compute_distances_for(star.luminosity, star.temperature)?;

        Ok(Self {
            teff_k: star.temperature.to_kelvin(),
            luminosity_lsun: star.luminosity.to_solar(),
            fluxes,
            distances_au,
        })
    }

    /// Plain text table, distances to four decimal places
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Habitable Zone Boundaries for star with Teff = {} K, L = {} L_sun",
            self.teff_k, self.luminosity_lsun
        )?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        for kind in BoundaryKind::ALL {
            writeln!(
                f,
                "{}: {:.4} AU",
                kind.label(),
                self.distances_au[kind].to_au()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Note: Distances are in Astronomical Units (AU).")
    }
}
