//! Boundary fluxes as a function of stellar effective temperature

use units::Temperature;

use crate::boundary_map::BoundaryMap;
use crate::coefficients::BoundaryCoefficients;

/// Effective flux at each boundary, relative to the solar constant
pub type FluxMap = BoundaryMap<f64>;

/// Threshold flux at each habitable zone boundary for a star of effective
/// temperature `teff` in Kelvin.
///
/// Total over the reals: no range check is made, and NaN propagates through
/// the polynomial. Validating the temperature is up to the caller.
///
/// # Examples
/// ```
/// use habitable_zone::{BoundaryKind, compute_fluxes};
///
/// let fluxes = compute_fluxes(5780.0);
/// assert_eq!(fluxes[BoundaryKind::InnerConservative], 1.107);
/// assert_eq!(fluxes[BoundaryKind::OuterOptimistic], 0.320);
/// ```
pub fn compute_fluxes(teff: f64) -> FluxMap {
    let offset = Temperature::from_kelvin(teff).offset_from_solar();
    FluxMap::from_fn(|kind| BoundaryCoefficients::for_kind(kind).flux_at_offset(offset))
}

/// [`compute_fluxes`] for a typed temperature
pub fn compute_fluxes_for(temperature: Temperature) -> FluxMap {
    compute_fluxes(temperature.to_kelvin())
}
