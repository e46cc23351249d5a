//! Conversion from boundary fluxes to orbital distances
//!
//! Incident flux falls off as `S = L / d²` (solar units, AU), so the distance
//! at which a star of luminosity `L` delivers the boundary flux `S_eff` is
//! `d = sqrt(L / S_eff)`.

use tracing::{debug, warn};
use units::{Length, Luminosity, Temperature};

use crate::boundary_map::BoundaryMap;
use crate::error::{HabitableZoneError, Result};
use crate::flux::{FluxMap, compute_fluxes};

/// Distance to each boundary
pub type DistanceMap = BoundaryMap<Length>;

/// Distance in AU at which a star of `luminosity` (L☉) delivers `flux` (S☉)
pub fn boundary_distance(luminosity: f64, flux: f64) -> f64 {
    (luminosity / flux).sqrt()
}

/// Convert boundary fluxes into boundary distances.
///
/// # Errors
/// [`HabitableZoneError::NonPositiveFlux`] for the first boundary, in
/// canonical order, whose flux is `<= 0.0`.
///
/// Luminosity is not validated: a non-positive luminosity yields NaN or zero
/// distances rather than an error.
pub fn distances_from_fluxes(luminosity: f64, fluxes: &FluxMap) -> Result<DistanceMap> {
    fluxes.try_map(|kind, &flux| {
        if flux <= 0.0 {
            warn!(%kind, flux, "boundary flux is non-positive");
            return Err(HabitableZoneError::NonPositiveFlux { kind, flux });
        }

        let distance = boundary_distance(luminosity, flux);
        debug!(%kind, flux, distance_au = distance, "boundary distance");

        Ok(Length::from_au(distance))
    })
}

/// Habitable zone boundary distances for a star with the given luminosity
/// (L☉) and effective temperature (K).
///
/// # Examples
/// ```
/// use habitable_zone::{BoundaryKind, compute_distances};
///
/// let distances = compute_distances(4.0, 5780.0).unwrap();
/// let sun_like = compute_distances(1.0, 5780.0).unwrap();
///
/// // Four times the luminosity pushes every boundary out by a factor of two
/// let ratio = distances[BoundaryKind::OuterOptimistic] / sun_like[BoundaryKind::OuterOptimistic];
/// assert!((ratio - 2.0).abs() < 1e-12);
/// ```
pub fn compute_distances(luminosity: f64, teff: f64) -> Result<DistanceMap> {
    let fluxes = compute_fluxes(teff);
    distances_from_fluxes(luminosity, &fluxes)
}

/// [`compute_distances`] for typed quantities
pub fn compute_distances_for(
    luminosity: Luminosity,
    temperature: Temperature,
) -> Result<DistanceMap> {
    compute_distances(luminosity.to_solar(), temperature.to_kelvin())
}
