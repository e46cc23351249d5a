//! Habitable zone boundaries around main sequence stars
//!
//! Implements the Kopparapu et al. (2013) parameterization: the stellar flux
//! at each habitable zone boundary is a fourth order polynomial in the offset
//! of the stellar effective temperature from the Sun's, and the boundary
//! distance follows from the inverse square law, `d = sqrt(L / S_eff)`.
//!
//! # Example
//!
//! ```
//! use habitable_zone::{BoundaryKind, compute_distances};
//!
//! let distances = compute_distances(1.0, 5780.0).unwrap();
//! let inner = distances[BoundaryKind::InnerConservative].to_au();
//! let outer = distances[BoundaryKind::OuterConservative].to_au();
//!
//! assert!(inner > 0.9 && inner < 1.0);
//! assert!(outer > 1.6 && outer < 1.7);
//! ```
//!
//! # References
//! - Kopparapu et al. (2013) - "Habitable Zones around Main-sequence Stars:
//!   New Estimates", ApJ 765, 131

pub mod boundary;
pub mod boundary_map;
pub mod coefficients;
pub mod distance;
pub mod error;
pub mod flux;
pub mod zone;

#[cfg(test)]
mod flux_test;
#[cfg(test)]
mod zone_test;

pub use boundary::BoundaryKind;
pub use boundary_map::BoundaryMap;
pub use coefficients::BoundaryCoefficients;
pub use distance::{
    DistanceMap, boundary_distance, compute_distances, compute_distances_for,
    distances_from_fluxes,
};
pub use error::{HabitableZoneError, Result};
pub use flux::{FluxMap, compute_fluxes, compute_fluxes_for};
pub use zone::{HabitableZone, ZonePlacement};
