//! Kopparapu et al. (2013) flux polynomial coefficients
//!
//! Each boundary's effective flux, relative to the solar constant, is
//!
//! ```text
//! S_eff = S_eff☉ + a·T + b·T² + c·T³ + d·T⁴,    T = Teff - 5780 K
//! ```
//!
//! Values are reproduced at the published precision.

use serde::Serialize;

use units::SOLAR_TEFF_K;

use crate::boundary::BoundaryKind;

/// Polynomial coefficients for one habitable zone boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundaryCoefficients {
    /// Boundary flux for a solar temperature star
    pub s_eff_sun: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Runaway greenhouse
pub const INNER_CONSERVATIVE: BoundaryCoefficients =
    BoundaryCoefficients::new(1.107, 1.332e-4, 1.58e-8, -8.308e-12, -1.931e-15);

/// Maximum greenhouse
pub const OUTER_CONSERVATIVE: BoundaryCoefficients =
    BoundaryCoefficients::new(0.356, 6.171e-5, 1.698e-9, -3.198e-12, -5.575e-16);

/// Recent Venus
pub const INNER_OPTIMISTIC: BoundaryCoefficients =
    BoundaryCoefficients::new(1.776, 1.433e-4, 2.58e-9, -1.621e-12, -5.087e-17);

/// Early Mars
pub const OUTER_OPTIMISTIC: BoundaryCoefficients =
    BoundaryCoefficients::new(0.320, 5.547e-5, 1.526e-9, -2.874e-12, -5.011e-16);

impl BoundaryCoefficients {
    const fn new(s_eff_sun: f64, a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            s_eff_sun,
            a,
            b,
            c,
            d,
        }
    }

    /// Coefficient set for a boundary
    pub fn for_kind(kind: BoundaryKind) -> &'static BoundaryCoefficients {
        match kind {
            BoundaryKind::InnerConservative => &INNER_CONSERVATIVE,
            BoundaryKind::OuterConservative => &OUTER_CONSERVATIVE,
            BoundaryKind::InnerOptimistic => &INNER_OPTIMISTIC,
            BoundaryKind::OuterOptimistic => &OUTER_OPTIMISTIC,
        }
    }

    /// Evaluate the polynomial at a temperature offset `T = Teff - 5780 K`.
    ///
    /// Horner form; at `T = 0` this returns `s_eff_sun` exactly.
    pub fn flux_at_offset(&self, offset: f64) -> f64 {
        self.s_eff_sun + offset * (self.a + offset * (self.b + offset * (self.c + offset * self.d)))
    }

    /// Boundary flux for a star with effective temperature `teff` (K)
    pub fn flux_at(&self, teff: f64) -> f64 {
        self.flux_at_offset(teff - SOLAR_TEFF_K)
    }
}
