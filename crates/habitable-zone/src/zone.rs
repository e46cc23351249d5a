//! Habitable zone ranges and orbit classification

use std::fmt;

use serde::{Deserialize, Serialize};
use units::Length;

use crate::boundary::BoundaryKind;
use crate::distance::{DistanceMap, compute_distances};
use crate::error::Result;

/// Where an orbit sits relative to the habitable zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZonePlacement {
    /// Inside the optimistic inner edge
    TooHot,
    /// Within the optimistic zone but outside the conservative one
    Optimistic,
    Conservative,
    /// Beyond the optimistic outer edge
    TooCold,
}

impl fmt::Display for ZonePlacement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            ZonePlacement::TooHot => "too hot",
            ZonePlacement::Optimistic => "optimistic HZ",
            ZonePlacement::Conservative => "conservative HZ",
            ZonePlacement::TooCold => "too cold",
        };
        write!(f, "{}", str)
    }
}

/// Conservative and optimistic habitable zone boundaries
///
/// # Examples
/// ```
/// use habitable_zone::{HabitableZone, ZonePlacement};
/// use units::Length;
///
/// let hz = HabitableZone::compute(1.0, 5780.0).unwrap();
/// assert_eq!(hz.classify(Length::from_au(1.0)), ZonePlacement::Conservative);
/// assert_eq!(hz.classify(Length::from_au(0.72)), ZonePlacement::TooHot);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitableZone {
    pub conservative_inner: Length,
    pub conservative_outer: Length,
    pub optimistic_inner: Length,
    pub optimistic_outer: Length,
}

impl HabitableZone {
    pub fn from_distances(distances: &DistanceMap) -> Self {
        Self {
            conservative_inner: distances[BoundaryKind::InnerConservative],
            conservative_outer: distances[BoundaryKind::OuterConservative],
            optimistic_inner: distances[BoundaryKind::InnerOptimistic],
            optimistic_outer: distances[BoundaryKind::OuterOptimistic],
        }
    }

    /// Habitable zone for a star of `luminosity` (L☉) and `teff` (K)
    pub fn compute(luminosity: f64, teff: f64) -> Result<Self> {
        let distances = compute_distances(luminosity, teff)?;
        Ok(Self::from_distances(&distances))
    }

    /// `(inner, outer)` conservative edges
    pub fn conservative(&self) -> (Length, Length) {
        (self.conservative_inner, self.conservative_outer)
    }

    /// `(inner, outer)` optimistic edges
    pub fn optimistic(&self) -> (Length, Length) {
        (self.optimistic_inner, self.optimistic_outer)
    }

    /// Radial width of the conservative zone in AU
    pub fn conservative_width(&self) -> f64 {
        self.conservative_outer.to_au() - self.conservative_inner.to_au()
    }

    pub fn contains_conservative(&self, orbit: Length) -> bool {
        (self.conservative_inner..=self.conservative_outer).contains(&orbit)
    }

    pub fn contains_optimistic(&self, orbit: Length) -> bool {
        (self.optimistic_inner..=self.optimistic_outer).contains(&orbit)
    }

    /// Place an orbit relative to the zone. The conservative zone takes
    /// precedence where the two overlap.
    pub fn classify(&self, orbit: Length) -> ZonePlacement {
        if self.contains_conservative(orbit) {
            ZonePlacement::Conservative
        } else if self.contains_optimistic(orbit) {
            ZonePlacement::Optimistic
        } else if orbit < self.optimistic_inner {
            ZonePlacement::TooHot
        } else {
            ZonePlacement::TooCold
        }
    }
}
