use thiserror::Error;

use crate::boundary::BoundaryKind;

/// Errors from the habitable zone distance conversion
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum HabitableZoneError {
    /// The boundary flux is zero or negative, so `sqrt(L / S_eff)` has no
    /// physical value. Happens far outside the model's temperature range.
    #[error("flux for {kind} is non-positive ({flux}), cannot compute distance")]
    NonPositiveFlux { kind: BoundaryKind, flux: f64 },
}

impl HabitableZoneError {
    /// Boundary that caused the error
    pub fn kind(&self) -> BoundaryKind {
        match self {
            HabitableZoneError::NonPositiveFlux { kind, .. } => *kind,
        }
    }
}

pub type Result<T> = std::result::Result<T, HabitableZoneError>;
