//! The four habitable zone boundaries

use std::fmt;

use serde::{Deserialize, Serialize};

/// A habitable zone boundary.
///
/// The conservative boundaries come from 1-D climate model limits, the
/// optimistic ones from the empirical observation that Venus and Mars once
/// had surface water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    /// Runaway greenhouse limit
    InnerConservative,
    /// Maximum greenhouse limit
    OuterConservative,
    /// Recent Venus limit
    InnerOptimistic,
    /// Early Mars limit
    OuterOptimistic,
}

impl BoundaryKind {
    /// Number of boundaries
    pub const COUNT: usize = 4;

    /// All boundaries in canonical order
    pub const ALL: [BoundaryKind; Self::COUNT] = [
        BoundaryKind::InnerConservative,
        BoundaryKind::OuterConservative,
        BoundaryKind::InnerOptimistic,
        BoundaryKind::OuterOptimistic,
    ];

    /// Position of this boundary in [`BoundaryKind::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Report label, e.g. "Conservative HZ (Runaway Greenhouse)"
    pub fn label(self) -> &'static str {
        match self {
            BoundaryKind::InnerConservative => "Conservative HZ (Runaway Greenhouse)",
            BoundaryKind::OuterConservative => "Conservative HZ (Maximum Greenhouse)",
            BoundaryKind::InnerOptimistic => "Optimistic HZ (Early Venus)",
            BoundaryKind::OuterOptimistic => "Optimistic HZ (Early Mars)",
        }
    }

    /// Climate limit that defines the boundary
    pub fn climate_limit(self) -> &'static str {
        match self {
            BoundaryKind::InnerConservative => "runaway greenhouse",
            BoundaryKind::OuterConservative => "maximum greenhouse",
            BoundaryKind::InnerOptimistic => "recent Venus",
            BoundaryKind::OuterOptimistic => "early Mars",
        }
    }

    /// Inner (hot) edge of its zone
    pub fn is_inner(self) -> bool {
        matches!(
            self,
            BoundaryKind::InnerConservative | BoundaryKind::InnerOptimistic
        )
    }

    pub fn is_conservative(self) -> bool {
        matches!(
            self,
            BoundaryKind::InnerConservative | BoundaryKind::OuterConservative
        )
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            BoundaryKind::InnerConservative => "inner_conservative",
            BoundaryKind::OuterConservative => "outer_conservative",
            BoundaryKind::InnerOptimistic => "inner_optimistic",
            BoundaryKind::OuterOptimistic => "outer_optimistic",
        };
        write!(f, "{}", str)
    }
}
