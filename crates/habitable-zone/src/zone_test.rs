use approx::assert_relative_eq;

use units::Length;

use crate::boundary::BoundaryKind;
use crate::distance::compute_distances;
use crate::error::HabitableZoneError;
use crate::zone::{HabitableZone, ZonePlacement};

#[test]
fn test_zone_from_distances() {
    let distances = compute_distances(1.0, 5800.0).unwrap();
    let hz = HabitableZone::from_distances(&distances);

    assert_eq!(
        hz.conservative(),
        (
            distances[BoundaryKind::InnerConservative],
            distances[BoundaryKind::OuterConservative]
        )
    );
    assert_eq!(
        hz.optimistic(),
        (
            distances[BoundaryKind::InnerOptimistic],
            distances[BoundaryKind::OuterOptimistic]
        )
    );
}

#[test]
fn test_solar_system_placement() {
    let hz = HabitableZone::compute(1.0, 5780.0).unwrap();

    // Mercury, Venus, Earth, Mars, Jupiter
    assert_eq!(hz.classify(Length::from_au(0.39)), ZonePlacement::TooHot);
    assert_eq!(hz.classify(Length::from_au(0.72)), ZonePlacement::TooHot);
    assert_eq!(hz.classify(Length::from_au(1.0)), ZonePlacement::Conservative);
    assert_eq!(hz.classify(Length::from_au(1.52)), ZonePlacement::Conservative);
    assert_eq!(hz.classify(Length::from_au(5.2)), ZonePlacement::TooCold);

    // Between the optimistic and conservative edges
    assert_eq!(hz.classify(Length::from_au(0.8)), ZonePlacement::Optimistic);
    assert_eq!(hz.classify(Length::from_au(1.7)), ZonePlacement::Optimistic);
}

#[test]
fn test_edges_are_inclusive() {
    let hz = HabitableZone::compute(1.0, 5780.0).unwrap();

    assert!(hz.contains_conservative(hz.conservative_inner));
    assert!(hz.contains_conservative(hz.conservative_outer));
    assert!(hz.contains_optimistic(hz.optimistic_inner));
    assert!(hz.contains_optimistic(hz.optimistic_outer));
}

#[test]
fn test_m_dwarf_zone_is_close_in() {
    let hz = HabitableZone::compute(0.01, 3200.0).unwrap();

    assert!(
        hz.conservative_inner.to_au() < 0.15,
        "M dwarf inner edge {} should be < 0.15 AU",
        hz.conservative_inner.to_au()
    );
    assert!(
        hz.conservative_outer.to_au() < 0.3,
        "M dwarf outer edge {} should be < 0.3 AU",
        hz.conservative_outer.to_au()
    );
}

#[test]
fn test_conservative_width() {
    let hz = HabitableZone::compute(1.0, 5780.0).unwrap();
    assert_relative_eq!(hz.conservative_width(), 1.676004 - 0.950443, epsilon = 1e-5);
}

#[test]
fn test_compute_propagates_flux_error() {
    let err = HabitableZone::compute(1.0, 20000.0).unwrap_err();
    assert!(matches!(
        err,
        HabitableZoneError::NonPositiveFlux {
            kind: BoundaryKind::InnerConservative,
            ..
        }
    ));
}

#[test]
fn test_placement_display() {
    assert_eq!(ZonePlacement::TooHot.to_string(), "too hot");
    assert_eq!(ZonePlacement::Conservative.to_string(), "conservative HZ");
}
