use approx::assert_relative_eq;

use units::Temperature;

use crate::boundary::BoundaryKind;
use crate::flux::{compute_fluxes, compute_fluxes_for};

#[test]
fn test_solar_temperature_returns_constant_terms() {
    let fluxes = compute_fluxes(5780.0);

    assert_eq!(fluxes[BoundaryKind::InnerConservative], 1.107);
    assert_eq!(fluxes[BoundaryKind::OuterConservative], 0.356);
    assert_eq!(fluxes[BoundaryKind::InnerOptimistic], 1.776);
    assert_eq!(fluxes[BoundaryKind::OuterOptimistic], 0.320);
}

#[test]
fn test_fluxes_slightly_hotter_than_sun() {
    let fluxes = compute_fluxes(5800.0);

    assert_relative_eq!(
        fluxes[BoundaryKind::InnerConservative],
        1.10967025322704,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        fluxes[BoundaryKind::OuterConservative],
        0.3572348535268,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        fluxes[BoundaryKind::InnerOptimistic],
        1.7788670190238607,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        fluxes[BoundaryKind::OuterOptimistic],
        0.321109987327824,
        max_relative = 1e-12
    );
}

#[test]
fn test_fluxes_rise_with_temperature_near_solar() {
    // Hotter stars emit bluer light, which is more readily scattered, so the
    // same climate limit is reached at higher flux
    let cool = compute_fluxes(5000.0);
    let hot = compute_fluxes(6500.0);

    for kind in BoundaryKind::ALL {
        assert!(
            hot[kind] > cool[kind],
            "{} flux should rise with Teff: {} vs {}",
            kind,
            hot[kind],
            cool[kind]
        );
    }
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    for teff in [2600.0, 4321.5, 5780.0, 6123.4, 7200.0] {
        let first = compute_fluxes(teff);
        let second = compute_fluxes(teff);

        for kind in BoundaryKind::ALL {
            assert_eq!(first[kind].to_bits(), second[kind].to_bits());
        }
    }
}

#[test]
fn test_no_range_restriction() {
    // Far outside the calibrated 2600-7200 K range the polynomial still
    // evaluates; the inner conservative flux turns negative
    let fluxes = compute_fluxes(20000.0);
    assert!(fluxes[BoundaryKind::InnerConservative] < 0.0);

    let nan = compute_fluxes(f64::NAN);
    assert!(nan.values().all(|f| f.is_nan()));
}

#[test]
fn test_typed_temperature_matches_raw() {
    let typed = compute_fluxes_for(Temperature::from_kelvin(4800.0));
    let raw = compute_fluxes(4800.0);
    assert_eq!(typed, raw);
}
