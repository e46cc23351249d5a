mod tests {
    use approx::assert_relative_eq;

    use crate::temperature::{SOLAR_TEFF_K, Temperature};

    #[test]
    fn test_temperature_conversions() {
        let freezing = Temperature::from_kelvin(273.15);
        assert_relative_eq!(freezing.to_celsius(), 0.0, epsilon = 0.01);

        let boiling = Temperature::from_celsius(100.0);
        assert_relative_eq!(boiling.to_kelvin(), 373.15, epsilon = 0.01);
    }

    #[test]
    fn test_solar_offset() {
        let sun = Temperature::solar_effective();
        assert_eq!(sun.to_kelvin(), SOLAR_TEFF_K);
        assert_eq!(sun.offset_from_solar(), 0.0);

        // F star is hotter than the Sun, M dwarf cooler
        assert_relative_eq!(Temperature::from_kelvin(6500.0).offset_from_solar(), 720.0);
        assert_relative_eq!(Temperature::from_kelvin(3200.0).offset_from_solar(), -2580.0);
    }

    #[test]
    fn test_temperature_subtraction() {
        let diff = Temperature::from_kelvin(5800.0) - Temperature::solar_effective();
        assert_relative_eq!(diff.to_kelvin(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_temperature_positivity() {
        assert!(Temperature::from_kelvin(3000.0).is_positive());
        assert!(!Temperature::from_kelvin(0.0).is_positive());
        assert!(!Temperature::from_celsius(-300.0).is_positive());
        assert!(!Temperature::from_kelvin(f64::NAN).is_positive());
    }
}
