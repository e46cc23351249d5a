mod tests {
    use approx::assert_relative_eq;

    use crate::length::{AU_TO_KM, AU_TO_M, Length};

    #[test]
    fn test_length_conversions() {
        let one_au = Length::from_au(1.0);
        assert_relative_eq!(one_au.to_km(), AU_TO_KM);
        assert_relative_eq!(one_au.to_meters(), AU_TO_M);

        let from_km = Length::from_km(AU_TO_KM * 1.5);
        assert_relative_eq!(from_km.to_au(), 1.5);
    }

    #[test]
    fn test_length_ratio_and_scaling() {
        let inner = Length::from_au(0.95);
        let outer = Length::from_au(1.68);

        assert_relative_eq!(outer / inner, 1.68 / 0.95);
        assert_relative_eq!((inner * 2.0).to_au(), 1.9);
        assert!(inner < outer);
    }

    #[test]
    fn test_length_serializes_as_au() {
        let json = serde_json::to_string(&Length::from_au(1.25)).unwrap();
        assert_eq!(json, "1.25");

        let parsed: Length = serde_json::from_str("0.5").unwrap();
        assert_eq!(parsed, Length::from_au(0.5));
    }
}
