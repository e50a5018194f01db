mod tests {
    use approx::assert_relative_eq;

    use crate::mass::{Mass, GRAMS_PER_KG};

    #[test]
    fn test_mass_conversions() {
        let mass_kg = Mass::from_kg(1.0);
        assert_relative_eq!(mass_kg.to_grams(), GRAMS_PER_KG);

        let mass_g = Mass::from_grams(2500.0);
        assert_relative_eq!(mass_g.to_kg(), 2.5);
    }

    #[test]
    fn test_mass_arithmetic_operations() {
        let mass1 = Mass::from_kg(2.0);
        let mass2 = Mass::from_kg(1.5);

        assert_relative_eq!((mass1 + mass2).to_kg(), 3.5);
        assert_relative_eq!((mass1 - mass2).to_kg(), 0.5);

        let scaled = mass1 * 3.0;
        assert_relative_eq!(scaled.to_kg(), 6.0);

        let divided = mass1 / 4.0;
        assert_relative_eq!(divided.to_kg(), 0.5);

        let commutative = 2.5 * Mass::from_kg(100.0);
        assert_relative_eq!(commutative.to_kg(), 250.0);
    }
}
