mod tests {
    use approx::assert_relative_eq;

    use crate::volume_density::VolumeDensity;

    #[test]
    fn test_volume_density_conversions() {
        let stony = VolumeDensity::from_grams_per_cm3(3.5);
        assert_relative_eq!(stony.to_kg_per_m3(), 3500.0);

        let iron = VolumeDensity::from_kg_per_m3(7900.0);
        assert_relative_eq!(iron.to_grams_per_cm3(), 7.9);
    }

    #[test]
    fn test_mass_of_volume() {
        let density = VolumeDensity::from_kg_per_m3(3500.0);
        assert_relative_eq!(density.mass_of_volume(2.0).to_kg(), 7000.0);
        assert_relative_eq!(density.mass_of_volume(0.0).to_kg(), 0.0);
    }

    #[test]
    fn test_volume_density_scaling() {
        let density = VolumeDensity::from_kg_per_m3(3000.0);
        assert_relative_eq!((density * 2.0).to_kg_per_m3(), 6000.0);
        assert_relative_eq!((density / 4.0).to_kg_per_m3(), 750.0);
    }
}
