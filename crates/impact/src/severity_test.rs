use proptest::prelude::*;

use crate::severity::SeverityBand;

#[test]
fn test_classification_boundaries() {
    assert_eq!(SeverityBand::classify(0.0), SeverityBand::Local);
    assert_eq!(SeverityBand::classify(0.099), SeverityBand::Local);
    assert_eq!(SeverityBand::classify(0.1), SeverityBand::City);
    assert_eq!(SeverityBand::classify(9.999), SeverityBand::City);
    assert_eq!(SeverityBand::classify(10.0), SeverityBand::Regional);
    assert_eq!(SeverityBand::classify(999.9), SeverityBand::Regional);
    assert_eq!(SeverityBand::classify(1000.0), SeverityBand::Global);
    assert_eq!(SeverityBand::classify(f64::INFINITY), SeverityBand::Global);
}

#[test]
fn test_reference_events() {
    assert_eq!(SeverityBand::classify(0.5), SeverityBand::City); // Chelyabinsk, ~0.5 Mt
    assert_eq!(SeverityBand::classify(12.0), SeverityBand::Regional); // Tunguska upper estimate
    assert_eq!(SeverityBand::classify(1.0e8), SeverityBand::Global); // Chicxulub
}

#[test]
fn test_out_of_domain_energies() {
    // Negative energy falls through the first comparison
    assert_eq!(SeverityBand::classify(-5.0), SeverityBand::Local);
    // NaN fails every comparison
    assert_eq!(SeverityBand::classify(f64::NAN), SeverityBand::Global);
}

#[test]
fn test_band_names() {
    assert_eq!(SeverityBand::Local.name(), "Local Event");
    assert_eq!(SeverityBand::City.name(), "City Level Event");
    assert_eq!(SeverityBand::Regional.name(), "Regional Threat");
    assert_eq!(SeverityBand::Global.name(), "Global Event");
    assert_eq!(SeverityBand::City.to_string(), "City Level Event");
}

#[test]
fn test_band_actions() {
    assert_eq!(
        SeverityBand::Local.actions(),
        &["Monitor official news.", "No immediate public action required."]
    );
    assert_eq!(
        SeverityBand::City.actions(),
        &[
            "Shelter away from windows.",
            "Expect shockwave.",
            "Follow local authority instructions."
        ]
    );
    assert_eq!(
        SeverityBand::Regional.actions(),
        &[
            "Evacuate within precaution radius immediately.",
            "Seek high ground if in coastal area."
        ]
    );
    assert_eq!(
        SeverityBand::Global.actions(),
        &[
            "This is a globally significant event.",
            "Follow national emergency broadcast instructions."
        ]
    );
}

#[test]
fn test_ranges_tile_energy_axis() {
    let mut expected_low = 0.0;
    for band in SeverityBand::ALL {
        let (low, high) = band.energy_range();
        assert_eq!(low, expected_low);
        assert!(high > low);
        assert_eq!(SeverityBand::classify(low), band);
        expected_low = high;
    }
    assert_eq!(expected_low, f64::INFINITY);
}

#[test]
fn test_bands_are_ordered() {
    assert!(SeverityBand::Local < SeverityBand::City);
    assert!(SeverityBand::City < SeverityBand::Regional);
    assert!(SeverityBand::Regional < SeverityBand::Global);
}

#[test]
fn test_serializes_as_band_name() {
    let json = serde_json::to_string(&SeverityBand::Regional).unwrap();
    assert_eq!(json, "\"Regional Threat\"");
}

proptest! {
    #[test]
    fn prop_energy_maps_into_its_band_range(energy in 0.0f64..1.0e12) {
        let band = SeverityBand::classify(energy);
        let (low, high) = band.energy_range();
        prop_assert!(low <= energy && energy < high);

        let containing: Vec<_> = SeverityBand::ALL
            .iter()
            .filter(|b| {
                let (lo, hi) = b.energy_range();
                lo <= energy && energy < hi
            })
            .collect();
        prop_assert_eq!(containing.len(), 1);
    }

    #[test]
    fn prop_classification_is_monotonic(a in 0.0f64..1.0e6, b in 0.0f64..1.0e6) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(SeverityBand::classify(lo) <= SeverityBand::classify(hi));
    }
}
