use crate::calculator::compute;
use crate::params::ImpactParameters;
use crate::report::{format_thousands, ImpactReport, SimulationResponse};
use crate::result::ImpactOutcome;

fn report_for(params: &ImpactParameters) -> ImpactReport {
    match compute(params) {
        ImpactOutcome::Earth(result) => ImpactReport::from_result(&result),
        ImpactOutcome::OffEarth(note) => panic!("expected Earth result, got {:?}", note),
    }
}

#[test]
fn test_format_thousands_grouping() {
    assert_eq!(format_thousands(0.0), "0");
    assert_eq!(format_thousands(7.0), "7");
    assert_eq!(format_thousands(999.0), "999");
    assert_eq!(format_thousands(1000.0), "1,000");
    assert_eq!(format_thousands(87600.17756185688), "87,600");
    assert_eq!(format_thousands(10950022.195232108), "10,950,022");
    assert_eq!(format_thousands(123456789012.0), "123,456,789,012");
}

#[test]
fn test_format_thousands_rounding() {
    assert_eq!(format_thousands(0.4), "0");
    assert_eq!(format_thousands(0.6), "1");
    assert_eq!(format_thousands(999.7), "1,000");
    assert_eq!(format_thousands(5.652742070214639), "6");
}

#[test]
fn test_format_thousands_negative() {
    assert_eq!(format_thousands(-1234.2), "-1,234");
    assert_eq!(format_thousands(-999.0), "-999");
    assert_eq!(format_thousands(-0.4), "-0");
}

#[test]
fn test_format_thousands_non_finite() {
    assert_eq!(format_thousands(f64::INFINITY), "inf");
    assert_eq!(format_thousands(f64::NEG_INFINITY), "-inf");
    assert_eq!(format_thousands(f64::NAN), "nan");
}

#[test]
fn test_default_scenario_report() {
    let report = report_for(&ImpactParameters::new(1000.0, 20000.0, 45.0, 22.7196, 75.8577));

    assert_eq!(report.severity_alert, "GLOBAL EVENT");
    assert_eq!(report.impact_energy_mt, "87,600 Megatons TNT");
    assert_eq!(report.crater_diameter_km, "6 km");
    assert_eq!(
        report.recommended_actions,
        "This is a globally significant event. Follow national emergency broadcast instructions."
    );
    assert_eq!(report.confidence_level, "75%");
    assert_eq!(report.impact_coords.lat, 22.7196);
}

#[test]
fn test_small_object_report() {
    let report = report_for(&ImpactParameters::new(10.0, 15000.0, 45.0, 0.0, 0.0));

    assert_eq!(report.severity_alert, "LOCAL EVENT");
    assert_eq!(report.impact_energy_mt, "0 Megatons TNT");
    assert_eq!(report.crater_diameter_km, "0 km");
    assert_eq!(
        report.recommended_actions,
        "Monitor official news. No immediate public action required."
    );
}

#[test]
fn test_report_energy_and_actions() {
    let report = report_for(&ImpactParameters::new(300.0, 20000.0, 45.0, 0.0, 0.0));

    assert_eq!(report.severity_alert, "GLOBAL EVENT");
    assert_eq!(report.impact_energy_mt, "2,365 Megatons TNT");

    let city = report_for(&ImpactParameters::new(30.0, 20000.0, 45.0, 0.0, 0.0));
    assert_eq!(city.severity_alert, "CITY LEVEL EVENT");
    assert_eq!(
        city.recommended_actions,
        "Shelter away from windows. Expect shockwave. Follow local authority instructions."
    );
}

#[test]
fn test_grazing_report_renders_infinity() {
    let report = report_for(&ImpactParameters::new(1000.0, 20000.0, 0.0, 0.0, 0.0));
    assert_eq!(report.crater_diameter_km, "inf km");
}

#[test]
fn test_report_wire_shape() {
    let report = report_for(&ImpactParameters::new(1000.0, 20000.0, 45.0, 22.7196, 75.8577));
    let json = serde_json::to_value(&report).unwrap();

    let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "confidence_level",
            "crater_diameter_km",
            "impact_coords",
            "impact_energy_Mt",
            "precaution_radius_km",
            "recommended_actions",
            "severity_alert",
        ]
    );
}

#[test]
fn test_response_from_off_earth_outcome() {
    let params = ImpactParameters::new(1000.0, 20000.0, 45.0, 0.0, 0.0).with_body("Venus");
    let response = SimulationResponse::from(&compute(&params));

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "impact_body": "Venus",
            "note": "No direct effect on Earth expected.",
        })
    );
}
