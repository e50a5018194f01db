//! Presentation-ready impact report
//!
//! Turns an [`ImpactResult`] into the display strings a frontend shows.
//! Number formatting is locale independent: rounded to whole units with a
//! comma between each group of three digits.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::result::{Coordinates, ImpactOutcome, ImpactResult, OffEarthNote};

/// Display form of an Earth impact estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ImpactReport {
    pub impact_coords: Coordinates,
    pub precaution_radius_km: f64,
    /// Severity band name, upper-cased
    pub severity_alert: String,
    /// e.g. `"87,600 Megatons TNT"`
    #[serde(rename = "impact_energy_Mt")]
    pub impact_energy_mt: String,
    /// Crater long axis, e.g. `"6 km"`
    pub crater_diameter_km: String,
    /// Recommended actions joined by single spaces
    pub recommended_actions: String,
    /// e.g. `"75%"`
    pub confidence_level: String,
}

impl ImpactReport {
    pub fn from_result(result: &ImpactResult) -> Self {
        Self {
            impact_coords: result.impact_coords,
            precaution_radius_km: result.precaution_radius_km,
            severity_alert: result.severity_band.name().to_uppercase(),
            impact_energy_mt: format!(
                "{} Megatons TNT",
                format_thousands(result.impact_energy_mt)
            ),
            crater_diameter_km: format!(
                "{} km",
                format_thousands(result.crater_long_axis_m / 1000.0)
            ),
            recommended_actions: result.recommended_actions.join(" "),
            confidence_level: format!("{}%", result.confidence_pct),
        }
    }
}

/// Response body for a simulation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(untagged)]
pub enum SimulationResponse {
    Report(ImpactReport),
    OffEarth(OffEarthNote),
}

impl From<&ImpactOutcome> for SimulationResponse {
    fn from(outcome: &ImpactOutcome) -> Self {
        match outcome {
            ImpactOutcome::Earth(result) => Self::Report(ImpactReport::from_result(result)),
            ImpactOutcome::OffEarth(note) => Self::OffEarth(note.clone()),
        }
    }
}

/// Round to a whole number and group digits in threes with commas
///
/// Non-finite values render as `inf`, `-inf` and `nan`.
///
/// ```
/// use impact::format_thousands;
///
/// assert_eq!(format_thousands(1234567.4), "1,234,567");
/// assert_eq!(format_thousands(-9876.0), "-9,876");
/// assert_eq!(format_thousands(f64::INFINITY), "inf");
/// ```
pub fn format_thousands(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}")
}
