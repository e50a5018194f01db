//! WASM bindings for impact estimation.
//!
//! Exposes the simulation request/response contract to a browser frontend
//! using `wasm-bindgen` and `serde-wasm-bindgen` for type conversion.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! // Missing fields fall back to defaults; strings from form inputs are accepted
//! const report = simulate({ diameter: "250", speed: 17000, angle: 30 });
//! console.log(report.severity_alert, report.crater_diameter_km);
//!
//! const band = classify_energy(12.0);
//! // { band: "Regional Threat", actions: [...] }
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use impact::{ImpactParameters, SeverityBand, SimulationRequest};

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Severity band with its recommended actions
#[derive(Serialize)]
struct SeverityOutput {
    band: &'static str,
    actions: &'static [&'static str],
}

/// Run a simulation request and return the display report.
///
/// # Arguments
/// * `request` - Object with optional `diameter`, `speed`, `angle`, `lat`,
///   `lon` (numbers or numeric strings), `impact_body` and `impact_in_water`
///
/// # Returns
/// The report object, or `{ impact_body, note }` for a non-Earth target
#[wasm_bindgen]
pub fn simulate(request: JsValue) -> Result<JsValue, JsError> {
    let request: SimulationRequest = if request.is_undefined() || request.is_null() {
        SimulationRequest::default()
    } else {
        from_js(request)?
    };
    let response = impact::simulate(&request).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&response)
}

/// Compute raw impact effects without display formatting.
///
/// # Arguments
/// * `diameter_m` - Impactor diameter in meters
/// * `speed_m_s` - Impact speed in m/s
/// * `angle_deg` - Entry angle in degrees from horizontal
/// * `lat`, `lon` - Impact location in decimal degrees
/// * `impact_body` - Target body name, Earth when omitted
/// * `in_water` - Whether the impact point is water
#[wasm_bindgen]
pub fn compute_impact(
    diameter_m: f64,
    speed_m_s: f64,
    angle_deg: f64,
    lat: f64,
    lon: f64,
    impact_body: Option<String>,
    in_water: bool,
) -> Result<JsValue, JsError> {
    let mut params =
        ImpactParameters::new(diameter_m, speed_m_s, angle_deg, lat, lon).in_water(in_water);
    if let Some(body) = impact_body {
        params = params.with_body(body);
    }
    to_js(&impact::compute(&params))
}

/// Classify an impact energy (megatons TNT) into a severity band.
#[wasm_bindgen]
pub fn classify_energy(energy_mt: f64) -> Result<JsValue, JsError> {
    let band = SeverityBand::classify(energy_mt);
    to_js(&SeverityOutput {
        band: band.name(),
        actions: band.actions(),
    })
}
