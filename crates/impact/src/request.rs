//! Simulation requests with caller-side defaults
//!
//! A request carries loosely typed inputs, the way a form or JSON body
//! delivers them. Missing fields take the defaults below; numeric fields
//! may be JSON numbers or strings holding a number.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::body::ImpactBody;
use crate::calculator::compute;
use crate::params::ImpactParameters;
use crate::report::SimulationResponse;

pub const DEFAULT_DIAMETER_M: f64 = 1000.0;
pub const DEFAULT_SPEED_M_S: f64 = 20000.0;
pub const DEFAULT_ANGLE_DEG: f64 = 45.0;
pub const DEFAULT_LAT: f64 = 22.7196;
pub const DEFAULT_LON: f64 = 75.8577;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    #[error("Field `{field}` is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// A number as sent by a client: either a JSON number or its text form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// Parse into an `f64`, surrounding whitespace ignored
    pub fn parse(&self, field: &'static str) -> Result<f64, RequestError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => text.trim().parse::<f64>().map_err(|_| {
                tracing::warn!(field, value = %text, "Rejected non-numeric request field");
                RequestError::InvalidNumber {
                    field,
                    value: text.clone(),
                }
            }),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Inputs for a single simulation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct SimulationRequest {
    /// Impactor diameter (m)
    #[serde(default)]
    pub diameter: Option<NumericInput>,
    /// Impact speed (m/s)
    #[serde(default)]
    pub speed: Option<NumericInput>,
    /// Entry angle from horizontal (degrees)
    #[serde(default)]
    pub angle: Option<NumericInput>,
    #[serde(default)]
    pub lat: Option<NumericInput>,
    #[serde(default)]
    pub lon: Option<NumericInput>,
    /// Target body name, Earth when absent
    #[serde(default)]
    pub impact_body: Option<String>,
    #[serde(default)]
    pub impact_in_water: Option<bool>,
}

fn field_or(
    input: &Option<NumericInput>,
    field: &'static str,
    default: f64,
) -> Result<f64, RequestError> {
    input
        .as_ref()
        .map_or(Ok(default), |value| value.parse(field))
}

impl SimulationRequest {
    /// Resolve defaults and parse numbers into impact parameters
    pub fn to_parameters(&self) -> Result<ImpactParameters, RequestError> {
        let params = ImpactParameters::new(
            field_or(&self.diameter, "diameter", DEFAULT_DIAMETER_M)?,
            field_or(&self.speed, "speed", DEFAULT_SPEED_M_S)?,
            field_or(&self.angle, "angle", DEFAULT_ANGLE_DEG)?,
            field_or(&self.lat, "lat", DEFAULT_LAT)?,
            field_or(&self.lon, "lon", DEFAULT_LON)?,
        );

        let body = self
            .impact_body
            .clone()
            .map(ImpactBody::from)
            .unwrap_or_default();

        Ok(params
            .with_body(body)
            .in_water(self.impact_in_water.unwrap_or(false)))
    }
}

/// Run a simulation request end to end and produce the display response
pub fn simulate(request: &SimulationRequest) -> Result<SimulationResponse, RequestError> {
    let params = request.to_parameters()?;
    Ok(SimulationResponse::from(&compute(&params)))
}
