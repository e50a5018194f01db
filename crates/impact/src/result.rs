//! Impact estimate outputs

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::severity::SeverityBand;

/// Geographic location in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Informational hazard flags derived from the impact energy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RiskFlags {
    /// Energy within [0.1, 1000) Mt
    pub airburst: bool,
    /// Water impact above 1 Mt
    pub tsunami: bool,
}

/// Effects of an Earth impact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub impact_coords: Coordinates,
    #[serde(rename = "impact_energy_Mt")]
    pub impact_energy_mt: f64,
    /// Oblique crater long axis; infinite or NaN for a grazing (0°) entry
    pub crater_long_axis_m: f64,
    pub precaution_radius_km: f64,
    pub severity_band: SeverityBand,
    pub recommended_actions: Vec<String>,
    pub confidence_pct: u8,
    pub risk_flags: RiskFlags,
}

impl ImpactResult {
    /// Whether the crater long axis is a finite number
    ///
    /// False when the entry angle is 0° (division by a zero sine) or when a
    /// NaN crept in from the inputs.
    pub fn has_defined_crater(&self) -> bool {
        self.crater_long_axis_m.is_finite()
    }
}

/// Result for an impact on a body other than Earth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct OffEarthNote {
    pub impact_body: String,
    pub note: String,
}

/// Outcome of an impact computation
///
/// Callers must check the variant before reading crater or severity data;
/// off-Earth impacts carry only a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImpactOutcome {
    Earth(ImpactResult),
    OffEarth(OffEarthNote),
}

impl ImpactOutcome {
    /// The Earth result, if this outcome has one
    pub fn earth(&self) -> Option<&ImpactResult> {
        match self {
            Self::Earth(result) => Some(result),
            Self::OffEarth(_) => None,
        }
    }

    pub fn is_off_earth(&self) -> bool {
        matches!(self, Self::OffEarth(_))
    }
}
