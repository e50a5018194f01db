//! Severity classification by impact energy
//!
//! Four ordered bands partition the energy axis into half-open intervals,
//! each lower bound inclusive. Every band carries a fixed, ordered list of
//! recommended public actions.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Severity of an impact by released energy (megatons TNT)
///
/// | Band     | Energy range (Mt) | Name              |
/// |----------|-------------------|-------------------|
/// | Local    | [0, 0.1)          | Local Event       |
/// | City     | [0.1, 10)         | City Level Event  |
/// | Regional | [10, 1000)        | Regional Threat   |
/// | Global   | [1000, ∞)         | Global Event      |
///
/// Values below zero are not meaningful but fall through to `Local`; NaN
/// fails every comparison and lands in `Global`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SeverityBand {
    /// Below 0.1 Mt, comparable to a large bolide
    #[serde(rename = "Local Event")]
    Local,

    /// 0.1 to 10 Mt, enough to flatten a city
    #[serde(rename = "City Level Event")]
    City,

    /// 10 to 1000 Mt, devastation across a region
    #[serde(rename = "Regional Threat")]
    Regional,

    /// 1000 Mt and above, global climatic consequences
    #[serde(rename = "Global Event")]
    Global,
}

impl SeverityBand {
    /// Energy threshold between Local and City bands (Mt)
    pub const LOCAL_CITY_THRESHOLD_MT: f64 = 0.1;

    /// Energy threshold between City and Regional bands (Mt)
    pub const CITY_REGIONAL_THRESHOLD_MT: f64 = 10.0;

    /// Energy threshold between Regional and Global bands (Mt)
    pub const REGIONAL_GLOBAL_THRESHOLD_MT: f64 = 1000.0;

    /// All bands, lowest first
    pub const ALL: [SeverityBand; 4] = [Self::Local, Self::City, Self::Regional, Self::Global];

    /// Classify an impact by its energy in megatons TNT
    pub fn classify(energy_mt: f64) -> Self {
        match energy_mt {
            e if e < Self::LOCAL_CITY_THRESHOLD_MT => Self::Local,
            e if e < Self::CITY_REGIONAL_THRESHOLD_MT => Self::City,
            e if e < Self::REGIONAL_GLOBAL_THRESHOLD_MT => Self::Regional,
            _ => Self::Global,
        }
    }

    /// Human-readable name for the band
    pub fn name(&self) -> &'static str {
        match self {
            Self::Local => "Local Event",
            Self::City => "City Level Event",
            Self::Regional => "Regional Threat",
            Self::Global => "Global Event",
        }
    }

    /// Recommended public actions, in the order they should be presented
    pub fn actions(&self) -> &'static [&'static str] {
        match self {
            Self::Local => &[
                "Monitor official news.",
                "No immediate public action required.",
            ],
            Self::City => &[
                "Shelter away from windows.",
                "Expect shockwave.",
                "Follow local authority instructions.",
            ],
            Self::Regional => &[
                "Evacuate within precaution radius immediately.",
                "Seek high ground if in coastal area.",
            ],
            Self::Global => &[
                "This is a globally significant event.",
                "Follow national emergency broadcast instructions.",
            ],
        }
    }

    /// Returns the half-open energy range `[low, high)` for this band in Mt
    pub fn energy_range(&self) -> (f64, f64) {
        match self {
            Self::Local => (0.0, Self::LOCAL_CITY_THRESHOLD_MT),
            Self::City => (
                Self::LOCAL_CITY_THRESHOLD_MT,
                Self::CITY_REGIONAL_THRESHOLD_MT,
            ),
            Self::Regional => (
                Self::CITY_REGIONAL_THRESHOLD_MT,
                Self::REGIONAL_GLOBAL_THRESHOLD_MT,
            ),
            Self::Global => (Self::REGIONAL_GLOBAL_THRESHOLD_MT, f64::INFINITY),
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
