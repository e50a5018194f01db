use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

use crate::mass::Mass;

/// Bulk density (mass per volume) in kg/m³.
///
/// Typical small-body bulk densities:
/// - Carbonaceous (C-type): ~1400-2000 kg/m³
/// - Stony (S-type): ~2700-3500 kg/m³
/// - Metallic (M-type): ~5000-7900 kg/m³
///
/// # Examples
///
/// ```rust
/// use units::VolumeDensity;
///
/// let stony = VolumeDensity::from_kg_per_m3(3500.0);
/// assert_eq!(stony.to_grams_per_cm3(), 3.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct VolumeDensity(f64); // Base unit: kg/m³

impl VolumeDensity {
    pub fn from_kg_per_m3(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `VolumeDensity` from g/cm³ (1 g/cm³ = 1000 kg/m³).
    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value * 1000.0)
    }

    pub fn to_kg_per_m3(&self) -> f64 {
        self.0
    }

    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0 / 1000.0
    }

    /// Mass of a uniform body occupying `volume_m3` cubic meters.
    pub fn mass_of_volume(&self, volume_m3: f64) -> Mass {
        Mass::from_kg(self.0 * volume_m3)
    }
}

impl Mul<f64> for VolumeDensity {
    type Output = VolumeDensity;

    fn mul(self, rhs: f64) -> VolumeDensity {
        VolumeDensity(self.0 * rhs)
    }
}

impl Div<f64> for VolumeDensity {
    type Output = VolumeDensity;

    fn div(self, rhs: f64) -> VolumeDensity {
        VolumeDensity(self.0 / rhs)
    }
}
