//! Impact energy, crater geometry and precaution radius
//!
//! The chain is: spherical volume → mass at a fixed bulk density → kinetic
//! energy → megatons TNT → severity band, and in parallel a cube-root crater
//! scaling law stretched by the entry angle.
//!
//! # Grazing entry
//!
//! The long axis is `D / sin(θ)`. At θ = 0° the sine is zero and the
//! division yields `+∞` (or NaN for zero energy). The value is propagated
//! as-is, the precaution radius inherits it, and a warning is logged; the
//! computation itself never fails.

use units::{Angle, Energy, Length, Mass, VolumeDensity};

use crate::constants::{
    AIRBURST_MAX_MT, AIRBURST_MIN_MT, ASTEROID_DENSITY_KGM3, CONFIDENCE_PCT,
    CRATER_SCALING_COEFFICIENT_M, CRATER_SCALING_EXPONENT, OFF_EARTH_NOTE,
    PRECAUTION_RADIUS_MULTIPLIER, TSUNAMI_MIN_MT,
};
use crate::params::ImpactParameters;
use crate::result::{ImpactOutcome, ImpactResult, OffEarthNote, RiskFlags};
use crate::severity::SeverityBand;

/// Mass of a uniform-density spherical impactor
pub fn asteroid_mass(diameter: Length) -> Mass {
    let density = VolumeDensity::from_kg_per_m3(ASTEROID_DENSITY_KGM3);
    density.mass_of_volume(diameter.sphere_volume_m3())
}

/// Kinetic energy delivered at impact
pub fn impact_energy(params: &ImpactParameters) -> Energy {
    Energy::kinetic(asteroid_mass(params.diameter), params.speed)
}

/// Crater diameter for a vertical impact: `90 · E_Mt^(1/3)` meters
///
/// Negative energies have no real fractional power and give NaN.
pub fn base_crater_diameter(energy: Energy) -> Length {
    Length::from_meters(
        CRATER_SCALING_COEFFICIENT_M * energy.to_megatons_tnt().powf(CRATER_SCALING_EXPONENT),
    )
}

/// Crater long axis for an oblique impact
///
/// Shallower entries smear the crater out along the track, modeled by
/// dividing by the sine of the entry angle.
pub fn crater_long_axis(energy: Energy, angle: Angle) -> Length {
    base_crater_diameter(energy) / angle.sin()
}

/// Evacuation distance derived from the crater long axis
pub fn precaution_radius(crater_long_axis: Length) -> Length {
    crater_long_axis * PRECAUTION_RADIUS_MULTIPLIER
}

impl RiskFlags {
    /// Derive hazard flags from impact energy and surface type
    pub fn assess(energy_mt: f64, in_water: bool) -> Self {
        Self {
            airburst: (AIRBURST_MIN_MT..AIRBURST_MAX_MT).contains(&energy_mt),
            tsunami: in_water && energy_mt > TSUNAMI_MIN_MT,
        }
    }
}

/// Estimate the effects of an impact
///
/// Non-Earth targets short-circuit to an [`OffEarthNote`] without touching
/// the physics. Everything else is a single pass over the inputs.
pub fn compute(params: &ImpactParameters) -> ImpactOutcome {
    if !params.body.is_earth() {
        tracing::debug!(body = %params.body, "Impact is not on Earth, skipping effects");
        return ImpactOutcome::OffEarth(OffEarthNote {
            impact_body: params.body.name().to_string(),
            note: OFF_EARTH_NOTE.to_string(),
        });
    }

    let energy = impact_energy(params);
    let energy_mt = energy.to_megatons_tnt();
    let severity_band = SeverityBand::classify(energy_mt);

    let long_axis = crater_long_axis(energy, params.angle);
    if !long_axis.is_finite() {
        tracing::warn!(
            angle_deg = params.angle.to_degrees(),
            energy_mt,
            "Crater long axis is undefined for this entry angle"
        );
    }
    let radius = precaution_radius(long_axis);

    tracing::debug!(
        diameter_m = params.diameter.to_meters(),
        speed_m_s = params.speed.to_meters_per_sec(),
        angle_deg = params.angle.to_degrees(),
        energy_mt,
        band = %severity_band,
        "Computed impact effects"
    );

    ImpactOutcome::Earth(ImpactResult {
        impact_coords: params.coords,
        impact_energy_mt: energy_mt,
        crater_long_axis_m: long_axis.to_meters(),
        precaution_radius_km: radius.to_km(),
        severity_band,
        recommended_actions: severity_band
            .actions()
            .iter()
            .map(|action| action.to_string())
            .collect(),
        confidence_pct: CONFIDENCE_PCT,
        risk_flags: RiskFlags::assess(energy_mt, params.in_water),
    })
}
