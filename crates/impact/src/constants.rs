//! Model constants for impact estimation.

pub use units::JOULES_PER_MEGATON_TNT;

/// Uniform bulk density assumed for every impactor (kg/m³), a stony body
pub const ASTEROID_DENSITY_KGM3: f64 = 3500.0;

/// Coefficient of the cube-root crater scaling law: D = 90 · E_Mt^(1/3) meters
pub const CRATER_SCALING_COEFFICIENT_M: f64 = 90.0;

/// Exponent of the crater scaling law
pub const CRATER_SCALING_EXPONENT: f64 = 1.0 / 3.0;

/// Precaution radius as a multiple of the crater long axis
pub const PRECAUTION_RADIUS_MULTIPLIER: f64 = 3.0;

/// Fixed confidence attached to every estimate (%)
pub const CONFIDENCE_PCT: u8 = 75;

/// Lower bound (inclusive) of the airburst risk window (Mt)
pub const AIRBURST_MIN_MT: f64 = 0.1;

/// Upper bound (exclusive) of the airburst risk window (Mt)
pub const AIRBURST_MAX_MT: f64 = 1000.0;

/// Water impacts strictly above this energy carry tsunami risk (Mt)
pub const TSUNAMI_MIN_MT: f64 = 1.0;

/// Name of the only body the model produces effects for
pub const EARTH: &str = "Earth";

/// Note returned in place of effects for any body other than Earth
pub const OFF_EARTH_NOTE: &str = "No direct effect on Earth expected.";
