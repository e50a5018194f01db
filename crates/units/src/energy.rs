use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::mass::Mass;
use crate::velocity::Velocity;

/// Energy released by one megaton of TNT (J)
pub const JOULES_PER_MEGATON_TNT: f64 = 4.184e15;

/// Energy released by one kiloton of TNT (J)
pub const JOULES_PER_KILOTON_TNT: f64 = 4.184e12;

/// An energy quantity using f64 precision.
///
/// Base unit is the joule. Impact energies are usually quoted in megatons of
/// TNT equivalent, so conversions to and from Mt are provided.
///
/// # Examples
///
/// ```rust
/// use units::{Energy, Mass, Velocity};
///
/// let e = Energy::kinetic(Mass::from_kg(2.0), Velocity::from_meters_per_sec(3.0));
/// assert_eq!(e.to_joules(), 9.0);
///
/// let hiroshima = Energy::from_kilotons_tnt(15.0);
/// assert!(hiroshima.to_megatons_tnt() < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Energy(f64); // Base unit: joules

impl Energy {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_joules(value: f64) -> Self {
        Self(value)
    }

    pub fn from_megatons_tnt(value: f64) -> Self {
        Self(value * JOULES_PER_MEGATON_TNT)
    }

    pub fn from_kilotons_tnt(value: f64) -> Self {
        Self(value * JOULES_PER_KILOTON_TNT)
    }

    /// Kinetic energy `½·m·v²` of a body moving at `velocity`.
    pub fn kinetic(mass: Mass, velocity: Velocity) -> Self {
        Self(0.5 * mass.to_kg() * velocity.powi(2))
    }

    pub fn to_joules(&self) -> f64 {
        self.0
    }

    pub fn to_megatons_tnt(&self) -> f64 {
        self.0 / JOULES_PER_MEGATON_TNT
    }

    pub fn to_kilotons_tnt(&self) -> f64 {
        self.0 / JOULES_PER_KILOTON_TNT
    }
}

impl Add for Energy {
    type Output = Energy;

    fn add(self, rhs: Energy) -> Energy {
        Energy(self.0 + rhs.0)
    }
}

impl Sub for Energy {
    type Output = Energy;

    fn sub(self, rhs: Energy) -> Energy {
        Energy(self.0 - rhs.0)
    }
}

impl Mul<f64> for Energy {
    type Output = Energy;

    fn mul(self, rhs: f64) -> Energy {
        Energy(self.0 * rhs)
    }
}

impl Div<f64> for Energy {
    type Output = Energy;

    fn div(self, rhs: f64) -> Energy {
        Energy(self.0 / rhs)
    }
}

/// Ratio of two energies
impl Div for Energy {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}
