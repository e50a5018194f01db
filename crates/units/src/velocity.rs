use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::length::METERS_PER_KM;

/// Speed in meters per second.
///
/// Asteroid entry speeds sit between Earth's escape velocity (~11.2 km/s)
/// and ~72 km/s for retrograde encounters; 20 km/s is a typical average.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: m/s

impl Velocity {
    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value * METERS_PER_KM)
    }

    pub fn to_meters_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / METERS_PER_KM
    }

    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}
