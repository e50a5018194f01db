use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub const GRAMS_PER_KG: f64 = 1000.0;

/// A physical mass quantity using f64 precision.
///
/// Base unit is the kilogram. Impactor masses span roughly 10⁶ kg for a
/// 10 m boulder up to 10¹⁷ kg for a 5 km body, well inside f64 range.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let boulder = Mass::from_kg(1.8e6);
/// let same = Mass::from_grams(1.8e9);
///
/// assert_eq!(boulder, same);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: kilograms

impl Mass {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_kg(value: f64) -> Self {
        Self(value)
    }

    pub fn from_grams(value: f64) -> Self {
        Self(value / GRAMS_PER_KG)
    }

    pub fn to_kg(&self) -> f64 {
        self.0
    }

    pub fn to_grams(&self) -> f64 {
        self.0 * GRAMS_PER_KG
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        Mass(self * rhs.0)
    }
}
