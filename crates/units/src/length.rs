use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Div, Mul, Sub};

pub const METERS_PER_KM: f64 = 1000.0;
pub const CM_PER_METER: f64 = 100.0;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with meters as the base unit,
/// which is the natural scale for impactor diameters and crater dimensions.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let impactor = Length::from_meters(1000.0);
/// let crater = Length::from_km(5.0);
///
/// assert_eq!(impactor.to_km(), 1.0);
/// assert_eq!(crater.to_meters(), 5000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: meters

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value * METERS_PER_KM)
    }

    /// Creates a new `Length` from a value in centimeters.
    pub fn from_cm(value: f64) -> Self {
        Self(value / CM_PER_METER)
    }

    pub fn to_meters(&self) -> f64 {
        self.0
    }

    pub fn to_km(&self) -> f64 {
        self.0 / METERS_PER_KM
    }

    pub fn to_cm(&self) -> f64 {
        self.0 * CM_PER_METER
    }

    /// Volume of a sphere with this length as its diameter, in m³.
    ///
    /// Uses `(4/3)·π·r³` with `r = d/2`. A negative diameter yields a
    /// negative volume; no validation is performed.
    pub fn sphere_volume_m3(&self) -> f64 {
        let radius = self.0 / 2.0;
        (4.0 / 3.0) * PI * radius.powi(3)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Ratio of two lengths
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        Length(self * rhs.0)
    }
}
