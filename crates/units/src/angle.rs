use serde::{Deserialize, Serialize};

/// A plane angle, stored in radians.
///
/// Impact angles are given in degrees from the horizontal (90° is a vertical
/// strike), so the degree constructor is the common entry point.
///
/// # Examples
///
/// ```rust
/// use units::Angle;
///
/// let vertical = Angle::from_degrees(90.0);
/// assert_eq!(vertical.sin(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Angle(f64); // Base unit: radians

impl Angle {
    pub fn from_radians(value: f64) -> Self {
        Self(value)
    }

    pub fn from_degrees(value: f64) -> Self {
        Self(value.to_radians())
    }

    pub fn to_radians(&self) -> f64 {
        self.0
    }

    pub fn to_degrees(&self) -> f64 {
        self.0.to_degrees()
    }

    pub fn sin(&self) -> f64 {
        self.0.sin()
    }

    pub fn cos(&self) -> f64 {
        self.0.cos()
    }
}
