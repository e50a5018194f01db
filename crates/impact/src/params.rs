//! Impact input parameters

use serde::{Deserialize, Serialize};
use units::{Angle, Length, Velocity};

use crate::body::ImpactBody;
use crate::result::Coordinates;

/// Physical description of a single impact scenario
///
/// Values are taken as given. A negative diameter or an angle outside
/// (0°, 90°] is not rejected; it flows through the arithmetic and shows up
/// as a negative, infinite or NaN quantity in the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameters {
    /// Impactor diameter
    pub diameter: Length,
    /// Speed at impact
    pub speed: Velocity,
    /// Entry angle from the horizontal (90° is vertical)
    pub angle: Angle,
    /// Ground zero
    pub coords: Coordinates,
    /// Target body
    pub body: ImpactBody,
    /// Whether the impact point is in open water
    pub in_water: bool,
}

impl ImpactParameters {
    /// Create an Earth land impact
    ///
    /// # Arguments
    /// * `diameter_m` - Impactor diameter in meters
    /// * `speed_m_s` - Impact speed in m/s
    /// * `angle_deg` - Entry angle in degrees from horizontal
    /// * `lat`, `lon` - Impact location in decimal degrees
    pub fn new(diameter_m: f64, speed_m_s: f64, angle_deg: f64, lat: f64, lon: f64) -> Self {
        Self {
            diameter: Length::from_meters(diameter_m),
            speed: Velocity::from_meters_per_sec(speed_m_s),
            angle: Angle::from_degrees(angle_deg),
            coords: Coordinates { lat, lon },
            body: ImpactBody::Earth,
            in_water: false,
        }
    }

    /// Retarget the impact at another body
    pub fn with_body(mut self, body: impl Into<ImpactBody>) -> Self {
        self.body = body.into();
        self
    }

    /// Mark the impact point as water (or land)
    pub fn in_water(mut self, in_water: bool) -> Self {
        self.in_water = in_water;
        self
    }
}
