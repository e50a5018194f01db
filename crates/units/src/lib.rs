//! Strongly typed SI quantities
//!
//! Thin `f64` newtypes for the quantities that flow through an impact
//! estimate: length, mass, speed, bulk density, energy and angle.

pub mod angle;
pub mod energy;
pub mod length;
pub mod mass;
pub mod velocity;
pub mod volume_density;

#[cfg(test)]
mod mass_test;
#[cfg(test)]
mod volume_density_test;

pub use angle::Angle;
pub use energy::{Energy, JOULES_PER_MEGATON_TNT};
pub use length::Length;
pub use mass::Mass;
pub use velocity::Velocity;
pub use volume_density::VolumeDensity;
