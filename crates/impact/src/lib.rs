//! Asteroid impact estimation
//!
//! Estimates the consequences of an asteroid striking Earth from its
//! diameter, speed, entry angle and location: kinetic energy in megatons of
//! TNT, an oblique crater long axis, a precaution radius, and a severity
//! band with recommended public actions.
//!
//! All computation is pure and synchronous. [`compute`] works on typed
//! [`ImpactParameters`]; [`simulate`] accepts a loosely typed
//! [`SimulationRequest`] and returns the display-ready
//! [`SimulationResponse`].
//!
//! ```
//! use impact::{compute, ImpactParameters, SeverityBand};
//!
//! let outcome = compute(&ImpactParameters::new(1000.0, 20000.0, 45.0, 22.7196, 75.8577));
//! let result = outcome.earth().unwrap();
//! assert_eq!(result.severity_band, SeverityBand::Global);
//! ```

pub mod body;
pub mod calculator;
pub mod constants;
pub mod params;
pub mod report;
pub mod request;
pub mod result;
pub mod severity;

// Re-export key types at crate root
pub use body::ImpactBody;
pub use calculator::compute;
pub use params::ImpactParameters;
pub use report::{format_thousands, ImpactReport, SimulationResponse};
pub use request::{simulate, NumericInput, RequestError, SimulationRequest};
pub use result::{Coordinates, ImpactOutcome, ImpactResult, OffEarthNote, RiskFlags};
pub use severity::SeverityBand;

#[cfg(test)]
mod report_test;
#[cfg(test)]
mod severity_test;
