//! Run a handful of impact scenarios and print their reports as JSON.
//!
//! Set `RUST_LOG=impact=debug` to see the computation trace.

use impact::{NumericInput, SimulationRequest};
use tracing_subscriber::EnvFilter;

fn request(diameter: f64, speed: f64, angle: f64) -> SimulationRequest {
    SimulationRequest {
        diameter: Some(NumericInput::Number(diameter)),
        speed: Some(NumericInput::Number(speed)),
        angle: Some(NumericInput::Number(angle)),
        ..Default::default()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let scenarios = [
        ("Default 1 km impactor", SimulationRequest::default()),
        ("10 m boulder", request(10.0, 15000.0, 45.0)),
        ("5 km impactor", request(5000.0, 20000.0, 45.0)),
        ("Vertical entry", request(1000.0, 20000.0, 90.0)),
        ("Shallow entry", request(1000.0, 20000.0, 10.0)),
        (
            "Mars impact",
            SimulationRequest {
                impact_body: Some("Mars".to_string()),
                ..Default::default()
            },
        ),
    ];

    for (label, req) in &scenarios {
        let response = impact::simulate(req)?;
        println!("=== {}", label);
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}
