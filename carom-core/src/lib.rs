pub mod analyzer;
pub mod boundary;
pub mod collision;
pub mod diagnostics;
pub mod engine;
pub mod integrator;
pub mod runtime;
pub mod scenario;
pub mod telemetry;

pub use analyzer::validate_scenario;
pub use boundary::TrackEnd;
pub use collision::{CONTACT_MARGIN, SEPARATION_OFFSET};
pub use diagnostics::{Diagnostic, DiagnosticSeverity, Diagnostics};
pub use engine::{Body, Track, WorldState};
pub use runtime::{RunState, Simulation, MAX_DT};
pub use scenario::{parse_scenario, Scenario, ScenarioError, Schedule};
pub use telemetry::{sample, SampleHistory, TelemetrySample, HISTORY_CAPACITY};

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
