//! Test helper utilities for carom tests

use crate::engine::WorldState;
use crate::runtime::Simulation;
use crate::scenario::{parse_scenario, Scenario};
use std::fs;

/// Check if two f32 values are approximately equal within tolerance
pub fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

/// Load a scenario fixture from the tests/data directory
pub fn load_fixture(name: &str) -> Result<Scenario, Box<dyn std::error::Error>> {
    let path = format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name);
    let source = fs::read_to_string(path)?;
    Ok(parse_scenario(&source)?)
}

/// Build an idle simulation from a scenario's initial conditions
pub fn simulation_from(scenario: &Scenario) -> Simulation {
    let (left, right) = scenario.to_bodies();
    Simulation::new(scenario.track, left, right)
}

/// Run a scenario's full schedule and return the finished simulation
pub fn run_scenario(scenario: &Scenario) -> Simulation {
    let mut sim = simulation_from(scenario);
    for _ in 0..scenario.schedule.steps {
        sim.step(scenario.schedule.dt, scenario.restitution);
    }
    sim
}

/// Compare two world states component-wise with tolerance
pub fn worlds_approx_equal(a: &WorldState, b: &WorldState, tol: f32) -> bool {
    approx_eq(a.left.position, b.left.position, tol)
        && approx_eq(a.left.velocity, b.left.velocity, tol)
        && approx_eq(a.left.mass, b.left.mass, tol)
        && approx_eq(a.right.position, b.right.position, tol)
        && approx_eq(a.right.velocity, b.right.velocity, tol)
        && approx_eq(a.right.mass, b.right.mass, tol)
        && approx_eq(a.elapsed, b.elapsed, tol)
}
