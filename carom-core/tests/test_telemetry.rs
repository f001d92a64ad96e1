//! Unit tests for telemetry sampling and the bounded history

use carom_core::engine::{Body, Track, WorldState};
use carom_core::runtime::Simulation;
use carom_core::telemetry::{sample, SampleHistory, TelemetrySample, HISTORY_CAPACITY};
use carom_core::tests::test_helpers::approx_eq;

fn sample_at(time: f32) -> TelemetrySample {
    TelemetrySample {
        time,
        v1: 0.0,
        v2: 0.0,
        total_momentum: 0.0,
        total_kinetic_energy: 0.0,
    }
}

#[test]
fn test_sample_derives_the_aggregates() {
    let mut world = WorldState::new(Body::new(2.0, 3.0, 2.0), Body::new(2.0, -2.0, 8.0));
    world.elapsed = 1.25;
    let s = sample(&world);
    assert_eq!(s.time, 1.25);
    assert_eq!(s.v1, 3.0);
    assert_eq!(s.v2, -2.0);
    // p = 2*3 + 2*(-2) = 2, ke = 0.5*2*9 + 0.5*2*4 = 13
    assert!(approx_eq(s.total_momentum, 2.0, 1e-5));
    assert!(approx_eq(s.total_kinetic_energy, 13.0, 1e-5));
}

#[test]
fn test_history_evicts_oldest_at_capacity() {
    let mut history = SampleHistory::new();
    for i in 0..(HISTORY_CAPACITY + 20) {
        history.push(sample_at(i as f32));
    }
    assert_eq!(history.len(), HISTORY_CAPACITY);
    // The first 20 samples are gone
    assert_eq!(history.oldest().unwrap().time, 20.0);
    assert_eq!(history.latest().unwrap().time, (HISTORY_CAPACITY + 19) as f32);
}

#[test]
fn test_history_iterates_in_time_order() {
    let mut history = SampleHistory::new();
    for i in 0..10 {
        history.push(sample_at(i as f32));
    }
    let times: Vec<f32> = history.iter().map(|s| s.time).collect();
    let expected: Vec<f32> = (0..10).map(|i| i as f32).collect();
    assert_eq!(times, expected);
}

#[test]
fn test_history_clear_empties_the_window() {
    let mut history = SampleHistory::new();
    history.push(sample_at(0.0));
    history.push(sample_at(1.0));
    history.clear();
    assert!(history.is_empty());
    assert!(history.latest().is_none());
    assert!(history.oldest().is_none());
}

#[test]
fn test_simulation_records_one_sample_per_step() {
    let mut sim = Simulation::new(
        Track::new(10.0),
        Body::new(1.0, 1.0, 2.0),
        Body::new(1.0, -1.0, 8.0),
    );
    // The history opens with the t = 0 anchor
    assert_eq!(sim.history().len(), 1);
    sim.step(0.01, 1.0);
    sim.step(0.01, 1.0);
    assert_eq!(sim.history().len(), 3);
    assert!(approx_eq(sim.history().latest().unwrap().time, 0.02, 1e-6));
}

#[test]
fn test_long_runs_keep_only_the_recent_window() {
    let mut sim = Simulation::new(
        Track::new(10.0),
        Body::new(1.0, 1.0, 2.0),
        Body::new(1.0, -1.0, 8.0),
    );
    for _ in 0..300 {
        sim.step(0.01, 1.0);
    }
    assert_eq!(sim.history().len(), HISTORY_CAPACITY);
    // Oldest retained sample is from step 300 - 80 + 1 = 221
    assert!(approx_eq(sim.history().oldest().unwrap().time, 2.21, 1e-4));
}
