//! Unit tests for scenario validation

use carom_core::analyzer::validate_scenario;
use carom_core::diagnostics::DiagnosticSeverity;
use carom_core::scenario::Scenario;

fn base() -> Scenario {
    Scenario::elastic_exchange()
}

#[test]
fn test_presets_validate_clean() {
    for scenario in [
        Scenario::elastic_exchange(),
        Scenario::perfectly_inelastic(),
        Scenario::mismatched_masses(),
    ] {
        let diagnostics = validate_scenario(&scenario);
        assert!(
            diagnostics.is_empty(),
            "unexpected diagnostics: {:?}",
            diagnostics
        );
    }
}

#[test]
fn test_non_positive_mass_is_an_error() {
    let mut scenario = base();
    scenario.left.mass = 0.0;
    assert!(validate_scenario(&scenario).has_errors());
}

#[test]
fn test_nan_mass_is_an_error() {
    let mut scenario = base();
    scenario.right.mass = f32::NAN;
    assert!(validate_scenario(&scenario).has_errors());
}

#[test]
fn test_nan_velocity_is_an_error() {
    let mut scenario = base();
    scenario.right.velocity = f32::NAN;
    assert!(validate_scenario(&scenario).has_errors());
}

#[test]
fn test_infinite_position_is_an_error() {
    let mut scenario = base();
    scenario.left.position = f32::INFINITY;
    assert!(validate_scenario(&scenario).has_errors());
}

#[test]
fn test_restitution_out_of_range_is_an_error() {
    let mut scenario = base();
    scenario.restitution = 1.2;
    assert!(validate_scenario(&scenario).has_errors());

    scenario.restitution = -0.1;
    assert!(validate_scenario(&scenario).has_errors());
}

#[test]
fn test_position_off_the_track_is_an_error() {
    let mut scenario = base();
    scenario.right.position = 12.0;
    assert!(validate_scenario(&scenario).has_errors());
}

#[test]
fn test_misordered_bodies_are_an_error() {
    let mut scenario = base();
    scenario.left.position = 9.0;
    scenario.right.position = 1.0;
    assert!(validate_scenario(&scenario).has_errors());
}

#[test]
fn test_non_positive_track_length_is_an_error() {
    let mut scenario = base();
    scenario.track.length = 0.0;
    assert!(validate_scenario(&scenario).has_errors());
}

#[test]
fn test_zero_steps_is_an_error() {
    let mut scenario = base();
    scenario.schedule.steps = 0;
    assert!(validate_scenario(&scenario).has_errors());
}

#[test]
fn test_non_positive_dt_is_an_error() {
    let mut scenario = base();
    scenario.schedule.dt = 0.0;
    assert!(validate_scenario(&scenario).has_errors());
}

#[test]
fn test_overridden_dt_is_still_validated() {
    // A clean scenario with a bad dt folded in afterwards must not pass
    let mut scenario = base();
    scenario.apply_overrides(Some(-1.0), None);
    assert!(validate_scenario(&scenario).has_errors());
}

#[test]
fn test_overridden_steps_are_still_validated() {
    let mut scenario = base();
    scenario.apply_overrides(None, Some(0));
    assert!(validate_scenario(&scenario).has_errors());
}

#[test]
fn test_track_shorter_than_the_separation_gap_is_an_error() {
    // Below 0.12 m the clamped midpoint cannot keep both bodies on track
    for length in [0.1, 0.12] {
        let mut scenario = base();
        scenario.track.length = length;
        let diagnostics = validate_scenario(&scenario);
        assert!(
            diagnostics.iter().any(|d| d.message.contains("track length")),
            "length {} must fail the geometry check",
            length
        );
    }
}

#[test]
fn test_close_start_is_a_warning_not_an_error() {
    let mut scenario = base();
    scenario.left.position = 5.0;
    scenario.right.position = 5.05;
    let diagnostics = validate_scenario(&scenario);
    assert_eq!(diagnostics.len(), 1);
    assert!(!diagnostics.has_errors());
    assert!(diagnostics.has_warnings());
    assert!(diagnostics
        .iter()
        .any(|d| d.severity == DiagnosticSeverity::Warning && d.message.contains("contact margin")));
}

#[test]
fn test_oversized_dt_is_a_warning() {
    let mut scenario = base();
    scenario.schedule.dt = 0.5;
    let diagnostics = validate_scenario(&scenario);
    assert!(!diagnostics.has_errors());
    assert!(diagnostics.has_warnings());
}

#[test]
fn test_errors_name_the_side() {
    let mut scenario = base();
    scenario.left.mass = -1.0;
    let diagnostics = validate_scenario(&scenario);
    assert!(diagnostics.iter().any(|d| d.message.contains("left body mass")));
}
