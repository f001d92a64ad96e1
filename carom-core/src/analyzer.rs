//! Static validation of scenarios
//!
//! This module checks a parsed scenario before it reaches the engine. The
//! engine itself raises no errors on bad numerics (they propagate as NaN
//! or infinity), so this is the layer that rejects them.

use crate::collision::{CONTACT_MARGIN, SEPARATION_OFFSET};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::engine::Body;
use crate::runtime::MAX_DT;
use crate::scenario::Scenario;

/// Validate a scenario and return diagnostics
pub fn validate_scenario(scenario: &Scenario) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    // Check 1: track geometry; separation needs room for the full gap
    if !scenario.track.length.is_finite()
        || scenario.track.length <= 2.0 * SEPARATION_OFFSET
    {
        diagnostics.push(Diagnostic::error(
            format!(
                "track length must be finite and longer than {} m, got {}",
                2.0 * SEPARATION_OFFSET,
                scenario.track.length
            ),
            None,
        ));
    }

    // Check 2: per-body numerics
    check_body(&scenario.left, "left", &mut diagnostics);
    check_body(&scenario.right, "right", &mut diagnostics);

    // Check 3: restitution coefficient range
    if !scenario.restitution.is_finite()
        || scenario.restitution < 0.0
        || scenario.restitution > 1.0
    {
        diagnostics.push(Diagnostic::error(
            format!(
                "restitution must lie in [0, 1], got {}",
                scenario.restitution
            ),
            None,
        ));
    }

    // Check 4: both bodies start on the track
    for (body, side) in [(&scenario.left, "left"), (&scenario.right, "right")] {
        if body.position.is_finite()
            && (body.position < 0.0 || body.position > scenario.track.length)
        {
            diagnostics.push(Diagnostic::error(
                format!(
                    "{} body starts off the track at position {}",
                    side, body.position
                ),
                None,
            ));
        }
    }

    // Check 5: left/right ordering, then the initial gap
    if scenario.left.position > scenario.right.position {
        diagnostics.push(Diagnostic::error(
            format!(
                "left body (position {}) starts right of the right body (position {})",
                scenario.left.position, scenario.right.position
            ),
            None,
        ));
    } else if scenario.right.position - scenario.left.position <= CONTACT_MARGIN {
        diagnostics.push(Diagnostic::warning(
            format!(
                "bodies start {:.3} m apart, inside the {} m contact margin; they collide immediately",
                scenario.right.position - scenario.left.position,
                CONTACT_MARGIN
            ),
            None,
        ));
    }

    // Check 6: schedule
    if !scenario.schedule.dt.is_finite() || scenario.schedule.dt <= 0.0 {
        diagnostics.push(Diagnostic::error(
            format!("simulate dt must be positive, got {}", scenario.schedule.dt),
            None,
        ));
    } else if scenario.schedule.dt > MAX_DT {
        diagnostics.push(Diagnostic::warning(
            format!(
                "simulate dt {} exceeds the per-step limit {}; each step is clamped",
                scenario.schedule.dt, MAX_DT
            ),
            None,
        ));
    }
    if scenario.schedule.steps == 0 {
        diagnostics.push(Diagnostic::error("simulate steps must be at least 1", None));
    }

    diagnostics
}

fn check_body(body: &Body, side: &str, diagnostics: &mut Diagnostics) {
    if !body.mass.is_finite() || body.mass <= 0.0 {
        diagnostics.push(Diagnostic::error(
            format!(
                "{} body mass must be positive and finite, got {}",
                side, body.mass
            ),
            None,
        ));
    }
    if !body.velocity.is_finite() {
        diagnostics.push(Diagnostic::error(
            format!("{} body velocity must be finite, got {}", side, body.velocity),
            None,
        ));
    }
    if !body.position.is_finite() {
        diagnostics.push(Diagnostic::error(
            format!("{} body position must be finite, got {}", side, body.position),
            None,
        ));
    }
}
