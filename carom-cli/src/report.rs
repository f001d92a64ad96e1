//! Plain-text summary of a run
//!
//! Deterministic commentary comparing the initial and latest telemetry
//! samples. Pure formatting over its inputs; the engine never calls into
//! this module.

use carom_core::telemetry::TelemetrySample;

/// Human label for a restitution coefficient
pub fn regime_label(restitution: f32) -> &'static str {
    if restitution >= 0.999 {
        "elastic"
    } else if restitution <= 0.001 {
        "perfectly inelastic"
    } else {
        "partially inelastic"
    }
}

/// Format the collision report for a run
pub fn collision_report(
    initial: &TelemetrySample,
    latest: &TelemetrySample,
    restitution: f32,
) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "collision report  (e = {:.2}, {})",
        restitution,
        regime_label(restitution)
    ));
    lines.push(format!(
        "momentum    {:+.3} -> {:+.3} kg m/s  (drift {:+.4})",
        initial.total_momentum,
        latest.total_momentum,
        latest.total_momentum - initial.total_momentum
    ));

    if initial.total_kinetic_energy > 0.0 {
        let retained = latest.total_kinetic_energy / initial.total_kinetic_energy * 100.0;
        lines.push(format!(
            "energy      {:.3} -> {:.3} J  ({:.1}% retained)",
            initial.total_kinetic_energy, latest.total_kinetic_energy, retained
        ));
    } else {
        lines.push(format!(
            "energy      {:.3} -> {:.3} J",
            initial.total_kinetic_energy, latest.total_kinetic_energy
        ));
    }

    lines.push(format!(
        "left body   {:+.3} -> {:+.3} m/s",
        initial.v1, latest.v1
    ));
    lines.push(format!(
        "right body  {:+.3} -> {:+.3} m/s",
        initial.v2, latest.v2
    ));

    lines.join("\n")
}
