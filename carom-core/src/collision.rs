//! Body-body contact detection and restitution-based resolution
//!
//! Contact is declared slightly before geometric overlap: when the left
//! body's proposed position comes within [`CONTACT_MARGIN`] of the right
//! body's. Resolution rewrites both velocities with the general 1-D
//! restitution formula, then re-places the pair around the contact
//! midpoint so the gap exceeds the margin again.

use crate::engine::{Body, Track};

/// Contact margin in meters. The predicate fires at this gap, before the
/// bodies actually touch. An absolute distance, not derived from body
/// size or track length.
pub const CONTACT_MARGIN: f32 = 0.1;

/// Distance in meters from the contact midpoint each body is placed at
/// after resolution. The resulting 0.12 m gap exceeds [`CONTACT_MARGIN`],
/// so a freshly resolved pair cannot re-trigger the predicate on the
/// following step.
pub const SEPARATION_OFFSET: f32 = 0.06;

/// Positional contact predicate on the proposed next positions
pub fn detect(left_pos: f32, right_pos: f32) -> bool {
    right_pos - left_pos <= CONTACT_MARGIN
}

/// Post-collision velocities for a restitution coefficient in [0, 1].
///
/// ```text
/// v1' = ((m1 - e*m2)*v1 + (1 + e)*m2*v2) / (m1 + m2)
/// v2' = ((1 + e)*m1*v1 + (m2 - e*m1)*v2) / (m1 + m2)
/// ```
///
/// e = 1 is perfectly elastic, e = 0 perfectly inelastic (both bodies
/// leave with the common velocity). Total momentum m1*v1 + m2*v2 is
/// conserved for every e; kinetic energy is conserved only at e = 1.
pub fn resolve(left: &Body, right: &Body, restitution: f32) -> (f32, f32) {
    let (m1, v1) = (left.mass, left.velocity);
    let (m2, v2) = (right.mass, right.velocity);
    let total_mass = m1 + m2;

    let v1_next = ((m1 - restitution * m2) * v1 + (1.0 + restitution) * m2 * v2) / total_mass;
    let v2_next = ((1.0 + restitution) * m1 * v1 + (m2 - restitution * m1) * v2) / total_mass;

    (v1_next, v2_next)
}

/// Place both bodies around the contact midpoint, [`SEPARATION_OFFSET`]
/// to each side. The midpoint is clamped inward so neither body leaves
/// the track; the 0.12 m gap holds either way. Left stays left.
///
/// Needs a track longer than the full gap to clamp into; scenario
/// validation rejects shorter tracks before they reach the engine.
pub fn separate(left_pos: f32, right_pos: f32, track: &Track) -> (f32, f32) {
    let midpoint = 0.5 * (left_pos + right_pos);
    let midpoint = midpoint
        .max(SEPARATION_OFFSET)
        .min(track.length - SEPARATION_OFFSET);
    (midpoint - SEPARATION_OFFSET, midpoint + SEPARATION_OFFSET)
}
