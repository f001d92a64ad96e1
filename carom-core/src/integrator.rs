use crate::engine::Body;

/// Propose the body's next position after dt using explicit Euler integration
///
/// Pure extrapolation: track bounds are applied afterwards by the boundary
/// resolver, and oversized dt values are clamped by the orchestrator.
pub fn propose(body: &Body, dt: f32) -> f32 {
    body.position + body.velocity * dt
}
