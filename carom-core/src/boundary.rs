//! Wall reflection at the two ends of the track
//!
//! Each body owns one end: the left body reflects at 0, the right body at
//! `track.length`. Wall bounces are perfectly elastic regardless of the
//! body-body restitution coefficient.

use crate::engine::Track;

/// Which end of the track a body reflects against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackEnd {
    Left,
    Right,
}

/// Reflect a proposed position off the body's owned wall.
///
/// Reflection triggers when the proposal has reached the wall (`<= 0` on
/// the left, `>= length` on the right) while the velocity points into it:
/// the position snaps exactly onto the wall and the velocity sign inverts.
/// A body sitting on its wall but moving away passes through unchanged, so
/// a zero-dt step cannot re-flip a freshly reflected body.
///
/// Returns the (possibly clamped) position and the (possibly flipped)
/// velocity. Per-body: the other body plays no part here.
pub fn reflect(end: TrackEnd, proposed: f32, velocity: f32, track: &Track) -> (f32, f32) {
    match end {
        TrackEnd::Left => {
            if proposed <= 0.0 && velocity < 0.0 {
                (0.0, -velocity)
            } else {
                (proposed, velocity)
            }
        }
        TrackEnd::Right => {
            if proposed >= track.length && velocity > 0.0 {
                (track.length, -velocity)
            } else {
                (proposed, velocity)
            }
        }
    }
}
