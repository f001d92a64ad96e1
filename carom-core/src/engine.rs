/// A point mass on the track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub mass: f32,     // kg
    pub velocity: f32, // m/s, positive toward the right end
    pub position: f32, // m from the left end
}

impl Body {
    pub fn new(mass: f32, velocity: f32, position: f32) -> Self {
        Self {
            mass,
            velocity,
            position,
        }
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> f32 {
        self.mass * self.velocity
    }

    /// Kinetic energy 0.5 * m * v^2
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity * self.velocity
    }
}

/// The bounded one-dimensional track both bodies move along
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub length: f32, // m
}

impl Track {
    pub fn new(length: f32) -> Self {
        Self { length }
    }
}

impl Default for Track {
    fn default() -> Self {
        Self { length: 10.0 }
    }
}

/// Snapshot of the whole simulation: both bodies plus accumulated time.
///
/// The field names carry the ordering convention: `left` starts at the
/// smaller position and reflects off the wall at 0, `right` off the wall
/// at `track.length`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldState {
    pub left: Body,
    pub right: Body,
    pub elapsed: f32, // s of simulated time
}

impl WorldState {
    pub fn new(left: Body, right: Body) -> Self {
        Self {
            left,
            right,
            elapsed: 0.0,
        }
    }

    /// Total momentum of the pair
    pub fn total_momentum(&self) -> f32 {
        self.left.momentum() + self.right.momentum()
    }

    /// Total kinetic energy of the pair
    pub fn total_kinetic_energy(&self) -> f32 {
        self.left.kinetic_energy() + self.right.kinetic_energy()
    }
}
