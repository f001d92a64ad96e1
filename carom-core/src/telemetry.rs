//! Derived observables for charts and reports
//!
//! Sampling never mutates world state, and the history is a fixed-size
//! window over the most recent samples.

use crate::engine::WorldState;
use std::collections::VecDeque;

/// Number of most-recent samples the history retains
pub const HISTORY_CAPACITY: usize = 80;

/// One derived observation of the world at a point in simulated time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySample {
    pub time: f32,                 // s
    pub v1: f32,                   // m/s, left body
    pub v2: f32,                   // m/s, right body
    pub total_momentum: f32,       // kg*m/s
    pub total_kinetic_energy: f32, // J
}

/// Derive one sample from a world snapshot
pub fn sample(world: &WorldState) -> TelemetrySample {
    TelemetrySample {
        time: world.elapsed,
        v1: world.left.velocity,
        v2: world.right.velocity,
        total_momentum: world.total_momentum(),
        total_kinetic_energy: world.total_kinetic_energy(),
    }
}

/// Bounded, time-ordered sample window (oldest evicted first)
#[derive(Debug, Clone)]
pub struct SampleHistory {
    samples: VecDeque<TelemetrySample>,
}

impl SampleHistory {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Append a sample, evicting the oldest once the window is full
    pub fn push(&mut self, sample: TelemetrySample) {
        if self.samples.len() == HISTORY_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn oldest(&self) -> Option<&TelemetrySample> {
        self.samples.front()
    }

    pub fn latest(&self) -> Option<&TelemetrySample> {
        self.samples.back()
    }

    /// Iterate samples oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &TelemetrySample> {
        self.samples.iter()
    }
}

impl Default for SampleHistory {
    fn default() -> Self {
        Self::new()
    }
}
