//! Simulation orchestration: the single writer of world state
//!
//! One [`Simulation::step`] runs the whole pipeline in a fixed order:
//!
//! 1. clamp `dt` to [`MAX_DT`]
//! 2. integrate both bodies to proposed positions
//! 3. reflect each body off its own wall
//! 4. detect and resolve body-body contact on the adjusted proposals
//! 5. commit the new state, accumulate elapsed time, record one sample
//!
//! Boundary resolution precedes collision detection within a step: when a
//! wall bounce and a contact coincide, the collision sees the reflected
//! position and velocity.

use crate::boundary::{reflect, TrackEnd};
use crate::collision::{detect, resolve, separate};
use crate::engine::{Body, Track, WorldState};
use crate::integrator::propose;
use crate::telemetry::{sample, SampleHistory};

/// Upper bound on a single step's dt in seconds. Oversized deltas from a
/// stalled tick source are clamped silently, trading accuracy for a
/// bounded per-step displacement.
pub const MAX_DT: f32 = 0.1;

/// Whether the simulation is being fed ticks or paused for editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// The two-body world plus its run state and telemetry history.
///
/// All mutation goes through [`step`](Simulation::step) and
/// [`reset`](Simulation::reset); observers read value snapshots via
/// [`world`](Simulation::world), never references into live state. The run
/// state gates nothing inside the engine itself: ticking is driven
/// externally, and front-ends consult [`RunState`] to decide whether to
/// feed ticks and whether to allow parameter edits.
#[derive(Debug)]
pub struct Simulation {
    track: Track,
    world: WorldState,
    run_state: RunState,
    history: SampleHistory,
}

impl Simulation {
    /// Build an idle simulation; the history opens with the t = 0 sample
    pub fn new(track: Track, left: Body, right: Body) -> Self {
        let world = WorldState::new(left, right);
        let mut history = SampleHistory::new();
        history.push(sample(&world));

        Self {
            track,
            world,
            run_state: RunState::Idle,
            history,
        }
    }

    pub fn track(&self) -> Track {
        self.track
    }

    /// Value snapshot of the current world
    pub fn world(&self) -> WorldState {
        self.world
    }

    pub fn history(&self) -> &SampleHistory {
        &self.history
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn play(&mut self) {
        self.run_state = RunState::Running;
    }

    pub fn pause(&mut self) {
        self.run_state = RunState::Idle;
    }

    /// Advance the world by one step of at most [`MAX_DT`] seconds.
    ///
    /// `restitution` is the body-body coefficient for any contact resolved
    /// during this step; wall bounces ignore it. A zero dt leaves positions
    /// and elapsed time unchanged unless the bodies already sit within the
    /// contact margin, in which case the contact resolves as usual.
    pub fn step(&mut self, dt: f32, restitution: f32) {
        let dt = dt.min(MAX_DT);

        // Proposed positions before any constraint
        let left_next = propose(&self.world.left, dt);
        let right_next = propose(&self.world.right, dt);

        // Wall reflection, each body against its own end
        let (mut left_pos, mut left_vel) =
            reflect(TrackEnd::Left, left_next, self.world.left.velocity, &self.track);
        let (mut right_pos, mut right_vel) =
            reflect(TrackEnd::Right, right_next, self.world.right.velocity, &self.track);

        // Contact check on the wall-adjusted proposals
        if detect(left_pos, right_pos) {
            let left = Body { velocity: left_vel, ..self.world.left };
            let right = Body { velocity: right_vel, ..self.world.right };
            let (v1, v2) = resolve(&left, &right, restitution);
            let (p1, p2) = separate(left_pos, right_pos, &self.track);
            left_vel = v1;
            right_vel = v2;
            left_pos = p1;
            right_pos = p2;
        }

        // Commit, then record exactly one sample for this step
        self.world.left.position = left_pos;
        self.world.left.velocity = left_vel;
        self.world.right.position = right_pos;
        self.world.right.velocity = right_vel;
        self.world.elapsed += dt;
        self.history.push(sample(&self.world));
    }

    /// Replace the world with fresh initial conditions.
    ///
    /// Atomic from any observer's point of view: bodies, elapsed time and
    /// history change together, the history restarts with the new t = 0
    /// sample, and the run state lands in [`RunState::Idle`].
    pub fn reset(&mut self, left: Body, right: Body) {
        self.world = WorldState::new(left, right);
        self.run_state = RunState::Idle;
        self.history.clear();
        self.history.push(sample(&self.world));
    }
}
