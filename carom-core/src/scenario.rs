//! Scenario text format: initial conditions for a run
//!
//! Line-based, one directive per line; blank lines and `#` comments are
//! skipped:
//!
//! ```text
//! # Equal masses, head on, perfectly elastic
//! track length = 10.0
//! restitution = 1.0
//! body left  mass 2.0 velocity  3.0 position 2.0
//! body right mass 2.0 velocity -2.0 position 8.0
//! simulate dt = 0.01 steps = 400
//! ```
//!
//! Both `body` lines are required. `track`, `restitution` and `simulate`
//! are optional and default to a 10 m track, e = 1 and dt = 0.016 for
//! 600 steps.

use crate::engine::{Body, Track};
use thiserror::Error;

/// Scenario parse error with the 1-based source line where known
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("{message}")]
    SyntaxError {
        message: String,
        line: Option<usize>,
    },
}

impl ScenarioError {
    pub fn new(message: impl Into<String>, line: Option<usize>) -> Self {
        Self::SyntaxError {
            message: message.into(),
            line,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self::SyntaxError {
            message: message.into(),
            line: None,
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            Self::SyntaxError { line, .. } => *line,
        }
    }
}

/// Batch schedule from a `simulate` line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schedule {
    pub dt: f32, // s per step
    pub steps: u32,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            dt: 0.016,
            steps: 600,
        }
    }
}

/// A parsed scenario: track, restitution, both bodies and the schedule
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub track: Track,
    pub restitution: f32,
    pub left: Body,
    pub right: Body,
    pub schedule: Schedule,
}

impl Scenario {
    /// Equal masses head on with e = 1: the textbook velocity exchange
    pub fn elastic_exchange() -> Self {
        Self {
            track: Track::default(),
            restitution: 1.0,
            left: Body::new(2.0, 3.0, 2.0),
            right: Body::new(2.0, -2.0, 8.0),
            schedule: Schedule::default(),
        }
    }

    /// The same pair with e = 0: both bodies leave at the common velocity
    pub fn perfectly_inelastic() -> Self {
        Self {
            restitution: 0.0,
            ..Self::elastic_exchange()
        }
    }

    /// A light fast body against a heavy slow one, e = 0.5
    pub fn mismatched_masses() -> Self {
        Self {
            track: Track::default(),
            restitution: 0.5,
            left: Body::new(1.0, 4.0, 1.5),
            right: Body::new(6.0, -0.5, 8.5),
            schedule: Schedule::default(),
        }
    }

    /// The engine body pair in (left, right) order
    pub fn to_bodies(&self) -> (Body, Body) {
        (self.left, self.right)
    }

    /// Replace schedule values with caller-supplied overrides; `None`
    /// keeps the scenario's own value. Overridden scenarios go through
    /// validation like any other.
    pub fn apply_overrides(&mut self, dt: Option<f32>, steps: Option<u32>) {
        if let Some(dt) = dt {
            self.schedule.dt = dt;
        }
        if let Some(steps) = steps {
            self.schedule.steps = steps;
        }
    }
}

enum BodySide {
    Left,
    Right,
}

/// Parse a scenario from source text
pub fn parse_scenario(source: &str) -> Result<Scenario, ScenarioError> {
    let mut track = None;
    let mut restitution = None;
    let mut left = None;
    let mut right = None;
    let mut schedule = None;

    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        let line_num = idx + 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with("track ") {
            if track.is_some() {
                return Err(ScenarioError::new(
                    "Duplicate 'track' declaration",
                    Some(line_num),
                ));
            }
            track = Some(parse_track(line, line_num)?);
        } else if line.starts_with("restitution") {
            if restitution.is_some() {
                return Err(ScenarioError::new(
                    "Duplicate 'restitution' declaration",
                    Some(line_num),
                ));
            }
            restitution = Some(parse_restitution(line, line_num)?);
        } else if line.starts_with("body ") {
            let (side, body) = parse_body(line, line_num)?;
            match side {
                BodySide::Left => {
                    if left.is_some() {
                        return Err(ScenarioError::new(
                            "Duplicate 'body left' declaration",
                            Some(line_num),
                        ));
                    }
                    left = Some(body);
                }
                BodySide::Right => {
                    if right.is_some() {
                        return Err(ScenarioError::new(
                            "Duplicate 'body right' declaration",
                            Some(line_num),
                        ));
                    }
                    right = Some(body);
                }
            }
        } else if line.starts_with("simulate ") {
            if schedule.is_some() {
                return Err(ScenarioError::new(
                    "Duplicate 'simulate' declaration",
                    Some(line_num),
                ));
            }
            schedule = Some(parse_schedule(line, line_num)?);
        } else {
            return Err(ScenarioError::new(
                format!(
                    "Unknown directive: {}",
                    line.split_whitespace().next().unwrap_or("")
                ),
                Some(line_num),
            ));
        }
    }

    let left = left.ok_or_else(|| ScenarioError::message("Missing 'body left' declaration"))?;
    let right = right.ok_or_else(|| ScenarioError::message("Missing 'body right' declaration"))?;

    Ok(Scenario {
        track: track.unwrap_or_default(),
        restitution: restitution.unwrap_or(1.0),
        left,
        right,
        schedule: schedule.unwrap_or_default(),
    })
}

/// Parse a track declaration: `track length = x`
fn parse_track(line: &str, line_num: usize) -> Result<Track, ScenarioError> {
    let rest = line.strip_prefix("track ").ok_or_else(|| {
        ScenarioError::new("Expected 'track' keyword", Some(line_num))
    })?;

    let length_str = rest.trim().strip_prefix("length = ").ok_or_else(|| {
        ScenarioError::new(
            format!("Expected 'length =' in track declaration: {}", line),
            Some(line_num),
        )
    })?;

    let length = parse_number(length_str.trim(), line_num)?;
    Ok(Track::new(length))
}

/// Parse a restitution declaration: `restitution = x`
fn parse_restitution(line: &str, line_num: usize) -> Result<f32, ScenarioError> {
    let value_str = line.strip_prefix("restitution = ").ok_or_else(|| {
        ScenarioError::new(
            format!("Expected '=' in restitution declaration: {}", line),
            Some(line_num),
        )
    })?;

    parse_number(value_str.trim(), line_num)
}

/// Parse a body declaration: `body <left|right> mass m velocity v position p`
fn parse_body(line: &str, line_num: usize) -> Result<(BodySide, Body), ScenarioError> {
    let rest = line.strip_prefix("body ").ok_or_else(|| {
        ScenarioError::new("Expected 'body' keyword", Some(line_num))
    })?;

    let mut parts = rest.trim_start().splitn(2, char::is_whitespace);
    let side_str = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("");

    let side = match side_str {
        "left" => BodySide::Left,
        "right" => BodySide::Right,
        other => {
            return Err(ScenarioError::new(
                format!("Expected 'left' or 'right' after 'body', got '{}'", other),
                Some(line_num),
            ));
        }
    };

    let mass = parse_field(rest, "mass", line, line_num)?;
    let velocity = parse_field(rest, "velocity", line, line_num)?;
    let position = parse_field(rest, "position", line, line_num)?;

    Ok((side, Body::new(mass, velocity, position)))
}

/// Parse a simulate declaration: `simulate dt = x steps = n`
fn parse_schedule(line: &str, line_num: usize) -> Result<Schedule, ScenarioError> {
    let rest = line.strip_prefix("simulate ").ok_or_else(|| {
        ScenarioError::new("Expected 'simulate' keyword", Some(line_num))
    })?;

    let dt_start = rest.find("dt = ").ok_or_else(|| {
        ScenarioError::new(
            format!("Expected 'dt =' in simulate: {}", line),
            Some(line_num),
        )
    })?;
    let after_dt = &rest[dt_start + 5..];

    let dt_end = after_dt.find(" steps = ").ok_or_else(|| {
        ScenarioError::new(
            format!("Expected 'steps =' in simulate: {}", line),
            Some(line_num),
        )
    })?;

    let dt = parse_number(after_dt[..dt_end].trim(), line_num)?;

    let steps_str = after_dt[dt_end + 9..].trim();
    let steps = steps_str.parse::<u32>().map_err(|_| {
        ScenarioError::new(
            format!("Invalid step count: {}", steps_str),
            Some(line_num),
        )
    })?;

    Ok(Schedule { dt, steps })
}

/// Find `<key> <value>` inside a body declaration and parse the value
fn parse_field(rest: &str, key: &str, line: &str, line_num: usize) -> Result<f32, ScenarioError> {
    let pattern = format!("{} ", key);
    let start = rest.find(&pattern).ok_or_else(|| {
        ScenarioError::new(
            format!("Expected '{}' in body declaration: {}", key, line),
            Some(line_num),
        )
    })?;

    let after = rest[start + pattern.len()..].trim_start();
    let value_str = after.split_whitespace().next().ok_or_else(|| {
        ScenarioError::new(
            format!("Expected a value after '{}': {}", key, line),
            Some(line_num),
        )
    })?;

    parse_number(value_str, line_num)
}

fn parse_number(s: &str, line_num: usize) -> Result<f32, ScenarioError> {
    s.parse::<f32>().map_err(|_| {
        ScenarioError::new(format!("Invalid number: {}", s), Some(line_num))
    })
}
