/// AnimationPath: an ordered list of waypoints with a travel cursor.
///
/// The cursor sits on a waypoint (`from`) plus a distance into the segment
/// that leaves it in the current traversal direction. Advancing consumes a
/// travel budget (`elapsed × speed` for entities, a fixed step for the
/// camera) and moves the cursor segment by segment.
///
/// `progress` is the total budget consumed since construction or `reset()`.
/// It never decreases: zero, negative and non-finite deltas are ignored.

use glam::Vec3;
use crate::error::{Error, Result};

/// Segment lengths below this are treated as zero-length.
const SEGMENT_EPSILON: f32 = 1e-6;

/// What happens when the cursor reaches the last waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndBehavior {
    /// Clamp at the last waypoint. The path reports completion from then on.
    Stop,
    /// Continue from the last waypoint back to the first (closing segment included).
    Loop,
    /// Turn around and travel back; ping-pong between the two ends.
    Reverse,
}

/// A path waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// World-space position
    pub position: Vec3,
    /// Speed multiplier for the segment starting at this waypoint
    /// (in waypoint order). `None` means 1.0.
    pub pace: Option<f32>,
}

impl Waypoint {
    pub fn new(position: Vec3) -> Self {
        Self { position, pace: None }
    }

    pub fn with_pace(position: Vec3, pace: f32) -> Self {
        Self { position, pace: Some(pace) }
    }

    fn effective_pace(&self) -> f32 {
        match self.pace {
            Some(p) if p.is_finite() && p > 0.0 => p,
            _ => 1.0,
        }
    }
}

/// Result of a single advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathAdvance {
    /// Interpolated position after the advance
    pub position: Vec3,
    /// The path reached an end during this call (wrap or turnaround),
    /// or is a finished `Stop` path.
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Waypoint path with a cursor and an explicit end behavior.
#[derive(Debug, Clone)]
pub struct AnimationPath {
    waypoints: Vec<Waypoint>,
    end_behavior: EndBehavior,
    from: usize,
    offset: f32,
    direction: Direction,
    progress: f32,
    finished: bool,
}

impl AnimationPath {
    /// Create a path. At least one waypoint is required.
    pub fn new(waypoints: Vec<Waypoint>, end_behavior: EndBehavior) -> Result<Self> {
        if waypoints.is_empty() {
            return Err(Error::InitializationFailed(
                "animation path needs at least one waypoint".to_string(),
            ));
        }
        Ok(Self {
            waypoints,
            end_behavior,
            from: 0,
            offset: 0.0,
            direction: Direction::Forward,
            progress: 0.0,
            finished: false,
        })
    }

    /// Convenience constructor from bare positions (pace 1.0 everywhere).
    pub fn from_points(points: &[Vec3], end_behavior: EndBehavior) -> Result<Self> {
        Self::new(points.iter().copied().map(Waypoint::new).collect(), end_behavior)
    }

    // ===== GETTERS =====

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn end_behavior(&self) -> EndBehavior {
        self.end_behavior
    }

    /// Total travel budget consumed so far.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Index of the waypoint the cursor last passed.
    pub fn current_waypoint(&self) -> usize {
        self.from
    }

    /// `true` once a `Stop` path has reached its last waypoint.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current interpolated position.
    pub fn position(&self) -> Vec3 {
        let start = self.waypoints[self.from].position;
        if self.offset <= 0.0 {
            return start;
        }
        match self.next_index(self.from) {
            Some(next) => {
                let end = self.waypoints[next].position;
                let len = start.distance(end);
                if len <= SEGMENT_EPSILON {
                    start
                } else {
                    start.lerp(end, (self.offset / len).min(1.0))
                }
            }
            None => start,
        }
    }

    /// Rewind to the first waypoint and clear progress.
    pub fn reset(&mut self) {
        self.from = 0;
        self.offset = 0.0;
        self.direction = Direction::Forward;
        self.progress = 0.0;
        self.finished = false;
    }

    // ===== ADVANCE =====

    /// Advance by `elapsed × speed`. Non-positive or non-finite inputs are no-ops.
    pub fn advance(&mut self, elapsed: f32, speed: f32) -> PathAdvance {
        if !(elapsed > 0.0) || !(speed > 0.0) {
            return self.snapshot(false);
        }
        self.advance_by(elapsed * speed)
    }

    /// Advance by a raw travel distance (fixed-step camera movement).
    pub fn advance_by(&mut self, distance: f32) -> PathAdvance {
        if !(distance > 0.0) || !distance.is_finite() || self.finished {
            return self.snapshot(false);
        }
        if self.waypoints.len() < 2 {
            return self.snapshot(false);
        }

        let mut remaining = distance;
        let mut reached_end = false;

        // Whole cycles land on the same cursor state, so skip them.
        if let Some(cycle) = self.cycle_budget() {
            if cycle <= SEGMENT_EPSILON {
                return self.snapshot(false);
            }
            if remaining >= cycle {
                remaining %= cycle;
                reached_end = true;
            }
        } else if self.open_budget() <= SEGMENT_EPSILON {
            self.finish_stop();
            self.progress += distance;
            return self.snapshot(true);
        }

        while remaining > 0.0 {
            let next = match self.next_index(self.from) {
                Some(next) => next,
                None => match self.end_behavior {
                    EndBehavior::Stop => {
                        self.finish_stop();
                        break;
                    }
                    EndBehavior::Reverse | EndBehavior::Loop => {
                        // Only Reverse gets here, and only when a turnaround was
                        // not taken on arrival (whole cycles skipped above).
                        self.flip_direction();
                        reached_end = true;
                        continue;
                    }
                },
            };

            let len = self.waypoints[self.from].position.distance(self.waypoints[next].position);
            let pace = self.segment_pace(self.from, next);
            let needed = (len - self.offset).max(0.0) / pace;

            if remaining < needed {
                self.offset += remaining * pace;
                remaining = 0.0;
            } else {
                remaining -= needed;
                if self.end_behavior == EndBehavior::Loop && next == 0 {
                    reached_end = true;
                }
                self.from = next;
                self.offset = 0.0;
                // Turn around on arrival so an exact landing reports the end now.
                if self.end_behavior == EndBehavior::Reverse && self.next_index(next).is_none() {
                    self.flip_direction();
                    reached_end = true;
                }
            }
        }

        if self.end_behavior == EndBehavior::Stop && self.next_index(self.from).is_none() {
            self.finish_stop();
        }

        self.progress += distance - remaining;
        self.snapshot(reached_end)
    }

    // ===== INTERNALS =====

    fn snapshot(&self, reached_end: bool) -> PathAdvance {
        PathAdvance {
            position: self.position(),
            completed: reached_end || self.finished,
        }
    }

    fn finish_stop(&mut self) {
        self.from = self.waypoints.len() - 1;
        self.offset = 0.0;
        self.finished = true;
    }

    fn flip_direction(&mut self) {
        self.direction = match self.direction {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        };
    }

    fn next_index(&self, index: usize) -> Option<usize> {
        let count = self.waypoints.len();
        if count < 2 {
            return None;
        }
        match self.direction {
            Direction::Forward if index + 1 < count => Some(index + 1),
            Direction::Forward if self.end_behavior == EndBehavior::Loop => Some(0),
            Direction::Forward => None,
            Direction::Backward if index > 0 => Some(index - 1),
            Direction::Backward => None,
        }
    }

    /// Pace of the segment between two adjacent waypoints. The segment is
    /// owned by its lower waypoint, or by the last one for the closing segment.
    fn segment_pace(&self, a: usize, b: usize) -> f32 {
        let last = self.waypoints.len() - 1;
        let closing = self.end_behavior == EndBehavior::Loop
            && self.direction == Direction::Forward
            && a == last
            && b == 0;
        let owner = if closing { last } else { a.min(b) };
        self.waypoints[owner].effective_pace()
    }

    /// Budget to travel first → last once.
    fn open_budget(&self) -> f32 {
        self.waypoints
            .windows(2)
            .enumerate()
            .map(|(i, w)| w[0].position.distance(w[1].position) / self.segment_pace(i, i + 1))
            .sum()
    }

    /// Budget after which a Loop/Reverse path returns to the same cursor state.
    fn cycle_budget(&self) -> Option<f32> {
        match self.end_behavior {
            EndBehavior::Stop => None,
            EndBehavior::Reverse => Some(2.0 * self.open_budget()),
            EndBehavior::Loop => {
                let last = self.waypoints.len() - 1;
                let closing = self.waypoints[last].position.distance(self.waypoints[0].position)
                    / self.waypoints[last].effective_pace();
                Some(self.open_budget() + closing)
            }
        }
    }
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
