/// Update strategies.
///
/// An Updater moves every path-following entity (models, flat models,
/// lights) along its animation path. Called once per frame after the
/// camera update and before culling. Terrain never moves.

use std::ops::Add;
use crate::config::AnimationConfig;
use super::entity::PathFollower;
use super::parallel::map_sum;
use super::registry::SceneRegistry;

/// Per-frame animation statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationStats {
    /// Entities whose path cursor moved this frame
    pub advanced: usize,
    /// Entities whose path reports completion (wrap, turnaround, finished stop)
    pub completed: usize,
    /// Path positions that were not finite and were not applied
    pub rejected: usize,
}

impl Add for AnimationStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            advanced: self.advanced + other.advanced,
            completed: self.completed + other.completed,
            rejected: self.rejected + other.rejected,
        }
    }
}

/// Advance one entity by `elapsed × speed` and move it to the new position.
pub fn advance_entity<E: PathFollower + ?Sized>(
    entity: &mut E,
    elapsed: f32,
    speed: f32,
) -> AnimationStats {
    let Some(path) = entity.animation_path_mut() else {
        return AnimationStats::default();
    };

    let before = path.progress();
    let advance = path.advance(elapsed, speed);
    let moved = path.progress() > before;

    let mut stats = AnimationStats {
        advanced: moved as usize,
        completed: advance.completed as usize,
        rejected: 0,
    };
    if !moved {
        return stats;
    }
    if advance.position.is_finite() {
        entity.set_path_position(advance.position);
    } else {
        stats.rejected = 1;
    }
    stats
}

/// Strategy for per-frame entity animation.
///
/// `&mut self` allows stateful implementations (e.g. time accumulation).
pub trait Updater: Send + Sync {
    /// Advance all animated entities. `elapsed` is the renderer's
    /// previous-frame duration in milliseconds.
    fn update(&mut self, scene: &mut SceneRegistry, elapsed: f32) -> AnimationStats;
}

/// No-op updater: nothing moves.
///
/// For static scenes and tests that isolate culling.
pub struct NoOpUpdater;

impl NoOpUpdater {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpUpdater {
    fn default() -> Self {
        Self::new()
    }
}

impl Updater for NoOpUpdater {
    fn update(&mut self, _scene: &mut SceneRegistry, _elapsed: f32) -> AnimationStats {
        AnimationStats::default()
    }
}

/// Path updater: every entity with a path advances by `elapsed × speed`.
pub struct PathUpdater {
    speed: f32,
}

impl PathUpdater {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    pub fn from_config(config: &AnimationConfig) -> Self {
        Self::new(config.speed)
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl Default for PathUpdater {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

impl Updater for PathUpdater {
    fn update(&mut self, scene: &mut SceneRegistry, elapsed: f32) -> AnimationStats {
        let speed = self.speed;

        map_sum(scene.models_mut(), |m| advance_entity(m, elapsed, speed))
            + map_sum(scene.flat_models_mut(), |f| advance_entity(f, elapsed, speed))
            + map_sum(scene.light_values_mut(), |l| advance_entity(l, elapsed, speed))
    }
}

#[cfg(test)]
#[path = "updater_tests.rs"]
mod tests;
