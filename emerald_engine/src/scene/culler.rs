/// Culling strategies.
///
/// A Culler sets the draw flag of every entity in a SceneRegistry from the
/// camera frustum and returns the frame's draw statistics. It runs once per
/// frame, after the camera has been refreshed.
///
/// Two passes, strictly ordered:
/// 1. geometry: each category (models, flat models, terrain, lights) is
///    tested against the same frustum, each entity independently;
/// 2. policy: flat models whose associated light is off are hidden. This
///    pass only ever clears flags.

use std::ops::Add;
use crate::camera::Frustum;
use super::entity::Cullable;
use super::parallel::map_sum;
use super::registry::SceneRegistry;

/// Visible entities and the meshes they submit, for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCount {
    pub visible: usize,
    pub meshes: usize,
}

impl Add for CategoryCount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            visible: self.visible + other.visible,
            meshes: self.meshes + other.meshes,
        }
    }
}

/// Per-frame draw statistics, reassigned by every cull pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CullStats {
    /// Visible models
    pub models: usize,
    /// Visible flat models (after light narrowing)
    pub flat_models: usize,
    /// Visible terrain patches
    pub terrain_patches: usize,
    /// Visible light sources
    pub lights: usize,
    /// Flat models hidden by the light narrowing pass
    pub narrowed: usize,
    /// Meshes of visible models, flat models and terrain patches
    pub meshes_drawn: usize,
    /// models + flat_models + terrain_patches
    pub models_drawn: usize,
    /// models_drawn + lights
    pub objects_drawn: usize,
}

impl CullStats {
    /// Combine category counts into the frame totals.
    ///
    /// `flat_models` must already be the post-narrowing count.
    pub fn from_counts(
        models: CategoryCount,
        flat_models: CategoryCount,
        terrain: CategoryCount,
        lights: CategoryCount,
        narrowed: usize,
    ) -> Self {
        let models_drawn = models.visible + flat_models.visible + terrain.visible;
        Self {
            models: models.visible,
            flat_models: flat_models.visible,
            terrain_patches: terrain.visible,
            lights: lights.visible,
            narrowed,
            meshes_drawn: models.meshes + flat_models.meshes + terrain.meshes,
            models_drawn,
            objects_drawn: models_drawn + lights.visible,
        }
    }
}

/// Frustum-test one entity and record the result on it.
pub fn cull_entity<E: Cullable + ?Sized>(frustum: &Frustum, entity: &mut E) -> CategoryCount {
    let sphere = entity.bounding_sphere();
    let visible = frustum.intersects_sphere(sphere.center, sphere.radius);
    entity.set_visible(visible);
    if visible {
        CategoryCount { visible: 1, meshes: entity.mesh_count() as usize }
    } else {
        CategoryCount::default()
    }
}

/// Frustum-test a whole category. Entities are independent of each other.
pub fn cull_category<'a, E, I>(frustum: &Frustum, entities: I) -> CategoryCount
where
    E: Cullable + Send + 'a,
    I: Iterator<Item = &'a mut E>,
{
    map_sum(entities, |entity| cull_entity(frustum, entity))
}

/// Hide every flat model whose associated light is inactive or missing.
///
/// Returns what was removed from the visible set (entities that were
/// visible before this pass).
pub fn narrow_by_light_state(scene: &mut SceneRegistry) -> CategoryCount {
    let (flat_models, lights) = scene.flat_models_with_lights();
    let mut removed = CategoryCount::default();

    for flat in flat_models {
        let Some(light_key) = flat.light() else {
            continue;
        };
        let active = lights.get(light_key).map_or(false, |light| light.is_active());
        if active {
            continue;
        }
        if flat.is_visible() {
            removed.visible += 1;
            removed.meshes += flat.mesh_count() as usize;
        }
        flat.set_visible(false);
    }

    removed
}

/// Strategy for deciding which entities are drawn this frame.
///
/// `&mut self` allows stateful implementations (e.g. temporal coherence).
pub trait Culler: Send + Sync {
    /// Set every draw flag in `scene` and return the frame's statistics.
    fn cull(&mut self, frustum: &Frustum, scene: &mut SceneRegistry) -> CullStats;
}

/// Frustum culler: bounding sphere vs. frustum for every entity,
/// then light narrowing.
pub struct FrustumCuller;

impl FrustumCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FrustumCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl Culler for FrustumCuller {
    fn cull(&mut self, frustum: &Frustum, scene: &mut SceneRegistry) -> CullStats {
        let models = cull_category(frustum, scene.models_mut());
        let flat_models = cull_category(frustum, scene.flat_models_mut());
        let terrain = cull_category(frustum, scene.terrain_mut());
        let lights = cull_category(frustum, scene.light_values_mut());

        let removed = narrow_by_light_state(scene);
        let flat_models = CategoryCount {
            visible: flat_models.visible - removed.visible,
            meshes: flat_models.meshes - removed.meshes,
        };

        CullStats::from_counts(models, flat_models, terrain, lights, removed.visible)
    }
}

/// Brute-force culler: everything is visible (no geometric test).
///
/// Baseline for comparison. Light narrowing still applies.
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BruteForceCuller {
    fn default() -> Self {
        Self::new()
    }
}

fn show<E: Cullable>(entity: &mut E) -> CategoryCount {
    entity.set_visible(true);
    CategoryCount { visible: 1, meshes: entity.mesh_count() as usize }
}

impl Culler for BruteForceCuller {
    fn cull(&mut self, _frustum: &Frustum, scene: &mut SceneRegistry) -> CullStats {
        let models = map_sum(scene.models_mut(), show);
        let flat_models = map_sum(scene.flat_models_mut(), show);
        let terrain = map_sum(scene.terrain_mut(), show);
        let lights = map_sum(scene.light_values_mut(), show);

        let removed = narrow_by_light_state(scene);
        let flat_models = CategoryCount {
            visible: flat_models.visible - removed.visible,
            meshes: flat_models.meshes - removed.meshes,
        };

        CullStats::from_counts(models, flat_models, terrain, lights, removed.visible)
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
