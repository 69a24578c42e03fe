/// SceneRegistry: the four entity registries of a loaded scene.
///
/// Populated once at load time and mutated in place every frame. Entities
/// are never removed, so SlotMap iteration follows insertion order (terrain
/// lookups rely on this: the first inserted patch containing a point wins).

use slotmap::SlotMap;
use super::entity::{
    FlatModel, FlatModelKey, Light, LightKey, Model, ModelKey, TerrainKey, TerrainPatch,
};

/// Owned entity registries passed into the frame orchestrator.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    models: SlotMap<ModelKey, Model>,
    flat_models: SlotMap<FlatModelKey, FlatModel>,
    terrain: SlotMap<TerrainKey, TerrainPatch>,
    lights: SlotMap<LightKey, Light>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== INSERTION (load time) =====

    pub fn add_model(&mut self, model: Model) -> ModelKey {
        self.models.insert(model)
    }

    pub fn add_flat_model(&mut self, flat_model: FlatModel) -> FlatModelKey {
        self.flat_models.insert(flat_model)
    }

    pub fn add_terrain(&mut self, patch: TerrainPatch) -> TerrainKey {
        self.terrain.insert(patch)
    }

    pub fn add_light(&mut self, light: Light) -> LightKey {
        self.lights.insert(light)
    }

    // ===== ACCESS =====

    pub fn model(&self, key: ModelKey) -> Option<&Model> {
        self.models.get(key)
    }

    pub fn flat_model(&self, key: FlatModelKey) -> Option<&FlatModel> {
        self.flat_models.get(key)
    }

    pub fn terrain_patch(&self, key: TerrainKey) -> Option<&TerrainPatch> {
        self.terrain.get(key)
    }

    pub fn light(&self, key: LightKey) -> Option<&Light> {
        self.lights.get(key)
    }

    pub fn light_mut(&mut self, key: LightKey) -> Option<&mut Light> {
        self.lights.get_mut(key)
    }

    pub fn models(&self) -> impl Iterator<Item = (ModelKey, &Model)> + '_ {
        self.models.iter()
    }

    pub fn flat_models(&self) -> impl Iterator<Item = (FlatModelKey, &FlatModel)> + '_ {
        self.flat_models.iter()
    }

    pub fn terrain(&self) -> impl Iterator<Item = (TerrainKey, &TerrainPatch)> + '_ {
        self.terrain.iter()
    }

    pub fn lights(&self) -> impl Iterator<Item = (LightKey, &Light)> + '_ {
        self.lights.iter()
    }

    pub fn lights_mut(&mut self) -> impl Iterator<Item = (LightKey, &mut Light)> + '_ {
        self.lights.iter_mut()
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn flat_model_count(&self) -> usize {
        self.flat_models.len()
    }

    pub fn terrain_count(&self) -> usize {
        self.terrain.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// First terrain patch (in load order) containing (x, z).
    pub fn terrain_at(&self, x: f32, z: f32) -> Option<&TerrainPatch> {
        self.terrain.values().find(|patch| patch.contains_point(x, z))
    }

    /// `false` for inactive lights and for keys that do not resolve.
    pub fn light_is_active(&self, key: LightKey) -> bool {
        self.lights.get(key).map_or(false, Light::is_active)
    }

    // ===== PER-FRAME MUTATION (crate-internal) =====

    pub(crate) fn models_mut(&mut self) -> impl Iterator<Item = &mut Model> + '_ {
        self.models.values_mut()
    }

    pub(crate) fn flat_models_mut(&mut self) -> impl Iterator<Item = &mut FlatModel> + '_ {
        self.flat_models.values_mut()
    }

    pub(crate) fn terrain_mut(&mut self) -> impl Iterator<Item = &mut TerrainPatch> + '_ {
        self.terrain.values_mut()
    }

    pub(crate) fn light_values_mut(&mut self) -> impl Iterator<Item = &mut Light> + '_ {
        self.lights.values_mut()
    }

    /// Flat models (mutable) alongside the lights they reference (shared).
    pub(crate) fn flat_models_with_lights(
        &mut self,
    ) -> (impl Iterator<Item = &mut FlatModel> + '_, &SlotMap<LightKey, Light>) {
        (self.flat_models.values_mut(), &self.lights)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
