/// Entity categories for the scene registries.
///
/// Models, flat (billboard) models, terrain patches and lights share two
/// capabilities: a bounding sphere with a draw flag (`Cullable`), and for
/// everything except terrain an optional motion path (`PathFollower`).
/// Geometry is fixed at load; only draw flags, path cursors and
/// path-driven positions change per frame.

use glam::Vec3;
use slotmap::new_key_type;
use crate::animation::AnimationPath;
use crate::error::{Error, Result};

// ===== SLOT MAP KEYS =====

new_key_type! {
    /// Stable key for a Model in a SceneRegistry.
    pub struct ModelKey;
    /// Stable key for a FlatModel in a SceneRegistry.
    pub struct FlatModelKey;
    /// Stable key for a TerrainPatch in a SceneRegistry.
    pub struct TerrainKey;
    /// Stable key for a Light in a SceneRegistry.
    pub struct LightKey;
}

// ===== CAPABILITIES =====

/// World-space bounding sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

/// Anything with a bounding sphere and a per-frame draw flag.
pub trait Cullable {
    /// World-space bounding sphere (radius already scaled).
    fn bounding_sphere(&self) -> BoundingSphere;

    /// Draw flag from the latest cull pass.
    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// Meshes submitted when this entity is drawn.
    fn mesh_count(&self) -> u32 {
        1
    }
}

/// Anything that may follow an animation path.
pub trait PathFollower {
    fn animation_path_mut(&mut self) -> Option<&mut AnimationPath>;

    fn has_animation_path(&self) -> bool;

    /// Move to a position produced by the path.
    fn set_path_position(&mut self, position: Vec3);
}

// ===== MODEL =====

/// A renderable model.
#[derive(Debug, Clone)]
pub struct Model {
    name: String,
    center: Vec3,
    base_radius: f32,
    scale: f32,
    mesh_count: u32,
    path: Option<AnimationPath>,
    draw_me: bool,
}

impl Model {
    /// Model with scale 1 and a single mesh. Starts hidden until culled.
    pub fn new(name: impl Into<String>, center: Vec3, base_radius: f32) -> Self {
        Self {
            name: name.into(),
            center,
            base_radius,
            scale: 1.0,
            mesh_count: 1,
            path: None,
            draw_me: false,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_mesh_count(mut self, mesh_count: u32) -> Self {
        self.mesh_count = mesh_count;
        self
    }

    /// Attach a path. The model is placed at the path's current position.
    pub fn with_path(mut self, path: AnimationPath) -> Self {
        self.center = path.position();
        self.path = Some(path);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// `base_radius × scale`
    pub fn effective_radius(&self) -> f32 {
        self.base_radius * self.scale
    }

    pub fn path(&self) -> Option<&AnimationPath> {
        self.path.as_ref()
    }
}

impl Cullable for Model {
    fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere {
            center: self.center,
            radius: self.effective_radius(),
        }
    }

    fn is_visible(&self) -> bool {
        self.draw_me
    }

    fn set_visible(&mut self, visible: bool) {
        self.draw_me = visible;
    }

    fn mesh_count(&self) -> u32 {
        self.mesh_count
    }
}

impl PathFollower for Model {
    fn animation_path_mut(&mut self) -> Option<&mut AnimationPath> {
        self.path.as_mut()
    }

    fn has_animation_path(&self) -> bool {
        self.path.is_some()
    }

    fn set_path_position(&mut self, position: Vec3) {
        self.center = position;
    }
}

// ===== FLAT MODEL =====

/// A flat/billboard model, optionally tied to a light (e.g. a lamp glow).
///
/// When the associated light is inactive the flat model is never drawn.
#[derive(Debug, Clone)]
pub struct FlatModel {
    model: Model,
    light: Option<LightKey>,
}

impl FlatModel {
    pub fn new(model: Model) -> Self {
        Self { model, light: None }
    }

    pub fn with_light(mut self, light: LightKey) -> Self {
        self.light = Some(light);
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn light(&self) -> Option<LightKey> {
        self.light
    }
}

impl Cullable for FlatModel {
    fn bounding_sphere(&self) -> BoundingSphere {
        self.model.bounding_sphere()
    }

    fn is_visible(&self) -> bool {
        self.model.is_visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.model.set_visible(visible);
    }

    fn mesh_count(&self) -> u32 {
        self.model.mesh_count()
    }
}

impl PathFollower for FlatModel {
    fn animation_path_mut(&mut self) -> Option<&mut AnimationPath> {
        self.model.animation_path_mut()
    }

    fn has_animation_path(&self) -> bool {
        self.model.has_animation_path()
    }

    fn set_path_position(&mut self, position: Vec3) {
        self.model.set_path_position(position);
    }
}

// ===== TERRAIN PATCH =====

/// A rectangular heightfield tile on the XZ plane.
///
/// Heights are a `columns × rows` grid, row-major, rows along +Z,
/// spanning `[origin, origin + size]` on both axes.
#[derive(Debug, Clone)]
pub struct TerrainPatch {
    name: String,
    origin_x: f32,
    origin_z: f32,
    size_x: f32,
    size_z: f32,
    columns: usize,
    rows: usize,
    heights: Vec<f32>,
    mesh_count: u32,
    bounds: BoundingSphere,
    draw_me: bool,
}

impl TerrainPatch {
    pub fn new(
        name: impl Into<String>,
        origin_x: f32,
        origin_z: f32,
        size_x: f32,
        size_z: f32,
        columns: usize,
        rows: usize,
        heights: Vec<f32>,
    ) -> Result<Self> {
        let name = name.into();
        if columns < 2 || rows < 2 {
            return Err(Error::InitializationFailed(format!(
                "terrain '{}' needs at least a 2x2 height grid, got {}x{}", name, columns, rows
            )));
        }
        if heights.len() != columns * rows {
            return Err(Error::InitializationFailed(format!(
                "terrain '{}' expects {} heights, got {}", name, columns * rows, heights.len()
            )));
        }
        if !(size_x > 0.0 && size_z > 0.0) {
            return Err(Error::InitializationFailed(format!(
                "terrain '{}' needs a positive size, got {}x{}", name, size_x, size_z
            )));
        }

        let (min_h, max_h) = heights
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &h| (lo.min(h), hi.max(h)));
        let bounds = BoundingSphere {
            center: Vec3::new(
                origin_x + size_x * 0.5,
                (min_h + max_h) * 0.5,
                origin_z + size_z * 0.5,
            ),
            radius: 0.5 * Vec3::new(size_x, max_h - min_h, size_z).length(),
        };

        Ok(Self {
            name,
            origin_x,
            origin_z,
            size_x,
            size_z,
            columns,
            rows,
            heights,
            mesh_count: 1,
            bounds,
            draw_me: false,
        })
    }

    /// A level patch at constant `height`.
    pub fn flat(
        name: impl Into<String>,
        origin_x: f32,
        origin_z: f32,
        size_x: f32,
        size_z: f32,
        height: f32,
    ) -> Result<Self> {
        Self::new(name, origin_x, origin_z, size_x, size_z, 2, 2, vec![height; 4])
    }

    pub fn with_mesh_count(mut self, mesh_count: u32) -> Self {
        self.mesh_count = mesh_count;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` if (x, z) lies on this patch. Min edges inclusive, max edges exclusive.
    pub fn contains_point(&self, x: f32, z: f32) -> bool {
        x >= self.origin_x
            && x < self.origin_x + self.size_x
            && z >= self.origin_z
            && z < self.origin_z + self.size_z
    }

    /// Bilinear surface height at (x, z), clamped to the patch edges.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let max_col = (self.columns - 1) as f32;
        let max_row = (self.rows - 1) as f32;
        let u = ((x - self.origin_x) / self.size_x * max_col).clamp(0.0, max_col);
        let v = ((z - self.origin_z) / self.size_z * max_row).clamp(0.0, max_row);

        let c0 = (u.floor() as usize).min(self.columns - 2);
        let r0 = (v.floor() as usize).min(self.rows - 2);
        let fu = u - c0 as f32;
        let fv = v - r0 as f32;

        let h = |c: usize, r: usize| self.heights[r * self.columns + c];
        let near = h(c0, r0) + (h(c0 + 1, r0) - h(c0, r0)) * fu;
        let far = h(c0, r0 + 1) + (h(c0 + 1, r0 + 1) - h(c0, r0 + 1)) * fu;
        near + (far - near) * fv
    }
}

impl Cullable for TerrainPatch {
    fn bounding_sphere(&self) -> BoundingSphere {
        self.bounds
    }

    fn is_visible(&self) -> bool {
        self.draw_me
    }

    fn set_visible(&mut self, visible: bool) {
        self.draw_me = visible;
    }

    fn mesh_count(&self) -> u32 {
        self.mesh_count
    }
}

// ===== LIGHT =====

/// A point light source. Culled by its influence sphere.
#[derive(Debug, Clone)]
pub struct Light {
    name: String,
    position: Vec3,
    radius: f32,
    active: bool,
    path: Option<AnimationPath>,
    draw_me: bool,
}

impl Light {
    /// Active light, hidden until culled.
    pub fn new(name: impl Into<String>, position: Vec3, radius: f32) -> Self {
        Self {
            name: name.into(),
            position,
            radius,
            active: true,
            path: None,
            draw_me: false,
        }
    }

    pub fn with_path(mut self, path: AnimationPath) -> Self {
        self.position = path.position();
        self.path = Some(path);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
    }
}

impl Cullable for Light {
    fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere {
            center: self.position,
            radius: self.radius,
        }
    }

    fn is_visible(&self) -> bool {
        self.draw_me
    }

    fn set_visible(&mut self, visible: bool) {
        self.draw_me = visible;
    }

    fn mesh_count(&self) -> u32 {
        0
    }
}

impl PathFollower for Light {
    fn animation_path_mut(&mut self) -> Option<&mut AnimationPath> {
        self.path.as_mut()
    }

    fn has_animation_path(&self) -> bool {
        self.path.is_some()
    }

    fn set_path_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
