/// Camera: position, look point, projection and the state derived from them.
///
/// The view matrix and frustum are caches of (position, look point,
/// projection). Every setter marks the camera dirty; `refresh()` rebuilds
/// both. The frame orchestrator calls `refresh()` after all camera movement
/// and before culling, so culling never sees a stale frustum.

use bitflags::bitflags;
use glam::{Mat4, Quat, Vec3};
use crate::animation::{AnimationPath, PathAdvance};
use crate::config::CameraConfig;
use super::frustum::Frustum;

bitflags! {
    /// Camera capability flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CameraFlags: u32 {
        /// Position is user-controlled; the motion path is not followed.
        const FREE_MOVE   = 1 << 0;
        /// Look point is user-controlled; the look path is not followed.
        const FREE_LOOK   = 1 << 1;
        /// Height is clamped to the terrain surface plus an offset.
        const HEIGHT_LOCK = 1 << 2;
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y_radians: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn new(fov_y_radians: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self { fov_y_radians, aspect, near, far }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.fov_y_degrees.to_radians(), config.aspect, config.near, config.far)
    }

    /// Right-handed perspective matrix with [0, 1] depth.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_radians, self.aspect, self.near, self.far)
    }
}

/// View camera.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    look_at: Vec3,
    up: Vec3,
    projection: Projection,
    flags: CameraFlags,
    path: Option<AnimationPath>,
    look_path: Option<AnimationPath>,
    view_matrix: Mat4,
    frustum: Frustum,
    dirty: bool,
}

impl Camera {
    /// Create a camera. Derived state is computed immediately.
    ///
    /// Starts in free-move and free-look mode without height lock.
    pub fn new(position: Vec3, look_at: Vec3, projection: Projection) -> Self {
        let mut camera = Self {
            position,
            look_at,
            up: Vec3::Y,
            projection,
            flags: CameraFlags::FREE_MOVE | CameraFlags::FREE_LOOK,
            path: None,
            look_path: None,
            view_matrix: Mat4::IDENTITY,
            frustum: Frustum::from_view_projection(&Mat4::IDENTITY),
            dirty: true,
        };
        camera.refresh();
        camera
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn flags(&self) -> CameraFlags {
        self.flags
    }

    pub fn can_move_free(&self) -> bool {
        self.flags.contains(CameraFlags::FREE_MOVE)
    }

    pub fn can_look_free(&self) -> bool {
        self.flags.contains(CameraFlags::FREE_LOOK)
    }

    pub fn height_lock(&self) -> bool {
        self.flags.contains(CameraFlags::HEIGHT_LOCK)
    }

    pub fn path(&self) -> Option<&AnimationPath> {
        self.path.as_ref()
    }

    pub fn look_path(&self) -> Option<&AnimationPath> {
        self.look_path.as_ref()
    }

    /// View matrix as of the last `refresh()`.
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection.matrix() * self.view_matrix
    }

    /// Frustum as of the last `refresh()`.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// `true` if position, look point or projection changed since `refresh()`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Unit vector from the position toward the look point.
    pub fn forward(&self) -> Vec3 {
        (self.look_at - self.position).try_normalize().unwrap_or(Vec3::NEG_Z)
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.dirty = true;
    }

    /// Move position and look point together.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        self.look_at += delta;
        self.dirty = true;
    }

    pub fn set_height(&mut self, height: f32) {
        self.position.y = height;
        self.dirty = true;
    }

    pub fn set_look_at(&mut self, look_at: Vec3) {
        self.look_at = look_at;
        self.dirty = true;
    }

    /// Turn the look point around the position (free look).
    ///
    /// `yaw` rotates around world up, `pitch` around the camera's right axis.
    /// Pitch is refused when it would bring the view onto the up axis.
    pub fn rotate(&mut self, yaw: f32, pitch: f32) {
        let offset = self.look_at - self.position;
        let mut rotated = Quat::from_axis_angle(self.up, yaw) * offset;

        if let Some(right) = rotated.cross(self.up).try_normalize() {
            let pitched = Quat::from_axis_angle(right, pitch) * rotated;
            let alignment = pitched.normalize_or_zero().dot(self.up).abs();
            if alignment < 0.999 {
                rotated = pitched;
            }
        }

        self.look_at = self.position + rotated;
        self.dirty = true;
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
        self.dirty = true;
    }

    pub fn set_flags(&mut self, flags: CameraFlags) {
        self.flags = flags;
    }

    pub fn toggle_flags(&mut self, flags: CameraFlags) {
        self.flags.toggle(flags);
    }

    pub fn set_path(&mut self, path: Option<AnimationPath>) {
        self.path = path;
    }

    pub fn set_look_path(&mut self, path: Option<AnimationPath>) {
        self.look_path = path;
    }

    // ===== PATH FOLLOWING =====

    /// Advance the motion path by a fixed step and move there.
    ///
    /// Returns `None` when the camera has no motion path.
    pub fn move_along_path(&mut self, step: f32) -> Option<PathAdvance> {
        let advance = self.path.as_mut()?.advance_by(step);
        if advance.position.is_finite() {
            self.position = advance.position;
            self.dirty = true;
        }
        Some(advance)
    }

    /// Advance the look path by a fixed step and look there.
    pub fn move_look_point_along_path(&mut self, step: f32) -> Option<PathAdvance> {
        let advance = self.look_path.as_mut()?.advance_by(step);
        if advance.position.is_finite() {
            self.look_at = advance.position;
            self.dirty = true;
        }
        Some(advance)
    }

    // ===== DERIVED STATE =====

    /// Rebuild the view matrix and frustum from the current state.
    pub fn refresh(&mut self) {
        self.update_view_matrix();
        self.update_culling_frustum();
        self.dirty = false;
    }

    fn update_view_matrix(&mut self) {
        let forward = self.forward();
        let up = if forward.dot(self.up).abs() > 0.999 { Vec3::Z } else { self.up };
        self.view_matrix = Mat4::look_to_rh(self.position, forward, up);
    }

    fn update_culling_frustum(&mut self) {
        self.frustum = Frustum::from_view_projection(&self.view_projection_matrix());
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
