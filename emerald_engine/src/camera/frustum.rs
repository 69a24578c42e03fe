/// Frustum: six clipping planes for visibility culling.
///
/// Each plane is a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the unit inward-pointing normal
/// - D is the signed distance term
/// - A point P is inside the half-space if dot(normal, P) + D >= 0

use glam::{Mat4, Vec3, Vec4};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes: left, right, bottom, top, near, far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method with a [0, 1] clip depth range
    /// (glam's `perspective_rh`). Each plane is normalized so that
    /// (A, B, C) is a unit vector.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let m = vp.to_cols_array_2d();

        let mut planes = [
            // Left:   row3 + row0
            Vec4::new(m[0][3] + m[0][0], m[1][3] + m[1][0], m[2][3] + m[2][0], m[3][3] + m[3][0]),
            // Right:  row3 - row0
            Vec4::new(m[0][3] - m[0][0], m[1][3] - m[1][0], m[2][3] - m[2][0], m[3][3] - m[3][0]),
            // Bottom: row3 + row1
            Vec4::new(m[0][3] + m[0][1], m[1][3] + m[1][1], m[2][3] + m[2][1], m[3][3] + m[3][1]),
            // Top:    row3 - row1
            Vec4::new(m[0][3] - m[0][1], m[1][3] - m[1][1], m[2][3] - m[2][1], m[3][3] - m[3][1]),
            // Near:   row2 (z_clip >= 0)
            Vec4::new(m[0][2], m[1][2], m[2][2], m[3][2]),
            // Far:    row3 - row2
            Vec4::new(m[0][3] - m[0][2], m[1][3] - m[1][2], m[2][3] - m[2][2], m[3][3] - m[3][2]),
        ];

        for plane in &mut planes {
            let normal_len = Vec3::new(plane.x, plane.y, plane.z).length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Build a frustum from explicit planes (normals must be unit length).
    pub fn from_planes(planes: [Vec4; 6]) -> Self {
        Self { planes }
    }

    /// Signed distance from `point` to plane `index` (positive = inside).
    pub fn signed_distance(&self, index: usize, point: Vec3) -> f32 {
        let plane = self.planes[index];
        Vec3::new(plane.x, plane.y, plane.z).dot(point) + plane.w
    }

    /// Test a bounding sphere against the frustum.
    ///
    /// The sphere is visible unless it lies entirely outside some plane.
    /// Tangency (distance == -radius) counts as visible. NaN in the center
    /// or radius makes every comparison false, so the sphere is rejected.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        for index in 0..self.planes.len() {
            let distance = self.signed_distance(index, center);
            if !(distance >= -radius) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
