use glam::{Mat4, Vec3, Vec4};
use super::*;

/// Axis-aligned box |x|, |y|, |z| <= 1 written as inward planes.
fn unit_box() -> Frustum {
    Frustum::from_planes([
        Vec4::new(1.0, 0.0, 0.0, 1.0),
        Vec4::new(-1.0, 0.0, 0.0, 1.0),
        Vec4::new(0.0, 1.0, 0.0, 1.0),
        Vec4::new(0.0, -1.0, 0.0, 1.0),
        Vec4::new(0.0, 0.0, 1.0, 1.0),
        Vec4::new(0.0, 0.0, -1.0, 1.0),
    ])
}

fn looking_down_neg_z(far: f32) -> Frustum {
    let projection = Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, 1.0, 0.1, far);
    let view = Mat4::look_to_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
    Frustum::from_view_projection(&(projection * view))
}

// ============================================================================
// Frustum::from_view_projection
// ============================================================================

#[test]
fn test_planes_are_normalized() {
    let frustum = looking_down_neg_z(100.0);
    for plane in &frustum.planes {
        let normal_len = Vec3::new(plane.x, plane.y, plane.z).length();
        assert!((normal_len - 1.0).abs() < 1e-4, "plane normal should be unit length");
    }
}

#[test]
fn test_far_plane_distance_is_geometric() {
    let frustum = looking_down_neg_z(100.0);
    let d = frustum.signed_distance(PLANE_FAR, Vec3::new(0.0, 0.0, -110.0));
    assert!((d + 10.0).abs() < 1e-2, "expected about -10, got {}", d);
}

#[test]
fn test_near_plane_rejects_points_behind_camera() {
    let frustum = looking_down_neg_z(100.0);
    assert!(frustum.signed_distance(PLANE_NEAR, Vec3::new(0.0, 0.0, 5.0)) < 0.0);
    assert!(frustum.signed_distance(PLANE_NEAR, Vec3::new(0.0, 0.0, -5.0)) > 0.0);
}

// ============================================================================
// Frustum::intersects_sphere
// ============================================================================

#[test]
fn test_sphere_inside() {
    let frustum = looking_down_neg_z(100.0);
    assert!(frustum.intersects_sphere(Vec3::new(0.0, 0.0, -10.0), 1.0));
}

#[test]
fn test_sphere_behind_camera() {
    let frustum = looking_down_neg_z(100.0);
    assert!(!frustum.intersects_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0));
}

#[test]
fn test_sphere_beyond_far_plane() {
    let frustum = looking_down_neg_z(100.0);
    // 10 units past the far plane
    assert!(!frustum.intersects_sphere(Vec3::new(0.0, 0.0, -110.0), 5.0));
    assert!(frustum.intersects_sphere(Vec3::new(0.0, 0.0, -110.0), 15.0));
}

#[test]
fn test_sphere_straddling_side_plane() {
    let frustum = looking_down_neg_z(100.0);
    // 90° FOV: right plane is x = -z. Center outside by ~0.7 units.
    assert!(frustum.intersects_sphere(Vec3::new(11.0, 0.0, -10.0), 1.0));
    assert!(!frustum.intersects_sphere(Vec3::new(13.0, 0.0, -10.0), 1.0));
}

#[test]
fn test_tangent_sphere_is_visible_on_every_plane() {
    let frustum = unit_box();
    let outside_centers = [
        Vec3::new(-1.5, 0.0, 0.0),
        Vec3::new(1.5, 0.0, 0.0),
        Vec3::new(0.0, -1.5, 0.0),
        Vec3::new(0.0, 1.5, 0.0),
        Vec3::new(0.0, 0.0, -1.5),
        Vec3::new(0.0, 0.0, 1.5),
    ];
    for (index, center) in outside_centers.iter().enumerate() {
        assert_eq!(frustum.signed_distance(index, *center), -0.5);
        assert!(frustum.intersects_sphere(*center, 0.5), "plane {} tangency", index);
        assert!(!frustum.intersects_sphere(*center, 0.25), "plane {} outside", index);
    }
}

#[test]
fn test_nan_sphere_is_not_visible() {
    let frustum = unit_box();
    assert!(!frustum.intersects_sphere(Vec3::new(f32::NAN, 0.0, 0.0), 1.0));
    assert!(!frustum.intersects_sphere(Vec3::ZERO, f32::NAN));
}

// ============================================================================
// Plane constants
// ============================================================================

#[test]
fn test_plane_constants() {
    assert_eq!(PLANE_LEFT, 0);
    assert_eq!(PLANE_RIGHT, 1);
    assert_eq!(PLANE_BOTTOM, 2);
    assert_eq!(PLANE_TOP, 3);
    assert_eq!(PLANE_NEAR, 4);
    assert_eq!(PLANE_FAR, 5);
}
