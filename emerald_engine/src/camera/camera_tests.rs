use glam::Vec3;
use crate::animation::{AnimationPath, EndBehavior};
use crate::config::CameraConfig;
use super::*;

fn test_camera() -> Camera {
    Camera::new(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, -1.0),
        Projection::new(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0),
    )
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_camera_is_refreshed_and_free() {
    let camera = test_camera();
    assert!(!camera.is_dirty());
    assert!(camera.can_move_free());
    assert!(camera.can_look_free());
    assert!(!camera.height_lock());
    assert!(camera.frustum().intersects_sphere(Vec3::new(0.0, 0.0, -10.0), 1.0));
}

#[test]
fn test_projection_from_config() {
    let config = CameraConfig::default();
    let projection = Projection::from_config(&config);
    assert!((projection.fov_y_radians - 60f32.to_radians()).abs() < 1e-6);
    assert_eq!(projection.near, 0.1);
    assert_eq!(projection.far, 500.0);
}

// ============================================================================
// Dirty tracking
// ============================================================================

#[test]
fn test_setters_mark_dirty_until_refresh() {
    let mut camera = test_camera();
    let before = *camera.frustum();

    camera.set_position(Vec3::new(0.0, 0.0, 50.0));
    assert!(camera.is_dirty());
    // Derived state untouched until refresh
    assert_eq!(*camera.frustum(), before);

    camera.refresh();
    assert!(!camera.is_dirty());
    assert_ne!(*camera.frustum(), before);
}

#[test]
fn test_translate_moves_look_point_too() {
    let mut camera = test_camera();
    camera.translate(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(camera.position(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(camera.look_at(), Vec3::new(1.0, 2.0, 2.0));
    assert_eq!(camera.forward(), Vec3::NEG_Z);
}

#[test]
fn test_set_height_only_changes_y() {
    let mut camera = test_camera();
    camera.set_position(Vec3::new(5.0, 1.0, 5.0));
    camera.set_height(10.0);
    assert_eq!(camera.position(), Vec3::new(5.0, 10.0, 5.0));
}

// ============================================================================
// Free look
// ============================================================================

#[test]
fn test_rotate_yaw_keeps_distance() {
    let mut camera = test_camera();
    camera.rotate(std::f32::consts::FRAC_PI_2, 0.0);
    let offset = camera.look_at() - camera.position();
    assert!((offset.length() - 1.0).abs() < 1e-5);
    assert!((offset - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
}

#[test]
fn test_rotate_refuses_pitch_onto_up_axis() {
    let mut camera = test_camera();
    camera.rotate(0.0, std::f32::consts::FRAC_PI_2);
    assert!(camera.forward().dot(Vec3::Y).abs() < 0.999);
    camera.refresh();
    assert!(camera.view_matrix().is_finite());
}

#[test]
fn test_degenerate_look_point_still_refreshes() {
    let mut camera = test_camera();
    camera.set_look_at(camera.position());
    camera.refresh();
    assert!(camera.view_matrix().is_finite());
    assert_eq!(camera.forward(), Vec3::NEG_Z);
}

// ============================================================================
// Flags
// ============================================================================

#[test]
fn test_toggle_flags() {
    let mut camera = test_camera();
    camera.toggle_flags(CameraFlags::FREE_MOVE | CameraFlags::HEIGHT_LOCK);
    assert!(!camera.can_move_free());
    assert!(camera.height_lock());
    assert!(camera.can_look_free());

    camera.set_flags(CameraFlags::empty());
    assert!(!camera.can_look_free());
}

// ============================================================================
// Path following
// ============================================================================

#[test]
fn test_move_along_path_without_path_is_none() {
    let mut camera = test_camera();
    assert!(camera.move_along_path(0.1).is_none());
    assert!(camera.move_look_point_along_path(0.1).is_none());
    assert!(!camera.is_dirty());
}

#[test]
fn test_move_along_path_uses_fixed_step() {
    let mut camera = test_camera();
    camera.set_path(Some(AnimationPath::from_points(
        &[Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)],
        EndBehavior::Stop,
    ).unwrap()));

    camera.move_along_path(0.5);
    camera.move_along_path(0.5);

    assert!((camera.position() - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
    assert!(camera.is_dirty());
}

#[test]
fn test_move_look_point_along_path() {
    let mut camera = test_camera();
    camera.set_look_path(Some(AnimationPath::from_points(
        &[Vec3::new(0.0, 0.0, -5.0), Vec3::new(10.0, 0.0, -5.0)],
        EndBehavior::Loop,
    ).unwrap()));

    let advance = camera.move_look_point_along_path(2.0).unwrap();
    assert!(!advance.completed);
    assert!((camera.look_at() - Vec3::new(2.0, 0.0, -5.0)).length() < 1e-5);
}
