use glam::Vec3;
use super::*;
use crate::animation::EndBehavior;

fn ramp() -> TerrainPatch {
    // Height rises from 0 at z = 0 to 4 at z = 10
    TerrainPatch::new("ramp", 0.0, 0.0, 10.0, 10.0, 2, 2, vec![0.0, 0.0, 4.0, 4.0]).unwrap()
}

// ============================================================================
// Model
// ============================================================================

#[test]
fn test_model_defaults() {
    let model = Model::new("crate", Vec3::new(1.0, 2.0, 3.0), 2.0);
    assert_eq!(model.name(), "crate");
    assert_eq!(model.scale(), 1.0);
    assert_eq!(model.mesh_count(), 1);
    assert!(!model.is_visible());
    assert!(!model.has_animation_path());
}

#[test]
fn test_model_radius_is_scaled() {
    let model = Model::new("crate", Vec3::ZERO, 2.0).with_scale(1.5);
    assert_eq!(model.effective_radius(), 3.0);
    assert_eq!(model.bounding_sphere().radius, 3.0);
    assert_eq!(model.base_radius(), 2.0);
}

#[test]
fn test_model_with_path_starts_on_path() {
    let path = AnimationPath::from_points(
        &[Vec3::new(5.0, 0.0, 0.0), Vec3::new(6.0, 0.0, 0.0)],
        EndBehavior::Loop,
    )
    .unwrap();
    let model = Model::new("bird", Vec3::ZERO, 1.0).with_path(path);
    assert_eq!(model.center(), Vec3::new(5.0, 0.0, 0.0));
    assert!(model.path().is_some());
}

#[test]
fn test_model_visibility_flag() {
    let mut model = Model::new("crate", Vec3::ZERO, 1.0);
    model.set_visible(true);
    assert!(model.is_visible());
    model.set_visible(false);
    assert!(!model.is_visible());
}

// ============================================================================
// FlatModel
// ============================================================================

#[test]
fn test_flat_model_delegates_to_model() {
    let mut flat = FlatModel::new(Model::new("glow", Vec3::new(0.0, 3.0, 0.0), 0.5).with_mesh_count(2));
    assert_eq!(flat.bounding_sphere().center, Vec3::new(0.0, 3.0, 0.0));
    assert_eq!(flat.mesh_count(), 2);
    assert!(flat.light().is_none());

    flat.set_visible(true);
    assert!(flat.model().is_visible());

    flat.set_path_position(Vec3::ONE);
    assert_eq!(flat.model().center(), Vec3::ONE);
}

// ============================================================================
// TerrainPatch
// ============================================================================

#[test]
fn test_terrain_rejects_bad_grids() {
    assert!(TerrainPatch::new("t", 0.0, 0.0, 1.0, 1.0, 1, 2, vec![0.0, 0.0]).is_err());
    assert!(TerrainPatch::new("t", 0.0, 0.0, 1.0, 1.0, 2, 2, vec![0.0; 3]).is_err());
    assert!(TerrainPatch::new("t", 0.0, 0.0, 0.0, 1.0, 2, 2, vec![0.0; 4]).is_err());
    assert!(TerrainPatch::new("t", 0.0, 0.0, 1.0, f32::NAN, 2, 2, vec![0.0; 4]).is_err());
}

#[test]
fn test_terrain_contains_point_edges() {
    let patch = ramp();
    assert!(patch.contains_point(0.0, 0.0));
    assert!(patch.contains_point(9.99, 9.99));
    assert!(!patch.contains_point(10.0, 5.0));
    assert!(!patch.contains_point(5.0, 10.0));
    assert!(!patch.contains_point(-0.01, 5.0));
}

#[test]
fn test_terrain_height_is_bilinear() {
    let patch = ramp();
    assert!((patch.height_at(5.0, 0.0) - 0.0).abs() < 1e-5);
    assert!((patch.height_at(5.0, 5.0) - 2.0).abs() < 1e-5);
    assert!((patch.height_at(2.0, 7.5) - 3.0).abs() < 1e-5);
}

#[test]
fn test_terrain_height_is_clamped_outside() {
    let patch = ramp();
    assert!((patch.height_at(5.0, 50.0) - 4.0).abs() < 1e-5);
    assert!((patch.height_at(-5.0, -5.0) - 0.0).abs() < 1e-5);
}

#[test]
fn test_flat_terrain_height() {
    let patch = TerrainPatch::flat("plain", -10.0, -10.0, 20.0, 20.0, 2.0).unwrap();
    assert_eq!(patch.height_at(3.0, -4.0), 2.0);
}

#[test]
fn test_terrain_bounds_enclose_corners() {
    let patch = ramp();
    let sphere = patch.bounding_sphere();
    for corner in [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(0.0, 4.0, 10.0),
        Vec3::new(10.0, 4.0, 10.0),
    ] {
        assert!(sphere.center.distance(corner) <= sphere.radius + 1e-4);
    }
}

// ============================================================================
// Light
// ============================================================================

#[test]
fn test_light_toggle() {
    let mut light = Light::new("lamp", Vec3::ZERO, 4.0);
    assert!(light.is_active());
    light.toggle();
    assert!(!light.is_active());
    light.set_active(true);
    assert!(light.is_active());
}

#[test]
fn test_light_has_no_meshes() {
    let light = Light::new("lamp", Vec3::ONE, 4.0);
    assert_eq!(light.mesh_count(), 0);
    assert_eq!(light.bounding_sphere(), BoundingSphere { center: Vec3::ONE, radius: 4.0 });
}
