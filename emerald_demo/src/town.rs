//! Procedural scene: a hilly terrain grid with houses, cars, street lamps
//! and a camera tour.

use emerald_engine::emerald::animation::{AnimationPath, EndBehavior, Waypoint};
use emerald_engine::emerald::camera::{Camera, Projection};
use emerald_engine::emerald::config::CameraConfig;
use emerald_engine::emerald::frame::SceneLoader;
use emerald_engine::emerald::scene::{FlatModel, Light, Model, SceneRegistry, TerrainPatch};
use emerald_engine::emerald::{Error, Result};
use emerald_engine::glam::Vec3;
use emerald_engine::engine_info;

const SOURCE: &str = "emerald::TownLoader";

const PATCHES_PER_SIDE: usize = 4;
const PATCH_SIZE: f32 = 50.0;
const HEIGHT_SAMPLES: usize = 9;
const HOUSE_SPACING: f32 = 20.0;
const LAMP_SPACING: f32 = 30.0;

/// Builds the town for the descriptor `"town"`.
pub struct TownLoader {
    projection: Projection,
}

impl TownLoader {
    pub const DESCRIPTOR: &'static str = "town";

    pub fn new(camera: &CameraConfig) -> Self {
        Self {
            projection: Projection::from_config(camera),
        }
    }
}

/// Half the town's extent; the town is centered on the origin.
fn half_extent() -> f32 {
    PATCHES_PER_SIDE as f32 * PATCH_SIZE * 0.5
}

/// Gentle rolling hills.
fn ground_height(x: f32, z: f32) -> f32 {
    3.0 * (x * 0.04).sin() * (z * 0.03).cos() + 2.0
}

fn add_terrain(scene: &mut SceneRegistry) -> Result<()> {
    let origin = -half_extent();
    let step = PATCH_SIZE / (HEIGHT_SAMPLES - 1) as f32;

    for row in 0..PATCHES_PER_SIDE {
        for col in 0..PATCHES_PER_SIDE {
            let ox = origin + col as f32 * PATCH_SIZE;
            let oz = origin + row as f32 * PATCH_SIZE;
            let heights = (0..HEIGHT_SAMPLES)
                .flat_map(|r| {
                    (0..HEIGHT_SAMPLES).map(move |c| {
                        ground_height(ox + c as f32 * step, oz + r as f32 * step)
                    })
                })
                .collect();
            let patch = TerrainPatch::new(
                format!("terrain_{}_{}", row, col),
                ox,
                oz,
                PATCH_SIZE,
                PATCH_SIZE,
                HEIGHT_SAMPLES,
                HEIGHT_SAMPLES,
                heights,
            )?
            .with_mesh_count(2);
            scene.add_terrain(patch);
        }
    }
    Ok(())
}

fn add_houses(scene: &mut SceneRegistry) {
    let half = half_extent() - HOUSE_SPACING;
    let mut x = -half;
    while x <= half {
        let mut z = -half;
        while z <= half {
            let scale = 1.0 + ((x + z).abs() % 3.0) * 0.25;
            scene.add_model(
                Model::new(
                    format!("house_{}_{}", x as i32, z as i32),
                    Vec3::new(x, ground_height(x, z) + 3.0, z),
                    4.0,
                )
                .with_scale(scale)
                .with_mesh_count(3),
            );
            z += HOUSE_SPACING * 2.0;
        }
        x += HOUSE_SPACING * 2.0;
    }
}

fn add_cars(scene: &mut SceneRegistry) -> Result<()> {
    let ring = half_extent() * 0.6;
    let corners = [
        Vec3::new(-ring, 3.0, -ring),
        Vec3::new(ring, 3.0, -ring),
        Vec3::new(ring, 3.0, ring),
        Vec3::new(-ring, 3.0, ring),
    ];

    for i in 0..4 {
        let mut waypoints: Vec<Waypoint> = corners.iter().copied().map(Waypoint::new).collect();
        waypoints.rotate_left(i);
        let end = if i % 2 == 0 { EndBehavior::Loop } else { EndBehavior::Reverse };
        let path = AnimationPath::new(waypoints, end)?;
        scene.add_model(Model::new(format!("car_{}", i), Vec3::ZERO, 2.0).with_path(path));
    }

    // A bus that speeds up on the long straight
    let bus_path = AnimationPath::new(
        vec![
            Waypoint::new(Vec3::new(-ring, 4.0, 0.0)),
            Waypoint::with_pace(Vec3::new(0.0, 4.0, 0.0), 2.0),
            Waypoint::new(Vec3::new(ring, 4.0, 0.0)),
        ],
        EndBehavior::Reverse,
    )?;
    scene.add_model(Model::new("bus", Vec3::ZERO, 3.0).with_path(bus_path).with_mesh_count(2));
    Ok(())
}

fn add_street_lamps(scene: &mut SceneRegistry) {
    let half = half_extent() - LAMP_SPACING * 0.5;
    let mut index = 0;
    let mut x = -half;
    while x <= half {
        let position = Vec3::new(x, ground_height(x, 0.0) + 6.0, 6.0);
        let lamp = scene.add_light(Light::new(format!("lamp_{}", index), position, 12.0));
        // Every third lamp is broken
        if index % 3 == 2 {
            if let Some(light) = scene.light_mut(lamp) {
                light.set_active(false);
            }
        }
        scene.add_flat_model(
            FlatModel::new(Model::new(format!("bulb_{}", index), position, 0.5)).with_light(lamp),
        );
        index += 1;
        x += LAMP_SPACING;
    }

    // A signpost with no light of its own
    scene.add_flat_model(FlatModel::new(Model::new("sign", Vec3::new(0.0, 4.0, -8.0), 1.5)));
}

fn tour_camera(projection: Projection) -> Result<Camera> {
    let r = half_extent() * 0.8;
    let tour = AnimationPath::from_points(
        &[
            Vec3::new(-r, 20.0, r),
            Vec3::new(r, 20.0, r),
            Vec3::new(r, 20.0, -r),
            Vec3::new(-r, 20.0, -r),
        ],
        EndBehavior::Loop,
    )?;
    let look = AnimationPath::from_points(
        &[Vec3::new(-20.0, 0.0, 0.0), Vec3::new(20.0, 0.0, 0.0)],
        EndBehavior::Reverse,
    )?;

    let mut camera = Camera::new(tour.position(), look.position(), projection);
    camera.set_path(Some(tour));
    camera.set_look_path(Some(look));
    Ok(camera)
}

impl SceneLoader for TownLoader {
    fn load(&mut self, descriptor: &str) -> Result<(SceneRegistry, Camera)> {
        if descriptor != Self::DESCRIPTOR {
            return Err(Error::InitializationFailed(format!(
                "unknown scene '{}' (expected '{}')",
                descriptor,
                Self::DESCRIPTOR
            )));
        }

        let mut scene = SceneRegistry::new();
        add_terrain(&mut scene)?;
        add_houses(&mut scene);
        add_cars(&mut scene)?;
        add_street_lamps(&mut scene);
        let camera = tour_camera(self.projection)?;

        engine_info!(SOURCE, "Town built ({} entities)",
            scene.model_count() + scene.flat_model_count() + scene.terrain_count() + scene.light_count());
        Ok((scene, camera))
    }
}
