//! Scene module
//!
//! Entity registries and the per-frame strategies that run over them
//! (animation updating, frustum culling).

mod entity;
mod registry;
mod parallel;
mod culler;
mod updater;

pub use entity::{
    BoundingSphere, Cullable, PathFollower,
    Model, FlatModel, TerrainPatch, Light,
    ModelKey, FlatModelKey, TerrainKey, LightKey,
};
pub use registry::SceneRegistry;
pub use culler::{
    Culler, FrustumCuller, BruteForceCuller, CullStats, CategoryCount,
    cull_entity, narrow_by_light_state,
};
pub use updater::{Updater, PathUpdater, NoOpUpdater, AnimationStats, advance_entity};
