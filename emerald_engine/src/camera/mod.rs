//! Camera module: view camera, projection and frustum.
//!
//! The camera owns its derived state (view matrix, frustum). Any mutation
//! marks it dirty; `Camera::refresh()` recomputes the derived state and
//! must run before culling each frame.

mod camera;
mod frustum;

pub use camera::{Camera, CameraFlags, Projection};
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
