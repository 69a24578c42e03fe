//! Animation module: waypoint paths followed by entities and the camera.

mod path;

pub use path::{AnimationPath, EndBehavior, PathAdvance, Waypoint};
