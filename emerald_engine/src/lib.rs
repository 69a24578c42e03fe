/*!
# Emerald Engine

Per-frame scene update and visibility core for a real-time 3D engine.

Every frame the engine moves the camera, advances animated entities along
their paths, decides which entities (models, flat/billboard models, terrain
patches, lights) intersect the camera frustum, and hands the result to an
external renderer.

## Architecture

- **Camera**: position, look point, projection, derived view matrix and frustum
- **AnimationPath**: waypoint path with an explicit end behavior
- **SceneRegistry**: owned entity registries, populated at load time
- **Culler**: frustum test per entity, then light-state narrowing
- **Updater**: per-frame path animation
- **FrameOrchestrator**: the fixed-phase loop driving external collaborators
  (input, renderer, presenter, profiler)

Rendering, windowing, input devices and scene-file parsing live behind the
traits in [`emerald::frame`].
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod config;
pub mod animation;
pub mod camera;
pub mod scene;
pub mod frame;

// Main emerald namespace module
pub mod emerald {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logging facade)
    pub use crate::engine::Engine;

    // Logging sub-module (types only; the engine_* macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Configuration sub-module
    pub mod config {
        pub use crate::config::*;
    }

    // Animation sub-module
    pub mod animation {
        pub use crate::animation::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Frame loop sub-module
    pub mod frame {
        pub use crate::frame::*;
    }
}

// Re-export math library at crate root
pub use glam;
