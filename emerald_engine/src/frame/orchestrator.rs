/// FrameOrchestrator: the fixed-phase per-frame loop.
///
/// Every iteration runs, in this order:
/// 1. input
/// 2. camera update (path follow, look path follow, height lock, refresh)
/// 3. entity animation
/// 4. culling, then light narrowing
/// 5. render hand-off
/// 6. presentation
///
/// The camera is always refreshed in step 2, so step 4 never culls against
/// a stale frustum. The running flag is only checked between iterations.

use crate::camera::Camera;
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::Result;
use crate::scene::{
    AnimationStats, CullStats, Culler, FrustumCuller, PathUpdater, SceneRegistry, Updater,
};
use crate::{engine_debug, engine_error, engine_info};
use super::collaborators::{
    FrameRenderer, FrameView, InputHandler, Presenter, Profiler, RenderState, RunningFlag,
    SceneLoader,
};
use super::profiler::{
    NoOpProfiler, PHASE_ANIMATION, PHASE_CAMERA, PHASE_CULLING, PHASE_INPUT, PHASE_PRESENT,
    PHASE_RENDER,
};

const SOURCE: &str = "emerald::FrameOrchestrator";

/// Outcome of `FrameOrchestrator::run()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Iterations completed by this run
    pub frames: u64,
    /// Draw statistics of the last frame
    pub last_stats: CullStats,
    /// Animation statistics of the last frame
    pub last_animation: AnimationStats,
}

/// Owns the camera, the scene registries and the per-frame strategies.
pub struct FrameOrchestrator {
    config: EngineConfig,
    camera: Camera,
    scene: SceneRegistry,
    culler: Box<dyn Culler>,
    updater: Box<dyn Updater>,
    input: Box<dyn InputHandler>,
    renderer: Box<dyn FrameRenderer>,
    presenter: Box<dyn Presenter>,
    profiler: Box<dyn Profiler>,
    running: RunningFlag,
    stats: CullStats,
    animation: AnimationStats,
    frame: u64,
}

impl FrameOrchestrator {
    /// Create an orchestrator with a frustum culler, a path updater driven
    /// by `config.animation` and no profiling.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` if `config` fails validation.
    pub fn new(
        config: EngineConfig,
        camera: Camera,
        scene: SceneRegistry,
        input: impl InputHandler + 'static,
        renderer: impl FrameRenderer + 'static,
        presenter: impl Presenter + 'static,
    ) -> Result<Self> {
        config.validate()?;
        Engine::set_min_severity(config.log.min_severity);

        engine_info!(
            SOURCE,
            "Scene ready: {} models, {} flat models, {} terrain patches, {} lights",
            scene.model_count(),
            scene.flat_model_count(),
            scene.terrain_count(),
            scene.light_count()
        );

        Ok(Self {
            updater: Box::new(PathUpdater::from_config(&config.animation)),
            culler: Box::new(FrustumCuller::new()),
            profiler: Box::new(NoOpProfiler::new()),
            input: Box::new(input),
            renderer: Box::new(renderer),
            presenter: Box::new(presenter),
            running: RunningFlag::new(),
            stats: CullStats::default(),
            animation: AnimationStats::default(),
            frame: 0,
            config,
            camera,
            scene,
        })
    }

    /// Load the scene through `loader`, then build as in `new`.
    ///
    /// # Errors
    ///
    /// Whatever the loader reports, or `Error::InvalidConfig`.
    pub fn from_loader(
        config: EngineConfig,
        loader: &mut dyn SceneLoader,
        descriptor: &str,
        input: impl InputHandler + 'static,
        renderer: impl FrameRenderer + 'static,
        presenter: impl Presenter + 'static,
    ) -> Result<Self> {
        config.validate()?;
        let (scene, camera) = loader.load(descriptor)?;
        Self::new(config, camera, scene, input, renderer, presenter)
    }

    pub fn with_culler(mut self, culler: impl Culler + 'static) -> Self {
        self.culler = Box::new(culler);
        self
    }

    pub fn with_updater(mut self, updater: impl Updater + 'static) -> Self {
        self.updater = Box::new(updater);
        self
    }

    pub fn with_profiler(mut self, profiler: impl Profiler + 'static) -> Self {
        self.profiler = Box::new(profiler);
        self
    }

    // ===== ACCESSORS =====

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn scene(&self) -> &SceneRegistry {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneRegistry {
        &mut self.scene
    }

    /// Draw statistics of the latest frame.
    pub fn stats(&self) -> CullStats {
        self.stats
    }

    /// Animation statistics of the latest frame.
    pub fn animation_stats(&self) -> AnimationStats {
        self.animation
    }

    /// Frames run since construction.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// A handle on the loop's running flag (shared, not a copy).
    pub fn running_flag(&self) -> RunningFlag {
        self.running.clone()
    }

    pub fn profiler_report(&self) -> Option<String> {
        self.profiler.report()
    }

    // ===== LOOP =====

    /// Run frames until the running flag is cleared.
    pub fn run(&mut self) -> RunSummary {
        self.running.start();
        let first_frame = self.frame;
        engine_info!(SOURCE, "Frame loop started");

        while self.running.is_running() {
            self.run_frame();
        }

        let summary = RunSummary {
            frames: self.frame - first_frame,
            last_stats: self.stats,
            last_animation: self.animation,
        };
        engine_info!(
            SOURCE,
            "Frame loop stopped after {} frames ({} objects drawn in the last one)",
            summary.frames,
            summary.last_stats.objects_drawn
        );
        summary
    }

    /// Run exactly one iteration, regardless of the running flag.
    pub fn run_frame(&mut self) -> CullStats {
        // 1. Input
        self.profiler.start(PHASE_INPUT);
        let state = RenderState {
            frame: self.frame,
            elapsed_ms: self.renderer.elapsed(),
            stats: self.stats,
        };
        self.input.handle_input(&mut self.camera, &state, &self.running);
        self.profiler.stop(PHASE_INPUT);

        // 2. Camera
        self.profiler.start(PHASE_CAMERA);
        self.update_camera();
        self.profiler.stop(PHASE_CAMERA);

        // 3. Animation
        self.profiler.start(PHASE_ANIMATION);
        let elapsed = self.renderer.elapsed();
        self.animation = self.updater.update(&mut self.scene, elapsed);
        self.profiler.stop(PHASE_ANIMATION);

        // 4. Culling (frustum pass, then light narrowing)
        self.profiler.start(PHASE_CULLING);
        self.stats = self.culler.cull(self.camera.frustum(), &mut self.scene);
        self.profiler.stop(PHASE_CULLING);

        // 5. Render hand-off
        self.profiler.start(PHASE_RENDER);
        let view = FrameView {
            frame: self.frame,
            camera: &self.camera,
            scene: &self.scene,
            stats: &self.stats,
        };
        if let Err(e) = self.renderer.render(&view) {
            engine_error!(SOURCE, "Frame {}: render failed: {}", self.frame, e);
        }
        self.profiler.stop(PHASE_RENDER);

        // 6. Presentation
        self.profiler.start(PHASE_PRESENT);
        if let Err(e) = self.presenter.present() {
            engine_error!(SOURCE, "Frame {}: present failed: {}", self.frame, e);
        }
        self.profiler.stop(PHASE_PRESENT);

        self.frame += 1;
        self.stats
    }

    fn update_camera(&mut self) {
        let step = self.config.camera.path_step;

        if !self.camera.can_move_free() {
            if let Some(advance) = self.camera.move_along_path(step) {
                if advance.completed {
                    engine_debug!(SOURCE, "Camera path completed at frame {}", self.frame);
                }
            }
        }
        if !self.camera.can_look_free() {
            self.camera.move_look_point_along_path(step);
        }
        if self.camera.height_lock() {
            self.apply_height_lock();
        }

        self.camera.refresh();
    }

    /// Clamp the camera to `terrain height + offset` over the first patch
    /// containing its (x, z). No patch, or a non-finite height: unchanged.
    fn apply_height_lock(&mut self) {
        let position = self.camera.position();
        let Some(patch) = self.scene.terrain_at(position.x, position.z) else {
            return;
        };
        let height = patch.height_at(position.x, position.z);
        if height.is_finite() {
            self.camera.set_height(height + self.config.camera.height_offset);
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
