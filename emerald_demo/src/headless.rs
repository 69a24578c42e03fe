//! Collaborators that stand in for a window, an input device and a GPU.

use std::time::Instant;

use emerald_engine::emerald::camera::Camera;
use emerald_engine::emerald::frame::{
    FrameRenderer, FrameView, InputHandler, Presenter, RenderState, RunningFlag,
};
use emerald_engine::emerald::Result;
use emerald_engine::engine_debug;

const SOURCE: &str = "emerald::Demo";

/// Log draw statistics every this many frames.
const STATS_INTERVAL: u64 = 60;

/// Looks around slowly (free look only) and stops after a fixed number of frames.
pub struct ScriptedInput {
    frames: u64,
}

impl ScriptedInput {
    pub fn new(frames: u64) -> Self {
        Self { frames }
    }
}

impl InputHandler for ScriptedInput {
    fn handle_input(&mut self, camera: &mut Camera, state: &RenderState, running: &RunningFlag) {
        if camera.can_look_free() {
            camera.rotate(0.002 * state.elapsed_ms.min(100.0), 0.0);
        }
        if state.frame + 1 >= self.frames {
            running.stop();
        }
    }
}

/// Measures real frame time; draws nothing.
pub struct HeadlessRenderer {
    last_frame: Instant,
    elapsed_ms: f32,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            elapsed_ms: 0.0,
        }
    }
}

impl FrameRenderer for HeadlessRenderer {
    fn render(&mut self, view: &FrameView<'_>) -> Result<()> {
        let now = Instant::now();
        self.elapsed_ms = now.duration_since(self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;

        if view.frame % STATS_INTERVAL == 0 {
            let position = view.camera.position();
            engine_debug!(
                SOURCE,
                "Frame {}: camera ({:.1}, {:.1}, {:.1}), {} meshes, {} models, {} objects, {} bulbs off",
                view.frame,
                position.x,
                position.y,
                position.z,
                view.stats.meshes_drawn,
                view.stats.models_drawn,
                view.stats.objects_drawn,
                view.stats.narrowed
            );
        }
        Ok(())
    }

    fn elapsed(&self) -> f32 {
        self.elapsed_ms
    }
}

/// Presentation is immediate without a window.
pub struct HeadlessPresenter;

impl Presenter for HeadlessPresenter {
    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}
