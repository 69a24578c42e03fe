/// Boundary contracts between the frame loop and the systems it drives.
///
/// The orchestrator owns none of these systems' internals. It calls into
/// them once per frame in a fixed order and only consumes what the
/// contracts return.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use crate::camera::Camera;
use crate::error::Result;
use crate::scene::{CullStats, SceneRegistry};

// ===== RUNNING FLAG =====

/// Shared stop signal for the frame loop.
///
/// Cloning shares the flag. Any holder (input handler, signal hook) may
/// clear it; the loop observes it between iterations only.
#[derive(Debug, Clone, Default)]
pub struct RunningFlag(Arc<AtomicBool>);

impl RunningFlag {
    /// A cleared flag.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Request the loop to stop after the current iteration.
    pub fn stop(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

// ===== PER-FRAME VIEWS =====

/// Renderer state handed to the input handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    /// Index of the frame about to run
    pub frame: u64,
    /// Duration of the previous frame in milliseconds
    pub elapsed_ms: f32,
    /// Draw statistics of the previous frame
    pub stats: CullStats,
}

/// Everything the renderer may read for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub frame: u64,
    pub camera: &'a Camera,
    pub scene: &'a SceneRegistry,
    pub stats: &'a CullStats,
}

// ===== COLLABORATOR TRAITS =====

/// Input handling: may move the camera or clear the running flag.
pub trait InputHandler {
    fn handle_input(&mut self, camera: &mut Camera, state: &RenderState, running: &RunningFlag);
}

/// Rendering backend.
pub trait FrameRenderer {
    /// Draw the visible entities of this frame.
    fn render(&mut self, view: &FrameView<'_>) -> Result<()>;

    /// Duration of the previous frame in milliseconds.
    fn elapsed(&self) -> f32;
}

/// Windowing layer. `present()` is the frame's synchronization barrier.
pub trait Presenter {
    fn present(&mut self) -> Result<()>;
}

/// Scene loading: builds the registries and the initial camera.
pub trait SceneLoader {
    fn load(&mut self, descriptor: &str) -> Result<(SceneRegistry, Camera)>;
}

/// Phase telemetry. Purely observational.
pub trait Profiler {
    fn start(&mut self, phase: &'static str);

    fn stop(&mut self, phase: &'static str);

    /// Human-readable report, if this profiler collects anything.
    fn report(&self) -> Option<String> {
        None
    }
}
