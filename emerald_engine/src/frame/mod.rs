//! Frame module
//!
//! The per-frame loop and the contracts of the systems it drives
//! (input, rendering, presentation, scene loading, profiling).

mod collaborators;
mod profiler;
mod orchestrator;

pub use collaborators::{
    FrameRenderer, FrameView, InputHandler, Presenter, Profiler, RenderState, RunningFlag,
    SceneLoader,
};
pub use profiler::{
    NoOpProfiler, PhaseProfiler, PhaseTiming,
    PHASE_INPUT, PHASE_CAMERA, PHASE_ANIMATION, PHASE_CULLING, PHASE_RENDER, PHASE_PRESENT,
    FRAME_PHASES,
};
pub use orchestrator::{FrameOrchestrator, RunSummary};
