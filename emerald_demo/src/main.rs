//! Emerald demo: runs the frame loop headless over a procedural town.
//!
//! ```text
//! emerald_demo --frames 600 --follow-path --height-lock --profile
//! ```

mod headless;
mod town;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use emerald_engine::emerald::camera::CameraFlags;
use emerald_engine::emerald::config::EngineConfig;
use emerald_engine::emerald::frame::{FrameOrchestrator, PhaseProfiler, RunSummary};
use emerald_engine::emerald::{Engine, Result};
use emerald_engine::{engine_error, engine_info};

use headless::{HeadlessPresenter, HeadlessRenderer, ScriptedInput};
use town::TownLoader;

const SOURCE: &str = "emerald::Demo";

/// Emerald demo command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "emerald_demo", about = "Headless Emerald frame loop demo")]
struct CliArgs {
    /// Engine configuration file (RON). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames to run.
    #[arg(long, default_value_t = 300)]
    frames: u64,

    /// Move the camera along its scripted path instead of free movement.
    #[arg(long)]
    follow_path: bool,

    /// Keep the camera at a fixed height above the terrain.
    #[arg(long)]
    height_lock: bool,

    /// Print per-phase timings when the loop ends.
    #[arg(long)]
    profile: bool,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(&args) {
        Ok(summary) => {
            engine_info!(
                SOURCE,
                "Done: {} frames, last frame drew {} meshes / {} models / {} objects",
                summary.frames,
                summary.last_stats.meshes_drawn,
                summary.last_stats.models_drawn,
                summary.last_stats.objects_drawn
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            engine_error!(SOURCE, "{}", e);
            eprintln!("emerald_demo: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<RunSummary> {
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    Engine::set_min_severity(config.log.min_severity);

    let mut loader = TownLoader::new(&config.camera);
    let mut orchestrator = FrameOrchestrator::from_loader(
        config,
        &mut loader,
        TownLoader::DESCRIPTOR,
        ScriptedInput::new(args.frames),
        HeadlessRenderer::new(),
        HeadlessPresenter,
    )?;

    let camera = orchestrator.camera_mut();
    let mut flags = camera.flags();
    if args.follow_path {
        flags.remove(CameraFlags::FREE_MOVE | CameraFlags::FREE_LOOK);
    }
    flags.set(CameraFlags::HEIGHT_LOCK, args.height_lock);
    camera.set_flags(flags);

    if args.profile {
        orchestrator = orchestrator.with_profiler(PhaseProfiler::new());
    }

    let summary = orchestrator.run();

    if let Some(report) = orchestrator.profiler_report() {
        println!("{}", report);
    }
    Ok(summary)
}
