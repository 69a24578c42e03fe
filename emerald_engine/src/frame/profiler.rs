/// Phase profilers.
///
/// The frame loop brackets each phase with `start`/`stop`. `PhaseProfiler`
/// accumulates wall-clock durations per phase name; `NoOpProfiler` is the
/// default and costs nothing.

use std::fmt::Write;
use std::time::{Duration, Instant};
use rustc_hash::FxHashMap;
use super::collaborators::Profiler;

pub const PHASE_INPUT: &str = "input";
pub const PHASE_CAMERA: &str = "camera";
pub const PHASE_ANIMATION: &str = "animation";
pub const PHASE_CULLING: &str = "culling";
pub const PHASE_RENDER: &str = "render";
pub const PHASE_PRESENT: &str = "present";

/// Phases in frame order.
pub const FRAME_PHASES: [&str; 6] = [
    PHASE_INPUT, PHASE_CAMERA, PHASE_ANIMATION, PHASE_CULLING, PHASE_RENDER, PHASE_PRESENT,
];

/// Accumulated timings of one phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTiming {
    pub count: u32,
    pub total: Duration,
    pub max: Duration,
}

impl PhaseTiming {
    pub fn average(&self) -> Duration {
        if self.count == 0 {
            Duration::ZERO
        } else {
            self.total / self.count
        }
    }

    fn record(&mut self, duration: Duration) {
        self.count += 1;
        self.total += duration;
        self.max = self.max.max(duration);
    }
}

/// Profiler that does nothing.
pub struct NoOpProfiler;

impl NoOpProfiler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpProfiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Profiler for NoOpProfiler {
    fn start(&mut self, _phase: &'static str) {}

    fn stop(&mut self, _phase: &'static str) {}
}

/// Wall-clock profiler keyed by phase name.
///
/// A `stop` without a matching `start` is ignored. A second `start` for an
/// open phase restarts its timer.
#[derive(Debug, Default)]
pub struct PhaseProfiler {
    open: FxHashMap<&'static str, Instant>,
    timings: FxHashMap<&'static str, PhaseTiming>,
}

impl PhaseProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measured duration directly.
    pub fn record(&mut self, phase: &'static str, duration: Duration) {
        self.timings.entry(phase).or_default().record(duration);
    }

    pub fn timing(&self, phase: &str) -> Option<PhaseTiming> {
        self.timings.get(phase).copied()
    }

    /// Phases with at least one sample: frame phases first in frame order,
    /// then any others by name.
    pub fn phases(&self) -> Vec<&'static str> {
        let mut extra: Vec<&'static str> = self
            .timings
            .keys()
            .copied()
            .filter(|name| !FRAME_PHASES.contains(name))
            .collect();
        extra.sort_unstable();

        FRAME_PHASES
            .iter()
            .copied()
            .filter(|name| self.timings.contains_key(name))
            .chain(extra)
            .collect()
    }

    /// Drop every sample and open timer.
    pub fn clear(&mut self) {
        self.open.clear();
        self.timings.clear();
    }

    /// One line per phase: count, total, average and max in milliseconds.
    pub fn render_report(&self) -> String {
        let mut out = String::from("phase        count   total(ms)     avg(ms)     max(ms)\n");
        for name in self.phases() {
            let t = self.timings[name];
            let _ = writeln!(
                out,
                "{:<10} {:>7} {:>11.3} {:>11.3} {:>11.3}",
                name,
                t.count,
                as_millis(t.total),
                as_millis(t.average()),
                as_millis(t.max),
            );
        }
        out
    }
}

fn as_millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

impl Profiler for PhaseProfiler {
    fn start(&mut self, phase: &'static str) {
        self.open.insert(phase, Instant::now());
    }

    fn stop(&mut self, phase: &'static str) {
        if let Some(started) = self.open.remove(phase) {
            self.record(phase, started.elapsed());
        }
    }

    fn report(&self) -> Option<String> {
        Some(self.render_report())
    }
}

#[cfg(test)]
#[path = "profiler_tests.rs"]
mod tests;
