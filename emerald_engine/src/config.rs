//! Engine configuration with defaults and RON persistence.
//!
//! Every section is `#[serde(default)]`, so a file only needs the keys it
//! overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::log::LogSeverity;

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Path animation settings.
    pub animation: AnimationConfig,
    /// Camera projection and movement settings.
    pub camera: CameraConfig,
    /// Logging settings.
    pub log: LogConfig,
}

/// Path animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Distance units travelled per elapsed time unit (renderer milliseconds).
    pub speed: f32,
}

/// Camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Fixed distance per frame when the camera follows its paths.
    pub path_step: f32,
    /// Height above the terrain surface when height-lock is on.
    pub height_offset: f32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Viewport width / height.
    pub aspect: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Entries below this severity are dropped.
    pub min_severity: LogSeverity,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { speed: 0.002 }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            path_step: 0.1,
            height_offset: 8.0,
            fov_y_degrees: 60.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 500.0,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            min_severity: LogSeverity::Info,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a RON document.
    pub fn from_ron_str(source: &str) -> Result<Self> {
        let config: EngineConfig = ron::from_str(source)
            .map_err(|e| Error::InvalidConfig(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_ron_str(&source)
    }

    /// Serialize to pretty-printed RON.
    pub fn to_ron_string(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| Error::InvalidConfig(format!("failed to serialize config: {}", e)))
    }

    /// Reject values the frame loop cannot work with.
    pub fn validate(&self) -> Result<()> {
        let anim = &self.animation;
        let cam = &self.camera;

        if !anim.speed.is_finite() || anim.speed < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "animation.speed must be finite and >= 0, got {}", anim.speed
            )));
        }
        if !cam.path_step.is_finite() || cam.path_step < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "camera.path_step must be finite and >= 0, got {}", cam.path_step
            )));
        }
        if !cam.height_offset.is_finite() {
            return Err(Error::InvalidConfig("camera.height_offset must be finite".to_string()));
        }
        if !(cam.fov_y_degrees > 0.0 && cam.fov_y_degrees < 180.0) {
            return Err(Error::InvalidConfig(format!(
                "camera.fov_y_degrees must be in (0, 180), got {}", cam.fov_y_degrees
            )));
        }
        if !(cam.aspect > 0.0 && cam.aspect.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "camera.aspect must be > 0, got {}", cam.aspect
            )));
        }
        if !(cam.near > 0.0 && cam.far > cam.near && cam.far.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "camera clip range must satisfy 0 < near < far, got near={} far={}",
                cam.near, cam.far
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
