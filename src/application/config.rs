//! Startup configuration.
//!
//! Values come from, in order of precedence:
//!
//! 1. the TOML file named by `LYFF_CONFIG` (must exist when set)
//! 2. `lyff.toml` in the working directory, if present
//! 3. the built-in defaults below
//!
//! ```toml
//! start_paused = false
//!
//! [field]
//! width = 128
//! height = 128
//! preset = "empty"
//! seed_cells = [[1, 0], [2, 1], [0, 2], [1, 2], [2, 2]]
//!
//! [timing]
//! frames_per_second = 30
//! updates_per_second = 60
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::Preset;
use crate::error::{Error, Result};

pub const CONFIG_ENV_VAR: &str = "LYFF_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "lyff.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Go Lyff".to_owned(),
            width: 640,
            height: 640,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    pub width: usize,
    pub height: usize,
    pub preset: Preset,
    /// Cells switched on after the preset is applied at startup
    pub seed_cells: Vec<(i64, i64)>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            preset: Preset::StableSquares,
            seed_cells: vec![(3, 2)],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    pub frames_per_second: f64,
    pub updates_per_second: f64,
    /// Upper bound on simulation steps run between two frames
    pub max_steps_per_frame: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            frames_per_second: 10.0,
            updates_per_second: 200_000.0,
            max_steps_per_frame: 1_000,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub start_paused: bool,
    pub hide_grid: bool,
    pub window: WindowConfig,
    pub field: FieldConfig,
    pub timing: TimingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_paused: true,
            hide_grid: false,
            window: WindowConfig::default(),
            field: FieldConfig::default(),
            timing: TimingConfig::default(),
        }
    }
}

impl Config {
    /// Resolve and load the configuration for this process
    pub fn load() -> Result<Self> {
        Self::load_from(
            std::env::var_os(CONFIG_ENV_VAR),
            Path::new(DEFAULT_CONFIG_FILE),
        )
    }

    /// An explicit path must exist; the fallback file is optional
    fn load_from(explicit: Option<OsString>, fallback: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(Path::new(&path)),
            None if fallback.exists() => Self::from_file(fallback),
            None => {
                debug!("no {} found, using defaults", fallback.display());
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: PathBuf::from(path),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a TOML document; missing keys take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.field.width == 0 || self.field.height == 0 {
            return Err(Error::EmptyField {
                width: self.field.width,
                height: self.field.height,
            });
        }
        // The windowing layer takes signed pixel sizes
        let max_side = i32::MAX as u32;
        let (w, h) = (self.window.width, self.window.height);
        if w == 0 || h == 0 || w > max_side || h > max_side {
            return Err(Error::invalid_config(format!(
                "window size must be between 1 and {max_side} per side, got {w}x{h}"
            )));
        }
        let fps = self.timing.frames_per_second;
        let interval = Duration::try_from_secs_f64(1.0 / fps);
        if !fps.is_finite() || fps <= 0.0 || interval.is_err() {
            return Err(Error::invalid_config(format!(
                "frames_per_second must be positive with a representable frame interval, \
                 got {fps}"
            )));
        }
        let ups = self.timing.updates_per_second;
        if !ups.is_finite() || ups < 0.0 {
            return Err(Error::invalid_config(format!(
                "updates_per_second must be zero or positive, got {ups}"
            )));
        }
        if self.timing.max_steps_per_frame == 0 {
            return Err(Error::invalid_config("max_steps_per_frame must be at least 1"));
        }
        Ok(())
    }
}
