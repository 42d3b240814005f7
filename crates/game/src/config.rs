//! Run configuration (tuning plus the scripted session). Loaded from config.ron at startup.

use input::Action;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::tuning::Tuning;

/// Errors reading or writing `config.ron`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("could not serialize config: {0}")]
    Serialize(#[from] ron::Error),
}

/// An action held from `start_frame` up to (not including) `end_frame`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedAction {
    pub action: Action,
    pub start_frame: u32,
    pub end_frame: u32,
}

impl ScriptedAction {
    pub fn new(action: Action, start_frame: u32, end_frame: u32) -> Self {
        Self {
            action,
            start_frame,
            end_frame,
        }
    }

    pub fn is_held(&self, frame: u32) -> bool {
        frame >= self.start_frame && frame < self.end_frame
    }
}

/// How the headless session runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Frames to simulate.
    pub frames: u32,
    /// Frame time fed to the clock each frame (seconds).
    pub dt: f32,
    /// Longest frame the clock will pass through (milliseconds).
    pub max_delta_ms: u64,
    /// Key timeline.
    pub script: Vec<ScriptedAction>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            frames: 600,
            dt: 1.0 / 60.0,
            max_delta_ms: 100,
            script: vec![
                ScriptedAction::new(Action::Ascend, 0, 30),
                ScriptedAction::new(Action::Fire, 10, 12),
                ScriptedAction::new(Action::Forward, 30, 240),
                ScriptedAction::new(Action::YawLeft, 120, 180),
                ScriptedAction::new(Action::Fire, 200, 202),
                ScriptedAction::new(Action::YawRight, 260, 300),
                ScriptedAction::new(Action::Descend, 300, 360),
                ScriptedAction::new(Action::Fire, 320, 322),
                ScriptedAction::new(Action::Backward, 400, 450),
                ScriptedAction::new(Action::Fire, 460, 462),
            ],
        }
    }
}

/// Persistent settings. Loaded from `config.ron` in the current directory or a path given on the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tuning: Tuning,
    pub scenario: Scenario,
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            log::info!("No config at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(data: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(data)
    }

    /// Save current config to `path`.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let s = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        std::fs::write(path, s).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("config.ron")
}
