//! Engine configuration
//!
//! This module defines the JSON config file that parameterizes a run:
//! window size, fixed timestep, and entity spawn points. The defaults
//! reproduce the built-in demo world, so the engine runs fine with no config
//! file at all.

use crate::math::{Vector2, clamp};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Accepted range for the fixed timestep, in seconds. Values outside this
/// range would stall the simulation or blow entities across the window in a
/// single tick.
const MIN_TIMESTEP: f32 = 0.001;
const MAX_TIMESTEP: f32 = 0.1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub window_title: String,
    /// Seconds of simulated time per tick. Clamped on load.
    pub fixed_timestep: f32,
    pub player_spawn: Vector2,
    pub enemy_spawns: Vec<Vector2>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            window_width: 800,
            window_height: 600,
            window_title: "Engine1".to_string(),
            fixed_timestep: 0.016, // ~60 FPS
            player_spawn: Vector2::new(100.0, 100.0),
            enemy_spawns: vec![Vector2::new(300.0, 200.0), Vector2::new(500.0, 400.0)],
        }
    }
}

/// Errors that can occur while reading or writing the config file.
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

impl EngineConfig {
    /// Default config location: `~/.engine1/config.json`, falling back to the
    /// working directory when no home directory is available.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|p| p.join(".engine1/config.json"))
            .unwrap_or_else(|| PathBuf::from("./config.json"))
    }

    /// Loads a config from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let mut config: EngineConfig = serde_json::from_str(&content)?;
        config.fixed_timestep = clamp(config.fixed_timestep, MIN_TIMESTEP, MAX_TIMESTEP);
        Ok(config)
    }

    /// Writes the config as pretty-printed JSON, creating parent directories
    /// as needed.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Loads the config from the default path, falling back to the defaults
    /// when the file is missing or malformed. Never fails - a broken config
    /// file should not keep the engine from starting.
    ///
    /// On a first run (no config file yet) a starter config is written so
    /// users have something to edit.
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        match Self::load_from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(ConfigError::IoError(_)) => {
                let config = EngineConfig::default();
                match config.save_to_file(&path) {
                    Ok(()) => log::info!("Wrote starter config to {}", path.display()),
                    Err(e) => {
                        log::warn!("Could not write starter config to {}: {}", path.display(), e)
                    }
                }
                config
            }
            Err(e) => {
                log::warn!("Using default config ({}: {})", path.display(), e);
                EngineConfig::default()
            }
        }
    }
}
