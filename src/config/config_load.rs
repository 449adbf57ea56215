// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::config_types::*;
use crate::views::Layout;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config.toml next to the executable or in the working directory")]
    NotFound,
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub layout: Layout,
    pub animation: AnimationConfig,
    pub spawn: SpawnConfig,
    pub timing: TimingConfig,
    pub osc: OscConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::exe_dir_path() {
            if exe_config.exists() {
                return Self::load_from_path(&exe_config);
            }
        }

        // Fallback to loading from the current working directory
        let local = Path::new("config.toml");
        if local.exists() {
            return Self::load_from_path(local);
        }

        Err(ConfigError::NotFound)
    }

    fn exe_dir_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        Some(exe_dir.join("config.toml"))
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loading config from {}", path.display());
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("animation.enter_ms", self.animation.enter_ms),
            ("animation.move_ms", self.animation.move_ms),
            ("animation.merge_ms", self.animation.merge_ms),
            ("animation.over_fade_ms", self.animation.over_fade_ms),
        ];
        for (field, value) in durations {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be positive, got {}", value),
                });
            }
        }

        let p = self.spawn.four_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Invalid {
                field: "spawn.four_probability",
                reason: format!("must be within 0..=1, got {}", p),
            });
        }

        if !(self.timing.tick_rate > 0.0) {
            return Err(ConfigError::Invalid {
                field: "timing.tick_rate",
                reason: format!("must be positive, got {}", self.timing.tick_rate),
            });
        }

        if !(self.layout.tile_size > 0.0) || self.layout.tile_margin < 0.0 {
            return Err(ConfigError::Invalid {
                field: "layout",
                reason: "tile_size must be positive and tile_margin non-negative".to_string(),
            });
        }

        Ok(())
    }

    pub fn board_config(&self) -> BoardConfig {
        BoardConfig {
            layout: self.layout.clone(),
            animation: self.animation.clone(),
            spawn: self.spawn.clone(),
        }
    }
}
