// src/config/config_types.rs
//
// Config types for the app

use crate::models::AnimationKind;
use crate::views::Layout;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub show_fps: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "2048".to_string(),
            show_fps: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub four_probability: f64, // chance a spawned tile is a 4 instead of a 2
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            four_probability: 0.1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub tick_rate: f32, // board ticks per second
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { tick_rate: 120.0 }
    }
}

impl TimingConfig {
    pub fn tick_interval(&self) -> f32 {
        1.0 / self.tick_rate
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OscConfig {
    pub enabled: bool,
    pub rx_port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            rx_port: 9000,
        }
    }
}

/************************* Animation Configs ********************/
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enter_ms: f32,
    pub move_ms: f32,
    pub merge_ms: f32,
    pub over_fade_ms: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enter_ms: 150.0,
            move_ms: 150.0,
            merge_ms: 150.0,
            over_fade_ms: 2000.0,
        }
    }
}

impl AnimationConfig {
    /// Duration of a tile animation in seconds.
    pub fn duration_secs(&self, kind: AnimationKind) -> f32 {
        let ms = match kind {
            AnimationKind::Enter => self.enter_ms,
            AnimationKind::Move => self.move_ms,
            AnimationKind::Merge => self.merge_ms,
        };
        ms / 1000.0
    }

    pub fn over_fade_secs(&self) -> f32 {
        self.over_fade_ms / 1000.0
    }
}

// The subset of the config a Board needs
#[derive(Debug, Clone, Default)]
pub struct BoardConfig {
    pub layout: Layout,
    pub animation: AnimationConfig,
    pub spawn: SpawnConfig,
}
