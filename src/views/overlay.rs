// src/views/overlay.rs
//
// The "Game Over" curtain that fades in over the grid.

use nannou::prelude::*;

use super::{DrawCommand, Layout};

const MAX_OPACITY: f32 = 0.8;
const LABEL: &str = "Game Over";
const FONT_SIZE: f32 = 32.0;

#[derive(Debug, Clone)]
pub struct GameOverOverlay {
    toggled: bool,
    fade_step: Option<f32>,
    opacity: f32,
    fade_duration: f32,
}

impl GameOverOverlay {
    pub fn new(fade_duration: f32) -> Self {
        Self {
            toggled: false,
            fade_step: None,
            opacity: 0.0,
            fade_duration,
        }
    }

    pub fn is_toggled(&self) -> bool {
        self.toggled
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    // the fade restarts only when going from hidden to shown
    pub fn toggle(&mut self, visible: bool) {
        if visible && !self.toggled {
            self.opacity = 0.0;
            self.fade_step = Some(0.0);
        }
        if !visible {
            self.fade_step = None;
        }
        self.toggled = visible;
    }

    pub fn update(&mut self, dt: f32) {
        let Some(step) = self.fade_step else {
            return;
        };
        let step = (step + dt / self.fade_duration).min(1.0);
        self.opacity = step * MAX_OPACITY;
        self.fade_step = (step < 1.0).then_some(step);
    }

    pub fn draw_command(&self, layout: &Layout) -> Option<DrawCommand> {
        self.toggled.then(|| DrawCommand::Overlay {
            position: Vec2::ZERO,
            size: vec2(layout.grid_size(), layout.grid_size()),
            opacity: self.opacity,
            label: LABEL.to_string(),
            font_size: FONT_SIZE,
        })
    }
}
