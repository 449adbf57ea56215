// src/render/board_renderer.rs
// the renderer turns DrawCommands into nannou rects and text.
// DrawCommands live in the board's y-up space anchored at the lower-left corner,
// nannou's origin is the centre of the window.

use nannou::prelude::*;

use crate::views::{DrawCommand, Layout};

pub struct BoardRenderer {
    window_size: Vec2,
    background: Rgb,
}

impl BoardRenderer {
    pub fn new(layout: &Layout) -> Self {
        Self {
            window_size: layout.window_size(),
            background: rgb(0.9, 0.9, 0.9),
        }
    }

    pub fn window_size(&self) -> Vec2 {
        self.window_size
    }

    /// Board-space point to nannou's centred window space.
    pub fn to_screen(&self, point: Vec2) -> Vec2 {
        point - self.window_size / 2.0
    }

    pub fn draw(&self, draw: &Draw, commands: &[DrawCommand]) {
        draw.background().color(self.background);

        for command in commands {
            match command {
                DrawCommand::Tile {
                    position,
                    size,
                    opacity,
                    label,
                    font_size,
                    color,
                } => {
                    let center = self.to_screen(*position + vec2(*size, *size) / 2.0);
                    let fill: Rgb = color.into_format();
                    draw.rect()
                        .xy(center)
                        .w_h(*size, *size)
                        .color(rgba(fill.red, fill.green, fill.blue, *opacity));
                    let ink = rgba(1.0, 1.0, 1.0, *opacity);
                    self.draw_label(draw, label, center, *size, *font_size, ink);
                }
                DrawCommand::Overlay {
                    position,
                    size,
                    opacity,
                    label,
                    font_size,
                } => {
                    let center = self.to_screen(*position + *size / 2.0);
                    draw.rect()
                        .xy(center)
                        .wh(*size)
                        .color(rgba(1.0, 1.0, 1.0, *opacity));
                    let ink = rgba(0.0, 0.0, 0.0, *opacity);
                    self.draw_label(draw, label, center, size.x, *font_size, ink);
                }
            }
        }
    }

    fn draw_label(
        &self,
        draw: &Draw,
        label: &str,
        center: Vec2,
        width: f32,
        font_size: f32,
        color: Rgba,
    ) {
        // nannou can't draw zero-sized glyphs
        let font_size = font_size.round() as u32;
        if font_size == 0 {
            return;
        }
        draw.text(label)
            .xy(center)
            .w(width.max(1.0))
            .font_size(font_size)
            .color(color);
    }
}
