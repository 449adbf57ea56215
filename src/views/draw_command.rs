// src/views/draw_command.rs
//
// What the renderer is asked to draw each frame.
// Positions are lower-left corners in the board's y-up pixel space.

use nannou::color::Rgb8;
use nannou::prelude::*;

use super::{palette, Layout};
use crate::models::Tile;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Tile {
        position: Vec2,
        size: f32,
        opacity: f32,
        label: String,
        font_size: f32,
        color: Rgb8,
    },
    Overlay {
        position: Vec2,
        size: Vec2,
        opacity: f32,
        label: String,
        font_size: f32,
    },
}

impl DrawCommand {
    pub fn for_tile(tile: &Tile, layout: &Layout) -> Self {
        let geometry = tile.geometry(layout);
        DrawCommand::Tile {
            position: geometry.position,
            size: geometry.size,
            opacity: 1.0,
            label: tile.label(),
            font_size: geometry.font_size,
            color: palette::tile_color(tile.value),
        }
    }

    pub fn opacity(&self) -> f32 {
        match self {
            DrawCommand::Tile { opacity, .. } | DrawCommand::Overlay { opacity, .. } => *opacity,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DrawCommand::Tile { label, .. } | DrawCommand::Overlay { label, .. } => label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coord, TileId};

    #[test]
    fn test_resting_tile_command() {
        let layout = Layout::default();
        let tile = Tile::new(TileId(0), 8, layout.cell_origin(Coord::new(1, 2)));
        match DrawCommand::for_tile(&tile, &layout) {
            DrawCommand::Tile {
                position,
                size,
                opacity,
                label,
                font_size,
                color,
            } => {
                assert_eq!(position, vec2(230.0, 118.0));
                assert_eq!(size, 100.0);
                assert_eq!(opacity, 1.0);
                assert_eq!(label, "8");
                assert_eq!(font_size, 24.0);
                assert_eq!(color, palette::tile_color(8));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
