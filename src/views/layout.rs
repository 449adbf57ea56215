// src/views/layout.rs
//
// Pixel layout of the board.
// Pixel space is y-up with (0, 0) at the lower-left corner of the grid area,
// the UI strip sits above the grid.

use nannou::prelude::*;
use serde::Deserialize;

use crate::models::{Coord, GRID_SIZE};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub tile_size: f32,
    pub tile_margin: f32,
    pub font_size: f32,
    pub ui_height: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            tile_size: 100.0,
            tile_margin: 6.0,
            font_size: 24.0,
            ui_height: 100.0,
        }
    }
}

impl Layout {
    /// Tile plus its margin on both sides.
    pub fn full_tile_size(&self) -> f32 {
        self.tile_size + self.tile_margin * 2.0
    }

    pub fn grid_size(&self) -> f32 {
        self.full_tile_size() * GRID_SIZE as f32
    }

    pub fn window_size(&self) -> Vec2 {
        vec2(self.grid_size(), self.grid_size() + self.ui_height)
    }

    /// Lower-left corner of a resting tile in `coord`.
    pub fn cell_origin(&self, coord: Coord) -> Vec2 {
        let full = self.full_tile_size();
        vec2(
            full * coord.col as f32 + self.tile_margin,
            full * coord.row as f32 + self.tile_margin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let layout = Layout::default();
        assert_eq!(layout.full_tile_size(), 112.0);
        assert_eq!(layout.grid_size(), 448.0);
        assert_eq!(layout.window_size(), vec2(448.0, 548.0));
    }

    #[test]
    fn test_cell_origin() {
        let layout = Layout::default();
        assert_eq!(layout.cell_origin(Coord::new(0, 0)), vec2(6.0, 6.0));
        assert_eq!(layout.cell_origin(Coord::new(2, 1)), vec2(118.0, 230.0));
        assert_eq!(layout.cell_origin(Coord::new(3, 3)), vec2(342.0, 342.0));
    }
}
