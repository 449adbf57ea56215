// src/models/tile.rs
//
// A single tile: its value and the animation it is currently playing.
// The tile knows nothing about the grid, only the pixel origin it rests at.

use nannou::prelude::*;
use std::fmt;

use crate::config::AnimationConfig;
use crate::views::Layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    Enter,
    Move,
    Merge,
}

/// The phase a tile is in while animating. `step` runs 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileAnimation {
    /// Grows from nothing at the centre of its cell.
    Enter { step: f32 },
    /// Slides in from `offset` away from its rest origin.
    Move { step: f32, offset: Vec2 },
    /// Briefly bulges after a merge.
    Merge { step: f32 },
}

impl TileAnimation {
    pub fn kind(&self) -> AnimationKind {
        match self {
            TileAnimation::Enter { .. } => AnimationKind::Enter,
            TileAnimation::Move { .. } => AnimationKind::Move,
            TileAnimation::Merge { .. } => AnimationKind::Merge,
        }
    }

    pub fn step(&self) -> f32 {
        match *self {
            TileAnimation::Enter { step }
            | TileAnimation::Move { step, .. }
            | TileAnimation::Merge { step } => step,
        }
    }

    fn set_step(&mut self, new_step: f32) {
        match self {
            TileAnimation::Enter { step }
            | TileAnimation::Move { step, .. }
            | TileAnimation::Merge { step } => *step = new_step,
        }
    }
}

// 0 at step 0 and 1, peaks at 0.1 halfway
pub fn merge_factor(step: f32) -> f32 {
    (0.5 - (step - 0.5).abs()) / 5.0
}

/// Where and how large a tile should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGeometry {
    pub position: Vec2, // lower-left corner
    pub size: f32,
    pub font_size: f32,
}

impl TileGeometry {
    pub fn center(&self) -> Vec2 {
        self.position + vec2(self.size / 2.0, self.size / 2.0)
    }
}

#[derive(Debug, Clone)]
pub struct Tile {
    pub id: TileId,
    pub value: u32,
    pub visible: bool,
    origin: Vec2,
    animation: Option<TileAnimation>,
}

impl Tile {
    pub fn new(id: TileId, value: u32, origin: Vec2) -> Self {
        assert!(
            value >= 2 && value.is_power_of_two(),
            "tile value must be a power of two >= 2, got {}",
            value
        );
        Self {
            id,
            value,
            visible: true,
            origin,
            animation: None,
        }
    }

    pub fn label(&self) -> String {
        self.value.to_string()
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn animation(&self) -> Option<&TileAnimation> {
        self.animation.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    fn begin(&mut self, animation: TileAnimation) {
        assert!(
            self.animation.is_none(),
            "tile {} cannot start {:?} while {:?} is running",
            self.id,
            animation.kind(),
            self.animation
        );
        self.animation = Some(animation);
    }

    pub fn animate_enter(&mut self, origin: Vec2) {
        self.begin(TileAnimation::Enter { step: 0.0 });
        self.origin = origin;
    }

    pub fn animate_move(&mut self, origin: Vec2) {
        self.begin(TileAnimation::Move {
            step: 0.0,
            offset: origin - self.origin,
        });
        self.origin = origin;
    }

    pub fn animate_merge(&mut self, origin: Vec2) {
        self.begin(TileAnimation::Merge { step: 0.0 });
        self.origin = origin;
    }

    /// Advance the running animation by `dt` seconds. Returns true when it finished this tick.
    pub fn tick(&mut self, dt: f32, config: &AnimationConfig) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };

        let duration = config.duration_secs(animation.kind());
        let step = (animation.step() + dt / duration).min(1.0);
        if step < 1.0 {
            animation.set_step(step);
            false
        } else {
            self.animation = None;
            true
        }
    }

    pub fn geometry(&self, layout: &Layout) -> TileGeometry {
        let tile_size = layout.tile_size;
        match self.animation {
            None => TileGeometry {
                position: self.origin,
                size: tile_size,
                font_size: layout.font_size,
            },
            Some(TileAnimation::Enter { step }) => {
                let offset = tile_size / 2.0 * (1.0 - step);
                TileGeometry {
                    position: self.origin + vec2(offset, offset),
                    size: tile_size * step,
                    font_size: layout.font_size * step,
                }
            }
            Some(TileAnimation::Move { step, offset }) => TileGeometry {
                position: self.origin - offset * (1.0 - step),
                size: tile_size,
                font_size: layout.font_size,
            },
            Some(TileAnimation::Merge { step }) => {
                let factor = merge_factor(step);
                let nudge = -tile_size / 2.0 * factor;
                TileGeometry {
                    position: self.origin + vec2(nudge, nudge),
                    size: tile_size * (1.0 + factor),
                    font_size: layout.font_size * (1.0 + factor),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn tile(value: u32) -> Tile {
        Tile::new(TileId(1), value, vec2(6.0, 6.0))
    }

    #[test]
    fn test_rest_geometry() {
        let layout = Layout::default();
        let geometry = tile(2).geometry(&layout);
        assert_eq!(geometry.position, vec2(6.0, 6.0));
        assert_eq!(geometry.size, 100.0);
        assert_eq!(geometry.font_size, 24.0);
        assert_eq!(geometry.center(), vec2(56.0, 56.0));
    }

    #[test]
    #[should_panic]
    fn test_value_must_be_power_of_two() {
        tile(6);
    }

    #[test]
    #[should_panic]
    fn test_value_one_rejected() {
        tile(1);
    }

    #[test]
    fn test_enter_grows_from_center() {
        let layout = Layout::default();
        let config = AnimationConfig::default();
        let mut t = tile(2);
        t.animate_enter(vec2(118.0, 6.0));

        let start = t.geometry(&layout);
        assert_eq!(start.size, 0.0);
        assert_eq!(start.font_size, 0.0);
        assert_eq!(start.position, vec2(168.0, 56.0));

        // half of 150 ms
        t.tick(0.075, &config);
        let mid = t.geometry(&layout);
        assert!((mid.size - 50.0).abs() < EPS);
        assert!((mid.font_size - 12.0).abs() < EPS);
        assert!((mid.center() - vec2(168.0, 56.0)).length() < EPS);
    }

    #[test]
    fn test_move_lerps_from_previous_origin() {
        let layout = Layout::default();
        let config = AnimationConfig::default();
        let mut t = tile(4);
        t.animate_move(vec2(342.0, 6.0));

        assert_eq!(t.geometry(&layout).position, vec2(6.0, 6.0));
        t.tick(0.0375, &config);
        let quarter = t.geometry(&layout).position;
        assert!((quarter.x - 90.0).abs() < EPS);
        assert!((quarter.y - 6.0).abs() < EPS);
    }

    #[test]
    fn test_merge_bulge_peaks_halfway() {
        assert_eq!(merge_factor(0.0), 0.0);
        assert_eq!(merge_factor(1.0), 0.0);
        assert!((merge_factor(0.5) - 0.1).abs() < EPS);
        assert!((merge_factor(0.25) - 0.05).abs() < EPS);

        let layout = Layout::default();
        let config = AnimationConfig::default();
        let mut t = tile(8);
        t.animate_merge(vec2(6.0, 6.0));
        t.tick(0.075, &config);
        let geometry = t.geometry(&layout);
        assert!((geometry.size - 110.0).abs() < EPS);
        assert!((geometry.position.x - 1.0).abs() < EPS);
        // the bulge stays centred on the cell
        assert!((geometry.center() - vec2(56.0, 56.0)).length() < EPS);
    }

    #[test]
    fn test_tick_completes_and_snaps_to_rest() {
        let layout = Layout::default();
        let config = AnimationConfig::default();
        let mut t = tile(2);
        t.animate_move(vec2(118.0, 6.0));

        assert!(!t.tick(0.1, &config));
        assert!(t.is_animating());
        assert!(t.tick(0.1, &config));
        assert!(!t.is_animating());
        let geometry = t.geometry(&layout);
        assert_eq!(geometry.position, vec2(118.0, 6.0));
        assert_eq!(geometry.size, 100.0);
    }

    #[test]
    fn test_step_is_clamped() {
        let config = AnimationConfig::default();
        let mut t = tile(2);
        t.animate_enter(vec2(6.0, 6.0));
        t.tick(0.05, &config);
        let step = t.animation().map(|a| a.step()).unwrap();
        assert!(step > 0.0 && step < 1.0);
        assert!(t.tick(10.0, &config));
        assert!(t.animation().is_none());
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let config = AnimationConfig::default();
        let mut t = tile(2);
        assert!(!t.tick(1.0, &config));
        assert!(t.animation().is_none());
    }

    #[test]
    #[should_panic]
    fn test_overlapping_animation_panics() {
        let mut t = tile(2);
        t.animate_move(vec2(118.0, 6.0));
        t.animate_merge(vec2(118.0, 6.0));
    }

    #[test]
    fn test_hide_and_show() {
        let mut t = tile(2);
        t.hide();
        assert!(!t.visible);
        t.show();
        assert!(t.visible);
        assert_eq!(t.label(), "2");
    }
}
