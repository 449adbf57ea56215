pub mod board;
pub mod geometry;
pub mod tile;

pub use board::{Board, PendingSpawn, SpawnKind};
pub use geometry::{Coord, Direction, ParseDirectionError, GRID_SIZE};
pub use tile::{AnimationKind, Tile, TileAnimation, TileGeometry, TileId};
