// src/models/board.rs
//
// The Board owns every tile in the game.
//
// A slide updates the logical grid immediately and starts move animations.
// Tiles created by the slide (merge results and the new spawn) stay hidden
// in the pending queue until the merged-away tiles are gone and nothing is
// animating, so their enter/merge animations never overlap a move.

use rand::Rng;
use std::collections::VecDeque;
use std::fmt;

use super::geometry::{Coord, Direction, GRID_SIZE};
use super::tile::{Tile, TileId};
use crate::config::BoardConfig;

/// Which animation a pending tile plays once it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    Enter,
    Merge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSpawn {
    pub tile: TileId,
    pub target: Coord,
    pub kind: SpawnKind,
}

pub struct Board {
    config: BoardConfig,
    cells: [[Option<Tile>; GRID_SIZE]; GRID_SIZE],
    merged_tiles: Vec<Tile>,
    pending: VecDeque<PendingSpawn>,
    next_id: u64,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            cells: Default::default(),
            merged_tiles: Vec::new(),
            pending: VecDeque::new(),
            next_id: 0,
        }
    }

    /// Build a settled board. `rows[r][c]` is the value at row r (row 0 at the bottom), 0 is empty.
    pub fn from_rows(config: BoardConfig, rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut board = Self::new(config);
        for coord in Coord::all() {
            let value = rows[coord.row][coord.col];
            if value != 0 {
                let tile = board.create_tile(value, coord);
                board.cells[coord.row][coord.col] = Some(tile);
            }
        }
        board
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Clear the board and place the two opening tiles.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells = Default::default();
        self.merged_tiles.clear();
        self.pending.clear();

        for _ in 0..2 {
            let coord = self.spawn_tile(rng);
            let origin = self.config.layout.cell_origin(coord);
            if let Some(tile) = self.slot_mut(coord) {
                tile.animate_enter(origin);
            }
        }
        log::info!("New game:\n{}", self);
    }

    /************************** Grid queries ********************************** */

    pub fn tile_at(&self, coord: Coord) -> Option<&Tile> {
        self.cells[coord.row][coord.col].as_ref()
    }

    fn slot_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        self.cells[coord.row][coord.col].as_mut()
    }

    fn take(&mut self, coord: Coord) -> Option<Tile> {
        self.cells[coord.row][coord.col].take()
    }

    fn put(&mut self, coord: Coord, tile: Tile) {
        let slot = &mut self.cells[coord.row][coord.col];
        debug_assert!(slot.is_none(), "cell {} already occupied", coord);
        *slot = Some(tile);
    }

    fn value_at(&self, coord: Coord) -> Option<u32> {
        self.tile_at(coord).map(|tile| tile.value)
    }

    /// Tiles bound to a cell, including hidden pending ones.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten().flatten()
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Coord, &Tile)> {
        Coord::all().filter_map(move |coord| self.tile_at(coord).map(|tile| (coord, tile)))
    }

    /// Everything that should be drawn this frame: cell tiles, then tiles merging away.
    pub fn visible_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles()
            .chain(self.merged_tiles.iter())
            .filter(|tile| tile.visible)
    }

    /// Logical values, 0 for an empty cell.
    pub fn values(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut values = [[0; GRID_SIZE]; GRID_SIZE];
        for (coord, tile) in self.occupied() {
            values[coord.row][coord.col] = tile.value;
        }
        values
    }

    pub fn value_sum(&self) -> u32 {
        self.tiles().map(|tile| tile.value).sum()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    pub fn empty_count(&self) -> usize {
        GRID_SIZE * GRID_SIZE - self.tile_count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    pub fn merged_len(&self) -> usize {
        self.merged_tiles.len()
    }

    pub fn pending(&self) -> impl Iterator<Item = &PendingSpawn> {
        self.pending.iter()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_animating(&self) -> bool {
        self.tiles().any(Tile::is_animating) || !self.pending.is_empty()
    }

    /// Full board with no equal neighbours. Only meaningful once animations settle.
    pub fn is_over(&self) -> bool {
        self.is_full()
            && Coord::all().all(|coord| {
                let value = self.value_at(coord);
                [Direction::Up, Direction::Right]
                    .into_iter()
                    .filter_map(|direction| coord.step(direction))
                    .all(|neighbour| self.value_at(neighbour) != value)
            })
    }

    /************************** Spawning ********************************** */

    fn create_tile(&mut self, value: u32, coord: Coord) -> Tile {
        let id = TileId(self.next_id);
        self.next_id += 1;
        Tile::new(id, value, self.config.layout.cell_origin(coord))
    }

    /// Place a visible 2 (or 4) on a random empty cell.
    ///
    /// Panics on a full board: callers must only spawn after an effective slide.
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Coord {
        assert!(!self.is_full(), "cannot spawn a tile on a full board");

        let coord = loop {
            let coord = Coord::new(rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE));
            if self.tile_at(coord).is_none() {
                break coord;
            }
        };
        let value = if rng.gen_bool(self.config.spawn.four_probability) {
            4
        } else {
            2
        };

        let tile = self.create_tile(value, coord);
        log::debug!("spawn {} {} at {}", tile.id, value, coord);
        self.put(coord, tile);
        coord
    }

    /************************** Sliding ********************************** */

    /// Compact every line toward `direction`, merging equal neighbours once.
    ///
    /// Returns whether anything moved. Input is dropped while animating or
    /// after the game is over.
    pub fn slide<R: Rng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> bool {
        if self.is_animating() || self.is_over() {
            log::debug!("ignoring slide {}: board busy or over", direction);
            return false;
        }
        log::trace!("before slide {}:\n{}", direction, self);

        let mut effective = false;
        for line in 0..GRID_SIZE {
            effective |= self.slide_line(direction, line);
        }

        if effective {
            let coord = self.spawn_tile(rng);
            if let Some(tile) = self.slot_mut(coord) {
                tile.hide();
                let id = tile.id;
                self.pending.push_back(PendingSpawn {
                    tile: id,
                    target: coord,
                    kind: SpawnKind::Enter,
                });
            }
        }

        log::trace!("after slide {}:\n{}", direction, self);
        effective
    }

    // Cells are visited from the edge outward, so everything nearer the edge
    // has already settled when a tile looks for its obstacle.
    fn slide_line(&mut self, direction: Direction, line: usize) -> bool {
        let mut effective = false;
        let mut merged = [false; GRID_SIZE];

        for distance in 1..GRID_SIZE {
            let from = direction.cell(line, distance);
            let Some(value) = self.value_at(from) else {
                continue;
            };

            let obstacle = (0..distance)
                .rev()
                .find(|&d| self.tile_at(direction.cell(line, d)).is_some());

            if let Some(d) = obstacle {
                let target = direction.cell(line, d);
                if !merged[d] && self.value_at(target) == Some(value) {
                    self.merge_into(from, target);
                    merged[d] = true;
                    effective = true;
                    continue;
                }
            }

            let rest = obstacle.map_or(0, |d| d + 1);
            if rest != distance {
                self.move_tile(from, direction.cell(line, rest));
                effective = true;
            }
        }
        effective
    }

    fn move_tile(&mut self, from: Coord, to: Coord) {
        let origin = self.config.layout.cell_origin(to);
        if let Some(mut tile) = self.take(from) {
            log::debug!("move {} -> {}", from, to);
            tile.animate_move(origin);
            self.put(to, tile);
        }
    }

    fn merge_into(&mut self, from: Coord, target: Coord) {
        let origin = self.config.layout.cell_origin(target);
        let Some(mut source) = self.take(from) else {
            return;
        };
        log::debug!("merge {} -> {}", from, target);

        source.animate_move(origin);
        let absorbed = self.take(target);

        let mut result = self.create_tile(source.value * 2, target);
        result.hide();
        self.pending.push_back(PendingSpawn {
            tile: result.id,
            target,
            kind: SpawnKind::Merge,
        });

        self.merged_tiles.push(source);
        self.merged_tiles.extend(absorbed);
        self.put(target, result);
    }

    /************************** Frame update ********************************** */

    /// Advance animations by `dt` seconds and release pending tiles once it is safe.
    pub fn tick(&mut self, dt: f32) {
        if !self.merged_tiles.is_empty() && self.merged_tiles.iter().all(|t| !t.is_animating()) {
            log::trace!("deleting {} merged tiles", self.merged_tiles.len());
            self.merged_tiles.clear();
        }

        if !self.pending.is_empty()
            && self.merged_tiles.is_empty()
            && self.tiles().all(|t| !t.is_animating())
        {
            self.apply_pending();
        }

        let config = &self.config.animation;
        for tile in self.cells.iter_mut().flatten().flatten() {
            if tile.tick(dt, config) {
                log::trace!("tile {} settled", tile.id);
            }
        }
        for tile in self.merged_tiles.iter_mut() {
            if tile.tick(dt, config) {
                log::trace!("merged tile {} finished sliding", tile.id);
            }
        }
    }

    fn locate(&self, id: TileId) -> Option<Coord> {
        self.occupied()
            .find(|(_, tile)| tile.id == id)
            .map(|(coord, _)| coord)
    }

    fn apply_pending(&mut self) {
        let pending: Vec<PendingSpawn> = self.pending.drain(..).collect();
        for spawn in pending {
            let Some(coord) = self.locate(spawn.tile) else {
                log::warn!("pending tile {} is no longer on the board", spawn.tile);
                continue;
            };
            let origin = self.config.layout.cell_origin(coord);
            if let Some(tile) = self.slot_mut(coord) {
                tile.show();
                match spawn.kind {
                    SpawnKind::Enter => tile.animate_enter(origin),
                    SpawnKind::Merge => tile.animate_merge(origin),
                }
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // top row first so it reads like the screen
        for row in (0..GRID_SIZE).rev() {
            for col in 0..GRID_SIZE {
                match self.value_at(Coord::new(row, col)) {
                    Some(value) => write!(f, "{:>5}", value)?,
                    None => write!(f, "{:>5}", ".")?,
                }
            }
            if row > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("values", &self.values())
            .field("merged_tiles", &self.merged_tiles.len())
            .field("pending", &self.pending)
            .finish()
    }
}
