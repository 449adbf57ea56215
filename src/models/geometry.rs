// src/models/geometry.rs
//
// Grid coordinates and slide directions.
// Row 0 is the bottom row, matching the y-up pixel space of the views.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const GRID_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE, "coord out of range");
        Self { row, col }
    }

    /// All 16 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Coord { row, col }))
    }

    /// The neighbouring cell one step toward `direction`, or None at the edge.
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let (row, col) = (self.row as isize, self.col as isize);
        let (row, col) = match direction {
            Direction::Up => (row + 1, col),
            Direction::Down => (row - 1, col),
            Direction::Left => (row, col - 1),
            Direction::Right => (row, col + 1),
        };
        let range = 0..GRID_SIZE as isize;
        if range.contains(&row) && range.contains(&col) {
            Some(Coord {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    // Up compacts toward row 3, Right toward col 3
    pub fn toward_high_index(self) -> bool {
        matches!(self, Direction::Up | Direction::Right)
    }

    /// Cell of `line` at distance `distance` from the compaction edge.
    pub fn cell(self, line: usize, distance: usize) -> Coord {
        let along = if self.toward_high_index() {
            GRID_SIZE - 1 - distance
        } else {
            distance
        };
        if self.is_horizontal() {
            Coord::new(line, along)
        } else {
            Coord::new(along, line)
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction '{0}'")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_coords() {
        let coords: Vec<Coord> = Coord::all().collect();
        assert_eq!(coords.len(), 16);
        assert_eq!(coords[0], Coord::new(0, 0));
        assert_eq!(coords[5], Coord::new(1, 1));
        assert_eq!(coords[15], Coord::new(3, 3));
    }

    #[test]
    fn test_step_stops_at_edges() {
        assert_eq!(Coord::new(0, 0).step(Direction::Left), None);
        assert_eq!(Coord::new(0, 0).step(Direction::Down), None);
        assert_eq!(Coord::new(3, 3).step(Direction::Up), None);
        assert_eq!(Coord::new(3, 3).step(Direction::Right), None);
        assert_eq!(Coord::new(1, 2).step(Direction::Up), Some(Coord::new(2, 2)));
        assert_eq!(Coord::new(1, 2).step(Direction::Left), Some(Coord::new(1, 1)));
    }

    #[test]
    fn test_cell_scan_order() {
        // distance 0 is the compaction edge
        assert_eq!(Direction::Left.cell(2, 0), Coord::new(2, 0));
        assert_eq!(Direction::Right.cell(2, 0), Coord::new(2, 3));
        assert_eq!(Direction::Down.cell(1, 3), Coord::new(3, 1));
        assert_eq!(Direction::Up.cell(1, 3), Coord::new(0, 1));
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!(" LEFT ".parse::<Direction>(), Ok(Direction::Left));
        assert!("sideways".parse::<Direction>().is_err());
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
    }
}
