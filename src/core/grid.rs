//! Grid geometry: coordinates, dimensions, and movement directions.
//!
//! Grid games (tic-tac-toe) address cells by [`Coord`]; movement games
//! (snake) additionally step coordinates by [`Direction`]. Coordinates are
//! signed so that stepping off the board is representable and can be caught
//! by a bounds check rather than wrapping.

use serde::{Deserialize, Serialize};

/// A cell coordinate. `x` is the column, `y` the row; `(0, 0)` is top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i16,
    pub y: i16,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The coordinate one step in the given direction.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Grid dimensions with bounds checking and linear indexing.
///
/// ```
/// use turncore::{Coord, GridSize};
///
/// let size = GridSize::new(3, 3);
/// assert!(size.contains(Coord::new(2, 2)));
/// assert!(!size.contains(Coord::new(3, 0)));
/// assert_eq!(size.cell_count(), 9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Create grid dimensions. Panics on empty grids.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Grid must be non-empty");
        Self { width, height }
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Is the coordinate inside the grid?
    #[must_use]
    pub const fn contains(self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u16) < self.width
            && (coord.y as u16) < self.height
    }

    /// Linear index for an in-bounds coordinate (row-major).
    #[must_use]
    pub fn index(self, coord: Coord) -> usize {
        debug_assert!(self.contains(coord));
        coord.y as usize * self.width as usize + coord.x as usize
    }

    /// The center cell (rounded down, matching integer-division placement).
    #[must_use]
    pub const fn center(self) -> Coord {
        Coord::new((self.width / 2) as i16, (self.height / 2) as i16)
    }

    /// Iterate over all coordinates in scan order (rows top-to-bottom).
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.height)
            .flat_map(move |y| (0..width).map(move |x| Coord::new(x as i16, y as i16)))
    }
}

/// A movement direction for continuous-movement games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, for legal-move enumeration.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The unit delta `(dx, dy)` for this direction. `Up` decreases `y`.
    #[must_use]
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The 180-degree reverse of this direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
