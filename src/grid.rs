//! Cell grid storage for a single board.

use core::ops::{Index, IndexMut};

use crate::config::BOARD_SIZE;
use crate::error::GameError;

/// A coordinate on the 10×10 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Offset by a signed delta; `None` when the result leaves the grid.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Coord> {
        let row = self.row as i32 + dr as i32;
        let col = self.col as i32 + dc as i32;
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Some(Coord::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

/// What a cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Water,
    Ship,
}

/// A single board location. Row and column are implied by the cell's slot in
/// its [`Grid`] and never change; `state` turns to `Ship` at most once, when
/// a hull is placed over it, and `hit` never clears within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub state: CellState,
    pub hit: bool,
    pub aimed: bool,
}

/// 10×10 matrix of cells, created once per board and fixed for the game
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::default(); BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Bounds-checked lookup. An out-of-range coordinate is a wiring bug in
    /// the caller and reported as such.
    pub fn cell(&self, coord: Coord) -> Result<&Cell, GameError> {
        if coord.in_bounds() {
            Ok(&self.cells[coord.row][coord.col])
        } else {
            Err(GameError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            })
        }
    }

    /// Every coordinate of the grid in row-major order.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }

    /// Coordinates currently flagged as pending targets.
    pub fn aimed_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        Self::coords().filter(move |&c| self[c].aimed)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Cell {
        &self.cells[coord.row][coord.col]
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut Cell {
        &mut self.cells[coord.row][coord.col]
    }
}
