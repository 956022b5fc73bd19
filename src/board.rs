//! One player's board: the cell grid plus the placed fleet.

use rand::Rng;

use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::error::GameError;
use crate::grid::{Cell, CellState, Coord, Grid};
use crate::ship::{Orientation, Ship, ShipClass};

/// Rendering snapshot of a board: per-cell state/hit/aimed plus the alive
/// count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    cells: Grid,
    alive: usize,
}

impl BoardView {
    pub fn cell(&self, coord: Coord) -> Result<&Cell, GameError> {
        self.cells.cell(coord)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.cell(Coord::new(row, col)).ok()
    }

    pub fn alive_ships(&self) -> usize {
        self.alive
    }

    /// Every cell with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Grid::coords().map(move |c| (c, self.cells[c]))
    }
}

/// A 10×10 board and the ships placed on it.
///
/// The fleet holds placed, not-yet-sunk ships; [`Board::refresh_fleet`] is
/// the only way a ship leaves it. Occupied-cell sets of any two ships are
/// disjoint by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    fleet: Vec<Ship>,
}

impl Board {
    pub fn new() -> Self {
        Board {
            grid: Grid::new(),
            fleet: Vec::new(),
        }
    }

    /// Bounds-checked cell lookup.
    pub fn cell(&self, coord: Coord) -> Result<&Cell, GameError> {
        self.grid.cell(coord)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Ships currently alive on this board.
    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    pub fn alive_ships(&self) -> usize {
        self.fleet.len()
    }

    /// Whether a ship of `class` is present (placed and not yet sunk).
    pub fn has_placed(&self, class: ShipClass) -> bool {
        self.fleet.iter().any(|s| s.class() == class)
    }

    pub fn ship(&self, class: ShipClass) -> Option<&Ship> {
        self.fleet.iter().find(|s| s.class() == class)
    }

    /// Validates and places one ship. All hull cells must lie inside the
    /// grid and be water; nothing is mutated unless every check passes, so
    /// a failed attempt leaves the board exactly as it was.
    pub fn place_ship(
        &mut self,
        class: ShipClass,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if self.has_placed(class) {
            return Err(GameError::AlreadyPlaced(class));
        }
        let cells = class.footprint(anchor, orientation)?;
        if cells.iter().any(|&c| self.grid[c].state == CellState::Ship) {
            return Err(GameError::Overlap);
        }
        for &c in &cells {
            self.grid[c].state = CellState::Ship;
        }
        log::debug!(
            "placed {} at ({}, {}) {:?}",
            class,
            anchor.row,
            anchor.col,
            orientation
        );
        self.fleet.push(Ship::new(class, cells));
        Ok(())
    }

    /// Random legal placement for `class`: a fresh uniform anchor and
    /// orientation every attempt, rejection-sampled with a bounded number
    /// of tries.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        class: ShipClass,
    ) -> Result<(Coord, Orientation), GameError> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let anchor = Coord::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            let Ok(cells) = class.footprint(anchor, orientation) else {
                continue;
            };
            if cells.iter().all(|&c| self.grid[c].state == CellState::Water) {
                return Ok((anchor, orientation));
            }
        }
        Err(GameError::PlacementExhausted(class))
    }

    /// Marks the addressed cell hit. Re-hitting is a silent no-op; hits
    /// never clear within a game.
    pub fn apply_hit(&mut self, coord: Coord) {
        self.grid[coord].hit = true;
    }

    /// Flags a cell as a pending target.
    pub fn mark_aimed(&mut self, coord: Coord) {
        self.grid[coord].aimed = true;
    }

    /// Resolve every pending target on this board: clear the aimed flag and
    /// land the hit. Returns the number of cells struck.
    pub fn strike_aimed(&mut self) -> usize {
        let mut struck = 0;
        for coord in Grid::coords() {
            let cell = &mut self.grid[coord];
            if cell.aimed {
                cell.aimed = false;
                cell.hit = true;
                struck += 1;
            }
        }
        struck
    }

    /// Drop sunk ships from the fleet. This is the sole mechanism by which
    /// a ship leaves the active count; run it after every volley before
    /// reading counts for win detection.
    pub fn refresh_fleet(&mut self) {
        let grid = &self.grid;
        self.fleet.retain(|ship| ship.is_alive(grid));
    }

    pub fn view(&self) -> BoardView {
        BoardView {
            cells: self.grid.clone(),
            alive: self.fleet.len(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
