//! Ship classes, hull footprints and firing patterns.

use core::fmt;

use crate::config::BOARD_SIZE;
use crate::error::GameError;
use crate::grid::{Coord, Grid};

/// Orientation of a hull on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// The four ship classes of the game, each with a fixed hull size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShipClass {
    Corvette,
    Submarine,
    Frigate,
    Destroyer,
}

impl ShipClass {
    /// Number of cells the hull occupies.
    pub fn size(self) -> usize {
        match self {
            ShipClass::Corvette => 2,
            ShipClass::Submarine => 3,
            ShipClass::Frigate => 4,
            ShipClass::Destroyer => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShipClass::Corvette => "Corvette",
            ShipClass::Submarine => "Submarine",
            ShipClass::Frigate => "Frigate",
            ShipClass::Destroyer => "Destroyer",
        }
    }

    /// Slot in per-class tables such as the pending target plan.
    pub(crate) fn index(self) -> usize {
        match self {
            ShipClass::Corvette => 0,
            ShipClass::Submarine => 1,
            ShipClass::Frigate => 2,
            ShipClass::Destroyer => 3,
        }
    }

    /// Signed offsets of this class's firing pattern around its anchor.
    ///
    /// The pattern is what one aim action marks on the opponent board; it is
    /// unrelated to the hull shape and may reach past the board edge, in
    /// which case consumers skip the out-of-bounds cells.
    pub fn attack_offsets(self) -> &'static [(i8, i8)] {
        match self {
            ShipClass::Corvette => &[(0, 0), (0, 1)],
            ShipClass::Submarine => &[(-1, 0), (0, 0), (1, 0)],
            ShipClass::Frigate => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            ShipClass::Destroyer => &[(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)],
        }
    }

    /// In-bounds cells of the firing pattern anchored at `anchor`.
    pub fn attack_cells(self, anchor: Coord) -> impl Iterator<Item = Coord> {
        self.attack_offsets()
            .iter()
            .filter_map(move |&(dr, dc)| anchor.offset(dr, dc))
    }

    /// Hull cells for a placement at `anchor` with `orientation`, or an
    /// off-board error when the hull does not fit.
    pub fn footprint(
        self,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<Vec<Coord>, GameError> {
        let len = self.size();
        let fits = anchor.in_bounds()
            && match orientation {
                Orientation::Horizontal => anchor.col + len <= BOARD_SIZE,
                Orientation::Vertical => anchor.row + len <= BOARD_SIZE,
            };
        if !fits {
            return Err(GameError::OffBoard);
        }
        Ok((0..len)
            .map(|i| match orientation {
                Orientation::Horizontal => Coord::new(anchor.row, anchor.col + i),
                Orientation::Vertical => Coord::new(anchor.row + i, anchor.col),
            })
            .collect())
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A placed ship: its class and the cells the hull occupies. Constructed
/// only by a successful placement, so a ship always owns exactly
/// `class.size()` distinct cells; an unplaced ship does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    cells: Vec<Coord>,
}

impl Ship {
    pub(crate) fn new(class: ShipClass, cells: Vec<Coord>) -> Self {
        debug_assert_eq!(cells.len(), class.size());
        Ship { class, cells }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// The cells the hull occupies, in placement order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// A ship stays alive while any hull cell is unhit.
    pub fn is_alive(&self, grid: &Grid) -> bool {
        self.cells.iter().any(|&c| !grid[c].hit)
    }
}
