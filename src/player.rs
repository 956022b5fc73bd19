//! The two sides of a session, each owning one board.

use crate::board::Board;
use crate::error::GameError;
use crate::grid::Coord;
use crate::ship::{Orientation, ShipClass};

/// Which side a player is on. Exactly one of each per session, fixed at
/// game creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Human,
    Computer,
}

/// A participant: side identity plus one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    side: Side,
    board: Board,
}

impl Player {
    pub fn new(side: Side) -> Self {
        Player {
            side,
            board: Board::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Place one ship on this player's board.
    pub fn place_ship(
        &mut self,
        class: ShipClass,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.board.place_ship(class, anchor, orientation)
    }
}
