//! Computer opponent: random fleet placement and uniform-random volleys.

use rand::Rng;

use crate::board::Board;
use crate::config::{BOARD_SIZE, FLEET};
use crate::error::GameError;
use crate::grid::Coord;

/// Place one ship of every class, smallest hull first, at random legal
/// positions. Classes already on the board are left where they are.
pub fn place_fleet<R: Rng + ?Sized>(rng: &mut R, board: &mut Board) -> Result<(), GameError> {
    for class in FLEET {
        if board.has_placed(class) {
            continue;
        }
        let (anchor, orientation) = board.random_placement(rng, class)?;
        board.place_ship(class, anchor, orientation)?;
    }
    Ok(())
}

/// Uniform anchor for one counter-volley shot.
pub fn random_anchor<R: Rng + ?Sized>(rng: &mut R) -> Coord {
    Coord::new(
        rng.random_range(0..BOARD_SIZE),
        rng.random_range(0..BOARD_SIZE),
    )
}
