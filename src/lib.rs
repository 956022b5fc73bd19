//! Volley-based Battleship engine for a human-vs-computer game.
//!
//! The crate holds the rules: boards, ship placement, target selection and
//! turn resolution. A presentation layer is an external collaborator that
//! drives [`GameSession`] synchronously, renders board snapshots and shows
//! notices and error messages verbatim.

mod board;
mod computer;
mod config;
mod error;
mod grid;
mod logging;
mod notice;
mod player;
mod session;
mod ship;

pub use board::{Board, BoardView};
pub use computer::{place_fleet, random_anchor};
pub use config::{BOARD_SIZE, FLEET, FLEET_SIZE, MAX_PLACEMENT_ATTEMPTS};
pub use error::GameError;
pub use grid::{Cell, CellState, Coord, Grid};
pub use logging::init_logging;
pub use notice::Notice;
pub use player::{Player, Side};
pub use session::{GameSession, Phase};
pub use ship::{Orientation, Ship, ShipClass};
