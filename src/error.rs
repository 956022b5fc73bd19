//! Error taxonomy for engine commands.

use thiserror::Error;

use crate::ship::ShipClass;

/// Errors returned by engine commands. The `Display` renderings double as
/// the user-facing rejection messages; a front-end shows them verbatim.
///
/// Every variant except `OutOfBounds` is recoverable: the command is
/// rejected without mutating any state. `OutOfBounds` indicates a wiring
/// bug in the presentation layer, which on a fixed 10×10 grid should never
/// produce such a coordinate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("the ship would stick out of the map, place it again")]
    OffBoard,
    #[error("ships cannot overlap, pick another position")]
    Overlap,
    #[error("you already placed your {0}")]
    AlreadyPlaced(ShipClass),
    #[error("you have not placed all of your ships yet")]
    FleetIncomplete,
    #[error("you are aiming at an invalid cell")]
    InvalidTarget,
    #[error("you already aimed with your {0}")]
    AlreadyAimed(ShipClass),
    #[error("your {0} is sunk")]
    ShipSunk(ShipClass),
    #[error("not all ships have targeted")]
    NotAllShipsTargeted,
    #[error("no legal position was found for the {0}")]
    PlacementExhausted(ShipClass),
    #[error("that command is not available in the current phase")]
    WrongPhase,
}
