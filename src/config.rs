use crate::ship::ShipClass;

pub const BOARD_SIZE: usize = 10;
pub const FLEET_SIZE: usize = 4;

/// Fleet composition and the order the computer places it, smallest hull
/// first.
pub const FLEET: [ShipClass; FLEET_SIZE] = [
    ShipClass::Corvette,
    ShipClass::Submarine,
    ShipClass::Frigate,
    ShipClass::Destroyer,
];

/// Bound on the rejection-sampling loop for random placement, so a future
/// change to fleet sizes cannot spin forever.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;
