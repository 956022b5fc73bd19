//! Status messages produced by the engine and rendered verbatim by the
//! front-end.

use core::fmt;

use crate::ship::{Orientation, ShipClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Prompt to click a cell for the hull of one ship.
    PlacePrompt(ShipClass),
    /// Prompt to click a target anchor for one ship.
    AimPrompt(ShipClass),
    /// The placement orientation toggle changed.
    OrientationChanged(Orientation),
    /// All ships are down and the volley phase begins.
    YourTurn,
    /// The human volley was resolved.
    VolleyFired,
    /// Alive-ship counts after a round.
    FleetReport { human: usize, computer: usize },
    /// Radar: an unhit enemy ship lies in the row of attack `attack`.
    RadarContactRow { attack: usize },
    /// Radar: an unhit enemy ship lies in the column of attack `attack`.
    RadarContactColumn { attack: usize },
    /// Radar: no contact near any recorded attack.
    RadarSilent,
    /// Every computer ship is sunk.
    Victory,
    /// Every human ship is sunk.
    Defeat,
}

impl Notice {
    /// Radar notices go to the dedicated radar label when the front-end has
    /// one.
    pub fn is_radar(&self) -> bool {
        matches!(
            self,
            Notice::RadarContactRow { .. } | Notice::RadarContactColumn { .. } | Notice::RadarSilent
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::PlacePrompt(class) => write!(f, "Place your {}", class),
            Notice::AimPrompt(class) => write!(f, "Select the targets for your {}", class),
            Notice::OrientationChanged(Orientation::Horizontal) => {
                write!(f, "Placing ships horizontally.")
            }
            Notice::OrientationChanged(Orientation::Vertical) => {
                write!(f, "Placing ships vertically.")
            }
            Notice::YourTurn => write!(f, "It is your turn, launch your attacks"),
            Notice::VolleyFired => write!(f, "You fired at the enemy field"),
            Notice::FleetReport { human, computer } => write!(
                f,
                "Your ships alive: {}    Computer ships alive: {}",
                human, computer
            ),
            Notice::RadarContactRow { attack } => write!(
                f,
                "A ship lies in the firing row of your attack number {}",
                attack
            ),
            Notice::RadarContactColumn { attack } => write!(
                f,
                "A ship lies in the firing column of your attack number {}",
                attack
            ),
            Notice::RadarSilent => write!(f, "No ship detected by the radar..."),
            Notice::Victory => write!(f, "The computer fleet is destroyed, you win"),
            Notice::Defeat => write!(f, "Your fleet is destroyed, you lose"),
        }
    }
}
