//! Game session: phase machine, target plan and volley resolution.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::BoardView;
use crate::computer;
use crate::config::{BOARD_SIZE, FLEET, FLEET_SIZE};
use crate::error::GameError;
use crate::grid::{CellState, Coord};
use crate::notice::Notice;
use crate::player::{Player, Side};
use crate::ship::{Orientation, ShipClass};

/// Which input the engine currently accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pre-game, waiting for a placement or the start command.
    Idle,
    /// A placement prompt for one class is outstanding.
    Placing(ShipClass),
    /// A targeting prompt for one class is outstanding.
    SelectingTargets(ShipClass),
    /// The volley phase: target selections and the fire command.
    TargetsReady,
    /// Either fleet is gone; only queries are accepted.
    End,
}

/// Pending selections for the upcoming volley, one slot per class.
#[derive(Debug, Clone, Default)]
struct TargetPlan {
    targets: [Vec<Coord>; FLEET_SIZE],
    /// Selection anchors in click order, for the radar sweep.
    anchors: Vec<Coord>,
}

impl TargetPlan {
    fn has_selection(&self, class: ShipClass) -> bool {
        !self.targets[class.index()].is_empty()
    }

    /// Whether any pending selection already covers `coord`.
    fn claims(&self, coord: Coord) -> bool {
        self.targets.iter().any(|cells| cells.contains(&coord))
    }

    fn selection_count(&self) -> usize {
        self.targets.iter().filter(|cells| !cells.is_empty()).count()
    }

    fn set(&mut self, class: ShipClass, cells: Vec<Coord>, anchor: Coord) {
        self.targets[class.index()] = cells;
        self.anchors.push(anchor);
    }

    fn clear(&mut self) {
        for cells in &mut self.targets {
            cells.clear();
        }
    }
}

/// One in-memory game, owned by the caller and driven one command at a
/// time. Every command runs to completion before the next is accepted;
/// there is no implicit global state.
pub struct GameSession {
    human: Player,
    computer: Player,
    phase: Phase,
    orientation: Orientation,
    plan: TargetPlan,
    notices: Vec<Notice>,
    rng: SmallRng,
}

impl GameSession {
    /// New session with an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_rng(&mut rand::rng()))
    }

    /// New session with a fixed seed, for reproducible games and tests.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        GameSession {
            human: Player::new(Side::Human),
            computer: Player::new(Side::Computer),
            phase: Phase::Idle,
            orientation: Orientation::Horizontal,
            plan: TargetPlan::default(),
            notices: Vec::new(),
            rng,
        }
    }

    // Queries.

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The placement orientation toggle.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn human_view(&self) -> BoardView {
        self.human.board().view()
    }

    pub fn computer_view(&self) -> BoardView {
        self.computer.board().view()
    }

    pub fn human_alive_ships(&self) -> usize {
        self.human.board().alive_ships()
    }

    pub fn computer_alive_ships(&self) -> usize {
        self.computer.board().alive_ships()
    }

    /// Classes still afloat on one side's board.
    pub fn alive_classes(&self, side: Side) -> Vec<ShipClass> {
        let board = match side {
            Side::Human => self.human.board(),
            Side::Computer => self.computer.board(),
        };
        board.fleet().iter().map(|s| s.class()).collect()
    }

    /// Winning side once the phase is [`Phase::End`].
    pub fn winner(&self) -> Option<Side> {
        if self.phase != Phase::End {
            return None;
        }
        if self.computer.board().alive_ships() == 0 {
            Some(Side::Human)
        } else {
            Some(Side::Computer)
        }
    }

    /// Drain the queued status messages.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        core::mem::take(&mut self.notices)
    }

    // Commands.

    /// "Place ship" button: asks to place `class`, entering the placing
    /// phase until a cell is clicked.
    pub fn request_placement(&mut self, class: ShipClass) -> Result<(), GameError> {
        if self.phase != Phase::Idle {
            return Err(GameError::WrongPhase);
        }
        if self.human.board().has_placed(class) {
            return Err(GameError::AlreadyPlaced(class));
        }
        self.phase = Phase::Placing(class);
        self.notices.push(Notice::PlacePrompt(class));
        Ok(())
    }

    /// Attempt a placement on the human board. Any attempt, successful or
    /// not, returns the session to idle; a failed attempt changes nothing.
    pub fn place_ship(
        &mut self,
        class: ShipClass,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        match self.phase {
            Phase::Idle => {}
            Phase::Placing(c) if c == class => {}
            _ => return Err(GameError::WrongPhase),
        }
        self.phase = Phase::Idle;
        self.human.place_ship(class, anchor, orientation)
    }

    /// Flip the placement orientation toggle.
    pub fn toggle_orientation(&mut self) {
        self.orientation = self.orientation.flipped();
        self.notices.push(Notice::OrientationChanged(self.orientation));
    }

    /// Start the volley phase once the whole human fleet is down,
    /// auto-placing the computer fleet if it is still short.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::End => return Ok(()),
            Phase::Idle | Phase::TargetsReady => {}
            _ => return Err(GameError::WrongPhase),
        }
        if self.human.board().alive_ships() != FLEET.len() {
            return Err(GameError::FleetIncomplete);
        }
        if self.computer.board().alive_ships() < FLEET.len() {
            computer::place_fleet(&mut self.rng, self.computer.board_mut())?;
        }
        self.phase = Phase::TargetsReady;
        self.notices.push(Notice::YourTurn);
        Ok(())
    }

    /// "Select targets" button for one ship.
    pub fn request_targeting(&mut self, class: ShipClass) -> Result<(), GameError> {
        if self.phase != Phase::TargetsReady {
            return Err(GameError::WrongPhase);
        }
        self.check_aim_legality(class)?;
        self.phase = Phase::SelectingTargets(class);
        self.notices.push(Notice::AimPrompt(class));
        Ok(())
    }

    /// Record the firing pattern of `class` anchored at `anchor` as its
    /// pending selection and mark the in-bounds cells on the computer
    /// board. A rejected anchor records nothing.
    pub fn select_targets(&mut self, class: ShipClass, anchor: Coord) -> Result<(), GameError> {
        match self.phase {
            Phase::SelectingTargets(c) if c == class => {}
            // Direct call without the button step; same legality checks.
            Phase::TargetsReady => self.check_aim_legality(class)?,
            _ => return Err(GameError::WrongPhase),
        }
        self.phase = Phase::TargetsReady;
        let cell = self.computer.board().cell(anchor)?;
        if cell.hit || self.plan.claims(anchor) {
            return Err(GameError::InvalidTarget);
        }
        let cells: Vec<Coord> = class.attack_cells(anchor).collect();
        for &c in &cells {
            self.computer.board_mut().mark_aimed(c);
        }
        self.plan.set(class, cells, anchor);
        Ok(())
    }

    fn check_aim_legality(&self, class: ShipClass) -> Result<(), GameError> {
        // Every class was placed before the game started, so a class
        // missing from the fleet has been sunk.
        if !self.human.board().has_placed(class) {
            return Err(GameError::ShipSunk(class));
        }
        if self.plan.has_selection(class) {
            return Err(GameError::AlreadyAimed(class));
        }
        Ok(())
    }

    /// Resolve the volley: the human strike, the radar sweep, then the
    /// computer's counter-volley. Legal only when every alive human ship
    /// has a pending selection; otherwise nothing is mutated.
    pub fn fire(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::TargetsReady {
            return Err(GameError::WrongPhase);
        }
        if self.plan.selection_count() != self.human.board().alive_ships() {
            return Err(GameError::NotAllShipsTargeted);
        }

        let struck = self.computer.board_mut().strike_aimed();
        self.computer.board_mut().refresh_fleet();
        log::debug!("human volley struck {} cells", struck);

        let anchors = core::mem::take(&mut self.plan.anchors);
        self.radar_sweep(&anchors);
        self.notices.push(Notice::VolleyFired);
        self.plan.clear();

        self.counter_volley();

        self.human.board_mut().refresh_fleet();
        self.computer.board_mut().refresh_fleet();
        self.notices.push(Notice::FleetReport {
            human: self.human.board().alive_ships(),
            computer: self.computer.board().alive_ships(),
        });

        if self.computer.board().alive_ships() == 0 {
            log::info!("computer fleet destroyed");
            self.notices.push(Notice::Victory);
            self.phase = Phase::End;
        } else if self.human.board().alive_ships() == 0 {
            log::info!("human fleet destroyed");
            self.notices.push(Notice::Defeat);
            self.phase = Phase::End;
        }
        Ok(())
    }

    /// One uniform-random shot per surviving computer ship, each expanding
    /// that ship's firing pattern against the human board.
    fn counter_volley(&mut self) {
        let classes: Vec<ShipClass> = self
            .computer
            .board()
            .fleet()
            .iter()
            .map(|s| s.class())
            .collect();
        for class in classes {
            let anchor = computer::random_anchor(&mut self.rng);
            log::debug!(
                "computer {} fires at ({}, {})",
                class,
                anchor.row,
                anchor.col
            );
            for coord in class.attack_cells(anchor) {
                self.human.board_mut().apply_hit(coord);
            }
        }
    }

    /// Scan the row and column of every recorded attack anchor for unhit
    /// enemy ship cells and report contacts; one silent notice when nothing
    /// was found anywhere.
    fn radar_sweep(&mut self, anchors: &[Coord]) {
        let grid = self.computer.board().grid();
        let mut contacts = 0;
        for (i, &anchor) in anchors.iter().enumerate() {
            let attack = i + 1;
            let unhit_ship =
                |c: Coord| grid[c].state == CellState::Ship && !grid[c].hit;
            if (0..BOARD_SIZE).any(|col| unhit_ship(Coord::new(anchor.row, col))) {
                self.notices.push(Notice::RadarContactRow { attack });
                contacts += 1;
            }
            if (0..BOARD_SIZE).any(|row| unhit_ship(Coord::new(row, anchor.col))) {
                self.notices.push(Notice::RadarContactColumn { attack });
                contacts += 1;
            }
        }
        if contacts == 0 {
            self.notices.push(Notice::RadarSilent);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
