use broadside::{
    CellState, Coord, GameError, GameSession, Notice, Orientation, Phase, ShipClass, Side, FLEET,
};

fn place_human_fleet(session: &mut GameSession) {
    session
        .place_ship(ShipClass::Corvette, Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    session
        .place_ship(ShipClass::Submarine, Coord::new(2, 0), Orientation::Horizontal)
        .unwrap();
    session
        .place_ship(ShipClass::Frigate, Coord::new(4, 0), Orientation::Horizontal)
        .unwrap();
    session
        .place_ship(ShipClass::Destroyer, Coord::new(6, 0), Orientation::Horizontal)
        .unwrap();
}

fn ready_session(seed: u64) -> GameSession {
    let mut session = GameSession::from_seed(seed);
    place_human_fleet(&mut session);
    session.start_game().unwrap();
    session
}

/// Anchors whose patterns never claim one another's anchor cell.
fn aim_standard(session: &mut GameSession) {
    session
        .select_targets(ShipClass::Corvette, Coord::new(0, 0))
        .unwrap();
    session
        .select_targets(ShipClass::Submarine, Coord::new(3, 3))
        .unwrap();
    session
        .select_targets(ShipClass::Frigate, Coord::new(6, 6))
        .unwrap();
    session
        .select_targets(ShipClass::Destroyer, Coord::new(8, 1))
        .unwrap();
}

#[test]
fn placement_prompt_flow() {
    let mut session = GameSession::from_seed(1);
    session.request_placement(ShipClass::Corvette).unwrap();
    assert_eq!(session.phase(), Phase::Placing(ShipClass::Corvette));

    session
        .place_ship(ShipClass::Corvette, Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(session.phase(), Phase::Idle);

    assert_eq!(
        session.request_placement(ShipClass::Corvette).unwrap_err(),
        GameError::AlreadyPlaced(ShipClass::Corvette)
    );
    assert_eq!(session.phase(), Phase::Idle);

    let notices = session.take_notices();
    assert!(notices.contains(&Notice::PlacePrompt(ShipClass::Corvette)));
}

#[test]
fn failed_placement_returns_to_idle_and_keeps_the_board() {
    let mut session = GameSession::from_seed(1);
    session
        .place_ship(ShipClass::Corvette, Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    session.request_placement(ShipClass::Submarine).unwrap();

    // overlaps the corvette's second hull cell
    let err = session
        .place_ship(ShipClass::Submarine, Coord::new(0, 1), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, GameError::Overlap);
    assert_eq!(session.phase(), Phase::Idle);

    let view = session.human_view();
    for (col, state) in [
        (0, CellState::Ship),
        (1, CellState::Ship),
        (2, CellState::Water),
        (3, CellState::Water),
    ] {
        assert_eq!(view.cell(Coord::new(0, col)).unwrap().state, state);
    }
}

#[test]
fn orientation_toggle_is_reported() {
    let mut session = GameSession::from_seed(1);
    assert_eq!(session.orientation(), Orientation::Horizontal);
    session.toggle_orientation();
    assert_eq!(session.orientation(), Orientation::Vertical);
    assert!(session
        .take_notices()
        .contains(&Notice::OrientationChanged(Orientation::Vertical)));
}

#[test]
fn start_requires_the_full_fleet() {
    let mut session = GameSession::from_seed(5);
    session
        .place_ship(ShipClass::Corvette, Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        session.start_game().unwrap_err(),
        GameError::FleetIncomplete
    );
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.computer_alive_ships(), 0, "no auto-placement yet");
}

#[test]
fn start_autoplaces_the_computer_fleet() {
    let session = ready_session(5);
    assert_eq!(session.phase(), Phase::TargetsReady);
    assert_eq!(session.computer_alive_ships(), FLEET.len());

    let expected: usize = FLEET.iter().map(|c| c.size()).sum();
    let ship_cells = session
        .computer_view()
        .iter()
        .filter(|(_, cell)| cell.state == CellState::Ship)
        .count();
    assert_eq!(ship_cells, expected, "legal, non-overlapping auto-placement");
}

#[test]
fn fire_before_any_aim_is_rejected() {
    let mut session = ready_session(5);
    let human = session.human_view();
    let computer = session.computer_view();

    assert_eq!(
        session.fire().unwrap_err(),
        GameError::NotAllShipsTargeted
    );
    assert_eq!(session.phase(), Phase::TargetsReady);
    assert_eq!(session.human_view(), human);
    assert_eq!(session.computer_view(), computer);
}

#[test]
fn aim_flow_rejects_double_booking() {
    let mut session = ready_session(9);

    session.request_targeting(ShipClass::Corvette).unwrap();
    assert_eq!(session.phase(), Phase::SelectingTargets(ShipClass::Corvette));
    session
        .select_targets(ShipClass::Corvette, Coord::new(9, 9))
        .unwrap();
    assert_eq!(session.phase(), Phase::TargetsReady);

    // the corvette already has a pending selection
    assert_eq!(
        session.request_targeting(ShipClass::Corvette).unwrap_err(),
        GameError::AlreadyAimed(ShipClass::Corvette)
    );

    // (9, 9) is claimed by the corvette's pattern
    assert_eq!(
        session
            .select_targets(ShipClass::Submarine, Coord::new(9, 9))
            .unwrap_err(),
        GameError::InvalidTarget
    );
    assert_eq!(session.phase(), Phase::TargetsReady);

    // a clean anchor still works
    session
        .select_targets(ShipClass::Submarine, Coord::new(5, 5))
        .unwrap();
}

#[test]
fn rejected_selection_records_nothing() {
    let mut session = ready_session(9);
    session
        .select_targets(ShipClass::Corvette, Coord::new(4, 4))
        .unwrap();
    let before = session.computer_view();

    let err = session
        .select_targets(ShipClass::Submarine, Coord::new(4, 4))
        .unwrap_err();
    assert_eq!(err, GameError::InvalidTarget);
    assert_eq!(session.computer_view(), before);

    // the submarine can still aim elsewhere, so nothing was recorded for it
    session
        .select_targets(ShipClass::Submarine, Coord::new(7, 7))
        .unwrap();
}

#[test]
fn fire_resolves_the_volley_and_clears_every_aim() {
    let mut session = ready_session(11);
    aim_standard(&mut session);

    let aimed_before = session
        .computer_view()
        .iter()
        .filter(|(_, cell)| cell.aimed)
        .count();
    assert!(aimed_before > 0);

    session.fire().unwrap();

    let view = session.computer_view();
    assert_eq!(
        view.iter().filter(|(_, cell)| cell.aimed).count(),
        0,
        "all pending selections consumed"
    );
    // every previously aimed cell took the hit
    assert!(view.cell(Coord::new(0, 0)).unwrap().hit);
    assert!(view.cell(Coord::new(3, 3)).unwrap().hit);

    let notices = session.take_notices();
    assert!(notices.contains(&Notice::VolleyFired));
    assert!(notices.iter().any(|n| matches!(n, Notice::FleetReport { .. })));
    assert!(notices.iter().any(|n| n.is_radar()));
}

#[test]
fn selections_reset_between_volleys() {
    let mut session = ready_session(13);
    aim_standard(&mut session);
    session.fire().unwrap();

    if session.phase() == Phase::TargetsReady {
        // previously used classes may aim again in the next volley
        for class in session.alive_classes(Side::Human) {
            assert!(!matches!(
                session.request_targeting(class),
                Err(GameError::AlreadyAimed(_))
            ));
            // leave the selection phase before prompting the next class
            if session.phase() == Phase::SelectingTargets(class) {
                let anchor = pick_anchor(&session);
                session.select_targets(class, anchor).unwrap();
            }
        }
    }
}

#[test]
fn aiming_with_fewer_ships_after_losses() {
    // play until a human ship sinks, then check the sunk class is rejected
    let mut session = ready_session(17);
    for _ in 0..200 {
        if session.phase() == Phase::End {
            break;
        }
        let alive = session.alive_classes(Side::Human);
        if alive.len() < FLEET.len() {
            let sunk = FLEET
                .iter()
                .copied()
                .find(|c| !alive.contains(c))
                .expect("a class is missing");
            assert_eq!(
                session.request_targeting(sunk).unwrap_err(),
                GameError::ShipSunk(sunk)
            );
            return;
        }
        play_round(&mut session);
    }
    // the game ended without a partial loss; nothing more to check
}

#[test]
fn sinking_the_whole_fleet_ends_the_game() {
    let mut session = ready_session(23);
    let mut rounds = 0;
    while session.phase() != Phase::End {
        rounds += 1;
        assert!(rounds < 200, "the game should finish");
        play_round(&mut session);
    }

    let winner = session.winner().expect("ended games have a winner");
    match winner {
        Side::Human => assert_eq!(session.computer_alive_ships(), 0),
        Side::Computer => assert_eq!(session.human_alive_ships(), 0),
    }
    let notices = session.take_notices();
    assert!(notices
        .iter()
        .any(|n| matches!(n, Notice::Victory | Notice::Defeat)));

    // terminal: firing and starting change nothing
    assert_eq!(session.fire().unwrap_err(), GameError::WrongPhase);
    session.start_game().unwrap();
    assert_eq!(session.phase(), Phase::End);
}

#[test]
fn wrong_phase_commands_are_rejected() {
    let mut session = GameSession::from_seed(3);
    assert_eq!(session.fire().unwrap_err(), GameError::WrongPhase);
    assert_eq!(
        session.request_targeting(ShipClass::Corvette).unwrap_err(),
        GameError::WrongPhase
    );
    assert_eq!(
        session
            .select_targets(ShipClass::Corvette, Coord::new(0, 0))
            .unwrap_err(),
        GameError::WrongPhase
    );

    place_human_fleet(&mut session);
    session.start_game().unwrap();
    assert_eq!(
        session.request_placement(ShipClass::Corvette).unwrap_err(),
        GameError::WrongPhase
    );
    assert_eq!(
        session
            .place_ship(ShipClass::Corvette, Coord::new(9, 0), Orientation::Horizontal)
            .unwrap_err(),
        GameError::WrongPhase
    );
}

/// First computer-board cell worth shooting: an untargeted ship cell if the
/// view shows one, any untargeted cell otherwise.
fn pick_anchor(session: &GameSession) -> Coord {
    let view = session.computer_view();
    let anchor = view
        .iter()
        .find(|(_, cell)| cell.state == CellState::Ship && !cell.hit && !cell.aimed)
        .or_else(|| view.iter().find(|(_, cell)| !cell.hit && !cell.aimed))
        .map(|(coord, _)| coord)
        .expect("an untargeted cell remains");
    anchor
}

/// Aim every alive ship at a productive anchor and fire.
fn play_round(session: &mut GameSession) {
    for class in session.alive_classes(Side::Human) {
        let anchor = pick_anchor(session);
        session.select_targets(class, anchor).unwrap();
    }
    session.fire().unwrap();
}
