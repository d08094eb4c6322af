use broadside::{
    parse_coordinate, Action, ActionError, ActionKind, ActionReport, Cell, Coordinate, Game, GameStatus, Mark,
    Orientation, ParseError, Seat, ShipKind, ShotOutcome, Side, Weapon, WeaponState,
};

fn at(token: &str) -> Coordinate {
    parse_coordinate(token).unwrap()
}

/// Carrier A1-E1, Battleship A3-D3, Destroyer A5-C5, Submarine A7-B7.
fn standard_side(name: &str) -> Side {
    let mut side = Side::new(name, true);
    let grid = side.home_mut();
    grid.place_ship(ShipKind::Carrier, at("A1"), Orientation::Horizontal)
        .unwrap();
    grid.place_ship(ShipKind::Battleship, at("A3"), Orientation::Horizontal)
        .unwrap();
    grid.place_ship(ShipKind::Destroyer, at("A5"), Orientation::Horizontal)
        .unwrap();
    grid.place_ship(ShipKind::Submarine, at("A7"), Orientation::Horizontal)
        .unwrap();
    side
}

fn new_game() -> Game {
    Game::new(standard_side("one"), standard_side("two"), Seat::One)
}

const SHIP_CELLS: [&str; 14] = [
    "A1", "B1", "C1", "D1", "E1", "A3", "B3", "C3", "D3", "A5", "B5", "C5", "A7", "B7",
];

#[test]
fn test_turns_alternate() {
    let mut game = new_game();
    assert_eq!(game.current(), Seat::One);
    let report = game.resolve_action(Action::Fire(at("A1"))).unwrap();
    assert_eq!(
        report,
        ActionReport::Shot {
            target: at("A1"),
            outcome: ShotOutcome::Hit,
            unlocks: Default::default(),
        }
    );
    assert_eq!(game.current(), Seat::Two);
    assert_eq!(game.turns(), 1);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_rejection_forfeits_turn() {
    let mut game = new_game();
    let before = game.side(Seat::Two).home().clone();

    let report = game.resolve_action(Action::Smoke(at("A1"))).unwrap();
    assert_eq!(report, ActionReport::Rejected(ActionError::NoSmokeCharge));
    assert_eq!(game.current(), Seat::Two);

    let report = game.resolve_action(Action::Artillery(at("A1"))).unwrap();
    assert_eq!(
        report,
        ActionReport::Rejected(ActionError::WeaponLocked(Weapon::Artillery))
    );
    assert_eq!(game.current(), Seat::One);
    assert_eq!(game.side(Seat::Two).home(), &before);
    assert!(game.side(Seat::One).smoke_screens().is_empty());
}

#[test]
fn test_requests_are_parsed() {
    let mut game = new_game();
    let report = game.resolve_request("FIRE", "b1").unwrap();
    assert!(matches!(
        report,
        ActionReport::Shot {
            outcome: ShotOutcome::Hit,
            ..
        }
    ));

    let report = game.resolve_request("fire", "Z9").unwrap();
    assert_eq!(
        report,
        ActionReport::Rejected(ActionError::Parse(ParseError::InvalidColumn))
    );
    assert_eq!(game.current(), Seat::One);

    let report = game.resolve_request("launch", "A1").unwrap();
    assert_eq!(
        report,
        ActionReport::Rejected(ActionError::Parse(ParseError::UnknownAction))
    );

    let report = game.resolve_request("torpedo", "11").unwrap();
    assert_eq!(
        report,
        ActionReport::Rejected(ActionError::Parse(ParseError::InvalidLine))
    );
    assert_eq!(game.turns(), 4);
}

#[test]
fn test_pending_weapon_opens_on_next_own_turn() {
    let mut game = new_game();
    game.resolve_action(Action::Fire(at("A7"))).unwrap();
    game.resolve_action(Action::Fire(at("J10"))).unwrap();
    let report = game.resolve_action(Action::Fire(at("B7"))).unwrap();
    match report {
        ActionReport::Shot { outcome, unlocks, .. } => {
            assert_eq!(outcome, ShotOutcome::HitAndSunk(ShipKind::Submarine));
            assert!(unlocks.artillery);
        }
        other => panic!("unexpected report {:?}", other),
    }
    assert!(!game.side(Seat::One).can_use(ActionKind::Artillery));
    assert!(game.side(Seat::One).can_use(ActionKind::Smoke));

    game.resolve_action(Action::Fire(at("J9"))).unwrap();
    assert_eq!(game.current(), Seat::One);
    game.begin_turn();
    let actions = game.side(Seat::One).available_actions();
    assert_eq!(
        actions,
        vec![
            ActionKind::Fire,
            ActionKind::Radar,
            ActionKind::Smoke,
            ActionKind::Artillery
        ]
    );

    let report = game.resolve_action(Action::Artillery(at("A1"))).unwrap();
    assert!(matches!(report, ActionReport::Strike(ref s) if s.hits == 2));
    assert!(!game.side(Seat::One).can_use(ActionKind::Artillery));
}

#[test]
fn test_game_ends_when_fleet_sunk() {
    let mut game = new_game();
    let waste: Vec<Coordinate> = Coordinate::all().filter(|c| c.y() >= 8).collect();

    for (i, cell) in SHIP_CELLS.iter().enumerate() {
        game.resolve_action(Action::Fire(at(cell))).unwrap();
        if i + 1 < SHIP_CELLS.len() {
            assert_eq!(game.winner(), None);
            game.resolve_action(Action::Fire(waste[i])).unwrap();
        }
    }

    assert_eq!(game.winner(), Some(Seat::One));
    assert_eq!(game.status(), GameStatus::Won(Seat::One));
    assert!(game.is_over());
    assert_eq!(game.turns(), 27);
    assert_eq!(
        game.resolve_action(Action::Fire(at("J10"))).unwrap(),
        ActionReport::Rejected(ActionError::GameOver)
    );
    assert_eq!(game.turns(), 27);

    let summary = game.summary();
    assert_eq!(summary.winner.as_deref(), Some("one"));
    assert_eq!(summary.sides[0].ships_sunk, 4);
    assert_eq!(summary.sides[1].ships_remaining, 0);
    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"winner\":\"one\""));
}

#[test]
fn test_views() {
    let mut game = new_game();
    game.resolve_action(Action::Fire(at("A1"))).unwrap();
    game.resolve_action(Action::Fire(at("J10"))).unwrap();

    let hidden = game.home_view(Seat::Two, false);
    assert_eq!(hidden.get(at("A1")), Cell::Hit);
    assert_eq!(hidden.get(at("B1")), Cell::Water);
    let shown = game.home_view(Seat::Two, true);
    assert_eq!(shown.get(at("B1")), Cell::ShipSegment(ShipKind::Carrier));

    assert_eq!(game.tracking_view(Seat::One).get(at("A1")), Mark::Hit);
    assert_eq!(game.tracking_view(Seat::Two).get(at("J10")), Mark::Miss);
    assert_eq!(game.home_view(Seat::One, false).get(at("J10")), Cell::Miss);
}

#[test]
fn test_off_grid_torpedo_request_keeps_charge() {
    let mut game = new_game();
    let mine = [
        "A1", "B1", "C1", "D1", "E1", "A3", "B3", "C3", "D3", "A5", "B5", "C5",
    ];
    let water = [
        "J1", "J2", "J3", "J4", "J5", "J6", "J7", "J8", "J9", "J10", "I1", "I2",
    ];
    for (shot, reply) in mine.iter().zip(water.iter()) {
        game.resolve_action(Action::Fire(at(shot))).unwrap();
        game.resolve_action(Action::Fire(at(reply))).unwrap();
    }
    game.begin_turn();
    let torpedo = |game: &Game| game.side(Seat::One).arsenal().state(Weapon::Torpedo);
    assert_eq!(torpedo(&game), WeaponState::Available);

    let report = game.resolve_request("torpedo", "11").unwrap();
    assert_eq!(
        report,
        ActionReport::Rejected(ActionError::Parse(ParseError::InvalidLine))
    );
    assert_eq!(torpedo(&game), WeaponState::Available);
}
