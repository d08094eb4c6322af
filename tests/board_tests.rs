use broadside::{
    parse_coordinate, BoardError, Cell, Coordinate, Fleet, Footprint, HomeGrid, Orientation, ShipKind, ShotOutcome,
    FLEET, GRID_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn at(token: &str) -> Coordinate {
    parse_coordinate(token).unwrap()
}

#[test]
fn test_carrier_sinks_then_already_targeted() {
    let mut grid = HomeGrid::new();
    let mut fleet = Fleet::new();
    grid.place_ship(ShipKind::Carrier, at("A1"), Orientation::Horizontal)
        .unwrap();

    assert_eq!(grid.receive_shot(&mut fleet, at("A1")).unwrap(), ShotOutcome::Hit);
    assert_eq!(grid.receive_shot(&mut fleet, at("B1")).unwrap(), ShotOutcome::Hit);
    assert_eq!(grid.receive_shot(&mut fleet, at("C1")).unwrap(), ShotOutcome::Hit);
    assert_eq!(grid.receive_shot(&mut fleet, at("D1")).unwrap(), ShotOutcome::Hit);
    assert_eq!(
        grid.receive_shot(&mut fleet, at("E1")).unwrap(),
        ShotOutcome::HitAndSunk(ShipKind::Carrier)
    );
    assert!(fleet.ship(ShipKind::Carrier).is_sunk());

    let before = grid.clone();
    assert_eq!(
        grid.receive_shot(&mut fleet, at("A1")).unwrap(),
        ShotOutcome::AlreadyTargeted
    );
    assert_eq!(grid, before);
    assert_eq!(fleet.ship(ShipKind::Carrier).hits(), 5);
}

#[test]
fn test_miss_marks_water() {
    let mut grid = HomeGrid::new();
    let mut fleet = Fleet::new();
    grid.place_ship(ShipKind::Submarine, at("A1"), Orientation::Vertical)
        .unwrap();

    assert_eq!(grid.receive_shot(&mut fleet, at("B1")).unwrap(), ShotOutcome::Miss);
    assert_eq!(grid.cell(at("B1")), Cell::Miss);
    assert_eq!(
        grid.receive_shot(&mut fleet, at("B1")).unwrap(),
        ShotOutcome::AlreadyTargeted
    );
    assert_eq!(grid.cell(at("A2")), Cell::ShipSegment(ShipKind::Submarine));
}

#[test]
fn test_place_at_edges() {
    let mut grid = HomeGrid::new();
    // F1..J1 just fits
    grid.place_ship(ShipKind::Carrier, at("F1"), Orientation::Horizontal)
        .unwrap();
    // J7..J10 just fits
    grid.place_ship(ShipKind::Battleship, at("J7"), Orientation::Vertical)
        .unwrap();
    assert_eq!(
        grid.place_ship(ShipKind::Destroyer, at("I9"), Orientation::Vertical),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        grid.place_ship(ShipKind::Destroyer, at("I5"), Orientation::Horizontal),
        Err(BoardError::ShipOutOfBounds)
    );
}

#[test]
fn test_place_overlap_and_duplicate() {
    let mut grid = HomeGrid::new();
    grid.place_ship(ShipKind::Carrier, at("A1"), Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        grid.place_ship(ShipKind::Battleship, at("C1"), Orientation::Vertical),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(
        grid.place_ship(ShipKind::Carrier, at("A5"), Orientation::Horizontal),
        Err(BoardError::ShipAlreadyPlaced)
    );
    assert!(!grid.is_fully_placed());
}

#[test]
fn test_validate_placement() {
    let mut grid = HomeGrid::new();
    let mut fleet = Fleet::new();
    assert!(grid.validate_placement(at("A1"), 5, Orientation::Horizontal));
    assert!(!grid.validate_placement(at("G1"), 5, Orientation::Horizontal));
    assert!(!grid.validate_placement(at("A1"), 0, Orientation::Horizontal));

    // A resolved cell is no longer water
    grid.receive_shot(&mut fleet, at("C1")).unwrap();
    assert!(!grid.validate_placement(at("A1"), 5, Orientation::Horizontal));
    assert!(grid.validate_placement(at("A2"), 5, Orientation::Horizontal));
}

#[test]
fn test_random_fleet_placement() {
    let mut grid = HomeGrid::new();
    let mut rng = SmallRng::seed_from_u64(42);
    grid.place_fleet_randomly(&mut rng).unwrap();
    assert!(grid.is_fully_placed());

    let revealed = grid.snapshot(true);
    let segments = Coordinate::all()
        .filter(|&c| matches!(revealed.get(c), Cell::ShipSegment(_)))
        .count();
    let expected: usize = FLEET.iter().map(|k| k.size()).sum();
    assert_eq!(segments, expected);

    for kind in FLEET {
        let cells = Coordinate::all()
            .filter(|&c| revealed.get(c) == Cell::ShipSegment(kind))
            .count();
        assert_eq!(cells, kind.size());
    }

    let hidden = grid.snapshot(false);
    assert!(Coordinate::all().all(|c| hidden.get(c) == Cell::Water));
}

#[test]
fn test_random_placement_seeded_is_reproducible() {
    let mut a = HomeGrid::new();
    let mut b = HomeGrid::new();
    a.place_fleet_randomly(&mut SmallRng::seed_from_u64(7)).unwrap();
    b.place_fleet_randomly(&mut SmallRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_intact_segment_ignores_hits() {
    let mut grid = HomeGrid::new();
    let mut fleet = Fleet::new();
    grid.place_ship(ShipKind::Submarine, at("A1"), Orientation::Horizontal)
        .unwrap();
    let area = Footprint::square(at("A1"), 2);
    assert!(grid.has_intact_segment(&area).unwrap());

    grid.receive_shot(&mut fleet, at("A1")).unwrap();
    assert!(grid.has_intact_segment(&area).unwrap());
    grid.receive_shot(&mut fleet, at("B1")).unwrap();
    assert!(!grid.has_intact_segment(&area).unwrap());

    let far = Footprint::square(at("I9"), 2);
    assert!(!grid.has_intact_segment(&far).unwrap());
}

#[test]
fn test_snapshot_shows_hits_and_misses() {
    let mut grid = HomeGrid::new();
    let mut fleet = Fleet::new();
    grid.place_ship(ShipKind::Destroyer, at("E5"), Orientation::Vertical)
        .unwrap();
    grid.receive_shot(&mut fleet, at("E6")).unwrap();
    grid.receive_shot(&mut fleet, at("F6")).unwrap();

    let view = grid.snapshot(false);
    assert_eq!(view.get(at("E6")), Cell::Hit);
    assert_eq!(view.get(at("F6")), Cell::Miss);
    assert_eq!(view.get(at("E5")), Cell::Water);
    assert_eq!(view.rows.len(), GRID_SIZE);
}
