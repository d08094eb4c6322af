use broadside::combat;
use broadside::{
    parse_coordinate, Coordinate, Fleet, Footprint, HomeGrid, Line, ShotOutcome, Side, AREA_SPAN, FLEET, GRID_SIZE,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_side(seed: u64) -> Side {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut side = Side::new("defender", true);
    side.home_mut().place_fleet_randomly(&mut rng).unwrap();
    side
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fire_idempotent(seed in any::<u64>(), x in 0..GRID_SIZE, y in 0..GRID_SIZE) {
        let mut attacker = Side::new("attacker", true);
        let mut defender = random_side(seed);
        let c = Coordinate::new(x, y).unwrap();

        let first = combat::fire(&mut attacker, &mut defender, c).unwrap();
        prop_assert_ne!(first, ShotOutcome::AlreadyTargeted);
        let home_after = defender.home().clone();
        let tracking_after = *attacker.tracking();

        let second = combat::fire(&mut attacker, &mut defender, c).unwrap();
        prop_assert_eq!(second, ShotOutcome::AlreadyTargeted);
        prop_assert_eq!(defender.home(), &home_after);
        prop_assert_eq!(attacker.tracking(), &tracking_after);
    }

    #[test]
    fn footprints_stay_on_grid(x in 0..GRID_SIZE, y in 0..GRID_SIZE) {
        let anchor = Coordinate::new(x, y).unwrap();
        let area = Footprint::square(anchor, AREA_SPAN);
        let expected = AREA_SPAN.min(GRID_SIZE - x) * AREA_SPAN.min(GRID_SIZE - y);
        prop_assert_eq!(area.cell_count(), expected);
        prop_assert_eq!(area.cells().count(), expected);
        prop_assert_eq!(area.anchor(), anchor);
        for c in area.cells() {
            prop_assert!(c.x() < GRID_SIZE && c.y() < GRID_SIZE);
            prop_assert!(area.contains(c));
        }
        prop_assert_eq!(Line::row(y).unwrap().cells().count(), GRID_SIZE);
        prop_assert_eq!(Line::column(x).unwrap().cells().count(), GRID_SIZE);
    }

    #[test]
    fn coordinate_display_parses_back(x in 0..GRID_SIZE, y in 0..GRID_SIZE) {
        let c = Coordinate::new(x, y).unwrap();
        prop_assert_eq!(parse_coordinate(&c.to_string()).unwrap(), c);
        prop_assert_eq!(parse_coordinate(&c.to_string().to_lowercase()).unwrap(), c);
    }

    #[test]
    fn sunk_is_monotonic(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut fleet = Fleet::new();
        let mut was_sunk = [false; 4];
        for _ in 0..40 {
            let kind = FLEET[rng.random_range(0..FLEET.len())];
            fleet.register_hit(kind);
            for (i, ship) in fleet.ships().iter().enumerate() {
                prop_assert_eq!(ship.is_sunk(), ship.hits() >= ship.kind().size());
                prop_assert!(!was_sunk[i] || ship.is_sunk());
                was_sunk[i] = ship.is_sunk();
            }
        }
    }

    #[test]
    fn random_placement_never_overlaps(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = HomeGrid::new();
        grid.place_fleet_randomly(&mut rng).unwrap();
        let segments = grid
            .snapshot(true)
            .rows
            .iter()
            .flatten()
            .filter(|cell| matches!(cell, broadside::Cell::ShipSegment(_)))
            .count();
        prop_assert_eq!(segments, FLEET.iter().map(|k| k.size()).sum::<usize>());
    }
}
