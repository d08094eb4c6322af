use broadside::{Arsenal, Unlocks, Weapon, WeaponState};

#[test]
fn test_starts_locked() {
    let arsenal = Arsenal::new();
    assert_eq!(arsenal.state(Weapon::Artillery), WeaponState::Locked);
    assert_eq!(arsenal.state(Weapon::Torpedo), WeaponState::Locked);
    assert!(!arsenal.is_available(Weapon::Artillery));
}

#[test]
fn test_artillery_cycle() {
    let mut arsenal = Arsenal::new();
    let unlocks = arsenal.on_ship_sunk(3);
    assert_eq!(
        unlocks,
        Unlocks {
            artillery: true,
            torpedo: false
        }
    );
    assert_eq!(arsenal.state(Weapon::Artillery), WeaponState::PendingNextTurn);

    // A second sinking while pending changes nothing
    assert_eq!(arsenal.on_ship_sunk(2), Unlocks::default());

    arsenal.begin_turn();
    assert!(arsenal.is_available(Weapon::Artillery));

    // Nor does one while available
    assert!(!arsenal.on_ship_sunk(2).artillery);
    assert!(arsenal.is_available(Weapon::Artillery));

    arsenal.spend(Weapon::Artillery);
    assert_eq!(arsenal.state(Weapon::Artillery), WeaponState::Locked);

    // A fresh sinking re-arms it
    assert!(arsenal.on_ship_sunk(2).artillery);
}

#[test]
fn test_torpedo_needs_last_ship() {
    let mut arsenal = Arsenal::new();
    assert!(!arsenal.on_ship_sunk(2).torpedo);
    assert_eq!(arsenal.state(Weapon::Torpedo), WeaponState::Locked);

    let unlocks = arsenal.on_ship_sunk(1);
    assert!(unlocks.torpedo);
    assert!(!unlocks.artillery);
    assert_eq!(arsenal.state(Weapon::Torpedo), WeaponState::PendingNextTurn);

    arsenal.begin_turn();
    assert!(arsenal.is_available(Weapon::Torpedo));
    arsenal.spend(Weapon::Torpedo);
    assert!(!arsenal.is_available(Weapon::Torpedo));
    assert!(arsenal.is_available(Weapon::Artillery));
}

#[test]
fn test_begin_turn_leaves_locked_alone() {
    let mut arsenal = Arsenal::new();
    arsenal.begin_turn();
    assert_eq!(arsenal, Arsenal::new());
}
