use battleships::{
    default_fleet, generate_layout, Board, ConfigError, Orientation, Ship, FLEET_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_default_fleet_catalog() {
    let fleet = default_fleet();
    assert_eq!(fleet.len(), FLEET_SIZE);
    let mut sizes: Vec<usize> = fleet.iter().map(|s| s.size()).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![2, 3, 3, 4, 5]);
    for name in [
        "Patrol Boat",
        "Submarine",
        "Destroyer",
        "Battleship",
        "Aircraft Carrier",
    ] {
        assert!(fleet.iter().any(|s| s.name() == name));
    }
}

#[test]
fn test_generate_layout_places_whole_fleet() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(10, 10).unwrap();
        let placed = generate_layout(&mut board, default_fleet(), &mut rng).unwrap();
        assert_eq!(placed.len(), FLEET_SIZE);

        // every ship in bounds, every occupied cell owned by exactly one ship
        let mut occupied = 0;
        for (id, ship) in board.ships().iter().enumerate() {
            for (col, row) in ship.cells() {
                assert!(col >= 0 && col < 10 && row >= 0 && row < 10);
                assert_eq!(board.ship_at(col as usize, row as usize).unwrap(), Some(id));
                occupied += 1;
            }
        }
        assert_eq!(occupied, 2 + 3 + 3 + 4 + 5);
    }
}

#[test]
fn test_generate_layout_on_minimum_board() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new(6, 6).unwrap();
    generate_layout(&mut board, default_fleet(), &mut rng).unwrap();
    assert_eq!(board.ships().len(), FLEET_SIZE);
}

#[test]
fn test_board_below_minimum_is_fatal() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new(5, 5).unwrap();
    assert_eq!(
        generate_layout(&mut board, default_fleet(), &mut rng).unwrap_err(),
        ConfigError::BoardTooSmall { width: 5, height: 5 }
    );
    assert!(board.ships().is_empty());
}

#[test]
fn test_unplaceable_fleet_errors_instead_of_hanging() {
    // a 7-long ship cannot fit a 6x6 board; the retry budget must trip
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new(6, 6).unwrap();
    let fleet = vec![Ship::new(0, 0, 7, Orientation::Horizontal, "Leviathan")];
    assert_eq!(
        generate_layout(&mut board, fleet, &mut rng).unwrap_err(),
        ConfigError::LayoutExhausted {
            ship: "Leviathan".to_owned()
        }
    );
}
