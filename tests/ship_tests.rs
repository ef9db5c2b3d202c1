use battleships::{Grid, Orientation, Ship};

#[test]
fn test_cells_match_size_and_are_contiguous() {
    let ship = Ship::new(2, 3, 4, Orientation::Horizontal, "Battleship");
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells.len(), ship.size());
    assert_eq!(cells, vec![(2, 3), (3, 3), (4, 3), (5, 3)]);

    let ship = Ship::new(2, 3, 3, Orientation::Vertical, "");
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells.len(), ship.size());
    assert_eq!(cells, vec![(2, 3), (2, 4), (2, 5)]);
}

#[test]
fn test_cells_colinear() {
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        let ship = Ship::new(4, 4, 5, orientation, "Aircraft Carrier");
        let cells: Vec<_> = ship.cells().collect();
        let same_row = cells.windows(2).all(|w| w[0].1 == w[1].1);
        let same_col = cells.windows(2).all(|w| w[0].0 == w[1].0);
        assert!(same_row || same_col);
        // step of exactly one cell between neighbours
        for w in cells.windows(2) {
            assert_eq!((w[1].0 - w[0].0) + (w[1].1 - w[0].1), 1);
        }
    }
}

#[test]
fn test_destroyed_requires_every_cell() {
    let ship = Ship::new(0, 0, 2, Orientation::Horizontal, "Patrol Boat");
    let mut revealed = Grid::new(10, 10, false).unwrap();
    assert!(!ship.destroyed(&revealed));
    revealed.set(0, 0, true).unwrap();
    assert!(!ship.destroyed(&revealed));
    revealed.set(1, 0, true).unwrap();
    assert!(ship.destroyed(&revealed));
}

#[test]
fn test_destroyed_ignores_unrelated_cells() {
    let ship = Ship::new(5, 5, 2, Orientation::Vertical, "");
    let mut revealed = Grid::new(10, 10, false).unwrap();
    for col in 0..10 {
        revealed.set(col, 0, true).unwrap();
    }
    assert!(!ship.destroyed(&revealed));
    revealed.set(5, 5, true).unwrap();
    revealed.set(5, 6, true).unwrap();
    assert!(ship.destroyed(&revealed));
}

#[test]
fn test_rotate_flips_orientation() {
    let mut ship = Ship::new(0, 0, 3, Orientation::Horizontal, "Submarine");
    ship.rotate();
    assert_eq!(ship.orientation(), Orientation::Vertical);
    ship.rotate();
    assert_eq!(ship.orientation(), Orientation::Horizontal);
}

#[test]
fn test_out_of_bounds_origin_is_representable() {
    let ship = Ship::new(0, -1, 2, Orientation::Vertical, "");
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(0, -1), (0, 0)]);
    // a negative cell can never be marked revealed
    let revealed = Grid::new(10, 10, true).unwrap();
    assert!(!ship.destroyed(&revealed));
}
