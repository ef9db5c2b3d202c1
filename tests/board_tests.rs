use battleships::{
    Board, BoardError, Orientation, Placement, Ship, StrikeOutcome,
};

fn board_with_patrol_boat() -> Board {
    let mut board = Board::new(10, 10).unwrap();
    board
        .place(Ship::new(4, 0, 2, Orientation::Horizontal, "Patrol Boat"))
        .unwrap();
    board
}

#[test]
fn test_check_position_scenarios() {
    // end-to-end validator scenario: a size-2 ship at (4,0) horizontal
    let board = board_with_patrol_boat();

    assert_eq!(
        board.check_position(&Ship::new(0, 0, 4, Orientation::Horizontal, "")),
        Placement::Valid
    );
    // overlaps the patrol boat at column 4
    assert_eq!(
        board.check_position(&Ship::new(3, 0, 2, Orientation::Horizontal, "")),
        Placement::Overlap
    );
    assert_eq!(
        board.check_position(&Ship::new(0, -1, 2, Orientation::Vertical, "")),
        Placement::OutOfBounds
    );
    assert_eq!(
        board.check_position(&Ship::new(-1, 0, 2, Orientation::Horizontal, "")),
        Placement::OutOfBounds
    );
    assert_eq!(
        board.check_position(&Ship::new(3, 0, 20, Orientation::Vertical, "")),
        Placement::OutOfBounds
    );
}

#[test]
fn test_bounds_check_takes_precedence_over_overlap() {
    // runs off the right edge while also crossing the patrol boat
    let board = board_with_patrol_boat();
    let ship = Ship::new(3, 0, 20, Orientation::Horizontal, "");
    assert_eq!(board.check_position(&ship), Placement::OutOfBounds);
}

#[test]
fn test_place_rejects_without_mutation() {
    let mut board = board_with_patrol_boat();
    let err = board
        .place(Ship::new(3, 0, 2, Orientation::Horizontal, ""))
        .unwrap_err();
    assert_eq!(err, BoardError::Overlap);
    assert_eq!(board.ships().len(), 1);
    // the free cell of the rejected ship is untouched
    assert_eq!(board.ship_at(3, 0).unwrap(), None);
}

#[test]
fn test_arrangement_agrees_with_ships() {
    let mut board = Board::new(10, 10).unwrap();
    let a = board
        .place(Ship::new(0, 0, 3, Orientation::Vertical, "Submarine"))
        .unwrap();
    let b = board
        .place(Ship::new(5, 5, 4, Orientation::Horizontal, "Battleship"))
        .unwrap();

    for (ship, id) in board.ships().iter().zip([a, b]) {
        for (col, row) in ship.cells() {
            assert_eq!(board.ship_at(col as usize, row as usize).unwrap(), Some(id));
        }
    }
    assert_eq!(board.ship_at(9, 9).unwrap(), None);
}

#[test]
fn test_remove_restores_cells_and_reindexes() {
    let mut board = Board::new(10, 10).unwrap();
    let first = board
        .place(Ship::new(0, 0, 2, Orientation::Horizontal, "Patrol Boat"))
        .unwrap();
    board
        .place(Ship::new(0, 5, 3, Orientation::Horizontal, "Destroyer"))
        .unwrap();

    let picked = board.remove(first).unwrap();
    assert_eq!(picked.name(), "Patrol Boat");
    assert_eq!(board.ship_at(0, 0).unwrap(), None);
    assert_eq!(board.ship_at(1, 0).unwrap(), None);

    // remaining ship's id shifted down and still resolves
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.ship_at(0, 5).unwrap(), Some(0));
    assert_eq!(board.ships()[0].name(), "Destroyer");

    assert_eq!(board.remove(5).unwrap_err(), BoardError::UnknownShip);
}

#[test]
fn test_strike_hit_sink_and_miss() {
    let mut board = board_with_patrol_boat();

    assert_eq!(board.strike(0, 0).unwrap(), StrikeOutcome::Miss);
    assert_eq!(board.strike(4, 0).unwrap(), StrikeOutcome::Hit(0));
    assert!(!board.is_destroyed(0).unwrap());
    assert_eq!(board.strike(5, 0).unwrap(), StrikeOutcome::Sink(0));
    assert!(board.is_destroyed(0).unwrap());
    assert!(board.all_destroyed());
}

#[test]
fn test_strike_rejects_revealed_cell() {
    let mut board = board_with_patrol_boat();
    board.strike(4, 0).unwrap();
    assert_eq!(board.strike(4, 0).unwrap_err(), BoardError::AlreadyRevealed);
    // history unchanged: exactly one revealed cell
    assert_eq!(board.revealed().count_set(), 1);
}

#[test]
fn test_strike_out_of_bounds_is_rejected() {
    let mut board = board_with_patrol_boat();
    assert!(matches!(
        board.strike(10, 0).unwrap_err(),
        BoardError::Grid(_)
    ));
    assert_eq!(board.revealed().count_set(), 0);
}

#[test]
fn test_display_marks_unstruck_ship_cells() {
    let mut board = board_with_patrol_boat();
    board.strike(4, 0).unwrap();
    board.strike(0, 0).unwrap();
    let shown = format!("{}", board);
    assert!(shown.contains('S'), "unstruck ship cell visible");
    assert!(shown.contains('X'), "hit marked");
    assert!(shown.contains('o'), "revealed water marked");
}
