//! Fixed game configuration: board dimensions, the fleet catalog and rules.

use crate::ship::{Orientation, Ship};

/// Default board width in cells.
pub const DEFAULT_WIDTH: usize = 10;
/// Default board height in cells.
pub const DEFAULT_HEIGHT: usize = 10;

/// Boards must be strictly larger than 5×5 for the default fleet to fit.
pub const MIN_SIDE: usize = 6;

/// Number of ships in the default fleet.
pub const FLEET_SIZE: usize = 5;

/// The default fleet, unplaced. Ships are returned in the order they are
/// handed to the player during setup; the layout generator processes them in
/// this same order.
pub fn default_fleet() -> Vec<Ship> {
    vec![
        Ship::new(0, 0, 2, Orientation::Horizontal, "Patrol Boat"),
        Ship::new(0, 1, 3, Orientation::Horizontal, "Submarine"),
        Ship::new(0, 2, 3, Orientation::Horizontal, "Destroyer"),
        Ship::new(0, 3, 4, Orientation::Horizontal, "Battleship"),
        Ship::new(0, 4, 5, Orientation::Horizontal, "Aircraft Carrier"),
    ]
}

/// Rule switches fixed at game construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Grant the attacker another strike immediately after a hit.
    pub bonus_turn_on_hit: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            bonus_turn_on_hit: true,
        }
    }
}
