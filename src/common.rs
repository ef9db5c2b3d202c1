//! Common types: strike/placement outcomes and board errors.

use core::fmt;

use crate::grid::GridError;

/// Identifier of a placed ship on its board.
pub type ShipId = usize;

/// Result of a strike at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeOutcome {
    /// Strike missed all ships.
    Miss,
    /// Strike hit a ship that still has unstruck cells.
    Hit(ShipId),
    /// Strike revealed the last cell of a ship.
    Sink(ShipId),
}

impl StrikeOutcome {
    /// True for hits and sinks alike.
    pub fn is_hit(&self) -> bool {
        !matches!(self, StrikeOutcome::Miss)
    }
}

/// Outcome of validating a prospective ship position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Position is in bounds and free.
    Valid,
    /// At least one cell lies outside the board.
    OutOfBounds,
    /// At least one cell is already owned by another ship.
    Overlap,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying grid error (invalid size or index).
    Grid(GridError),
    /// Ship placement is out of bounds.
    OutOfBounds,
    /// Ship placement overlaps another ship.
    Overlap,
    /// Ship id does not refer to a placed ship.
    UnknownShip,
    /// Cell was already struck; re-striking is not a legal move.
    AlreadyRevealed,
    /// Layout is frozen; ships cannot be placed or removed mid-game.
    LayoutLocked,
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::Grid(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Grid(e) => write!(f, "Grid error: {}", e),
            BoardError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::Overlap => write!(f, "Ship placement overlaps another ship"),
            BoardError::UnknownShip => write!(f, "No placed ship with that id"),
            BoardError::AlreadyRevealed => write!(f, "Cell was already struck"),
            BoardError::LayoutLocked => write!(f, "Layout is frozen once a game begins"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Fatal setup errors: the requested game cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board dimensions are too small for the fleet.
    BoardTooSmall { width: usize, height: usize },
    /// Random layout generation exhausted its retry budget; the fleet very
    /// likely cannot fit the board.
    LayoutExhausted { ship: String },
    /// A participating board has no ships placed.
    EmptyFleet { player: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardTooSmall { width, height } => {
                write!(f, "Board {}x{} is too small for the fleet", width, height)
            }
            ConfigError::LayoutExhausted { ship } => {
                write!(f, "Could not find a valid position for ship \"{}\"", ship)
            }
            ConfigError::EmptyFleet { player } => {
                write!(f, "Player {} has no ships placed", player + 1)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
