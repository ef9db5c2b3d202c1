//! Game board state: ship placements, the arrangement index and the
//! revealed-cell history for one player.

use core::fmt;

use crate::common::{BoardError, Placement, ShipId, StrikeOutcome};
use crate::grid::Grid;
use crate::ship::Ship;

/// One player's board.
///
/// The arrangement grid and the ship list always agree: a cell maps to ship
/// `id` iff `ships[id]` covers that cell. The revealed grid is monotonic;
/// cells flip `false` to `true` exactly once per game.
#[derive(Clone)]
pub struct Board {
    ships: Vec<Ship>,
    arrangement: Grid<Option<ShipId>>,
    revealed: Grid<bool>,
    hidden: bool,
    locked: bool,
}

impl Board {
    /// Create an empty board. Fails only on zero-sized dimensions; whether a
    /// fleet fits is checked at layout/game setup.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Board {
            ships: Vec::new(),
            arrangement: Grid::new(width, height, None)?,
            revealed: Grid::new(width, height, false)?,
            hidden: false,
            locked: false,
        })
    }

    /// Board width in cells.
    pub fn width(&self) -> usize {
        self.arrangement.width()
    }

    /// Board height in cells.
    pub fn height(&self) -> usize {
        self.arrangement.height()
    }

    /// The placed ships, indexed by [`ShipId`].
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Cell-to-ship occupancy index.
    pub fn arrangement(&self) -> &Grid<Option<ShipId>> {
        &self.arrangement
    }

    /// Per-cell strike history.
    pub fn revealed(&self) -> &Grid<bool> {
        &self.revealed
    }

    /// True while this board's ships should not be shown (hot-seat handover).
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Freeze the layout; placement mutations are rejected afterwards.
    pub(crate) fn lock_layout(&mut self) {
        self.locked = true;
    }

    /// True once a game has begun and the layout is frozen.
    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Validate a prospective ship position against bounds and occupancy.
    ///
    /// Scans the ship's cells in order and reports the first failure:
    /// out-of-bounds before overlap when a single cell violates both. Either
    /// failure is fatal to the placement; the distinction is for diagnostics.
    pub fn check_position(&self, ship: &Ship) -> Placement {
        for (col, row) in ship.cells() {
            if !self.arrangement.contains(col, row) {
                return Placement::OutOfBounds;
            }
            if let Ok(Some(_)) = self.arrangement.get(col as usize, row as usize) {
                return Placement::Overlap;
            }
        }
        Placement::Valid
    }

    /// Place a ship, committing it into the arrangement. Atomic: nothing is
    /// mutated when the position is invalid or the layout is locked.
    pub fn place(&mut self, ship: Ship) -> Result<ShipId, BoardError> {
        if self.locked {
            return Err(BoardError::LayoutLocked);
        }
        match self.check_position(&ship) {
            Placement::OutOfBounds => return Err(BoardError::OutOfBounds),
            Placement::Overlap => return Err(BoardError::Overlap),
            Placement::Valid => {}
        }
        let id = self.ships.len();
        for (col, row) in ship.cells() {
            self.arrangement.set(col as usize, row as usize, Some(id))?;
        }
        self.ships.push(ship);
        Ok(id)
    }

    /// Un-place a ship (pick it back up), clearing its arrangement cells.
    /// Returns the ship so the caller can move and re-place it.
    pub fn remove(&mut self, id: ShipId) -> Result<Ship, BoardError> {
        if self.locked {
            return Err(BoardError::LayoutLocked);
        }
        if id >= self.ships.len() {
            return Err(BoardError::UnknownShip);
        }
        let ship = self.ships.remove(id);
        for (col, row) in ship.cells() {
            self.arrangement.set(col as usize, row as usize, None)?;
        }
        // ids above the removed ship shift down by one
        for (col, row) in self.arrangement.coords().collect::<Vec<_>>() {
            if let Some(owner) = self.arrangement.get(col, row)? {
                if owner > id {
                    self.arrangement.set(col, row, Some(owner - 1))?;
                }
            }
        }
        Ok(ship)
    }

    /// The ship occupying (col, row), if any.
    pub fn ship_at(&self, col: usize, row: usize) -> Result<Option<ShipId>, BoardError> {
        Ok(self.arrangement.get(col, row)?)
    }

    /// Strike a cell: mark it revealed and resolve hit/sink.
    ///
    /// Re-striking a revealed cell is rejected before any mutation.
    pub fn strike(&mut self, col: usize, row: usize) -> Result<StrikeOutcome, BoardError> {
        if self.revealed.get(col, row)? {
            return Err(BoardError::AlreadyRevealed);
        }
        self.revealed.set(col, row, true)?;
        match self.arrangement.get(col, row)? {
            Some(id) => {
                if self.ships[id].destroyed(&self.revealed) {
                    Ok(StrikeOutcome::Sink(id))
                } else {
                    Ok(StrikeOutcome::Hit(id))
                }
            }
            None => Ok(StrikeOutcome::Miss),
        }
    }

    /// True when the given ship has every cell revealed.
    pub fn is_destroyed(&self, id: ShipId) -> Result<bool, BoardError> {
        self.ships
            .get(id)
            .map(|s| s.destroyed(&self.revealed))
            .ok_or(BoardError::UnknownShip)
    }

    /// True when every placed ship is destroyed.
    pub fn all_destroyed(&self) -> bool {
        self.ships.iter().all(|s| s.destroyed(&self.revealed))
    }
}

impl fmt::Display for Board {
    /// Text rendering for CLI output. `#` sunk, `X` hit, `o` revealed empty,
    /// `S` unstruck ship cell (suppressed while the board is hidden),
    /// `.` unknown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.width() {
            write!(f, " {}", (b'A' + col as u8) as char)?;
        }
        writeln!(f)?;
        for row in 0..self.height() {
            write!(f, "{:2} ", row + 1)?;
            for col in 0..self.width() {
                let revealed = self.revealed.get(col, row).unwrap_or(false);
                let owner = self.arrangement.get(col, row).unwrap_or(None);
                let glyph = match (revealed, owner) {
                    (true, Some(id)) if self.ships[id].destroyed(&self.revealed) => '#',
                    (true, Some(_)) => 'X',
                    (true, None) => 'o',
                    (false, Some(_)) if !self.hidden => 'S',
                    (false, _) => '.',
                };
                write!(f, " {}", glyph)?;
            }
            if row + 1 < self.height() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ {}x{}, {} ships, {} revealed, hidden: {}, locked: {} }}",
            self.width(),
            self.height(),
            self.ships.len(),
            self.revealed.count_set(),
            self.hidden,
            self.locked,
        )?;
        writeln!(f, "{}", self)
    }
}
