//! Ship placement data and the on-demand destroyed check.

use core::fmt;

use crate::grid::Grid;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A vessel occupying a straight run of cells from its origin.
///
/// The origin is the left-most (horizontal) or upper-most (vertical) occupied
/// cell. Coordinates are signed so that a held ship dragged over the board
/// edge is representable; the placement validator decides whether the
/// position is legal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    origin_col: i32,
    origin_row: i32,
    size: usize,
    orientation: Orientation,
    name: String,
}

impl Ship {
    /// Create a ship at (`col`, `row`). The name may be empty for anonymous
    /// test ships.
    pub fn new(
        col: i32,
        row: i32,
        size: usize,
        orientation: Orientation,
        name: impl Into<String>,
    ) -> Self {
        Ship {
            origin_col: col,
            origin_row: row,
            size,
            orientation,
            name: name.into(),
        }
    }

    /// Origin of the ship (col, row).
    pub fn origin(&self) -> (i32, i32) {
        (self.origin_col, self.origin_row)
    }

    /// Move the ship's origin. Only meaningful while the ship is held
    /// (unplaced); the board never hands out mutable ships once placed.
    pub fn set_origin(&mut self, col: i32, row: i32) {
        self.origin_col = col;
        self.origin_row = row;
    }

    /// Length of the ship in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Flip the ship between horizontal and vertical.
    pub fn rotate(&mut self) {
        self.orientation = match self.orientation {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        };
    }

    /// Ship's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `size` cells this ship covers, in order from the origin.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.size as i32).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.origin_col + i, self.origin_row),
            Orientation::Vertical => (self.origin_col, self.origin_row + i),
        })
    }

    /// True when every cell of this ship has been struck. Recomputed on
    /// demand; cells outside the grid count as unstruck.
    pub fn destroyed(&self, revealed: &Grid<bool>) -> bool {
        self.cells().all(|(col, row)| {
            col >= 0
                && row >= 0
                && revealed.get(col as usize, row as usize).unwrap_or(false)
        })
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): ({}, {}) {:?}",
            if self.name.is_empty() { "<unnamed>" } else { &self.name },
            self.size,
            self.origin_col,
            self.origin_row,
            self.orientation,
        )
    }
}
