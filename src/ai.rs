//! "Opportunity" targeting heuristic for the computer opponent.
//!
//! For every revealed cell that still holds part of a live ship, count the
//! ship placements consistent with everything learned so far that would pass
//! through each cell, and fire at the cell touched by the most placements.
//! This approximates a Bayesian occupancy estimate without enumerating full
//! fleet arrangements, and is cheap enough (O(ships × board area)) to
//! recompute from scratch on every move.

use rand::Rng;

use crate::board::Board;
use crate::grid::Grid;

/// Compute the priority grid for the next strike against `board`.
///
/// Unrevealed cells accumulate one point per admissible ship window passing
/// through them around each live revealed ship cell; revealed cells are then
/// forced to -1 so they can never be re-targeted. An all-zero interior (no
/// exposed ships) degenerates to uniform random fire, which is the intended
/// fallback rather than an error.
pub fn priority_grid(board: &Board) -> Grid<i32> {
    let (width, height) = (board.width(), board.height());
    let mut priority =
        Grid::new(width, height, 0i32).expect("board dimensions are already validated");

    for (col, row, revealed) in board.revealed().iter() {
        if !revealed {
            continue;
        }
        if let Ok(Some(id)) = board.ship_at(col, row) {
            if !board.ships()[id].destroyed(board.revealed()) {
                fit_ships_around(board, &mut priority, col, row);
            }
        }
    }

    for (col, row, revealed) in board.revealed().iter() {
        if revealed {
            let _ = priority.set(col, row, -1);
        }
    }

    priority
}

/// Score every in-bounds window of each live ship that passes through
/// (`col`, `row`), along both axes independently.
fn fit_ships_around(board: &Board, priority: &mut Grid<i32>, col: usize, row: usize) {
    let (width, height) = (board.width(), board.height());

    for ship in board.ships() {
        if ship.destroyed(board.revealed()) {
            continue;
        }
        let size = ship.size();

        // Horizontal windows containing (col, row).
        if size <= width {
            let first = col.saturating_sub(size - 1);
            let last = col.min(width - size);
            for start in first..=last {
                if window_admissible(board, (start..start + size).map(|c| (c, row))) {
                    for c in start..start + size {
                        bump(priority, c, row);
                    }
                }
            }
        }

        // Vertical windows containing (col, row).
        if size <= height {
            let first = row.saturating_sub(size - 1);
            let last = row.min(height - size);
            for start in first..=last {
                if window_admissible(board, (start..start + size).map(|r| (col, r))) {
                    for r in start..start + size {
                        bump(priority, col, r);
                    }
                }
            }
        }
    }
}

/// A window is admissible when none of its cells is revealed-and-empty.
/// Revealed cells that hold ship segments do not disqualify it; stacking
/// probability through discovered segments concentrates fire along a known
/// hit line.
fn window_admissible(
    board: &Board,
    cells: impl Iterator<Item = (usize, usize)>,
) -> bool {
    for (col, row) in cells {
        let revealed = board.revealed().get(col, row).unwrap_or(false);
        let occupied = matches!(board.ship_at(col, row), Ok(Some(_)));
        if revealed && !occupied {
            return false;
        }
    }
    true
}

#[inline]
fn bump(priority: &mut Grid<i32>, col: usize, row: usize) {
    if let Ok(v) = priority.get(col, row) {
        let _ = priority.set(col, row, v + 1);
    }
}

/// Select the next cell to strike against `board`, or `None` when every cell
/// is already revealed (the game should be decided by then).
///
/// Ties at the maximum priority are broken uniformly at random, so a board
/// with no exposed ships gets uniform random fire across unrevealed cells.
pub fn select_move<R: Rng>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    if board.revealed().all_set() {
        return None;
    }

    let priority = priority_grid(board);

    let mut highest = i32::MIN;
    for (_, _, value) in priority.iter() {
        if value > highest {
            highest = value;
        }
    }
    if highest == -1 {
        return None;
    }

    let options: Vec<(usize, usize)> = priority
        .iter()
        .filter(|&(_, _, value)| value == highest)
        .map(|(col, row, _)| (col, row))
        .collect();
    Some(options[rng.random_range(0..options.len())])
}
