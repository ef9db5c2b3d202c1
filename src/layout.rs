//! Random fleet layout generation.

use rand::Rng;

use crate::board::Board;
use crate::common::{ConfigError, Placement, ShipId};
use crate::config::MIN_SIDE;
use crate::ship::{Orientation, Ship};

/// Retry budget per ship before layout generation is declared hopeless. With
/// the default fleet on any board of at least [`MIN_SIDE`]² this is never
/// approached; it exists so a misconfigured custom fleet fails instead of
/// spinning forever.
const MAX_ATTEMPTS: usize = 10_000;

/// Randomly place every ship of `fleet` onto `board`, committing each once a
/// valid position is found.
///
/// Ships are processed in fleet order. Each attempt samples a uniformly
/// random origin cell and orientation and asks the placement validator;
/// persistent failure is a fatal [`ConfigError`], not a hang.
pub fn generate_layout<R: Rng>(
    board: &mut Board,
    fleet: Vec<Ship>,
    rng: &mut R,
) -> Result<Vec<ShipId>, ConfigError> {
    debug_assert!(!board.locked(), "layout generation requires an unlocked board");
    let (width, height) = (board.width(), board.height());
    if width < MIN_SIDE || height < MIN_SIDE {
        return Err(ConfigError::BoardTooSmall { width, height });
    }

    let mut placed = Vec::with_capacity(fleet.len());
    for mut ship in fleet {
        let mut attempts = 0;
        loop {
            attempts += 1;
            if attempts > MAX_ATTEMPTS {
                return Err(ConfigError::LayoutExhausted {
                    ship: ship.name().to_owned(),
                });
            }
            ship.set_origin(
                rng.random_range(0..width) as i32,
                rng.random_range(0..height) as i32,
            );
            let orientation = orientation_sample(rng);
            if ship.orientation() != orientation {
                ship.rotate();
            }
            if board.check_position(&ship) == Placement::Valid {
                break;
            }
        }
        // the loop only exits on a validated position against an unlocked
        // board, so place cannot fail here
        let id = board
            .place(ship)
            .expect("validated placement must be accepted");
        placed.push(id);
    }
    Ok(placed)
}

fn orientation_sample<R: Rng>(rng: &mut R) -> Orientation {
    if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}
