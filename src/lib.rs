mod ai;
mod board;
mod codec;
mod common;
mod config;
mod game;
mod grid;
mod layout;
mod logging;
mod ship;

pub use ai::{priority_grid, select_move};
pub use board::Board;
pub use codec::{decode_layout, encode_layout, DecodeError};
pub use common::{BoardError, ConfigError, Placement, ShipId, StrikeOutcome};
pub use config::{default_fleet, Rules, DEFAULT_HEIGHT, DEFAULT_WIDTH, FLEET_SIZE, MIN_SIDE};
pub use game::{ComputerReply, Game, GameError, Mode, Phase, StrikeReport};
pub use grid::{Grid, GridError};
pub use layout::generate_layout;
pub use logging::init_logging;
pub use ship::{Orientation, Ship};
