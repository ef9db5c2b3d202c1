//! Turn/reveal state machine for the three play modes.
//!
//! A game owns both boards, processes one strike at a time synchronously and
//! decides hit/sink/win plus turn transfer. Mode differences:
//!
//! - `Single`: practice against one's own board, no turn transfer ever.
//! - `Computer`: the human is player 0 throughout; the computer's reply is
//!   selected and applied inline during turn resolution and is reported back
//!   in the [`StrikeReport`]. The computer never gets bonus strikes.
//! - `TwoPlayer`: hot-seat; a transferring turn parks the machine in
//!   [`Phase::AwaitingHandover`] with the striker's board hidden until the
//!   next player acknowledges.

use core::fmt;

use log::{debug, info};
use rand::Rng;

use crate::ai;
use crate::board::Board;
use crate::common::{BoardError, ConfigError, StrikeOutcome};
use crate::config::{default_fleet, Rules};
use crate::layout::generate_layout;

/// Play mode, fixed at game construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Single,
    Computer,
    TwoPlayer,
}

/// Where the state machine currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The active player may strike.
    AwaitingStrike,
    /// Two-player handover: the incoming player must acknowledge before any
    /// board is shown or struck.
    AwaitingHandover,
    /// Terminal; no strikes or handovers are accepted.
    Over,
}

/// The computer's inline reply to a human strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerReply {
    pub coord: (usize, usize),
    pub outcome: StrikeOutcome,
}

/// Everything that happened as a result of one call to
/// [`Game::attempt_strike`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrikeReport {
    pub coord: (usize, usize),
    pub outcome: StrikeOutcome,
    /// Present in computer mode when control passed to the computer.
    pub reply: Option<ComputerReply>,
}

/// Errors raised by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Underlying board rejection (out of bounds, already revealed, ...).
    Board(BoardError),
    /// A strike arrived while a two-player handover is pending.
    HandoverPending,
    /// Acknowledgement arrived with no handover pending.
    NoHandoverPending,
    /// The game is already decided.
    GameOver,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::HandoverPending => {
                write!(f, "Handover must be acknowledged before striking")
            }
            GameError::NoHandoverPending => write!(f, "No handover is pending"),
            GameError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for GameError {}

/// The turn/reveal state machine.
#[derive(Debug)]
pub struct Game {
    mode: Mode,
    rules: Rules,
    boards: [Board; 2],
    turn: usize,
    winner: Option<usize>,
    phase: Phase,
}

impl Game {
    /// Build a game from two fully placed boards. Layouts are frozen here;
    /// the boards reject placement mutations from now on.
    ///
    /// Rather than trusting the caller's confirm gating, the fleet presence
    /// of each participating board is re-checked: an empty fleet is a fatal
    /// setup error.
    pub fn new(mode: Mode, rules: Rules, mut boards: [Board; 2]) -> Result<Self, ConfigError> {
        if boards[0].ships().is_empty() {
            return Err(ConfigError::EmptyFleet { player: 0 });
        }
        if mode != Mode::Single && boards[1].ships().is_empty() {
            return Err(ConfigError::EmptyFleet { player: 1 });
        }
        for board in boards.iter_mut() {
            board.lock_layout();
        }
        if mode != Mode::Single {
            // the non-active defender's fleet stays hidden from the attacker
            boards[1].set_hidden(true);
        }
        Ok(Game {
            mode,
            rules,
            boards,
            turn: 0,
            winner: None,
            phase: Phase::AwaitingStrike,
        })
    }

    /// Build a computer-mode game: the human's placed board versus a freshly
    /// randomised computer board of the same dimensions.
    pub fn versus_computer<R: Rng>(
        player_board: Board,
        rules: Rules,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let (width, height) = (player_board.width(), player_board.height());
        let mut computer_board =
            Board::new(width, height).map_err(|_| ConfigError::BoardTooSmall { width, height })?;
        generate_layout(&mut computer_board, default_fleet(), rng)?;
        Game::new(Mode::Computer, rules, [player_board, computer_board])
    }

    /// Play mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Rule switches in force.
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Index of the active player (0 or 1).
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Current machine phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Winning player once the game is decided.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// A player's board.
    pub fn board(&self, player: usize) -> &Board {
        &self.boards[player]
    }

    /// Index of the board the active player strikes against. In single-board
    /// mode the player fires at their own board.
    pub fn defender(&self) -> usize {
        match self.mode {
            Mode::Single => self.turn,
            _ => 1 - self.turn,
        }
    }

    /// Process the active player's strike at (`col`, `row`) on the defending
    /// board, then apply the mode's turn-transfer policy.
    ///
    /// Striking a revealed cell, striking out of bounds, striking during a
    /// pending handover and striking a finished game are all rejected with
    /// nothing mutated.
    pub fn attempt_strike<R: Rng>(
        &mut self,
        rng: &mut R,
        col: usize,
        row: usize,
    ) -> Result<StrikeReport, GameError> {
        match self.phase {
            Phase::Over => return Err(GameError::GameOver),
            Phase::AwaitingHandover => return Err(GameError::HandoverPending),
            Phase::AwaitingStrike => {}
        }

        let defender = self.defender();
        let outcome = self.boards[defender].strike(col, row)?;

        if let StrikeOutcome::Sink(id) = outcome {
            info!(
                "player {} sank the {}",
                self.turn + 1,
                self.boards[defender].ships()[id].name()
            );
            if self.boards[defender].all_destroyed() {
                self.declare_winner(self.turn);
            }
        }

        let mut reply = None;
        if self.winner.is_none() {
            let transfer = match outcome {
                StrikeOutcome::Miss => true,
                StrikeOutcome::Hit(_) | StrikeOutcome::Sink(_) => !self.rules.bonus_turn_on_hit,
            };
            if transfer {
                reply = self.end_turn(rng)?;
            }
        }

        Ok(StrikeReport {
            coord: (col, row),
            outcome,
            reply,
        })
    }

    /// Two-player handover acknowledgement: the incoming player confirms the
    /// seat change, which flips the turn and unhides their own board.
    pub fn acknowledge_handover(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::AwaitingHandover {
            return Err(GameError::NoHandoverPending);
        }
        self.turn = 1 - self.turn;
        self.boards[self.turn].set_hidden(false);
        self.phase = Phase::AwaitingStrike;
        Ok(())
    }

    /// Apply the mode's transfer policy after a turn-ending strike.
    fn end_turn<R: Rng>(&mut self, rng: &mut R) -> Result<Option<ComputerReply>, GameError> {
        match self.mode {
            Mode::Single => Ok(None),
            Mode::Computer => {
                let Some((col, row)) = ai::select_move(&self.boards[0], rng) else {
                    return Ok(None);
                };
                let outcome = self.boards[0].strike(col, row)?;
                debug!("computer strikes ({}, {}): {:?}", col, row, outcome);
                if let StrikeOutcome::Sink(id) = outcome {
                    info!(
                        "computer sank the {}",
                        self.boards[0].ships()[id].name()
                    );
                    if self.boards[0].all_destroyed() {
                        self.declare_winner(1);
                    }
                }
                Ok(Some(ComputerReply {
                    coord: (col, row),
                    outcome,
                }))
            }
            Mode::TwoPlayer => {
                // park until the other player takes the seat; hide the
                // striker's fleet so it cannot be seen during the handover
                self.boards[self.turn].set_hidden(true);
                self.phase = Phase::AwaitingHandover;
                Ok(None)
            }
        }
    }

    fn declare_winner(&mut self, player: usize) {
        info!("all ships destroyed; player {} wins", player + 1);
        self.winner = Some(player);
        self.phase = Phase::Over;
        // end screen shows both fleets
        for board in self.boards.iter_mut() {
            board.set_hidden(false);
        }
    }
}
