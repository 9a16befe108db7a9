//! Turn order and end-of-game rules on top of a packed board.
//!
//! The board itself accepts any legal placement from either player, even
//! after a line is complete. A [`Session`] is the referee: it only lets the
//! player to move place a mark, flips the turn after every accepted move,
//! and refuses further moves once someone has won or the board is full.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{BoardError, PackedBoard, Player};

/// How a finished game ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {player} wins!"),
            Outcome::Draw => f.write_str("Draw."),
        }
    }
}

/// Where a session stands.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Phase {
    AwaitingMove(Player),
    Finished(Outcome),
}

/// Errors returned by [`Session::play`] and [`Session::play_as`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("game is over: {0}")]
    GameOver(Outcome),

    #[error("it is player {expected}'s turn, not player {got}'s")]
    WrongPlayer { expected: Player, got: Player },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A game in progress on board `B`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Session<B: PackedBoard> {
    board: B,
    phase: Phase,
}

impl<B: PackedBoard> Session<B> {
    /// Start refereeing `board`. A board that is already won or full
    /// starts out finished.
    pub fn new(board: B) -> Session<B> {
        let phase = Self::judge(&board).unwrap_or(Phase::AwaitingMove(board.current_player()));
        Session { board, phase }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player to move, or None once finished.
    pub fn to_move(&self) -> Option<Player> {
        match self.phase {
            Phase::AwaitingMove(player) => Some(player),
            Phase::Finished(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::AwaitingMove(_) => None,
            Phase::Finished(outcome) => Some(outcome),
        }
    }

    /// Place the current player's mark at (x, y).
    ///
    /// On error neither the board nor the phase changes.
    pub fn play(&mut self, x: i32, y: i32) -> Result<Phase, SessionError> {
        let player = match self.phase {
            Phase::AwaitingMove(player) => player,
            Phase::Finished(outcome) => return Err(SessionError::GameOver(outcome)),
        };
        self.place(player, x, y)
    }

    /// Like [`Session::play`], but rejects a move by anyone other than the
    /// player to move.
    pub fn play_as(&mut self, player: Player, x: i32, y: i32) -> Result<Phase, SessionError> {
        match self.phase {
            Phase::Finished(outcome) => Err(SessionError::GameOver(outcome)),
            Phase::AwaitingMove(expected) if expected != player => {
                Err(SessionError::WrongPlayer { expected, got: player })
            }
            Phase::AwaitingMove(_) => self.place(player, x, y),
        }
    }

    fn place(&mut self, player: Player, x: i32, y: i32) -> Result<Phase, SessionError> {
        self.board.set(x, y, player)?;
        debug!(x, y, %player, "move accepted");

        self.phase = match Self::judge(&self.board) {
            Some(finished) => {
                info!(?finished, "game finished");
                finished
            }
            None => {
                self.board.toggle_turn();
                Phase::AwaitingMove(self.board.current_player())
            }
        };
        Ok(self.phase)
    }

    /// Finished phase for a won or full board.
    fn judge(board: &B) -> Option<Phase> {
        if let Some(winner) = board.winner().player() {
            Some(Phase::Finished(Outcome::Winner(winner)))
        } else if board.is_full() {
            Some(Phase::Finished(Outcome::Draw))
        } else {
            None
        }
    }
}

impl<B: PackedBoard + Default> Default for Session<B> {
    fn default() -> Self {
        Session::new(B::default())
    }
}
