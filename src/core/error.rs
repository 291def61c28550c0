//! Move rejection errors.
//!
//! Every failure here is an expected, recoverable caller mistake, not a
//! system fault. A rejected move never modifies session state: the caller
//! can re-prompt (`IllegalMove`, `NotYourTurn`) or reset (`GameOver`) and
//! continue with the exact state it had before the call.

use serde::{Deserialize, Serialize};

use super::grid::Coord;
use super::participant::ParticipantId;

/// Why a proposed move is illegal against the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IllegalMoveReason {
    /// The target cell is already occupied.
    CellOccupied(Coord),
    /// The target cell is outside the board.
    OutOfBounds(Coord),
    /// The move reverses the current heading 180 degrees.
    ReversesHeading,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::CellOccupied(coord) => {
                write!(f, "cell {} is already occupied", coord)
            }
            IllegalMoveReason::OutOfBounds(coord) => {
                write!(f, "cell {} is out of bounds", coord)
            }
            IllegalMoveReason::ReversesHeading => {
                write!(f, "direction reverses the current heading")
            }
        }
    }
}

/// A move was rejected. The session state is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum MoveError {
    /// The move fails the rules' legality check; re-prompt the participant.
    #[error("illegal move: {0}")]
    IllegalMove(IllegalMoveReason),

    /// The submitting participant is not the active participant.
    #[error("not your turn: active participant is {active}")]
    NotYourTurn {
        /// Whose turn it actually is.
        active: ParticipantId,
    },

    /// The game has reached a terminal state; only `reset()` recovers.
    #[error("game is over; reset the session to continue")]
    GameOver,
}
