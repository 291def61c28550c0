//! # turncore
//!
//! A turn-based game core for small two-player grid and movement games.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Each game implements the [`Rules`] trait with
//!    side-effect-free validation and transition functions. Applying a move
//!    returns a *new* state; the input state is never mutated.
//!
//! 2. **One Controller Per Session**: A [`TurnController`] owns exactly one
//!    game's state and enforces turn order and the absorbing terminal state.
//!    Sessions are looked up by explicit [`SessionId`], never through
//!    ambient globals.
//!
//! 3. **Deterministic Randomness**: All randomness (food placement, random
//!    agents) flows through a seedable [`GameRng`]. Same seed, same game.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Per-turn snapshots clone cheaply via
//!   `im`, so callers can hold old states without copying boards.
//!
//! - **No I/O**: The core never logs, renders, or blocks. A presentation
//!   layer drives it through exactly three calls: `submit_move`, `reset`,
//!   `current_state`.
//!
//! ## Modules
//!
//! - `core`: Participants, grid geometry, RNG, move errors
//! - `rules`: The `Rules` trait, game state trait, outcomes
//! - `games`: Built-in games (tic-tac-toe, snake, rock-paper-scissors)
//! - `agent`: Scripted participants (uniform-random over legal moves)
//! - `session`: Turn controller and session manager

pub mod agent;
pub mod core;
pub mod games;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Coord, Direction, GameRng, GameRngState, GridSize, IllegalMoveReason, MoveError,
    ParticipantId,
};

pub use crate::rules::{GameState, Outcome, Rules};

pub use crate::games::{
    RpsRules, RpsState, Shape, SnakeRules, SnakeState, TicTacToeRules, TicTacToeState,
};

pub use crate::agent::{Agent, RandomAgent};

pub use crate::session::{ParticipantBinding, SessionId, SessionManager, TurnController};
