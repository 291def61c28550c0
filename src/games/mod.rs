//! Built-in games.
//!
//! Three small games that exercise every corner of the core:
//! - `tictactoe`: grid placement, N-in-a-row win scan, draw detection
//! - `snake`: direction moves, growth, collisions, seeded food placement
//! - `rps`: one-round rock-paper-scissors, serialized through the turn order
//!
//! Each game is a `Rules` implementation plus its state type; none of them
//! know about sessions, agents, or each other.

pub mod rps;
pub mod snake;
pub mod tictactoe;

pub use rps::{RpsRules, RpsState, Shape};
pub use snake::{SnakeRules, SnakeState};
pub use tictactoe::{TicTacToeRules, TicTacToeState};
