//! Core types: participants, grid geometry, RNG, and move errors.
//!
//! This module contains the game-agnostic building blocks. Games build their
//! state and moves out of these; nothing in here knows about any particular
//! game's rules.

pub mod error;
pub mod grid;
pub mod participant;
pub mod rng;

pub use error::{IllegalMoveReason, MoveError};
pub use grid::{Coord, Direction, GridSize};
pub use participant::ParticipantId;
pub use rng::{GameRng, GameRngState};
