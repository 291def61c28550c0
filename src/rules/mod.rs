//! Rules engine traits for game implementations.
//!
//! Games implement [`Rules`] to define:
//! - The deterministic initial state
//! - Which moves are legal in a given state
//! - How a move transforms state, including terminal detection
//!
//! The session layer calls into `Rules` but never interprets game-specific
//! concepts directly.

pub mod engine;

pub use engine::{GameState, Outcome, Rules};
