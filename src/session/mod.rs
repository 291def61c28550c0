//! Session layer: one controller per game, sessions by explicit ID.
//!
//! The controller is the only component that mutates held state, and it
//! does so by wholesale replacement: the rules return a successor state and
//! the controller installs it. Everything above this layer (rendering,
//! input collection, statistics) belongs to the excluded presentation
//! layer; everything below it (`Rules`) is pure.

pub mod controller;
pub mod manager;

pub use controller::{ParticipantBinding, TurnController};
pub use manager::{SessionId, SessionManager};
